use crate::random::RandomSource;

/// Rolls `count` dice with `sides` faces each, in roll order.
pub fn roll_dice<S: RandomSource>(source: &mut S, count: u32, sides: u32) -> Vec<u32> {
    (0..count).map(|_| source.int_in_range(1, sides)).collect()
}

/// Index of the lowest roll.
///
/// On ties, the first occurrence wins. Returns `None` for an empty slice.
pub fn lowest_index(rolls: &[u32]) -> Option<usize> {
    let mut lowest: Option<(usize, u32)> = None;
    for (i, &roll) in rolls.iter().enumerate() {
        match lowest {
            Some((_, min)) if roll >= min => {}
            _ => lowest = Some((i, roll)),
        }
    }
    lowest.map(|(i, _)| i)
}

/// Sum of `count` dice with `sides` faces each.
///
/// The result lies in `[count, count * sides]`.
pub fn roll_sum<S: RandomSource>(source: &mut S, count: u32, sides: u32) -> u32 {
    (0..count).map(|_| source.int_in_range(1, sides)).sum()
}

/// Sum of `count` dice with `sides` faces each, excluding the single lowest die.
///
/// When several dice tie for lowest, only the first one rolled is discarded.
/// The result lies in `[count - 1, (count - 1) * sides]`.
///
/// # Panics
///
/// Panics if `count == 0`.
pub fn roll_sum_discard_lowest<S: RandomSource>(source: &mut S, count: u32, sides: u32) -> u32 {
    assert!(count > 0, "Cannot discard the lowest of zero dice");

    let rolls = roll_dice(source, count, sides);
    let discarded = lowest_index(&rolls);
    rolls
        .iter()
        .enumerate()
        .filter(|&(i, _)| Some(i) != discarded)
        .map(|(_, &roll)| roll)
        .sum()
}
