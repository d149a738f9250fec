//! Monte Carlo sampling of dice sums.

use log::debug;

use crate::config::RunConfig;
use crate::dice::{roll_sum, roll_sum_discard_lowest};
use crate::error::DiceError;
use crate::histogram::Histogram;
use crate::random::RandomSource;

/// Smallest and largest achievable sum for the given dice.
///
/// ```text
/// keep all:       [n, n * s]
/// discard lowest: [n - 1, (n - 1) * s]
/// ```
///
/// # Panics
///
/// Panics if `discard_lowest` is set and `dice_count == 0`.
pub fn sum_bounds(dice_count: u32, side_count: u32, discard_lowest: bool) -> (u32, u32) {
    assert!(
        !discard_lowest || dice_count > 0,
        "Cannot discard the lowest of zero dice"
    );
    let kept = if discard_lowest { dice_count - 1 } else { dice_count };
    (kept, kept * side_count)
}

/// Rolls `config.sample_count` times and collects the sums into a histogram.
pub fn sample<S: RandomSource>(source: &mut S, config: &RunConfig) -> Result<Histogram, DiceError> {
    config.validate()?;

    let RunConfig {
        dice_count,
        side_count,
        sample_count,
        discard_lowest,
    } = *config;

    let (min, max) = sum_bounds(dice_count, side_count, discard_lowest);
    debug!("sample({}, samples = {}): range [{}, {}]", config, sample_count, min, max);

    let mut histogram = Histogram::new(min, max);
    for _ in 0..sample_count {
        let sum = if discard_lowest {
            roll_sum_discard_lowest(source, dice_count, side_count)
        } else {
            roll_sum(source, dice_count, side_count)
        };
        if !histogram.record(sum) {
            return Err(DiceError::BucketOutOfRange { value: sum, min, max });
        }
    }

    debug!("sample: recorded {} sums", histogram.total());
    Ok(histogram)
}
