use crate::error::DiceError;

/// Largest number of distinct sums a run may track.
pub const MAX_BUCKETS: u64 = 1 << 24;

/// Parameters of a single simulation run.
///
/// # Examples
///
/// ```
/// use dice_prob::config::RunConfig;
///
/// let config = RunConfig::default()
///     .with_dice(4, 6)
///     .with_samples(1000)
///     .with_discard_lowest(true);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Number of dice rolled per sample (default: 2)
    pub dice_count: u32,
    /// Faces per die (default: 6)
    pub side_count: u32,
    /// Number of samples drawn (default: 100000)
    pub sample_count: u64,
    /// Whether the lowest die of each roll is dropped (default: false)
    pub discard_lowest: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            dice_count: 2,
            side_count: 6,
            sample_count: 100_000,
            discard_lowest: false,
        }
    }
}

impl RunConfig {
    pub fn new(dice_count: u32, side_count: u32, sample_count: u64, discard_lowest: bool) -> Self {
        Self {
            dice_count,
            side_count,
            sample_count,
            discard_lowest,
        }
    }

    pub fn with_dice(mut self, dice_count: u32, side_count: u32) -> Self {
        self.dice_count = dice_count;
        self.side_count = side_count;
        self
    }

    pub fn with_samples(mut self, sample_count: u64) -> Self {
        self.sample_count = sample_count;
        self
    }

    pub fn with_discard_lowest(mut self, discard_lowest: bool) -> Self {
        self.discard_lowest = discard_lowest;
        self
    }

    /// Number of achievable sums, `kept * (sides - 1) + 1`.
    ///
    /// Meaningful only for configs with at least one die and two sides.
    pub fn bucket_count(&self) -> u64 {
        let kept = if self.discard_lowest { self.dice_count - 1 } else { self.dice_count };
        kept as u64 * (self.side_count as u64 - 1) + 1
    }

    /// Checks that the run can be simulated.
    pub fn validate(&self) -> Result<(), DiceError> {
        if self.dice_count == 0 {
            return Err(DiceError::NoDice);
        }
        if self.side_count < 2 {
            return Err(DiceError::TooFewSides(self.side_count));
        }
        if self.sample_count == 0 {
            return Err(DiceError::InsufficientSamples(self.sample_count));
        }
        if self.dice_count.checked_mul(self.side_count).is_none() {
            return Err(DiceError::SumOverflow {
                dice_count: self.dice_count,
                side_count: self.side_count,
            });
        }
        let buckets = self.bucket_count();
        if buckets > MAX_BUCKETS {
            return Err(DiceError::TooManyBuckets {
                buckets,
                limit: MAX_BUCKETS,
            });
        }
        Ok(())
    }
}

impl std::fmt::Display for RunConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}d{}", self.dice_count, self.side_count)?;
        if self.discard_lowest {
            write!(f, " (discarding lowest)")?;
        }
        Ok(())
    }
}
