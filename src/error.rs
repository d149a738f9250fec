use std::io;
use std::path::PathBuf;

/// Error type for dice simulations.
#[derive(Debug)]
pub enum DiceError {
    /// The dice count is zero.
    NoDice,
    /// Dice need at least two sides to be rolled.
    TooFewSides(u32),
    /// Not enough samples were requested (or drawn) for the operation.
    InsufficientSamples(u64),
    /// The largest achievable sum does not fit into `u32`.
    SumOverflow { dice_count: u32, side_count: u32 },
    /// The histogram for these dice would need more buckets than allowed.
    TooManyBuckets { buckets: u64, limit: u64 },
    /// A rolled sum fell outside the histogram range.
    BucketOutOfRange { value: u32, min: u32, max: u32 },
    /// File I/O error.
    Io { path: PathBuf, source: io::Error },
}

impl std::fmt::Display for DiceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiceError::NoDice => write!(f, "Dice count must be at least 1"),
            DiceError::TooFewSides(sides) => {
                write!(f, "Dice must have at least 2 sides, got {}", sides)
            }
            DiceError::InsufficientSamples(count) => {
                write!(f, "Sample count must be at least 1, got {}", count)
            }
            DiceError::SumOverflow { dice_count, side_count } => {
                write!(f, "Maximum sum of {}d{} does not fit into 32 bits", dice_count, side_count)
            }
            DiceError::TooManyBuckets { buckets, limit } => {
                write!(f, "Histogram would need {} buckets, at most {} are supported", buckets, limit)
            }
            DiceError::BucketOutOfRange { value, min, max } => {
                write!(f, "Rolled sum {} is outside of histogram range [{}, {}]", value, min, max)
            }
            DiceError::Io { path, source } => {
                write!(f, "I/O error on {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for DiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DiceError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
