use crate::error::DiceError;
use crate::histogram::Histogram;

/// Sample mean, unbiased variance and standard deviation of a histogram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStatistics {
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
}

impl SummaryStatistics {
    /// Computes the statistics of `histogram` over `total_samples` samples.
    ///
    /// ```text
    /// mean     = Σ v_i c_i / n
    /// variance = Σ c_i (v_i - mean)^2 / (n - 1)
    /// std_dev  = sqrt(variance)
    /// ```
    ///
    /// A single sample has no spread to estimate: variance and standard
    /// deviation are reported as zero. Zero samples is an error.
    pub fn compute(histogram: &Histogram, total_samples: u64) -> Result<Self, DiceError> {
        if total_samples == 0 {
            return Err(DiceError::InsufficientSamples(total_samples));
        }
        let n = total_samples as f64;

        let weighted: f64 = histogram.iter().map(|(value, count)| value as f64 * count as f64).sum();
        let mean = weighted / n;

        if total_samples == 1 {
            log::warn!("Variance of a single sample is undefined, reporting 0");
            return Ok(Self {
                mean,
                variance: 0.0,
                std_dev: 0.0,
            });
        }

        let squares: f64 = histogram
            .iter()
            .map(|(value, count)| {
                let diff = value as f64 - mean;
                count as f64 * diff * diff
            })
            .sum();
        let variance = squares / (n - 1.0);

        Ok(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}
