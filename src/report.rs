//! Text output of a finished run.
//!
//! # Summary format
//!
//! ```text
//! Distribution of 2d6 using 100000 throws:
//!
//! Sampling:
//! 2781 5577 8262 ...
//! Distribution:
//! 2.8% 5.6% 8.3% ...
//!
//! Statistics:
//!    mean: 7.0   var: 5.8   std: 2.4
//! ```
//!
//! # Distribution file format
//!
//! One line per achievable sum, percentages to two decimals:
//!
//! ```text
//! 2 2.78
//! 3 5.58
//! ```

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::config::RunConfig;
use crate::error::DiceError;
use crate::histogram::{percentage, Histogram};
use crate::stats::SummaryStatistics;

/// Name of the distribution file written by the CLI.
pub const OUTPUT_FILE: &str = "out.txt";

/// Everything produced by one run.
#[derive(Debug)]
pub struct Report<'a> {
    pub config: &'a RunConfig,
    pub histogram: &'a Histogram,
    pub stats: SummaryStatistics,
}

impl<'a> Report<'a> {
    pub fn new(config: &'a RunConfig, histogram: &'a Histogram, stats: SummaryStatistics) -> Self {
        Self { config, histogram, stats }
    }

    fn percentages(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        let total = self.config.sample_count;
        self.histogram.iter().map(move |(value, count)| (value, percentage(count, total)))
    }

    /// Writes the human-readable summary.
    pub fn write_summary<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write!(
            w,
            "Distribution of {}d{} using {} throws",
            self.config.dice_count, self.config.side_count, self.config.sample_count
        )?;
        if self.config.discard_lowest {
            write!(w, ", discarding the lowest die")?;
        }
        writeln!(w, ":")?;

        writeln!(w)?;
        writeln!(w, "Sampling:")?;
        let counts: Vec<String> = self.histogram.counts().iter().map(|c| c.to_string()).collect();
        writeln!(w, "{}", counts.join(" "))?;

        writeln!(w, "Distribution:")?;
        let shares: Vec<String> = self.percentages().map(|(_, p)| format!("{:.1}%", p)).collect();
        writeln!(w, "{}", shares.join(" "))?;

        writeln!(w)?;
        writeln!(w, "Statistics:")?;
        writeln!(
            w,
            "   mean: {:.1}   var: {:.1}   std: {:.1}",
            self.stats.mean, self.stats.variance, self.stats.std_dev
        )?;
        Ok(())
    }

    /// Writes `<sum> <percentage>` lines in ascending sum order.
    pub fn write_distribution<W: Write>(&self, w: &mut W) -> io::Result<()> {
        for (value, share) in self.percentages() {
            writeln!(w, "{} {:.2}", value, share)?;
        }
        Ok(())
    }

    /// Writes the distribution to `path`, replacing any existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), DiceError> {
        let path = path.as_ref();
        let io_err = |source: io::Error| DiceError::Io {
            path: path.to_path_buf(),
            source,
        };

        let file = File::create(path).map_err(io_err)?;
        let mut w = BufWriter::new(file);
        self.write_distribution(&mut w).map_err(io_err)?;
        w.flush().map_err(io_err)?;

        log::info!("Distribution written to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (RunConfig, Histogram) {
        let config = RunConfig::new(1, 4, 8, false);
        let mut histogram = Histogram::new(1, 4);
        for v in [1, 2, 2, 3, 3, 3, 4, 4] {
            histogram.record(v);
        }
        (config, histogram)
    }

    #[test]
    fn test_write_summary() {
        let (config, histogram) = fixture();
        let stats = SummaryStatistics::compute(&histogram, config.sample_count).unwrap();
        let report = Report::new(&config, &histogram, stats);

        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        println!("{}", text);

        let expected = "\
Distribution of 1d4 using 8 throws:

Sampling:
1 2 3 2
Distribution:
12.5% 25.0% 37.5% 25.0%

Statistics:
   mean: 2.8   var: 1.1   std: 1.0
";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_write_summary_discard_header() {
        let config = RunConfig::new(4, 6, 1, true);
        let mut histogram = Histogram::new(3, 18);
        histogram.record(12);
        let stats = SummaryStatistics::compute(&histogram, 1).unwrap();
        let report = Report::new(&config, &histogram, stats);

        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Distribution of 4d6 using 1 throws, discarding the lowest die:\n"));
        assert!(text.contains("   mean: 12.0   var: 0.0   std: 0.0"));
    }

    #[test]
    fn test_write_distribution() {
        let (config, histogram) = fixture();
        let stats = SummaryStatistics::compute(&histogram, config.sample_count).unwrap();
        let report = Report::new(&config, &histogram, stats);

        let mut out = Vec::new();
        report.write_distribution(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "1 12.50\n2 25.00\n3 37.50\n4 25.00\n");
    }

    #[test]
    fn test_save_overwrites() {
        let (config, histogram) = fixture();
        let stats = SummaryStatistics::compute(&histogram, config.sample_count).unwrap();
        let report = Report::new(&config, &histogram, stats);

        let path = std::env::temp_dir().join(format!("dice-prob-report-{}.txt", std::process::id()));
        std::fs::write(&path, "stale content that is longer than the report\n".repeat(10)).unwrap();

        report.save(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(written, "1 12.50\n2 25.00\n3 37.50\n4 25.00\n");
    }

    #[test]
    fn test_save_missing_directory() {
        let (config, histogram) = fixture();
        let stats = SummaryStatistics::compute(&histogram, config.sample_count).unwrap();
        let report = Report::new(&config, &histogram, stats);

        let path = std::env::temp_dir().join("dice-prob-no-such-dir").join("nested").join(OUTPUT_FILE);
        let err = report.save(&path).unwrap_err();
        println!("err = {}", err);
        assert!(matches!(err, DiceError::Io { .. }));
    }
}
