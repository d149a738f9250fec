use clap::Parser;

use dice_prob::config::RunConfig;
use dice_prob::random::RngSource;
use dice_prob::report::{Report, OUTPUT_FILE};
use dice_prob::sampler::sample;
use dice_prob::stats::SummaryStatistics;

#[derive(Debug, Parser)]
#[command(author, version, about = "Estimate the distribution of dice sums by sampling")]
struct Cli {
    /// Number of dice rolled per sample.
    #[arg(value_name = "DICE_COUNT")]
    dice_count: u32,

    /// Number of sides of each die.
    #[arg(value_name = "SIDE_COUNT")]
    side_count: u32,

    /// Number of samples to draw.
    #[arg(value_name = "SAMPLE_COUNT")]
    sample_count: u64,

    /// Pass `true` to discard the lowest die of each roll.
    #[arg(value_name = "DISCARD")]
    discard: String,
}

impl Cli {
    fn run_config(&self) -> RunConfig {
        RunConfig::new(self.dice_count, self.side_count, self.sample_count, self.discard == "true")
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    simplelog::TermLogger::init(
        simplelog::LevelFilter::Info,
        simplelog::Config::default(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let args = Cli::parse();
    let config = args.run_config();
    config.validate()?;

    let time_sampling = std::time::Instant::now();
    let mut source = RngSource::from_time();
    let histogram = sample(&mut source, &config)?;
    log::info!(
        "Sampled {} rolls of {} in {:.3} s",
        config.sample_count,
        config,
        time_sampling.elapsed().as_secs_f64()
    );

    let stats = SummaryStatistics::compute(&histogram, config.sample_count)?;
    let report = Report::new(&config, &histogram, stats);

    let stdout = std::io::stdout();
    report.write_summary(&mut stdout.lock())?;
    report.save(OUTPUT_FILE)?;

    Ok(())
}
