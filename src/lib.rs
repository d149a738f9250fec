//! # dice-prob: Monte Carlo dice-sum distributions
//!
//! **`dice-prob`** estimates the distribution of the sum of `N` dice with `S` sides each,
//! optionally discarding the lowest die (the classic "4d6, drop lowest" of tabletop games),
//! by rolling many times and counting how often each sum comes up.
//!
//! ## Pipeline
//!
//! 1. A [`RunConfig`][crate::config::RunConfig] describes the dice and the number of samples.
//! 2. The [`sampler`] rolls through a [`RandomSource`][crate::random::RandomSource]
//!    and fills a [`Histogram`][crate::histogram::Histogram].
//! 3. [`SummaryStatistics`][crate::stats::SummaryStatistics] derives mean, unbiased variance
//!    and standard deviation from the histogram.
//! 4. A [`Report`][crate::report::Report] prints the summary and writes the distribution file.
//!
//! ## Basic Usage
//!
//! ```rust
//! use dice_prob::config::RunConfig;
//! use dice_prob::random::RngSource;
//! use dice_prob::sampler::sample;
//! use dice_prob::stats::SummaryStatistics;
//!
//! let config = RunConfig::default().with_dice(3, 6).with_samples(10_000);
//! let mut source = RngSource::seeded(42);
//!
//! let histogram = sample(&mut source, &config).unwrap();
//! assert_eq!(histogram.len(), 16); // sums 3..=18
//! assert_eq!(histogram.total(), 10_000);
//!
//! let stats = SummaryStatistics::compute(&histogram, config.sample_count).unwrap();
//! assert!((stats.mean - 10.5).abs() < 0.2);
//! ```
//!
//! Randomness is always passed in explicitly. Use [`RngSource::from_time`][crate::random::RngSource::from_time]
//! for a fresh sequence on every run, [`RngSource::seeded`][crate::random::RngSource::seeded] for
//! reproducible runs, or [`ReplaySource`][crate::random::ReplaySource] to script exact rolls.

pub mod config;
pub mod dice;
pub mod error;
pub mod histogram;
pub mod random;
pub mod report;
pub mod sampler;
pub mod stats;
