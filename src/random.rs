//! Sources of uniform randomness.
//!
//! Everything random in the crate flows through the [`RandomSource`] trait.
//! The simulation never touches a global generator: callers own a source and
//! lend it to the dice roller and the sampler, so a run can be replayed by
//! swapping in a seeded or scripted source.

use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A generator of uniform values.
pub trait RandomSource {
    /// Returns a value in `[0, 1)`.
    fn uniform_unit(&mut self) -> f64;

    /// Returns an integer uniformly distributed over `[min, max]`.
    ///
    /// ```text
    /// min + floor((max - min + 1) * uniform_unit())
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `min >= max`.
    fn int_in_range(&mut self, min: u32, max: u32) -> u32 {
        assert!(min < max, "Empty range: min ({}) must be less than max ({})", min, max);
        let span = (max - min) as u64 + 1;
        let offset = (span as f64 * self.uniform_unit()) as u64;
        min + offset.min(span - 1) as u32
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn uniform_unit(&mut self) -> f64 {
        (**self).uniform_unit()
    }
}

/// Adapter turning any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngSource<StdRng> {
    /// Source seeded from the current wall-clock time.
    ///
    /// Two runs started at different instants produce different sequences.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        log::debug!("Seeding random source from time: {}", nanos);
        Self::seeded(nanos)
    }

    /// Reproducible source for the given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_unit(&mut self) -> f64 {
        // `StandardUniform` for f64 samples the half-open interval [0, 1).
        self.rng.random::<f64>()
    }
}

/// Source replaying a fixed list of unit values, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ReplaySource {
    values: Vec<f64>,
    pos: usize,
}

impl ReplaySource {
    /// # Panics
    ///
    /// Panics if `values` is empty or any value lies outside `[0, 1)`.
    pub fn new(values: impl IntoIterator<Item = f64>) -> Self {
        let values: Vec<f64> = values.into_iter().collect();
        assert!(!values.is_empty(), "ReplaySource needs at least one value");
        assert!(
            values.iter().all(|v| (0.0..1.0).contains(v)),
            "ReplaySource values must lie in [0, 1)"
        );
        Self { values, pos: 0 }
    }

    /// Source whose `int_in_range(1, sides)` calls yield exactly `faces`.
    ///
    /// Each face is mapped to the midpoint of its slice of the unit interval.
    pub fn from_faces(sides: u32, faces: impl IntoIterator<Item = u32>) -> Self {
        assert!(sides > 1);
        Self::new(faces.into_iter().map(|face| {
            assert!((1..=sides).contains(&face), "Face {} is not on a d{}", face, sides);
            (face as f64 - 0.5) / sides as f64
        }))
    }

    /// Number of values drawn so far.
    pub fn drawn(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ReplaySource {
    fn uniform_unit(&mut self) -> f64 {
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }
}
