/// Counts of dice sums over a contiguous range `[min_value, max_value]`.
///
/// Bucket `i` holds the number of samples whose sum was `min_value + i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    min_value: u32,
    max_value: u32,
    buckets: Vec<u64>,
}

impl Histogram {
    /// Creates an empty histogram covering `[min_value, max_value]`.
    pub fn new(min_value: u32, max_value: u32) -> Self {
        assert!(min_value <= max_value, "Invalid range [{}, {}]", min_value, max_value);
        let len = (max_value - min_value) as usize + 1;
        Self {
            min_value,
            max_value,
            buckets: vec![0; len],
        }
    }

    pub fn min_value(&self) -> u32 {
        self.min_value
    }
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Number of buckets, `max_value - min_value + 1`.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Always `false`: a histogram covers at least one sum.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Whether any sample has been recorded.
    pub fn has_samples(&self) -> bool {
        self.buckets.iter().any(|&count| count > 0)
    }

    /// Raw bucket counts in ascending sum order.
    pub fn counts(&self) -> &[u64] {
        &self.buckets
    }

    /// Count for the absolute sum `value`, or `None` if it is out of range.
    pub fn count_of(&self, value: u32) -> Option<u64> {
        self.bucket_index(value).map(|i| self.buckets[i])
    }

    /// Total number of recorded samples.
    pub fn total(&self) -> u64 {
        self.buckets.iter().sum()
    }

    /// Iterates over `(sum, count)` pairs in ascending sum order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        (self.min_value..=self.max_value).zip(self.buckets.iter().copied())
    }

    /// Share of each bucket in percent of `total_samples`.
    pub fn percentages(&self, total_samples: u64) -> Vec<f64> {
        self.buckets.iter().map(|&count| percentage(count, total_samples)).collect()
    }

    pub(crate) fn bucket_index(&self, value: u32) -> Option<usize> {
        let index = value.checked_sub(self.min_value)? as usize;
        (index < self.buckets.len()).then_some(index)
    }

    /// Increments the bucket for `value`. Returns `false` if it is out of range.
    pub(crate) fn record(&mut self, value: u32) -> bool {
        match self.bucket_index(value) {
            Some(i) => {
                self.buckets[i] += 1;
                true
            }
            None => false,
        }
    }
}

/// `100 * count / total`, or zero when `total` is zero.
pub fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    100.0 * count as f64 / total as f64
}
