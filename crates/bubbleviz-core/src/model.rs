//! The array being sorted.
//!
//! A [`SortingModel`] owns a fixed-length vector of positive integers. Values
//! are drawn independently and uniformly from `[1, N]` where `N` is the array
//! length, so the tallest possible bar always equals the number of bars.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Number of bars when nothing else is configured.
pub const DEFAULT_ARRAY_SIZE: usize = 50;

/// Upper bound accepted by the CLI for `--size` and `--values`.
pub const MAX_ARRAY_SIZE: usize = 1000;

/// Fixed-length array of random values in `[1, len]`.
#[derive(Debug, Clone)]
pub struct SortingModel {
    data: Vec<u32>,
    rng: StdRng,
}

impl SortingModel {
    /// Create a model of `size` values seeded from the operating system.
    pub fn new(size: usize) -> Self {
        Self::from_rng(size, StdRng::from_os_rng())
    }

    /// Create a model with a deterministic generator.
    pub fn with_seed(size: usize, seed: u64) -> Self {
        Self::from_rng(size, StdRng::seed_from_u64(seed))
    }

    fn from_rng(size: usize, rng: StdRng) -> Self {
        let mut model = Self {
            data: vec![0; size],
            rng,
        };
        model.regenerate();
        model
    }

    /// Overwrite every slot with a fresh value from `[1, len]`.
    pub fn regenerate(&mut self) {
        let max = self.max_value();
        for value in self.data.iter_mut() {
            *value = self.rng.random_range(1..=max);
        }
        log::debug!("regenerated {} values in [1, {max}]", self.data.len());
    }

    /// Current contents. Callers that sort work on a copy.
    pub fn snapshot(&self) -> &[u32] {
        &self.data
    }

    /// Accept the sorted copy produced by a completed playback.
    ///
    /// Returns `false` and leaves the model untouched if the length differs.
    pub fn replace_with_sorted(&mut self, values: Vec<u32>) -> bool {
        if values.len() != self.data.len() {
            log::warn!(
                "ignoring sorted copy of length {} for a model of length {}",
                values.len(),
                self.data.len()
            );
            return false;
        }
        self.data = values;
        true
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Largest value `regenerate` can produce (the array length, at least 1).
    pub fn max_value(&self) -> u32 {
        u32::try_from(self.data.len()).unwrap_or(u32::MAX).max(1)
    }
}

impl Default for SortingModel {
    fn default() -> Self {
        Self::new(DEFAULT_ARRAY_SIZE)
    }
}
