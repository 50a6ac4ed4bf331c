//! Random number plumbing
//!
//! The simulation only ever asks for uniform reals over closed intervals, so
//! that is the whole interface. Any `rand::Rng` satisfies it.

use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

/// Source of uniformly distributed reals
pub trait UniformSource {
    /// Uniform sample in `[lo, hi]`. Returns `lo` when the range is empty.
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32;
}

impl<R: Rng> UniformSource for R {
    fn uniform(&mut self, range: RangeInclusive<f32>) -> f32 {
        let (lo, hi) = range.into_inner();
        if lo >= hi {
            return lo;
        }
        self.random_range(lo..=hi)
    }
}

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn to_rng(&self) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed)
    }
}
