//! Injectable uniform randomness.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform floats in `[0, 1)`.
pub trait RandomSource: Send {
    fn next_unit(&mut self) -> f64;
}

/// Entropy-backed source for production use.
pub struct StdRandom {
    rng: StdRng,
}

impl StdRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for StdRandom {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<f64>,
    cursor: usize,
}

impl SequenceRandom {
    /// An empty list behaves like a source that always returns 0.0.
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values,
            cursor: 0,
        }
    }
}

impl RandomSource for SequenceRandom {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor = self.cursor.wrapping_add(1);
        value
    }
}

/// Uniform index into a collection of `len` items. `len` must be non-zero.
pub fn pick_index(rng: &mut dyn RandomSource, len: usize) -> usize {
    let unit = rng.next_unit().clamp(0.0, 1.0);
    // A misbehaving source returning exactly 1.0 still lands in bounds.
    ((unit * len as f64) as usize).min(len.saturating_sub(1))
}

/// Uniform integer in `lo..=hi`.
pub fn pick_in_range(rng: &mut dyn RandomSource, lo: u32, hi: u32) -> u32 {
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as usize + 1;
    lo + pick_index(rng, span) as u32
}
