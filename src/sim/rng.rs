//! Random sources for serves and paddle deflections

use rand::Rng;
use rand_pcg::Pcg32;

/// Produces uniform integers. The simulation draws nothing else.
pub trait RandomSource {
    /// Uniform value in `0..n`. `n` is always at least 1.
    fn below(&mut self, n: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn below(&mut self, n: u32) -> u32 {
        self.random_range(0..n)
    }
}

/// Replays a fixed list of draws, wrapping around at the end.
///
/// Each value is reduced modulo the requested bound, so any script is valid.
#[derive(Debug, Clone)]
pub struct SequenceRandom {
    values: Vec<u32>,
    cursor: usize,
}

impl SequenceRandom {
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        let mut values: Vec<u32> = values.into_iter().collect();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, cursor: 0 }
    }

    /// Number of draws taken so far
    pub fn draws(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for SequenceRandom {
    fn below(&mut self, n: u32) -> u32 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value % n.max(1)
    }
}
