//! Pluggable randomness for the asteroid factory
//!
//! Play uses a seeded `Pcg32`; tests script exact samples with `SequenceSource`.

use rand::Rng;
use rand_pcg::Pcg32;

/// Uniform sampling needed by the simulation
pub trait RandomSource {
    /// Uniform sample in the inclusive range [min, max]
    fn uniform(&mut self, min: f32, max: f32) -> f32;

    /// Uniform index in [0, count)
    fn index(&mut self, count: u32) -> u32;
}

impl RandomSource for Pcg32 {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        debug_assert!(min <= max, "inverted range {min}..={max}");
        self.random_range(min..=max)
    }

    fn index(&mut self, count: u32) -> u32 {
        debug_assert!(count > 0);
        self.random_range(0..count)
    }
}

/// Replays a fixed list of unit samples in [0, 1], cycling when exhausted
///
/// `uniform(min, max)` maps a sample `u` to `min + u * (max - min)`;
/// `index(count)` maps it to `floor(u * count)`, clamped to `count - 1`.
#[derive(Debug, Clone)]
pub struct SequenceSource {
    samples: Vec<f32>,
    cursor: usize,
}

impl SequenceSource {
    pub fn new(samples: Vec<f32>) -> Self {
        assert!(!samples.is_empty(), "SequenceSource needs at least one sample");
        Self { samples, cursor: 0 }
    }

    /// Always returns the same sample
    pub fn constant(sample: f32) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far
    pub fn drawn(&self) -> usize {
        self.cursor
    }

    fn next_sample(&mut self) -> f32 {
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample.clamp(0.0, 1.0)
    }
}

impl RandomSource for SequenceSource {
    fn uniform(&mut self, min: f32, max: f32) -> f32 {
        let u = self.next_sample();
        min + u * (max - min)
    }

    fn index(&mut self, count: u32) -> u32 {
        let u = self.next_sample();
        ((u * count as f32) as u32).min(count.saturating_sub(1))
    }
}
