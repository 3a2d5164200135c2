//! Injectable randomness for the simulation
//!
//! The sim only ever needs uniform draws in `[0, 1)`. Production code uses a
//! seeded PCG stream; tests hand in scripted sequences.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Source of uniform draws in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[min, max)`
    fn range(&mut self, min: f32, max: f32) -> f32 {
        // f64 -> f32 can round 0.99999... up to 1.0
        let t = (self.next_unit() as f32).min(1.0 - f32::EPSILON);
        min + t * (max - min)
    }
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Seeded generator for a session
pub fn seeded(seed: u64) -> Pcg32 {
    Pcg32::seed_from_u64(seed)
}

/// Replays a fixed list of draws, cycling when exhausted
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty(), "scripted random needs at least one value");
        Self { values, cursor: 0 }
    }

    /// Always returns the same draw
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
