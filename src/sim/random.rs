//! Random source for gap placement
//!
//! `SeededRandom` is the reproducible default; tests substitute scripted
//! sources.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

/// Supplies uniform random integers
pub trait RandomSource {
    /// Uniform integer in `min..=max`
    fn between(&mut self, min: i32, max: i32) -> i32;
}

impl RandomSource for Pcg32 {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        self.random_range(min..=max)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        (**self).between(min, max)
    }
}

impl<T: RandomSource + ?Sized> RandomSource for Box<T> {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        (**self).between(min, max)
    }
}

/// PCG generator seeded from a run seed
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: Pcg32,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        self.rng.random_range(min..=max)
    }
}

/// Replays a fixed list of values (clamped into the requested range)
///
/// Useful for reproducing a specific obstacle layout.
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    values: Vec<i32>,
    cursor: usize,
}

impl ScriptedRandom {
    /// Cycles through `values`; an empty list yields range midpoints
    pub fn new(values: Vec<i32>) -> Self {
        Self { values, cursor: 0 }
    }
}

impl RandomSource for ScriptedRandom {
    fn between(&mut self, min: i32, max: i32) -> i32 {
        let Some(&value) = self.values.get(self.cursor % self.values.len().max(1)) else {
            return min + (max - min) / 2;
        };
        self.cursor += 1;
        value.clamp(min, max)
    }
}
