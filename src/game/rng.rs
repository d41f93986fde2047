//! Random sources
//!
//! Entity construction draws from a [`RandomSource`] instead of a global
//! generator, so a run can be replayed from a seed and tests can script the
//! exact values an entity is built from.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The three kinds of draws the game needs
pub trait RandomSource {
    /// Uniform integer in `[low, high]` (inclusive). Returns `low` if the
    /// range is empty.
    fn int_in(&mut self, low: i32, high: i32) -> i32;

    /// Uniform float in `[0, 1)`
    fn unit(&mut self) -> f32;

    /// Fair coin flip
    fn coin(&mut self) -> bool;
}

/// Seeded generator used by the game loop
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed the run was started with (logged so it can be replayed)
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl RandomSource for GameRng {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        self.rng.gen_range(low..=high)
    }

    fn unit(&mut self) -> f32 {
        self.rng.gen::<f32>()
    }

    fn coin(&mut self) -> bool {
        self.rng.gen::<bool>()
    }
}

/// Replays fixed values. Each queue cycles once exhausted; an empty int
/// queue yields `low`, an empty unit queue `0.0` and an empty coin queue
/// `true`. Scripted ints are clamped into the requested range.
#[cfg(test)]
#[derive(Debug, Default, Clone)]
pub struct ScriptedRandom {
    ints: Vec<i32>,
    units: Vec<f32>,
    coins: Vec<bool>,
    next_int: usize,
    next_unit: usize,
    next_coin: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ints = values.into_iter().collect();
        self
    }

    pub fn units(mut self, values: impl IntoIterator<Item = f32>) -> Self {
        self.units = values.into_iter().collect();
        self
    }

    pub fn coins(mut self, values: impl IntoIterator<Item = bool>) -> Self {
        self.coins = values.into_iter().collect();
        self
    }
}

#[cfg(test)]
fn cycle<T: Copy>(values: &[T], cursor: &mut usize) -> Option<T> {
    if values.is_empty() {
        return None;
    }
    let v = values[*cursor % values.len()];
    *cursor += 1;
    Some(v)
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn int_in(&mut self, low: i32, high: i32) -> i32 {
        match cycle(&self.ints, &mut self.next_int) {
            Some(v) => v.clamp(low, high.max(low)),
            None => low,
        }
    }

    fn unit(&mut self) -> f32 {
        cycle(&self.units, &mut self.next_unit).unwrap_or(0.0)
    }

    fn coin(&mut self) -> bool {
        cycle(&self.coins, &mut self.next_coin).unwrap_or(true)
    }
}
