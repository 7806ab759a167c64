// src/dungeon/rng.rs
//! Seeded random source for dungeon generation.
//!
//! Every randomized step (room size, room position, corridor bend) draws from
//! a `DungeonRng` passed in explicitly, never from a thread-local generator.
//! The seed is always recorded, including for unseeded runs, so any layout
//! can be regenerated later.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone)]
pub struct DungeonRng {
    rng: StdRng,
    seed: u64,
}

impl DungeonRng {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Picks a fresh random seed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => Self::from_entropy(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `lo..=hi`. Returns `lo` when the range is empty.
    pub fn range_inclusive(&mut self, lo: u32, hi: u32) -> u32 {
        if hi <= lo {
            return lo;
        }
        self.rng.random_range(lo..=hi)
    }

    /// Fair coin flip.
    pub fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
