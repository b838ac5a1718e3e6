// SPDX-FileCopyrightText: 2026 LocalLocal Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! [`ChoiceSource`] implementations.

use std::sync::Mutex;

use locallocal_core::ChoiceSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Uniform pick from the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ChoiceSource for ThreadRandom {
    fn pick(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len.max(1))
    }
}

/// Uniform pick from a seeded generator; the same seed yields the same sequence.
#[derive(Debug)]
pub struct SeededRandom {
    rng: Mutex<StdRng>,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl ChoiceSource for SeededRandom {
    fn pick(&self, len: usize) -> usize {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        rng.gen_range(0..len.max(1))
    }
}

/// Always picks the same index. Handy for pinning output in tests and demos.
#[derive(Debug, Clone, Copy)]
pub struct FixedChoice(pub usize);

impl ChoiceSource for FixedChoice {
    fn pick(&self, len: usize) -> usize {
        self.0.min(len.saturating_sub(1))
    }
}
