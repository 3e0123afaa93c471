/*
rng.rs

Copyright 2025 Hervé Quatremain

This file is part of Sopa.

Sopa is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Sopa is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Sopa. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Seeded pseudo-random number generator.
//!
//! Every random decision of the engine draws from a [`SeededRng`] object created for that call
//! with an explicit seed.
//! The generator is a 64-bit linear congruential generator: its output only depends on the seed,
//! which is what makes the puzzles identical across devices and processes.
//! Do not replace it with a generator from an external crate, because their streams are not
//! guaranteed to stay the same between versions.

use serde::{Deserialize, Serialize};

/// State used when the seed is zero.
const ZERO_SEED_STATE: u64 = 0x1234_ABCD_5678_EF90;

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// [`SeededRng`] object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a [`SeededRng`] object.
    ///
    /// A zero seed is replaced by a fixed non-zero state.
    pub fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { ZERO_SEED_STATE } else { seed },
        }
    }

    /// Return the next value in the sequence.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }

    /// Return a value in `[0, bound)`, or 0 if `bound` is 0.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u64() % bound as u64) as usize
    }

    /// Shuffle the slice in place (Fisher-Yates, from the last element down to the second one).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for index in (1..items.len()).rev() {
            let swap_at: usize = self.below(index + 1);
            if swap_at != index {
                items.swap(index, swap_at);
            }
        }
    }

    /// Return a reference to a random element of the slice, or None if the slice is empty.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let index: usize = self.below(items.len());
        items.get(index)
    }
}
