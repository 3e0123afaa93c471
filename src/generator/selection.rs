/*
selection.rs

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

//! Word selection.
//!
//! Pick the words of a puzzle from the words of its theme.

use crate::config::{MIN_WORD_LENGTH, SAFETY_WORDS, SELECTION_SALT, clamp_grid_size};

use super::normalize::{letter_count, normalize};
use super::rng::SeededRng;
use super::seed::target_word_count;

/// Return the words to place in a grid of the given size.
///
/// Only the words that fit in the grid and that have at least [`MIN_WORD_LENGTH`] letters are
/// candidates.
/// If no word is a candidate, then the safety words are used instead.
/// The candidates are shuffled, and the first [`target_word_count`] words are returned.
///
/// The shuffle uses its own salt, so that the selection order and the placement order are
/// independent, even though they derive from the same seed.
pub fn select_words(pool: &[String], grid_size: usize, seed: u64) -> Vec<String> {
    let size: usize = clamp_grid_size(grid_size);
    let mut candidates: Vec<String> = pool
        .iter()
        .map(|w| normalize(w))
        .filter(|w| (MIN_WORD_LENGTH..=size).contains(&letter_count(w)))
        .collect();
    if candidates.is_empty() {
        candidates = SAFETY_WORDS.iter().map(|w| w.to_string()).collect();
    }

    let mut rng: SeededRng = SeededRng::new(seed ^ SELECTION_SALT);
    rng.shuffle(&mut candidates);
    candidates.truncate(target_word_count(size));
    candidates
}
