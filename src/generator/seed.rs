/*
seed.rs

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

//! Seeds and day-to-theme mapping.
//!
//! All the randomness of a puzzle derives from the seed that [`stable_seed`] computes from the
//! day offset and the grid size.
//! Nothing else, such as the clock or the locale, goes into the seed.

use crate::config::{
    MAX_SELECTED_WORDS, MIN_GRID_SIZE, MIN_SELECTED_WORDS, PUZZLE_ORDER_SEED, SEED_MULTIPLIER,
    SEED_SALT, clamp_grid_size,
};

use super::rng::SeededRng;

/// Return the seed of the puzzle for the given day and grid size.
pub fn stable_seed(day_offset: i64, grid_size: usize) -> u64 {
    (day_offset as u64).wrapping_mul(SEED_MULTIPLIER) ^ ((grid_size as u64) << 32) ^ SEED_SALT
}

/// Return the seed of the given placement variant.
///
/// Variant 0 is the seed itself.
/// The other variants also change the low bits of the seed, which drive the small random draws
/// of the placement.
pub fn variant_seed(seed: u64, variant: usize) -> u64 {
    seed ^ (variant as u64).wrapping_mul(SEED_MULTIPLIER)
}

/// Return the theme index for the given day offset.
///
/// Offsets wrap in both directions, so that negative offsets (days before the installation
/// date) also map to a valid index.
pub fn normalized_puzzle_index(day_offset: i64, theme_count: usize) -> usize {
    if theme_count == 0 {
        return 0;
    }
    day_offset.rem_euclid(theme_count as i64) as usize
}

/// Return the number of words to select for the grid size.
///
/// Larger grids get more words.
pub fn target_word_count(grid_size: usize) -> usize {
    (MIN_SELECTED_WORDS + (clamp_grid_size(grid_size) - MIN_GRID_SIZE))
        .clamp(MIN_SELECTED_WORDS, MAX_SELECTED_WORDS)
}

/// Return the shuffled day-to-theme permutation for the given number of themes.
///
/// The permutation only depends on `theme_count`.
pub fn puzzle_order(theme_count: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..theme_count).collect();
    SeededRng::new(PUZZLE_ORDER_SEED).shuffle(&mut order);
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_formula() {
        assert_eq!(stable_seed(0, 0), SEED_SALT);
        assert_eq!(stable_seed(0, 9), (9u64 << 32) ^ SEED_SALT);
        assert_eq!(
            stable_seed(1, 9),
            SEED_MULTIPLIER ^ (9u64 << 32) ^ SEED_SALT
        );
        assert_eq!(
            stable_seed(-1, 7),
            u64::MAX.wrapping_mul(SEED_MULTIPLIER) ^ (7u64 << 32) ^ SEED_SALT
        );
    }

    #[test]
    fn seeds_differ_by_day_and_size() {
        assert_ne!(stable_seed(0, 9), stable_seed(1, 9));
        assert_ne!(stable_seed(0, 9), stable_seed(0, 10));
        assert_eq!(stable_seed(12, 8), stable_seed(12, 8));
    }

    #[test]
    fn variants() {
        let seed = stable_seed(4, 8);
        assert_eq!(variant_seed(seed, 0), seed);
        assert_eq!(variant_seed(seed, 1), seed ^ SEED_MULTIPLIER);
        let low_bits: HashSet<u64> = (0..8).map(|v| variant_seed(seed, v) & 0b111).collect();
        assert_eq!(low_bits.len(), 8);
    }

    #[test]
    fn index_wraps_both_directions() {
        assert_eq!(normalized_puzzle_index(0, 365), 0);
        assert_eq!(normalized_puzzle_index(364, 365), 364);
        assert_eq!(normalized_puzzle_index(365, 365), 0);
        assert_eq!(normalized_puzzle_index(-1, 365), 364);
        assert_eq!(normalized_puzzle_index(-366, 365), 364);
        assert_eq!(normalized_puzzle_index(i64::MIN, 3), i64::MIN.rem_euclid(3) as usize);
        assert_eq!(normalized_puzzle_index(5, 0), 0);
    }

    #[test]
    fn word_count_follows_grid_size() {
        assert_eq!(target_word_count(7), 5);
        assert_eq!(target_word_count(9), 7);
        assert_eq!(target_word_count(12), 10);
        // Clamped sizes
        assert_eq!(target_word_count(3), 5);
        assert_eq!(target_word_count(40), 10);
    }

    #[test]
    fn order_is_a_stable_permutation() {
        let order = puzzle_order(365);
        assert_eq!(order, puzzle_order(365));
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..365).collect::<Vec<usize>>());
        assert_ne!(order, sorted);
        assert!(puzzle_order(0).is_empty());
    }
}
