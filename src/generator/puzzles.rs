/*
puzzles.rs

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

//! Daily puzzles.
//!
//! A [`PuzzleFactory`] object builds the [`Puzzle`] of a day for a grid size and a display
//! language:
//!
//! 1. The day offset gives the theme (see [`ThemeRegistry::theme_index`]) and the seed (see
//!    [`stable_seed`]).
//! 2. The words of the puzzle are selected from the canonical theme, among the words that fit
//!    the grid in every language.
//! 3. The selected words are placed in a grid for each language.
//!    A word that one language cannot place, even with the other placement variants, is removed
//!    from the puzzle of every language, and the placement starts again.
//!
//! The puzzles of the same day and grid size therefore hide the same words in every language.
//! The same day, grid size, and language always give the same puzzle.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::calendar::DayKey;
use crate::config::{MIN_PLACED_WORDS, MIN_WORD_LENGTH, PLACEMENT_VARIANTS, clamp_grid_size};
use crate::language::AppLanguage;

use super::grid::PuzzleGrid;
use super::normalize::{letter_count, normalize};
use super::placement::{GeneratedGrid, WordSearchGenerator};
use super::seed::{stable_seed, variant_seed};
use super::selection::select_words;
use super::themes::ThemeRegistry;

/// Puzzle of a day.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Puzzle {
    /// Number that players see (starting at 1).
    pub number: usize,

    /// Day of the puzzle.
    pub day_key: DayKey,

    /// Language of the words.
    pub language: AppLanguage,

    /// Letters.
    pub grid: PuzzleGrid,

    /// Words hidden in the grid, longest first.
    pub words: Vec<String>,
}

impl Puzzle {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    /// Whether the word, in any case or accentuation, is one of the puzzle words.
    pub fn contains_word(&self, word: &str) -> bool {
        let normalized: String = normalize(word);
        self.words.iter().any(|w| *w == normalized)
    }
}

/// Grid of one language, with the canonical form of its placed words.
struct LanguageGrid {
    generated: GeneratedGrid,
    placed: HashSet<String>,
}

/// [`PuzzleFactory`] object.
#[derive(Debug, Clone)]
pub struct PuzzleFactory {
    registry: Arc<ThemeRegistry>,
}

impl Default for PuzzleFactory {
    /// Create a factory that uses the shared registry.
    fn default() -> Self {
        Self::new(ThemeRegistry::shared())
    }
}

impl PuzzleFactory {
    /// Create a [`PuzzleFactory`] object.
    pub fn new(registry: Arc<ThemeRegistry>) -> Self {
        Self { registry }
    }

    /// Theme registry of the factory.
    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    /// Return the form of the canonical word in the language.
    fn localized(&self, canonical: &str, language: AppLanguage) -> String {
        match self.registry.localized_word(canonical, language) {
            Some(word) => word.to_string(),
            None => normalize(canonical),
        }
    }

    /// Return the canonical words of the theme that fit the grid in every language.
    fn selectable_words(&self, index: usize, size: usize) -> Vec<String> {
        self.registry
            .theme(index, AppLanguage::Spanish)
            .iter()
            .filter(|word| {
                AppLanguage::ALL.iter().all(|language| {
                    let count: usize = letter_count(&self.localized(word, *language));
                    (MIN_WORD_LENGTH..=size).contains(&count)
                })
            })
            .cloned()
            .collect()
    }

    /// Return the canonical words selected for the day, before placement.
    fn canonical_selection(&self, day_key: DayKey, size: usize) -> Vec<String> {
        let index: usize = self.registry.theme_index(day_key.offset);
        let seed: u64 = stable_seed(day_key.offset, size);
        select_words(&self.selectable_words(index, size), size, seed)
    }

    /// Return the words selected for the puzzle, in the given language, before placement.
    ///
    /// The selection is the same in every language.
    /// The puzzle words are a subset of these words when some words could not be placed.
    pub fn selected_words(
        &self,
        day_key: DayKey,
        grid_size: usize,
        language: AppLanguage,
    ) -> Vec<String> {
        let size: usize = clamp_grid_size(grid_size);
        self.canonical_selection(day_key, size)
            .iter()
            .map(|w| self.localized(w, language))
            .collect()
    }

    /// Place the words in a grid of the language.
    ///
    /// The placement variants are tried in order until one places all the words.
    /// If none does, then the first variant that places the most words is returned.
    fn place_in(
        &self,
        words: &[String],
        size: usize,
        language: AppLanguage,
        seed: u64,
    ) -> LanguageGrid {
        let localized: Vec<String> = words.iter().map(|w| self.localized(w, language)).collect();
        let canonical_by_localized: HashMap<&String, &String> =
            localized.iter().zip(words.iter()).collect();
        let mut generator: WordSearchGenerator = WordSearchGenerator::new(size, language);

        let mut attempt = |variant: usize| -> LanguageGrid {
            let generated: GeneratedGrid =
                generator.generate(&localized, variant_seed(seed, variant));
            let placed: HashSet<String> = generated
                .placed_words
                .iter()
                .filter_map(|w| canonical_by_localized.get(w).map(|c| (*c).clone()))
                .collect();
            LanguageGrid { generated, placed }
        };

        let mut best: LanguageGrid = attempt(0);
        for variant in 1..PLACEMENT_VARIANTS {
            if best.placed.len() == words.len() {
                break;
            }
            let candidate: LanguageGrid = attempt(variant);
            if candidate.placed.len() == words.len() {
                debug!("All the words placed in {language} with variant {variant}");
            }
            if candidate.placed.len() > best.placed.len() {
                best = candidate;
            }
        }
        best
    }

    /// Return the canonical words that the grids of every language can hide.
    ///
    /// Starting from the selection, the words that a language cannot place are removed until
    /// every language places all the remaining words.
    pub fn agreed_words(&self, day_key: DayKey, grid_size: usize) -> Vec<String> {
        let size: usize = clamp_grid_size(grid_size);
        let seed: u64 = stable_seed(day_key.offset, size);
        let mut words: Vec<String> = self.canonical_selection(day_key, size);

        'passes: loop {
            for language in AppLanguage::ALL {
                let grid: LanguageGrid = self.place_in(&words, size, language, seed);
                if grid.placed.len() < words.len() {
                    // The list shrinks on every pass, so the loop ends
                    words.retain(|w| grid.placed.contains(w));
                    debug!("{day_key}: {language} cannot place all the words, keeping {words:?}");
                    continue 'passes;
                }
            }
            if words.len() < MIN_PLACED_WORDS {
                warn!(
                    "{day_key}: only {} words in the {size}x{size} puzzles: {words:?}",
                    words.len()
                );
            }
            return words;
        }
    }

    /// Return the puzzle of the day.
    ///
    /// The grid size is clamped to the supported range.
    pub fn puzzle(&self, day_key: DayKey, grid_size: usize, language: AppLanguage) -> Puzzle {
        let size: usize = clamp_grid_size(grid_size);
        let words: Vec<String> = self.agreed_words(day_key, size);
        self.build(day_key, size, language, &words)
    }

    /// Return the puzzles of the day in every language, in the [`AppLanguage::ALL`] order.
    ///
    /// All the puzzles hide the translations of the same canonical words.
    pub fn puzzle_set(&self, day_key: DayKey, grid_size: usize) -> Vec<Puzzle> {
        let size: usize = clamp_grid_size(grid_size);
        let words: Vec<String> = self.agreed_words(day_key, size);
        AppLanguage::ALL
            .iter()
            .map(|language| self.build(day_key, size, *language, &words))
            .collect()
    }

    fn build(&self, day_key: DayKey, size: usize, language: AppLanguage, words: &[String]) -> Puzzle {
        let number: usize = self.registry.puzzle_number(day_key.offset);
        let seed: u64 = stable_seed(day_key.offset, size);
        debug!(
            "Puzzle {number} for {day_key} (size {size}, {language}): seed = {seed:#018x}, words = {words:?}"
        );
        let grid: LanguageGrid = self.place_in(words, size, language, seed);
        Puzzle {
            number,
            day_key,
            language,
            grid: grid.generated.grid,
            words: grid.generated.placed_words,
        }
    }

    /// Return the puzzle of the day for the given locale identifier, such as `es_ES` or `en-US`.
    pub fn puzzle_for_locale(&self, day_key: DayKey, grid_size: usize, locale: &str) -> Puzzle {
        self.puzzle(day_key, grid_size, AppLanguage::resolved(locale))
    }

    /// Return the canonical form of the puzzle words, in the puzzle word order.
    ///
    /// Words unknown to the registry are returned unchanged.
    pub fn canonical_words(&self, puzzle: &Puzzle) -> Vec<String> {
        puzzle
            .words
            .iter()
            .map(|word| {
                self.registry
                    .canonical_word_in(word, puzzle.language)
                    .map(|w| w.to_string())
                    .unwrap_or_else(|| word.clone())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{EngineConfig, MAX_GRID_SIZE, MIN_GRID_SIZE};
    use crate::language::ENYE;
    use std::collections::HashSet;

    #[test]
    fn scenario_spanish_nine() {
        let factory = PuzzleFactory::default();
        let puzzle = factory.puzzle(DayKey::new(0), 9, AppLanguage::Spanish);
        assert_eq!(puzzle.number, 1);
        assert_eq!(puzzle.size(), 9);
        assert!(puzzle.words.len() >= 4);
        assert!(puzzle.grid.contains_letter(ENYE));
        assert!(puzzle.words.iter().all(|w| w.chars().count() <= 9));
    }

    #[test]
    fn scenario_english_nine() {
        let factory = PuzzleFactory::default();
        let spanish = factory.puzzle(DayKey::new(0), 9, AppLanguage::Spanish);
        let english = factory.puzzle(DayKey::new(0), 9, AppLanguage::English);
        assert_eq!(english.words.len(), spanish.words.len());
        assert!(!english.grid.contains_letter(ENYE));
        let shown: HashSet<String> = english.words.iter().cloned().collect();
        let canonical: HashSet<String> = spanish.words.iter().cloned().collect();
        assert_ne!(shown, canonical);
    }

    #[test]
    fn every_language_hides_the_same_words() {
        let factory = PuzzleFactory::default();
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            for day in (0..365).step_by(7) {
                let day_key = DayKey::new(day);
                let agreed: HashSet<String> =
                    factory.agreed_words(day_key, size).into_iter().collect();
                let puzzles = factory.puzzle_set(day_key, size);
                assert_eq!(puzzles.len(), AppLanguage::ALL.len());
                for puzzle in &puzzles {
                    let canonical: HashSet<String> =
                        factory.canonical_words(puzzle).into_iter().collect();
                    assert_eq!(canonical, agreed, "day {day}, size {size}, {}", puzzle.language);
                    assert_eq!(puzzle.words.len(), agreed.len());
                }
            }
        }
    }

    #[test]
    fn puzzle_set_matches_single_puzzles() {
        let factory = PuzzleFactory::default();
        for day in [0, 41, 168, 262, -3] {
            let puzzles = factory.puzzle_set(DayKey::new(day), 8);
            for (puzzle, language) in puzzles.iter().zip(AppLanguage::ALL) {
                assert_eq!(puzzle.language, language);
                assert_eq!(*puzzle, factory.puzzle(DayKey::new(day), 8, language));
            }
        }
    }

    #[test]
    fn selection_fits_every_language() {
        let factory = PuzzleFactory::default();
        for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
            for day in 0..20 {
                let spanish = factory.selected_words(DayKey::new(day), size, AppLanguage::Spanish);
                for language in AppLanguage::ALL {
                    let selected = factory.selected_words(DayKey::new(day), size, language);
                    assert_eq!(selected.len(), spanish.len());
                    for (word, canonical) in selected.iter().zip(&spanish) {
                        assert!((MIN_WORD_LENGTH..=size).contains(&letter_count(word)));
                        assert_eq!(
                            factory.registry().canonical_word_in(word, language),
                            Some(canonical.as_str())
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn agreed_words_come_from_the_selection() {
        let factory = PuzzleFactory::default();
        for size in [7, 8, 12] {
            for day in 0..30 {
                let selected = factory.selected_words(DayKey::new(day), size, AppLanguage::Spanish);
                let agreed = factory.agreed_words(DayKey::new(day), size);
                assert!(agreed.iter().all(|w| selected.contains(w)));
                // Selection order is kept
                let kept: Vec<&String> = selected.iter().filter(|w| agreed.contains(w)).collect();
                assert_eq!(kept, agreed.iter().collect::<Vec<&String>>());
            }
        }
    }

    #[test]
    fn grid_size_is_clamped() {
        let factory = PuzzleFactory::default();
        assert_eq!(factory.puzzle(DayKey::new(3), 1, AppLanguage::English).size(), 7);
        assert_eq!(factory.puzzle(DayKey::new(3), 99, AppLanguage::English).size(), 12);
        assert_eq!(
            factory.puzzle(DayKey::new(3), 1, AppLanguage::English),
            factory.puzzle(DayKey::new(3), 7, AppLanguage::English)
        );
    }

    #[test]
    fn negative_days_wrap() {
        let factory = PuzzleFactory::default();
        let puzzle = factory.puzzle(DayKey::new(-1), 8, AppLanguage::Spanish);
        assert_eq!(puzzle.number, 365);
        assert!(puzzle.words.len() >= 4);
    }

    #[test]
    fn locale_resolution() {
        let factory = PuzzleFactory::default();
        assert_eq!(
            factory.puzzle_for_locale(DayKey::new(2), 10, "en_GB"),
            factory.puzzle(DayKey::new(2), 10, AppLanguage::English)
        );
        assert_eq!(
            factory.puzzle_for_locale(DayKey::new(2), 10, "de_DE").language,
            AppLanguage::Spanish
        );
    }

    #[test]
    fn randomized_order_changes_the_number() {
        let registry = Arc::new(ThemeRegistry::new(&EngineConfig {
            randomized_order: true,
            ..EngineConfig::default()
        }));
        let factory = PuzzleFactory::new(registry.clone());
        let puzzle = factory.puzzle(DayKey::new(0), 9, AppLanguage::Spanish);
        assert_eq!(puzzle.number, registry.theme_index(0) + 1);
    }

    #[test]
    fn serialization_round_trip() {
        let factory = PuzzleFactory::default();
        let puzzle = factory.puzzle(DayKey::new(5), 7, AppLanguage::Spanish);
        let json = serde_json::to_string(&puzzle).unwrap();
        let back: Puzzle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, puzzle);
        assert!(puzzle.contains_word(&puzzle.words[0].to_lowercase()));
    }
}
