/*
daily_puzzles.rs

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

//! Daily puzzle scenarios, through the public API only.

use std::collections::HashSet;
use std::sync::Arc;

use sopa::calendar::DayKey;
use sopa::config::{EngineConfig, MAX_GRID_SIZE, MIN_GRID_SIZE, MIN_PLACED_WORDS};
use sopa::game::{Game, SelectionOutcome};
use sopa::generator::grid::GridPosition;
use sopa::generator::puzzles::{Puzzle, PuzzleFactory};
use sopa::generator::themes::ThemeRegistry;
use sopa::language::{AppLanguage, ENYE};

fn factory() -> PuzzleFactory {
    PuzzleFactory::default()
}

fn count_enye(puzzle: &Puzzle) -> usize {
    puzzle.grid.letters().iter().filter(|c| **c == ENYE).count()
}

#[test]
fn spanish_first_day() {
    let puzzle = factory().puzzle_for_locale(DayKey::new(0), 9, "es");
    assert!(puzzle.words.len() >= MIN_PLACED_WORDS);
    assert_eq!(puzzle.size(), 9);
    assert_eq!(puzzle.grid.rows().len(), 9);
    assert!(puzzle.grid.rows().iter().all(|r| r.chars().count() == 9));
    assert!(count_enye(&puzzle) >= 1);
    assert!(puzzle.words.iter().all(|w| w.chars().count() <= 9));
}

#[test]
fn english_first_day() {
    let spanish = factory().puzzle_for_locale(DayKey::new(0), 9, "es");
    let english = factory().puzzle_for_locale(DayKey::new(0), 9, "en");
    assert_eq!(english.words.len(), spanish.words.len());
    assert_eq!(count_enye(&english), 0);
}

#[test]
fn generation_never_varies() {
    let factory = factory();
    let reference = factory.puzzle_for_locale(DayKey::new(0), 9, "es");
    for _ in 0..1000 {
        assert_eq!(factory.puzzle_for_locale(DayKey::new(0), 9, "es"), reference);
    }
}

#[test]
fn independent_factories_agree() {
    // Two processes build their own registry: the puzzles must still be identical
    let a = PuzzleFactory::new(Arc::new(ThemeRegistry::new(&EngineConfig::default())));
    let b = factory();
    for day in [0, 1, 57, 364, 365, -20] {
        for language in AppLanguage::ALL {
            assert_eq!(
                a.puzzle(DayKey::new(day), 10, language),
                b.puzzle(DayKey::new(day), 10, language)
            );
        }
    }
}

#[test]
fn translated_words_map_back_to_spanish_words() {
    let factory = factory();
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        for day in 0..365 {
            let puzzles = factory.puzzle_set(DayKey::new(day), size);
            let spanish = &puzzles[0];
            assert_eq!(spanish.language, AppLanguage::Spanish);
            let expected: HashSet<String> = spanish.words.iter().cloned().collect();
            for puzzle in &puzzles[1..] {
                assert_eq!(
                    puzzle.words.len(),
                    spanish.words.len(),
                    "day {day}, size {size}, {}",
                    puzzle.language
                );
                for word in &puzzle.words {
                    assert!(
                        factory
                            .registry()
                            .canonical_word_in(word, puzzle.language)
                            .is_some()
                    );
                }
                let recovered: HashSet<String> =
                    factory.canonical_words(puzzle).into_iter().collect();
                assert_eq!(recovered, expected, "day {day}, size {size}, {}", puzzle.language);
            }
        }
    }
}

#[test]
fn word_floor_on_larger_grids() {
    let factory = factory();
    for size in 9..=MAX_GRID_SIZE {
        for day in 0..365 {
            let words = factory.agreed_words(DayKey::new(day), size);
            assert!(
                words.len() >= MIN_PLACED_WORDS,
                "day {day}, size {size}: {words:?}"
            );
        }
    }
}

#[test]
fn word_floor_on_smaller_grids() {
    // Small grids only get a weak random stream, and a few days keep 3 words
    let factory = factory();
    let mut sparse: Vec<(i64, usize)> = Vec::new();
    for size in [7, 8] {
        for day in 0..365 {
            let words = factory.agreed_words(DayKey::new(day), size);
            assert!(words.len() >= 3, "day {day}, size {size}: {words:?}");
            if words.len() < MIN_PLACED_WORDS {
                sparse.push((day, size));
            }
        }
    }
    assert!(sparse.len() <= 5, "{sparse:?}");
    assert!(sparse.iter().all(|(_, size)| *size == 8), "{sparse:?}");
}

#[test]
fn grids_are_well_formed() {
    let factory = factory();
    for size in MIN_GRID_SIZE..=MAX_GRID_SIZE {
        for day in 0..40 {
            for language in AppLanguage::ALL {
                let selected = factory.selected_words(DayKey::new(day), size, language);
                let puzzle = factory.puzzle(DayKey::new(day), size, language);
                assert_eq!(puzzle.size(), size);
                assert_eq!(puzzle.grid.letters().len(), size * size);
                assert!(
                    puzzle
                        .grid
                        .letters()
                        .iter()
                        .all(|c| language.alphabet().contains(c))
                );
                assert!(puzzle.words.len() <= selected.len());
                assert!(puzzle.words.iter().all(|w| selected.contains(w)));
                if language == AppLanguage::Spanish {
                    assert!(count_enye(&puzzle) >= 1);
                } else {
                    assert_eq!(count_enye(&puzzle), 0);
                }
            }
        }
    }
}

#[test]
fn every_word_can_be_found() {
    let factory = factory();
    for language in AppLanguage::ALL {
        let puzzle = factory.puzzle(DayKey::new(3), 11, language);
        let words = puzzle.words.clone();
        let mut game = Game::new(puzzle);
        for word in &words {
            let path = game
                .puzzle
                .grid
                .best_path(word, game.solved_positions())
                .unwrap();
            let start: GridPosition = path[path.len() - 1];
            let end: GridPosition = path[0];
            match game.select(start, end) {
                SelectionOutcome::Found { word: found, .. } => assert_eq!(&found, word),
                outcome => panic!("{word}: {outcome:?}"),
            }
        }
        assert!(game.is_solved());
        assert_eq!(game.outlines().len(), words.len());
        assert_eq!(game.get_misses(), 0);
    }
}
