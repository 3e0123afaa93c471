/*
lib.rs

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

//! Daily word search puzzles.
//!
//! The crate builds the word search puzzle of each day, identically in every process, and tracks
//! the words that the player finds.
//!
//! ```
//! use sopa::calendar::DayKey;
//! use sopa::game::{Game, SelectionOutcome};
//! use sopa::generator::puzzles::PuzzleFactory;
//! use sopa::language::AppLanguage;
//!
//! let factory = PuzzleFactory::default();
//! let puzzle = factory.puzzle(DayKey::new(0), 9, AppLanguage::resolved("es_ES"));
//! assert_eq!(puzzle.size(), 9);
//!
//! let word = puzzle.words[0].clone();
//! let path = puzzle.grid.best_path(&word, &Default::default()).unwrap();
//! let mut game = Game::new(puzzle);
//! let outcome = game.select(path[0], path[path.len() - 1]);
//! assert_eq!(outcome, SelectionOutcome::Found { word, path });
//! ```

pub mod calendar;
pub mod config;
pub mod game;
pub mod generator;
pub mod hints;
pub mod language;
