/*
generator.rs

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

//! Generate the daily word search puzzles.
//!
//! [`puzzles::PuzzleFactory`] is the entry point: it returns the [`puzzles::Puzzle`] of a day for
//! a grid size and a display language.
//!
//! The generation is deterministic.
//! All the random decisions come from a [`rng::SeededRng`] object seeded from the day offset and
//! the grid size (see [`seed::stable_seed`]).
//! Two processes that use the same [`crate::config::EngineConfig`] always produce the same puzzle
//! for the same day.
//!
//! A puzzle is built in three steps:
//!
//! * The [`themes::ThemeRegistry`] object gives the theme of the day, already translated to the
//!   display language.
//!   The registry is built once and shared. It synthesizes additional themes when the
//!   hand-authored themes in [`word_bank`] are not enough.
//!
//! * [`selection::select_words`] keeps the words of the theme that fit the grid and picks a
//!   number of them that depends on the grid size.
//!
//! * The [`placement::WordSearchGenerator`] object places the words in the grid, in one of the
//!   eight directions, and fills the other cells with random letters.
//!   When too few words can be placed, it tries again with fewer words.
//!
//! The generator does not keep the position of the words.
//! [`grid::PuzzleGrid`] finds them again when needed, and matches the player selections against
//! the puzzle words.

pub mod grid;
pub mod legacy_bank;
pub mod normalize;
pub mod placement;
pub mod puzzles;
pub mod rng;
pub mod seed;
pub mod selection;
pub mod themes;
pub mod word_bank;
