/*
legacy_bank.rs

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

//! Fixed 7x7 puzzles of the first widget versions.
//!
//! Older widget releases did not generate their puzzles but cycled through a small built-in list.
//! The list is kept so that a progress saved by these releases can still be shown and migrated.

use crate::calendar::DayKey;
use crate::language::AppLanguage;

use super::grid::{GridError, PuzzleGrid};
use super::puzzles::Puzzle;
use super::seed::normalized_puzzle_index;
use super::themes::ThemeRegistry;

/// Size of the legacy grids.
pub const LEGACY_GRID_SIZE: usize = 7;

/// Letter used to complete short rows.
const PADDING: char = 'X';

// Rows and words of every legacy puzzle
const LEGACY_PUZZLES: [(&[&str], &[&str]); 3] = [
    (
        &[
            "ARBOLIP", "TIERRAX", "NUBELUZ", "MARAZUL", "SOLROCA", "RIOCASA", "FLORNUB",
        ],
        &["ARBOL", "TIERRA", "NUBE", "MAR", "SOL", "RIO", "FLOR"],
    ),
    (
        &[
            "QUESOXR", "PANMIEL", "LECHERA", "UVAFRUT", "PERAXYZ", "SALTOMA", "CAFEBAR",
        ],
        &["QUESO", "PAN", "MIEL", "LECHE", "UVA", "PERA", "CAFE"],
    ),
    (
        &[
            "TRENBUS", "CARROAV", "PUERTAX", "PLAYAQR", "LIBROSO", "CINEZOO", "NUBEVIA",
        ],
        &["TREN", "BUS", "CARRO", "PUERTA", "PLAYA", "LIBRO", "CINE"],
    ),
];

/// Legacy puzzle.
#[derive(Debug, Clone, PartialEq)]
pub struct LegacyPuzzle {
    pub grid: PuzzleGrid,
    pub words: Vec<String>,
}

impl LegacyPuzzle {
    /// Build a puzzle from the rows and words saved by a legacy widget.
    ///
    /// # Errors
    ///
    /// The function returns an error if the rows do not form a 7x7 grid.
    pub fn from_saved(rows: &[String], words: &[String]) -> Result<Self, GridError> {
        if rows.len() != LEGACY_GRID_SIZE {
            return Err(GridError::NotSquare {
                row: rows.len().min(LEGACY_GRID_SIZE),
                expected: LEGACY_GRID_SIZE,
                found: rows.len(),
            });
        }
        let grid: PuzzleGrid = PuzzleGrid::try_from(rows.to_vec())?;
        Ok(Self {
            grid,
            words: words.iter().map(|w| w.to_uppercase()).collect(),
        })
    }

    /// Return the canonical form of the words.
    ///
    /// Words unknown to the registry are returned unchanged.
    pub fn canonical_words(&self, registry: &ThemeRegistry) -> Vec<String> {
        self.words
            .iter()
            .map(|w| registry.canonical_word(w).unwrap_or(w.as_str()).to_string())
            .collect()
    }

    /// Return the legacy puzzle as a [`Puzzle`] object, so that it can be played.
    pub fn to_puzzle(&self, index: usize) -> Puzzle {
        Puzzle {
            number: index + 1,
            day_key: DayKey::new(index as i64),
            language: AppLanguage::Spanish,
            grid: self.grid.clone(),
            words: self.words.clone(),
        }
    }
}

/// [`LegacyPuzzleBank`] object.
#[derive(Debug)]
pub struct LegacyPuzzleBank {
    puzzles: Vec<LegacyPuzzle>,
}

impl Default for LegacyPuzzleBank {
    fn default() -> Self {
        Self::new()
    }
}

impl LegacyPuzzleBank {
    /// Create a [`LegacyPuzzleBank`] object.
    pub fn new() -> Self {
        let puzzles: Vec<LegacyPuzzle> = LEGACY_PUZZLES
            .iter()
            .map(|(rows, words)| {
                let cells: Vec<char> = rows.iter().flat_map(|r| legacy_row(r)).collect();
                LegacyPuzzle {
                    grid: PuzzleGrid::from_cells(LEGACY_GRID_SIZE, cells),
                    words: words.iter().map(|w| w.to_uppercase()).collect(),
                }
            })
            .collect();
        Self { puzzles }
    }

    /// Number of puzzles.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Whether the bank has no puzzle.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Return the index in the bank for the given puzzle index, which wraps in both directions.
    pub fn normalized_index(&self, index: i64) -> usize {
        normalized_puzzle_index(index, self.puzzles.len())
    }

    /// Return the puzzle for the given index.
    pub fn puzzle_at(&self, index: i64) -> Option<&LegacyPuzzle> {
        self.puzzles.get(self.normalized_index(index))
    }
}

/// Return the letters of a legacy row: upper case, exactly [`LEGACY_GRID_SIZE`] letters.
fn legacy_row(row: &str) -> Vec<char> {
    let mut letters: Vec<char> = row
        .chars()
        .flat_map(char::to_uppercase)
        .take(LEGACY_GRID_SIZE)
        .collect();
    letters.resize(LEGACY_GRID_SIZE, PADDING);
    letters
}
