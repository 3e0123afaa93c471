/*
grid.rs

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

//! Letter grid and straight-line selections.
//!
//! A [`PuzzleGrid`] is the square matrix of letters returned by the generator.
//! It never changes after generation.
//!
//! The grid does not store where the words have been placed.
//! When a caller needs the cells of a word, for example to outline the words that the player
//! already found, the [`PuzzleGrid::best_path`] method searches the grid for the word again.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::error::Error;
use std::fmt;

use super::normalize::{normalize, reversed};

/// The eight directions a word can follow, as (row step, column step).
pub const DIRECTIONS: [(isize, isize); 8] = [
    (0, 1),
    (1, 0),
    (1, 1),
    (1, -1),
    (0, -1),
    (-1, 0),
    (-1, -1),
    (-1, 1),
];

/// Cell coordinates, starting at 0 from the top left corner.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPosition {
    pub row: usize,
    pub col: usize,
}

impl GridPosition {
    /// Create a [`GridPosition`] object.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Return the position moved `steps` times in the given direction, or None if the position
    /// would have negative coordinates.
    pub fn offset(&self, direction: (isize, isize), steps: usize) -> Option<Self> {
        let row: usize = self
            .row
            .checked_add_signed(direction.0.checked_mul(steps as isize)?)?;
        let col: usize = self
            .col
            .checked_add_signed(direction.1.checked_mul(steps as isize)?)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for GridPosition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Type of errors when building a grid from rows of letters.
#[derive(Debug, PartialEq, Eq)]
pub enum GridError {
    /// No rows.
    Empty,

    /// A row does not have as many letters as there are rows.
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A cell holds a blank instead of a letter.
    EmptyCell { row: usize, col: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GridError::Empty => write!(f, "the grid has no rows"),
            GridError::NotSquare {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} letters instead of {expected}"
            ),
            GridError::EmptyCell { row, col } => {
                write!(f, "the cell at row {row}, column {col} is empty")
            }
        }
    }
}

impl Error for GridError {}

/// Square grid of letters.
///
/// Serialized as a list of row strings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct PuzzleGrid {
    /// Number of rows and columns.
    size: usize,

    /// Letters, row after row.
    cells: Vec<char>,
}

impl PuzzleGrid {
    /// Create the grid from its letters, row after row.
    ///
    /// The caller guarantees that there are `size * size` letters.
    pub(crate) fn from_cells(size: usize, cells: Vec<char>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        Self { size, cells }
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Return the letter at the given position, or None if the position is outside the grid.
    pub fn get(&self, position: GridPosition) -> Option<char> {
        if position.row >= self.size || position.col >= self.size {
            return None;
        }
        self.cells.get(position.row * self.size + position.col).copied()
    }

    /// Return the rows as strings.
    pub fn rows(&self) -> Vec<String> {
        self.cells
            .chunks(self.size.max(1))
            .map(|row| row.iter().collect())
            .collect()
    }

    /// Return all the letters, row after row.
    pub fn letters(&self) -> &[char] {
        &self.cells
    }

    /// Whether the given letter appears in the grid.
    pub fn contains_letter(&self, letter: char) -> bool {
        self.cells.contains(&letter)
    }

    /// Whether the position is inside the grid.
    pub fn contains(&self, position: GridPosition) -> bool {
        position.row < self.size && position.col < self.size
    }

    /// Return the cells from `start` to `end`, both included.
    ///
    /// Return None if the two cells are not on the same row, the same column, or the same
    /// diagonal, or if a cell is outside the grid.
    pub fn straight_path(&self, start: GridPosition, end: GridPosition) -> Option<Vec<GridPosition>> {
        if !self.contains(start) || !self.contains(end) {
            return None;
        }
        let dr: isize = end.row as isize - start.row as isize;
        let dc: isize = end.col as isize - start.col as isize;
        if !(dr == 0 || dc == 0 || dr.abs() == dc.abs()) {
            return None;
        }

        let steps: usize = dr.unsigned_abs().max(dc.unsigned_abs());
        let direction: (isize, isize) = (dr.signum(), dc.signum());
        let mut path: Vec<GridPosition> = Vec::with_capacity(steps + 1);
        for step in 0..=steps {
            let position: GridPosition = start.offset(direction, step)?;
            if !self.contains(position) {
                return None;
            }
            path.push(position);
        }
        Some(path)
    }

    /// Return the letters along the path, or None if the path leaves the grid.
    pub fn read(&self, path: &[GridPosition]) -> Option<String> {
        path.iter().map(|p| self.get(*p)).collect()
    }

    /// Return the word of the list that the path spells, in either direction.
    ///
    /// The path must have at least two cells.
    pub fn word_at<'a>(&self, path: &[GridPosition], words: &'a [String]) -> Option<&'a str> {
        if path.len() < 2 {
            return None;
        }
        let candidate: String = normalize(&self.read(path)?);
        let backward: String = reversed(&candidate);
        words
            .iter()
            .find(|w| {
                let word: String = normalize(w);
                word == candidate || word == backward
            })
            .map(|w| w.as_str())
    }

    /// Return all the paths that spell the word, in either direction.
    ///
    /// Paths are listed by starting cell (row after row), then in the order of [`DIRECTIONS`].
    pub fn candidate_paths(&self, word: &str) -> Vec<Vec<GridPosition>> {
        let letters: Vec<char> = normalize(word).chars().collect();
        let backward: Vec<char> = letters.iter().rev().copied().collect();
        let mut results: Vec<Vec<GridPosition>> = Vec::new();
        if letters.is_empty() {
            return results;
        }

        for row in 0..self.size {
            for col in 0..self.size {
                let start: GridPosition = GridPosition::new(row, col);
                for direction in DIRECTIONS {
                    let path: Option<Vec<GridPosition>> = (0..letters.len())
                        .map(|step| start.offset(direction, step).filter(|p| self.contains(*p)))
                        .collect();
                    let Some(path) = path else {
                        continue;
                    };
                    let collected: Vec<char> = path.iter().filter_map(|p| self.get(*p)).collect();
                    if collected == letters || collected == backward {
                        results.push(path);
                    }
                }
            }
        }
        results
    }

    /// Return the path of the word that shares the most cells with the solved positions.
    ///
    /// A word can legitimately appear more than once in the grid, through letters that other
    /// words or the random filling provide.
    /// Preferring the path that overlaps the cells already known as solved keeps the outline of a
    /// found word at the same place between calls.
    /// On a tie, the first path in the [`PuzzleGrid::candidate_paths`] order wins.
    pub fn best_path(
        &self,
        word: &str,
        solved_positions: &HashSet<GridPosition>,
    ) -> Option<Vec<GridPosition>> {
        let mut best: Option<(usize, Vec<GridPosition>)> = None;
        for path in self.candidate_paths(word) {
            let score: usize = path
                .iter()
                .filter(|p| solved_positions.contains(p))
                .count();
            match &best {
                Some((best_score, _)) if *best_score >= score => (),
                _ => best = Some((score, path)),
            }
        }
        best.map(|(_, path)| path)
    }
}

impl TryFrom<Vec<String>> for PuzzleGrid {
    type Error = GridError;

    /// Build a grid from rows of letters. Letters are normalized.
    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err(GridError::Empty);
        }
        let size: usize = rows.len();
        let mut cells: Vec<char> = Vec::with_capacity(size * size);
        for (row, letters) in rows.iter().enumerate() {
            let normalized: Vec<char> = normalize(letters).chars().collect();
            if normalized.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: normalized.len(),
                });
            }
            if let Some(col) = normalized.iter().position(|c| c.is_whitespace()) {
                return Err(GridError::EmptyCell { row, col });
            }
            cells.extend(normalized);
        }
        Ok(Self { size, cells })
    }
}

impl From<PuzzleGrid> for Vec<String> {
    fn from(grid: PuzzleGrid) -> Self {
        grid.rows()
    }
}

impl fmt::Display for PuzzleGrid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.size.max(1)) {
            let line: Vec<String> = row.iter().map(|c| c.to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
