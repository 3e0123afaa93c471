/*
game.rs

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

//! Manage the status of a game in progress.
//!
//! The player selects a word by giving its first and its last cells, either in one move with
//! [`Game::select`], or with two successive taps with [`Game::tap`].
//! Words can be selected in both directions.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::generator::grid::GridPosition;
use crate::generator::normalize::normalize;
use crate::generator::puzzles::Puzzle;

/// Result of a selection.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The selection is a puzzle word that the player had not found yet.
    Found {
        word: String,
        path: Vec<GridPosition>,
    },

    /// The selection is a puzzle word that the player already found.
    AlreadyFound {
        word: String,
        path: Vec<GridPosition>,
    },

    /// The selection is not a puzzle word.
    /// The path is the selected line, or only the two cells if they are not aligned.
    Missed { path: Vec<GridPosition> },
}

/// Result of a tap.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum TapOutcome {
    /// The cell is the start of a new selection.
    Anchored(GridPosition),

    /// The player tapped the start cell again, which cancels the selection.
    Cleared,

    /// The cell is outside the grid or the puzzle is already solved.
    Ignored,

    /// The cell ends the selection.
    Selected(SelectionOutcome),
}

/// Manage the status of the game in progress.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Game {
    /// Puzzle details.
    pub puzzle: Puzzle,

    /// Words that the player found, in upper case.
    found_words: HashSet<String>,

    /// Cells of the words that the player found.
    solved_positions: HashSet<GridPosition>,

    /// First cell of a two-tap selection.
    anchor: Option<GridPosition>,

    /// Number of selections that did not match a word.
    misses: usize,
}

impl Game {
    /// Create a [`Game`] object.
    pub fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            found_words: HashSet::new(),
            solved_positions: HashSet::new(),
            anchor: None,
            misses: 0,
        }
    }

    /// Create a [`Game`] object from a saved progress.
    ///
    /// Words that are not in the puzzle and cells outside the grid are ignored, which protects
    /// against a progress saved for another puzzle.
    pub fn restore<W, P>(puzzle: Puzzle, found_words: W, solved_positions: P) -> Self
    where
        W: IntoIterator<Item = String>,
        P: IntoIterator<Item = GridPosition>,
    {
        let found_words: HashSet<String> = found_words
            .into_iter()
            .map(|w| normalize(&w))
            .filter(|w| puzzle.words.contains(w))
            .collect();
        let solved_positions: HashSet<GridPosition> = solved_positions
            .into_iter()
            .filter(|p| puzzle.grid.contains(*p))
            .collect();
        debug!(
            "Restored {} found words and {} solved cells for puzzle {}",
            found_words.len(),
            solved_positions.len(),
            puzzle.number
        );
        Self {
            puzzle,
            found_words,
            solved_positions,
            anchor: None,
            misses: 0,
        }
    }

    /// Restart the game, but keep the puzzle.
    pub fn reset(&mut self) {
        self.found_words.clear();
        self.solved_positions.clear();
        self.anchor = None;
        self.misses = 0;
    }

    /// Select the cells from `start` to `end`.
    pub fn select(&mut self, start: GridPosition, end: GridPosition) -> SelectionOutcome {
        let Some(path) = self.puzzle.grid.straight_path(start, end) else {
            self.misses += 1;
            return SelectionOutcome::Missed {
                path: vec![start, end],
            };
        };
        let Some(word) = self
            .puzzle
            .grid
            .word_at(&path, &self.puzzle.words)
            .map(|w| w.to_uppercase())
        else {
            self.misses += 1;
            return SelectionOutcome::Missed { path };
        };

        if self.found_words.contains(&word) {
            return SelectionOutcome::AlreadyFound { word, path };
        }
        debug!("Word {word} found at {start} -> {end}");
        self.found_words.insert(word.clone());
        self.solved_positions.extend(path.iter().copied());
        SelectionOutcome::Found { word, path }
    }

    /// Process a tap on a cell.
    ///
    /// The first tap sets the start of the selection, and the second tap ends it.
    pub fn tap(&mut self, position: GridPosition) -> TapOutcome {
        if !self.puzzle.grid.contains(position) || self.is_solved() {
            return TapOutcome::Ignored;
        }
        match self.anchor.take() {
            None => {
                self.anchor = Some(position);
                TapOutcome::Anchored(position)
            }
            Some(anchor) if anchor == position => TapOutcome::Cleared,
            Some(anchor) => TapOutcome::Selected(self.select(anchor, position)),
        }
    }

    /// Return the start of the current two-tap selection.
    pub fn anchor(&self) -> Option<GridPosition> {
        self.anchor
    }

    /// Words that the player found.
    pub fn found_words(&self) -> &HashSet<String> {
        &self.found_words
    }

    /// Cells of the words that the player found.
    pub fn solved_positions(&self) -> &HashSet<GridPosition> {
        &self.solved_positions
    }

    /// Return the words that the player still has to find, in the puzzle order.
    pub fn remaining_words(&self) -> Vec<&str> {
        self.puzzle
            .words
            .iter()
            .filter(|w| !self.found_words.contains(*w))
            .map(|w| w.as_str())
            .collect()
    }

    /// Whether the player found all the words.
    pub fn is_solved(&self) -> bool {
        self.puzzle
            .words
            .iter()
            .all(|w| self.found_words.contains(w))
    }

    /// Return the number of selections that did not match a word.
    pub fn get_misses(&self) -> usize {
        self.misses
    }

    /// Return the cells of every found word, in the puzzle order.
    ///
    /// When a word appears several times in the grid, the occurrence that covers the most solved
    /// cells is returned.
    pub fn outlines(&self) -> Vec<(String, Vec<GridPosition>)> {
        self.puzzle
            .words
            .iter()
            .filter(|w| self.found_words.contains(*w))
            .filter_map(|w| {
                self.puzzle
                    .grid
                    .best_path(w, &self.solved_positions)
                    .map(|path| (w.clone(), path))
            })
            .collect()
    }
}
