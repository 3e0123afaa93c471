/*
placement.rs

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

//! Place words in a grid.
//!
//! The [`WordSearchGenerator::generate`] method places the longest words first, each one in a
//! random direction and at a random position, and then fills the remaining cells with random
//! letters.
//!
//! A word that cannot be placed after [`PLACEMENT_ATTEMPTS`] tries is dropped.
//! If fewer than [`MIN_PLACED_WORDS`] words could be placed, then the generator tries again with
//! fewer words, and returns the best grid.
//!
//! For Spanish, a cell is reserved before placing the words, so that a `Ñ` can always be shown
//! in the grid even if no word contains that letter.

use log::{Level, debug, log_enabled};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::fmt;

use crate::config::{
    MIN_PLACED_WORDS, PLACEMENT_ATTEMPTS, PLACEMENT_SALT, WORD_REDUCTIONS, clamp_grid_size,
};
use crate::language::{AppLanguage, ENYE};

use super::grid::{DIRECTIONS, GridPosition, PuzzleGrid};
use super::normalize::{letter_count, normalize};
use super::rng::SeededRng;

/// Type of errors when placing a word.
#[derive(Debug, PartialEq)]
pub enum PlacementError {
    /// The word has less than two letters.
    TooShort,

    /// The word is longer than the grid size.
    TooLong,

    /// No free position found for the word.
    NoRoom,
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlacementError::TooShort => write!(f, "word too short"),
            PlacementError::TooLong => write!(f, "word longer than the grid"),
            PlacementError::NoRoom => write!(f, "no room left"),
        }
    }
}

/// Grid returned by the generator, with the words that it contains.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedGrid {
    /// Letters.
    pub grid: PuzzleGrid,

    /// Words placed in the grid, longest first.
    pub placed_words: Vec<String>,
}

/// [`WordSearchGenerator`] object.
#[derive(Debug)]
pub struct WordSearchGenerator {
    /// Number of rows and columns, always between the minimum and maximum grid sizes.
    pub size: usize,

    /// Language of the words. Selects the filling alphabet.
    pub language: AppLanguage,

    /// Number of placement rounds the last generation needed (1 when no retry was needed).
    pub rounds: usize,
}

impl WordSearchGenerator {
    /// Create the object.
    ///
    /// The grid size is clamped to the supported range.
    pub fn new(grid_size: usize, language: AppLanguage) -> Self {
        Self {
            size: clamp_grid_size(grid_size),
            language,
            rounds: 0,
        }
    }

    /// Generate a grid that contains the given words.
    ///
    /// Words are normalized, and duplicated words and words longer than the grid are ignored.
    /// The result only depends on the words, the seed, the grid size, and the language.
    pub fn generate(&mut self, words: &[String], seed: u64) -> GeneratedGrid {
        let words: Vec<String> = self.prepare_words(words);
        debug!(
            "Generating a {size}x{size} grid ({language}) for {count} words",
            size = self.size,
            language = self.language,
            count = words.len()
        );

        self.rounds = 1;
        let first: GeneratedGrid = self.make_grid(&words, seed ^ PLACEMENT_SALT);
        if first.placed_words.len() >= MIN_PLACED_WORDS {
            self.dump(&first);
            return first;
        }

        let mut best: GeneratedGrid = first;
        for reduction in WORD_REDUCTIONS {
            self.rounds += 1;
            let keep: usize = words
                .len()
                .saturating_sub(reduction)
                .max(MIN_PLACED_WORDS)
                .min(words.len());
            let reduced: &[String] = &words[..keep];
            debug!(
                "Only {} words placed, retrying with {} words",
                best.placed_words.len(),
                reduced.len()
            );

            let attempt: GeneratedGrid =
                self.make_grid(reduced, seed ^ reduction as u64 ^ PLACEMENT_SALT);
            let enough: usize = MIN_PLACED_WORDS.max(reduced.len().saturating_sub(1));
            if attempt.placed_words.len() >= enough {
                self.dump(&attempt);
                return attempt;
            }
            if attempt.placed_words.len() > best.placed_words.len() {
                best = attempt;
            }
        }
        if best.placed_words.len() < MIN_PLACED_WORDS {
            debug!(
                "Only {} words could be placed in the {size}x{size} grid",
                best.placed_words.len(),
                size = self.size
            );
        }
        self.dump(&best);
        best
    }

    /// Normalize the words, sort them by decreasing length, and remove the words that cannot be
    /// used.
    fn prepare_words(&self, words: &[String]) -> Vec<String> {
        let mut prepared: Vec<String> = words
            .iter()
            .map(|w| normalize(w))
            .filter(|w| !w.is_empty() && letter_count(w) <= self.size)
            .collect();
        // Stable sort: words of the same length keep their order
        prepared.sort_by_key(|w| Reverse(letter_count(w)));
        let mut seen: HashSet<String> = HashSet::new();
        prepared.retain(|w| seen.insert(w.clone()));
        prepared
    }

    /// Run one placement round.
    fn make_grid(&self, words: &[String], seed: u64) -> GeneratedGrid {
        let mut board: Board = Board::new(self.size, SeededRng::new(seed));
        if self.language.requires_enye() {
            let row: usize = board.rng.below(self.size);
            let col: usize = board.rng.below(self.size);
            board.reserved = Some(GridPosition::new(row, col));
        }

        let mut placed_words: Vec<String> = Vec::with_capacity(words.len());
        for word in words {
            match board.place(word) {
                Ok(()) => placed_words.push(word.clone()),
                Err(e) => debug!("    Word {word} dropped: {e}"),
            }
        }

        let filler: Vec<usize> = board.fill(self.language.alphabet());
        if self.language.requires_enye() && !board.contains(ENYE) {
            let index: Option<usize> = match board.rng.choose(&filler) {
                Some(i) => Some(*i),
                None => board.reserved.map(|p| p.row * self.size + p.col),
            };
            if let Some(i) = index {
                debug!("    Adding a {ENYE} at ({}, {})", i / self.size, i % self.size);
                board.cells[i] = Some(ENYE);
            }
        }

        GeneratedGrid {
            grid: board.freeze(),
            placed_words,
        }
    }

    /// Print the grid when debugging is enabled.
    fn dump(&self, generated: &GeneratedGrid) {
        if log_enabled!(Level::Debug) {
            debug!(
                "Placed words ({} rounds): {:?}\n{}",
                self.rounds, generated.placed_words, generated.grid
            );
        }
    }
}

/// Grid being built. Empty cells are None.
struct Board {
    size: usize,
    cells: Vec<Option<char>>,
    reserved: Option<GridPosition>,
    rng: SeededRng,
}

impl Board {
    fn new(size: usize, rng: SeededRng) -> Self {
        Self {
            size,
            cells: vec![None; size * size],
            reserved: None,
            rng,
        }
    }

    /// Place the word in a random direction and at a random position.
    fn place(&mut self, word: &str) -> Result<(), PlacementError> {
        let letters: Vec<char> = word.chars().collect();
        let count: usize = letters.len();
        if count <= 1 {
            return Err(PlacementError::TooShort);
        }
        if count > self.size {
            return Err(PlacementError::TooLong);
        }

        for _ in 0..PLACEMENT_ATTEMPTS {
            let direction: (isize, isize) = DIRECTIONS[self.rng.below(DIRECTIONS.len())];
            let (min_row, max_row) = start_range(direction.0, count, self.size);
            let (min_col, max_col) = start_range(direction.1, count, self.size);
            if min_row > max_row || min_col > max_col {
                continue;
            }
            let row: usize = min_row + self.rng.below(max_row - min_row + 1);
            let col: usize = min_col + self.rng.below(max_col - min_col + 1);
            let start: GridPosition = GridPosition::new(row, col);

            let Some(path) = self.free_path(start, direction, &letters) else {
                continue;
            };
            for (index, letter) in path.into_iter().zip(letters.iter()) {
                self.cells[index] = Some(*letter);
            }
            return Ok(());
        }
        Err(PlacementError::NoRoom)
    }

    /// Return the cell indexes for the word, or None if a cell is reserved, outside the grid, or
    /// already holds a different letter.
    fn free_path(
        &self,
        start: GridPosition,
        direction: (isize, isize),
        letters: &[char],
    ) -> Option<Vec<usize>> {
        let mut path: Vec<usize> = Vec::with_capacity(letters.len());
        for (step, letter) in letters.iter().enumerate() {
            let position: GridPosition = start.offset(direction, step)?;
            if position.row >= self.size || position.col >= self.size {
                return None;
            }
            if self.reserved == Some(position) {
                return None;
            }
            let index: usize = position.row * self.size + position.col;
            match self.cells[index] {
                Some(c) if c != *letter => return None,
                _ => path.push(index),
            }
        }
        Some(path)
    }

    /// Fill the empty cells with random letters, row after row.
    ///
    /// Return the indexes of the filled cells.
    fn fill(&mut self, alphabet: &[char]) -> Vec<usize> {
        let mut filler: Vec<usize> = Vec::new();
        for index in 0..self.cells.len() {
            if self.cells[index].is_none() {
                let letter: char = alphabet[self.rng.below(alphabet.len())];
                self.cells[index] = Some(letter);
                filler.push(index);
            }
        }
        filler
    }

    fn contains(&self, letter: char) -> bool {
        self.cells.contains(&Some(letter))
    }

    /// Return the finished grid. All the cells must have been filled.
    fn freeze(self) -> PuzzleGrid {
        let cells: Vec<char> = self.cells.into_iter().map(|c| c.unwrap_or('X')).collect();
        PuzzleGrid::from_cells(self.size, cells)
    }
}

/// Return the range of valid starting coordinates along one axis.
///
/// `step` is the direction along that axis (-1, 0, or 1).
fn start_range(step: isize, count: usize, size: usize) -> (usize, usize) {
    let min: usize = if step < 0 { count - 1 } else { 0 };
    let max: usize = if step > 0 { size - count } else { size - 1 };
    (min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| w.to_string()).collect()
    }

    fn assert_words_in_grid(generated: &GeneratedGrid) {
        for word in &generated.placed_words {
            assert!(
                !generated.grid.candidate_paths(word).is_empty(),
                "{word} not in grid\n{}",
                generated.grid
            );
        }
    }

    #[test]
    fn places_words_and_fills_grid() {
        let mut generator = WordSearchGenerator::new(9, AppLanguage::English);
        let list = words(&["TREE", "EARTH", "CLOUD", "SEA", "SUN", "RIVER", "FLOWER"]);
        let generated = generator.generate(&list, 1234);
        assert_eq!(generated.grid.size(), 9);
        assert_eq!(generated.grid.letters().len(), 81);
        assert!(generated.placed_words.len() >= MIN_PLACED_WORDS);
        assert!(generated.placed_words.len() <= list.len());
        assert!(!generated.grid.contains_letter(ENYE));
        assert!(
            generated
                .grid
                .letters()
                .iter()
                .all(|c| AppLanguage::English.alphabet().contains(c))
        );
        assert_words_in_grid(&generated);
    }

    #[test]
    fn placed_words_sorted_longest_first() {
        let mut generator = WordSearchGenerator::new(10, AppLanguage::Spanish);
        let list = words(&["SOL", "MARIPOSA", "LUNA", "BOSQUE", "RIO"]);
        let generated = generator.generate(&list, 5);
        let lengths: Vec<usize> = generated
            .placed_words
            .iter()
            .map(|w| letter_count(w))
            .collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn spanish_grid_always_has_enye() {
        let list = words(&["ARBOL", "TIERRA", "NUBE", "MAR", "SOL"]);
        for seed in 0..200 {
            let mut generator = WordSearchGenerator::new(7, AppLanguage::Spanish);
            let generated = generator.generate(&list, seed);
            assert!(generated.grid.contains_letter(ENYE), "seed {seed}");
        }
    }

    #[test]
    fn same_input_same_grid() {
        let list = words(&["ARBOL", "TIERRA", "NUBE", "MAR", "SOL", "AÑO"]);
        let mut a = WordSearchGenerator::new(8, AppLanguage::Spanish);
        let mut b = WordSearchGenerator::new(8, AppLanguage::Spanish);
        assert_eq!(a.generate(&list, 99), b.generate(&list, 99));
    }

    #[test]
    fn unusable_words_are_ignored() {
        let mut generator = WordSearchGenerator::new(7, AppLanguage::English);
        let list = words(&["", "A", "SUN", "sun", "MOUNTAINS", "SEA", "SKY", "OAK"]);
        let generated = generator.generate(&list, 3);
        let placed: HashSet<&str> = generated.placed_words.iter().map(|w| w.as_str()).collect();
        assert!(!placed.contains(""));
        assert!(!placed.contains("MOUNTAINS"));
        assert_eq!(generated.placed_words.len(), placed.len());
        assert!(generated.placed_words.len() <= 5);
    }

    #[test]
    fn grid_size_is_clamped() {
        let list = words(&["SOL", "MAR", "RIO", "LUNA"]);
        assert_eq!(
            WordSearchGenerator::new(2, AppLanguage::English)
                .generate(&list, 1)
                .grid
                .size(),
            7
        );
        assert_eq!(
            WordSearchGenerator::new(50, AppLanguage::English)
                .generate(&list, 1)
                .grid
                .size(),
            12
        );
    }

    #[test]
    fn crowded_grid_degrades() {
        // Ten 7-letter words cannot all fit in a 7x7 grid
        let list = words(&[
            "ABCDEFG", "HIJKLMN", "OPQRSTU", "VWXYZAB", "CDEFGHI", "JKLMNOP", "QRSTUVW",
            "XYZABCD", "EFGHIJK", "LMNOPQR",
        ]);
        let mut generator = WordSearchGenerator::new(7, AppLanguage::English);
        let generated = generator.generate(&list, 11);
        assert!(generated.placed_words.len() < list.len());
        assert!(generated.placed_words.len() >= MIN_PLACED_WORDS);
        assert_words_in_grid(&generated);
    }

    #[test]
    fn single_letter_words_are_rejected() {
        let mut board = Board::new(7, SeededRng::new(1));
        assert_eq!(board.place("A"), Err(PlacementError::TooShort));
        assert_eq!(board.place("ABCDEFGH"), Err(PlacementError::TooLong));
        assert_eq!(board.place("ABC"), Ok(()));
    }

    #[test]
    fn reserved_cell_is_avoided() {
        let mut board = Board::new(7, SeededRng::new(8));
        board.reserved = Some(GridPosition::new(3, 3));
        for _ in 0..6 {
            let _ = board.place("ABCDEFG");
        }
        assert_eq!(board.cells[3 * 7 + 3], None);
    }

    #[test]
    fn start_ranges() {
        assert_eq!(start_range(1, 3, 7), (0, 4));
        assert_eq!(start_range(0, 3, 7), (0, 6));
        assert_eq!(start_range(-1, 3, 7), (2, 6));
        assert_eq!(start_range(1, 7, 7), (0, 0));
    }
}
