/*
config.rs

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

//! Engine constants and the optional engine configuration file.
//!
//! The constants are product decisions shared by every caller: changing any of them changes the
//! puzzles that players receive for a given day.
//! The [`EngineConfig`] object groups the few knobs that callers can tune, and that must be
//! identical in every process that needs to produce the same puzzles (main application and
//! widget).

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::fs::File;
use std::io::{BufReader, ErrorKind};
use std::path::Path;

pub const COPYRIGHT_NOTICE: &str = "Copyright 2025 Hervé Quatremain
License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.
This is free software: you are free to change and redistribute it.
There is NO WARRANTY, to the extent permitted by law.";

/// Smallest grid size (number of rows and columns).
pub const MIN_GRID_SIZE: usize = 7;

/// Largest grid size.
pub const MAX_GRID_SIZE: usize = 12;

/// Local hour at which the daily puzzle changes.
pub const DEFAULT_ROTATION_HOUR: u32 = 9;

/// Number of themes, enough for a year of different puzzles.
pub const DEFAULT_THEME_COUNT: usize = 365;

/// Number of words in a synthesized theme.
pub const SYNTHESIZED_THEME_SIZE: usize = 24;

/// Minimum and maximum number of words selected for a puzzle.
pub const MIN_SELECTED_WORDS: usize = 5;
pub const MAX_SELECTED_WORDS: usize = 10;

/// Shortest and longest words that can be selected from a theme. The longest is also bounded by
/// the grid size.
pub const MIN_WORD_LENGTH: usize = 3;

/// Below this number of placed words, the generator retries with fewer words.
pub const MIN_PLACED_WORDS: usize = 4;

/// Number of random positions tried for a word before dropping it.
pub const PLACEMENT_ATTEMPTS: usize = 300;

/// Number of seeds tried in each language before a word is removed from the puzzle of the day.
pub const PLACEMENT_VARIANTS: usize = 8;

/// Number of words dropped from the tail of the word list for each generation retry.
pub const WORD_REDUCTIONS: [usize; 3] = [2, 4, 6];

/// Words used when a theme does not provide any usable word.
pub const SAFETY_WORDS: [&str; 6] = ["SOL", "MAR", "RIO", "LUNA", "FLOR", "ROCA"];

// Seed derivation constants (odd multipliers and salts)
pub const SEED_MULTIPLIER: u64 = 0x9E37_79B1_85EB_CA87;
pub const SEED_SALT: u64 = 0xC0DE_C0FF_EE12_345F;
pub const SELECTION_SALT: u64 = 0x000A_11CE_5EED;
pub const PLACEMENT_SALT: u64 = 0x00FE_EDBE_EF15;
pub const SYNTHESIS_SEED: u64 = 0x7E3A_5EED_0B1A_D5E7;
pub const STRIDE_SEED: u64 = 0x51DE_57E9_C0FF_EE01;
pub const PUZZLE_ORDER_SEED: u64 = 0x0D0E_5EED_2024_0365;

/// Type of errors when reading the configuration file.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The number of themes is zero.
    NoTheme,

    /// The rotation hour is not between 0 and 23.
    InvalidRotationHour(u32),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ConfigError::NoTheme => write!(f, "theme_count must be at least 1"),
            ConfigError::InvalidRotationHour(hour) => {
                write!(f, "rotation_hour must be between 0 and 23 (found {hour})")
            }
        }
    }
}

impl Error for ConfigError {}

/// Tunable parameters of the engine.
///
/// Two processes produce the same puzzles for the same day only if they share the same
/// [`EngineConfig`].
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of themes. If the hand-authored themes are not enough, then additional themes are
    /// synthesized from the word bank.
    pub theme_count: usize,

    /// Whether consecutive days go through the themes in a shuffled order instead of sequentially.
    pub randomized_order: bool,

    /// Local hour (0-23) at which the daily puzzle changes.
    pub rotation_hour: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            theme_count: DEFAULT_THEME_COUNT,
            randomized_order: false,
            rotation_hour: DEFAULT_ROTATION_HOUR,
        }
    }
}

impl EngineConfig {
    /// Return a copy of the configuration with all the values in their valid ranges.
    pub fn sanitized(&self) -> Self {
        Self {
            theme_count: self.theme_count.max(1),
            randomized_order: self.randomized_order,
            rotation_hour: self.rotation_hour.min(23),
        }
    }

    /// Verify that all the values are in their valid ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.theme_count == 0 {
            return Err(ConfigError::NoTheme);
        }
        if self.rotation_hour > 23 {
            return Err(ConfigError::InvalidRotationHour(self.rotation_hour));
        }
        Ok(())
    }

    /// Read the configuration from the given JSON file.
    ///
    /// Missing fields take their default values.
    /// Return None if the file does not exist.
    ///
    /// # Errors
    ///
    /// The function returns an error if the file cannot be read, is not valid JSON, or contains
    /// out of range values ([`ConfigError`]).
    pub fn load(path: &Path) -> Result<Option<Self>, Box<dyn Error>> {
        let file: File = match File::open(path) {
            Ok(f) => f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        };
        let reader: BufReader<File> = BufReader::new(file);
        let config: EngineConfig = serde_json::from_reader(reader)?;
        config.validate()?;
        debug!("Configuration loaded from {path:?}: {config:?}");
        Ok(Some(config))
    }
}

/// Clamp a grid size to the supported range.
pub fn clamp_grid_size(size: usize) -> usize {
    size.clamp(MIN_GRID_SIZE, MAX_GRID_SIZE)
}
