/*
language.rs

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

//! Display languages.
//!
//! The language decides which translation of the themes is used, and which alphabet fills the
//! empty cells of the grid.
//! Spanish is the canonical language: theme words are authored in Spanish and translated to the
//! other languages.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, FromRepr};

/// Letters for languages that only use the 26 Latin letters (accents are stripped).
const LATIN_ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Spanish letters, with `Ñ` as a distinct letter.
const SPANISH_ALPHABET: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// The Spanish letter that the generator always makes visible in Spanish grids.
pub const ENYE: char = 'Ñ';

/// Display language.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    ValueEnum,
    FromRepr,
    Display,
    Default,
)]
#[repr(u8)]
#[serde(rename_all = "lowercase")]
pub enum AppLanguage {
    #[default]
    #[value(name = "es")]
    #[strum(serialize = "es")]
    Spanish,
    #[value(name = "en")]
    #[strum(serialize = "en")]
    English,
    #[value(name = "fr")]
    #[strum(serialize = "fr")]
    French,
    #[value(name = "pt")]
    #[strum(serialize = "pt")]
    Portuguese,
}

impl AppLanguage {
    /// All the supported languages, canonical language first.
    pub const ALL: [AppLanguage; 4] = [
        AppLanguage::Spanish,
        AppLanguage::English,
        AppLanguage::French,
        AppLanguage::Portuguese,
    ];

    /// Resolve a locale identifier, such as `es`, `en_US`, or `pt-BR`, to a language.
    ///
    /// Only the primary language subtag is considered.
    /// Unknown or empty identifiers resolve to Spanish.
    pub fn resolved(locale: &str) -> Self {
        let primary: String = locale
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();
        match primary.as_str() {
            "en" => AppLanguage::English,
            "fr" => AppLanguage::French,
            "pt" => AppLanguage::Portuguese,
            _ => AppLanguage::Spanish,
        }
    }

    /// Return the ISO 639-1 code of the language.
    pub fn code(&self) -> &'static str {
        match self {
            AppLanguage::Spanish => "es",
            AppLanguage::English => "en",
            AppLanguage::French => "fr",
            AppLanguage::Portuguese => "pt",
        }
    }

    /// Return the letters used to fill the empty grid cells.
    pub fn alphabet(&self) -> &'static [char] {
        match self {
            AppLanguage::Spanish => &SPANISH_ALPHABET,
            _ => &LATIN_ALPHABET,
        }
    }

    /// Whether the grid must always show at least one `Ñ`.
    pub fn requires_enye(&self) -> bool {
        *self == AppLanguage::Spanish
    }
}
