/*
normalize.rs

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

//! Word normalization.
//!
//! Words are compared, placed, and looked up in their normalized form: upper case, without
//! diacritics.
//! The Spanish `Ñ` is a letter of its own, not an `N` with an accent, and is kept.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::{decompose_canonical, is_combining_mark};

use crate::language::ENYE;

/// Return the normalized form of the word.
///
/// The function is idempotent: normalizing a normalized word returns the same word.
pub fn normalize(word: &str) -> String {
    let mut normalized: String = String::with_capacity(word.len());

    // Compose first so that an `N` followed by a combining tilde becomes a single `Ñ`
    for c in word.trim().nfc() {
        for upper in c.to_uppercase() {
            if upper == ENYE {
                normalized.push(ENYE);
                continue;
            }
            decompose_canonical(upper, |d| {
                if !is_combining_mark(d) {
                    normalized.push(d);
                }
            });
        }
    }
    // Removing a trailing accent can leave a trailing space
    normalized.trim().to_string()
}

/// Return the number of letters in the word.
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Return the word with its letters in reverse order.
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_enye() {
        assert_eq!(normalize("año"), "AÑO");
        assert_eq!(normalize("mañána"), "MAÑANA");
        assert_eq!(normalize("ÑANDÚ"), "ÑANDU");
    }

    #[test]
    fn decomposed_enye_is_composed() {
        assert_eq!(normalize("an\u{303}o"), "AÑO");
        assert_eq!(normalize("AN\u{303}O"), "AÑO");
    }

    #[test]
    fn strips_other_diacritics() {
        assert_eq!(normalize("avión"), "AVION");
        assert_eq!(normalize("étoile"), "ETOILE");
        assert_eq!(normalize("estação"), "ESTACAO");
        assert_eq!(normalize("pingüino"), "PINGUINO");
        assert_eq!(normalize("Maçã"), "MACA");
    }

    #[test]
    fn uppercases_and_trims() {
        assert_eq!(normalize("  arbol "), "ARBOL");
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("a \u{301}"), "A");
    }

    #[test]
    fn idempotent() {
        for word in ["año", "mañána", "avión", "ÉTOILE", "coração", "straße", "Ǆemal"] {
            let once = normalize(word);
            assert_eq!(normalize(&once), once, "{word}");
        }
    }

    #[test]
    fn letters() {
        assert_eq!(letter_count("AÑO"), 3);
        assert_eq!(reversed("AÑO"), "OÑA");
    }
}
