/*
themes.rs

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

//! Theme registry.
//!
//! A [`ThemeRegistry`] object holds the canonical themes, their translation in every display
//! language, and the lookup tables between canonical and localized words.
//! The registry is built once, from an [`EngineConfig`] object, and is never modified afterward.
//! Callers share it through an [`Arc`].
//!
//! When the hand-authored themes are fewer than [`EngineConfig::theme_count`], the registry
//! synthesizes additional themes from the words of the hand-authored themes.
//! Synthesis is seeded, so that every process builds the same themes.

use log::{debug, warn};
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, OnceLock};

use crate::config::{
    EngineConfig, SAFETY_WORDS, SEED_MULTIPLIER, STRIDE_SEED, SYNTHESIS_SEED,
    SYNTHESIZED_THEME_SIZE,
};
use crate::language::AppLanguage;

use super::normalize::normalize;
use super::rng::SeededRng;
use super::seed::{normalized_puzzle_index, puzzle_order};
use super::word_bank::{HAND_AUTHORED_THEMES, translations};

/// Maximum number of attempts per missing theme, for each synthesis method.
const SYNTHESIS_ATTEMPTS_PER_THEME: usize = 20;

/// Registry shared by the callers that use the default configuration.
static SHARED_REGISTRY: OnceLock<Arc<ThemeRegistry>> = OnceLock::new();

/// [`ThemeRegistry`] object.
#[derive(Debug)]
pub struct ThemeRegistry {
    /// Configuration used to build the registry.
    config: EngineConfig,

    /// Canonical (Spanish) themes.
    canonical: Vec<Vec<String>>,

    /// Themes translated to each non-canonical language, in the same order as
    /// [`ThemeRegistry::canonical`].
    localized: HashMap<AppLanguage, Vec<Vec<String>>>,

    /// Canonical word for every known word, in any language.
    /// When two languages use the same form, the canonical language wins, then the languages in
    /// the [`AppLanguage::ALL`] order.
    canonical_by_localized: HashMap<String, String>,

    /// Canonical word for every localized word, per language.
    canonical_by_language: HashMap<AppLanguage, HashMap<String, String>>,

    /// Localized word for every canonical word, per language.
    localized_by_canonical: HashMap<AppLanguage, HashMap<String, String>>,

    /// Day-to-theme permutation, when [`EngineConfig::randomized_order`] is set.
    order: Option<Vec<usize>>,
}

impl ThemeRegistry {
    /// Build a [`ThemeRegistry`] object.
    pub fn new(config: &EngineConfig) -> Self {
        let config: EngineConfig = config.sanitized();
        let hand_authored: Vec<Vec<String>> = HAND_AUTHORED_THEMES
            .iter()
            .map(|theme| normalize_theme(theme))
            .filter(|theme| !theme.is_empty())
            .collect();
        let canonical: Vec<Vec<String>> = build_canonical_themes(&hand_authored, config.theme_count);

        let mut canonical_by_localized: HashMap<String, String> = HashMap::new();
        for word in canonical.iter().flatten() {
            canonical_by_localized
                .entry(word.clone())
                .or_insert_with(|| word.clone());
        }

        let mut localized: HashMap<AppLanguage, Vec<Vec<String>>> = HashMap::new();
        let mut canonical_by_language: HashMap<AppLanguage, HashMap<String, String>> =
            HashMap::new();
        let mut localized_by_canonical: HashMap<AppLanguage, HashMap<String, String>> =
            HashMap::new();

        for language in AppLanguage::ALL {
            let table: HashMap<String, String> = translations(language)
                .iter()
                .map(|(canonical_word, localized_word)| {
                    (normalize(canonical_word), normalize(localized_word))
                })
                .collect();

            let themes: Vec<Vec<String>> = canonical
                .iter()
                .map(|theme| localize_theme(theme, &table))
                .collect();

            let mut reverse: HashMap<String, String> = HashMap::new();
            let mut forward: HashMap<String, String> = HashMap::new();
            for (canonical_theme, localized_theme) in canonical.iter().zip(themes.iter()) {
                for (canonical_word, localized_word) in canonical_theme.iter().zip(localized_theme)
                {
                    reverse
                        .entry(localized_word.clone())
                        .or_insert_with(|| canonical_word.clone());
                    forward
                        .entry(canonical_word.clone())
                        .or_insert_with(|| localized_word.clone());
                    canonical_by_localized
                        .entry(localized_word.clone())
                        .or_insert_with(|| canonical_word.clone());
                }
            }
            canonical_by_language.insert(language, reverse);
            localized_by_canonical.insert(language, forward);
            localized.insert(language, themes);
        }

        let order: Option<Vec<usize>> = if config.randomized_order {
            Some(puzzle_order(canonical.len()))
        } else {
            None
        };

        debug!(
            "Theme registry: {} themes ({} hand-authored), {} known words, randomized order = {}",
            canonical.len(),
            hand_authored.len(),
            canonical_by_localized.len(),
            config.randomized_order
        );

        Self {
            config,
            canonical,
            localized,
            canonical_by_localized,
            canonical_by_language,
            localized_by_canonical,
            order,
        }
    }

    /// Return the registry built from the default configuration.
    ///
    /// The registry is built on the first call, and then shared by all the following calls.
    pub fn shared() -> Arc<ThemeRegistry> {
        Arc::clone(
            SHARED_REGISTRY.get_or_init(|| Arc::new(ThemeRegistry::new(&EngineConfig::default()))),
        )
    }

    /// Configuration used to build the registry.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Number of themes.
    ///
    /// This is [`EngineConfig::theme_count`] unless the word bank is too small to provide that
    /// many distinct themes.
    pub fn theme_count(&self) -> usize {
        self.canonical.len()
    }

    /// Canonical themes.
    pub fn canonical_themes(&self) -> &[Vec<String>] {
        &self.canonical
    }

    /// Themes in the given language.
    pub fn themes(&self, language: AppLanguage) -> &[Vec<String>] {
        match self.localized.get(&language) {
            Some(themes) => themes,
            None => &self.canonical,
        }
    }

    /// Return the theme at the given index, in the given language.
    ///
    /// The index wraps around the number of themes.
    pub fn theme(&self, index: usize, language: AppLanguage) -> &[String] {
        let themes: &[Vec<String>] = self.themes(language);
        match themes.get(index % themes.len().max(1)) {
            Some(theme) => theme,
            None => &[],
        }
    }

    /// Return the index of the theme for the given day.
    pub fn theme_index(&self, day_offset: i64) -> usize {
        let index: usize = normalized_puzzle_index(day_offset, self.theme_count());
        match &self.order {
            Some(order) => order.get(index).copied().unwrap_or(index),
            None => index,
        }
    }

    /// Return the puzzle number that players see for the given day (starting at 1).
    pub fn puzzle_number(&self, day_offset: i64) -> usize {
        self.theme_index(day_offset) + 1
    }

    /// Return the canonical form of a word given in any language.
    ///
    /// Return None if the word is not in any theme.
    pub fn canonical_word(&self, word: &str) -> Option<&str> {
        self.canonical_by_localized
            .get(&normalize(word))
            .map(|w| w.as_str())
    }

    /// Return the canonical form of a word given in the given language.
    pub fn canonical_word_in(&self, word: &str, language: AppLanguage) -> Option<&str> {
        self.canonical_by_language
            .get(&language)?
            .get(&normalize(word))
            .map(|w| w.as_str())
    }

    /// Return the form of a canonical word in the given language.
    pub fn localized_word(&self, canonical: &str, language: AppLanguage) -> Option<&str> {
        self.localized_by_canonical
            .get(&language)?
            .get(&normalize(canonical))
            .map(|w| w.as_str())
    }
}

/// Normalize the words of a theme and remove the empty and duplicated words.
fn normalize_theme(words: &[&str]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    words
        .iter()
        .map(|w| normalize(w))
        .filter(|w| !w.is_empty() && seen.insert(w.clone()))
        .collect()
}

/// Translate the words of a theme.
///
/// Words missing from the translation table are kept unchanged.
pub fn localize_theme(theme: &[String], table: &HashMap<String, String>) -> Vec<String> {
    theme
        .iter()
        .map(|word| match table.get(word) {
            Some(translation) => normalize(translation),
            None => normalize(word),
        })
        .collect()
}

/// Return the theme signature, which does not depend on the order of the words.
fn signature(theme: &[String]) -> String {
    let mut words: Vec<&str> = theme.iter().map(|w| w.as_str()).collect();
    words.sort_unstable();
    words.join(",")
}

/// Return `target` themes: the hand-authored themes first, and then synthesized themes.
fn build_canonical_themes(hand_authored: &[Vec<String>], target: usize) -> Vec<Vec<String>> {
    if hand_authored.len() >= target {
        return hand_authored[..target].to_vec();
    }
    let mut themes: Vec<Vec<String>> = hand_authored.to_vec();
    let synthesized: Vec<Vec<String>> = synthesize_themes(hand_authored, target - themes.len());
    themes.extend(synthesized);
    if themes.is_empty() {
        themes.push(SAFETY_WORDS.iter().map(|w| w.to_string()).collect());
    }
    themes
}

/// Synthesize up to `count` themes from the words of the given themes.
///
/// Synthesized themes differ from each other and from the given themes.
/// Fewer themes are returned only when the word bank is too small to provide `count` distinct
/// themes.
pub fn synthesize_themes(themes: &[Vec<String>], count: usize) -> Vec<Vec<String>> {
    // Word bank, without duplicates, in the order of the themes
    let mut seen: HashSet<&str> = HashSet::new();
    let mut bank: Vec<String> = themes
        .iter()
        .flatten()
        .filter(|w| seen.insert(w.as_str()))
        .cloned()
        .collect();
    if bank.is_empty() {
        bank = SAFETY_WORDS.iter().map(|w| w.to_string()).collect();
    }
    let theme_size: usize = SYNTHESIZED_THEME_SIZE.min(bank.len());
    let max_attempts: usize = count.saturating_mul(SYNTHESIS_ATTEMPTS_PER_THEME);

    let mut signatures: HashSet<String> = themes.iter().map(|t| signature(t)).collect();
    let mut synthesized: Vec<Vec<String>> = Vec::with_capacity(count);

    // Random subsets of the bank
    let mut attempt: usize = 0;
    while synthesized.len() < count && attempt < max_attempts {
        let mut rng: SeededRng =
            SeededRng::new(SYNTHESIS_SEED ^ (attempt as u64).wrapping_mul(SEED_MULTIPLIER));
        let mut words: Vec<String> = bank.clone();
        rng.shuffle(&mut words);
        words.truncate(theme_size);
        if signatures.insert(signature(&words)) {
            synthesized.push(words);
        }
        attempt += 1;
    }

    // Walk the bank with a random start and step
    let mut stride: usize = 0;
    while synthesized.len() < count && stride < max_attempts {
        let mut rng: SeededRng = SeededRng::new(STRIDE_SEED ^ stride as u64);
        let start: usize = rng.below(bank.len());
        let step: usize = 1 + rng.below(bank.len() - 1);
        let mut taken: HashSet<usize> = HashSet::new();
        let mut words: Vec<String> = Vec::with_capacity(theme_size);
        let mut index: usize = start;
        for _ in 0..bank.len() * theme_size {
            if words.len() == theme_size {
                break;
            }
            if taken.insert(index) {
                words.push(bank[index].clone());
            }
            index = (index + step) % bank.len();
            // Move to the next cycle when the walk comes back to a word already taken
            if taken.contains(&index) {
                index = (index + 1) % bank.len();
            }
        }
        if !words.is_empty() && signatures.insert(signature(&words)) {
            synthesized.push(words);
        }
        stride += 1;
    }

    if synthesized.len() < count {
        warn!(
            "Only {} distinct themes can be synthesized ({} requested)",
            synthesized.len(),
            count
        );
    }
    debug!(
        "Synthesized {} themes of {} words ({} subset attempts, {} stride attempts)",
        synthesized.len(),
        theme_size,
        attempt,
        stride
    );
    synthesized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_THEME_COUNT;

    fn registry(theme_count: usize, randomized_order: bool) -> ThemeRegistry {
        ThemeRegistry::new(&EngineConfig {
            theme_count,
            randomized_order,
            ..EngineConfig::default()
        })
    }

    fn theme(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn default_registry_has_all_themes() {
        let r = ThemeRegistry::shared();
        assert_eq!(r.theme_count(), DEFAULT_THEME_COUNT);
        assert!(r.canonical_themes().iter().all(|t| !t.is_empty()));
        assert!(Arc::ptr_eq(&r, &ThemeRegistry::shared()));
    }

    #[test]
    fn hand_authored_themes_come_first() {
        let r = registry(10, false);
        assert_eq!(r.canonical_themes()[0][0], "ARBOL");
        assert_eq!(r.canonical_themes()[1][0], "QUESO");
        assert_eq!(r.canonical_themes()[2][0], "TREN");
        assert_eq!(r.canonical_themes()[3].len(), SYNTHESIZED_THEME_SIZE);
    }

    #[test]
    fn fewer_themes_than_hand_authored() {
        let r = registry(2, false);
        assert_eq!(r.theme_count(), 2);
        assert_eq!(r.theme_index(2), 0);
    }

    #[test]
    fn themes_are_distinct_and_reproducible() {
        let a = registry(DEFAULT_THEME_COUNT, false);
        let b = registry(DEFAULT_THEME_COUNT, false);
        assert_eq!(a.canonical_themes(), b.canonical_themes());
        let signatures: HashSet<String> = a.canonical_themes().iter().map(|t| signature(t)).collect();
        assert_eq!(signatures.len(), DEFAULT_THEME_COUNT);
        for t in a.canonical_themes() {
            let unique: HashSet<&String> = t.iter().collect();
            assert_eq!(unique.len(), t.len());
        }
    }

    #[test]
    fn synthesis_from_small_bank() {
        let themes = vec![theme(&["SOL", "MAR", "RIO"])];
        // A three-word bank only gives one subset of three words, already used
        assert!(synthesize_themes(&themes, 5).is_empty());

        let synthesized = synthesize_themes(&[], 3);
        assert_eq!(synthesized.len(), 1);
        assert_eq!(synthesized[0].len(), SAFETY_WORDS.len());
    }

    #[test]
    fn synthesis_stops_when_combinations_run_out() {
        // 25 words in themes of 24 words give exactly 25 distinct themes
        let words: Vec<String> = (0..25).map(|i| format!("W{i:02}")).collect();
        let themes = vec![words];
        let synthesized = synthesize_themes(&themes, 30);
        assert_eq!(synthesized.len(), 25);
        let signatures: HashSet<String> = synthesized.iter().map(|t| signature(t)).collect();
        assert_eq!(signatures.len(), 25);
        assert!(synthesized.iter().all(|t| t.len() == SYNTHESIZED_THEME_SIZE));
    }

    #[test]
    fn localized_themes_are_translated() {
        let r = registry(5, false);
        for language in [
            AppLanguage::English,
            AppLanguage::French,
            AppLanguage::Portuguese,
        ] {
            for (canonical, localized) in r.canonical_themes().iter().zip(r.themes(language)) {
                assert_eq!(canonical.len(), localized.len());
                assert_ne!(canonical, localized);
            }
        }
        assert_eq!(r.themes(AppLanguage::Spanish), r.canonical_themes());
        assert_eq!(r.theme(0, AppLanguage::English)[0], "TREE");
    }

    #[test]
    fn canonical_lookup() {
        let r = registry(3, false);
        assert_eq!(r.canonical_word("tree"), Some("ARBOL"));
        assert_eq!(r.canonical_word("ARBOL"), Some("ARBOL"));
        assert_eq!(r.canonical_word("forêt"), Some("BOSQUE"));
        assert_eq!(r.canonical_word("nope"), None);
        assert_eq!(r.canonical_word_in("TREE", AppLanguage::English), Some("ARBOL"));
        assert_eq!(r.canonical_word_in("TREE", AppLanguage::French), None);
        assert_eq!(r.localized_word("arbol", AppLanguage::English), Some("TREE"));
        assert_eq!(r.localized_word("ARBOL", AppLanguage::Spanish), Some("ARBOL"));
        assert_eq!(r.localized_word("NOPE", AppLanguage::English), None);
    }

    #[test]
    fn every_translation_maps_back() {
        let r = registry(DEFAULT_THEME_COUNT, false);
        for language in AppLanguage::ALL {
            for (canonical, localized) in r.canonical_themes().iter().zip(r.themes(language)) {
                for (c, l) in canonical.iter().zip(localized) {
                    assert_eq!(r.canonical_word_in(l, language), Some(c.as_str()));
                }
            }
        }
    }

    #[test]
    fn sequential_and_randomized_order() {
        let sequential = registry(30, false);
        assert_eq!(sequential.theme_index(0), 0);
        assert_eq!(sequential.theme_index(31), 1);
        assert_eq!(sequential.puzzle_number(-1), 30);

        let randomized = registry(30, true);
        let indexes: Vec<usize> = (0..30).map(|d| randomized.theme_index(d)).collect();
        assert_eq!(indexes, puzzle_order(30));
        assert_eq!(randomized.puzzle_number(0), indexes[0] + 1);
        assert_eq!(randomized.theme_index(30), randomized.theme_index(0));
    }
}
