/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers and testers who need to look at the puzzles that
//! players receive, without going through the application.
//!
//! # Examples
//!
//! Show the puzzle of the first day in a 9x9 grid, in Spanish:
//!
//! ```text
//! $ sopa --day 0 -s 9 -l es
//! Puzzle 1 (day 0, es, 9x9)
//! S Ñ N C X A B T C
//! ...
//! ```
//!
//! Show the puzzle of today, for an application installed on March 1st 2025, in the language of
//! the locale, with definitions instead of words:
//!
//! ```text
//! $ sopa --installed 2025-03-01 --locale en_US --hints definition
//! ```
//!
//! Verify that 1000 generations of the same puzzle give the same grid:
//!
//! ```text
//! $ sopa --day 12 --repeat 1000
//! ```
//!
//! Generate 500 puzzles for random days and print placement statistics:
//!
//! ```text
//! $ sopa --random 500 -s 8 --summary
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime};
use clap::Parser;
use log::debug;
use rand::Rng;
use std::env;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use sopa::calendar::DayKey;
use sopa::config::{COPYRIGHT_NOTICE, EngineConfig, MIN_PLACED_WORDS};
use sopa::generator::puzzles::{Puzzle, PuzzleFactory};
use sopa::generator::themes::ThemeRegistry;
use sopa::hints::{WordHintMode, display_text};
use sopa::language::AppLanguage;

/// Show the daily word search puzzles.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Day offset since the installation date
    #[arg(long, allow_negative_numbers = true, conflicts_with = "installed")]
    day: Option<i64>,

    /// Installation date (YYYY-MM-DD). The day offset is computed from the clock
    #[arg(long)]
    installed: Option<NaiveDate>,

    /// Time to use instead of the local clock (YYYY-MM-DDTHH:MM[:SS])
    #[arg(long, requires = "installed", value_parser = parse_datetime)]
    now: Option<NaiveDateTime>,

    /// Number of rows and columns
    #[arg(short, long, default_value_t = 9)]
    size: usize,

    /// Display language
    #[arg(value_enum, short, long, conflicts_with = "locale")]
    language: Option<AppLanguage>,

    /// Locale identifier, such as es_ES or pt-BR (default: the LANG environment variable)
    #[arg(long)]
    locale: Option<String>,

    /// Number of consecutive days to show
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the puzzles in JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// How to show the words to find
    #[arg(value_enum, long, default_value_t = WordHintMode::Word)]
    hints: WordHintMode,

    /// List the themes
    #[arg(long, default_value_t = false)]
    ls: bool,

    /// Go through the themes in a shuffled order
    #[arg(long, default_value_t = false)]
    shuffle_order: bool,

    /// Number of themes
    #[arg(long)]
    theme_count: Option<usize>,

    /// Engine configuration file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Generate the puzzle the given number of times and verify that it never changes
    #[arg(long, conflicts_with = "random")]
    repeat: Option<usize>,

    /// Generate puzzles for the given number of random days
    #[arg(long)]
    random: Option<usize>,

    /// Print some statistics after generating the random puzzles
    #[arg(long, default_value_t = false, requires = "random")]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse a date and time, with or without seconds.
fn parse_datetime(value: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M"))
        .map_err(|e| format!("{value}: {e}"))
}

/// Parse and process command-line options.
///
/// Return the process exit code.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Build the engine configuration
    //
    let mut config: EngineConfig = match &args.config {
        Some(path) => match EngineConfig::load(path) {
            Ok(Some(c)) => c,
            Ok(None) => {
                eprintln!("Configuration file {} not found", path.display());
                return 1;
            }
            Err(e) => {
                eprintln!("Error: {}: {e}", path.display());
                return 1;
            }
        },
        None => EngineConfig::default(),
    };
    if let Some(count) = args.theme_count {
        config.theme_count = count;
    }
    if args.shuffle_order {
        config.randomized_order = true;
    }
    let config: EngineConfig = config.sanitized();
    debug!("Configuration: {config:?}");

    let registry: Arc<ThemeRegistry> = if config == EngineConfig::default() {
        ThemeRegistry::shared()
    } else {
        Arc::new(ThemeRegistry::new(&config))
    };
    let factory: PuzzleFactory = PuzzleFactory::new(registry);

    let language: AppLanguage = match (&args.language, &args.locale) {
        (Some(l), _) => *l,
        (None, Some(locale)) => AppLanguage::resolved(locale),
        (None, None) => AppLanguage::resolved(&env::var("LANG").unwrap_or_default()),
    };

    //
    // List the themes
    //
    if args.ls {
        for (i, theme) in factory.registry().themes(language).iter().enumerate() {
            println!("{:3} {}", i + 1, theme.join(" "));
        }
        return 0;
    }

    let day_key: DayKey = match (args.day, args.installed) {
        (Some(day), _) => DayKey::new(day),
        (None, Some(installed)) => {
            let now: NaiveDateTime = args.now.unwrap_or_else(|| Local::now().naive_local());
            DayKey::from_clock(installed, now, config.rotation_hour)
        }
        (None, None) => DayKey::default(),
    };

    if let Some(count) = args.random {
        return random_puzzles(&factory, count, args.size, language, args.summary);
    }

    if let Some(count) = args.repeat {
        return repeat_puzzle(&factory, day_key, count, args.size, language);
    }

    //
    // Print the puzzles of consecutive days
    //
    let puzzles: Vec<Puzzle> = (0..args.count as i64)
        .map(|i| factory.puzzle(DayKey::new(day_key.offset + i), args.size, language))
        .collect();

    if args.json {
        match serde_json::to_string_pretty(&puzzles) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 1;
            }
        }
        return 0;
    }

    for puzzle in &puzzles {
        println!(
            "Puzzle {} ({}, {}, {size}x{size})",
            puzzle.number,
            puzzle.day_key,
            puzzle.language,
            size = puzzle.size()
        );
        print!("{}", puzzle.grid);
        for word in &puzzle.words {
            println!("  {}", display_text(factory.registry(), word, args.hints));
        }
        println!();
    }
    0
}

/// Generate the puzzle `count` times and verify that it never changes.
fn repeat_puzzle(
    factory: &PuzzleFactory,
    day_key: DayKey,
    count: usize,
    size: usize,
    language: AppLanguage,
) -> u8 {
    let reference: Puzzle = factory.puzzle(day_key, size, language);
    for i in 1..count {
        if factory.puzzle(day_key, size, language) != reference {
            eprintln!("Generation {} differs from the first one", i + 1);
            return 1;
        }
    }
    println!(
        "{count} generations of puzzle {} ({day_key}, {language}, size {size}): identical",
        reference.number
    );
    0
}

/// Generate the puzzles of random days.
fn random_puzzles(
    factory: &PuzzleFactory,
    count: usize,
    size: usize,
    language: AppLanguage,
    summary: bool,
) -> u8 {
    let span: i64 = (factory.registry().theme_count() as i64).max(1) * 10;
    let mut rng = rand::rng();

    let start: Instant = Instant::now();
    let mut selected_total: usize = 0;
    let mut placed_total: usize = 0;
    let mut min_placed: usize = usize::MAX;
    let mut sparse: usize = 0;

    for i in 0..count {
        let day_key: DayKey = DayKey::new(rng.random_range(0..span));
        debug!("Iteration {i}: {day_key}");
        let selected: Vec<String> = factory.selected_words(day_key, size, language);
        let puzzle: Puzzle = factory.puzzle(day_key, size, language);

        selected_total += selected.len();
        placed_total += puzzle.words.len();
        min_placed = min_placed.min(puzzle.words.len());
        if puzzle.words.len() < MIN_PLACED_WORDS {
            sparse += 1;
        }
        println!(
            "{:>6} puzzle {:>3}: {}/{} words: {}",
            day_key.offset,
            puzzle.number,
            puzzle.words.len(),
            selected.len(),
            puzzle.words.join(" ")
        );
    }

    // Print some stats
    if summary && count > 0 {
        let duration: f32 = start.elapsed().as_secs_f32();
        println!(
            "
        total time = {}s
      average time = {}s
    words selected = {}
      words placed = {}
 min words placed = {}
    sparse puzzles = {}",
            duration,
            duration / count as f32,
            selected_total,
            placed_total,
            min_placed,
            sparse
        );
    }
    0
}
