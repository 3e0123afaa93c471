/*
calendar.rs

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

//! Day keys and the daily rotation.
//!
//! The puzzle of the day is identified by a [`DayKey`], the number of days between the
//! installation date and the current puzzle day.
//! The puzzle day changes at the rotation hour, not at midnight: before that hour, the puzzle of
//! the previous day is still active.
//!
//! Only the offset is stored, never a date derived from it, so that time zone and daylight saving
//! changes do not move the player to another puzzle.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of days since the installation date.
#[derive(
    Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
)]
pub struct DayKey {
    pub offset: i64,
}

impl DayKey {
    /// Create a [`DayKey`] object.
    pub fn new(offset: i64) -> Self {
        Self { offset }
    }

    /// Return the day key at the given time.
    ///
    /// Times before the installation date give the first day key (offset 0).
    pub fn from_clock(installation: NaiveDate, now: NaiveDateTime, rotation_hour: u32) -> Self {
        let day: NaiveDate = puzzle_date(now, rotation_hour);
        let offset: i64 = day.signed_duration_since(installation).num_days();
        Self {
            offset: offset.max(0),
        }
    }

    /// Return the day key for the local clock.
    pub fn today(installation: NaiveDate, rotation_hour: u32) -> Self {
        Self::from_clock(installation, Local::now().naive_local(), rotation_hour)
    }

    /// Return the puzzle day of the day key, or None if the date is out of range.
    pub fn date(&self, installation: NaiveDate) -> Option<NaiveDate> {
        installation.checked_add_signed(TimeDelta::try_days(self.offset)?)
    }

    /// Return the day key of the following day.
    pub fn next(&self) -> Self {
        Self {
            offset: self.offset.saturating_add(1),
        }
    }
}

impl fmt::Display for DayKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "day {}", self.offset)
    }
}

/// Return the time of the rotation on the given date.
fn rotation_time(date: NaiveDate, rotation_hour: u32) -> NaiveDateTime {
    let time: NaiveTime =
        NaiveTime::from_hms_opt(rotation_hour.min(23), 0, 0).unwrap_or_default();
    date.and_time(time)
}

/// Return the puzzle day at the given time.
pub fn puzzle_date(now: NaiveDateTime, rotation_hour: u32) -> NaiveDate {
    let today: NaiveDate = now.date();
    if now >= rotation_time(today, rotation_hour) {
        return today;
    }
    today.pred_opt().unwrap_or(today)
}

/// Return the last rotation at or before the given time.
pub fn current_rotation_boundary(now: NaiveDateTime, rotation_hour: u32) -> NaiveDateTime {
    rotation_time(puzzle_date(now, rotation_hour), rotation_hour)
}

/// Return the first rotation after the given time.
pub fn next_rotation_boundary(now: NaiveDateTime, rotation_hour: u32) -> NaiveDateTime {
    let day: NaiveDate = puzzle_date(now, rotation_hour);
    rotation_time(day.succ_opt().unwrap_or(day), rotation_hour)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn rotation_at_nine() {
        let installed = date(2025, 3, 1);
        assert_eq!(DayKey::from_clock(installed, at(2025, 3, 1, 9, 0), 9), DayKey::new(0));
        assert_eq!(DayKey::from_clock(installed, at(2025, 3, 2, 8, 59), 9), DayKey::new(0));
        assert_eq!(DayKey::from_clock(installed, at(2025, 3, 2, 9, 0), 9), DayKey::new(1));
        assert_eq!(DayKey::from_clock(installed, at(2025, 3, 31, 23, 0), 9), DayKey::new(30));
    }

    #[test]
    fn before_installation_is_day_zero() {
        let installed = date(2025, 3, 10);
        assert_eq!(DayKey::from_clock(installed, at(2025, 3, 10, 8, 0), 9), DayKey::new(0));
        assert_eq!(DayKey::from_clock(installed, at(2024, 12, 25, 12, 0), 9), DayKey::new(0));
    }

    #[test]
    fn crosses_years() {
        let installed = date(2024, 12, 31);
        assert_eq!(DayKey::from_clock(installed, at(2025, 1, 1, 10, 0), 9), DayKey::new(1));
        // 2024 is a leap year
        let installed = date(2024, 2, 28);
        assert_eq!(DayKey::from_clock(installed, at(2024, 3, 1, 10, 0), 9), DayKey::new(2));
    }

    #[test]
    fn boundaries() {
        let now = at(2025, 6, 15, 7, 30);
        assert_eq!(current_rotation_boundary(now, 9), at(2025, 6, 14, 9, 0));
        assert_eq!(next_rotation_boundary(now, 9), at(2025, 6, 15, 9, 0));

        let now = at(2025, 6, 15, 9, 0);
        assert_eq!(current_rotation_boundary(now, 9), at(2025, 6, 15, 9, 0));
        assert_eq!(next_rotation_boundary(now, 9), at(2025, 6, 16, 9, 0));

        let now = at(2025, 6, 15, 0, 0);
        assert_eq!(current_rotation_boundary(now, 0), at(2025, 6, 15, 0, 0));
    }

    #[test]
    fn day_key_to_date() {
        let installed = date(2025, 1, 30);
        assert_eq!(DayKey::new(0).date(installed), Some(installed));
        assert_eq!(DayKey::new(2).date(installed), Some(date(2025, 2, 1)));
        assert_eq!(DayKey::new(-1).date(installed), Some(date(2025, 1, 29)));
        assert_eq!(DayKey::new(i64::MAX).date(installed), None);
        assert_eq!(DayKey::new(4).next(), DayKey::new(5));
    }

    #[test]
    fn serialization() {
        let json = serde_json::to_string(&DayKey::new(12)).unwrap();
        assert_eq!(json, r#"{"offset":12}"#);
        assert_eq!(DayKey::new(-3).to_string(), "day -3");
    }
}
