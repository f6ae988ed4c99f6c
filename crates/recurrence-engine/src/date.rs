//! Calendar dates that may not exist.
//!
//! Month and year stepping keep the day-of-month verbatim, so the engine needs a
//! date type that can represent `2025-02-31` long enough for the validator to
//! reject it. [`CalendarDate`] stores raw components and only consults
//! `chrono` when asked whether the components form a real date.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, Result};

/// A `YYYY-MM-DD` date held as raw year/month/day components.
///
/// The month is always in `1..=12` and the day in `1..=31`, but the pair is not
/// checked against the month length. Ordering is lexicographic on
/// `(year, month, day)`, which is the same as comparing the zero-padded strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate {
    year: i32,
    month: u32,
    day: u32,
}

impl CalendarDate {
    /// Build a date from components.
    ///
    /// # Errors
    /// Returns [`EngineError::InvalidDate`] if the month is outside `1..=12` or
    /// the day is outside `1..=31`. A day that does not exist in the given month
    /// (e.g. April 31) is accepted.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return Err(EngineError::InvalidDate(format!(
                "{year:04}-{month:02}-{day:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    pub(crate) const fn from_parts(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn day(self) -> u32 {
        self.day
    }

    /// Reconstruct the date through `chrono`.
    ///
    /// Returns `Some` only when the components name a real calendar date, so
    /// `2025-02-29` and `2025-04-31` yield `None` while `2024-02-29` does not.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// Whether the components form a real calendar date.
    pub fn is_real(self) -> bool {
        self.to_naive().is_some()
    }

    /// Resolve day overflow by carrying into the following month.
    ///
    /// `2025-02-31` becomes `2025-03-03`. Real dates come back unchanged.
    /// Returns `None` only when the year is outside chrono's supported range.
    pub fn normalized(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1)?
            .checked_add_days(Days::new(u64::from(self.day.saturating_sub(1))))
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self::from_parts(date.year(), date.month(), date.day())
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl FromStr for CalendarDate {
    type Err = EngineError;

    /// Parse a zero-padded `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || EngineError::InvalidDate(s.to_string());

        let bytes = s.as_bytes();
        if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }

        let digits = |range: std::ops::Range<usize>| -> Result<u32> {
            let part = &s[range];
            if !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let year = digits(0..4)?;
        let month = digits(5..7)?;
        let day = digits(8..10)?;

        // Four ASCII digits always fit in an i32.
        Self::new(year as i32, month, day).map_err(|_| invalid())
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
