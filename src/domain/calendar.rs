//! Fixed-unit and real calendar dates, and conversion between them
//!
//! Sentence arithmetic is done on a bookkeeping calendar where every month
//! has 30 days and every year has 12 months ([`FixedDate`]). Dates shown to a
//! user are always real Gregorian dates ([`CalendarDate`]). The two are kept
//! as distinct types; a `FixedDate` only reaches the user through
//! [`fixed_to_calendar`].

use crate::error::{RemitError, Result};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::fmt::{self, Write};

/// Months in a year, in both calendars
pub const MONTHS_PER_YEAR: u32 = 12;

/// Days in every month of the fixed-unit calendar
pub const FIXED_DAYS_PER_MONTH: u32 = 30;

/// Days in every year of the fixed-unit calendar
pub const FIXED_DAYS_PER_YEAR: u32 = MONTHS_PER_YEAR * FIXED_DAYS_PER_MONTH;

/// Real month lengths (index 0 unused, February without the leap day)
const DAYS_IN_MONTH: [u32; 13] = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Gregorian leap year rule
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Real number of days in `month` of `year`
pub const fn days_in_calendar_month(month: u32, year: i32) -> u32 {
    debug_assert!(month >= 1 && month <= MONTHS_PER_YEAR);

    if month == 2 && is_leap_year(year) {
        29
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// A real Gregorian date. Always valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Build a date from its components, rejecting anything that is not a
    /// real calendar day.
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| {
                RemitError::InvalidDate(format!(
                    "{:04}-{:02}-{:02} is not a calendar date",
                    year, month, day
                ))
            })
    }

    /// Parse user input as YYYY-MM-DD or DD-MM-YYYY
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();

        NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(trimmed, "%d-%m-%Y"))
            .map(CalendarDate)
            .map_err(|_| RemitError::InvalidDate(input.to_string()))
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Render with a chrono strftime pattern.
    ///
    /// Patterns with time or zone fields cannot be rendered for a date and
    /// are rejected.
    pub fn format(&self, pattern: &str) -> Result<String> {
        let mut rendered = String::new();
        write!(rendered, "{}", self.0.format(pattern)).map_err(|_| {
            RemitError::Config(format!("Invalid date_format: '{}'", pattern))
        })?;
        Ok(rendered)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// A date in the fixed-unit calendar: month 1-12, day 1-30.
///
/// The day may exceed the real length of the month (30 February is fine
/// here); that is resolved by [`fixed_to_calendar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDate {
    year: i32,
    month: u32,
    day: u32,
}

impl FixedDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self> {
        if !(1..=MONTHS_PER_YEAR).contains(&month) || !(1..=FIXED_DAYS_PER_MONTH).contains(&day) {
            return Err(RemitError::InvalidDate(format!(
                "{:04}-{:02}-{:02} is not a fixed-unit date",
                year, month, day
            )));
        }
        Ok(FixedDate { year, month, day })
    }

    /// Caller guarantees month 1-12 and day 1-30
    pub(crate) fn from_normalized(year: i32, month: u32, day: u32) -> Self {
        debug_assert!((1..=MONTHS_PER_YEAR).contains(&month));
        debug_assert!((1..=FIXED_DAYS_PER_MONTH).contains(&day));
        FixedDate { year, month, day }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn day(&self) -> u32 {
        self.day
    }
}

/// Convert a fixed-unit date to the real calendar date it lands on.
///
/// Any day beyond the real month length spills into the following month(s).
/// Fails only when the year is outside the range chrono can represent.
pub fn fixed_to_calendar(fixed: FixedDate) -> Result<CalendarDate> {
    let (year, month, day) = carry_forward(fixed.year, fixed.month, fixed.day);
    CalendarDate::new(year, month, day)
}

/// Move excess days past the end of the real month into later months
pub(crate) fn carry_forward(mut year: i32, mut month: u32, mut day: u32) -> (i32, u32, u32) {
    loop {
        let length = days_in_calendar_month(month, year);
        if day <= length {
            return (year, month, day);
        }
        day -= length;
        month += 1;
        if month > MONTHS_PER_YEAR {
            month = 1;
            year += 1;
        }
    }
}
