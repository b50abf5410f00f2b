//! Sentence durations and the fixed-unit duration adder

use crate::domain::calendar::{
    CalendarDate, FixedDate, FIXED_DAYS_PER_MONTH, FIXED_DAYS_PER_YEAR, MONTHS_PER_YEAR,
};
use crate::error::{RemitError, Result};
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

/// Largest months value accepted in strict mode
pub const MAX_MONTHS: u32 = MONTHS_PER_YEAR - 1;

/// Largest days value accepted in strict mode
pub const MAX_DAYS: u32 = FIXED_DAYS_PER_MONTH - 1;

/// Regex for durations: "2y 3m 10d", "18m", "40d" (each part optional, in order)
fn duration_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"^(?:(\d+)\s*y)?\s*(?:(\d+)\s*m)?\s*(?:(\d+)\s*d)?$").unwrap()
    })
}

/// Length of a sentence as entered: years, months and days.
///
/// The fields are not normalised against each other; 18 months stays
/// 18 months rather than becoming 1 year 6 months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SentenceDuration {
    years: u32,
    months: u32,
    days: u32,
}

impl SentenceDuration {
    /// Create a duration with months 0-11 and days 0-29
    pub fn new(years: u32, months: u32, days: u32) -> Result<Self> {
        Self::unchecked(years, months, days).validate()
    }

    /// Create a duration without range checks. The arithmetic accepts any
    /// non-negative values.
    pub fn unchecked(years: u32, months: u32, days: u32) -> Self {
        SentenceDuration {
            years,
            months,
            days,
        }
    }

    /// Check months and days against their strict ranges
    pub fn validate(self) -> Result<Self> {
        if self.months > MAX_MONTHS {
            return Err(RemitError::InvalidDurationRange {
                field: "months",
                value: self.months,
                max: MAX_MONTHS,
            });
        }
        if self.days > MAX_DAYS {
            return Err(RemitError::InvalidDurationRange {
                field: "days",
                value: self.days,
                max: MAX_DAYS,
            });
        }
        Ok(self)
    }

    /// Parse duration text without range checks.
    ///
    /// At least one of the year, month or day parts must be present.
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || RemitError::InvalidDuration(input.to_string());

        let captures = duration_regex().captures(&normalized).ok_or_else(invalid)?;
        if captures.iter().skip(1).all(|group| group.is_none()) {
            return Err(invalid());
        }

        let part = |index: usize| -> Result<u32> {
            match captures.get(index) {
                Some(digits) => digits.as_str().parse().map_err(|_| invalid()),
                None => Ok(0),
            }
        };

        Ok(Self::unchecked(part(1)?, part(2)?, part(3)?))
    }

    pub fn years(&self) -> u32 {
        self.years
    }

    pub fn months(&self) -> u32 {
        self.months
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    /// Length in fixed-unit days (360-day years, 30-day months)
    pub fn total_fixed_days(&self) -> u64 {
        u64::from(self.years) * u64::from(FIXED_DAYS_PER_YEAR)
            + u64::from(self.months) * u64::from(FIXED_DAYS_PER_MONTH)
            + u64::from(self.days)
    }
}

impl FromStr for SentenceDuration {
    type Err = RemitError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)?.validate()
    }
}

impl fmt::Display for SentenceDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}y {}m {}d", self.years, self.months, self.days)
    }
}

/// Add a sentence to its start date under fixed-unit rules.
///
/// The components are added field by field, day overflow is carried in
/// 30-day months and month overflow in 12-month years. One day is then
/// taken off because the day of sentencing counts as served. The result is
/// the Latest Possible Discharge as a fixed-unit date.
pub fn add_duration(start: CalendarDate, duration: &SentenceDuration) -> Result<FixedDate> {
    let days_per_month = u64::from(FIXED_DAYS_PER_MONTH);
    let months_per_year = u64::from(MONTHS_PER_YEAR);

    let mut day = u64::from(start.day()) + u64::from(duration.days);
    let mut month = u64::from(start.month()) + u64::from(duration.months);
    let mut year = i64::from(start.year()) + i64::from(duration.years);

    // Equivalent to repeatedly taking 30 off the day and adding a month
    month += (day - 1) / days_per_month;
    day = (day - 1) % days_per_month + 1;

    year += ((month - 1) / months_per_year) as i64;
    month = (month - 1) % months_per_year + 1;

    // Sentencing day counts as served
    day -= 1;
    if day == 0 {
        day = days_per_month;
        month -= 1;
        if month == 0 {
            month = months_per_year;
            year -= 1;
        }
    }

    let year = i32::try_from(year).map_err(|_| {
        RemitError::InvalidDate(format!(
            "year {} is outside the supported range",
            year
        ))
    })?;

    // day is 1-30 and month 1-12 here, both fit in u32
    Ok(FixedDate::from_normalized(year, month as u32, day as u32))
}
