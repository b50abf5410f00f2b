//! Tiered remission rules

use crate::domain::calendar::{FIXED_DAYS_PER_MONTH, FIXED_DAYS_PER_YEAR, MONTHS_PER_YEAR};
use crate::domain::duration::SentenceDuration;
use serde::Serialize;
use std::fmt;

/// Sentences up to this many fixed days earn nothing
pub const NO_REMISSION_LIMIT: u64 = 30;

/// Upper bound of the short-sentence tier
pub const SHORT_SENTENCE_LIMIT: u64 = 44;

/// Which rule produced the remission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RemissionTier {
    /// A month or less: no remission
    None,
    /// 31-44 days: the days beyond one month
    ShortSentence,
    /// 45 days or more: a third, unit by unit
    PerfectThird,
}

impl RemissionTier {
    pub fn for_total_days(total_fixed_days: u64) -> Self {
        match total_fixed_days {
            0..=NO_REMISSION_LIMIT => RemissionTier::None,
            31..=SHORT_SENTENCE_LIMIT => RemissionTier::ShortSentence,
            _ => RemissionTier::PerfectThird,
        }
    }
}

impl fmt::Display for RemissionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RemissionTier::None => "no remission",
            RemissionTier::ShortSentence => "short sentence",
            RemissionTier::PerfectThird => "perfect third",
        };
        f.write_str(label)
    }
}

/// Time taken off a sentence.
///
/// `days` is always below 30. `months` is not carried into years and can
/// reach 12 for some inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Remission {
    pub years: u32,
    pub months: u32,
    pub days: u32,
}

impl Remission {
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }

    /// Size in fixed-unit days
    pub fn total_fixed_days(&self) -> u64 {
        u64::from(self.years) * u64::from(FIXED_DAYS_PER_YEAR)
            + u64::from(self.months) * u64::from(FIXED_DAYS_PER_MONTH)
            + u64::from(self.days)
    }
}

impl fmt::Display for Remission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}",
            plural(self.years, "year"),
            plural(self.months, "month"),
            plural(self.days, "day")
        )
    }
}

fn plural(count: u32, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

/// Divide and round half up, in integers
pub fn round_half_up(numerator: u64, divisor: u64) -> u64 {
    debug_assert!(divisor > 0);
    (2 * numerator + divisor) / (2 * divisor)
}

/// Remission earned by a sentence of the given length
pub fn calculate_remission(duration: &SentenceDuration) -> Remission {
    let total = duration.total_fixed_days();

    match RemissionTier::for_total_days(total) {
        RemissionTier::None => Remission::default(),
        RemissionTier::ShortSentence => Remission {
            years: 0,
            months: 0,
            // 1-14 by the tier bounds
            days: (total - NO_REMISSION_LIMIT) as u32,
        },
        RemissionTier::PerfectThird => perfect_third(duration),
    }
}

/// A third of each unit; remainders are converted down into the next unit
/// before it is divided.
fn perfect_third(duration: &SentenceDuration) -> Remission {
    let months_per_year = u64::from(MONTHS_PER_YEAR);
    let days_per_month = u64::from(FIXED_DAYS_PER_MONTH);

    let input_years = u64::from(duration.years());
    let years = input_years / 3;
    let leftover_years = input_years - years * 3;

    let month_pool = u64::from(duration.months()) + leftover_years * months_per_year;
    let mut months = month_pool / 3;
    let leftover_months = month_pool - months * 3;

    let day_pool = u64::from(duration.days()) + leftover_months * days_per_month;
    let mut days = round_half_up(day_pool, 3);

    months += days / days_per_month;
    days %= days_per_month;

    // Each third of a u32 input (plus carries) stays within u32
    Remission {
        years: years as u32,
        months: months as u32,
        days: days as u32,
    }
}
