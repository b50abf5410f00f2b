//! Earliest discharge: taking remission off the latest discharge date

use crate::domain::calendar::{
    carry_forward, days_in_calendar_month, CalendarDate, MONTHS_PER_YEAR,
};
use crate::domain::policy::ShortSentencePolicy;
use crate::domain::remission::{Remission, RemissionTier};
use crate::error::{RemitError, Result};

/// Subtract remission from the latest discharge date and move to the next day.
///
/// Days are borrowed from real months, so month lengths and leap years are
/// respected. Months and years are then taken off as whole units. The
/// running date may be invalid in between (31 February, 29 February in a
/// common year); the final day-after step always lands on a real date.
pub fn subtract_remission(lpd: CalendarDate, remission: &Remission) -> Result<CalendarDate> {
    let mut year = lpd.year();
    let mut month = lpd.month();
    let mut day = i64::from(lpd.day()) - i64::from(remission.days);

    while day <= 0 {
        if month == 1 {
            month = MONTHS_PER_YEAR;
            year -= 1;
        } else {
            month -= 1;
        }
        day += i64::from(days_in_calendar_month(month, year));
    }

    let months_per_year = i64::from(MONTHS_PER_YEAR);
    let mut month = i64::from(month) - i64::from(remission.months);
    let mut year = i64::from(year);
    if month <= 0 {
        let borrowed = -month / months_per_year + 1;
        month += borrowed * months_per_year;
        year -= borrowed;
    }

    year -= i64::from(remission.years);

    let year = i32::try_from(year).map_err(|_| {
        RemitError::InvalidDate(format!("year {} is outside the supported range", year))
    })?;

    // month is 1-12 and day 1-31 here
    let (year, month, day) = carry_forward(year, month as u32, day as u32 + 1);
    CalendarDate::new(year, month, day)
}

/// Earliest Possible Discharge for a sentence in the given tier.
///
/// Sentences that earn nothing follow `policy`; everything else goes through
/// [`subtract_remission`].
pub fn earliest_discharge(
    lpd: CalendarDate,
    remission: &Remission,
    tier: RemissionTier,
    policy: ShortSentencePolicy,
) -> Result<CalendarDate> {
    if tier == RemissionTier::None && policy == ShortSentencePolicy::ReturnLpd {
        return Ok(lpd);
    }
    subtract_remission(lpd, remission)
}
