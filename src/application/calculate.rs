//! Discharge calculation use case
//!
//! Runs the full pipeline: fixed-unit addition gives the latest discharge,
//! the remission rules give the credit, and subtraction on the real calendar
//! gives the earliest discharge.

use crate::domain::{
    add_duration, calculate_remission, earliest_discharge, fixed_to_calendar, CalendarDate,
    Remission, RemissionTier, SentenceDuration, ShortSentencePolicy,
};
use crate::error::Result;
use crate::infrastructure::Config;
use serde::Serialize;
use tracing::{debug, info};

/// Outcome of one calculation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DischargeCalculation {
    pub start: CalendarDate,
    pub duration: SentenceDuration,
    /// Latest Possible Discharge
    pub lpd: CalendarDate,
    pub remission: Remission,
    pub tier: RemissionTier,
    /// Earliest Possible Discharge
    pub epd: CalendarDate,
}

/// Compute LPD, remission and EPD for a sentence
pub fn calculate(
    start: CalendarDate,
    duration: &SentenceDuration,
    policy: ShortSentencePolicy,
) -> Result<DischargeCalculation> {
    let fixed_lpd = add_duration(start, duration)?;
    debug!(?fixed_lpd, "added sentence in fixed units");

    let lpd = fixed_to_calendar(fixed_lpd)?;
    debug!(%lpd, "latest possible discharge");

    let tier = RemissionTier::for_total_days(duration.total_fixed_days());
    let remission = calculate_remission(duration);
    debug!(%tier, %remission, "remission");

    let epd = earliest_discharge(lpd, &remission, tier, policy)?;
    debug!(%epd, %policy, "earliest possible discharge");

    Ok(DischargeCalculation {
        start,
        duration: *duration,
        lpd,
        remission,
        tier,
        epd,
    })
}

/// Service for running calculations under a loaded config
pub struct CalculateService {
    config: Config,
}

impl CalculateService {
    /// Create a new calculate service
    pub fn new(config: Config) -> Self {
        CalculateService { config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Calculate from already-parsed values.
    ///
    /// Range checks on the duration only apply when `strict_ranges` is set.
    pub fn execute(
        &self,
        start: CalendarDate,
        duration: SentenceDuration,
    ) -> Result<DischargeCalculation> {
        let duration = if self.config.strict_ranges {
            duration.validate()?
        } else {
            duration
        };

        info!(%start, %duration, "calculating discharge");
        calculate(start, &duration, self.config.short_sentence_policy)
    }

    /// Calculate from user-entered text
    pub fn execute_input(&self, start: &str, duration: &str) -> Result<DischargeCalculation> {
        let start = CalendarDate::parse(start)?;
        let duration = SentenceDuration::parse(duration)?;
        self.execute(start, duration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RemitError;

    fn date(year: i32, month: u32, day: u32) -> CalendarDate {
        CalendarDate::new(year, month, day).unwrap()
    }

    fn run(start: CalendarDate, years: u32, months: u32, days: u32) -> DischargeCalculation {
        calculate(
            start,
            &SentenceDuration::unchecked(years, months, days),
            ShortSentencePolicy::ReturnLpd,
        )
        .unwrap()
    }

    #[test]
    fn test_ten_day_sentence() {
        let result = run(date(2024, 1, 1), 0, 0, 10);
        assert_eq!(result.lpd, date(2024, 1, 10));
        assert!(result.remission.is_zero());
        assert_eq!(result.tier, RemissionTier::None);
        assert_eq!(result.epd, result.lpd);
    }

    #[test]
    fn test_forty_day_sentence() {
        let result = run(date(2024, 1, 1), 0, 0, 40);
        assert_eq!(result.tier, RemissionTier::ShortSentence);
        assert_eq!(result.remission.days, 10);
        assert_eq!(result.lpd, date(2024, 2, 10));
        assert_eq!(result.epd, date(2024, 2, 1));
    }

    #[test]
    fn test_three_year_sentence() {
        let result = run(date(2024, 1, 1), 3, 0, 0);
        assert_eq!(result.tier, RemissionTier::PerfectThird);
        assert_eq!(
            result.remission,
            Remission {
                years: 1,
                months: 0,
                days: 0
            }
        );
        assert_eq!(result.lpd, date(2026, 12, 30));
        assert_eq!(result.epd, date(2025, 12, 31));
    }

    #[test]
    fn test_one_month_across_february() {
        let result = run(date(2023, 2, 1), 0, 1, 0);
        assert!(result.remission.is_zero());
        assert_eq!(result.lpd, date(2023, 3, 2));
        assert_eq!(result.epd, result.lpd);
    }

    #[test]
    fn test_month_or_less_always_discharges_on_lpd() {
        let start = date(2024, 1, 31);
        for days in 0..=29 {
            let result = run(start, 0, 0, days);
            assert!(result.remission.is_zero());
            assert_eq!(result.epd, result.lpd);
        }
    }

    #[test]
    fn test_add_day_policy_for_short_sentence() {
        let result = calculate(
            date(2024, 1, 1),
            &SentenceDuration::unchecked(0, 0, 10),
            ShortSentencePolicy::AddDay,
        )
        .unwrap();
        assert_eq!(result.lpd, date(2024, 1, 10));
        assert_eq!(result.epd, date(2024, 1, 11));
    }

    #[test]
    fn test_epd_never_after_lpd_when_remission_earned() {
        let start = date(2023, 11, 30);
        for years in 0..3 {
            for months in 0..12 {
                for days in [0, 1, 14, 15, 29] {
                    let result = run(start, years, months, days);
                    if !result.remission.is_zero() {
                        assert!(result.epd <= result.lpd, "{:?}", result);
                    }
                }
            }
        }
    }

    #[test]
    fn test_service_strict_ranges() {
        let service = CalculateService::new(Config::default());
        let err = service
            .execute(date(2024, 1, 1), SentenceDuration::unchecked(0, 12, 0))
            .unwrap_err();
        assert!(matches!(err, RemitError::InvalidDurationRange { .. }));
    }

    #[test]
    fn test_service_tolerant_ranges() {
        let service = CalculateService::new(Config {
            strict_ranges: false,
            ..Config::default()
        });
        let result = service.execute_input("2024-01-01", "40d").unwrap();
        assert_eq!(result.remission.days, 10);
    }

    #[test]
    fn test_service_parses_input() {
        let service = CalculateService::new(Config::default());
        let result = service.execute_input("01-01-2024", "3y").unwrap();
        assert_eq!(result.lpd, date(2026, 12, 30));

        assert!(matches!(
            service.execute_input("2024-02-30", "3y").unwrap_err(),
            RemitError::InvalidDate(_)
        ));
        assert!(matches!(
            service.execute_input("2024-02-01", "three years").unwrap_err(),
            RemitError::InvalidDuration(_)
        ));
    }

    #[test]
    fn test_serializes_to_json() {
        let result = run(date(2024, 1, 1), 0, 0, 40);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["lpd"], "2024-02-10");
        assert_eq!(json["epd"], "2024-02-01");
        assert_eq!(json["tier"], "short-sentence");
        assert_eq!(json["remission"]["days"], 10);
        assert_eq!(json["duration"]["days"], 40);
    }
}
