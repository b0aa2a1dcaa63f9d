//! Savings forecast
//!
//! Flat extrapolation: the mean daily saving over the given summaries is
//! projected unchanged onto each of the next `horizon` weekdays.

use chrono::{Duration, NaiveDate};

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{next_weekday, DailySummary, ForecastPoint, Money, WeekdaySchedule};

/// Number of upcoming weekdays forecast by default
pub const DEFAULT_HORIZON: usize = 5;

/// Longest forecast accepted, about a year of weekdays
pub const MAX_HORIZON: usize = 260;

/// Project savings for the weekdays after the latest summarized date
///
/// With no summaries the projection starts at the first weekday of the plan
/// month and the projected saving is zero.
pub fn forecast(
    schedule: &WeekdaySchedule,
    summaries: &[DailySummary],
    horizon: usize,
) -> AllowanceResult<Vec<ForecastPoint>> {
    if schedule.is_empty() {
        return Err(AllowanceError::InsufficientData(format!(
            "{} has no scheduled weekdays",
            schedule.month()
        )));
    }

    if horizon > MAX_HORIZON {
        return Err(AllowanceError::InvalidHorizon(format!(
            "{} weekdays requested, at most {} allowed",
            horizon, MAX_HORIZON
        )));
    }

    let projected_saved = Money::mean(summaries.iter().map(|s| s.saved));
    let average_allotment = schedule.average_allotment();

    let mut cursor = match summaries.last() {
        Some(latest) => latest.date,
        None => schedule
            .month()
            .start_date()
            .checked_sub_signed(Duration::days(1))
            .unwrap_or(NaiveDate::MIN),
    };

    let mut points = Vec::with_capacity(horizon);
    for _ in 0..horizon {
        cursor = next_weekday(cursor).ok_or_else(|| {
            AllowanceError::InvalidHorizon(format!("no weekdays after {}", cursor))
        })?;
        points.push(ForecastPoint {
            date: cursor,
            allotment: schedule.allotment_for(cursor).unwrap_or(average_allotment),
            projected_saved,
        });
    }

    Ok(points)
}

/// Sum of projected savings over a forecast
pub fn projected_total(points: &[ForecastPoint]) -> Money {
    points.iter().map(|p| p.projected_saved).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AllowancePlan, EntryDraft, ExpenseEntry, PlanMonth};
    use crate::services::allocation::{allocate, build_plan};
    use crate::services::summary::{summarize, tracked_window};
    use chrono::Datelike;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn schedule() -> WeekdaySchedule {
        // January 2025: 23 weekdays at 20.00
        allocate(&build_plan(2025, 1, Money::from_cents(46_000)).unwrap()).unwrap()
    }

    fn entry(d: u32, cents: i64) -> ExpenseEntry {
        ExpenseEntry::from_draft(EntryDraft::new(date(2025, 1, d), "Food", Money::from_cents(cents)))
    }

    #[test]
    fn test_flat_projection_of_average_saving() {
        // Saved 15.00 on the 6th and 10.00 on the 7th → average 12.50
        let schedule = schedule();
        let entries = [entry(6, 500), entry(7, 1_000)];
        let summaries = summarize(&schedule, &entries);
        let window = tracked_window(&summaries, &entries);

        let points = forecast(&schedule, window, DEFAULT_HORIZON).unwrap();
        assert_eq!(points.len(), 5);
        assert!(points
            .iter()
            .all(|p| p.projected_saved == Money::from_cents(1_250)));
        assert_eq!(projected_total(&points), Money::from_cents(6_250));

        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            [
                date(2025, 1, 8),
                date(2025, 1, 9),
                date(2025, 1, 10),
                date(2025, 1, 13),
                date(2025, 1, 14)
            ]
        );
    }

    #[test]
    fn test_horizon_past_month_end_uses_average_allotment() {
        let schedule = schedule();
        let entries = [entry(30, 500)];
        let summaries = summarize(&schedule, &entries);
        let window = tracked_window(&summaries, &entries);

        let points = forecast(&schedule, window, DEFAULT_HORIZON).unwrap();
        assert_eq!(points[0].date, date(2025, 1, 31));
        assert_eq!(points[0].allotment, Money::from_cents(2_000));
        assert_eq!(points[1].date, date(2025, 2, 3));
        assert_eq!(points[1].allotment, schedule.average_allotment());
        assert!(points.iter().all(|p| p.projected_saved == Money::from_cents(1_500)));
    }

    #[test]
    fn test_no_data_degrades_to_zero() {
        let schedule = schedule();
        let points = forecast(&schedule, &[], DEFAULT_HORIZON).unwrap();

        assert_eq!(points.len(), 5);
        assert_eq!(points[0].date, date(2025, 1, 1));
        assert!(points.iter().all(|p| p.projected_saved.is_zero()));
    }

    #[test]
    fn test_custom_horizon() {
        let schedule = schedule();
        assert_eq!(forecast(&schedule, &[], 10).unwrap().len(), 10);
        assert!(forecast(&schedule, &[], 0).unwrap().is_empty());
    }

    #[test]
    fn test_horizon_above_limit_rejected() {
        let schedule = schedule();
        assert_eq!(forecast(&schedule, &[], MAX_HORIZON).unwrap().len(), MAX_HORIZON);

        let err = forecast(&schedule, &[], 100_000_000).unwrap_err();
        assert!(matches!(err, AllowanceError::InvalidHorizon(_)));
    }

    #[test]
    fn test_horizon_past_calendar_end_is_an_error() {
        let last_year = NaiveDate::MAX.year();
        let schedule = allocate(&build_plan(last_year, 12, Money::from_cents(100)).unwrap()).unwrap();

        let err = forecast(&schedule, &[], 30).unwrap_err();
        assert!(matches!(err, AllowanceError::InvalidHorizon(_)));
    }

    #[test]
    fn test_empty_schedule_is_insufficient_data() {
        let plan = AllowancePlan::new(PlanMonth::new(2025, 1).unwrap(), Money::zero());
        let empty = WeekdaySchedule::new(plan, Vec::new());

        let err = forecast(&empty, &[], DEFAULT_HORIZON).unwrap_err();
        assert!(err.is_insufficient_data());
    }
}
