//! Daily summaries
//!
//! Joins the weekday schedule with ledger entries. Pure functions only: the
//! summaries are rebuilt from their inputs on every call and never cached.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::{DailySummary, ExpenseEntry, Money, SummaryTotals, WeekdaySchedule};

/// One summary per scheduled weekday, in chronological order
pub fn summarize(schedule: &WeekdaySchedule, entries: &[ExpenseEntry]) -> Vec<DailySummary> {
    let mut spent_by_date: HashMap<NaiveDate, Money> = HashMap::new();
    for entry in entries {
        *spent_by_date.entry(entry.date).or_default() += entry.amount;
    }

    let mut cumulative = Money::zero();
    schedule
        .days()
        .iter()
        .map(|day| {
            let spent = spent_by_date.get(&day.date).copied().unwrap_or_default();
            let saved = day.amount - spent;
            cumulative += saved;
            DailySummary {
                date: day.date,
                allotment: day.amount,
                spent,
                saved,
                cumulative_saved: cumulative,
            }
        })
        .collect()
}

/// Summaries from the earliest to the latest entry date, inclusive
///
/// Weekdays inside that window with no entries count as zero spending. An
/// empty ledger yields an empty window.
pub fn tracked_window<'a>(
    summaries: &'a [DailySummary],
    entries: &[ExpenseEntry],
) -> &'a [DailySummary] {
    let first = entries.iter().map(|e| e.date).min();
    let last = entries.iter().map(|e| e.date).max();
    let (Some(first), Some(last)) = (first, last) else {
        return &[];
    };

    let start = summaries.partition_point(|s| s.date < first);
    let end = summaries.partition_point(|s| s.date <= last);
    &summaries[start..end.max(start)]
}

/// Totals across a run of summaries
pub fn totals(summaries: &[DailySummary]) -> SummaryTotals {
    summaries
        .iter()
        .fold(SummaryTotals::default(), |mut acc, s| {
            acc.allotted += s.allotment;
            acc.spent += s.spent;
            acc.saved += s.saved;
            acc
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryDraft;
    use crate::services::allocation::{allocate, build_plan};

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn schedule() -> WeekdaySchedule {
        // January 2025: 23 weekdays, 230.00 → 10.00 per day
        allocate(&build_plan(2025, 1, Money::from_cents(23_000)).unwrap()).unwrap()
    }

    fn entry(d: u32, cents: i64) -> ExpenseEntry {
        ExpenseEntry::from_draft(EntryDraft::new(date(d), "Food", Money::from_cents(cents)))
    }

    #[test]
    fn test_one_summary_per_weekday() {
        let summaries = summarize(&schedule(), &[]);
        assert_eq!(summaries.len(), 23);
        assert!(summaries.iter().all(|s| s.spent.is_zero()));
        assert_eq!(summaries.last().unwrap().cumulative_saved, Money::from_cents(23_000));
    }

    #[test]
    fn test_spent_sums_entries_per_date() {
        let entries = [entry(6, 400), entry(6, 350), entry(7, 1_500)];
        let summaries = summarize(&schedule(), &entries);

        let jan6 = summaries.iter().find(|s| s.date == date(6)).unwrap();
        assert_eq!(jan6.spent, Money::from_cents(750));
        assert_eq!(jan6.saved, Money::from_cents(250));

        let jan7 = summaries.iter().find(|s| s.date == date(7)).unwrap();
        assert_eq!(jan7.saved, Money::from_cents(-500));
    }

    #[test]
    fn test_cumulative_saved_runs_in_date_order() {
        let entries = [entry(2, 1_000), entry(1, 500)];
        let summaries = summarize(&schedule(), &entries);

        assert_eq!(summaries[0].cumulative_saved, Money::from_cents(500));
        assert_eq!(summaries[1].cumulative_saved, Money::from_cents(500));
        assert_eq!(summaries[2].cumulative_saved, Money::from_cents(1_500));
    }

    #[test]
    fn test_summarize_is_idempotent() {
        let schedule = schedule();
        let entries = [entry(6, 400), entry(9, 999)];
        assert_eq!(summarize(&schedule, &entries), summarize(&schedule, &entries));
    }

    #[test]
    fn test_tracked_window() {
        let entries = [entry(9, 100), entry(6, 100)];
        let summaries = summarize(&schedule(), &entries);
        let window = tracked_window(&summaries, &entries);

        let dates: Vec<_> = window.iter().map(|s| s.date).collect();
        assert_eq!(dates, [date(6), date(7), date(8), date(9)]);

        assert!(tracked_window(&summaries, &[]).is_empty());
    }

    #[test]
    fn test_totals() {
        let entries = [entry(6, 400), entry(7, 1_600)];
        let summaries = summarize(&schedule(), &entries);
        let totals = totals(&summaries);

        assert_eq!(totals.allotted, Money::from_cents(23_000));
        assert_eq!(totals.spent, Money::from_cents(2_000));
        assert_eq!(totals.saved, Money::from_cents(21_000));
    }
}
