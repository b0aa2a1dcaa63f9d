//! Derived views over the schedule and ledger
//!
//! None of these are stored; they are recomputed from the schedule and the
//! ledger every time they are requested.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;

/// One weekday's allotment against what was spent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub allotment: Money,
    pub spent: Money,
    /// allotment - spent (negative when overspent)
    pub saved: Money,
    /// Running total of `saved` through this date
    pub cumulative_saved: Money,
}

/// Month-to-date totals over a run of summaries
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryTotals {
    pub allotted: Money,
    pub spent: Money,
    pub saved: Money,
}

/// Projected savings for an upcoming weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub date: NaiveDate,
    /// Scheduled allotment, or the plan's average when the date is past the month
    pub allotment: Money,
    pub projected_saved: Money,
}

/// Flat export record, one per ledger entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRow {
    pub date: NaiveDate,
    pub label: String,
    pub amount: Money,
}
