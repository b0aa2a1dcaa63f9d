//! Core data models for the allowance tracker
//!
//! This module contains the data structures of the allowance domain: plans,
//! weekday schedules, expense entries and the summaries derived from them.

pub mod entry;
pub mod ids;
pub mod money;
pub mod period;
pub mod plan;
pub mod summary;

pub use entry::{EntryDraft, EntryPatch, ExpenseEntry, DEFAULT_LABEL};
pub use ids::EntryId;
pub use money::{Money, MoneyParseError};
pub use period::{is_weekday, next_weekday, PeriodParseError, PlanMonth};
pub use plan::{Allotment, AllowancePlan, WeekdaySchedule};
pub use summary::{DailySummary, ExportRow, ForecastPoint, SummaryTotals};
