//! Allowance plan and weekday schedule
//!
//! An `AllowancePlan` is the monthly total; a `WeekdaySchedule` is that total
//! spread over the month's weekdays by the allocation service.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::money::Money;
use super::period::PlanMonth;

/// A monthly allowance for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllowancePlan {
    pub month: PlanMonth,
    pub total_allowance: Money,
}

impl AllowancePlan {
    pub fn new(month: PlanMonth, total_allowance: Money) -> Self {
        Self {
            month,
            total_allowance,
        }
    }

    pub fn year(&self) -> i32 {
        self.month.year
    }
}

/// The share of the allowance assigned to one weekday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allotment {
    pub date: NaiveDate,
    pub amount: Money,
}

/// Per-weekday allotments for a plan, in chronological order
///
/// Only built by `services::allocation::allocate`, which guarantees the
/// allotments sum to the plan total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekdaySchedule {
    plan: AllowancePlan,
    days: Vec<Allotment>,
}

impl WeekdaySchedule {
    pub(crate) fn new(plan: AllowancePlan, days: Vec<Allotment>) -> Self {
        Self { plan, days }
    }

    pub fn plan(&self) -> &AllowancePlan {
        &self.plan
    }

    pub fn month(&self) -> PlanMonth {
        self.plan.month
    }

    pub fn days(&self) -> &[Allotment] {
        &self.days
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Allotment for a date, if it is a scheduled weekday
    pub fn allotment_for(&self, date: NaiveDate) -> Option<Money> {
        self.days
            .binary_search_by_key(&date, |a| a.date)
            .ok()
            .map(|idx| self.days[idx].amount)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.allotment_for(date).is_some()
    }

    /// Sum of all allotments (always equal to the plan total)
    pub fn total(&self) -> Money {
        self.days.iter().map(|a| a.amount).sum()
    }

    /// Plan total divided by weekday count, rounded to the nearest cent
    pub fn average_allotment(&self) -> Money {
        Money::mean(self.days.iter().map(|a| a.amount))
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|a| a.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.days.last().map(|a| a.date)
    }
}
