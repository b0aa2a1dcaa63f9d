//! Allowance allocation
//!
//! Spreads a monthly allowance over the weekdays of the month. Every weekday
//! gets the same base share in cents; the cents left over after the even split
//! go one each to the earliest weekdays, so the schedule always sums to the
//! plan total.

use tracing::debug;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{Allotment, AllowancePlan, Money, PlanMonth, WeekdaySchedule};

/// Validate raw plan input and build the plan
pub fn build_plan(year: i32, month: u32, total_allowance: Money) -> AllowanceResult<AllowancePlan> {
    let month = PlanMonth::new(year, month).map_err(|e| AllowanceError::InvalidPlan(e.to_string()))?;
    Ok(AllowancePlan::new(month, total_allowance))
}

/// Divide the plan total across the month's weekdays
pub fn allocate(plan: &AllowancePlan) -> AllowanceResult<WeekdaySchedule> {
    if plan.total_allowance.is_negative() {
        return Err(AllowanceError::InvalidPlan(format!(
            "allowance cannot be negative: {}",
            plan.total_allowance
        )));
    }

    if plan.total_allowance > Money::MAX_TOTAL {
        return Err(AllowanceError::InvalidPlan(format!(
            "allowance cannot exceed {}",
            Money::MAX_TOTAL
        )));
    }

    let weekdays = plan.month.weekdays();
    if weekdays.is_empty() {
        return Err(AllowanceError::InvalidPlan(format!(
            "{} has no weekdays",
            plan.month
        )));
    }

    let count = weekdays.len() as i64;
    let total = plan.total_allowance.cents();
    let base = total / count;
    let remainder = (total - base * count) as usize;

    let days: Vec<Allotment> = weekdays
        .into_iter()
        .enumerate()
        .map(|(idx, date)| Allotment {
            date,
            amount: Money::from_cents(if idx < remainder { base + 1 } else { base }),
        })
        .collect();

    debug!(
        month = %plan.month,
        weekdays = count,
        base_cents = base,
        remainder,
        "allocated allowance"
    );

    Ok(WeekdaySchedule::new(*plan, days))
}
