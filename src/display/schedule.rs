//! Weekday schedule display

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayOptions;
use crate::models::WeekdaySchedule;

#[derive(Tabled)]
struct AllotmentRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Allotment")]
    amount: String,
}

/// Format the plan header and its per-weekday allotments
pub fn format_schedule(schedule: &WeekdaySchedule, opts: &DisplayOptions) -> String {
    let plan = schedule.plan();
    let mut output = format!(
        "Plan: {} ({})\nTotal allowance: {}\nWeekdays: {}  Average: {}\n\n",
        plan.month.friendly_name(),
        plan.month,
        opts.money(plan.total_allowance),
        schedule.len(),
        opts.money(schedule.average_allotment()),
    );

    let rows: Vec<AllotmentRow> = schedule
        .days()
        .iter()
        .map(|a| AllotmentRow {
            date: opts.date(a.date),
            weekday: a.date.format("%a").to_string(),
            amount: opts.money(a.amount),
        })
        .collect();

    let table = Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(2..), Alignment::right())
        .to_string();

    output.push_str(&table);
    output.push('\n');
    output
}
