//! Summary and forecast formatting
//!
//! Provides table views for the daily summaries and the savings forecast.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayOptions;
use crate::models::{DailySummary, ForecastPoint};
use crate::services::{projected_total, totals};

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Allotment")]
    allotment: String,
    #[tabled(rename = "Spent")]
    spent: String,
    #[tabled(rename = "Saved")]
    saved: String,
    #[tabled(rename = "Cumulative")]
    cumulative: String,
}

#[derive(Tabled)]
struct ForecastRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Allotment")]
    allotment: String,
    #[tabled(rename = "Projected Saved")]
    projected: String,
}

/// Format daily summaries followed by month totals
pub fn format_summary_table(summaries: &[DailySummary], opts: &DisplayOptions) -> String {
    if summaries.is_empty() {
        return "No scheduled weekdays.\n".to_string();
    }

    let rows: Vec<SummaryRow> = summaries
        .iter()
        .map(|s| SummaryRow {
            date: opts.date(s.date),
            allotment: opts.money(s.allotment),
            spent: opts.money(s.spent),
            saved: opts.money(s.saved),
            cumulative: opts.money(s.cumulative_saved),
        })
        .collect();

    let month_totals = totals(summaries);

    let mut output = Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right())
        .to_string();
    output.push_str(&format!(
        "\nAllotted: {}  Spent: {}  Saved: {}\n",
        opts.money(month_totals.allotted),
        opts.money(month_totals.spent),
        opts.money(month_totals.saved),
    ));
    output
}

/// Format forecast points followed by the projected total
pub fn format_forecast(points: &[ForecastPoint], opts: &DisplayOptions) -> String {
    if points.is_empty() {
        return "Nothing to forecast.\n".to_string();
    }

    let rows: Vec<ForecastRow> = points
        .iter()
        .map(|p| ForecastRow {
            date: opts.date(p.date),
            allotment: opts.money(p.allotment),
            projected: opts.money(p.projected_saved),
        })
        .collect();

    let mut output = Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(1..), Alignment::right())
        .to_string();
    output.push_str(&format!(
        "\nProjected savings over {} weekday(s): {}\n",
        points.len(),
        opts.money(projected_total(points))
    ));
    output
}
