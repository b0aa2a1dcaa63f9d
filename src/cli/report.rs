//! CLI commands for reports
//!
//! Daily summaries and the savings forecast, printed as tables.

use crate::config::Settings;
use crate::display::{format_forecast, format_summary_table, DisplayOptions};
use crate::error::{AllowanceError, AllowanceResult};
use crate::services::MAX_HORIZON;
use crate::storage::Storage;

/// Print the daily summary table for the active plan
pub fn handle_summary_command(storage: &Storage, settings: &Settings) -> AllowanceResult<()> {
    let opts = DisplayOptions::from_settings(settings);
    let tracker = storage.load()?;
    let session = tracker.session()?;
    let summaries = session.summaries();

    println!(
        "Summary for {} ({} of {} weekdays with expenses)",
        session.plan().month.friendly_name(),
        summaries.iter().filter(|s| !s.spent.is_zero()).count(),
        session.schedule().len()
    );
    println!();
    print!("{}", format_summary_table(&summaries, &opts));

    Ok(())
}

/// Print the savings forecast for the next `horizon` weekdays
pub fn handle_forecast_command(
    storage: &Storage,
    settings: &Settings,
    horizon: Option<usize>,
) -> AllowanceResult<()> {
    let horizon = horizon.unwrap_or(settings.forecast_horizon);
    if !(1..=MAX_HORIZON).contains(&horizon) {
        return Err(AllowanceError::InvalidHorizon(format!(
            "horizon must be between 1 and {}, got {}",
            MAX_HORIZON, horizon
        )));
    }

    let opts = DisplayOptions::from_settings(settings);
    let tracker = storage.load()?;
    let session = tracker.session()?;

    if session.entries().is_empty() {
        println!("No expenses recorded yet; projecting zero savings.");
        println!();
    }
    print!("{}", format_forecast(&session.forecast(horizon)?, &opts));

    Ok(())
}
