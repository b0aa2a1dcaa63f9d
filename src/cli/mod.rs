//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the session. Every handler loads the tracker
//! from storage, applies the command and saves it back.

pub mod expense;
pub mod export;
pub mod history;
pub mod import;
pub mod plan;
pub mod report;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, ExportFormat};
pub use history::{handle_redo_command, handle_undo_command};
pub use import::handle_import_command;
pub use plan::{handle_plan_command, PlanCommands};
pub use report::{handle_forecast_command, handle_summary_command};

use chrono::NaiveDate;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::Money;
use crate::services::import::parse_date;

/// Parse a user-supplied amount such as "150", "1,234.50" or "₱20"
pub(crate) fn parse_amount(input: &str) -> AllowanceResult<Money> {
    Money::parse(input).map_err(|e| AllowanceError::InvalidEntry(e.to_string()))
}

/// Parse a user-supplied date, defaulting to today
pub(crate) fn parse_entry_date(input: Option<&str>) -> AllowanceResult<NaiveDate> {
    match input {
        Some(s) => parse_date(s).map_err(AllowanceError::InvalidEntry),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
