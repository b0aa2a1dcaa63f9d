//! Display formatting for terminal output
//!
//! Renders schedules, the expense register, summaries and forecasts as
//! tables, using the currency symbol and date format from the settings.

pub mod ledger;
pub mod report;
pub mod schedule;

pub use ledger::{format_action, format_entry_details, format_expense_register};
pub use report::{format_forecast, format_summary_table};
pub use schedule::format_schedule;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Money;

/// Formatting preferences shared by every view
#[derive(Debug, Clone)]
pub struct DisplayOptions {
    pub currency_symbol: String,
    pub date_format: String,
}

impl DisplayOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            currency_symbol: settings.currency_symbol.clone(),
            date_format: settings.date_format.clone(),
        }
    }

    pub fn money(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }

    pub fn date(&self, date: NaiveDate) -> String {
        date.format(&self.date_format).to_string()
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
