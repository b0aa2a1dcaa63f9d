//! Plan CLI commands
//!
//! Setting, showing and clearing the monthly allowance plan.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_schedule, DisplayOptions};
use crate::error::{AllowanceError, AllowanceResult};
use crate::models::PlanMonth;
use crate::storage::Storage;

use super::parse_amount;

/// Plan subcommands
#[derive(Subcommand)]
pub enum PlanCommands {
    /// Set the allowance for a month, replacing any current plan
    Set {
        /// Month (YYYY-MM)
        month: String,
        /// Total allowance for the month (e.g., "1000" or "1,000.00")
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Show the current plan and its weekday schedule
    Show,
    /// Discard the current plan and all its expenses
    Clear,
}

/// Handle a plan command
pub fn handle_plan_command(
    storage: &Storage,
    settings: &Settings,
    cmd: PlanCommands,
) -> AllowanceResult<()> {
    let opts = DisplayOptions::from_settings(settings);
    let mut tracker = storage.load()?;

    match cmd {
        PlanCommands::Set { month, amount } => {
            let month =
                PlanMonth::parse(&month).map_err(|e| AllowanceError::InvalidPlan(e.to_string()))?;
            let total = parse_amount(&amount)
                .map_err(|_| AllowanceError::InvalidPlan(format!("invalid amount: {}", amount)))?;

            let replacing = tracker.has_plan();
            let schedule = tracker.set_plan(month.year, month.month, total)?;
            if replacing {
                println!("Previous plan and its expenses were discarded.");
            }
            print!("{}", format_schedule(schedule, &opts));
            storage.save(&tracker)?;
        }
        PlanCommands::Show => {
            let session = tracker.session()?;
            print!("{}", format_schedule(session.schedule(), &opts));
        }
        PlanCommands::Clear => match tracker.clear() {
            Some(session) => {
                storage.reset()?;
                println!(
                    "Cleared plan for {} ({} expense(s) discarded).",
                    session.plan().month.friendly_name(),
                    session.entries().len()
                );
            }
            None => println!("No plan to clear."),
        },
    }

    Ok(())
}
