//! Expense CLI commands
//!
//! Implements CLI commands for recording, editing, deleting and listing
//! expenses in the active plan's ledger.

use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_entry_details, format_expense_register, DisplayOptions};
use crate::error::AllowanceResult;
use crate::models::{EntryDraft, EntryPatch};
use crate::storage::Storage;

use super::{parse_amount, parse_entry_date};

/// Expense subcommands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Amount spent (e.g., "150" or "150.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// What the money was spent on
        #[arg(short, long, default_value = "")]
        label: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
    },
    /// Change fields of an existing expense
    Edit {
        /// Expense ID (exp-xxxxxxxx or full UUID)
        id: String,
        /// New date (YYYY-MM-DD)
        #[arg(short, long)]
        date: Option<String>,
        /// New label
        #[arg(short, long)]
        label: Option<String>,
        /// New amount
        #[arg(short, long, allow_hyphen_values = true)]
        amount: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Expense ID (exp-xxxxxxxx or full UUID)
        id: String,
    },
    /// List expenses in the order they were recorded
    #[command(alias = "ls")]
    List,
}

/// Handle an expense command
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExpenseCommands,
) -> AllowanceResult<()> {
    let opts = DisplayOptions::from_settings(settings);
    let mut tracker = storage.load()?;
    let session = tracker.session_mut()?;

    match cmd {
        ExpenseCommands::Add {
            amount,
            label,
            date,
        } => {
            let draft = EntryDraft::new(
                parse_entry_date(date.as_deref())?,
                label,
                parse_amount(&amount)?,
            );
            let entry = session.add_expense(draft)?;
            storage.save(&tracker)?;

            println!("Recorded expense:");
            print!("{}", format_entry_details(&entry, &opts));
        }
        ExpenseCommands::Edit {
            id,
            date,
            label,
            amount,
        } => {
            let entry_id = session.resolve(&id)?;

            let mut patch = EntryPatch::new();
            if let Some(date) = date {
                patch = patch.date(parse_entry_date(Some(date.as_str()))?);
            }
            if let Some(label) = label {
                patch = patch.label(label);
            }
            if let Some(amount) = amount {
                patch = patch.amount(parse_amount(&amount)?);
            }

            if patch.is_empty() {
                println!("Nothing to change. Use --date, --label or --amount.");
                return Ok(());
            }

            let entry = session.edit_expense(entry_id, &patch)?;
            storage.save(&tracker)?;

            println!("Updated expense:");
            print!("{}", format_entry_details(&entry, &opts));
        }
        ExpenseCommands::Delete { id } => {
            let entry_id = session.resolve(&id)?;
            let entry = session.delete_expense(entry_id)?;
            storage.save(&tracker)?;

            println!("Deleted expense:");
            print!("{}", format_entry_details(&entry, &opts));
            println!("Run 'allowance undo' to restore it.");
        }
        ExpenseCommands::List => {
            print!("{}", format_expense_register(session.entries(), &opts));
        }
    }

    Ok(())
}
