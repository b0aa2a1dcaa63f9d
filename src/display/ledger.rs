//! Expense register display
//!
//! Formats ledger entries as a register table and single entries as detail
//! views.

use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

use super::DisplayOptions;
use crate::models::{ExpenseEntry, Money};
use crate::services::LedgerAction;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format entries as a register, in ledger order
pub fn format_expense_register(entries: &[ExpenseEntry], opts: &DisplayOptions) -> String {
    if entries.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .map(|e| EntryRow {
            id: e.id.to_string(),
            date: opts.date(e.date),
            label: truncate(&e.label, 32),
            amount: opts.money(e.amount),
        })
        .collect();

    let total: Money = entries.iter().map(|e| e.amount).sum();

    let mut output = Table::new(rows)
        .with(Style::psql())
        .modify(Columns::new(3..), Alignment::right())
        .to_string();
    output.push_str(&format!(
        "\n{} expense(s), total {}\n",
        entries.len(),
        opts.money(total)
    ));
    output
}

/// Format a single entry for display
pub fn format_entry_details(entry: &ExpenseEntry, opts: &DisplayOptions) -> String {
    format!(
        "Expense: {}\nDate:    {}\nLabel:   {}\nAmount:  {}\n",
        entry.id,
        opts.date(entry.date),
        entry.label,
        opts.money(entry.amount)
    )
}

/// One-line description of a ledger action
pub fn format_action(action: &LedgerAction, opts: &DisplayOptions) -> String {
    let line = |e: &ExpenseEntry| {
        format!(
            "{} '{}' {}",
            opts.date(e.date),
            e.label,
            opts.money(e.amount)
        )
    };

    match action {
        LedgerAction::Add { entry, .. } => format!("add {} {}", entry.id, line(entry)),
        LedgerAction::Delete { entry, .. } => format!("delete {} {}", entry.id, line(entry)),
        LedgerAction::Edit { before, after, .. } => {
            format!("edit {} {} -> {}", before.id, line(before), line(after))
        }
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        out.push_str("...");
        out
    }
}
