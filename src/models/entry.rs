//! Expense entry model
//!
//! Represents one dated expense recorded against the active plan, plus the
//! input shapes used to create and edit entries.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::EntryId;
use super::money::Money;

/// Label stored when the user leaves the label blank
pub const DEFAULT_LABEL: &str = "No Label";

/// A committed expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseEntry {
    /// Unique identifier
    pub id: EntryId,

    /// Day the money was spent (always a weekday of the plan month)
    pub date: NaiveDate,

    /// Free-text description (e.g., "Food", "Transport")
    pub label: String,

    /// Amount spent (always positive)
    pub amount: Money,
}

impl ExpenseEntry {
    /// Build an entry from a draft, assigning a fresh id
    pub fn from_draft(draft: EntryDraft) -> Self {
        Self {
            id: EntryId::new(),
            date: draft.date,
            label: normalize_label(&draft.label),
            amount: draft.amount,
        }
    }

    /// Copy of this entry with the patch applied (id is kept)
    pub fn patched(&self, patch: &EntryPatch) -> Self {
        Self {
            id: self.id,
            date: patch.date.unwrap_or(self.date),
            label: patch
                .label
                .as_deref()
                .map(normalize_label)
                .unwrap_or_else(|| self.label.clone()),
            amount: patch.amount.unwrap_or(self.amount),
        }
    }
}

impl fmt::Display for ExpenseEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.label,
            self.amount
        )
    }
}

/// Fields for a new expense
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub date: NaiveDate,
    pub label: String,
    pub amount: Money,
}

impl EntryDraft {
    pub fn new(date: NaiveDate, label: impl Into<String>, amount: Money) -> Self {
        Self {
            date,
            label: label.into(),
            amount,
        }
    }
}

/// Partial update for an existing expense; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub date: Option<NaiveDate>,
    pub label: Option<String>,
    pub amount: Option<Money>,
}

impl EntryPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn amount(mut self, amount: Money) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.date.is_none() && self.label.is_none() && self.amount.is_none()
    }
}

fn normalize_label(label: &str) -> String {
    let trimmed = label.trim();
    if trimmed.is_empty() {
        DEFAULT_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}
