//! Expense ledger with undo/redo
//!
//! Every mutation is recorded as a `LedgerAction` paired with its inverse.
//! Undo applies the inverse, redo re-applies the action; neither ever
//! snapshots the entry list. All preconditions are checked before the entry
//! list is touched, so a rejected call leaves the ledger exactly as it was.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{
    is_weekday, EntryDraft, EntryId, EntryPatch, ExpenseEntry, Money, PlanMonth,
};

/// A reversible change to the entry list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LedgerAction {
    /// Insert `entry` at `index`
    Add { index: usize, entry: ExpenseEntry },
    /// Remove `entry`, which sits at `index`
    Delete { index: usize, entry: ExpenseEntry },
    /// Replace `before` with `after` at `index`
    Edit {
        index: usize,
        before: ExpenseEntry,
        after: ExpenseEntry,
    },
}

impl LedgerAction {
    /// The action that exactly reverses this one
    pub fn inverse(&self) -> Self {
        match self {
            Self::Add { index, entry } => Self::Delete {
                index: *index,
                entry: entry.clone(),
            },
            Self::Delete { index, entry } => Self::Add {
                index: *index,
                entry: entry.clone(),
            },
            Self::Edit {
                index,
                before,
                after,
            } => Self::Edit {
                index: *index,
                before: after.clone(),
                after: before.clone(),
            },
        }
    }

    /// Short description for user feedback
    pub fn describe(&self) -> String {
        match self {
            Self::Add { entry, .. } => format!("add {} ({})", entry.id, entry),
            Self::Delete { entry, .. } => format!("delete {} ({})", entry.id, entry),
            Self::Edit { before, after, .. } => {
                format!("edit {} ({} -> {})", before.id, before, after)
            }
        }
    }
}

/// One history record: an action and its precomputed inverse
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub action: LedgerAction,
    pub inverse: LedgerAction,
}

impl HistoryRecord {
    fn new(action: LedgerAction) -> Self {
        let inverse = action.inverse();
        Self { action, inverse }
    }
}

/// Ordered expense entries for one plan month, with undo/redo stacks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseLedger {
    month: PlanMonth,
    entries: Vec<ExpenseEntry>,
    #[serde(default)]
    undo_stack: Vec<HistoryRecord>,
    #[serde(default)]
    redo_stack: Vec<HistoryRecord>,
}

impl ExpenseLedger {
    /// Create an empty ledger for a month
    pub fn new(month: PlanMonth) -> Self {
        Self {
            month,
            entries: Vec::new(),
            undo_stack: Vec::new(),
            redo_stack: Vec::new(),
        }
    }

    pub fn month(&self) -> PlanMonth {
        self.month
    }

    /// Committed entries in insertion order
    pub fn entries(&self) -> &[ExpenseEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: EntryId) -> Option<&ExpenseEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Find an entry id from user input (full UUID or short `exp-` form)
    pub fn resolve(&self, input: &str) -> AllowanceResult<EntryId> {
        let mut matches = self.entries.iter().filter(|e| e.id.matches(input));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id),
            (Some(_), Some(_)) => Err(AllowanceError::InvalidEntry(format!(
                "Ambiguous expense id: {}",
                input
            ))),
            (None, _) => Err(AllowanceError::entry_not_found(input)),
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// Record a new expense
    pub fn add(&mut self, draft: EntryDraft) -> AllowanceResult<ExpenseEntry> {
        let entry = ExpenseEntry::from_draft(draft);
        self.validate(&entry)?;
        self.check_total(&entry, None)?;

        let action = LedgerAction::Add {
            index: self.entries.len(),
            entry: entry.clone(),
        };
        self.commit(action)?;
        Ok(entry)
    }

    /// Change fields of an existing expense, keeping its position
    ///
    /// A patch that leaves the entry unchanged does not touch history.
    pub fn edit(&mut self, id: EntryId, patch: &EntryPatch) -> AllowanceResult<ExpenseEntry> {
        let index = self.position(id)?;
        let before = self.entries[index].clone();
        let after = before.patched(patch);
        self.validate(&after)?;
        self.check_total(&after, Some(index))?;

        if after == before {
            return Ok(after);
        }

        let action = LedgerAction::Edit {
            index,
            before,
            after: after.clone(),
        };
        self.commit(action)?;
        Ok(after)
    }

    /// Remove an expense
    pub fn delete(&mut self, id: EntryId) -> AllowanceResult<ExpenseEntry> {
        let index = self.position(id)?;
        let entry = self.entries[index].clone();

        let action = LedgerAction::Delete {
            index,
            entry: entry.clone(),
        };
        self.commit(action)?;
        Ok(entry)
    }

    /// Reverse the most recent action; `None` when there is nothing to undo
    pub fn undo(&mut self) -> AllowanceResult<Option<LedgerAction>> {
        let inverse = match self.undo_stack.last() {
            Some(record) => record.inverse.clone(),
            None => return Ok(None),
        };

        self.apply(&inverse)?;

        let record = self
            .undo_stack
            .pop()
            .ok_or_else(|| AllowanceError::History("undo stack emptied mid-operation".into()))?;
        debug!(action = %record.action.describe(), "undo");
        let undone = record.action.clone();
        self.redo_stack.push(record);
        Ok(Some(undone))
    }

    /// Re-apply the most recently undone action; `None` when there is nothing to redo
    pub fn redo(&mut self) -> AllowanceResult<Option<LedgerAction>> {
        let action = match self.redo_stack.last() {
            Some(record) => record.action.clone(),
            None => return Ok(None),
        };

        self.apply(&action)?;

        let record = self
            .redo_stack
            .pop()
            .ok_or_else(|| AllowanceError::History("redo stack emptied mid-operation".into()))?;
        debug!(action = %record.action.describe(), "redo");
        let redone = record.action.clone();
        self.undo_stack.push(record);
        Ok(Some(redone))
    }

    /// Check an entry against the ledger's month and amount rules
    pub fn validate(&self, entry: &ExpenseEntry) -> AllowanceResult<()> {
        if !self.month.contains(entry.date) {
            return Err(AllowanceError::InvalidEntry(format!(
                "date {} is outside {}",
                entry.date, self.month
            )));
        }
        if !is_weekday(entry.date) {
            return Err(AllowanceError::InvalidEntry(format!(
                "date {} is not a weekday",
                entry.date.format("%Y-%m-%d (%A)")
            )));
        }
        if !entry.amount.is_positive() {
            return Err(AllowanceError::InvalidEntry(format!(
                "amount must be positive, got {}",
                entry.amount
            )));
        }
        Ok(())
    }

    /// Whether the sum of all entries stays within `Money::MAX_TOTAL`
    pub(crate) fn within_limits(&self) -> bool {
        self.entries
            .iter()
            .try_fold(Money::zero(), |acc, e| acc.checked_add(e.amount))
            .is_some_and(|total| total <= Money::MAX_TOTAL)
    }

    /// Reject an entry that would push the ledger total past `Money::MAX_TOTAL`
    fn check_total(&self, entry: &ExpenseEntry, replacing: Option<usize>) -> AllowanceResult<()> {
        let total = self
            .entries
            .iter()
            .enumerate()
            .filter(|(idx, _)| Some(*idx) != replacing)
            .try_fold(entry.amount, |acc, (_, e)| acc.checked_add(e.amount));

        match total {
            Some(total) if total <= Money::MAX_TOTAL => Ok(()),
            _ => Err(AllowanceError::InvalidEntry(format!(
                "expenses for {} cannot exceed {} in total",
                self.month,
                Money::MAX_TOTAL
            ))),
        }
    }

    fn position(&self, id: EntryId) -> AllowanceResult<usize> {
        self.entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AllowanceError::entry_not_found(id))
    }

    /// Apply a fresh user action: mutate, push onto undo, clear redo
    fn commit(&mut self, action: LedgerAction) -> AllowanceResult<()> {
        self.apply(&action)?;
        debug!(action = %action.describe(), "ledger mutation");
        self.undo_stack.push(HistoryRecord::new(action));
        self.redo_stack.clear();
        Ok(())
    }

    /// Apply an action to the entry list, or change nothing and fail
    fn apply(&mut self, action: &LedgerAction) -> AllowanceResult<()> {
        match action {
            LedgerAction::Add { index, entry } => {
                if *index > self.entries.len() {
                    return Err(AllowanceError::History(format!(
                        "cannot insert {} at position {} of {}",
                        entry.id,
                        index,
                        self.entries.len()
                    )));
                }
                if self.entries.iter().any(|e| e.id == entry.id) {
                    return Err(AllowanceError::History(format!(
                        "{} is already in the ledger",
                        entry.id
                    )));
                }
                self.entries.insert(*index, entry.clone());
            }
            LedgerAction::Delete { index, entry } => {
                if self.entries.get(*index) != Some(entry) {
                    return Err(AllowanceError::History(format!(
                        "{} is not at position {}",
                        entry.id, index
                    )));
                }
                self.entries.remove(*index);
            }
            LedgerAction::Edit {
                index,
                before,
                after,
            } => match self.entries.get_mut(*index) {
                Some(current) if *current == *before => *current = after.clone(),
                _ => {
                    return Err(AllowanceError::History(format!(
                        "{} does not match the recorded state at position {}",
                        before.id, index
                    )))
                }
            },
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, d).unwrap()
    }

    fn ledger() -> ExpenseLedger {
        ExpenseLedger::new(PlanMonth::new(2025, 1).unwrap())
    }

    fn draft(d: u32, label: &str, cents: i64) -> EntryDraft {
        EntryDraft::new(date(d), label, Money::from_cents(cents))
    }

    /// A ledger with a few entries and some history behind it
    fn populated() -> ExpenseLedger {
        let mut ledger = ledger();
        ledger.add(draft(6, "Food", 15_000)).unwrap();
        ledger.add(draft(7, "Transport", 4_000)).unwrap();
        ledger.add(draft(7, "Snacks", 2_500)).unwrap();
        ledger
    }

    #[test]
    fn test_add_appends_in_order() {
        let ledger = populated();
        let labels: Vec<_> = ledger.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, ["Food", "Transport", "Snacks"]);
        assert!(ledger.can_undo());
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_add_rejects_weekend() {
        let mut ledger = populated();
        let before = ledger.clone();

        // 2025-01-04 is a Saturday
        let err = ledger.add(draft(4, "Movie", 30_000)).unwrap_err();
        assert!(err.is_invalid_entry());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_add_rejects_other_month() {
        let mut ledger = ledger();
        let draft = EntryDraft::new(
            NaiveDate::from_ymd_opt(2025, 2, 3).unwrap(),
            "Food",
            Money::from_cents(100),
        );
        assert!(ledger.add(draft).unwrap_err().is_invalid_entry());
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_add_rejects_non_positive_amount() {
        let mut ledger = ledger();
        assert!(ledger.add(draft(6, "Refund", -500)).unwrap_err().is_invalid_entry());
        assert!(ledger.add(draft(6, "Nothing", 0)).unwrap_err().is_invalid_entry());
        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
    }

    #[test]
    fn test_add_rejects_total_past_limit() {
        let mut ledger = ledger();
        let huge = Money::parse("90000000000000000").unwrap();
        assert!(ledger
            .add(EntryDraft::new(date(6), "Huge", huge))
            .unwrap_err()
            .is_invalid_entry());

        let max = Money::MAX_TOTAL.cents();
        ledger.add(draft(6, "Most", max - 100)).unwrap();
        ledger.add(draft(6, "Rest", 100)).unwrap();
        assert!(ledger.add(draft(6, "One more", 1)).unwrap_err().is_invalid_entry());
        assert_eq!(ledger.len(), 2);
        assert!(ledger.within_limits());
    }

    #[test]
    fn test_edit_rejects_total_past_limit() {
        let mut ledger = ledger();
        let max = Money::MAX_TOTAL.cents();
        let big = ledger.add(draft(6, "Big", max - 500)).unwrap();
        let small = ledger.add(draft(7, "Small", 500)).unwrap();

        // Replacing an entry does not count its old amount
        ledger
            .edit(big.id, &EntryPatch::new().amount(Money::from_cents(max - 600)))
            .unwrap();
        let err = ledger
            .edit(small.id, &EntryPatch::new().amount(Money::from_cents(601)))
            .unwrap_err();
        assert!(err.is_invalid_entry());
        assert_eq!(ledger.get(small.id).unwrap().amount, Money::from_cents(500));
    }

    #[test]
    fn test_undo_add_restores_state() {
        let mut ledger = populated();
        let before = ledger.entries().to_vec();

        ledger.add(draft(8, "Books", 9_900)).unwrap();
        ledger.undo().unwrap();

        assert_eq!(ledger.entries(), before.as_slice());
    }

    #[test]
    fn test_undo_delete_restores_position() {
        let mut ledger = populated();
        let before = ledger.entries().to_vec();
        let middle = before[1].id;

        ledger.delete(middle).unwrap();
        assert_eq!(ledger.len(), 2);

        ledger.undo().unwrap();
        assert_eq!(ledger.entries(), before.as_slice());
    }

    #[test]
    fn test_undo_edit_restores_fields() {
        let mut ledger = populated();
        let before = ledger.entries().to_vec();
        let id = before[0].id;

        let patch = EntryPatch::new().date(date(9)).label("Dinner").amount(Money::from_cents(20_000));
        let edited = ledger.edit(id, &patch).unwrap();
        assert_eq!(edited.id, id);
        assert_eq!(ledger.entries()[0].label, "Dinner");

        ledger.undo().unwrap();
        assert_eq!(ledger.entries(), before.as_slice());
    }

    #[test]
    fn test_redo_reverses_undo() {
        let mut ledger = populated();
        let id = ledger.entries()[2].id;

        ledger.delete(id).unwrap();
        let after_delete = ledger.entries().to_vec();

        ledger.undo().unwrap();
        let redone = ledger.redo().unwrap();

        assert!(matches!(redone, Some(LedgerAction::Delete { .. })));
        assert_eq!(ledger.entries(), after_delete.as_slice());
        assert!(!ledger.can_redo());
    }

    #[test]
    fn test_new_action_clears_redo() {
        let mut ledger = populated();
        ledger.undo().unwrap();
        assert!(ledger.can_redo());

        ledger.add(draft(10, "Coffee", 1_200)).unwrap();
        assert!(!ledger.can_redo());

        let snapshot = ledger.clone();
        assert_eq!(ledger.redo().unwrap(), None);
        assert_eq!(ledger, snapshot);
    }

    #[test]
    fn test_undo_redo_on_empty_stacks_is_noop() {
        let mut ledger = ledger();
        let fresh = ledger.clone();
        assert_eq!(ledger.undo().unwrap(), None);
        assert_eq!(ledger.redo().unwrap(), None);
        assert_eq!(ledger, fresh);
    }

    #[test]
    fn test_undo_all_then_redo_all() {
        let mut ledger = populated();
        let full = ledger.entries().to_vec();

        while ledger.undo().unwrap().is_some() {}
        assert!(ledger.is_empty());
        assert!(!ledger.can_undo());
        assert!(ledger.can_redo());

        while ledger.redo().unwrap().is_some() {}
        assert_eq!(ledger.entries(), full.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_leaves_ledger_unchanged() {
        let mut ledger = populated();
        let before = ledger.clone();

        let err = ledger.delete(EntryId::new()).unwrap_err();
        assert!(err.is_invalid_entry());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_edit_validation_failure_leaves_ledger_unchanged() {
        let mut ledger = populated();
        let before = ledger.clone();
        let id = ledger.entries()[0].id;

        // 2025-01-05 is a Sunday
        let err = ledger.edit(id, &EntryPatch::new().date(date(5))).unwrap_err();
        assert!(err.is_invalid_entry());
        assert_eq!(ledger, before);
    }

    #[test]
    fn test_noop_edit_keeps_history() {
        let mut ledger = populated();
        ledger.undo().unwrap();
        let before = ledger.clone();
        let id = ledger.entries()[0].id;

        ledger.edit(id, &EntryPatch::new().label("Food")).unwrap();
        assert_eq!(ledger, before);
        assert!(ledger.can_redo());
    }

    #[test]
    fn test_resolve_short_id() {
        let ledger = populated();
        let id = ledger.entries()[1].id;
        assert_eq!(ledger.resolve(&id.to_string()).unwrap(), id);
        assert!(ledger.resolve("exp-zzzzzzzz").unwrap_err().is_invalid_entry());
    }

    #[test]
    fn test_inverse_is_involution() {
        let entry = ExpenseEntry::from_draft(draft(6, "Food", 100));
        let edited = entry.patched(&EntryPatch::new().amount(Money::from_cents(200)));
        let actions = [
            LedgerAction::Add { index: 0, entry: entry.clone() },
            LedgerAction::Delete { index: 2, entry: entry.clone() },
            LedgerAction::Edit { index: 1, before: entry, after: edited },
        ];
        for action in actions {
            assert_eq!(action.inverse().inverse(), action);
        }
    }

    #[test]
    fn test_serialization_keeps_history() {
        let mut ledger = populated();
        ledger.undo().unwrap();

        let json = serde_json::to_string(&ledger).unwrap();
        let mut restored: ExpenseLedger = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, ledger);

        restored.redo().unwrap();
        assert_eq!(restored.len(), 3);
    }
}
