//! Session context
//!
//! A `Session` owns the single plan/schedule/ledger triple for one month and
//! is the only way collaborators touch the ledger. A `Tracker` holds at most
//! one session and manages its lifecycle: created when a plan is set,
//! replaced by the next plan, discarded on clear.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{AllowanceError, AllowanceResult, ImportRowError};
use crate::models::{
    AllowancePlan, DailySummary, EntryDraft, EntryId, EntryPatch, ExpenseEntry, ExportRow,
    ForecastPoint, Money, WeekdaySchedule,
};
use crate::services::allocation::{allocate, build_plan};
use crate::services::forecast::forecast;
use crate::services::import::{parse_csv, ImportReport, RawRow};
use crate::services::ledger::{ExpenseLedger, LedgerAction};
use crate::services::summary::{summarize, tracked_window};

/// Persistable form of a session; the schedule is re-derived on restore
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub plan: AllowancePlan,
    pub ledger: ExpenseLedger,
}

/// The active plan, its schedule and its ledger
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    plan: AllowancePlan,
    schedule: WeekdaySchedule,
    ledger: ExpenseLedger,
}

impl Session {
    /// Start a session for a plan with an empty ledger
    pub fn start(plan: AllowancePlan) -> AllowanceResult<Self> {
        let schedule = allocate(&plan)?;
        Ok(Self {
            plan,
            schedule,
            ledger: ExpenseLedger::new(plan.month),
        })
    }

    /// Rebuild a session from a snapshot
    pub fn restore(snapshot: SessionSnapshot) -> AllowanceResult<Self> {
        let SessionSnapshot { plan, ledger } = snapshot;
        if ledger.month() != plan.month {
            return Err(AllowanceError::Storage(format!(
                "ledger month {} does not match plan month {}",
                ledger.month(),
                plan.month
            )));
        }
        if !ledger.within_limits() {
            return Err(AllowanceError::Storage(format!(
                "expenses for {} exceed {} in total",
                plan.month,
                Money::MAX_TOTAL
            )));
        }
        let schedule = allocate(&plan)?;
        Ok(Self {
            plan,
            schedule,
            ledger,
        })
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            plan: self.plan,
            ledger: self.ledger.clone(),
        }
    }

    pub fn plan(&self) -> &AllowancePlan {
        &self.plan
    }

    pub fn schedule(&self) -> &WeekdaySchedule {
        &self.schedule
    }

    pub fn ledger(&self) -> &ExpenseLedger {
        &self.ledger
    }

    pub fn entries(&self) -> &[ExpenseEntry] {
        self.ledger.entries()
    }

    pub fn add_expense(&mut self, draft: EntryDraft) -> AllowanceResult<ExpenseEntry> {
        self.ledger.add(draft)
    }

    pub fn edit_expense(&mut self, id: EntryId, patch: &EntryPatch) -> AllowanceResult<ExpenseEntry> {
        self.ledger.edit(id, patch)
    }

    pub fn delete_expense(&mut self, id: EntryId) -> AllowanceResult<ExpenseEntry> {
        self.ledger.delete(id)
    }

    pub fn undo(&mut self) -> AllowanceResult<Option<LedgerAction>> {
        self.ledger.undo()
    }

    pub fn redo(&mut self) -> AllowanceResult<Option<LedgerAction>> {
        self.ledger.redo()
    }

    /// Resolve user input to an entry id
    pub fn resolve(&self, input: &str) -> AllowanceResult<EntryId> {
        self.ledger.resolve(input)
    }

    /// Validate and add each row independently
    ///
    /// Rows that fail are skipped and reported; the others are added in input
    /// order, each as its own undoable action. Row numbers are 1-based.
    pub fn bulk_import<I>(&mut self, rows: I) -> ImportReport
    where
        I: IntoIterator<Item = RawRow>,
    {
        self.import_parsed(rows.into_iter().map(Ok))
    }

    /// Import CSV content, keeping the row numbers of the file
    ///
    /// A header that does not name the three columns fails the whole import.
    pub fn import_csv(&mut self, content: &str) -> AllowanceResult<ImportReport> {
        let parsed = parse_csv(content);
        if let [Err(err)] = parsed.as_slice() {
            if err.row == 0 {
                return Err(AllowanceError::Import(err.reason.clone()));
            }
        }
        Ok(self.import_parsed(parsed))
    }

    fn import_parsed<I>(&mut self, rows: I) -> ImportReport
    where
        I: IntoIterator<Item = Result<RawRow, ImportRowError>>,
    {
        let mut report = ImportReport::default();

        for (idx, row) in rows.into_iter().enumerate() {
            let row_number = idx + 1;
            let result = row.and_then(|row| {
                row.to_draft()
                    .map_err(|reason| ImportRowError::new(row_number, reason))
                    .and_then(|draft| {
                        self.ledger
                            .add(draft)
                            .map_err(|e| ImportRowError::new(row_number, e.to_string()))
                    })
            });

            match result {
                Ok(entry) => report.imported.push(entry.id),
                Err(err) => {
                    warn!(row = err.row, reason = %err.reason, "skipping import row");
                    report.errors.push(err);
                }
            }
        }

        info!(
            imported = report.imported_count(),
            skipped = report.error_count(),
            "bulk import finished"
        );
        report
    }

    /// Daily summaries for every scheduled weekday
    pub fn summaries(&self) -> Vec<DailySummary> {
        summarize(&self.schedule, self.ledger.entries())
    }

    /// Forecast over the weekdays after the latest tracked day
    pub fn forecast(&self, horizon: usize) -> AllowanceResult<Vec<ForecastPoint>> {
        let summaries = self.summaries();
        let window = tracked_window(&summaries, self.ledger.entries());
        forecast(&self.schedule, window, horizon)
    }

    /// One flat record per entry, ordered by date (ties keep ledger order)
    pub fn export_rows(&self) -> Vec<ExportRow> {
        let mut rows: Vec<ExportRow> = self
            .ledger
            .entries()
            .iter()
            .map(|e| ExportRow {
                date: e.date,
                label: e.label.clone(),
                amount: e.amount,
            })
            .collect();
        rows.sort_by_key(|r| r.date);
        rows
    }
}

/// Holder of the (at most one) active session
#[derive(Debug, Clone, Default)]
pub struct Tracker {
    session: Option<Session>,
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_session(session: Option<Session>) -> Self {
        Self { session }
    }

    /// Set a new plan, discarding the previous schedule and ledger
    ///
    /// On error the current session is left untouched.
    pub fn set_plan(
        &mut self,
        year: i32,
        month: u32,
        total_allowance: Money,
    ) -> AllowanceResult<&WeekdaySchedule> {
        let plan = build_plan(year, month, total_allowance)?;
        let session = Session::start(plan)?;

        if let Some(previous) = &self.session {
            info!(
                previous = %previous.plan().month,
                discarded_entries = previous.entries().len(),
                "replacing active plan"
            );
        }
        info!(month = %plan.month, total = %plan.total_allowance, "plan set");

        let session = self.session.insert(session);
        Ok(session.schedule())
    }

    /// Discard the active session, if any
    pub fn clear(&mut self) -> Option<Session> {
        self.session.take()
    }

    pub fn has_plan(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> AllowanceResult<&Session> {
        self.session.as_ref().ok_or(AllowanceError::NoActivePlan)
    }

    pub fn session_mut(&mut self) -> AllowanceResult<&mut Session> {
        self.session.as_mut().ok_or(AllowanceError::NoActivePlan)
    }
}
