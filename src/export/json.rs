//! JSON Export functionality
//!
//! Exports the active session as a full report (plan, schedule, entries,
//! summaries and forecast) with schema versioning.

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{
    Allotment, AllowancePlan, DailySummary, ExpenseEntry, ForecastPoint, Money, SummaryTotals,
};
use crate::services::{projected_total, totals, Session};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full session report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionReport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    pub plan: AllowancePlan,

    /// Every weekday of the month with its allotment
    pub schedule: Vec<Allotment>,

    /// Ledger entries in insertion order
    pub entries: Vec<ExpenseEntry>,

    pub summaries: Vec<DailySummary>,

    pub totals: SummaryTotals,

    pub forecast: Vec<ForecastPoint>,

    /// Sum of projected savings over the forecast
    pub projected_savings: Money,
}

impl SessionReport {
    /// Build a report from the session
    pub fn from_session(session: &Session, horizon: usize) -> AllowanceResult<Self> {
        let summaries = session.summaries();
        let forecast = session.forecast(horizon)?;

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            plan: *session.plan(),
            schedule: session.schedule().days().to_vec(),
            entries: session.entries().to_vec(),
            totals: totals(&summaries),
            projected_savings: projected_total(&forecast),
            summaries,
            forecast,
        })
    }

    /// Validate the report structure
    pub fn validate(&self) -> Result<(), String> {
        if self.schema_version != EXPORT_SCHEMA_VERSION {
            return Err(format!(
                "Schema version mismatch: expected {}, got {}",
                EXPORT_SCHEMA_VERSION, self.schema_version
            ));
        }

        let scheduled: Money = self.schedule.iter().map(|a| a.amount).sum();
        if scheduled != self.plan.total_allowance {
            return Err(format!(
                "Schedule sums to {} but the plan allows {}",
                scheduled, self.plan.total_allowance
            ));
        }

        if let Some(entry) = self
            .entries
            .iter()
            .find(|e| !self.schedule.iter().any(|a| a.date == e.date))
        {
            return Err(format!(
                "Expense {} is dated {}, which is not a scheduled weekday",
                entry.id, entry.date
            ));
        }

        Ok(())
    }
}

/// Export the session report to JSON
pub fn export_report_json<W: Write>(
    session: &Session,
    horizon: usize,
    writer: &mut W,
    pretty: bool,
) -> AllowanceResult<()> {
    let report = SessionReport::from_session(session, horizon)?;
    report.validate().map_err(AllowanceError::Export)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &report)
    } else {
        serde_json::to_writer(writer, &report)
    }
    .map_err(|e| AllowanceError::Export(e.to_string()))?;

    Ok(())
}
