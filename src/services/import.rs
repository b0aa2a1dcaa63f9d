//! CSV import
//!
//! Reads `date,label,amount` rows into untyped `RawRow`s, then validates each
//! row on its own. A bad row is reported with its row number and skipped; it
//! never aborts the rest of the import.

use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::error::ImportRowError;
use crate::models::{EntryDraft, EntryId, Money};

/// Date formats accepted in the date column, tried in order
const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// One row as read from a file, before any validation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    pub date: String,
    pub label: String,
    pub amount: String,
}

impl RawRow {
    pub fn new(date: impl Into<String>, label: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            label: label.into(),
            amount: amount.into(),
        }
    }

    /// Check the row against the schema and turn it into an entry draft
    ///
    /// Month and weekday rules are enforced later by the ledger.
    pub fn to_draft(&self) -> Result<EntryDraft, String> {
        let date = parse_date(&self.date)?;
        let amount = Money::parse(&self.amount).map_err(|e| e.to_string())?;
        if !amount.is_positive() {
            return Err(format!("amount must be positive, got {}", amount));
        }
        Ok(EntryDraft::new(date, self.label.clone(), amount))
    }
}

/// Outcome of a bulk import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Entries added, in input order
    pub imported: Vec<EntryId>,
    /// One diagnostic per skipped row
    pub errors: Vec<ImportRowError>,
}

impl ImportReport {
    pub fn imported_count(&self) -> usize {
        self.imported.len()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Column positions of the three schema fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ColumnMapping {
    date: usize,
    label: usize,
    amount: usize,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            date: 0,
            label: 1,
            amount: 2,
        }
    }
}

impl ColumnMapping {
    /// Map columns from a header record, or `None` if the record is not a header
    fn from_headers(headers: &StringRecord) -> Option<Self> {
        let mut date = None;
        let mut label = None;
        let mut amount = None;

        for (idx, header) in headers.iter().enumerate() {
            let h = header.trim().to_lowercase();
            if h == "date" {
                date = Some(idx);
            } else if h == "label" || h == "expense label" || h == "description" {
                label = Some(idx);
            } else if h == "amount" || h == "expense amount" {
                amount = Some(idx);
            }
        }

        Some(Self {
            date: date?,
            label: label?,
            amount: amount?,
        })
    }

    fn raw_row(&self, record: &StringRecord) -> Result<RawRow, String> {
        let field = |idx: usize, name: &str| {
            record
                .get(idx)
                .map(str::to_string)
                .ok_or_else(|| format!("missing {} column", name))
        };
        Ok(RawRow {
            date: field(self.date, "date")?,
            label: field(self.label, "label")?,
            amount: field(self.amount, "amount")?,
        })
    }
}

/// Parse CSV content into raw rows, one result per data row
///
/// The first record is treated as a header unless its first field already
/// parses as a date. Row numbers in errors count data rows from 1.
pub fn parse_csv(content: &str) -> Vec<Result<RawRow, ImportRowError>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(content.as_bytes());

    let mut records = reader.records().peekable();
    let header_mapping = match records.peek() {
        Some(Ok(first)) if !looks_like_data_row(first) => Some(ColumnMapping::from_headers(first)),
        _ => None,
    };
    let mapping = match header_mapping {
        Some(mapping) => {
            records.next();
            mapping
        }
        None => Some(ColumnMapping::default()),
    };

    let Some(mapping) = mapping else {
        return vec![Err(ImportRowError::new(
            0,
            "header must name date, label and amount columns",
        ))];
    };

    records
        .enumerate()
        .map(|(idx, record)| {
            let row = idx + 1;
            let record =
                record.map_err(|e| ImportRowError::new(row, format!("unreadable record: {}", e)))?;
            mapping
                .raw_row(&record)
                .map_err(|reason| ImportRowError::new(row, reason))
        })
        .collect()
}

/// Parse a date string using the accepted formats
pub fn parse_date(s: &str) -> Result<NaiveDate, String> {
    let s = s.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(s, format).ok())
        .ok_or_else(|| format!("could not parse date: '{}'", s))
}

/// Check if a record looks like data (not headers)
fn looks_like_data_row(record: &StringRecord) -> bool {
    record
        .get(0)
        .map(|first| parse_date(first).is_ok())
        .unwrap_or(false)
}
