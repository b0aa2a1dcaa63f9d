//! CSV Export functionality
//!
//! Writes the ledger as flat `date,label,amount` rows, the same schema the
//! importer reads back.

use std::io::Write;

use crate::error::{AllowanceError, AllowanceResult};
use crate::models::{DailySummary, ExportRow};

/// Header of the expense export, in fixed field order
pub const EXPORT_HEADER: [&str; 3] = ["date", "label", "amount"];

/// Export expense rows to CSV
pub fn export_rows_csv<W: Write>(rows: &[ExportRow], writer: W) -> AllowanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(EXPORT_HEADER)
        .map_err(|e| AllowanceError::Export(e.to_string()))?;

    for row in rows {
        let date = row.date.format("%Y-%m-%d").to_string();
        let amount = row.amount.to_string();
        csv_writer
            .write_record([date.as_str(), row.label.as_str(), amount.as_str()])
            .map_err(|e| AllowanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AllowanceError::Export(e.to_string()))?;
    Ok(())
}

/// Export daily summaries to CSV
pub fn export_summaries_csv<W: Write>(
    summaries: &[DailySummary],
    writer: W,
) -> AllowanceResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["date", "allotment", "spent", "saved", "cumulative_saved"])
        .map_err(|e| AllowanceError::Export(e.to_string()))?;

    for s in summaries {
        csv_writer
            .write_record([
                s.date.format("%Y-%m-%d").to_string(),
                s.allotment.to_string(),
                s.spent.to_string(),
                s.saved.to_string(),
                s.cumulative_saved.to_string(),
            ])
            .map_err(|e| AllowanceError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| AllowanceError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Money};
    use crate::services::{parse_csv, Tracker};
    use chrono::NaiveDate;

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    fn tracker_with_entries() -> Tracker {
        let mut tracker = Tracker::new();
        tracker.set_plan(2025, 3, Money::from_cents(420_000)).unwrap();
        let session = tracker.session_mut().unwrap();
        session
            .add_expense(EntryDraft::new(date(4), "Lunch, with team", Money::from_cents(25_050)))
            .unwrap();
        session
            .add_expense(EntryDraft::new(date(3), "Jeep fare", Money::from_cents(1_300)))
            .unwrap();
        session
            .add_expense(EntryDraft::new(date(4), "Snacks", Money::from_cents(123_456)))
            .unwrap();
        tracker
    }

    #[test]
    fn test_csv_export() {
        let tracker = tracker_with_entries();
        let rows = tracker.session().unwrap().export_rows();

        let mut output = Vec::new();
        export_rows_csv(&rows, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        let lines: Vec<_> = csv_string.lines().collect();
        assert_eq!(lines[0], "date,label,amount");
        assert_eq!(lines[1], "2025-03-03,Jeep fare,13.00");
        assert_eq!(lines[2], "2025-03-04,\"Lunch, with team\",250.50");
        assert_eq!(lines[3], "2025-03-04,Snacks,1234.56");
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_export_then_import_preserves_rows() {
        let tracker = tracker_with_entries();
        let rows = tracker.session().unwrap().export_rows();

        let mut output = Vec::new();
        export_rows_csv(&rows, &mut output).unwrap();
        let content = String::from_utf8(output).unwrap();

        let mut fresh = Tracker::new();
        fresh.set_plan(2025, 3, Money::from_cents(420_000)).unwrap();
        let session = fresh.session_mut().unwrap();

        let parsed: Vec<_> = parse_csv(&content).into_iter().map(|r| r.unwrap()).collect();
        let report = session.bulk_import(parsed);

        assert!(report.is_clean());
        assert_eq!(session.export_rows(), rows);
    }

    #[test]
    fn test_summary_csv_has_one_line_per_weekday() {
        let tracker = tracker_with_entries();
        let summaries = tracker.session().unwrap().summaries();

        let mut output = Vec::new();
        export_summaries_csv(&summaries, &mut output).unwrap();

        let csv_string = String::from_utf8(output).unwrap();
        assert_eq!(csv_string.lines().count(), summaries.len() + 1);
        assert!(csv_string.starts_with("date,allotment,spent,saved,cumulative_saved"));
    }
}
