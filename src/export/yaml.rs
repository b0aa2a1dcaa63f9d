//! YAML Export functionality
//!
//! Writes the session report in a human-readable form.

use std::io::Write;

use crate::error::{AllowanceError, AllowanceResult};
use crate::export::json::SessionReport;
use crate::services::Session;

/// Export the session report to YAML
pub fn export_report_yaml<W: Write>(
    session: &Session,
    horizon: usize,
    writer: &mut W,
) -> AllowanceResult<()> {
    let report = SessionReport::from_session(session, horizon)?;
    report.validate().map_err(AllowanceError::Export)?;

    let header = format!(
        "# Allowance Tracker Report\n# Month: {}\n# Generated: {}\n# App Version: {}\n#\n# Amounts are in cents.\n\n",
        report.plan.month.friendly_name(),
        report.exported_at,
        report.app_version
    );
    writer
        .write_all(header.as_bytes())
        .map_err(|e| AllowanceError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &report).map_err(|e| AllowanceError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EntryDraft, Money};
    use crate::services::Tracker;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let mut tracker = Tracker::new();
        tracker.set_plan(2025, 1, Money::from_cents(230_000)).unwrap();
        let session = tracker.session_mut().unwrap();
        session
            .add_expense(EntryDraft::new(
                NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
                "Books",
                Money::from_cents(45_000),
            ))
            .unwrap();

        let mut output = Vec::new();
        export_report_yaml(session, 5, &mut output).unwrap();

        let yaml_string = String::from_utf8(output).unwrap();
        assert!(yaml_string.starts_with("# Allowance Tracker Report"));
        assert!(yaml_string.contains("# Month: January 2025"));
        assert!(yaml_string.contains("label: Books"));

        let imported: SessionReport = serde_yaml::from_str(&yaml_string).unwrap();
        assert!(imported.validate().is_ok());
        assert_eq!(imported.entries.len(), 1);
        assert_eq!(imported.schedule.len(), 23);
    }
}
