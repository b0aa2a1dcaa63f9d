//! Export module for the allowance tracker
//!
//! Provides data export in multiple formats:
//! - CSV: expense rows (re-importable) and daily summaries
//! - JSON: machine-readable session report
//! - YAML: human-readable session report

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_rows_csv, export_summaries_csv, EXPORT_HEADER};
pub use self::json::{export_report_json, SessionReport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_report_yaml;
