//! CLI command for data export
//!
//! Writes expenses (or daily summaries) as CSV, or the full session report as
//! JSON or YAML, to a file or to stdout.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::ValueEnum;

use crate::config::Settings;
use crate::error::{AllowanceError, AllowanceResult};
use crate::export::{csv, json, yaml};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (expense rows, re-importable)
    Csv,
    /// JSON format (full session report)
    Json,
    /// YAML format (full session report, human-readable)
    Yaml,
}

/// Handle the export command
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    format: ExportFormat,
    summaries: bool,
    output: Option<PathBuf>,
) -> AllowanceResult<()> {
    if summaries && format != ExportFormat::Csv {
        return Err(AllowanceError::Export(
            "--summaries is only supported with the csv format".into(),
        ));
    }

    let tracker = storage.load()?;
    let session = tracker.session()?;

    let mut writer: Box<dyn Write> = match &output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                AllowanceError::Export(format!(
                    "Failed to create file {}: {}",
                    path.display(),
                    e
                ))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match format {
        ExportFormat::Csv if summaries => {
            csv::export_summaries_csv(&session.summaries(), &mut writer)?
        }
        ExportFormat::Csv => csv::export_rows_csv(&session.export_rows(), &mut writer)?,
        ExportFormat::Json => {
            json::export_report_json(session, settings.forecast_horizon, &mut writer, true)?;
            writeln!(writer).map_err(|e| AllowanceError::Export(e.to_string()))?;
        }
        ExportFormat::Yaml => {
            yaml::export_report_yaml(session, settings.forecast_horizon, &mut writer)?
        }
    }

    writer
        .flush()
        .map_err(|e| AllowanceError::Export(e.to_string()))?;

    if let Some(path) = output {
        println!(
            "Exported {} expense(s) to: {}",
            session.entries().len(),
            path.display()
        );
    }

    Ok(())
}
