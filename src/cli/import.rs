//! CLI command for CSV import
//!
//! Reads `date,label,amount` rows into the active plan's ledger. Bad rows are
//! reported and skipped.

use std::path::Path;

use crate::error::{AllowanceError, AllowanceResult};
use crate::storage::Storage;

/// Handle the import command
pub fn handle_import_command(storage: &Storage, file: &Path) -> AllowanceResult<()> {
    if !file.exists() {
        return Err(AllowanceError::Import(format!(
            "File not found: {}",
            file.display()
        )));
    }

    let content = std::fs::read_to_string(file)
        .map_err(|e| AllowanceError::Import(format!("Failed to read file: {}", e)))?;

    let mut tracker = storage.load()?;
    let session = tracker.session_mut()?;
    let report = session.import_csv(&content)?;

    if report.imported_count() > 0 {
        storage.save(&tracker)?;
    }

    println!("Import Complete!");
    println!("  Imported:    {}", report.imported_count());
    if !report.is_clean() {
        println!("  Skipped:     {}", report.error_count());
        for err in &report.errors {
            println!("    {}", err);
        }
    }

    Ok(())
}
