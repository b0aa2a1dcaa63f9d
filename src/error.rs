//! Custom error types for the allowance tracker
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// A single bulk-import row that was rejected
///
/// Row numbers are 1-based and count data rows only (a header row is not
/// counted).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Row {row}: {reason}")]
pub struct ImportRowError {
    pub row: usize,
    pub reason: String,
}

impl ImportRowError {
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

/// The main error type for allowance tracker operations
#[derive(Error, Debug)]
pub enum AllowanceError {
    /// Month out of range, negative allowance, or a month without weekdays
    #[error("Invalid plan: {0}")]
    InvalidPlan(String),

    /// Entry rejected by ledger validation
    #[error("Invalid entry: {0}")]
    InvalidEntry(String),

    /// A malformed row during bulk import
    #[error("Import row error: {0}")]
    ImportRow(#[from] ImportRowError),

    /// Forecast requested against an empty schedule
    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    /// Forecast horizon outside the supported range
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    /// No plan has been set for the session
    #[error("No active plan. Run 'allowance plan set <YYYY-MM> <amount>' first")]
    NoActivePlan,

    /// Undo/redo history no longer matches the ledger contents
    #[error("History error: {0}")]
    History(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Whole-file import errors
    #[error("Import error: {0}")]
    Import(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),
}

impl AllowanceError {
    /// Create an "invalid entry" error for an id the ledger does not hold
    pub fn entry_not_found(identifier: impl std::fmt::Display) -> Self {
        Self::InvalidEntry(format!("Expense not found: {}", identifier))
    }

    /// Check if this is a plan validation error
    pub fn is_invalid_plan(&self) -> bool {
        matches!(self, Self::InvalidPlan(_))
    }

    /// Check if this is an entry validation error
    pub fn is_invalid_entry(&self) -> bool {
        matches!(self, Self::InvalidEntry(_))
    }

    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, Self::InsufficientData(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for AllowanceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AllowanceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<serde_yaml::Error> for AllowanceError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for AllowanceError {
    fn from(err: csv::Error) -> Self {
        Self::Import(err.to_string())
    }
}

/// Result type alias for allowance tracker operations
pub type AllowanceResult<T> = Result<T, AllowanceError>;
