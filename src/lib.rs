//! Allowance Tracker - monthly allowance ledger and savings forecast
//!
//! This library splits a monthly allowance across the weekdays of the month,
//! records expenses against it with undo/redo, summarizes daily and
//! cumulative savings, and projects savings for the coming weekdays.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, plans, schedules, entries, summaries)
//! - `services`: Allocation, ledger, summaries, forecast and the session
//! - `storage`: JSON snapshot storage
//! - `export`: CSV, JSON and YAML export
//! - `display`: Terminal table formatting
//! - `cli`: Command handlers for the `allowance` binary
//!
//! # Example
//!
//! ```rust,ignore
//! use allowance_tracker::models::Money;
//! use allowance_tracker::services::Tracker;
//!
//! let mut tracker = Tracker::new();
//! let schedule = tracker.set_plan(2025, 7, Money::from_cents(100_000))?;
//! assert_eq!(schedule.total(), Money::from_cents(100_000));
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{AllowanceError, AllowanceResult};
