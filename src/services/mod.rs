//! Service layer for the allowance tracker
//!
//! The service layer holds the ledger-and-forecast engine: allocation of the
//! allowance, the undoable expense ledger, summaries, the forecast, and the
//! session context that ties them together. None of it performs I/O.

pub mod allocation;
pub mod forecast;
pub mod import;
pub mod ledger;
pub mod session;
pub mod summary;

pub use allocation::{allocate, build_plan};
pub use forecast::{forecast, projected_total, DEFAULT_HORIZON, MAX_HORIZON};
pub use import::{parse_csv, ImportReport, RawRow};
pub use ledger::{ExpenseLedger, HistoryRecord, LedgerAction};
pub use session::{Session, SessionSnapshot, Tracker};
pub use summary::{summarize, totals, tracked_window};
