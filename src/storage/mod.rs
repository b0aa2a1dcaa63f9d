//! Storage layer for the allowance tracker
//!
//! Keeps the single active session between CLI invocations as one JSON
//! snapshot, written atomically.

pub mod file_io;

pub use file_io::{read_json, write_json_atomic};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::paths::TrackerPaths;
use crate::error::{AllowanceError, AllowanceResult};
use crate::services::{Session, SessionSnapshot, Tracker};

/// Current snapshot schema version
pub const SNAPSHOT_SCHEMA_VERSION: u32 = 1;

/// On-disk form of the tracker
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TrackerFile {
    schema_version: u32,
    session: Option<SessionSnapshot>,
}

/// Loads and saves the tracker state
pub struct Storage {
    paths: TrackerPaths,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: TrackerPaths) -> AllowanceResult<Self> {
        paths.ensure_directories()?;
        Ok(Self { paths })
    }

    pub fn paths(&self) -> &TrackerPaths {
        &self.paths
    }

    /// Load the tracker; a missing file means no plan has been set yet
    pub fn load(&self) -> AllowanceResult<Tracker> {
        let path = self.paths.session_file();
        let Some(file) = read_json::<TrackerFile, _>(&path)? else {
            debug!(path = %path.display(), "no session file, starting empty");
            return Ok(Tracker::new());
        };

        if file.schema_version > SNAPSHOT_SCHEMA_VERSION {
            return Err(AllowanceError::Storage(format!(
                "session file schema {} is newer than supported {}",
                file.schema_version, SNAPSHOT_SCHEMA_VERSION
            )));
        }

        let session = file.session.map(Session::restore).transpose()?;
        Ok(Tracker::from_session(session))
    }

    /// Persist the tracker
    pub fn save(&self, tracker: &Tracker) -> AllowanceResult<()> {
        let file = TrackerFile {
            schema_version: SNAPSHOT_SCHEMA_VERSION,
            session: tracker.session().ok().map(Session::snapshot),
        };
        write_json_atomic(self.paths.session_file(), &file)?;
        debug!(path = %self.paths.session_file().display(), "session saved");
        Ok(())
    }

    /// Delete the persisted session entirely
    pub fn reset(&self) -> AllowanceResult<()> {
        file_io::remove_if_exists(self.paths.session_file())
    }
}
