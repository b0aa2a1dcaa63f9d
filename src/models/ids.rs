//! Strongly-typed ID wrapper for ledger entries
//!
//! Entry ids are random UUIDs. They are shown to the user in a short
//! `exp-xxxxxxxx` form, which is also accepted back when resolving an entry.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

const DISPLAY_PREFIX: &str = "exp-";

/// Identifier of an expense entry, unique within a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Check whether user input refers to this id
    ///
    /// Accepts the full UUID, or the short display form with or without its
    /// prefix.
    pub fn matches(&self, input: &str) -> bool {
        let input = input.trim();
        if let Ok(uuid) = Uuid::parse_str(input) {
            return uuid == self.0;
        }
        let short = input.strip_prefix(DISPLAY_PREFIX).unwrap_or(input);
        short.len() >= 8 && self.0.simple().to_string().starts_with(&short.to_lowercase())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", DISPLAY_PREFIX, &self.0.simple().to_string()[..8])
    }
}

impl From<Uuid> for EntryId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for EntryId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix(DISPLAY_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}
