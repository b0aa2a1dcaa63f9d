//! Undo and redo commands

use crate::config::Settings;
use crate::display::{format_action, DisplayOptions};
use crate::error::AllowanceResult;
use crate::storage::Storage;

/// Reverse the most recent ledger change
pub fn handle_undo_command(storage: &Storage, settings: &Settings) -> AllowanceResult<()> {
    let opts = DisplayOptions::from_settings(settings);
    let mut tracker = storage.load()?;
    let session = tracker.session_mut()?;

    match session.undo()? {
        Some(action) => {
            storage.save(&tracker)?;
            println!("Undone: {}", format_action(&action, &opts));
        }
        None => println!("Nothing to undo."),
    }

    Ok(())
}

/// Re-apply the most recently undone change
pub fn handle_redo_command(storage: &Storage, settings: &Settings) -> AllowanceResult<()> {
    let opts = DisplayOptions::from_settings(settings);
    let mut tracker = storage.load()?;
    let session = tracker.session_mut()?;

    match session.redo()? {
        Some(action) => {
            storage.save(&tracker)?;
            println!("Redone: {}", format_action(&action, &opts));
        }
        None => println!("Nothing to redo."),
    }

    Ok(())
}
