//! Completion handler for the reminder lifecycle

use crate::HomeHandler;
use anyhow::Result;
use chrono::Local;

impl HomeHandler {
    /// Mark a reminder completed, spawning the next occurrence if it recurs
    ///
    /// The transition and the successor creation commit together or not at
    /// all: both are applied to a staged clone of the household state, the
    /// clone is saved, and only then is it swapped into memory. A failed
    /// save leaves the reminder pending and creates no successor, so a
    /// recurring series can never lose its next occurrence.
    ///
    /// Completing an already-completed reminder is an error.
    pub fn handle_complete(&self, id: &str) -> Result<String> {
        let now = Local::now();

        let mut data = self.data.lock().unwrap();
        let mut staged = data.clone();
        let successor_id = staged.complete_reminder(id, now)?;
        self.storage.save(&staged)?;
        *data = staged;
        drop(data);

        match successor_id {
            Some(next_id) => Ok(format!(
                "Reminder {} completed; next occurrence created with ID: {}",
                id, next_id
            )),
            None => Ok(format!("Reminder {} completed", id)),
        }
    }
}
