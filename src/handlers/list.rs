//! Listing handlers for reminders, appliances and wiki pages

use crate::HomeHandler;
use crate::formatting::{format_appliances, format_reminders};
use crate::home::local_date_today;
use anyhow::{Result, bail};

impl HomeHandler {
    /// List reminders, optionally filtered
    ///
    /// # Arguments
    /// * `filter` - One of pending/completed/overdue/upcoming; None lists all
    pub fn handle_list_reminders(&self, filter: Option<&str>) -> Result<String> {
        let data = self.data.lock().unwrap();

        let reminders = match filter {
            None | Some("all") => data.reminders().iter().collect(),
            Some("pending") => data.pending_reminders(),
            Some("completed") => data.completed_reminders(),
            Some("overdue") => data.overdue_reminders(local_date_today()),
            Some("upcoming") => data.upcoming_reminders(usize::MAX),
            Some(other) => {
                drop(data);
                bail!(
                    "Invalid filter '{}'. Valid filters: all, pending, completed, overdue, upcoming",
                    other
                );
            }
        };

        Ok(format_reminders(&reminders))
    }

    /// List all recorded appliances
    pub fn handle_list_appliances(&self) -> Result<String> {
        let data = self.data.lock().unwrap();
        Ok(format_appliances(data.appliances()))
    }

    /// List all wiki page titles
    pub fn handle_list_wiki_pages(&self) -> Result<String> {
        let data = self.data.lock().unwrap();
        let pages = data.wiki_pages();

        if pages.is_empty() {
            return Ok("No wiki pages found".to_string());
        }

        let mut result = format!("Found {} page(s):\n\n", pages.len());
        for page in pages {
            result.push_str(&format!("- {}\n", page.title));
        }
        Ok(result)
    }
}
