//! Creation handlers for reminders, appliances and wiki pages
//!
//! Like completion, every creation stages its changes on a clone of the
//! household state and swaps it in only after a successful save, so
//! memory never runs ahead of the data file.

use crate::HomeHandler;
use crate::home::{Appliance, Reminder, WikiPage, local_date_today};
use crate::validation;
use anyhow::Result;

impl HomeHandler {
    /// Create a new pending reminder
    ///
    /// # Arguments
    /// * `title` - Reminder title (trimmed, must be non-empty)
    /// * `due_date` - Due date in YYYY-MM-DD format
    /// * `rule` - Optional recurrence rule (daily/weekly/monthly/yearly)
    /// * `remindable` - Optional owning entity as kind:id (e.g. "appliance:a-1")
    /// * `actor` - The user creating the reminder
    pub fn handle_add_reminder(
        &self,
        title: &str,
        due_date: &str,
        rule: Option<&str>,
        remindable: Option<&str>,
        actor: &str,
    ) -> Result<String> {
        let title = validation::validate_title(title)?;
        let due_date = validation::parse_due_date(due_date)?;
        let rule = rule.map(validation::parse_recurrence_rule).transpose()?;
        let remindable = remindable.map(validation::parse_remindable).transpose()?;

        let mut data = self.data.lock().unwrap();
        let mut staged = data.clone();
        let id = staged.generate_reminder_id();
        staged.add_reminder(Reminder {
            id: id.clone(),
            title,
            due_date,
            completed_at: None,
            recurrence_rule: rule,
            remindable,
            created_by: actor.to_string(),
            created_at: local_date_today(),
        });
        self.storage.save(&staged)?;
        *data = staged;

        Ok(format!("Reminder created with ID: {} (due: {})", id, due_date))
    }

    /// Record a household appliance
    pub fn handle_add_appliance(
        &self,
        name: &str,
        location: Option<String>,
        brand: Option<String>,
        model_number: Option<String>,
        notes: Option<String>,
    ) -> Result<String> {
        let name = validation::validate_title(name)?;

        let mut data = self.data.lock().unwrap();
        let mut staged = data.clone();
        let id = staged.generate_appliance_id();
        staged.add_appliance(Appliance {
            id: id.clone(),
            name,
            location,
            brand,
            model_number,
            notes,
        });
        self.storage.save(&staged)?;
        *data = staged;

        Ok(format!("Appliance recorded with ID: {}", id))
    }

    /// Create a wiki page
    ///
    /// Titles are unique case-insensitively; adding a duplicate fails.
    pub fn handle_add_wiki_page(&self, title: &str, body: &str, actor: &str) -> Result<String> {
        let title = validation::validate_title(title)?;

        let mut data = self.data.lock().unwrap();
        let mut staged = data.clone();
        staged.add_wiki_page(WikiPage {
            title: title.clone(),
            body: body.to_string(),
            created_by: actor.to_string(),
            updated_by: actor.to_string(),
        })?;
        self.storage.save(&staged)?;
        *data = staged;

        Ok(format!("Wiki page '{}' created", title))
    }
}
