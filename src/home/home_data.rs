use crate::home::appliance::Appliance;
use crate::home::reminder::{Reminder, next_due_date};
use crate::home::wiki::WikiPage;
use anyhow::{Result, bail};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Container for all household state
///
/// Vec-backed storage for each entity kind: insertion order is preserved
/// for stable TOML serialization, and corpus iteration order (used by the
/// assistant's unranked first-N selection) is simply insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HomeData {
    /// Format version for the TOML file (current: 1)
    pub format_version: u32,

    /// Counter for generating unique reminder IDs
    pub reminder_counter: u32,
    /// Counter for generating unique appliance IDs
    pub appliance_counter: u32,

    pub(crate) reminders: Vec<Reminder>,
    pub(crate) appliances: Vec<Appliance>,
    pub(crate) wiki_pages: Vec<WikiPage>,
}

impl Default for HomeData {
    fn default() -> Self {
        Self {
            format_version: 1,
            reminder_counter: 0,
            appliance_counter: 0,
            reminders: Vec::new(),
            appliances: Vec::new(),
            wiki_pages: Vec::new(),
        }
    }
}

impl HomeData {
    /// Create a new empty HomeData instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new unique reminder ID
    pub fn generate_reminder_id(&mut self) -> String {
        self.reminder_counter += 1;
        format!("#{}", self.reminder_counter)
    }

    /// Generate a new unique appliance ID
    pub fn generate_appliance_id(&mut self) -> String {
        self.appliance_counter += 1;
        format!("a-{}", self.appliance_counter)
    }

    /// Add a reminder to the collection
    pub fn add_reminder(&mut self, reminder: Reminder) {
        self.reminders.push(reminder);
    }

    /// Add an appliance to the collection
    pub fn add_appliance(&mut self, appliance: Appliance) {
        self.appliances.push(appliance);
    }

    /// Add a wiki page, enforcing case-insensitive title uniqueness
    pub fn add_wiki_page(&mut self, page: WikiPage) -> Result<()> {
        if self.find_wiki_page(&page.title).is_some() {
            bail!("Wiki page '{}' already exists (titles are case-insensitive)", page.title);
        }
        self.wiki_pages.push(page);
        Ok(())
    }

    /// Find a reminder by its ID
    pub fn find_reminder_by_id(&self, id: &str) -> Option<&Reminder> {
        self.reminders.iter().find(|r| r.id == id)
    }

    fn find_reminder_by_id_mut(&mut self, id: &str) -> Option<&mut Reminder> {
        self.reminders.iter_mut().find(|r| r.id == id)
    }

    /// Find an appliance by its ID
    pub fn find_appliance_by_id(&self, id: &str) -> Option<&Appliance> {
        self.appliances.iter().find(|a| a.id == id)
    }

    /// Find a wiki page by title, case-insensitively
    pub fn find_wiki_page(&self, title: &str) -> Option<&WikiPage> {
        self.wiki_pages
            .iter()
            .find(|p| p.title.eq_ignore_ascii_case(title))
    }

    /// Mark a reminder completed and spawn its successor if it recurs
    ///
    /// Stamps `completed_at` with `now` and, when a recurrence rule is
    /// present and the calendar arithmetic produces a next date, creates
    /// one Pending successor with the same title, rule, remindable
    /// reference and creator. Both effects land on this HomeData instance;
    /// the handler layer stages them on a clone so a failed save rolls
    /// everything back together.
    ///
    /// # Arguments
    /// * `id` - The reminder ID to complete
    /// * `now` - Completion timestamp (also dates the successor's created_at)
    ///
    /// # Returns
    /// The successor's ID when one was created
    ///
    /// # Errors
    /// Fails if the reminder does not exist or is already completed.
    /// Completing twice is rejected so a recurring series can never gain
    /// an extra successor.
    pub fn complete_reminder(
        &mut self,
        id: &str,
        now: DateTime<Local>,
    ) -> Result<Option<String>> {
        let reminder = match self.find_reminder_by_id(id) {
            Some(r) => r.clone(),
            None => bail!("Reminder '{}' not found", id),
        };
        if reminder.completed_at.is_some() {
            bail!("Reminder '{}' is already completed", id);
        }

        let successor = reminder
            .recurrence_rule
            .as_ref()
            .and_then(|rule| next_due_date(reminder.due_date, rule))
            .map(|due_date| Reminder {
                id: self.generate_reminder_id(),
                title: reminder.title.clone(),
                due_date,
                completed_at: None,
                recurrence_rule: reminder.recurrence_rule.clone(),
                remindable: reminder.remindable.clone(),
                created_by: reminder.created_by.clone(),
                created_at: now.date_naive(),
            });

        // The existence check above guarantees the lookup succeeds
        if let Some(entry) = self.find_reminder_by_id_mut(id) {
            entry.completed_at = Some(now);
        }

        let successor_id = successor.as_ref().map(|s| s.id.clone());
        if let Some(successor) = successor {
            self.reminders.push(successor);
        }

        Ok(successor_id)
    }
}
