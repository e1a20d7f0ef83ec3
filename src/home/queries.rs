//! Query methods for HomeData
//!
//! Read-only accessors and filters over the household state. These are
//! separated from the main home_data.rs to keep mutation and retrieval
//! concerns apart.

use super::appliance::Appliance;
use super::home_data::HomeData;
use super::reminder::Reminder;
use super::wiki::WikiPage;
use chrono::NaiveDate;

impl HomeData {
    /// All appliances in corpus (insertion) order
    pub fn appliances(&self) -> &[Appliance] {
        &self.appliances
    }

    /// All wiki pages in corpus (insertion) order
    pub fn wiki_pages(&self) -> &[WikiPage] {
        &self.wiki_pages
    }

    /// All reminders in insertion order
    pub fn reminders(&self) -> &[Reminder] {
        &self.reminders
    }

    /// Count of reminders in the collection
    pub fn reminder_count(&self) -> usize {
        self.reminders.len()
    }

    /// Get pending reminders
    pub fn pending_reminders(&self) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| r.is_pending()).collect()
    }

    /// Get completed reminders
    pub fn completed_reminders(&self) -> Vec<&Reminder> {
        self.reminders.iter().filter(|r| !r.is_pending()).collect()
    }

    /// Get pending reminders that are overdue as of the given date
    pub fn overdue_reminders(&self, today: NaiveDate) -> Vec<&Reminder> {
        self.reminders
            .iter()
            .filter(|r| r.is_overdue(today))
            .collect()
    }

    /// Get pending reminders ordered by ascending due date, capped at `limit`
    ///
    /// Ties keep insertion order (stable sort).
    pub fn upcoming_reminders(&self, limit: usize) -> Vec<&Reminder> {
        let mut pending = self.pending_reminders();
        pending.sort_by_key(|r| r.due_date);
        pending.truncate(limit);
        pending
    }

    /// Get the first `limit` wiki pages matching any keyword, in corpus order
    ///
    /// Matching is unranked by design: pages are taken in insertion order,
    /// not by match count.
    pub fn matching_wiki_pages(&self, keywords: &[String], limit: usize) -> Vec<&WikiPage> {
        self.wiki_pages
            .iter()
            .filter(|p| p.matches_any(keywords))
            .take(limit)
            .collect()
    }
}
