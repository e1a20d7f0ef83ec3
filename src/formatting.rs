//! Formatting helper functions for homekeeper
//!
//! This module contains formatting logic shared by the CLI listings and
//! the assistant's context sections.

use crate::home::{Appliance, Reminder};
use chrono::NaiveDate;

/// Format a date in long form (e.g. "January 01, 2025")
pub fn long_form_date(date: NaiveDate) -> String {
    date.format("%B %d, %Y").to_string()
}

/// Render an appliance as a single summary line
///
/// The name always leads; `Location:`, `Brand:`, `Model:` and `Notes:`
/// sub-fields are included only when non-empty, comma-joined.
pub fn appliance_summary(appliance: &Appliance) -> String {
    let mut details = vec![appliance.name.clone()];
    if let Some(ref location) = appliance.location
        && !location.is_empty()
    {
        details.push(format!("Location: {}", location));
    }
    if let Some(ref brand) = appliance.brand
        && !brand.is_empty()
    {
        details.push(format!("Brand: {}", brand));
    }
    if let Some(ref model) = appliance.model_number
        && !model.is_empty()
    {
        details.push(format!("Model: {}", model));
    }
    if let Some(ref notes) = appliance.notes
        && !notes.is_empty()
    {
        details.push(format!("Notes: {}", notes));
    }
    details.join(", ")
}

/// Format reminders into a display string for the CLI
///
/// # Arguments
/// * `reminders` - Reminders to format
///
/// # Returns
/// Formatted string representation of the reminders
pub fn format_reminders(reminders: &[&Reminder]) -> String {
    if reminders.is_empty() {
        return "No reminders found".to_string();
    }

    let mut result = format!("Found {} reminder(s):\n\n", reminders.len());
    for reminder in reminders {
        let status = if reminder.is_pending() {
            "pending"
        } else {
            "completed"
        };
        result.push_str(&format!(
            "- [{}] {} (due: {}, status: {})\n",
            reminder.id, reminder.title, reminder.due_date, status
        ));

        if let Some(ref rule) = reminder.recurrence_rule {
            result.push_str(&format!("  Repeats: {:?}\n", rule));
        }
        if let Some(ref remindable) = reminder.remindable {
            result.push_str(&format!("  For: {:?} {}\n", remindable.kind, remindable.id));
        }
    }

    result
}

/// Format appliances into a display string for the CLI
pub fn format_appliances(appliances: &[Appliance]) -> String {
    if appliances.is_empty() {
        return "No appliances found".to_string();
    }

    let mut result = format!("Found {} appliance(s):\n\n", appliances.len());
    for appliance in appliances {
        result.push_str(&format!(
            "- [{}] {}\n",
            appliance.id,
            appliance_summary(appliance)
        ));
    }
    result
}
