//! Household domain models and business logic
//!
//! This module contains the core household data structures and their
//! implementations. It is split into submodules for better organization:
//! - `reminder`: reminder entity, recurrence rules and date arithmetic
//! - `appliance`: tracked household appliances
//! - `wiki`: household wiki pages
//! - `home_data`: main data container with all mutating operations
//! - `queries`: read-only query methods for HomeData

mod appliance;
mod home_data;
mod queries;
mod reminder;
mod wiki;

// Re-export all public types
pub use appliance::Appliance;
pub use home_data::HomeData;
pub use reminder::{
    RecurrenceRule, Reminder, RemindableKind, RemindableRef, local_date_today, next_due_date,
};
pub use wiki::WikiPage;
