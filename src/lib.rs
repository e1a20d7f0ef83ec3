//! Homekeeper Library
//!
//! Household management core: reminders with recurring schedules over
//! household entities (appliances, tasks), a small home wiki, and an
//! LLM-backed Q&A assistant grounded in the household's own records.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **Surface Layer**: `HomeHandler` - operation handlers used by the CLI
//! - **Domain Layer**: `home` module - reminders, appliances, wiki pages
//!   and the reminder lifecycle; `assistant` module - context retrieval,
//!   prompt composition and the model gateway
//! - **Persistence Layer**: `storage` module - file-based TOML storage
//!
//! # Example
//!
//! ```no_run
//! use homekeeper::HomeHandler;
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let handler = HomeHandler::new("home.toml")?;
//!     handler.handle_add_reminder("Replace filter", "2025-01-01", Some("monthly"), None, "local")?;
//!     handler.handle_complete("#1")?;
//!     Ok(())
//! }
//! ```

pub mod assistant;
mod formatting;
mod handlers;
pub mod home;
mod storage;
mod validation;

use anyhow::Result;
use std::sync::Mutex;

// Re-export commonly used types
pub use assistant::{AssistantConfig, AssistantGateway};
pub use home::{
    Appliance, HomeData, RecurrenceRule, Reminder, RemindableKind, RemindableRef, WikiPage,
    local_date_today, next_due_date,
};
pub use storage::Storage;

/// Handler for household operations
///
/// Owns the in-memory household state and its file storage, and carries
/// the assistant gateway. Every mutation stages its changes on a clone
/// of the state, saves the clone to the TOML file, and swaps it in only
/// on success, so a failed save leaves memory untouched (see
/// `handle_complete` for the completion-plus-successor case).
pub struct HomeHandler {
    pub(crate) data: Mutex<HomeData>,
    pub(crate) storage: Storage,
    pub(crate) assistant: AssistantGateway,
}

impl HomeHandler {
    /// Create a new handler backed by the given data file
    ///
    /// The assistant gateway is configured from the process environment
    /// (`ANTHROPIC_API_KEY`).
    ///
    /// # Arguments
    /// * `storage_path` - Path to the household data file (TOML format)
    pub fn new(storage_path: &str) -> Result<Self> {
        Self::with_assistant(storage_path, AssistantConfig::from_env())
    }

    /// Create a new handler with an explicit assistant configuration
    pub fn with_assistant(storage_path: &str, config: AssistantConfig) -> Result<Self> {
        let storage = Storage::new(storage_path);
        let data = Mutex::new(storage.load()?);
        Ok(Self {
            data,
            storage,
            assistant: AssistantGateway::new(config),
        })
    }

    /// Clone the current household state (for inspection and tests)
    pub fn data_snapshot(&self) -> HomeData {
        self.data.lock().unwrap().clone()
    }

    /// Path of the backing data file
    pub fn storage_path(&self) -> &std::path::Path {
        self.storage.file_path()
    }
}
