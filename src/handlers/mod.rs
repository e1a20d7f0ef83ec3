//! Operation handlers for homekeeper
//!
//! Each handler is in a separate file for better organization. Handlers
//! are implemented as methods on `HomeHandler`.

pub mod add;
pub mod ask;
pub mod complete;
pub mod list;
