//! LLM-backed Q&A assistant
//!
//! Pipeline: a trimmed question flows through context retrieval
//! (`context`), prompt composition (`prompt`) and a single gateway call
//! (`gateway`) that degrades failures into user-facing strings.

pub mod context;
pub mod gateway;
pub mod prompt;

pub use context::{gather_context, question_keywords};
pub use gateway::{
    AssistantConfig, AssistantGateway, GENERIC_FAILURE_MESSAGE, MISSING_KEY_MESSAGE,
};
pub use prompt::compose_system_prompt;
