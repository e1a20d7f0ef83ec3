//! Prompt composition for the household assistant
//!
//! Folds the retrieved context document beneath a fixed instruction block.
//! The composed text becomes the system instruction; the raw question is
//! sent separately as the sole user turn.

/// Fixed instruction block describing the assistant's role
const INSTRUCTIONS: &str = "You are a helpful home assistant for a household. \
You have access to information about the household's appliances, wiki \
documentation, and reminders.\n\n\
Answer questions helpfully and concisely. If you don't have enough \
information to answer, say so. Format your response using markdown.\n\n\
Here is the household information:\n\n";

/// Compose the system instruction from the retrieved context
///
/// The context is embedded verbatim; an empty context still produces the
/// instruction block so the model can say it has nothing to go on.
pub fn compose_system_prompt(context: &str) -> String {
    format!("{}{}\n", INSTRUCTIONS, context)
}
