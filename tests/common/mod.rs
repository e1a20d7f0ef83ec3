//! Common test utilities for integration tests

use homekeeper::{AssistantConfig, HomeHandler};
use tempfile::NamedTempFile;

/// Create a test handler with temporary storage and no API key configured
pub fn get_test_handler() -> (HomeHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let config = AssistantConfig::default();
    let handler =
        HomeHandler::with_assistant(temp_file.path().to_str().unwrap(), config).unwrap();
    (handler, temp_file)
}

/// Extract the entity ID from a handler response message
///
/// Response format: "Reminder created with ID: <id> (due: ...)"
#[allow(dead_code)]
pub fn extract_id_from_response(response: &str) -> String {
    if let Some(start) = response.find("ID: ") {
        let id_part = &response[start + 4..];
        if let Some(end) = id_part.find(" (") {
            return id_part[..end].trim().to_string();
        }
        return id_part.trim().to_string();
    }
    // Fallback: last whitespace-separated token
    response.split_whitespace().last().unwrap_or("").to_string()
}
