//! Gateway to the external language-model service
//!
//! Issues a single Messages API call per question and normalizes every
//! failure into a user-facing string. Failure handling has three tiers,
//! in priority order:
//! 1. No API key configured: fixed configuration message, no network call.
//! 2. Provider-reported error: message embedding the provider's detail.
//! 3. Anything else (network, timeout, parsing): logged server-side,
//!    fixed generic apology returned.
//!
//! The call carries an explicit request timeout; a timeout surfaces
//! through the generic-failure tier. There is no retry loop.

use crate::assistant::prompt::compose_system_prompt;
use anyhow::anyhow;
use std::time::Duration;

const MESSAGES_API_URL: &str = "https://api.anthropic.com/v1/messages";
const ANTHROPIC_VERSION: &str = "2023-06-01";

const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
const DEFAULT_MAX_TOKENS: u32 = 1024;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Returned when no API key is configured; no network call is made
pub const MISSING_KEY_MESSAGE: &str =
    "API key not configured. Please set the ANTHROPIC_API_KEY environment variable.";
/// Returned for any failure that is not a provider-reported error
pub const GENERIC_FAILURE_MESSAGE: &str = "Sorry, something went wrong. Please try again.";

/// Configuration for the assistant gateway
///
/// The credential comes from process configuration, never from user input.
#[derive(Debug, Clone)]
pub struct AssistantConfig {
    /// API key; None disables the gateway with a configuration message
    pub api_key: Option<String>,
    /// Model identifier sent with every request
    pub model: String,
    /// Maximum output tokens per reply
    pub max_tokens: u32,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// Messages API endpoint (overridable for tests)
    pub api_url: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            api_url: MESSAGES_API_URL.to_string(),
        }
    }
}

impl AssistantConfig {
    /// Build a config from the process environment
    ///
    /// Reads `ANTHROPIC_API_KEY`; an unset or empty variable leaves the
    /// gateway unconfigured.
    pub fn from_env() -> Self {
        let api_key = std::env::var("ANTHROPIC_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        Self {
            api_key,
            ..Self::default()
        }
    }
}

/// Outcome classification for a single model call
enum AskError {
    /// The provider returned a structured error body
    Provider(String),
    /// Network, timeout, or response-shape failure
    Other(anyhow::Error),
}

/// Client for the external language-model service
pub struct AssistantGateway {
    config: AssistantConfig,
}

impl AssistantGateway {
    pub fn new(config: AssistantConfig) -> Self {
        Self { config }
    }

    /// Ask the model a question grounded in the given context
    ///
    /// Issues exactly one call and always returns a user-facing string;
    /// failures degrade per the module-level tiers and never propagate
    /// as errors to the caller.
    pub async fn ask(&self, question: &str, context: &str) -> String {
        let Some(api_key) = self.config.api_key.as_deref() else {
            return MISSING_KEY_MESSAGE.to_string();
        };

        match self.send_message(api_key, question, context).await {
            Ok(answer) => answer,
            Err(AskError::Provider(detail)) => {
                format!("Sorry, I couldn't process your question. Error: {}", detail)
            }
            Err(AskError::Other(e)) => {
                tracing::error!(error = %e, "assistant request failed");
                GENERIC_FAILURE_MESSAGE.to_string()
            }
        }
    }

    /// Send one Messages API request and extract the first text block
    async fn send_message(
        &self,
        api_key: &str,
        question: &str,
        context: &str,
    ) -> Result<String, AskError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .build()
            .map_err(|e| AskError::Other(e.into()))?;

        let body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "system": compose_system_prompt(context),
            "messages": [{ "role": "user", "content": question }],
        });

        let response = client
            .post(&self.config.api_url)
            .header("x-api-key", api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await
            .map_err(|e| AskError::Other(e.into()))?;

        let status = response.status();
        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| AskError::Other(e.into()))?;

        if !status.is_success() {
            // Error bodies carry {"error": {"message": ...}}
            if let Some(detail) = json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return Err(AskError::Provider(detail.to_string()));
            }
            return Err(AskError::Other(anyhow!("API error {}", status)));
        }

        json.get("content")
            .and_then(|c| c.get(0))
            .and_then(|block| block.get("text"))
            .and_then(|t| t.as_str())
            .map(str::to_string)
            .ok_or_else(|| AskError::Other(anyhow!("response contained no text content")))
    }
}
