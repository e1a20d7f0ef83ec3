//! Q&A handler for the household assistant

use crate::HomeHandler;
use crate::assistant::gather_context;
use anyhow::Result;

impl HomeHandler {
    /// Answer a free-text question about the household
    ///
    /// An empty (post-trim) question short-circuits the whole flow: no
    /// retrieval, no model call, and `None` is returned. Otherwise the
    /// context document is built from a snapshot of the household state
    /// and the gateway is asked exactly once; gateway failures come back
    /// as user-facing strings, never as errors.
    pub async fn handle_ask(&self, question: &str) -> Result<Option<String>> {
        let question = question.trim();
        if question.is_empty() {
            return Ok(None);
        }

        // Snapshot under the lock; the model call runs without it
        let context = {
            let data = self.data.lock().unwrap();
            gather_context(&data, question)
        };

        let answer = self.assistant.ask(question, &context).await;
        Ok(Some(answer))
    }
}
