//! Chat completion client for the Groq API (OpenAI-compatible).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::AgentError;

use super::types::ChatMessage;

const GROQ_COMPLETIONS_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Abstraction over the remote completion API so tests can substitute stubs.
#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Submit the full conversation plus the tool manifest and return the
    /// single choice message. `tool_choice` is always `auto`.
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: &[Value],
    ) -> Result<ChatMessage, AgentError>;
}

/// Groq-backed implementation of [`LlmClient`].
pub struct GroqClient {
    api_key: String,
    client: reqwest::Client,
}

impl GroqClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgentError::UpstreamApi(format!("failed to build client: {}", e)))?;
        Ok(Self { api_key, client })
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: ChatMessage,
}

#[async_trait]
impl LlmClient for GroqClient {
    async fn chat_completion(
        &self,
        model: &str,
        messages: &[ChatMessage],
        tools: &[Value],
    ) -> Result<ChatMessage, AgentError> {
        let body = json!({
            "model": model,
            "messages": messages,
            "tools": tools,
            "tool_choice": "auto",
        });

        let response = self
            .client
            .post(GROQ_COMPLETIONS_URL)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::UpstreamApi(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(AgentError::UpstreamApi(format!(
                "completion API returned {}: {}",
                status, text
            )));
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| AgentError::UpstreamApi(format!("invalid response body: {}", e)))?;

        completion
            .choices
            .into_iter()
            .next()
            .map(|c| c.message)
            .ok_or_else(|| AgentError::UpstreamApi("completion API returned no choices".into()))
    }
}
