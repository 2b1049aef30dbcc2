//! Core agent loop implementation.

use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;

use crate::config::Config;
use crate::error::AgentError;
use crate::llm::{ChatMessage, GroqClient, LlmClient, ToolCall};
use crate::search::{SearchClient, TavilyClient};
use crate::store::{ConversationStore, InMemoryConversationStore};
use crate::tools::{web::WebSearch, ToolRegistry};

use super::prompt::build_system_prompt;

/// Returned when the iteration budget is exhausted without a final answer.
pub const FALLBACK_TEXT: &str =
    "Sorry, I'm having trouble finding the answer right now. please try again later.";

/// The conversational agent: one turn in, final answer out.
pub struct Agent {
    config: Config,
    llm: Arc<dyn LlmClient>,
    tools: ToolRegistry,
    store: Arc<dyn ConversationStore>,
}

impl Agent {
    /// Create an agent wired to the real Groq and Tavily APIs.
    pub fn new(config: Config) -> Result<Self, AgentError> {
        let llm = Arc::new(GroqClient::new(
            config.groq_api_key.clone(),
            config.request_timeout,
        )?);
        let search = Arc::new(TavilyClient::new(
            config.tavily_api_key.clone(),
            config.request_timeout,
        )?);
        let store = Arc::new(InMemoryConversationStore::new(config.session_ttl));
        Ok(Self::with_parts(config, llm, search, store))
    }

    /// Create an agent from injected collaborators (used by tests).
    pub fn with_parts(
        config: Config,
        llm: Arc<dyn LlmClient>,
        search: Arc<dyn SearchClient>,
        store: Arc<dyn ConversationStore>,
    ) -> Self {
        let mut tools = ToolRegistry::new();
        tools.register(Arc::new(WebSearch::new(search)));
        Self {
            config,
            llm,
            tools,
            store,
        }
    }

    /// Run one full turn: load the session, converse with the model until it
    /// produces a final answer (executing tool calls along the way), persist
    /// the history, and return the answer text.
    pub async fn run_turn(
        &self,
        user_message: &str,
        session_id: &str,
    ) -> Result<String, AgentError> {
        // A fresh session gets a system prompt stamped with the current time;
        // an existing session keeps the prompt from its first turn.
        let mut history = match self.store.get(session_id).await {
            Some(history) => history,
            None => {
                tracing::debug!(session_id, "seeding new session");
                vec![ChatMessage::system(build_system_prompt(Utc::now()))]
            }
        };

        history.push(ChatMessage::user(user_message));

        let tool_schemas = self.tools.get_tool_schemas();

        for iteration in 0..self.config.max_iterations {
            tracing::debug!(session_id, iteration = iteration + 1, "agent iteration");

            let response = match self
                .llm
                .chat_completion(&self.config.model, &history, &tool_schemas)
                .await
            {
                Ok(message) => message,
                Err(e) => {
                    // Keep everything up to the last successful exchange so
                    // the user's message is not lost on the next turn.
                    self.store.set(session_id, history).await;
                    return Err(e);
                }
            };

            // Append the assistant message verbatim; it may carry tool calls.
            history.push(response.clone());

            let tool_calls = match &response.tool_calls {
                Some(calls) if !calls.is_empty() => calls.clone(),
                _ => {
                    let answer = response.content.unwrap_or_default();
                    self.store.set(session_id, history).await;
                    return Ok(answer);
                }
            };

            // Execute tool calls in order; every call gets a reply message.
            for tool_call in &tool_calls {
                let content = self.execute_tool_call(tool_call).await;
                history.push(ChatMessage::tool_result(
                    tool_call.id.clone(),
                    tool_call.function.name.clone(),
                    content,
                ));
            }
        }

        // Iteration budget exhausted. Nothing is persisted: the next call for
        // this session re-attempts from the previously stored state.
        tracing::warn!(
            session_id,
            max_iterations = self.config.max_iterations,
            "iteration budget exhausted, returning fallback"
        );
        Ok(FALLBACK_TEXT.to_string())
    }

    /// Execute a single tool call, folding failures into error-notice text so
    /// the model can see what went wrong and recover.
    async fn execute_tool_call(&self, tool_call: &ToolCall) -> String {
        let name = &tool_call.function.name;

        let args: Value = match serde_json::from_str(&tool_call.function.arguments) {
            Ok(args) => args,
            Err(e) => {
                let err = AgentError::InvalidToolArguments {
                    tool: name.clone(),
                    reason: format!("arguments are not valid JSON: {}", e),
                };
                tracing::warn!(tool = %name, error = %err, "tool call rejected");
                return format!("Error: {}", err);
            }
        };

        tracing::debug!(tool = %name, %args, "executing tool call");

        match self.tools.execute(name, args).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(tool = %name, error = %e, "tool execution failed");
                format!("Error: {}", e)
            }
        }
    }
}
