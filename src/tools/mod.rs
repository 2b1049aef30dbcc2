//! Tool definitions and registry.
//!
//! Tools are declared to the model as an OpenAI-format function manifest.
//! The model requests a call by name; the registry dispatches it and returns
//! the textual result to feed back into the conversation.

pub mod web;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

/// A capability the model may invoke during a turn.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name as declared to the model.
    fn name(&self) -> &str;

    /// Short description shown in the tool manifest.
    fn description(&self) -> &str;

    /// JSON schema for the tool's arguments.
    fn parameters_schema(&self) -> Value;

    /// Execute the tool with already-parsed JSON arguments.
    async fn execute(&self, args: Value) -> anyhow::Result<String>;
}

/// Registry of available tools.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Build the tool manifest in the format the completion API expects.
    pub fn get_tool_schemas(&self) -> Vec<Value> {
        self.tools
            .values()
            .map(|t| {
                json!({
                    "type": "function",
                    "function": {
                        "name": t.name(),
                        "description": t.description(),
                        "parameters": t.parameters_schema(),
                    }
                })
            })
            .collect()
    }

    /// Execute a tool by name.
    ///
    /// Unknown names are an error; the agent loop converts it into an
    /// error-notice tool message so every tool call still gets an answer.
    pub async fn execute(&self, name: &str, args: Value) -> anyhow::Result<String> {
        match self.tools.get(name) {
            Some(tool) => tool.execute(args).await,
            None => Err(anyhow::anyhow!("Unsupported tool: {}", name)),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
