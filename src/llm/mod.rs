//! LLM client abstraction and OpenAI-compatible wire types.

mod client;
mod types;

pub use client::{GroqClient, LlmClient};
pub use types::{ChatMessage, FunctionCall, Role, ToolCall};
