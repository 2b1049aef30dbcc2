//! Agent module - the core reasoning and tool-execution cycle.
//!
//! The agent follows a "tools in a loop" pattern:
//! 1. Load (or seed) the session's conversation history
//! 2. Call the completion API with the available tools
//! 3. If the model requests tool calls, execute them and feed results back
//! 4. Repeat until the model produces a final answer or the budget runs out

mod agent_loop;
mod prompt;

pub use agent_loop::{Agent, FALLBACK_TEXT};
pub use prompt::build_system_prompt;
