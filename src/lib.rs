//! # chatrelay
//!
//! A demonstration chatbot backend that relays user messages to a hosted
//! chat completion API and lets the model call a single web-search tool.
//!
//! This library provides:
//! - An HTTP API (`POST /chat`) that runs one agent turn per request
//! - A tool-calling agent loop with a per-session conversation cache
//! - A web-search tool backed by a remote search provider
//!
//! ## Architecture
//!
//! The agent follows the "tools in a loop" pattern:
//! 1. Receive a message and session id via the API
//! 2. Load or seed the session's conversation history
//! 3. Call the completion API; execute any requested tool calls
//! 4. Feed results back and repeat until the model answers or the
//!    iteration budget runs out
//!
//! ## Example
//!
//! ```rust,ignore
//! use chatrelay::{agent::Agent, config::Config};
//!
//! let config = Config::from_env()?;
//! let agent = Agent::new(config)?;
//! let answer = agent.run_turn("What is the capital of France?", "thread-1").await?;
//! ```

pub mod agent;
pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod search;
pub mod store;
pub mod tools;

pub use config::Config;
pub use error::AgentError;
