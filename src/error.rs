//! Typed errors for the agent core.

use thiserror::Error;

/// Failures that can surface from a single chat turn.
#[derive(Debug, Error)]
pub enum AgentError {
    /// The model supplied arguments that do not match the tool's declared schema.
    #[error("Invalid arguments for tool '{tool}': {reason}")]
    InvalidToolArguments { tool: String, reason: String },

    /// A tool ran and failed (remote search error, timeout, etc.).
    #[error("Tool execution error: {0}")]
    ToolExecution(String),

    /// The chat completion API call failed.
    #[error("Upstream API error: {0}")]
    UpstreamApi(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_tool_arguments_display() {
        let err = AgentError::InvalidToolArguments {
            tool: "webSearch".to_string(),
            reason: "missing 'query'".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid arguments for tool 'webSearch': missing 'query'"
        );
    }

    #[test]
    fn upstream_error_display() {
        let err = AgentError::UpstreamApi("status 500".to_string());
        assert_eq!(err.to_string(), "Upstream API error: status 500");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<AgentError>();
    }
}
