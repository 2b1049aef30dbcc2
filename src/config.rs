//! Configuration management for chatrelay.
//!
//! Configuration can be set via environment variables:
//! - `GROQ_API_KEY` - Required. API key for the Groq chat completion API.
//! - `TAVILY_API_KEY` - Required. API key for the Tavily search API.
//! - `MODEL` - Optional. Chat model identifier. Defaults to `meta-llama/llama-4-scout-17b-16e-instruct`.
//! - `HOST` - Optional. Server host. Defaults to `127.0.0.1`.
//! - `PORT` - Optional. Server port. Defaults to `3000`.
//! - `MAX_ITERATIONS` - Optional. Maximum agent loop iterations per turn. Defaults to `10`.
//! - `SESSION_TTL_HOURS` - Optional. Session cache time-to-live. Defaults to `24`.
//! - `REQUEST_TIMEOUT_SECS` - Optional. Timeout for remote API calls. Defaults to `30`.

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

/// Agent configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Groq API key
    pub groq_api_key: String,

    /// Tavily API key
    pub tavily_api_key: String,

    /// Chat model identifier
    pub model: String,

    /// Server host
    pub host: String,

    /// Server port
    pub port: u16,

    /// Maximum iterations for the agent loop
    pub max_iterations: usize,

    /// Session cache time-to-live
    pub session_ttl: Duration,

    /// Timeout applied to remote completion and search calls
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::MissingEnvVar` if `GROQ_API_KEY` or
    /// `TAVILY_API_KEY` is not set.
    pub fn from_env() -> Result<Self, ConfigError> {
        let groq_api_key = std::env::var("GROQ_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("GROQ_API_KEY".to_string()))?;

        let tavily_api_key = std::env::var("TAVILY_API_KEY")
            .map_err(|_| ConfigError::MissingEnvVar("TAVILY_API_KEY".to_string()))?;

        let model = std::env::var("MODEL")
            .unwrap_or_else(|_| "meta-llama/llama-4-scout-17b-16e-instruct".to_string());

        let host = std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue("PORT".to_string(), format!("{}", e)))?;

        let max_iterations = std::env::var("MAX_ITERATIONS")
            .unwrap_or_else(|_| "10".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("MAX_ITERATIONS".to_string(), format!("{}", e))
            })?;

        let ttl_hours: u64 = std::env::var("SESSION_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("SESSION_TTL_HOURS".to_string(), format!("{}", e))
            })?;

        let timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .map_err(|e| {
                ConfigError::InvalidValue("REQUEST_TIMEOUT_SECS".to_string(), format!("{}", e))
            })?;

        Ok(Self {
            groq_api_key,
            tavily_api_key,
            model,
            host,
            port,
            max_iterations,
            session_ttl: Duration::from_secs(ttl_hours * 3600),
            request_timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Create a config with custom values (useful for testing).
    pub fn new(groq_api_key: String, tavily_api_key: String, model: String) -> Self {
        Self {
            groq_api_key,
            tavily_api_key,
            model,
            host: "127.0.0.1".to_string(),
            port: 3000,
            max_iterations: 10,
            session_ttl: Duration::from_secs(24 * 3600),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn custom_config_uses_defaults_for_unset_fields() {
        let config = Config::new(
            "groq-key".to_string(),
            "tavily-key".to_string(),
            "test-model".to_string(),
        );
        assert_eq!(config.port, 3000);
        assert_eq!(config.max_iterations, 10);
        assert_eq!(config.session_ttl, Duration::from_secs(86400));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }
}
