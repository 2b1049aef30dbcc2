//! Remote web search adapter (Tavily).

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::AgentError;

const TAVILY_SEARCH_URL: &str = "https://api.tavily.com/search";

/// Abstraction over the remote search provider so tests can substitute stubs.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run a free-text search and return the joined result contents.
    ///
    /// Remote failures surface as `AgentError::ToolExecution`; an empty
    /// result set returns an empty string, which is distinct from failure.
    async fn search(&self, query: &str) -> Result<String, AgentError>;
}

/// Tavily-backed implementation of [`SearchClient`].
pub struct TavilyClient {
    api_key: String,
    client: reqwest::Client,
}

impl TavilyClient {
    pub fn new(api_key: String, timeout: Duration) -> Result<Self, AgentError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AgentError::ToolExecution(format!("failed to build client: {}", e)))?;
        Ok(Self { api_key, client })
    }
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<SearchResult>,
}

#[derive(Debug, Deserialize)]
struct SearchResult {
    #[serde(default)]
    content: String,
}

/// Concatenate result contents with a blank-line separator.
fn join_results(results: &[SearchResult]) -> String {
    results
        .iter()
        .map(|r| r.content.as_str())
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[async_trait]
impl SearchClient for TavilyClient {
    async fn search(&self, query: &str) -> Result<String, AgentError> {
        let body = json!({
            "api_key": self.api_key,
            "query": query,
        });

        let response = self
            .client
            .post(TAVILY_SEARCH_URL)
            .json(&body)
            .send()
            .await
            .map_err(|e| AgentError::ToolExecution(format!("search request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AgentError::ToolExecution(format!(
                "search API returned {}",
                status
            )));
        }

        let parsed: SearchResponse = response
            .json()
            .await
            .map_err(|e| AgentError::ToolExecution(format!("invalid search response: {}", e)))?;

        Ok(join_results(&parsed.results))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_of_empty_results_is_empty_string() {
        assert_eq!(join_results(&[]), "");
    }

    #[test]
    fn join_separates_results_with_blank_line() {
        let results = vec![
            SearchResult {
                content: "a".to_string(),
            },
            SearchResult {
                content: "b".to_string(),
            },
        ];
        assert_eq!(join_results(&results), "a\n\nb");
    }

    #[test]
    fn response_with_missing_results_field_parses_as_empty() {
        let parsed: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(parsed.results.is_empty());
    }
}
