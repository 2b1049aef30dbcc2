//! Web search tool backed by the remote search adapter.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::search::SearchClient;

use super::Tool;

/// Search the internet for current or unknown information.
pub struct WebSearch {
    search: Arc<dyn SearchClient>,
}

impl WebSearch {
    pub fn new(search: Arc<dyn SearchClient>) -> Self {
        Self { search }
    }
}

#[async_trait]
impl Tool for WebSearch {
    fn name(&self) -> &str {
        "webSearch"
    }

    fn description(&self) -> &str {
        "Search latest info from internet"
    }

    fn parameters_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "query": {
                    "type": "string"
                }
            },
            "required": ["query"]
        })
    }

    async fn execute(&self, args: Value) -> anyhow::Result<String> {
        // Validate against the declared schema before touching the network.
        let query = args
            .get("query")
            .and_then(|v| v.as_str())
            .ok_or_else(|| anyhow::anyhow!("Missing or non-string 'query' argument"))?;

        let result = self.search.search(query).await?;
        Ok(result)
    }
}
