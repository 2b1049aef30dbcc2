//! API request and response types.

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`.
///
/// Both fields are optional at the serde level so that missing values reach
/// the handler's own validation and produce the documented 400 body.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    /// The user's message for this turn
    pub message: Option<String>,

    /// Client-chosen session identifier
    #[serde(rename = "threadId")]
    pub thread_id: Option<String>,
}

/// Successful chat response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    /// Final assistant text
    pub message: String,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
