//! Chat and liveness handlers.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::error::AgentError;

use super::routes::AppState;
use super::types::{ChatRequest, ChatResponse, ErrorResponse};

/// `GET /` - plain liveness text.
pub async fn liveness() -> &'static str {
    "Hello World!"
}

/// `POST /chat` - run one agent turn for the given session.
pub async fn chat(
    State(state): State<Arc<AppState>>,
    Json(request): Json<ChatRequest>,
) -> impl IntoResponse {
    let (message, thread_id) = match (
        request.message.filter(|m| !m.is_empty()),
        request.thread_id.filter(|t| !t.is_empty()),
    ) {
        (Some(message), Some(thread_id)) => (message, thread_id),
        _ => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse {
                    error: "message and threadId are required".to_string(),
                }),
            )
                .into_response();
        }
    };

    match state.agent.run_turn(&message, &thread_id).await {
        Ok(answer) => (StatusCode::OK, Json(ChatResponse { message: answer })).into_response(),
        Err(e) => {
            tracing::error!(thread_id = %thread_id, error = %e, "turn failed");
            let status = match e {
                AgentError::UpstreamApi(_) => StatusCode::BAD_GATEWAY,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            (
                status,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
