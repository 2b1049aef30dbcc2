//! Router construction and server entry point.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::agent::Agent;
use crate::config::Config;

use super::chat;

/// Shared state for request handlers.
pub struct AppState {
    pub agent: Agent,
}

/// Build the application router over the given state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(chat::liveness))
        .route("/chat", post(chat::chat))
        .nest_service("/app", ServeDir::new("static"))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Start the HTTP server and block until it exits.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = format!("{}:{}", config.host, config.port);
    let agent = Agent::new(config)?;
    let state = Arc::new(AppState { agent });

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, router(state)).await?;
    Ok(())
}
