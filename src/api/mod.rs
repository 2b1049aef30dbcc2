//! HTTP boundary: router, handlers, and request/response types.

mod chat;
mod routes;
pub mod types;

pub use routes::{router, serve, AppState};
