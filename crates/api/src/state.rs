use std::sync::Arc;

use rigwatch_deta::source::RecordSource;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; both fields are behind `Arc`. There is no other
/// shared mutable state: each request fetches and aggregates from scratch.
#[derive(Clone)]
pub struct AppState {
    /// Record source (Deta Base in production, in-memory fakes in tests).
    pub source: Arc<dyn RecordSource>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
