use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Index response payload.
#[derive(Serialize)]
pub struct IndexResponse {
    /// Fixed greeting; the service has no UI.
    pub message: &'static str,
}

/// GET / -- placeholder index, kept stable for existing probes.
async fn index() -> Json<IndexResponse> {
    Json(IndexResponse {
        message: "nothing to see here",
    })
}

/// Mount the index route.
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
