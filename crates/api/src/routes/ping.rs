//! The ping statistics endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use rigwatch_core::report::PingReport;

use crate::error::AppResult;
use crate::state::AppState;

/// GET /ping -- duplicate and version statistics over the ping collection.
///
/// Ping records carry no balances and need no safe-list classification,
/// so this endpoint reports the reduced field set only.
async fn ping_report(State(state): State<AppState>) -> AppResult<Json<PingReport>> {
    let records = state.source.fetch_records(&state.config.ping_base).await?;

    Ok(Json(PingReport::build(&state.config.ping_base, &records)))
}

/// Mount the ping route.
pub fn router() -> Router<AppState> {
    Router::new().route("/ping", get(ping_report))
}
