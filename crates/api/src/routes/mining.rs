//! The mining statistics endpoint.

use axum::extract::State;
use axum::{routing::get, Json, Router};

use rigwatch_core::report::MiningReport;

use super::load_safelist;
use crate::error::AppResult;
use crate::state::AppState;

/// GET /mining -- aggregate report over the mining records collection.
///
/// One upstream fetch, then a fully in-memory aggregation pass; a failed
/// fetch or an unreadable safe list fails the whole request.
async fn mining_report(State(state): State<AppState>) -> AppResult<Json<MiningReport>> {
    let records = state
        .source
        .fetch_records(&state.config.mining_base)
        .await?;
    let safelist = load_safelist(&state.config.safelist_path).await?;

    Ok(Json(MiningReport::build(
        &state.config.mining_base,
        records,
        &safelist,
    )))
}

/// Mount the mining route.
pub fn router() -> Router<AppState> {
    Router::new().route("/mining", get(mining_report))
}
