use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use rigwatch_deta::client::DetaError;

/// Application-level error type for HTTP handlers.
///
/// Wraps the upstream client error and adds local I/O variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
/// There is no partial-result path: any failure fails the whole request.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The upstream Deta fetch failed (network, auth, or API error).
    #[error(transparent)]
    Source(#[from] DetaError),

    /// The safe machine list could not be read.
    #[error("Failed to read safe machine list {path}: {source}")]
    Safelist {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Source(err) => {
                tracing::error!(error = %err, "Upstream fetch failed");
                (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    "Fetching records from the database failed".to_string(),
                )
            }
            AppError::Safelist { path, source } => {
                tracing::error!(error = %source, path = %path, "Failed to read safe machine list");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SAFELIST_ERROR",
                    "Reading the safe machine list failed".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
