//! Route groups, one module per endpoint.

pub mod mining;
pub mod ping;
pub mod root;

use std::path::Path;

use rigwatch_core::classify::parse_safelist;

use crate::error::AppError;

/// Read and parse the known-safe machine list.
///
/// Loaded fresh per classification call, so edits to the file take effect
/// without a restart.
pub(crate) async fn load_safelist(path: &Path) -> Result<Vec<String>, AppError> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| AppError::Safelist {
            path: path.display().to_string(),
            source,
        })?;
    Ok(parse_safelist(&contents))
}
