//! The record-loading seam between the HTTP endpoints and the store.

use async_trait::async_trait;

use rigwatch_core::correction::zero_stale_counters;
use rigwatch_core::record::Record;

use crate::client::{DetaClient, DetaError};

/// Narrow fetch interface the aggregation endpoints depend on.
///
/// Implemented by [`DetaSource`] in production and by in-memory fakes in
/// tests, so the aggregation pipeline never needs a live store.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Fetch all records of the named collection, corrected and ready for
    /// aggregation. Failures are fatal for the request; callers do not
    /// retry.
    async fn fetch_records(&self, base_name: &str) -> Result<Vec<Record>, DetaError>;
}

/// [`RecordSource`] backed by the Deta Base API.
pub struct DetaSource {
    client: DetaClient,
}

impl DetaSource {
    pub fn new(client: DetaClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl RecordSource for DetaSource {
    /// One query per call; the stale-counter correction pass runs on the
    /// fetched batch before it is handed to the caller.
    async fn fetch_records(&self, base_name: &str) -> Result<Vec<Record>, DetaError> {
        let mut records = self.client.query_items(base_name).await?;
        zero_stale_counters(&mut records);
        tracing::debug!(base = base_name, count = records.len(), "Fetched records");
        Ok(records)
    }
}
