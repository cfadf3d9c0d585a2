//! Shared helpers for the API integration tests.
//!
//! Tests run against the real router and middleware stack, with the Deta
//! fetch replaced by in-memory [`RecordSource`] fakes.

use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::NamedTempFile;
use tower::ServiceExt;

use rigwatch_api::config::ServerConfig;
use rigwatch_api::router::build_app_router;
use rigwatch_api::state::AppState;
use rigwatch_core::record::Record;
use rigwatch_deta::client::DetaError;
use rigwatch_deta::source::RecordSource;

/// In-memory [`RecordSource`] serving the same canned records for every
/// collection name.
pub struct FakeSource {
    records: Vec<Record>,
}

impl FakeSource {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl RecordSource for FakeSource {
    async fn fetch_records(&self, _base_name: &str) -> Result<Vec<Record>, DetaError> {
        Ok(self.records.clone())
    }
}

/// [`RecordSource`] whose fetch always fails, for upstream-error tests.
pub struct FailingSource;

#[async_trait]
impl RecordSource for FailingSource {
    async fn fetch_records(&self, _base_name: &str) -> Result<Vec<Record>, DetaError> {
        Err(DetaError::Api {
            status: 401,
            body: "Unauthorized".to_string(),
        })
    }
}

/// Build a test `ServerConfig` pointing the safe list at `safelist_path`.
pub fn test_config(safelist_path: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        request_timeout_secs: 30,
        deta_project_key: "testproject_secret".to_string(),
        mining_base: "wallet-records".to_string(),
        ping_base: "ping-records".to_string(),
        safelist_path,
    }
}

/// Build the full application router with all middleware layers, backed by
/// the given record source.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (request ID, timeout, tracing, panic
/// recovery) that production uses.
pub fn build_test_app(source: Arc<dyn RecordSource>, safelist_path: PathBuf) -> Router {
    let state = AppState {
        source,
        config: Arc::new(test_config(safelist_path)),
    };
    build_app_router(state)
}

/// Write a safe-machine list fixture, one identifier per line.
///
/// The returned guard keeps the file alive for the duration of the test.
pub fn safelist_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create safelist fixture");
    for line in lines {
        writeln!(file, "{line}").expect("Failed to write safelist fixture");
    }
    file.flush().expect("Failed to flush safelist fixture");
    file
}

/// A record with the given key and everything else unset.
pub fn record(key: &str) -> Record {
    Record {
        key: key.to_string(),
        ..Record::default()
    }
}

/// Issue a GET request against the test app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
