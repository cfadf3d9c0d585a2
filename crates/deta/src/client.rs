//! REST client for the Deta Base HTTP API.
//!
//! Wraps the single `query` endpoint this service consumes, using
//! [`reqwest`]. A Deta project key has the form `{project_id}_{secret}`;
//! the project id doubles as a path segment and the whole key travels in
//! the `X-API-Key` header.

use serde::Deserialize;

use rigwatch_core::record::Record;

/// Default Deta Base API origin.
pub const DEFAULT_BASE_URL: &str = "https://database.deta.sh";

/// HTTP client for the Deta Base collections of one project.
#[derive(Debug)]
pub struct DetaClient {
    client: reqwest::Client,
    base_url: String,
    project_id: String,
    project_key: String,
}

/// Envelope returned by the Deta Base `query` endpoint.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    /// Pagination bookkeeping for this page.
    pub paging: Paging,
    /// The records of this page.
    pub items: Vec<Record>,
}

/// Pagination section of a [`QueryResponse`].
#[derive(Debug, Deserialize)]
pub struct Paging {
    /// Number of items in this page.
    pub size: usize,
    /// Cursor for the next page, absent on the final page.
    pub last: Option<String>,
}

/// Errors from the Deta Base client.
#[derive(Debug, thiserror::Error)]
pub enum DetaError {
    /// The project key does not have the `{project_id}_{secret}` shape.
    #[error("Invalid Deta project key: expected '{{project_id}}_{{secret}}'")]
    InvalidProjectKey,

    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Deta returned a non-2xx status code.
    #[error("Deta API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl DetaClient {
    /// Create a client from a Deta project key.
    pub fn new(project_key: impl Into<String>) -> Result<Self, DetaError> {
        Self::with_base_url(project_key, DEFAULT_BASE_URL)
    }

    /// Create a client against a non-default API origin.
    pub fn with_base_url(
        project_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, DetaError> {
        let project_key = project_key.into();
        let (project_id, secret) = project_key
            .split_once('_')
            .ok_or(DetaError::InvalidProjectKey)?;
        if project_id.is_empty() || secret.is_empty() {
            return Err(DetaError::InvalidProjectKey);
        }

        Ok(Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            project_id: project_id.to_string(),
            project_key,
        })
    }

    /// Fetch the items the `query` endpoint returns for `base_name`.
    ///
    /// Issues a single `POST /v1/{project_id}/{base_name}/query` with an
    /// empty query, which matches every item. Only the first page is
    /// consumed; a continuation cursor is logged and not followed.
    pub async fn query_items(&self, base_name: &str) -> Result<Vec<Record>, DetaError> {
        let response = self
            .client
            .post(self.query_url(base_name))
            .header("X-API-Key", &self.project_key)
            .json(&serde_json::json!({}))
            .send()
            .await?;

        let query: QueryResponse = Self::parse_response(response).await?;
        if query.paging.last.is_some() {
            tracing::warn!(
                base = base_name,
                page_size = query.paging.size,
                "Query returned a continuation cursor; further pages are not fetched"
            );
        }
        Ok(query.items)
    }

    // ---- private helpers ----

    fn query_url(&self, base_name: &str) -> String {
        format!("{}/v1/{}/{}/query", self.base_url, self.project_id, base_name)
    }

    /// Ensure the response has a success status code. Returns the response
    /// unchanged on success, or a [`DetaError::Api`] containing the status
    /// and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, DetaError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DetaError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, DetaError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
