use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// The Deta project key and collection names have no defaults; everything
/// else falls back to values suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8000`).
    pub port: u16,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Deta project key (`{project_id}_{secret}`).
    pub deta_project_key: String,
    /// Deta Base collection holding mining records.
    pub mining_base: String,
    /// Deta Base collection holding ping records.
    pub ping_base: String,
    /// Path of the line-delimited known-safe machine list.
    pub safelist_path: PathBuf,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Default             |
    /// |------------------------|---------------------|
    /// | `HOST`                 | `0.0.0.0`           |
    /// | `PORT`                 | `8000`              |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                |
    /// | `DETA`                 | (required)          |
    /// | `WALLET_DB_NAME`       | (required)          |
    /// | `PING_DB_NAME`         | (required)          |
    /// | `SAFE_MACHINES_FILE`   | `safe_machines.txt` |
    ///
    /// Panics when a required variable is missing or a numeric one fails
    /// to parse; misconfiguration should fail at startup, not at the
    /// first request.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let deta_project_key = std::env::var("DETA").expect("DETA must be set");

        let mining_base = std::env::var("WALLET_DB_NAME").expect("WALLET_DB_NAME must be set");

        let ping_base = std::env::var("PING_DB_NAME").expect("PING_DB_NAME must be set");

        let safelist_path: PathBuf = std::env::var("SAFE_MACHINES_FILE")
            .unwrap_or_else(|_| "safe_machines.txt".into())
            .into();

        Self {
            host,
            port,
            request_timeout_secs,
            deta_project_key,
            mining_base,
            ping_base,
            safelist_path,
        }
    }
}
