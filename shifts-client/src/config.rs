//! Client configuration

use std::path::PathBuf;
use std::time::Duration;

use crate::{ClientError, ClientResult};

/// Environment variable holding the API base URL
pub const ENV_BASE_URL: &str = "SHIFTS_API_BASE_URL";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT: &str = "SHIFTS_API_TIMEOUT";
/// Environment variable holding the token file path
pub const ENV_TOKEN_PATH: &str = "SHIFTS_TOKEN_PATH";

/// Default request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Client configuration for connecting to the shifts backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API base URL (e.g., "http://localhost:8000/api")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,

    /// Where the access token is persisted; `None` keeps it in memory
    pub token_path: Option<PathBuf>,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            token_path: None,
        }
    }

    /// Load configuration from the environment (and `.env` if present)
    pub fn from_env() -> ClientResult<Self> {
        let _ = dotenvy::dotenv();

        let base_url = std::env::var(ENV_BASE_URL)
            .map_err(|_| ClientError::Config(format!("{ENV_BASE_URL} must be set")))?;
        let mut config = Self::new(base_url);

        if let Ok(raw) = std::env::var(ENV_TIMEOUT) {
            config = config.with_timeout(parse_timeout(&raw)?);
        }

        if let Ok(path) = std::env::var(ENV_TOKEN_PATH)
            && !path.is_empty()
        {
            config = config.with_token_path(path);
        }

        Ok(config)
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Persist the token in a file at this path
    pub fn with_token_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.token_path = Some(path.into());
        self
    }

    pub fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

/// Timeout in whole seconds; zero would fail every request
fn parse_timeout(raw: &str) -> ClientResult<u64> {
    match raw.trim().parse::<u64>() {
        Ok(0) => Err(ClientError::Config(format!(
            "{ENV_TIMEOUT} must be greater than zero"
        ))),
        Ok(secs) => Ok(secs),
        Err(_) => Err(ClientError::Config(format!(
            "{ENV_TIMEOUT} must be a number of seconds, got {raw:?}"
        ))),
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000/api")
    }
}
