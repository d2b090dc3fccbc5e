//! Client error types

use reqwest::StatusCode;
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// Transport failure, no response received
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success HTTP status
    #[error("HTTP {status}: {message}")]
    Status { status: StatusCode, message: String },

    /// Success status, but the envelope carries a failure code
    #[error("API error {code}: {message}")]
    Api { code: u16, message: String },

    /// No session to act on
    #[error("Authentication required")]
    Unauthorized,

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Token storage error
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl ClientError {
    /// HTTP status of the failed call, when one was received
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            _ => None,
        }
    }

    /// Whether the server rejected the credentials
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(StatusCode::UNAUTHORIZED)
            || matches!(self, Self::Unauthorized | Self::Api { code: 401, .. })
    }

    /// Localized message suitable for showing to the user
    pub fn user_message(&self) -> &'static str {
        let code = match self {
            Self::Api { code, .. } => Some(*code),
            Self::Unauthorized => Some(401),
            _ => self.status().map(|s| s.as_u16()),
        };
        match code {
            Some(401) => "トークンの有効期限が切れました",
            Some(403) => "アクセス権限がありません",
            Some(404) => "リクエスト先が見つかりません",
            Some(500) => "サーバーで問題が発生しました",
            _ => "ネットワークで問題が発生しました",
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
