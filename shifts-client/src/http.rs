//! HTTP client for the shifts REST API
//!
//! Every call goes through [`NetworkHttpClient::send`]: the bearer token is
//! read from the token store and attached on the way out, and the reply is
//! normalised into an [`ApiResponse`] on the way back.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use shared::response::envelope_message;

use crate::token::{MemoryTokenStore, TokenStore};
use crate::{ApiResponse, ClientConfig, ClientError, ClientResult};

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<ApiResponse<T>>;
    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>>;
    async fn post_empty<T: DeserializeOwned + Send>(
        &self,
        path: &str,
    ) -> ClientResult<ApiResponse<T>>;
    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>>;
    async fn delete<T: DeserializeOwned + Send>(&self, path: &str)
    -> ClientResult<ApiResponse<T>>;
    async fn post_multipart<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<ApiResponse<T>>;
    fn token(&self) -> Option<String>;
}

/// Network HTTP client
#[derive(Debug, Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenStore>,
}

impl NetworkHttpClient {
    /// Create a client with an in-memory token store
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        Self::with_token_store(config, Arc::new(MemoryTokenStore::new()))
    }

    /// Create a client that reads its bearer token from `tokens`
    pub fn with_token_store(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(config.timeout_duration())
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn auth_header(&self) -> Option<String> {
        self.tokens.get_token().map(|t| format!("Bearer {}", t))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(AUTHORIZATION, auth);
        }
        req
    }

    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        req: RequestBuilder,
    ) -> ClientResult<ApiResponse<T>> {
        tracing::debug!(%method, path, "Sending request");
        let response = req.send().await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "Network error");
            e
        })?;
        self.handle_response(&method, path, response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        method: &Method,
        path: &str,
        response: reqwest::Response,
    ) -> ClientResult<ApiResponse<T>> {
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or_default();
        let text = response.text().await?;

        if !status.is_success() {
            let message = status_message(&text, reason);
            tracing::error!(%method, path, status = status.as_u16(), %message, "Server error");
            return Err(ClientError::Status { status, message });
        }

        if text.trim().is_empty() {
            return Ok(ApiResponse::empty(status.as_u16(), reason));
        }

        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| ClientError::InvalidResponse(format!("{method} {path}: {e}")))?;
        let resp = ApiResponse::<T>::from_body(status.as_u16(), reason, body)?;
        if resp.is_failure() {
            tracing::error!(%method, path, code = resp.code, message = %resp.message, "API error");
        }
        Ok(resp)
    }
}

/// Longest JSON error body kept verbatim in a status error
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Message of a non-2xx reply: envelope message, else a short JSON body,
/// else the reason phrase (HTML error pages and the like)
fn status_message(text: &str, reason: &str) -> String {
    if let Some(message) = envelope_message(text) {
        return message;
    }
    if serde_json::from_str::<serde_json::Value>(text).is_err() {
        return reason.to_string();
    }
    let mut chars = text.trim().chars();
    let mut message: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        message.push('…');
    }
    message
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned + Send>(&self, path: &str) -> ClientResult<ApiResponse<T>> {
        let req = self.request(Method::GET, path);
        self.send(Method::GET, path, req).await
    }

    async fn post<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        let req = self.request(Method::POST, path).json(body);
        self.send(Method::POST, path, req).await
    }

    async fn post_empty<T: DeserializeOwned + Send>(
        &self,
        path: &str,
    ) -> ClientResult<ApiResponse<T>> {
        let req = self.request(Method::POST, path);
        self.send(Method::POST, path, req).await
    }

    async fn put<T: DeserializeOwned + Send, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<ApiResponse<T>> {
        let req = self.request(Method::PUT, path).json(body);
        self.send(Method::PUT, path, req).await
    }

    async fn delete<T: DeserializeOwned + Send>(
        &self,
        path: &str,
    ) -> ClientResult<ApiResponse<T>> {
        let req = self.request(Method::DELETE, path);
        self.send(Method::DELETE, path, req).await
    }

    async fn post_multipart<T: DeserializeOwned + Send>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> ClientResult<ApiResponse<T>> {
        // multipart() sets its own content type with the boundary
        let req = self.request(Method::POST, path).multipart(form);
        self.send(Method::POST, path, req).await
    }

    fn token(&self) -> Option<String> {
        self.tokens.get_token()
    }
}
