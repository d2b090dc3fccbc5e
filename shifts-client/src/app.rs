//! Application state container
//!
//! Built once at startup from a [`ClientConfig`]; every store shares the
//! same HTTP client and token store. Dropping it tears everything down.

use std::sync::Arc;

use crate::store::{GuestStore, MealStore, StaffStore, UserStore};
use crate::token::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::{ClientConfig, ClientResult, NetworkHttpClient, Router};

#[derive(Debug)]
pub struct AppState {
    pub http: Arc<NetworkHttpClient>,
    pub tokens: Arc<dyn TokenStore>,
    pub router: Router,
    pub user: UserStore,
    pub staff: StaffStore,
    pub guest: GuestStore,
    pub meal: MealStore,
}

impl AppState {
    pub fn new(config: &ClientConfig) -> ClientResult<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_path {
            Some(path) => Arc::new(FileTokenStore::new(path)),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_token_store(config, tokens)
    }

    pub fn with_token_store(
        config: &ClientConfig,
        tokens: Arc<dyn TokenStore>,
    ) -> ClientResult<Self> {
        let http = Arc::new(NetworkHttpClient::with_token_store(
            config,
            tokens.clone(),
        )?);
        tracing::debug!(base_url = %http.base_url(), "Application state created");

        Ok(Self {
            user: UserStore::new(http.clone(), tokens.clone()),
            staff: StaffStore::new(http.clone()),
            guest: GuestStore::new(http.clone()),
            meal: MealStore::new(http.clone()),
            router: Router::new(),
            http,
            tokens,
        })
    }

    /// Build from `SHIFTS_API_*` environment variables
    pub fn from_env() -> ClientResult<Self> {
        Self::new(&ClientConfig::from_env()?)
    }
}
