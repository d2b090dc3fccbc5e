//! User store - session token and user lists

use std::sync::Arc;

use shared::client::{LoginRequest, UserInfo};
use shared::models::{User, UserRegister};
use shared::{API_CODE_CREATED, API_CODE_SUCCESS};
use tokio::sync::watch;

use super::{StateCell, expect_data};
use crate::token::TokenStore;
use crate::{ClientError, ClientResult, HttpClient, NetworkHttpClient, api};

/// Value a successful login resolves to
pub const LOGIN_OK: &str = "ok";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserState {
    /// Access token of the current session
    pub token: Option<String>,
    /// Refresh token from the last login
    pub refresh: Option<String>,
    /// User summary from the last login
    pub current_user: Option<UserInfo>,
    pub user_list: Vec<User>,
    pub user_detail: Option<User>,
}

#[derive(Debug)]
pub struct UserStore<C = NetworkHttpClient> {
    http: Arc<C>,
    tokens: Arc<dyn TokenStore>,
    state: StateCell<UserState>,
}

impl<C: HttpClient> UserStore<C> {
    /// The initial token is read from `tokens`.
    pub fn new(http: Arc<C>, tokens: Arc<dyn TokenStore>) -> Self {
        let state = StateCell::new(UserState {
            token: tokens.get_token(),
            ..Default::default()
        });
        Self {
            http,
            tokens,
            state,
        }
    }

    pub fn state(&self) -> UserState {
        self.state.get()
    }

    pub fn subscribe(&self) -> watch::Receiver<UserState> {
        self.state.subscribe()
    }

    pub fn is_logged_in(&self) -> bool {
        self.state.get().token.is_some()
    }

    /// Log in and persist the access token
    pub async fn login(&self, req: &LoginRequest) -> ClientResult<&'static str> {
        let resp = api::user::login(self.http.as_ref(), req).await?;
        let data = expect_data(resp, API_CODE_SUCCESS)?;

        self.tokens.set_token(&data.access)?;
        self.state.update(|s| {
            s.token = Some(data.access);
            s.refresh = data.refresh;
            s.current_user = data.user;
        });

        tracing::info!(name = %req.name, "Logged in");
        Ok(LOGIN_OK)
    }

    /// Register a new account; the session is left as is
    pub async fn register(&self, req: &UserRegister) -> ClientResult<User> {
        let resp = api::user::register(self.http.as_ref(), req).await?;
        expect_data(resp, API_CODE_CREATED)
    }

    /// Exchange the refresh token for a new access token
    pub async fn refresh_token(&self) -> ClientResult<()> {
        let refresh = self.state.get().refresh.ok_or(ClientError::Unauthorized)?;
        let resp = api::user::refresh_token(self.http.as_ref(), &refresh).await?;
        let data = expect_data(resp, API_CODE_SUCCESS)?;

        self.tokens.set_token(&data.access)?;
        self.state.update(|s| {
            s.token = Some(data.access);
            if let Some(rotated) = data.refresh {
                s.refresh = Some(rotated);
            }
        });
        tracing::debug!("Access token refreshed");
        Ok(())
    }

    /// Forget the session locally; the backend keeps no session state
    pub fn logout(&self) -> ClientResult<()> {
        self.tokens.clear_token()?;
        self.state.update(|s| {
            s.token = None;
            s.refresh = None;
            s.current_user = None;
        });
        tracing::info!("Logged out");
        Ok(())
    }

    pub async fn fetch_user_list(&self) -> ClientResult<()> {
        let resp = api::user::user_list(self.http.as_ref()).await?;
        let list = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.user_list = list);
        Ok(())
    }

    pub async fn fetch_user_detail(&self, id: i64) -> ClientResult<()> {
        let resp = api::user::user_detail(self.http.as_ref(), id).await?;
        let user = expect_data(resp, API_CODE_SUCCESS)?;
        self.state.update(|s| s.user_detail = Some(user));
        Ok(())
    }
}
