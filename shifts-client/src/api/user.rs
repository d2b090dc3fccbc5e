//! User API (認証・ユーザー)

use shared::client::{LoginRequest, LoginResponse, TokenRefreshRequest, TokenRefreshResponse};
use shared::models::{User, UserRegister, UserUpdate};

use super::detail_path;
use crate::{ApiResponse, ClientResult, HttpClient};

pub const USER_LOGIN: &str = "/user/login/";
pub const USER_REGISTER: &str = "/user/register/";
pub const USER_TOKEN_REFRESH: &str = "/user/token/refresh/";
pub const USER_LIST: &str = "/user/users/";

pub async fn login<C: HttpClient>(
    http: &C,
    req: &LoginRequest,
) -> ClientResult<ApiResponse<LoginResponse>> {
    http.post(USER_LOGIN, req).await
}

pub async fn register<C: HttpClient>(
    http: &C,
    req: &UserRegister,
) -> ClientResult<ApiResponse<User>> {
    http.post(USER_REGISTER, req).await
}

pub async fn refresh_token<C: HttpClient>(
    http: &C,
    refresh: &str,
) -> ClientResult<ApiResponse<TokenRefreshResponse>> {
    let req = TokenRefreshRequest {
        refresh: refresh.to_string(),
    };
    http.post(USER_TOKEN_REFRESH, &req).await
}

pub async fn user_list<C: HttpClient>(http: &C) -> ClientResult<ApiResponse<Vec<User>>> {
    http.get(USER_LIST).await
}

pub async fn user_detail<C: HttpClient>(http: &C, id: i64) -> ClientResult<ApiResponse<User>> {
    http.get(&detail_path(USER_LIST, id)).await
}

pub async fn update_user<C: HttpClient>(
    http: &C,
    id: i64,
    data: &UserUpdate,
) -> ClientResult<ApiResponse<User>> {
    http.put(&detail_path(USER_LIST, id), data).await
}

pub async fn delete_user<C: HttpClient>(
    http: &C,
    id: i64,
) -> ClientResult<ApiResponse<serde_json::Value>> {
    http.delete(&detail_path(USER_LIST, id)).await
}
