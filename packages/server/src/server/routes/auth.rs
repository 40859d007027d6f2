use axum::extract::Extension;
use axum::http::header::SET_COOKIE;
use axum::http::HeaderMap;
use axum::response::{AppendHeaders, IntoResponse};
use axum::Json;
use serde::Deserialize;
use serde_json::json;

use crate::common::ApiError;
use crate::server::app::AppState;
use crate::server::cookies::{
    clear_session_cookie, extract_cookie, session_cookie, SESSION_COOKIE_NAME,
};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Shared-password login. A wrong password is a plain 401 with no further
/// detail; success sets the session cookie.
pub async fn login_handler(
    Extension(state): Extension<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if !state.gate.verify_password(&payload.password) {
        return Err(ApiError::Unauthorized);
    }

    let cookie = session_cookie(state.gate.session_token(), state.secure_cookies);
    Ok((
        AppendHeaders([(SET_COOKIE, cookie)]),
        Json(json!({ "success": true })),
    ))
}

/// Report whether the request carries a valid session cookie.
pub async fn check_handler(
    Extension(state): Extension<AppState>,
    headers: HeaderMap,
) -> Json<serde_json::Value> {
    let token = extract_cookie(&headers, SESSION_COOKIE_NAME);
    Json(json!({ "authenticated": state.gate.is_authenticated(token.as_deref()) }))
}

/// Overwrite the session cookie with an immediately-expiring empty value.
pub async fn logout_handler() -> impl IntoResponse {
    (
        AppendHeaders([(SET_COOKIE, clear_session_cookie())]),
        Json(json!({ "success": true })),
    )
}
