use std::sync::Arc;

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use tracing::debug;

use crate::common::ApiError;
use crate::domains::auth::{AuthGate, GateDecision};
use crate::server::cookies::{extract_cookie, SESSION_COOKIE_NAME};

/// Session gate middleware.
///
/// Extracts the session cookie and applies the gate policy: public paths
/// pass through, unauthenticated API requests answer 401, unauthenticated
/// page requests are sent to the login page.
pub async fn session_auth_middleware(
    gate: Arc<AuthGate>,
    request: Request,
    next: Next,
) -> Response {
    let token = extract_cookie(request.headers(), SESSION_COOKIE_NAME);

    match gate.decide(request.uri().path(), token.as_deref()) {
        GateDecision::Allow => next.run(request).await,
        GateDecision::Unauthorized => {
            debug!(path = %request.uri().path(), "unauthenticated API request");
            ApiError::Unauthorized.into_response()
        }
        GateDecision::RedirectToLogin => Redirect::to("/login.html").into_response(),
    }
}
