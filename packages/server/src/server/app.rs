//! Application setup and server configuration.

use std::sync::Arc;

use axum::extract::Extension;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Method;
use axum::middleware;
use axum::routing::{get, patch, post};
use axum::Router;
use sqlx::PgPool;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::AuthGate;
use crate::server::middleware::session_auth_middleware;
use crate::server::routes::{
    check_handler, create_interaction, create_prospect, delete_prospect, fill_template,
    get_prospect, health_handler, list_prospects, list_prospects_by_etape, list_templates,
    login_handler, logout_handler, pipeline_handler, stats_handler, update_prospect,
    update_prospect_etape,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    pub gate: Arc<AuthGate>,
    pub secure_cookies: bool,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, gate: Arc<AuthGate>, secure_cookies: bool) -> Router {
    let app_state = AppState {
        db_pool: pool,
        gate: gate.clone(),
        secure_cookies,
    };

    // CORS configuration - the dashboard may be served from another origin
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Clone gate for the middleware closure
    let gate_for_middleware = gate;

    Router::new()
        // Authentication handshake (reachable without a session)
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/check", get(check_handler))
        .route("/api/auth/logout", post(logout_handler))
        // Prospects
        .route("/api/prospects", get(list_prospects).post(create_prospect))
        .route("/api/prospects/by-etape/:etape", get(list_prospects_by_etape))
        .route(
            "/api/prospects/:id",
            get(get_prospect).put(update_prospect).delete(delete_prospect),
        )
        .route("/api/prospects/:id/etape", patch(update_prospect_etape))
        // Interactions
        .route("/api/interactions", post(create_interaction))
        // Templates
        .route("/api/templates", get(list_templates))
        .route("/api/templates/remplir", post(fill_template))
        // Stats
        .route("/api/stats", get(stats_handler))
        .route("/api/pipeline", get(pipeline_handler))
        // Health check
        .route("/api/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn(move |req, next| {
            session_auth_middleware(gate_for_middleware.clone(), req, next)
        }))
        .layer(Extension(app_state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
