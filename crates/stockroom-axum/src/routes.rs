//! Route definitions and router construction.
//!
//! This module defines the HTTP routes and creates the main router.
//! Handlers delegate to the shared core services.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;

use crate::bootstrap::{ApiContext, CorsConfig};
use crate::handlers;
use crate::state::AppState;

use stockroom_core::{MAX_FILES_PER_UPLOAD, MAX_IMAGE_BYTES};

/// Request body cap: a full batch of maximum-size images plus form overhead.
const MAX_BODY_BYTES: usize = MAX_FILES_PER_UPLOAD * MAX_IMAGE_BYTES + 1024 * 1024;

/// Build CORS layer from configuration.
fn build_cors_layer(config: &CorsConfig) -> CorsLayer {
    match config {
        CorsConfig::AllowAll => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
        CorsConfig::AllowOrigins(origins) => {
            use axum::http::HeaderValue;
            let allowed: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
            CorsLayer::new()
                .allow_origin(allowed)
                .allow_methods(Any)
                .allow_headers(Any)
        }
    }
}

/// Build all API routes without the `/api` prefix (for nesting under `/api`).
///
/// Returned without `.with_state()` applied; the caller applies state before
/// nesting.
pub(crate) fn api_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/product",
            get(handlers::products::list).post(handlers::products::create),
        )
        .route(
            "/product/{id}",
            get(handlers::products::get)
                .put(handlers::products::update)
                .delete(handlers::products::remove),
        )
        .route(
            "/product/{id}/images",
            post(handlers::images::upload).delete(handlers::images::remove),
        )
}

/// Create the main Axum router: API routes under `/api`, read-only static
/// serving of uploaded files under `/uploads`, and `/health`.
///
/// # Path Parameter Syntax
/// Axum 0.8 uses brace syntax for path parameters: `{id}`
pub fn create_router(ctx: ApiContext, cors_config: &CorsConfig) -> Router {
    let uploads_root = ctx.uploads_root().to_path_buf();
    let state: AppState = Arc::new(ctx);
    let cors = build_cors_layer(cors_config);

    Router::new()
        .route("/health", get(health_check))
        .nest(
            "/api",
            api_routes()
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
                .with_state(state)
                .layer(cors),
        )
        .nest_service("/uploads", ServeDir::new(uploads_root))
}

/// Health check endpoint.
pub(crate) async fn health_check() -> &'static str {
    "OK"
}
