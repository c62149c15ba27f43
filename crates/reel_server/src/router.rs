//! Router construction for the Reel profile server.

use std::sync::Arc;

use axum::{
    middleware as axum_mw,
    routing::{get, post},
    Extension, Router,
};
use reel_core::service::ProfileService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers;
use crate::middleware::jwt::{jwt_auth, JwtConfig};

/// Build the full axum router with all routes and middleware.
pub fn build_router(service: Arc<dyn ProfileService>, jwt_config: JwtConfig) -> Router {
    let protected = Router::new()
        .route(
            "/profiles/me",
            get(handlers::profiles::get_me).patch(handlers::profiles::edit_me),
        )
        .route(
            "/profiles/onboarding",
            post(handlers::profiles::complete_onboarding),
        )
        .layer(axum_mw::from_fn(jwt_auth))
        .layer(Extension(jwt_config));

    let public = Router::new().route("/health", get(handlers::health::health));

    public
        .merge(protected)
        .layer(Extension(service))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
