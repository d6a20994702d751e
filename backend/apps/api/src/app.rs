//! Router assembly
//!
//! Wraps the context routers with the server-wide pieces: liveness, static
//! uploads, JSON 404 fallback, request tracing and CORS.

use std::path::PathBuf;

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::get,
};
use kernel::error::app_error::AppError;
use tower::ServiceBuilder;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Prefix the context routers are mounted under
pub const API_PREFIX: &str = "/api/users";

/// Server-wide HTTP settings
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub cors_origins: Vec<HeaderValue>,
    pub upload_dir: PathBuf,
    /// Must match `StoryConfig::media_url_prefix`
    pub media_url_prefix: String,
}

/// Build the full application router around the merged context routes
pub fn build_router(api: Router, settings: &HttpSettings) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(settings.cors_origins.clone())
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    Router::new()
        .route("/", get(liveness))
        .nest(API_PREFIX, api)
        .nest_service(
            &settings.media_url_prefix,
            ServeDir::new(&settings.upload_dir),
        )
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
}

async fn liveness() -> &'static str {
    "Hello"
}

async fn not_found() -> AppError {
    AppError::not_found("Route not found")
}
