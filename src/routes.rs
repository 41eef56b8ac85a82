//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                       - Landing page
//! - `GET  /health`                 - Health check
//! - `POST /api/shorturl`           - Register a URL
//! - `GET  /api/shorturl/{code}`    - Short URL redirect
//! - `/public/*`                    - Static assets
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Permissive cross-origin access (configurable)
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{cors, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::{ServeDir, ServeFile};

/// Router settings derived from [`Config`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    pub cors_enabled: bool,
    pub public_dir: String,
    pub index_file: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            cors_enabled: true,
            public_dir: "public".to_string(),
            index_file: "views/index.html".to_string(),
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            cors_enabled: config.cors_enabled,
            public_dir: config.public_dir.clone(),
            index_file: config.index_file.clone(),
        }
    }
}

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `options` - static asset locations and CORS toggle
pub fn app_router(state: AppState, options: &RouterOptions) -> NormalizePath<Router> {
    let router = Router::new()
        .route_service("/", ServeFile::new(&options.index_file))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/public", ServeDir::new(&options.public_dir))
        .with_state(state);

    let router = if options.cors_enabled {
        router.layer(cors::layer())
    } else {
        router
    };

    NormalizePathLayer::trim_trailing_slash().layer(router.layer(tracing::layer()))
}
