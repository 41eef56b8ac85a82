//! Cross-origin resource sharing middleware.

use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Any origin may call the API, so the landing page and third-party
/// test runners can submit URLs from another host.
pub fn layer() -> CorsLayer {
    CorsLayer::permissive()
}
