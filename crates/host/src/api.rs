//! HTTP surface for slide-deck
//!
//! `/api/health` answers liveness checks; every other path is served from
//! the site root (page, wasm bundle, deck files, images). Decks are plain
//! static files fetched by the page itself.

use axum::{routing::get, Json, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use crate::config::SiteConfig;

// Routes
pub fn api_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Complete application: API plus static site
pub fn app(site: &SiteConfig) -> Router {
    Router::new()
        .nest("/api", api_router())
        .fallback_service(ServeDir::new(&site.root))
        .layer(CorsLayer::permissive())
}

// Handlers

async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok", "version": env!("CARGO_PKG_VERSION") }))
}
