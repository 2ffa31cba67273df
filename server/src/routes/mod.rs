//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The SPA is a static bundle. Any path that is not a file in the site
//! directory gets `index.html`, and the client shell picks the page from the
//! path itself. Authentication endpoints live on the backend, not here.


use std::path::Path;

use axum::Json;
use axum::Router;
use axum::routing::get;
use serde::Serialize;
use time::OffsetDateTime;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

pub const SERVICE_NAME: &str = "vibed-traveller-web";

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub service: &'static str,
}

/// Health endpoint plus the static site with SPA fallback.
pub fn app(site_dir: &Path) -> Router {
    let site = ServeDir::new(site_dir).fallback(ServeFile::new(site_dir.join("index.html")));

    Router::new()
        .route("/health", get(health))
        .fallback_service(site)
        .layer(TraceLayer::new_for_http())
}

async fn health() -> Json<HealthResponse> {
    tracing::debug!("health check");
    Json(HealthResponse { status: "healthy", timestamp: OffsetDateTime::now_utc(), service: SERVICE_NAME })
}
