//! Liveness endpoints.
//!
//! Used by load balancers and monitoring systems; neither endpoint checks
//! dependencies.

use axum::{http::StatusCode, Json};
use serde::Serialize;

/// Banner returned from the API root.
#[derive(Debug, Clone, Serialize)]
pub struct Banner {
    /// Human-readable service banner.
    pub message: &'static str,
}

/// Service banner at `GET /`.
#[allow(clippy::unused_async)]
pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: "Storefront API is running!",
    })
}

/// Simple health check endpoint (for basic liveness) at `GET /health`.
#[allow(clippy::unused_async)]
pub async fn health_check() -> (StatusCode, &'static str) {
    (StatusCode::OK, "ok")
}
