//! Storefront HTTP router.
//!
//! Composes all handlers into a single Axum router with tracing and
//! request-id layers.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Create the Storefront router with all endpoints.
///
/// # Routes
///
/// - `GET  /` - Service banner
/// - `GET  /health` - Liveness check
/// - `POST /products` - Create a product
/// - `GET  /products` - List products (name/size filters, pagination)
/// - `POST /orders` - Create an order
/// - `GET  /orders/:user_id` - List a user's orders, enriched
///
/// # Example
///
/// ```ignore
/// let store = Arc::new(MemoryStore::default());
/// let app = storefront_web::router(AppState::new(store.clone(), store));
/// axum::serve(listener, app).await?;
/// ```
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route(
            "/products",
            post(handlers::products::create_product).get(handlers::products::list_products),
        )
        .route("/orders", post(handlers::orders::create_order))
        .route("/orders/:user_id", get(handlers::orders::list_user_orders))
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
        .with_state(state)
}
