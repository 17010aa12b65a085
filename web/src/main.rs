//! Storefront HTTP API server.
//!
//! # Usage
//!
//! ```bash
//! STOREFRONT_ADDR=0.0.0.0:3000 RUST_LOG=info cargo run --bin storefront-server
//! ```
//!
//! # API Endpoints
//!
//! - `GET  /` - Service banner
//! - `GET  /health` - Liveness check
//! - `POST /products` - Create a product
//! - `GET  /products?name=&size=&limit=&offset=` - List products
//! - `POST /orders` - Create an order
//! - `GET  /orders/:user_id?limit=&offset=` - List a user's orders
//!
//! # Example Requests
//!
//! ```bash
//! # Create a product
//! curl -X POST http://localhost:3000/products \
//!   -H "Content-Type: application/json" \
//!   -d '{"name": "Hoodie", "price": 45.5, "sizes": [{"size": "M", "quantity": 50}]}'
//!
//! # Create an order
//! curl -X POST http://localhost:3000/orders \
//!   -H "Content-Type: application/json" \
//!   -d '{"userId": "u1", "items": [{"productId": "<id>", "qty": 2}]}'
//!
//! # List the user's orders
//! curl http://localhost:3000/orders/u1
//! ```

use std::sync::Arc;

use storefront_memory::MemoryStore;
use storefront_web::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Address the server binds to when `STOREFRONT_ADDR` is not set.
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Set up tracing; RUST_LOG overrides the default level.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // The document store is an explicit handle owned here and injected into
    // the web layer; nothing else in the workspace holds connection state.
    let store = Arc::new(MemoryStore::default());
    let state = AppState::new(
        Arc::clone(&store) as Arc<dyn storefront_core::ProductStore>,
        store as Arc<dyn storefront_core::OrderStore>,
    );

    let app = storefront_web::router(state);

    let addr = std::env::var("STOREFRONT_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Storefront server listening on http://{addr}");
    axum::serve(listener, app).await?;

    Ok(())
}
