//! Application state for Axum handlers.

use std::sync::Arc;
use storefront_core::{OrderStore, ProductStore};

/// Application state shared across all HTTP handlers.
///
/// Store handles are explicit, constructor-injected dependencies. The
/// server builds one concrete store and passes it in as trait objects; the
/// handlers never reach for ambient connection state.
///
/// # Examples
///
/// ```ignore
/// use std::sync::Arc;
/// use storefront_memory::MemoryStore;
/// use storefront_web::AppState;
///
/// let store = Arc::new(MemoryStore::default());
/// let state = AppState::new(store.clone(), store);
/// let app = storefront_web::router(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    /// Product collection handle.
    pub products: Arc<dyn ProductStore>,
    /// Order collection handle.
    pub orders: Arc<dyn OrderStore>,
}

impl AppState {
    /// Create application state from store handles.
    #[must_use]
    pub fn new(products: Arc<dyn ProductStore>, orders: Arc<dyn OrderStore>) -> Self {
        Self { products, orders }
    }
}
