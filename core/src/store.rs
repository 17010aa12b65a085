//! Store traits and errors for the product and order collections.
//!
//! # Design
//!
//! The traits are deliberately minimal: exactly the operations the HTTP
//! surface needs, nothing more. Both collections paginate by identifier
//! ascending so that offset-based pages are stable.
//!
//! # Dyn compatibility
//!
//! The traits use explicit `Pin<Box<dyn Future>>` returns instead of
//! `async fn` so they can be used as trait objects (`Arc<dyn ProductStore>`)
//! injected into the web layer's application state.
//!
//! # Implementations
//!
//! - `MemoryStore` (in `storefront-memory`): the document store backing the
//!   server and the test suites.

use crate::ids::{OrderId, ProductId};
use crate::order::{NewOrder, Order};
use crate::pagination::PageRequest;
use crate::product::{NewProduct, Product};
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Boxed future returned by store operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + Send + 'a>>;

/// Errors that can occur during store operations.
///
/// Store failures are server-side faults; nothing is committed past the
/// failing operation. They surface at the HTTP boundary as 500s with a
/// generic message.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Underlying persistence failure (backend fault, poisoned lock, ...).
    #[error("store backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Creates a backend error from any displayable cause.
    pub fn backend(cause: impl std::fmt::Display) -> Self {
        Self::Backend(cause.to_string())
    }
}

/// Optional filters for product listing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProductFilter {
    /// Case-insensitive substring match against the product name.
    pub name: Option<String>,
    /// Exact match against any entry's `size` label.
    pub size: Option<String>,
}

impl ProductFilter {
    /// Returns true when the product passes both filters.
    #[must_use]
    pub fn matches(&self, product: &Product) -> bool {
        let name_ok = self.name.as_ref().is_none_or(|needle| {
            product
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
        });
        let size_ok = self
            .size
            .as_ref()
            .is_none_or(|size| product.sizes.iter().any(|variant| &variant.size == size));
        name_ok && size_ok
    }
}

/// The product collection.
pub trait ProductStore: Send + Sync {
    /// Persists a new product, assigning its identifier and creation
    /// timestamp.
    ///
    /// Callers validate the draft first ([`NewProduct::validate`]); the
    /// store performs no constraint checking of its own.
    fn insert(&self, product: NewProduct) -> StoreFuture<'_, Product>;

    /// Looks up a product by identifier.
    fn get(&self, id: ProductId) -> StoreFuture<'_, Option<Product>>;

    /// Lists products matching `filter`, ordered by identifier ascending,
    /// paginated by `page`.
    fn list(&self, filter: ProductFilter, page: PageRequest) -> StoreFuture<'_, Vec<Product>>;
}

/// The order collection.
pub trait OrderStore: Send + Sync {
    /// Persists a new order with status `pending`, assigning its identifier
    /// and creation timestamp. No validation happens here; the checkout
    /// pipeline already did it.
    fn insert(&self, order: NewOrder) -> StoreFuture<'_, Order>;

    /// Looks up an order by identifier.
    fn get(&self, id: OrderId) -> StoreFuture<'_, Option<Order>>;

    /// Lists a user's orders (exact `user_id` match) ordered by identifier
    /// ascending, paginated by `page`. Also returns the total number of
    /// matching orders across all pages.
    fn list_by_user<'a>(
        &'a self,
        user_id: &str,
        page: PageRequest,
    ) -> StoreFuture<'a, (Vec<Order>, u64)>;
}
