//! # Storefront Memory
//!
//! In-memory document store backend for Storefront.
//!
//! [`MemoryStore`] implements both store traits from `storefront-core` over
//! id-keyed `BTreeMap`s, one per collection. Identifiers are UUIDv7, so the
//! maps' key order is the "identifier ascending" order both list operations
//! paginate by.
//!
//! This is the backing store for the server binary and for the test suites;
//! it is deliberately a first-class backend rather than a test-only mock.
//!
//! # Concurrency
//!
//! Each collection sits behind its own `RwLock`. Critical sections only
//! cover the map operation itself; no lock is held across an await point.
//! A poisoned lock surfaces as [`StoreError::Backend`].

use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use storefront_core::{
    Clock, NewOrder, NewProduct, Order, OrderId, OrderStatus, OrderStore, PageRequest, Product,
    ProductFilter, ProductId, ProductStore, StoreError, SystemClock,
};
use storefront_core::store::StoreFuture;
use uuid::Uuid;

/// In-memory document store holding the product and order collections.
///
/// Cheap to clone conceptually via `Arc<MemoryStore>`; the server keeps one
/// instance and hands `Arc` clones to the web layer as
/// `Arc<dyn ProductStore>` / `Arc<dyn OrderStore>`.
pub struct MemoryStore {
    products: RwLock<BTreeMap<Uuid, Product>>,
    orders: RwLock<BTreeMap<Uuid, Order>>,
    clock: Arc<dyn Clock>,
}

impl std::fmt::Debug for MemoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryStore")
            .field("products", &self.product_count())
            .field("orders", &self.order_count())
            .finish_non_exhaustive()
    }
}

impl MemoryStore {
    /// Creates an empty store with the given clock.
    #[must_use]
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            products: RwLock::new(BTreeMap::new()),
            orders: RwLock::new(BTreeMap::new()),
            clock,
        }
    }

    /// Number of stored products (0 when the lock is poisoned).
    ///
    /// Useful for assertions in tests.
    #[must_use]
    pub fn product_count(&self) -> usize {
        self.products.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Number of stored orders (0 when the lock is poisoned).
    ///
    /// Useful for assertions in tests.
    #[must_use]
    pub fn order_count(&self) -> usize {
        self.orders.read().map(|map| map.len()).unwrap_or(0)
    }

    /// Removes everything from both collections (for test isolation).
    pub fn clear(&self) {
        if let Ok(mut map) = self.products.write() {
            map.clear();
        }
        if let Ok(mut map) = self.orders.write() {
            map.clear();
        }
    }

    /// Overwrites a product record in place, keeping its identifier.
    ///
    /// Products are never updated through the public API; this exists so
    /// tests can simulate out-of-band changes (price or name drift after an
    /// order captured them) and deletions' latent dangling-reference case.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the lock is poisoned.
    pub fn upsert_product(&self, product: Product) -> Result<(), StoreError> {
        let mut map = self
            .products
            .write()
            .map_err(|_| StoreError::backend("products lock poisoned"))?;
        map.insert(product.id.as_uuid(), product);
        Ok(())
    }

    /// Removes a product record, returning whether one existed.
    ///
    /// No deletion path exists in the public API; this lets tests exercise
    /// the dangling-reference case in the listing pipeline.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Backend`] when the lock is poisoned.
    pub fn remove_product(&self, id: ProductId) -> Result<bool, StoreError> {
        let mut map = self
            .products
            .write()
            .map_err(|_| StoreError::backend("products lock poisoned"))?;
        Ok(map.remove(&id.as_uuid()).is_some())
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock))
    }
}

impl ProductStore for MemoryStore {
    fn insert(&self, product: NewProduct) -> StoreFuture<'_, Product> {
        Box::pin(async move {
            let record = Product {
                id: ProductId::generate(),
                name: product.name,
                price: product.price,
                sizes: product.sizes,
                created_at: self.clock.now(),
            };
            let mut map = self
                .products
                .write()
                .map_err(|_| StoreError::backend("products lock poisoned"))?;
            map.insert(record.id.as_uuid(), record.clone());
            tracing::debug!(product_id = %record.id, name = %record.name, "product stored");
            Ok(record)
        })
    }

    fn get(&self, id: ProductId) -> StoreFuture<'_, Option<Product>> {
        Box::pin(async move {
            let map = self
                .products
                .read()
                .map_err(|_| StoreError::backend("products lock poisoned"))?;
            Ok(map.get(&id.as_uuid()).cloned())
        })
    }

    fn list(&self, filter: ProductFilter, page: PageRequest) -> StoreFuture<'_, Vec<Product>> {
        Box::pin(async move {
            let map = self
                .products
                .read()
                .map_err(|_| StoreError::backend("products lock poisoned"))?;
            // BTreeMap iteration is key-ascending, which is the pagination
            // order for the collection.
            let items = map
                .values()
                .filter(|product| filter.matches(product))
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect();
            Ok(items)
        })
    }
}

impl OrderStore for MemoryStore {
    fn insert(&self, order: NewOrder) -> StoreFuture<'_, Order> {
        Box::pin(async move {
            let record = Order {
                id: OrderId::generate(),
                user_id: order.user_id,
                items: order.items,
                total: order.total,
                status: OrderStatus::Pending,
                created_at: self.clock.now(),
            };
            let mut map = self
                .orders
                .write()
                .map_err(|_| StoreError::backend("orders lock poisoned"))?;
            map.insert(record.id.as_uuid(), record.clone());
            tracing::debug!(order_id = %record.id, user_id = %record.user_id, "order stored");
            Ok(record)
        })
    }

    fn get(&self, id: OrderId) -> StoreFuture<'_, Option<Order>> {
        Box::pin(async move {
            let map = self
                .orders
                .read()
                .map_err(|_| StoreError::backend("orders lock poisoned"))?;
            Ok(map.get(&id.as_uuid()).cloned())
        })
    }

    fn list_by_user<'a>(
        &'a self,
        user_id: &str,
        page: PageRequest,
    ) -> StoreFuture<'a, (Vec<Order>, u64)> {
        let user_id = user_id.to_string();
        Box::pin(async move {
            let map = self
                .orders
                .read()
                .map_err(|_| StoreError::backend("orders lock poisoned"))?;
            let matching: Vec<&Order> = map
                .values()
                .filter(|order| order.user_id == user_id)
                .collect();
            let total = matching.len() as u64;
            let items = matching
                .into_iter()
                .skip(page.offset() as usize)
                .take(page.limit() as usize)
                .cloned()
                .collect();
            Ok((items, total))
        })
    }
}
