//! Order enrichment pipeline.
//!
//! For listing, each stored order's line items are joined back to the
//! current product records to produce denormalized display documents
//! (`{id, name}`) without mutating stored data. This is a read-time join:
//! product name changes show up in the very next listing, unlike
//! `price_at_order`, which stays frozen.

use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use crate::order::Order;
use crate::store::{ProductStore, StoreError};

/// Display name attached to a line whose product record no longer exists.
///
/// A dangling reference can only arise if a product were ever deleted;
/// no deletion path exists today, so this is a latent case. The line is
/// kept (qty and total must still add up) rather than dropped or failing
/// the whole listing.
pub const MISSING_PRODUCT_NAME: &str = "unknown product";

/// Denormalized product display data resolved at read time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductSummary {
    /// The referenced product's identifier, as stored on the line.
    pub id: ProductId,
    /// The product's current name.
    pub name: String,
}

/// One line item with its product display data attached.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EnrichedLine {
    /// Resolved product display data.
    pub product: ProductSummary,
    /// Quantity ordered.
    pub qty: u32,
}

/// A user-facing order record produced by the enrichment pipeline.
#[derive(Clone, Debug, PartialEq)]
pub struct EnrichedOrder {
    /// Order identifier.
    pub id: OrderId,
    /// Enriched line items, in stored order.
    pub items: Vec<EnrichedLine>,
    /// Stored total; never recomputed on read.
    pub total: Money,
}

/// Joins each order's line items to current product records.
///
/// Preserves item ordering within each order and order ordering across the
/// page. Lines referencing a product that no longer exists are kept with
/// [`MISSING_PRODUCT_NAME`] as the display name.
///
/// # Errors
///
/// Returns [`StoreError`] when a product lookup itself fails.
pub async fn enrich_orders(
    products: &dyn ProductStore,
    orders: Vec<Order>,
) -> Result<Vec<EnrichedOrder>, StoreError> {
    let mut enriched = Vec::with_capacity(orders.len());

    for order in orders {
        let mut items = Vec::with_capacity(order.items.len());
        for line in &order.items {
            let name = match products.get(line.product_id).await? {
                Some(product) => product.name,
                None => {
                    tracing::warn!(
                        order_id = %order.id,
                        product_id = %line.product_id,
                        "order line references a missing product"
                    );
                    MISSING_PRODUCT_NAME.to_string()
                }
            };
            items.push(EnrichedLine {
                product: ProductSummary {
                    id: line.product_id,
                    name,
                },
                qty: line.qty,
            });
        }
        enriched.push(EnrichedOrder {
            id: order.id,
            items,
            total: order.total,
        });
    }

    Ok(enriched)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)] // Test code can use unwrap/expect
mod tests {
    use super::*;
    use crate::order::{OrderLine, OrderStatus};
    use crate::product::{NewProduct, Product};
    use crate::store::{ProductFilter, StoreFuture};
    use crate::PageRequest;
    use chrono::Utc;
    use std::collections::HashMap;
    use std::sync::Mutex;

    struct StubProducts {
        records: Mutex<HashMap<ProductId, Product>>,
    }

    impl StubProducts {
        fn new() -> Self {
            Self {
                records: Mutex::new(HashMap::new()),
            }
        }

        fn seed(&self, name: &str) -> ProductId {
            let product = Product {
                id: ProductId::generate(),
                name: name.to_string(),
                price: Money::from_cents(1000),
                sizes: vec![],
                created_at: Utc::now(),
            };
            let id = product.id;
            self.records.lock().unwrap().insert(id, product);
            id
        }

        fn rename(&self, id: ProductId, name: &str) {
            self.records.lock().unwrap().get_mut(&id).unwrap().name = name.to_string();
        }
    }

    impl ProductStore for StubProducts {
        fn insert(&self, _product: NewProduct) -> StoreFuture<'_, Product> {
            unreachable!("not used by pipeline tests")
        }

        fn get(&self, id: ProductId) -> StoreFuture<'_, Option<Product>> {
            Box::pin(async move { Ok(self.records.lock().unwrap().get(&id).cloned()) })
        }

        fn list(&self, _: ProductFilter, _: PageRequest) -> StoreFuture<'_, Vec<Product>> {
            unreachable!("not used by pipeline tests")
        }
    }

    fn order(lines: Vec<OrderLine>) -> Order {
        let total = lines
            .iter()
            .map(|line| line.total().unwrap())
            .fold(Money::ZERO, |sum, line| sum.checked_add(line).unwrap());
        Order {
            id: OrderId::generate(),
            user_id: "u1".to_string(),
            items: lines,
            total,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        }
    }

    fn line(product_id: ProductId, qty: u32) -> OrderLine {
        OrderLine {
            product_id,
            qty,
            price_at_order: Money::from_cents(1000),
        }
    }

    #[tokio::test]
    async fn attaches_current_names_in_order() {
        let store = StubProducts::new();
        let hoodie = store.seed("Hoodie");
        let shirt = store.seed("Shirt");

        let enriched = enrich_orders(&store, vec![order(vec![line(hoodie, 2), line(shirt, 1)])])
            .await
            .unwrap();

        assert_eq!(enriched.len(), 1);
        let items = &enriched[0].items;
        assert_eq!(items[0].product.name, "Hoodie");
        assert_eq!(items[0].qty, 2);
        assert_eq!(items[1].product.name, "Shirt");
    }

    #[tokio::test]
    async fn reflects_renames_on_next_read() {
        let store = StubProducts::new();
        let hoodie = store.seed("Hoodie");
        let stored = order(vec![line(hoodie, 1)]);

        store.rename(hoodie, "Zip Hoodie");
        let enriched = enrich_orders(&store, vec![stored]).await.unwrap();

        assert_eq!(enriched[0].items[0].product.name, "Zip Hoodie");
    }

    #[tokio::test]
    async fn missing_product_gets_placeholder_not_dropped() {
        let store = StubProducts::new();
        let gone = ProductId::generate();
        let stored = order(vec![line(gone, 3)]);
        let total = stored.total;

        let enriched = enrich_orders(&store, vec![stored]).await.unwrap();

        assert_eq!(enriched[0].items.len(), 1);
        assert_eq!(enriched[0].items[0].product.name, MISSING_PRODUCT_NAME);
        assert_eq!(enriched[0].items[0].product.id, gone);
        assert_eq!(enriched[0].total, total);
    }

    #[tokio::test]
    async fn preserves_order_and_total_across_page() {
        let store = StubProducts::new();
        let hoodie = store.seed("Hoodie");

        let first = order(vec![line(hoodie, 1)]);
        let second = order(vec![line(hoodie, 2)]);
        let ids = (first.id, second.id);

        let enriched = enrich_orders(&store, vec![first, second]).await.unwrap();

        assert_eq!(enriched[0].id, ids.0);
        assert_eq!(enriched[1].id, ids.1);
        assert_eq!(enriched[1].total, Money::from_cents(2000));
    }
}
