//! Order validation pipeline.
//!
//! Transforms the raw `(productId, qty)` pairs of a create-order request
//! into validated, priced [`OrderLine`]s, or fails fast. Validation runs
//! before any persistence: if any line fails, nothing is written, which
//! makes order creation all-or-nothing even though the underlying store
//! offers no multi-document transaction.

use crate::ids::ProductId;
use crate::money::Money;
use crate::order::OrderLine;
use crate::store::{ProductStore, StoreError};
use thiserror::Error;

/// One requested line item, exactly as the client sent it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemRequest {
    /// Product identifier in string form; not yet parsed or resolved.
    pub product_id: String,
    /// Requested quantity.
    pub qty: u32,
}

/// The outcome of a successful validation pass.
#[derive(Clone, Debug, PartialEq)]
pub struct PricedItems {
    /// Validated lines with prices captured from the current product
    /// records, in request order.
    pub lines: Vec<OrderLine>,
    /// Sum of line totals.
    pub total: Money,
}

/// Errors raised by the order validation pipeline.
///
/// All variants except `Store` are client errors: the request itself was
/// bad and nothing was persisted.
#[derive(Debug, Clone, Error)]
pub enum CheckoutError {
    /// The product identifier is not parseable as a store identifier.
    #[error("invalid productId format: {0}")]
    InvalidProductId(String),

    /// The requested quantity is zero.
    #[error("qty must be positive for product {0}")]
    ZeroQuantity(String),

    /// The identifier is well-formed but no product record exists for it.
    #[error("product with id {0} not found")]
    ProductNotFound(ProductId),

    /// The order total does not fit in i64 cents.
    #[error("order total exceeds the representable amount")]
    TotalOverflow,

    /// Underlying persistence failure during a product lookup.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validates and prices the requested items against the product store.
///
/// Lines are processed sequentially and the first error aborts the whole
/// attempt. Each emitted line captures the product's price at this moment
/// (`price_at_order`); later price changes do not affect it.
///
/// # Errors
///
/// - [`CheckoutError::InvalidProductId`] for malformed identifiers
/// - [`CheckoutError::ZeroQuantity`] for zero quantities
/// - [`CheckoutError::ProductNotFound`] for unknown products
/// - [`CheckoutError::TotalOverflow`] when a line or the running total
///   does not fit in i64 cents
/// - [`CheckoutError::Store`] when a lookup itself fails
pub async fn price_items(
    products: &dyn ProductStore,
    items: &[ItemRequest],
) -> Result<PricedItems, CheckoutError> {
    let mut lines = Vec::with_capacity(items.len());
    let mut total = Money::ZERO;

    for item in items {
        let product_id = ProductId::parse(&item.product_id)
            .map_err(|_| CheckoutError::InvalidProductId(item.product_id.clone()))?;

        if item.qty == 0 {
            return Err(CheckoutError::ZeroQuantity(item.product_id.clone()));
        }

        let product = products
            .get(product_id)
            .await?
            .ok_or(CheckoutError::ProductNotFound(product_id))?;

        let line = OrderLine {
            product_id,
            qty: item.qty,
            price_at_order: product.price,
        };
        let line_total = line.total().ok_or(CheckoutError::TotalOverflow)?;
        total = total
            .checked_add(line_total)
            .ok_or(CheckoutError::TotalOverflow)?;
        lines.push(line);
    }

    tracing::debug!(lines = lines.len(), total = %total, "priced order items");

    Ok(PricedItems { lines, total })
}
