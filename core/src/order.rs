//! Order records: line items with captured prices, totals, and status.

use crate::ids::{OrderId, ProductId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status.
///
/// Orders are created as [`OrderStatus::Pending`]; no transitions are
/// implemented in this system's scope.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Initial status assigned at creation.
    Pending,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
        }
    }
}

/// One validated line item within an order.
///
/// `price_at_order` is the product price captured when the order was
/// created; it is immutable afterwards, even if the product's current
/// price changes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    /// Referenced product; non-owning, resolved again at read time for
    /// display.
    pub product_id: ProductId,
    /// Quantity ordered, always positive.
    pub qty: u32,
    /// Price per unit captured at order creation.
    pub price_at_order: Money,
}

impl OrderLine {
    /// Total for this line: `qty * price_at_order`.
    ///
    /// Returns `None` when the multiplication would overflow i64 cents.
    #[must_use]
    pub const fn total(&self) -> Option<Money> {
        self.price_at_order.checked_mul(self.qty)
    }
}

/// A stored order record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Store-assigned identifier.
    pub id: OrderId,
    /// Purchaser; free-form text, no referential check (no user entity
    /// exists).
    pub user_id: String,
    /// Validated line items in request order.
    pub items: Vec<OrderLine>,
    /// Sum of line totals, computed once at creation and stored.
    pub total: Money,
    /// Lifecycle status.
    pub status: OrderStatus,
    /// Creation timestamp, set once by the store.
    pub created_at: DateTime<Utc>,
}

/// An order as produced by the checkout pipeline, before the store assigns
/// an identifier, status, and timestamp.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOrder {
    /// Purchaser.
    pub user_id: String,
    /// Validated, priced line items.
    pub items: Vec<OrderLine>,
    /// Total computed by the checkout pipeline.
    pub total: Money,
}
