//! Product records and creation-time validation.

use crate::ids::ProductId;
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One size entry in a product's size list.
///
/// Size values are free-form text; the list is ordered and may contain
/// duplicate size labels (no uniqueness constraint).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeVariant {
    /// Size label (e.g. "S", "M", "XL").
    pub size: String,
    /// Quantity available for this size.
    pub quantity: u32,
}

/// A stored product record.
///
/// Products are created once and never updated or deleted in this system's
/// scope; `created_at` and `price` are set at creation and stay fixed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Store-assigned identifier.
    pub id: ProductId,
    /// Product name, non-empty.
    pub name: String,
    /// Current price, strictly positive.
    pub price: Money,
    /// Available sizes with their quantities.
    pub sizes: Vec<SizeVariant>,
    /// Creation timestamp, set once by the store.
    pub created_at: DateTime<Utc>,
}

/// Errors raised by creation-time input validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product name is empty or whitespace-only.
    #[error("product name must not be empty")]
    EmptyName,

    /// Product price is zero or negative.
    #[error("product price must be positive, got {0}")]
    NonPositivePrice(Money),
}

/// A product as submitted for creation, before the store assigns an
/// identifier and timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewProduct {
    /// Product name.
    pub name: String,
    /// Product price.
    pub price: Money,
    /// Available sizes; may be empty.
    pub sizes: Vec<SizeVariant>,
}

impl NewProduct {
    /// Checks the creation constraints: non-empty name, positive price.
    ///
    /// Size quantities are non-negative by construction (`u32`), so the
    /// size list needs no further checking here.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] naming the first violated constraint.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if !self.price.is_positive() {
            return Err(ValidationError::NonPositivePrice(self.price));
        }
        Ok(())
    }
}
