//! Store-assigned identifiers for products and orders.
//!
//! Identifiers are UUIDv7 values: time-ordered, so sorting by identifier
//! ascending (the pagination order for both collections) matches creation
//! order. On the wire they are opaque strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

/// Error returned when a string is not a valid store identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid identifier: {0}")]
pub struct ParseIdError(pub String);

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh, time-ordered identifier.
            #[must_use]
            pub fn generate() -> Self {
                Self(Uuid::now_v7())
            }

            /// Parses an identifier from its string form.
            ///
            /// # Errors
            ///
            /// Returns [`ParseIdError`] when the input is not a valid UUID.
            pub fn parse(input: &str) -> Result<Self, ParseIdError> {
                Uuid::parse_str(input)
                    .map(Self)
                    .map_err(|_| ParseIdError(input.to_string()))
            }

            /// Returns the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }
    };
}

id_type! {
    /// Unique identifier for a product.
    ProductId
}

id_type! {
    /// Unique identifier for an order.
    OrderId
}
