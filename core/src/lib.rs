//! # Storefront Core
//!
//! Domain model and order pipelines for the Storefront backend.
//!
//! This crate contains everything that does not touch HTTP or a concrete
//! database:
//!
//! - Domain types ([`Product`], [`Order`], [`Money`], identifier newtypes)
//! - Store abstractions ([`ProductStore`], [`OrderStore`]) implemented by
//!   backend crates
//! - The order validation pipeline ([`checkout`])
//! - The order enrichment pipeline ([`listing`])
//! - Pagination primitives shared by both list endpoints
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │        Web layer (storefront-web)       │  ← HTTP, JSON, status codes
//! ├─────────────────────────────────────────┤
//! │        Pipelines (this crate)           │
//! │  - checkout: validate + price lines     │  ← all-or-nothing before write
//! │  - listing: read-time product join      │  ← never mutates stored orders
//! ├─────────────────────────────────────────┤
//! │        Store traits (this crate)        │
//! │  - implemented by storefront-memory     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! Store handles are explicit, constructor-injected dependencies
//! (`Arc<dyn ProductStore>` / `Arc<dyn OrderStore>`); there is no ambient
//! global connection state anywhere in the workspace.

pub mod checkout;
pub mod clock;
pub mod ids;
pub mod listing;
pub mod money;
pub mod order;
pub mod pagination;
pub mod product;
pub mod store;

pub use checkout::{CheckoutError, ItemRequest, PricedItems};
pub use clock::{Clock, FixedClock, SystemClock};
pub use ids::{OrderId, ParseIdError, ProductId};
pub use listing::{EnrichedLine, EnrichedOrder, ProductSummary};
pub use money::Money;
pub use order::{NewOrder, Order, OrderLine, OrderStatus};
pub use pagination::{PageError, PageInfo, PageRequest};
pub use product::{NewProduct, Product, SizeVariant, ValidationError};
pub use store::{OrderStore, ProductFilter, ProductStore, StoreError};
