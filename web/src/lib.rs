//! # Storefront Web
//!
//! Axum HTTP layer for the Storefront backend.
//!
//! # Request flow
//!
//! 1. **HTTP request** arrives at an Axum handler
//! 2. **Extract data** from the request (JSON body, path, query)
//! 3. **Run the pipeline** from `storefront-core` (checkout validation on
//!    create, enrichment on list) against the injected store handles
//! 4. **Map the result** to a response DTO or an [`AppError`]
//!
//! Handlers contain no business rules of their own; they translate between
//! the wire contract and the core pipelines.

pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use error::AppError;
pub use router::router;
pub use state::AppState;

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
