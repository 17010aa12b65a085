//! HTTP handlers for the Storefront API.

pub mod health;
pub mod orders;
pub mod products;

use crate::error::AppError;
use storefront_core::PageRequest;

/// Builds a [`PageRequest`] from optional query parameters, applying the
/// default page size and rejecting out-of-range limits as client errors.
fn page_request(limit: Option<u32>, offset: Option<u32>) -> Result<PageRequest, AppError> {
    let page = PageRequest::new(
        limit.unwrap_or(PageRequest::DEFAULT_LIMIT),
        offset.unwrap_or(0),
    )?;
    Ok(page)
}
