//! Offset/limit pagination shared by both list endpoints.
//!
//! The response metadata mirrors the existing wire contract: `limit` is the
//! number of records actually returned (not the requested page size), `next`
//! is the following offset as a string and only present when the page came
//! back full, and `previous` is the preceding offset as a string when one
//! exists. Underflowed `previous` offsets render as `null` (the historical
//! `"-10"` sentinel was an artifact and is not carried forward).

use serde::Serialize;
use thiserror::Error;

/// Error raised for out-of-range pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    /// `limit` outside the accepted [1, 100] window.
    #[error("limit must be between 1 and {max}, got {got}", max = PageRequest::MAX_LIMIT)]
    LimitOutOfRange {
        /// The rejected value.
        got: u32,
    },
}

/// A validated page selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    limit: u32,
    offset: u32,
}

impl PageRequest {
    /// Page size used when the client does not ask for one.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Largest accepted page size.
    pub const MAX_LIMIT: u32 = 100;

    /// Creates a page request, checking `limit` against [1, 100].
    ///
    /// Offsets are non-negative by construction (`u32`).
    ///
    /// # Errors
    ///
    /// Returns [`PageError::LimitOutOfRange`] when `limit` is 0 or above
    /// [`Self::MAX_LIMIT`].
    pub const fn new(limit: u32, offset: u32) -> Result<Self, PageError> {
        if limit == 0 || limit > Self::MAX_LIMIT {
            return Err(PageError::LimitOutOfRange { got: limit });
        }
        Ok(Self { limit, offset })
    }

    /// Requested page size.
    #[must_use]
    pub const fn limit(self) -> u32 {
        self.limit
    }

    /// Number of records to skip.
    #[must_use]
    pub const fn offset(self) -> u32 {
        self.offset
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            limit: Self::DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

/// Pagination metadata returned alongside a page of records.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Offset of the next page as a string; absent unless this page was
    /// full.
    pub next: Option<String>,
    /// Number of records in the current page.
    pub limit: usize,
    /// Offset of the previous page as a string; absent on the first page
    /// and when the previous offset would be negative.
    pub previous: Option<String>,
}

impl PageInfo {
    /// Computes metadata for a page that returned `returned` records.
    #[must_use]
    pub fn for_page(page: PageRequest, returned: usize) -> Self {
        let next = (returned == page.limit as usize)
            .then(|| (page.offset + page.limit).to_string());
        let previous = (page.offset > 0)
            .then(|| page.offset.checked_sub(page.limit))
            .flatten()
            .map(|prev| prev.to_string());
        Self {
            next,
            limit: returned,
            previous,
        }
    }
}
