//! Pagination and load state types.

use chrono::DateTime;
use chrono::Utc;

use crate::api::DEFAULT_PAGE_SIZE;
use crate::api::PageRequest;
use crate::api::total_pages;
use crate::api::validate_page_size;
use crate::error::ValidationError;

use super::RequestToken;

/// Current page index and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    index: u32,
    size: u32,
}

impl PaginationState {
    /// Starts at page 1 with the given size.
    pub fn new(size: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            index: 1,
            size: validate_page_size(size)?,
        })
    }

    /// Returns the 1-based page index.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Returns the page size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Returns the request for the current page.
    pub fn request(&self) -> PageRequest {
        PageRequest::from_validated(self.index, self.size)
    }

    pub(crate) fn set_index(&mut self, index: u32) {
        self.index = index;
    }

    /// Changing the size invalidates the old index, so it resets to 1.
    pub(crate) fn set_size(&mut self, size: u32) {
        self.size = size;
        self.index = 1;
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self {
            index: 1,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Where the controller is in the fetch cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Waiting for the fetch tagged with `token`.
    Loading {
        /// The only token whose result will be applied.
        token: RequestToken,
    },
    /// The latest fetch succeeded.
    Loaded,
    /// The latest fetch failed; the previous page (if any) is still shown.
    Failed,
}

impl LoadState {
    /// Returns `true` while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading { .. })
    }
}

/// What the catalog reported about its size on the last successful fetch.
///
/// The catalog is live, so this may change from one fetch to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogSummary {
    /// Total number of records.
    pub total_count: u64,
    /// When the fetch that reported it completed.
    pub fetched_at: DateTime<Utc>,
}

impl CatalogSummary {
    /// Creates a summary stamped with the current time.
    pub fn now(total_count: u64) -> Self {
        Self {
            total_count,
            fetched_at: Utc::now(),
        }
    }

    /// Number of pages of `size` records.
    pub fn total_pages(&self, size: u32) -> u64 {
        total_pages(self.total_count, size)
    }
}
