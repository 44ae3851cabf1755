//! Paged access to the remote catalog.

mod catalog;
mod page;
mod request;

pub use page::*;
pub use request::*;

use async_trait::async_trait;

use crate::error::FetchError;

/// A remote source that can hand out one page of records at a time.
///
/// Implementations are stateless from the caller's point of view and may be
/// called concurrently for different pages. They must not retry on their
/// own and must not return partial pages on failure.
///
/// [`CatalogClient`](crate::CatalogClient) is the HTTP implementation.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use artworks_lib::api::{Page, PageRequest, PageSource};
/// use artworks_lib::error::FetchError;
///
/// struct Fixed(Vec<Record>);
///
/// #[async_trait]
/// impl PageSource for Fixed {
///     async fn fetch_page(&self, request: PageRequest) -> Result<Page, FetchError> {
///         let start = request.offset() as usize;
///         let end = (start + request.size() as usize).min(self.0.len());
///         let records = self.0.get(start..end).unwrap_or_default().to_vec();
///         Ok(Page::new(request, records).with_total_count(self.0.len() as u64))
///     }
/// }
/// ```
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetches the page described by `request` and the current total count.
    async fn fetch_page(&self, request: PageRequest) -> Result<Page, FetchError>;
}
