//! Page type for paginated catalog results.

use crate::model::Record;
use crate::model::RecordId;

use super::PageRequest;

/// One fetched batch of records together with the catalog size at fetch time.
///
/// Records keep the order the catalog returned them in.
///
/// # Example
///
/// ```ignore
/// let page = client.fetch_page(PageRequest::new(1, 10)?).await?;
///
/// for record in page.records() {
///     println!("{} {}", record.id, record.title);
/// }
/// println!("page {} of {}", page.index(), page.total_pages());
/// ```
#[derive(Debug, Clone)]
pub struct Page {
    request: PageRequest,
    records: Vec<Record>,
    /// Total record count reported by the catalog for this fetch.
    total_count: u64,
}

impl Page {
    /// Creates a page for `request` holding `records`.
    pub fn new(request: PageRequest, records: Vec<Record>) -> Self {
        let total_count = request.offset() + records.len() as u64;
        Self {
            request,
            records,
            total_count,
        }
    }

    /// Sets the total record count.
    pub fn with_total_count(mut self, count: u64) -> Self {
        self.total_count = count;
        self
    }

    /// Returns the request this page answers.
    pub fn request(&self) -> PageRequest {
        self.request
    }

    /// Returns the 1-based page index.
    pub fn index(&self) -> u32 {
        self.request.index()
    }

    /// Returns the page size that was requested.
    pub fn size(&self) -> u32 {
        self.request.size()
    }

    /// Returns a reference to the records in this page.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Consumes the page and returns the records.
    pub fn into_records(self) -> Vec<Record> {
        self.records
    }

    /// Returns the identities on this page in server order.
    pub fn ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|record| record.id)
    }

    /// Returns the total record count reported with this page.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    /// Returns the number of pages of this size the catalog holds.
    pub fn total_pages(&self) -> u64 {
        total_pages(self.total_count, self.size())
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if there are pages after this one.
    pub fn has_more(&self) -> bool {
        u64::from(self.index()) < self.total_pages()
    }
}

/// Number of pages of `size` records needed to hold `total` records.
pub fn total_pages(total: u64, size: u32) -> u64 {
    if size == 0 {
        return 0;
    }
    total.div_ceil(u64::from(size))
}
