//! The pagination state machine.

use log::debug;
use log::info;
use log::trace;
use log::warn;

use crate::api::Page;
use crate::api::validate_page_index;
use crate::api::validate_page_size;
use crate::error::FetchError;
use crate::error::ValidationError;
use crate::model::Record;

use super::CatalogSummary;
use super::LoadRequest;
use super::LoadState;
use super::PaginationState;
use super::RequestToken;
use super::token::TokenSequence;

/// Outcome of handing a fetch result to [`PaginationController::complete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The page and summary were replaced.
    Loaded,
    /// The latest fetch failed; the previous page stays visible.
    Failed,
    /// A newer request was issued since; the result was discarded.
    Stale,
}

/// Owns pagination state, the current page and the catalog summary.
///
/// Transitions:
///
/// | from                | trigger                              | to        |
/// |---------------------|--------------------------------------|-----------|
/// | `Idle`              | `mount`, `request_page`              | `Loading` |
/// | any                 | `request_page_size`                  | `Loading` |
/// | `Loaded`, `Failed`  | `request_page` with a new index      | `Loading` |
/// | `Failed`            | `request_page` (same index), `retry` | `Loading` |
/// | `Loading { t }`     | `complete(t, Ok(..))`                | `Loaded`  |
/// | `Loading { t }`     | `complete(t, Err(..))`               | `Failed`  |
///
/// Results for any other token are stale and change nothing.
///
/// # Example
///
/// ```
/// use artworks_lib::api::Page;
/// use artworks_lib::model::Record;
/// use artworks_lib::pagination::{Completion, PaginationController};
///
/// let mut pagination = PaginationController::new(2).unwrap();
/// let first = pagination.mount().unwrap();
/// let second = pagination.request_page(2).unwrap().unwrap();
///
/// let late = Page::new(first.request, vec![Record::new(1, "a")]);
/// let fresh = Page::new(second.request, vec![Record::new(3, "c")]).with_total_count(3);
///
/// assert_eq!(pagination.complete(second.token, Ok(fresh)), Completion::Loaded);
/// assert_eq!(pagination.complete(first.token, Ok(late)), Completion::Stale);
/// assert_eq!(pagination.records()[0].title, "c");
/// ```
#[derive(Debug)]
pub struct PaginationController {
    state: PaginationState,
    load: LoadState,
    page: Option<Page>,
    summary: Option<CatalogSummary>,
    error: Option<FetchError>,
    tokens: TokenSequence,
}

impl PaginationController {
    /// Creates an idle controller positioned on page 1.
    pub fn new(page_size: u32) -> Result<Self, ValidationError> {
        Ok(Self {
            state: PaginationState::new(page_size)?,
            load: LoadState::Idle,
            page: None,
            summary: None,
            error: None,
            tokens: TokenSequence::default(),
        })
    }

    /// Returns the current page index and size.
    pub fn state(&self) -> PaginationState {
        self.state
    }

    /// Returns where the controller is in the fetch cycle.
    pub fn load_state(&self) -> LoadState {
        self.load
    }

    /// Returns `true` while a fetch is outstanding.
    pub fn is_loading(&self) -> bool {
        self.load.is_loading()
    }

    /// Returns the last successfully loaded page.
    ///
    /// While loading or after a failure this is the previous page, which may
    /// have a different index or size than [`state`](Self::state).
    pub fn page(&self) -> Option<&Page> {
        self.page.as_ref()
    }

    /// Returns the records of the last loaded page, or nothing before the first load.
    pub fn records(&self) -> &[Record] {
        self.page.as_ref().map(Page::records).unwrap_or_default()
    }

    /// Returns the catalog summary from the last successful fetch.
    pub fn summary(&self) -> Option<&CatalogSummary> {
        self.summary.as_ref()
    }

    /// Returns the last reported total record count, 0 before the first load.
    pub fn total_count(&self) -> u64 {
        self.summary.map(|summary| summary.total_count).unwrap_or(0)
    }

    /// Returns the number of pages at the current size, once a total is known.
    pub fn total_pages(&self) -> Option<u64> {
        self.summary
            .map(|summary| summary.total_pages(self.state.size()))
    }

    /// Returns the error of the latest fetch while in the `Failed` state.
    pub fn error(&self) -> Option<&FetchError> {
        self.error.as_ref()
    }

    /// Issues the first fetch. Does nothing unless the controller is idle.
    pub fn mount(&mut self) -> Option<LoadRequest> {
        match self.load {
            LoadState::Idle => Some(self.issue()),
            _ => None,
        }
    }

    /// Moves to the 1-based page `index`.
    ///
    /// Returns `Ok(None)` when `index` is already the current page and it is
    /// loading or loaded. From `Failed` the same index is fetched again. From
    /// `Idle` any index is fetched, page 1 included, which makes
    /// `request_page(1)` on a fresh controller equivalent to [`mount`](Self::mount).
    pub fn request_page(&mut self, index: u32) -> Result<Option<LoadRequest>, ValidationError> {
        let index = validate_page_index(index)?;
        Ok(self.go_to(index))
    }

    /// Changes the page size and goes back to page 1.
    ///
    /// Out-of-range sizes are rejected without touching any state.
    pub fn request_page_size(&mut self, size: u32) -> Result<LoadRequest, ValidationError> {
        let size = validate_page_size(size)?;
        self.state.set_size(size);
        debug!("page size set to {}", size);
        Ok(self.issue())
    }

    /// Moves one page forward unless the last known page is already shown.
    ///
    /// Steps from the page on screen. After a failed move that is the
    /// previously loaded page, so the page that failed is requested again
    /// rather than skipped.
    pub fn next_page(&mut self) -> Option<LoadRequest> {
        let next = self.anchor().checked_add(1)?;
        if let Some(total) = self.total_pages() {
            if u64::from(next) > total {
                return None;
            }
        }
        self.go_to(next)
    }

    /// Moves one page back unless on the first page.
    ///
    /// Steps from the page on screen, like [`next_page`](Self::next_page).
    pub fn previous_page(&mut self) -> Option<LoadRequest> {
        let anchor = self.anchor();
        if anchor <= 1 {
            return None;
        }
        self.go_to(anchor - 1)
    }

    /// Fetches the current page again after a failure.
    pub fn retry(&mut self) -> Option<LoadRequest> {
        match self.load {
            LoadState::Failed => Some(self.issue()),
            _ => None,
        }
    }

    /// Applies a fetch result.
    ///
    /// Only the result for the most recently issued token is applied; any
    /// other result is discarded. A failure keeps the previous page and
    /// summary and records the error.
    pub fn complete(&mut self, token: RequestToken, result: Result<Page, FetchError>) -> Completion {
        let current = matches!(self.load, LoadState::Loading { token: latest } if latest == token);
        if !current {
            trace!("discarding stale response {}", token);
            return Completion::Stale;
        }

        match result {
            Ok(page) => {
                info!(
                    "loaded page {} ({} records, {} total)",
                    page.index(),
                    page.len(),
                    page.total_count()
                );
                self.summary = Some(CatalogSummary::now(page.total_count()));
                self.page = Some(page);
                self.error = None;
                self.load = LoadState::Loaded;
                Completion::Loaded
            }
            Err(err) => {
                warn!(
                    "failed to load page {} (size {}): {}",
                    self.state.index(),
                    self.state.size(),
                    err
                );
                self.error = Some(err);
                self.load = LoadState::Failed;
                Completion::Failed
            }
        }
    }

    /// Index of the page on screen. Differs from the requested index only
    /// after a failed move at an unchanged page size.
    fn anchor(&self) -> u32 {
        match (&self.load, &self.page) {
            (LoadState::Failed, Some(page)) if page.size() == self.state.size() => page.index(),
            _ => self.state.index(),
        }
    }

    fn go_to(&mut self, index: u32) -> Option<LoadRequest> {
        let unchanged = index == self.state.index()
            && matches!(self.load, LoadState::Loading { .. } | LoadState::Loaded);
        if unchanged {
            return None;
        }
        self.state.set_index(index);
        Some(self.issue())
    }

    fn issue(&mut self) -> LoadRequest {
        let token = self.tokens.next();
        self.load = LoadState::Loading { token };
        let request = self.state.request();
        debug!(
            "requesting page {} (size {}) as {}",
            request.index(),
            request.size(),
            token
        );
        LoadRequest { token, request }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_for(request: LoadRequest, ids: &[u64], total: u64) -> Page {
        let records = ids
            .iter()
            .map(|id| Record::new(*id, format!("Artwork {}", id)))
            .collect();
        Page::new(request.request, records).with_total_count(total)
    }

    fn loaded(size: u32, total: u64) -> PaginationController {
        let mut pagination = PaginationController::new(size).unwrap();
        let request = pagination.mount().unwrap();
        pagination.complete(request.token, Ok(page_for(request, &[1, 2], total)));
        pagination
    }

    #[test]
    fn test_initial_state() {
        let pagination = PaginationController::new(10).unwrap();
        assert_eq!(pagination.state().index(), 1);
        assert_eq!(pagination.state().size(), 10);
        assert_eq!(pagination.load_state(), LoadState::Idle);
        assert!(pagination.records().is_empty());
        assert_eq!(pagination.total_count(), 0);
        assert_eq!(pagination.total_pages(), None);
    }

    #[test]
    fn test_new_rejects_invalid_size() {
        assert!(PaginationController::new(0).is_err());
        assert!(PaginationController::new(1001).is_err());
    }

    #[test]
    fn test_mount_only_once() {
        let mut pagination = PaginationController::new(10).unwrap();
        let request = pagination.mount().unwrap();
        assert_eq!(request.request.index(), 1);
        assert!(pagination.is_loading());
        assert!(pagination.mount().is_none());
    }

    #[test]
    fn test_load_success() {
        let pagination = loaded(2, 5);
        assert_eq!(pagination.load_state(), LoadState::Loaded);
        assert_eq!(pagination.records().len(), 2);
        assert_eq!(pagination.total_count(), 5);
        assert_eq!(pagination.total_pages(), Some(3));
        assert!(pagination.error().is_none());
    }

    #[test]
    fn test_same_page_is_a_noop() {
        let mut pagination = loaded(2, 5);
        assert_eq!(pagination.request_page(1), Ok(None));

        let request = pagination.request_page(2).unwrap().unwrap();
        assert_eq!(request.request.index(), 2);
        assert_eq!(pagination.request_page(2), Ok(None));
    }

    #[test]
    fn test_page_index_zero_is_rejected() {
        let mut pagination = loaded(2, 5);
        assert_eq!(
            pagination.request_page(0),
            Err(ValidationError::PageIndex(0))
        );
        assert_eq!(pagination.load_state(), LoadState::Loaded);
        assert_eq!(pagination.state().index(), 1);
    }

    #[test]
    fn test_invalid_page_size_leaves_state_unchanged() {
        let mut pagination = loaded(2, 5);
        pagination.request_page(2).unwrap();
        let before = pagination.state();
        let load_before = pagination.load_state();

        assert!(matches!(
            pagination.request_page_size(0),
            Err(ValidationError::PageSize { value: 0, .. })
        ));
        assert!(matches!(
            pagination.request_page_size(1001),
            Err(ValidationError::PageSize { value: 1001, .. })
        ));
        assert_eq!(pagination.state(), before);
        assert_eq!(pagination.load_state(), load_before);
    }

    #[test]
    fn test_page_size_change_resets_index() {
        let mut pagination = loaded(2, 5);
        let request = pagination.request_page(3).unwrap().unwrap();
        pagination.complete(request.token, Ok(page_for(request, &[5], 5)));

        let request = pagination.request_page_size(25).unwrap();
        assert_eq!(request.request.index(), 1);
        assert_eq!(request.request.size(), 25);
        assert_eq!(pagination.state().index(), 1);
        assert!(pagination.is_loading());
    }

    #[test]
    fn test_failure_keeps_previous_page() {
        let mut pagination = loaded(2, 5);
        let request = pagination.request_page(2).unwrap().unwrap();

        let completion = pagination.complete(request.token, Err(FetchError::http(500, "boom")));
        assert_eq!(completion, Completion::Failed);
        assert_eq!(pagination.load_state(), LoadState::Failed);
        assert_eq!(pagination.page().unwrap().index(), 1);
        assert_eq!(pagination.records().len(), 2);
        assert_eq!(pagination.total_count(), 5);
        assert_eq!(pagination.error().and_then(FetchError::status_code), Some(500));
    }

    #[test]
    fn test_failed_page_can_be_requested_again() {
        let mut pagination = loaded(2, 5);
        let request = pagination.request_page(2).unwrap().unwrap();
        pagination.complete(request.token, Err(FetchError::http(503, "")));

        let again = pagination.request_page(2).unwrap().unwrap();
        assert!(again.token > request.token);
        assert_eq!(again.request.index(), 2);

        pagination.complete(again.token, Ok(page_for(again, &[3, 4], 5)));
        assert_eq!(pagination.load_state(), LoadState::Loaded);
        assert!(pagination.error().is_none());
    }

    #[test]
    fn test_retry_only_after_failure() {
        let mut pagination = loaded(2, 5);
        assert!(pagination.retry().is_none());

        let request = pagination.request_page(2).unwrap().unwrap();
        pagination.complete(request.token, Err(FetchError::http(502, "")));
        let retry = pagination.retry().unwrap();
        assert_eq!(retry.request, request.request);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut pagination = PaginationController::new(2).unwrap();
        let slow = pagination.mount().unwrap();
        let fast = pagination.request_page(2).unwrap().unwrap();

        assert_eq!(
            pagination.complete(fast.token, Ok(page_for(fast, &[3, 4], 6))),
            Completion::Loaded
        );
        assert_eq!(
            pagination.complete(slow.token, Ok(page_for(slow, &[1, 2], 99))),
            Completion::Stale
        );
        assert_eq!(pagination.page().unwrap().index(), 2);
        assert_eq!(pagination.total_count(), 6);
    }

    #[test]
    fn test_stale_failure_is_discarded() {
        let mut pagination = PaginationController::new(2).unwrap();
        let slow = pagination.mount().unwrap();
        let fast = pagination.request_page(2).unwrap().unwrap();

        assert_eq!(
            pagination.complete(slow.token, Err(FetchError::http(500, ""))),
            Completion::Stale
        );
        assert!(pagination.is_loading());
        assert!(pagination.error().is_none());

        pagination.complete(fast.token, Ok(page_for(fast, &[3], 3)));
        assert_eq!(pagination.load_state(), LoadState::Loaded);
    }

    #[test]
    fn test_next_and_previous_are_bounded() {
        let mut pagination = loaded(2, 5);
        assert!(pagination.previous_page().is_none());

        let request = pagination.next_page().unwrap();
        pagination.complete(request.token, Ok(page_for(request, &[3, 4], 5)));
        let request = pagination.next_page().unwrap();
        pagination.complete(request.token, Ok(page_for(request, &[5], 5)));
        assert_eq!(pagination.state().index(), 3);
        assert!(pagination.next_page().is_none());

        let request = pagination.previous_page().unwrap();
        assert_eq!(request.request.index(), 2);
    }

    #[test]
    fn test_request_page_from_idle_fetches() {
        let mut pagination = PaginationController::new(10).unwrap();
        let request = pagination.request_page(1).unwrap().unwrap();
        assert_eq!(request.request.index(), 1);
        assert!(pagination.is_loading());
        assert!(pagination.mount().is_none());

        let mut pagination = PaginationController::new(10).unwrap();
        let request = pagination.request_page(4).unwrap().unwrap();
        assert_eq!(request.request.index(), 4);
        assert_eq!(pagination.state().index(), 4);
    }

    #[test]
    fn test_next_after_failure_requests_failed_page() {
        let mut pagination = loaded(2, 5);
        let request = pagination.request_page(2).unwrap().unwrap();
        pagination.complete(request.token, Err(FetchError::http(500, "")));
        assert_eq!(pagination.page().map(Page::index), Some(1));

        let request = pagination.next_page().unwrap();
        assert_eq!(request.request.index(), 2);
        pagination.complete(request.token, Ok(page_for(request, &[3, 4], 5)));
        assert_eq!(pagination.state().index(), 2);
        assert_eq!(pagination.load_state(), LoadState::Loaded);
    }

    #[test]
    fn test_previous_after_failure_steps_from_shown_page() {
        let mut pagination = loaded(2, 5);
        let request = pagination.request_page(2).unwrap().unwrap();
        pagination.complete(request.token, Ok(page_for(request, &[3, 4], 5)));

        let request = pagination.request_page(3).unwrap().unwrap();
        pagination.complete(request.token, Err(FetchError::http(503, "")));

        let request = pagination.previous_page().unwrap();
        assert_eq!(request.request.index(), 1);
    }

    #[test]
    fn test_next_after_failed_size_change_uses_requested_index() {
        let mut pagination = loaded(2, 30);
        let request = pagination.request_page_size(5).unwrap();
        pagination.complete(request.token, Err(FetchError::http(500, "")));

        let request = pagination.next_page().unwrap();
        assert_eq!(request.request.index(), 2);
        assert_eq!(request.request.size(), 5);
    }
}
