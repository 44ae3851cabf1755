//! Request tokens for last-request-wins.

use crate::api::PageRequest;

/// Monotonically increasing tag attached to every issued fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the raw sequence number.
    pub fn get(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for RequestToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Issues strictly increasing [`RequestToken`]s.
#[derive(Debug, Default)]
pub(crate) struct TokenSequence {
    last: u64,
}

impl TokenSequence {
    pub(crate) fn next(&mut self) -> RequestToken {
        self.last += 1;
        RequestToken(self.last)
    }
}

/// A fetch the caller must perform and report back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadRequest {
    /// Token to pass to [`complete`](super::PaginationController::complete).
    pub token: RequestToken,
    /// The page to fetch.
    pub request: PageRequest,
}
