//! Lazy remote paging.
//!
//! [`PaginationController`] owns the current page index and size, the last
//! successfully loaded [`Page`](crate::api::Page) and the catalog summary.
//! It never performs I/O itself: every state change that needs data returns
//! a [`LoadRequest`] for the caller to fetch, and the result is handed back
//! through [`PaginationController::complete`]. Each request carries a
//! [`RequestToken`]; only the most recently issued one is applied, so a slow
//! response can never overwrite a newer page.

mod controller;
mod state;
mod token;

pub use controller::*;
pub use state::*;
pub use token::*;
