//! Wiring between a table front-end and the two controllers.
//!
//! The view layer holds no authoritative state. [`CatalogView`] owns a
//! [`PaginationController`](crate::pagination::PaginationController) and a
//! [`SelectionSet`](crate::selection::SelectionSet), turns [`ViewEvent`]s into
//! operations on them, and exposes read-only snapshots ([`TableProps`],
//! [`SelectionSummary`]) for rendering. The only UI state it keeps is whether
//! the summary panel is expanded.
//!
//! [`Session`] drives a `CatalogView` on the tokio runtime: it performs the
//! fetches a `CatalogView` asks for and feeds the results back in order of
//! arrival, relying on request tokens to drop superseded ones.

mod catalog;
mod events;
mod props;
mod session;

pub use catalog::*;
pub use events::*;
pub use props::*;
pub use session::*;
