//! Selection memory that survives pagination.
//!
//! [`SelectionSet`] remembers which records the user marked, keyed by
//! [`RecordId`](crate::model::RecordId). It never looks at the page the
//! pagination controller currently holds: callers hand in the visible
//! records when an operation needs them, and identities that belong to any
//! other page are left alone.

mod set;
mod state;

pub use set::*;
pub use state::*;
