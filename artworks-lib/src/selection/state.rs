//! Derived selection state for the visible page.

use crate::model::RecordId;

/// State of the page-level "select all" checkbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCheckState {
    /// No record on the page is selected, or the page is empty.
    #[default]
    Unchecked,
    /// Some but not all records on the page are selected.
    Partial,
    /// Every record on the page is selected.
    Checked,
}

impl PageCheckState {
    /// Returns `true` only when every record on the page is selected.
    pub fn is_checked(&self) -> bool {
        matches!(self, Self::Checked)
    }
}

/// Identities whose membership changed during one selection operation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionDelta {
    /// Newly selected identities, in page order.
    pub added: Vec<RecordId>,
    /// Deselected identities, in page order.
    pub removed: Vec<RecordId>,
}

impl SelectionDelta {
    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}
