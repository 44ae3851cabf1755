use std::collections::HashSet;

use crate::model::RecordId;

/// Events emitted by the table rendering capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableEvent {
    /// The user picked another page.
    PageChange {
        /// 1-based index of the requested page.
        new_page_index: u32,
    },
    /// The selection reported by the table for the visible page.
    SelectionChange {
        /// Every identity on the visible page the table shows as selected.
        selected_ids_on_current_page: HashSet<RecordId>,
    },
}

/// Everything a front-end can ask of a [`CatalogView`](super::CatalogView).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewEvent {
    /// The view appeared; load the first page.
    Mount,
    /// Forwarded table event.
    Table(TableEvent),
    /// Select or deselect one record.
    ToggleRow { id: RecordId, selected: bool },
    /// The header checkbox: select or deselect the whole visible page.
    TogglePage { selected: bool },
    NextPage,
    PreviousPage,
    /// Change the page size.
    PageSize(u32),
    ClearSelection,
    /// Fetch the current page again after a failure.
    Retry,
    /// Show or hide the selected-records panel.
    ToggleSummaryPanel,
}

impl From<TableEvent> for ViewEvent {
    fn from(event: TableEvent) -> Self {
        Self::Table(event)
    }
}
