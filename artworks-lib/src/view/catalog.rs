use log::debug;
use log::warn;

use crate::api::Page;
use crate::error::FetchError;
use crate::error::ValidationError;
use crate::model::RecordId;
use crate::pagination::Completion;
use crate::pagination::LoadRequest;
use crate::pagination::PaginationController;
use crate::pagination::RequestToken;
use crate::selection::SelectionSet;

use super::SelectionSummary;
use super::TableEvent;
use super::TableProps;
use super::ViewEvent;

/// A paginated catalog table with page-independent selection.
#[derive(Debug)]
pub struct CatalogView {
    pagination: PaginationController,
    selection: SelectionSet,
    summary_expanded: bool,
}

impl CatalogView {
    /// Creates an unmounted view with the given page size.
    pub fn new(page_size: u32) -> Result<Self, ValidationError> {
        Ok(Self::from_parts(
            PaginationController::new(page_size)?,
            SelectionSet::new(),
        ))
    }

    /// Creates a view over existing controllers.
    pub fn from_parts(pagination: PaginationController, selection: SelectionSet) -> Self {
        Self {
            pagination,
            selection,
            summary_expanded: false,
        }
    }

    pub fn pagination(&self) -> &PaginationController {
        &self.pagination
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn is_summary_expanded(&self) -> bool {
        self.summary_expanded
    }

    /// Applies an event.
    ///
    /// Returns the fetch the caller must perform, if the event needs one.
    /// A rejected event leaves every piece of state as it was.
    pub fn handle(&mut self, event: ViewEvent) -> Result<Option<LoadRequest>, ValidationError> {
        debug!("view event: {:?}", event);
        match event {
            ViewEvent::Mount => Ok(self.pagination.mount()),
            ViewEvent::Table(TableEvent::PageChange { new_page_index }) => {
                self.pagination.request_page(new_page_index)
            }
            ViewEvent::Table(TableEvent::SelectionChange {
                selected_ids_on_current_page,
            }) => {
                self.selection.replace_page_selection(
                    self.pagination.records(),
                    &selected_ids_on_current_page,
                );
                Ok(None)
            }
            ViewEvent::ToggleRow { id, selected } => {
                self.toggle_row(id, selected);
                Ok(None)
            }
            ViewEvent::TogglePage { selected } => {
                self.selection
                    .set_page_membership(self.pagination.records(), selected);
                Ok(None)
            }
            ViewEvent::NextPage => Ok(self.pagination.next_page()),
            ViewEvent::PreviousPage => Ok(self.pagination.previous_page()),
            ViewEvent::PageSize(size) => self.pagination.request_page_size(size).map(Some),
            ViewEvent::ClearSelection => {
                let removed = self.selection.clear();
                debug!("cleared {} selected records", removed);
                self.summary_expanded = false;
                Ok(None)
            }
            ViewEvent::Retry => Ok(self.pagination.retry()),
            ViewEvent::ToggleSummaryPanel => {
                self.summary_expanded = !self.summary_expanded && !self.selection.is_empty();
                Ok(None)
            }
        }
    }

    /// Hands a fetch result to the pagination controller.
    pub fn complete(&mut self, token: RequestToken, result: Result<Page, FetchError>) -> Completion {
        self.pagination.complete(token, result)
    }

    /// Returns what the table should render now.
    pub fn table_props(&self) -> TableProps<'_> {
        let records = self.pagination.records();
        let state = self.pagination.state();
        TableProps {
            records,
            total_count: self.pagination.total_count(),
            page_index: state.index(),
            page_size: state.size(),
            total_pages: self.pagination.total_pages(),
            loading: self.pagination.is_loading(),
            selected: self.selection.selected_on_page(records),
            header: self.selection.page_check_state(records),
            error: self.pagination.error(),
        }
    }

    /// Returns the selected-records panel.
    pub fn selection_summary(&self) -> SelectionSummary<'_> {
        SelectionSummary {
            records: self.selection.selected_records().collect(),
            expanded: self.summary_expanded && !self.selection.is_empty(),
        }
    }

    fn toggle_row(&mut self, id: RecordId, selected: bool) {
        match self.pagination.records().iter().find(|record| record.id == id) {
            Some(record) => {
                self.selection.set_membership(record, selected);
            }
            // Rows of other pages can still be dropped from the summary panel.
            None if !selected => {
                self.selection.remove(id);
            }
            None => warn!("cannot select record {} that is not on the visible page", id),
        }
    }
}
