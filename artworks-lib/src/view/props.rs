use std::collections::HashSet;

use crate::error::FetchError;
use crate::model::Record;
use crate::model::RecordId;
use crate::selection::PageCheckState;

/// Snapshot handed to the table renderer.
#[derive(Debug, Clone)]
pub struct TableProps<'a> {
    /// Records of the last loaded page, in server order.
    pub records: &'a [Record],
    /// Total record count from the last successful fetch.
    pub total_count: u64,
    /// Requested page index. May differ from the page shown while loading.
    pub page_index: u32,
    pub page_size: u32,
    /// Known page count at the current size.
    pub total_pages: Option<u64>,
    pub loading: bool,
    /// Selected identities, restricted to `records`.
    pub selected: HashSet<RecordId>,
    /// State of the header checkbox.
    pub header: PageCheckState,
    /// Set while the latest fetch has failed.
    pub error: Option<&'a FetchError>,
}

impl TableProps<'_> {
    /// Returns `true` if the record is shown as selected.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.selected.contains(&id)
    }

    /// Returns the record shown at a 0-based row position.
    pub fn row(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    /// Text for the load failure indicator.
    pub fn error_message(&self) -> Option<String> {
        self.error
            .map(|err| format!("Failed to load page {}: {}", self.page_index, err))
    }
}

/// The "currently selected" panel, derived from the selection.
#[derive(Debug, Clone)]
pub struct SelectionSummary<'a> {
    /// Selected snapshots in selection order.
    pub records: Vec<&'a Record>,
    /// Whether the user opened the panel.
    pub expanded: bool,
}

impl SelectionSummary<'_> {
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// The panel is hidden while nothing is selected.
    pub fn is_visible(&self) -> bool {
        !self.records.is_empty()
    }

    /// Returns e.g. `"3 artworks selected."`.
    pub fn message(&self) -> String {
        match self.count() {
            1 => "1 artwork selected.".to_string(),
            n => format!("{} artworks selected.", n),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_message() {
        let first = Record::new(1, "a");
        let second = Record::new(2, "b");

        let summary = SelectionSummary {
            records: vec![],
            expanded: false,
        };
        assert!(!summary.is_visible());
        assert_eq!(summary.message(), "0 artworks selected.");

        let summary = SelectionSummary {
            records: vec![&first],
            expanded: true,
        };
        assert!(summary.is_visible());
        assert_eq!(summary.message(), "1 artwork selected.");

        let summary = SelectionSummary {
            records: vec![&first, &second],
            expanded: true,
        };
        assert_eq!(summary.message(), "2 artworks selected.");
    }

    #[test]
    fn test_error_message() {
        let err = FetchError::http(500, "");
        let props = TableProps {
            records: &[],
            total_count: 0,
            page_index: 4,
            page_size: 10,
            total_pages: None,
            loading: false,
            selected: HashSet::new(),
            header: PageCheckState::Unchecked,
            error: Some(&err),
        };
        let message = props.error_message().unwrap();
        assert!(message.starts_with("Failed to load page 4: "));
    }
}
