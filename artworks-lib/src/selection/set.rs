//! Identity-keyed selection memory.

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::HashSet;

use log::debug;
use log::warn;

use crate::model::Record;
use crate::model::RecordId;

use super::PageCheckState;
use super::SelectionDelta;

/// The set of records the user has marked, independent of pagination.
///
/// Each identity maps to the record snapshot taken when it was selected.
/// Iteration follows the order identities were first selected; selecting an
/// identity again replaces its snapshot but keeps its position.
///
/// # Example
///
/// ```
/// use std::collections::HashSet;
/// use artworks_lib::model::{Record, RecordId};
/// use artworks_lib::selection::SelectionSet;
///
/// let mut selection = SelectionSet::new();
/// selection.set_membership(&Record::new(5, "kept from another page"), true);
///
/// let page = [Record::new(1, "a"), Record::new(2, "b"), Record::new(3, "c")];
/// let now_selected: HashSet<RecordId> = [RecordId(1)].into();
/// selection.replace_page_selection(&page, &now_selected);
///
/// let ids: Vec<u64> = selection.ids().map(RecordId::get).collect();
/// assert_eq!(ids, vec![5, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    /// Insertion position of every selected identity.
    positions: HashMap<RecordId, u64>,
    /// Snapshots ordered by insertion position.
    entries: BTreeMap<u64, Record>,
    next_position: u64,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks or unmarks a single record.
    ///
    /// Selecting stores (or refreshes) the snapshot; deselecting removes the
    /// identity if present. Returns `true` if membership changed.
    pub fn set_membership(&mut self, record: &Record, selected: bool) -> bool {
        if selected {
            self.insert(record)
        } else {
            self.remove(record.id).is_some()
        }
    }

    /// Inserts or refreshes a snapshot. Returns `true` if the identity was new.
    pub fn insert(&mut self, record: &Record) -> bool {
        if let Some(position) = self.positions.get(&record.id) {
            self.entries.insert(*position, record.clone());
            return false;
        }

        let position = self.next_position;
        self.next_position += 1;
        self.positions.insert(record.id, position);
        self.entries.insert(position, record.clone());
        true
    }

    /// Removes an identity, returning its snapshot if it was selected.
    pub fn remove(&mut self, id: RecordId) -> Option<Record> {
        let position = self.positions.remove(&id)?;
        self.entries.remove(&position)
    }

    /// Reconciles the selection with what the view reports for one page.
    ///
    /// `page` is the visible page; `selected` is the subset of it the view
    /// reports as selected now. Page identities missing from `selected` are
    /// removed, identities in `selected` are stored using the page's
    /// snapshot, and identities of every other page are untouched.
    ///
    /// An identity in `selected` that is not on `page` stays selected if it
    /// already was and is otherwise ignored, since there is no snapshot to
    /// store for it.
    pub fn replace_page_selection(
        &mut self,
        page: &[Record],
        selected: &HashSet<RecordId>,
    ) -> SelectionDelta {
        let mut delta = SelectionDelta::default();
        let mut on_page = HashSet::with_capacity(page.len());

        for record in page {
            on_page.insert(record.id);
            if selected.contains(&record.id) {
                if self.insert(record) {
                    delta.added.push(record.id);
                }
            } else if self.remove(record.id).is_some() {
                delta.removed.push(record.id);
            }
        }

        for id in selected {
            if !on_page.contains(id) && !self.is_selected(*id) {
                warn!("ignoring selection of record {} that is not on the visible page", id);
            }
        }

        debug!(
            "page selection reconciled: +{} -{} (total {})",
            delta.added.len(),
            delta.removed.len(),
            self.count()
        );
        delta
    }

    /// Selects or deselects every record on the page (the header checkbox).
    pub fn set_page_membership(&mut self, page: &[Record], selected: bool) -> SelectionDelta {
        let subset: HashSet<RecordId> = if selected {
            page.iter().map(|record| record.id).collect()
        } else {
            HashSet::new()
        };
        self.replace_page_selection(page, &subset)
    }

    /// Empties the selection. Returns how many records were deselected.
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.positions.clear();
        self.entries.clear();
        removed
    }

    /// Returns `true` if the identity is selected.
    pub fn is_selected(&self, id: RecordId) -> bool {
        self.positions.contains_key(&id)
    }

    /// Returns the stored snapshot for an identity.
    pub fn get(&self, id: RecordId) -> Option<&Record> {
        let position = self.positions.get(&id)?;
        self.entries.get(position)
    }

    /// Returns the number of selected records.
    pub fn count(&self) -> usize {
        self.positions.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Returns the selected snapshots in selection order.
    pub fn selected_records(&self) -> impl ExactSizeIterator<Item = &Record> + '_ {
        self.entries.values()
    }

    /// Returns the selected identities in selection order.
    pub fn ids(&self) -> impl ExactSizeIterator<Item = RecordId> + '_ {
        self.entries.values().map(|record| record.id)
    }

    /// Returns the identities on `page` that are selected.
    pub fn selected_on_page(&self, page: &[Record]) -> HashSet<RecordId> {
        page.iter()
            .map(|record| record.id)
            .filter(|id| self.is_selected(*id))
            .collect()
    }

    /// Returns the header checkbox state for `page`.
    pub fn page_check_state(&self, page: &[Record]) -> PageCheckState {
        let selected = page.iter().filter(|record| self.is_selected(record.id)).count();
        match selected {
            0 => PageCheckState::Unchecked,
            n if n == page.len() => PageCheckState::Checked,
            _ => PageCheckState::Partial,
        }
    }
}
