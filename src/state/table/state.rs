use std::collections::BTreeSet;

use crate::model::EntityId;
use crate::state::mvi::Slice;
use crate::view::{Column, Filters, Sort};

pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Page sizes offered by the pager.
pub const PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];

/// Table controls owned by the view: everything the derived pipeline needs
/// besides the entities and the search term.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState {
    pub filters: Filters,
    pub sort: Sort,
    pub selected: BTreeSet<EntityId>,
    /// Zero-based.
    pub page: usize,
    pub page_size: usize,
    /// Always non-empty, kept in [`Column::ALL`] order.
    pub visible_columns: Vec<Column>,
}

impl Default for TableState {
    fn default() -> Self {
        Self::with_page_size(DEFAULT_PAGE_SIZE)
    }
}

impl Slice for TableState {}

impl TableState {
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            filters: Filters::default(),
            sort: Sort::default(),
            selected: BTreeSet::new(),
            page: 0,
            page_size: page_size.max(1),
            visible_columns: Column::ALL.to_vec(),
        }
    }

    pub fn is_selected(&self, id: EntityId) -> bool {
        self.selected.contains(&id)
    }

    pub fn is_visible(&self, column: Column) -> bool {
        self.visible_columns.contains(&column)
    }
}
