use crate::model::EntityId;
use crate::state::mvi::Signal;
use crate::view::{Column, FilterChange};

#[derive(Debug, Clone, PartialEq)]
pub enum TableSignal {
    SetFilter(FilterChange),
    ClearFilters,
    /// Header click on `Column`.
    RequestSort(Column),
    ToggleSelected(EntityId),
    /// Select exactly these ids (the rows of the current page).
    SelectAll(Vec<EntityId>),
    ClearSelection,
    SetPage(usize),
    SetPageSize(usize),
    SetVisibleColumns(Vec<Column>),
    ToggleColumn(Column),
}

impl Signal for TableSignal {}
