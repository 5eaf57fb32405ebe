use std::collections::BTreeSet;

use crate::state::mvi::Reducer;
use crate::state::table::signal::TableSignal;
use crate::state::table::state::TableState;
use crate::view::Column;

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Signal = TableSignal;

    fn reduce(state: Self::State, signal: Self::Signal) -> Self::State {
        match signal {
            TableSignal::SetFilter(change) => {
                let mut filters = state.filters;
                filters.apply(change);
                TableState {
                    filters,
                    page: 0,
                    ..state
                }
            }
            TableSignal::ClearFilters => TableState {
                filters: Default::default(),
                page: 0,
                ..state
            },
            TableSignal::RequestSort(column) => TableState {
                sort: state.sort.request(column),
                ..state
            },
            TableSignal::ToggleSelected(id) => {
                let mut selected = state.selected;
                if !selected.remove(&id) {
                    selected.insert(id);
                }
                TableState { selected, ..state }
            }
            TableSignal::SelectAll(ids) => TableState {
                selected: ids.into_iter().collect(),
                ..state
            },
            TableSignal::ClearSelection => TableState {
                selected: BTreeSet::new(),
                ..state
            },
            // Selection never spans pages.
            TableSignal::SetPage(page) => TableState {
                page,
                selected: BTreeSet::new(),
                ..state
            },
            TableSignal::SetPageSize(0) => state,
            TableSignal::SetPageSize(page_size) => TableState {
                page_size,
                page: 0,
                selected: BTreeSet::new(),
                ..state
            },
            TableSignal::SetVisibleColumns(columns) => {
                let visible: Vec<Column> = Column::ALL
                    .into_iter()
                    .filter(|c| columns.contains(c))
                    .collect();
                if visible.is_empty() {
                    return state;
                }
                TableState {
                    visible_columns: visible,
                    ..state
                }
            }
            TableSignal::ToggleColumn(column) => {
                let mut columns = state.visible_columns.clone();
                if let Some(pos) = columns.iter().position(|c| *c == column) {
                    if columns.len() == 1 {
                        return state;
                    }
                    columns.remove(pos);
                } else {
                    columns.push(column);
                }
                Self::reduce(state, TableSignal::SetVisibleColumns(columns))
            }
        }
    }
}
