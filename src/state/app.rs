//! Root state and the combined reducer.

use crate::state::entities::{EntitiesReducer, EntitiesSignal, EntitiesState};
use crate::state::mvi::{Reducer, Signal, Slice};
use crate::state::table::{TableReducer, TableSignal, TableState};
use crate::state::theme::{ThemeReducer, ThemeSignal, ThemeState};
use crate::state::user::{UserReducer, UserSignal, UserState};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub user: UserState,
    pub entities: EntitiesState,
    pub theme: ThemeState,
    pub table: TableState,
}

impl Slice for AppState {}

/// Any signal the store accepts.
#[derive(Debug, Clone, PartialEq)]
pub enum AppSignal {
    User(UserSignal),
    Entities(EntitiesSignal),
    Theme(ThemeSignal),
    Table(TableSignal),
}

impl Signal for AppSignal {}

impl From<UserSignal> for AppSignal {
    fn from(signal: UserSignal) -> Self {
        AppSignal::User(signal)
    }
}

impl From<EntitiesSignal> for AppSignal {
    fn from(signal: EntitiesSignal) -> Self {
        AppSignal::Entities(signal)
    }
}

impl From<ThemeSignal> for AppSignal {
    fn from(signal: ThemeSignal) -> Self {
        AppSignal::Theme(signal)
    }
}

impl From<TableSignal> for AppSignal {
    fn from(signal: TableSignal) -> Self {
        AppSignal::Table(signal)
    }
}

/// Routes each signal to its slice reducer, then applies the rules that
/// span slices:
/// - a successful delete clears the table selection
/// - a new search term sends the table back to the first page
pub struct AppReducer;

impl Reducer for AppReducer {
    type State = AppState;
    type Signal = AppSignal;

    fn reduce(state: Self::State, signal: Self::Signal) -> Self::State {
        match signal {
            AppSignal::User(signal) => AppState {
                user: UserReducer::reduce(state.user, signal),
                ..state
            },
            AppSignal::Theme(signal) => AppState {
                theme: ThemeReducer::reduce(state.theme, signal),
                ..state
            },
            AppSignal::Table(signal) => AppState {
                table: TableReducer::reduce(state.table, signal),
                ..state
            },
            AppSignal::Entities(signal) => {
                let follow_up = match &signal {
                    EntitiesSignal::DeleteSuccess(_) | EntitiesSignal::DeleteManySuccess(_) => {
                        Some(TableSignal::ClearSelection)
                    }
                    EntitiesSignal::SetSearchTerm(term) if *term != state.entities.search_term => {
                        Some(TableSignal::SetPage(0))
                    }
                    _ => None,
                };
                let entities = EntitiesReducer::reduce(state.entities, signal);
                let table = match follow_up {
                    Some(signal) => TableReducer::reduce(state.table, signal),
                    None => state.table,
                };
                AppState {
                    entities,
                    table,
                    ..state
                }
            }
        }
    }
}
