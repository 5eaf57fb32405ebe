use crate::model::Theme;
use crate::state::mvi::{Reducer, Signal, Slice};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ThemeState {
    pub theme: Theme,
}

impl Slice for ThemeState {}

#[derive(Debug, Clone, PartialEq)]
pub enum ThemeSignal {
    Set(Theme),
}

impl Signal for ThemeSignal {}

/// Pure; persisting the preference is the action creator's job.
pub struct ThemeReducer;

impl Reducer for ThemeReducer {
    type State = ThemeState;
    type Signal = ThemeSignal;

    fn reduce(_state: Self::State, signal: Self::Signal) -> Self::State {
        match signal {
            ThemeSignal::Set(theme) => ThemeState { theme },
        }
    }
}
