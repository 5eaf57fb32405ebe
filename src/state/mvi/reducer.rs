use super::signal::Signal;
use super::slice::Slice;

/// Folds one signal into a slice.
///
/// Reducers never await, log or touch services; given the same slice and
/// signal they always return the same slice.
pub trait Reducer {
    type State: Slice;
    type Signal: Signal;

    fn reduce(state: Self::State, signal: Self::Signal) -> Self::State;
}
