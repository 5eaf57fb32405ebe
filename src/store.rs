//! Application store: holds the current [`AppState`] and folds dispatched
//! signals through [`AppReducer`].

use tokio::sync::watch;

use crate::state::mvi::Reducer;
use crate::state::{AppReducer, AppSignal, AppState};

/// Single source of truth for application state.
///
/// Views subscribe to be woken on every change; they never mutate the
/// state directly.
pub struct Store {
    state: watch::Sender<AppState>,
}

impl Store {
    pub fn new(initial: AppState) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// Apply one signal and wake every subscriber.
    pub fn dispatch(&self, signal: impl Into<AppSignal>) {
        let signal = signal.into();
        tracing::trace!(?signal, "Dispatch");
        self.state.send_modify(|state| {
            *state = AppReducer::reduce(std::mem::take(state), signal);
        });
    }

    /// Clone of the current state.
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Read the current state without cloning it.
    pub fn with<R>(&self, read: impl FnOnce(&AppState) -> R) -> R {
        read(&self.state.borrow())
    }

    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Theme;
    use crate::state::entities::EntitiesSignal;
    use crate::state::theme::ThemeSignal;

    #[test]
    fn dispatch_updates_snapshot() {
        let store = Store::default();
        store.dispatch(EntitiesSignal::SetSearchTerm("jane".into()));
        assert_eq!(store.snapshot().entities.search_term, "jane");
        assert_eq!(store.with(|s| s.entities.search_term.len()), 4);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Store::default();
        let mut rx = store.subscribe();
        store.dispatch(ThemeSignal::Set(Theme::Dark));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().theme.theme, Theme::Dark);
    }
}
