use super::pipeline::{derive_view, TableView};
use crate::model::Entity;
use crate::state::table::TableState;
use crate::state::AppState;

#[derive(Debug, Clone, PartialEq)]
struct Inputs {
    entities: Vec<Entity>,
    search_term: String,
    table: TableState,
}

impl Inputs {
    fn of(state: &AppState) -> Self {
        Self {
            entities: state.entities.entities.clone(),
            search_term: state.entities.search_term.clone(),
            table: state.table.clone(),
        }
    }

    fn matches(&self, state: &AppState) -> bool {
        self.entities == state.entities.entities
            && self.search_term == state.entities.search_term
            && self.table == state.table
    }
}

/// Caches the last derived view and recomputes only when an input changed.
///
/// Unrelated state (theme, session, busy flags) never invalidates the cache.
#[derive(Debug, Default)]
pub struct MemoizedView {
    last: Option<(Inputs, TableView)>,
    recomputations: usize,
}

impl MemoizedView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, state: &AppState) -> &TableView {
        let fresh = matches!(&self.last, Some((inputs, _)) if inputs.matches(state));
        if !fresh {
            self.recomputations += 1;
            self.last = None;
        }
        let (_, view) = self
            .last
            .get_or_insert_with(|| (Inputs::of(state), derive_view(state)));
        view
    }

    /// How many times the pipeline actually ran.
    pub fn recomputations(&self) -> usize {
        self.recomputations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{seed_entities, Theme};
    use crate::state::entities::EntitiesSignal;
    use crate::state::mvi::Reducer;
    use crate::state::theme::ThemeSignal;
    use crate::state::AppReducer;

    #[test]
    fn unrelated_changes_hit_the_cache() {
        let state = AppReducer::reduce(
            AppState::default(),
            EntitiesSignal::FetchSuccess(seed_entities()).into(),
        );
        let mut memo = MemoizedView::new();
        assert_eq!(memo.get(&state).total, 10);

        let state = AppReducer::reduce(state, ThemeSignal::Set(Theme::Dark).into());
        let state = AppReducer::reduce(state, EntitiesSignal::FetchRequest.into());
        memo.get(&state);
        assert_eq!(memo.recomputations(), 1);

        let state = AppReducer::reduce(state, EntitiesSignal::SetSearchTerm("jane".into()).into());
        assert_eq!(memo.get(&state).total, 1);
        assert_eq!(memo.recomputations(), 2);
    }
}
