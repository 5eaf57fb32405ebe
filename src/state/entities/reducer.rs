use std::collections::HashSet;

use crate::state::entities::signal::EntitiesSignal;
use crate::state::entities::state::EntitiesState;
use crate::state::mvi::Reducer;

pub struct EntitiesReducer;

impl Reducer for EntitiesReducer {
    type State = EntitiesState;
    type Signal = EntitiesSignal;

    fn reduce(state: Self::State, signal: Self::Signal) -> Self::State {
        match signal {
            EntitiesSignal::FetchRequest => EntitiesState {
                loading: true,
                error: None,
                ..state
            },
            EntitiesSignal::FetchSuccess(entities) => EntitiesState {
                loading: false,
                entities,
                error: None,
                ..state
            },
            EntitiesSignal::FetchFailure(message) => EntitiesState {
                loading: false,
                error: Some(message),
                ..state
            },

            EntitiesSignal::AddRequest => EntitiesState {
                adding: true,
                error: None,
                ..state
            },
            EntitiesSignal::AddSuccess(entity) => {
                let mut entities = state.entities;
                entities.push(entity);
                EntitiesState {
                    adding: false,
                    entities,
                    error: None,
                    ..state
                }
            }
            EntitiesSignal::AddFailure(message) => EntitiesState {
                adding: false,
                error: Some(message),
                ..state
            },

            EntitiesSignal::UpdateRequest => EntitiesState {
                updating: true,
                error: None,
                ..state
            },
            EntitiesSignal::UpdateSuccess(updated) => {
                let entities = state
                    .entities
                    .into_iter()
                    .map(|e| if e.id == updated.id { updated.clone() } else { e })
                    .collect();
                EntitiesState {
                    updating: false,
                    entities,
                    error: None,
                    ..state
                }
            }
            EntitiesSignal::UpdateFailure(message) => EntitiesState {
                updating: false,
                error: Some(message),
                ..state
            },

            EntitiesSignal::DeleteRequest(id) => EntitiesState {
                deleting_ids: vec![id],
                error: None,
                ..state
            },
            EntitiesSignal::DeleteSuccess(id) => {
                let mut entities = state.entities;
                entities.retain(|e| e.id != id);
                EntitiesState {
                    deleting_ids: Vec::new(),
                    entities,
                    error: None,
                    ..state
                }
            }
            EntitiesSignal::DeleteFailure(message) => EntitiesState {
                deleting_ids: Vec::new(),
                error: Some(message),
                ..state
            },

            EntitiesSignal::DeleteManyRequest(ids) => EntitiesState {
                deleting_ids: ids,
                error: None,
                ..state
            },
            EntitiesSignal::DeleteManySuccess(ids) => {
                let removed: HashSet<_> = ids.into_iter().collect();
                let mut entities = state.entities;
                entities.retain(|e| !removed.contains(&e.id));
                EntitiesState {
                    deleting_ids: Vec::new(),
                    entities,
                    error: None,
                    ..state
                }
            }
            EntitiesSignal::DeleteManyFailure(message) => EntitiesState {
                deleting_ids: Vec::new(),
                error: Some(message),
                ..state
            },

            EntitiesSignal::SetSearchTerm(search_term) => EntitiesState {
                search_term,
                ..state
            },
            EntitiesSignal::ClearError => EntitiesState {
                error: None,
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_entities;

    fn loaded() -> EntitiesState {
        EntitiesReducer::reduce(
            EntitiesState::default(),
            EntitiesSignal::FetchSuccess(seed_entities()),
        )
    }

    #[test]
    fn request_clears_previous_error() {
        let state = EntitiesState {
            error: Some("boom".into()),
            ..Default::default()
        };
        let state = EntitiesReducer::reduce(state, EntitiesSignal::AddRequest);
        assert!(state.adding);
        assert!(state.error.is_none());
    }

    #[test]
    fn failure_keeps_entities() {
        let before = loaded();
        let state = EntitiesReducer::reduce(before.clone(), EntitiesSignal::UpdateRequest);
        let state = EntitiesReducer::reduce(state, EntitiesSignal::UpdateFailure("nope".into()));
        assert!(!state.updating);
        assert_eq!(state.error.as_deref(), Some("nope"));
        assert_eq!(state.entities, before.entities);
    }

    #[test]
    fn update_success_replaces_in_place() {
        let mut changed = seed_entities()[4].clone();
        changed.age = 60;
        let state = EntitiesReducer::reduce(loaded(), EntitiesSignal::UpdateSuccess(changed));
        assert_eq!(state.entities[4].age, 60);
        assert_eq!(state.entities.len(), 10);
    }

    #[test]
    fn delete_many_is_set_difference() {
        let state = EntitiesReducer::reduce(loaded(), EntitiesSignal::DeleteManyRequest(vec![2, 4, 42]));
        assert_eq!(state.deleting_ids, vec![2, 4, 42]);
        let state = EntitiesReducer::reduce(state, EntitiesSignal::DeleteManySuccess(vec![2, 4, 42]));
        assert!(state.deleting_ids.is_empty());
        assert_eq!(state.entities.len(), 8);
        assert!(state.find(2).is_none());
        assert!(state.find(3).is_some());
    }

    #[test]
    fn search_term_does_not_touch_flags() {
        let state = EntitiesReducer::reduce(loaded(), EntitiesSignal::FetchRequest);
        let state = EntitiesReducer::reduce(state, EntitiesSignal::SetSearchTerm("jane".into()));
        assert!(state.loading);
        assert_eq!(state.search_term, "jane");
    }
}
