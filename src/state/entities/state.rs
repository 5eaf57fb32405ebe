use crate::model::{Entity, EntityId};
use crate::state::mvi::Slice;

/// Client copy of the entity collection plus request bookkeeping.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct EntitiesState {
    pub entities: Vec<Entity>,
    pub search_term: String,
    pub loading: bool,
    pub adding: bool,
    pub updating: bool,
    /// Ids with a delete in flight.
    pub deleting_ids: Vec<EntityId>,
    /// Last surfaced failure; cleared on dismissal or by the next request.
    pub error: Option<String>,
}

impl Slice for EntitiesState {}

impl EntitiesState {
    /// True while any request is in flight.
    pub fn is_busy(&self) -> bool {
        self.loading || self.adding || self.updating || !self.deleting_ids.is_empty()
    }

    pub fn is_deleting(&self, id: EntityId) -> bool {
        self.deleting_ids.contains(&id)
    }

    pub fn find(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_idle() {
        let state = EntitiesState::default();
        assert!(!state.is_busy());
        assert!(state.error.is_none());
        assert!(state.search_term.is_empty());
    }

    #[test]
    fn deleting_counts_as_busy() {
        let state = EntitiesState {
            deleting_ids: vec![3],
            ..Default::default()
        };
        assert!(state.is_busy());
        assert!(state.is_deleting(3));
        assert!(!state.is_deleting(4));
    }
}
