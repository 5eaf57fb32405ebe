use crate::model::{Entity, EntityId};
use crate::state::mvi::Signal;

/// Signals for the entities slice.
///
/// Each service call follows the same three phases: `*Request` when it is
/// dispatched, then exactly one of `*Success` or `*Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum EntitiesSignal {
    FetchRequest,
    FetchSuccess(Vec<Entity>),
    FetchFailure(String),

    AddRequest,
    AddSuccess(Entity),
    AddFailure(String),

    UpdateRequest,
    UpdateSuccess(Entity),
    UpdateFailure(String),

    DeleteRequest(EntityId),
    DeleteSuccess(EntityId),
    DeleteFailure(String),

    DeleteManyRequest(Vec<EntityId>),
    DeleteManySuccess(Vec<EntityId>),
    DeleteManyFailure(String),

    SetSearchTerm(String),
    ClearError,
}

impl Signal for EntitiesSignal {}
