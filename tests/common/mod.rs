//! Shared test utilities: instant services and in-memory storage.

#![allow(dead_code, unused_imports)]

use std::sync::Arc;

use parking_lot::Mutex;
use staffdesk::actions::Actions;
use staffdesk::model::{seed_entities, NewEntity};
use staffdesk::service::{AuthLatency, AuthService, EntityService, EntityStore, Latency};
use staffdesk::storage::{LocalStorage, MemoryStorage};
use staffdesk::store::Store;

/// Entity service over the seed data with no simulated delay.
pub fn entity_service() -> EntityService {
    EntityService::seeded(Latency::none())
}

/// Entity service over an explicit list.
pub fn entity_service_with(entities: Vec<staffdesk::model::Entity>) -> EntityService {
    EntityService::new(Arc::new(Mutex::new(EntityStore::new(entities))), Latency::none())
}

pub fn auth_service() -> AuthService {
    AuthService::seeded(AuthLatency::none())
}

/// Actions over instant seeded services, with the storage handle kept for
/// inspection.
pub fn actions() -> (Actions, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let actions = actions_with_storage(storage.clone());
    (actions, storage)
}

pub fn actions_with_storage(storage: Arc<dyn LocalStorage>) -> Actions {
    Actions::new(
        Arc::new(Store::default()),
        entity_service(),
        auth_service(),
        storage,
    )
}

pub fn new_entity(first_name: &str, last_name: &str, email: &str, age: u32) -> NewEntity {
    NewEntity {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        age,
        hire_date: None,
    }
}

pub fn seed_len() -> usize {
    seed_entities().len()
}
