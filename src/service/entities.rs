//! In-memory entity service with simulated latency.
//!
//! The collection is owned by an [`EntityStore`] that is built once at
//! process start and shared with the service by reference. Callers only ever
//! see snapshots (clones), never the stored records.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use parking_lot::Mutex;

use super::latency::Latency;
use crate::error::ServiceError;
use crate::model::{same_email, seed_entities, Entity, EntityId, EntityPatch, NewEntity};

/// Result of a successful delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    /// Ids that were actually removed, in request order.
    pub removed: Vec<EntityId>,
}

/// Owner of the entity collection.
#[derive(Debug, Default)]
pub struct EntityStore {
    entities: Vec<Entity>,
    /// Highest id ever assigned, so deleted ids are never handed out again.
    high_water: EntityId,
}

impl EntityStore {
    pub fn new(entities: Vec<Entity>) -> Self {
        let high_water = entities.iter().map(|e| e.id).max().unwrap_or(0);
        Self {
            entities,
            high_water,
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed_entities())
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    fn next_id(&mut self) -> EntityId {
        let max_existing = self.entities.iter().map(|e| e.id).max().unwrap_or(0);
        self.high_water = self.high_water.max(max_existing) + 1;
        self.high_water
    }

    fn email_taken(&self, email: &str, except: Option<EntityId>) -> bool {
        self.entities
            .iter()
            .filter(|e| Some(e.id) != except)
            .any(|e| same_email(&e.email, email))
    }

    fn position(&self, id: EntityId) -> Result<usize, ServiceError> {
        self.entities
            .iter()
            .position(|e| e.id == id)
            .ok_or(ServiceError::NotFound { id })
    }

    fn add(&mut self, fields: NewEntity, today: NaiveDate) -> Result<Entity, ServiceError> {
        require("firstName", &fields.first_name, "First name is required")?;
        require("email", &fields.email, "Email is required")?;

        if self.email_taken(&fields.email, None) {
            return Err(duplicate_email(&fields.email));
        }

        let id = self.next_id();
        let entity = fields.into_entity(id, today);
        self.entities.push(entity.clone());
        Ok(entity)
    }

    fn edit(&mut self, id: EntityId, patch: EntityPatch) -> Result<Entity, ServiceError> {
        let index = self.position(id)?;

        if let Some(first_name) = &patch.first_name {
            require("firstName", first_name, "First name is required")?;
        }
        if let Some(email) = &patch.email {
            require("email", email, "Email is required")?;
            if self.email_taken(email, Some(id)) {
                return Err(duplicate_email(email));
            }
        }

        let entity = &mut self.entities[index];
        entity.apply(patch);
        Ok(entity.clone())
    }

    fn delete(&mut self, id: EntityId) -> Result<Confirmation, ServiceError> {
        let index = self.position(id)?;
        self.entities.remove(index);
        Ok(Confirmation { removed: vec![id] })
    }

    fn delete_many(&mut self, ids: &[EntityId]) -> Confirmation {
        let wanted: HashSet<EntityId> = ids.iter().copied().collect();
        let present: HashSet<EntityId> = self
            .entities
            .iter()
            .map(|e| e.id)
            .filter(|id| wanted.contains(id))
            .collect();
        self.entities.retain(|e| !present.contains(&e.id));

        let mut seen = HashSet::new();
        let removed = ids
            .iter()
            .copied()
            .filter(|id| present.contains(id) && seen.insert(*id))
            .collect();
        Confirmation { removed }
    }
}

fn require(field: &'static str, value: &str, message: &str) -> Result<(), ServiceError> {
    if value.trim().is_empty() {
        return Err(ServiceError::validation(field, message));
    }
    Ok(())
}

fn duplicate_email(email: &str) -> ServiceError {
    ServiceError::conflict(format!("An entity with email '{}' already exists", email))
}

/// Async CRUD facade over a shared [`EntityStore`].
#[derive(Clone)]
pub struct EntityService {
    store: Arc<Mutex<EntityStore>>,
    latency: Latency,
}

impl EntityService {
    pub fn new(store: Arc<Mutex<EntityStore>>, latency: Latency) -> Self {
        Self { store, latency }
    }

    /// Service over the ten seeded employees.
    pub fn seeded(latency: Latency) -> Self {
        Self::new(Arc::new(Mutex::new(EntityStore::seeded())), latency)
    }

    /// Snapshot of every entity.
    pub async fn all(&self) -> Result<Vec<Entity>, ServiceError> {
        self.latency.wait().await;
        let entities = self.store.lock().entities.clone();
        tracing::debug!(count = entities.len(), "Fetched entities");
        Ok(entities)
    }

    pub async fn get(&self, id: EntityId) -> Result<Entity, ServiceError> {
        self.latency.wait().await;
        let store = self.store.lock();
        let index = store.position(id)?;
        Ok(store.entities[index].clone())
    }

    pub async fn add(&self, fields: NewEntity) -> Result<Entity, ServiceError> {
        self.latency.wait().await;
        let result = self.store.lock().add(fields, today());
        match &result {
            Ok(entity) => tracing::info!(id = entity.id, email = %entity.email, "Entity added"),
            Err(e) => tracing::warn!(error = %e, "Add rejected"),
        }
        result
    }

    pub async fn edit(&self, id: EntityId, patch: EntityPatch) -> Result<Entity, ServiceError> {
        self.latency.wait().await;
        let result = self.store.lock().edit(id, patch);
        match &result {
            Ok(_) => tracing::info!(id, "Entity updated"),
            Err(e) => tracing::warn!(id, error = %e, "Edit rejected"),
        }
        result
    }

    pub async fn delete(&self, id: EntityId) -> Result<Confirmation, ServiceError> {
        self.latency.wait().await;
        let result = self.store.lock().delete(id);
        match &result {
            Ok(_) => tracing::info!(id, "Entity deleted"),
            Err(e) => tracing::warn!(id, error = %e, "Delete rejected"),
        }
        result
    }

    /// Remove every listed id that exists; unknown ids are ignored.
    pub async fn delete_many(&self, ids: &[EntityId]) -> Result<Confirmation, ServiceError> {
        self.latency.wait().await;
        let confirmation = self.store.lock().delete_many(ids);
        tracing::info!(
            requested = ids.len(),
            removed = confirmation.removed.len(),
            "Entities deleted"
        );
        Ok(confirmation)
    }

    /// Number of stored entities, without simulated latency.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
