//! Action creators.
//!
//! Each method turns a user intent into signals around one awaited service
//! call: `*Request` before the call, then `*Success` or `*Failure`. Failures
//! are recorded in shared state for the global banner *and* returned to the
//! caller for form-level display.
//!
//! Results are applied in the order the calls resolve. Two overlapping edits
//! of the same entity are not sequenced; whichever resolves last wins.

use std::sync::Arc;

use crate::config::Config;
use crate::error::ServiceError;
use crate::model::{Entity, EntityId, EntityPatch, NewEntity, Registration, SessionUser, Theme};
use crate::service::{AuthService, Confirmation, EntityService};
use crate::state::entities::EntitiesSignal;
use crate::state::table::{TableSignal, TableState};
use crate::state::theme::ThemeSignal;
use crate::state::user::UserSignal;
use crate::state::AppState;
use crate::storage::{LocalStorage, CURRENT_USER_KEY, THEME_KEY};
use crate::store::Store;

pub struct Actions {
    store: Arc<Store>,
    entities: EntityService,
    auth: AuthService,
    storage: Arc<dyn LocalStorage>,
    default_theme: Theme,
}

impl Actions {
    pub fn new(
        store: Arc<Store>,
        entities: EntityService,
        auth: AuthService,
        storage: Arc<dyn LocalStorage>,
    ) -> Self {
        Self {
            store,
            entities,
            auth,
            storage,
            default_theme: Theme::default(),
        }
    }

    /// Seeded services and a fresh store, shaped by `config`.
    pub fn from_config(config: &Config, storage: Arc<dyn LocalStorage>) -> Self {
        let initial = AppState {
            table: TableState::with_page_size(config.view.page_size),
            ..AppState::default()
        };
        Self::new(
            Arc::new(Store::new(initial)),
            EntityService::seeded((&config.latency).into()),
            AuthService::seeded((&config.latency).into()),
            storage,
        )
        .with_default_theme(config.view.default_theme)
    }

    /// Theme used when no preference is stored.
    pub fn with_default_theme(mut self, theme: Theme) -> Self {
        self.default_theme = theme;
        self
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Dispatch the outcome of a finished service call and hand it back.
    fn settle<T>(
        &self,
        result: Result<T, ServiceError>,
        success: impl FnOnce(&T) -> EntitiesSignal,
        failure: fn(String) -> EntitiesSignal,
    ) -> Result<T, ServiceError> {
        match &result {
            Ok(value) => self.store.dispatch(success(value)),
            Err(e) => self.store.dispatch(failure(e.to_string())),
        }
        result
    }

    pub async fn fetch_entities(&self) -> Result<Vec<Entity>, ServiceError> {
        self.store.dispatch(EntitiesSignal::FetchRequest);
        let result = self.entities.all().await;
        self.settle(
            result,
            |list| EntitiesSignal::FetchSuccess(list.clone()),
            EntitiesSignal::FetchFailure,
        )
    }

    pub async fn add_entity(&self, fields: NewEntity) -> Result<Entity, ServiceError> {
        self.store.dispatch(EntitiesSignal::AddRequest);
        let result = self.entities.add(fields).await;
        self.settle(
            result,
            |entity| EntitiesSignal::AddSuccess(entity.clone()),
            EntitiesSignal::AddFailure,
        )
    }

    pub async fn update_entity(
        &self,
        id: EntityId,
        patch: EntityPatch,
    ) -> Result<Entity, ServiceError> {
        self.store.dispatch(EntitiesSignal::UpdateRequest);
        let result = self.entities.edit(id, patch).await;
        self.settle(
            result,
            |entity| EntitiesSignal::UpdateSuccess(entity.clone()),
            EntitiesSignal::UpdateFailure,
        )
    }

    pub async fn delete_entity(&self, id: EntityId) -> Result<Confirmation, ServiceError> {
        self.store.dispatch(EntitiesSignal::DeleteRequest(id));
        let result = self.entities.delete(id).await;
        self.settle(
            result,
            |_| EntitiesSignal::DeleteSuccess(id),
            EntitiesSignal::DeleteFailure,
        )
    }

    pub async fn delete_many_entities(
        &self,
        ids: Vec<EntityId>,
    ) -> Result<Confirmation, ServiceError> {
        self.store
            .dispatch(EntitiesSignal::DeleteManyRequest(ids.clone()));
        let result = self.entities.delete_many(&ids).await;
        self.settle(
            result,
            move |_| EntitiesSignal::DeleteManySuccess(ids),
            EntitiesSignal::DeleteManyFailure,
        )
    }

    /// Delete every selected row. Nothing is dispatched when the selection
    /// is empty.
    pub async fn delete_selected(&self) -> Result<Confirmation, ServiceError> {
        let ids: Vec<EntityId> = self
            .store
            .with(|s| s.table.selected.iter().copied().collect());
        if ids.is_empty() {
            return Ok(Confirmation {
                removed: Vec::new(),
            });
        }
        self.delete_many_entities(ids).await
    }

    pub fn set_search_term(&self, term: impl Into<String>) {
        self.store.dispatch(EntitiesSignal::SetSearchTerm(term.into()));
    }

    pub fn clear_error(&self) {
        self.store.dispatch(EntitiesSignal::ClearError);
    }

    /// Table controls are synchronous; no service involved.
    pub fn table(&self, signal: TableSignal) {
        self.store.dispatch(signal);
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ServiceError> {
        let user = self.auth.login(username, password).await?;
        self.store.dispatch(UserSignal::Login(user.clone()));
        self.persist_session(&user);
        Ok(user)
    }

    /// Create the account and sign the new user in.
    pub async fn register(&self, registration: Registration) -> Result<SessionUser, ServiceError> {
        let user = self.auth.register(registration).await?;
        self.store.dispatch(UserSignal::Register(user.clone()));
        self.persist_session(&user);
        Ok(user)
    }

    pub async fn logout(&self) {
        self.auth.logout().await;
        self.store.dispatch(UserSignal::Logout);
        if let Err(e) = self.storage.remove(CURRENT_USER_KEY) {
            tracing::warn!(error = %e, "Failed to clear stored session");
        }
    }

    fn persist_session(&self, user: &SessionUser) {
        let stored = serde_json::to_string(user)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                self.storage
                    .set(CURRENT_USER_KEY, &json)
                    .map_err(|e| e.to_string())
            });
        if let Err(error) = stored {
            tracing::warn!(%error, "Failed to persist session");
        }
    }

    /// Sign the stored user back in, if a valid session was saved.
    pub fn restore_session(&self) -> Option<SessionUser> {
        let raw = match self.storage.get(CURRENT_USER_KEY) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored session");
                return None;
            }
        };
        match serde_json::from_str::<SessionUser>(&raw) {
            Ok(user) => {
                tracing::info!(user_id = user.id, "Session restored");
                self.store.dispatch(UserSignal::Login(user.clone()));
                Some(user)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring malformed stored session");
                None
            }
        }
    }

    /// Persist the preference, then apply it.
    pub fn set_theme(&self, theme: Theme) {
        if let Err(e) = self.storage.set(THEME_KEY, theme.as_str()) {
            tracing::warn!(error = %e, "Failed to persist theme");
        }
        self.store.dispatch(ThemeSignal::Set(theme));
    }

    pub fn toggle_theme(&self) -> Theme {
        let theme = self.store.with(|s| s.theme.theme).toggled();
        self.set_theme(theme);
        theme
    }

    /// Apply the stored theme, or the configured default when none is stored.
    pub fn initialize_theme(&self) -> Theme {
        let stored = match self.storage.get(THEME_KEY) {
            Ok(value) => value.as_deref().and_then(Theme::parse),
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read stored theme");
                None
            }
        };
        let theme = stored.unwrap_or(self.default_theme);
        self.store.dispatch(ThemeSignal::Set(theme));
        theme
    }
}
