//! In-memory auth service.

use std::sync::Arc;

use parking_lot::Mutex;

use super::latency::Latency;
use crate::error::ServiceError;
use crate::model::{seed_users, Registration, SessionUser, User};

/// Owner of the user accounts.
#[derive(Debug, Default)]
pub struct UserStore {
    users: Vec<User>,
}

impl UserStore {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    pub fn seeded() -> Self {
        Self::new(seed_users())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    fn authenticate(&self, username: &str, password: &str) -> Result<SessionUser, ServiceError> {
        self.users
            .iter()
            .find(|u| u.username == username && u.password.expose() == password)
            .map(User::sanitized)
            .ok_or(ServiceError::Auth)
    }

    fn register(&mut self, registration: Registration) -> Result<SessionUser, ServiceError> {
        let exists = self
            .users
            .iter()
            .any(|u| u.username == registration.username || u.email == registration.email);
        if exists {
            return Err(ServiceError::conflict(
                "User with this username or email already exists",
            ));
        }

        let user = User {
            id: self.users.iter().map(|u| u.id).max().unwrap_or(0) + 1,
            username: registration.username,
            password: registration.password,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name.unwrap_or_default(),
        };
        let sanitized = user.sanitized();
        self.users.push(user);
        Ok(sanitized)
    }
}

/// Delays for each auth call.
#[derive(Debug, Clone, Copy)]
pub struct AuthLatency {
    pub login: Latency,
    pub register: Latency,
    pub logout: Latency,
}

impl AuthLatency {
    pub fn none() -> Self {
        Self {
            login: Latency::none(),
            register: Latency::none(),
            logout: Latency::none(),
        }
    }
}

impl Default for AuthLatency {
    fn default() -> Self {
        use std::time::Duration;
        Self {
            login: Latency::fixed(Duration::from_millis(1000)),
            register: Latency::fixed(Duration::from_millis(1000)),
            logout: Latency::fixed(Duration::from_millis(500)),
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    store: Arc<Mutex<UserStore>>,
    latency: AuthLatency,
}

impl AuthService {
    pub fn new(store: Arc<Mutex<UserStore>>, latency: AuthLatency) -> Self {
        Self { store, latency }
    }

    pub fn seeded(latency: AuthLatency) -> Self {
        Self::new(Arc::new(Mutex::new(UserStore::seeded())), latency)
    }

    /// Resolve the sanitized user for an exact username/password match.
    pub async fn login(&self, username: &str, password: &str) -> Result<SessionUser, ServiceError> {
        self.latency.login.wait().await;
        let result = self.store.lock().authenticate(username, password);
        match &result {
            Ok(user) => tracing::info!(user_id = user.id, username, "Login succeeded"),
            Err(_) => tracing::warn!(username, "Login failed"),
        }
        result
    }

    /// Create an account. Fails if the username or the email is taken.
    pub async fn register(&self, registration: Registration) -> Result<SessionUser, ServiceError> {
        self.latency.register.wait().await;
        let username = registration.username.clone();
        let result = self.store.lock().register(registration);
        match &result {
            Ok(user) => tracing::info!(user_id = user.id, username = %username, "User registered"),
            Err(e) => tracing::warn!(username = %username, error = %e, "Registration rejected"),
        }
        result
    }

    /// Latency only; clearing the session is the caller's job.
    pub async fn logout(&self) {
        self.latency.logout.wait().await;
        tracing::debug!("Logout acknowledged");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::SecureString;

    fn registration(username: &str, email: &str) -> Registration {
        Registration {
            username: username.into(),
            password: SecureString::new("Secret123"),
            email: email.into(),
            first_name: "Nina".into(),
            last_name: None,
        }
    }

    #[test]
    fn password_must_match_exactly() {
        let store = UserStore::seeded();
        assert!(store.authenticate("alex", "alex123").is_ok());
        assert_eq!(store.authenticate("alex", "Alex123"), Err(ServiceError::Auth));
        assert_eq!(store.authenticate("nobody", "alex123"), Err(ServiceError::Auth));
    }

    #[test]
    fn register_assigns_next_id_and_empty_last_name() {
        let mut store = UserStore::seeded();
        let user = store
            .register(registration("nina", "nina@company.com"))
            .unwrap();
        assert_eq!(user.id, 4);
        assert_eq!(user.last_name, "");
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn register_conflicts_on_username_or_email() {
        let mut store = UserStore::seeded();
        assert!(matches!(
            store.register(registration("alex", "new@company.com")),
            Err(ServiceError::Conflict { .. })
        ));
        assert!(matches!(
            store.register(registration("newbie", "sarah@company.com")),
            Err(ServiceError::Conflict { .. })
        ));
        assert_eq!(store.len(), 3);
    }
}
