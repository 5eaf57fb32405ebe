//! Mock backend services.
//!
//! Both services are async and suspend the caller for a simulated network
//! delay before touching their store. Stores are explicit objects created
//! at process start and shared by reference; there is no global state.

mod auth;
mod entities;
mod latency;

pub use auth::{AuthLatency, AuthService, UserStore};
pub use entities::{Confirmation, EntityService, EntityStore};
pub use latency::Latency;

use std::time::Duration;

use crate::config::LatencyConfig;

impl From<&LatencyConfig> for Latency {
    fn from(config: &LatencyConfig) -> Self {
        Latency::between(
            Duration::from_millis(config.min_ms),
            Duration::from_millis(config.max_ms),
        )
    }
}

impl From<&LatencyConfig> for AuthLatency {
    fn from(config: &LatencyConfig) -> Self {
        AuthLatency {
            login: Latency::fixed(Duration::from_millis(config.login_ms)),
            register: Latency::fixed(Duration::from_millis(config.register_ms)),
            logout: Latency::fixed(Duration::from_millis(config.logout_ms)),
        }
    }
}
