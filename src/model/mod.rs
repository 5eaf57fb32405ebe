//! Domain records shared by the services, the state slices and the view.

mod entity;
mod seed;
mod theme;
mod user;

pub use entity::{same_email, Entity, EntityId, EntityPatch, NewEntity};
pub use seed::{seed_entities, seed_users};
pub use theme::Theme;
pub use user::{Registration, SecureString, SessionUser, User, UserId};
