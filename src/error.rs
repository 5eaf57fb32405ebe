//! Error taxonomy for the mock services.
//!
//! Every failure that can cross an async service boundary is a [`ServiceError`].
//! Action creators catch these, record them in shared state and hand them back
//! to the caller, so nothing escapes unhandled.

use thiserror::Error;

use crate::model::EntityId;

/// Where a failure should be shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Next to the form field or form that triggered it.
    Inline,
    /// As an application-wide notification; implies client state drifted.
    Global,
}

/// Errors produced by the entity and auth services.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// Missing or malformed required input.
    #[error("{message}")]
    Validation {
        field: &'static str,
        message: String,
    },

    /// Uniqueness violation (email, username).
    #[error("{message}")]
    Conflict { message: String },

    /// Stale id reference.
    #[error("Entity with id {id} not found")]
    NotFound { id: EntityId },

    /// Bad credentials.
    #[error("Invalid username or password")]
    Auth,
}

impl ServiceError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        ServiceError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        ServiceError::Conflict {
            message: message.into(),
        }
    }

    /// Surfacing policy for this error kind.
    pub fn surface(&self) -> Surface {
        match self {
            ServiceError::NotFound { .. } => Surface::Global,
            ServiceError::Validation { .. } | ServiceError::Conflict { .. } | ServiceError::Auth => {
                Surface::Inline
            }
        }
    }

    /// Form field the error belongs to, if it is tied to one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ServiceError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}
