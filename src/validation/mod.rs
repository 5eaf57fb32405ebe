//! Form validation as typed rules.
//!
//! Each field has an ordered list of rules; the first failing rule produces
//! the message for that field. Results are collected in a
//! [`ValidationReport`] instead of being raised.

mod rules;
mod schema;

pub use rules::{
    company_founded, first_failure, DateRule, RangeRule, TextRule, ALLOWED_EMAIL_DOMAINS,
    FORBIDDEN_NAMES, MAX_AGE, MIN_AGE,
};
pub use schema::{EntityForm, LoginForm, RegistrationForm};

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Age,
    HireDate,
    Username,
    Password,
    ConfirmPassword,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Age => "age",
            Self::HireDate => "hireDate",
            Self::Username => "username",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

/// Outcome of validating a form. Empty means valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn push(&mut self, field: Field, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    /// Record `outcome` for `field` if a rule failed.
    pub fn check(&mut self, field: Field, outcome: Option<String>) {
        if let Some(message) = outcome {
            self.push(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of failing fields.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Message for `field`, if it failed.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    /// Drop the error for `field`, as when the user edits it again.
    pub fn clear(&mut self, field: Field) {
        self.errors.retain(|e| e.field != field);
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.errors.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}: {}", error.field.as_str(), error.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}
