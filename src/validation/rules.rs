use chrono::NaiveDate;

/// Names that may not be used as a first name or username.
pub const FORBIDDEN_NAMES: &[&str] = &["admin", "test", "user", "root"];

/// Email domains accepted for employee records.
pub const ALLOWED_EMAIL_DOMAINS: &[&str] = &["@company.com", "@corp.company.com"];

pub const MIN_AGE: i64 = 18;
pub const MAX_AGE: i64 = 65;

/// Hire dates before this are rejected.
pub fn company_founded() -> NaiveDate {
    NaiveDate::from_ymd_opt(2010, 1, 1).unwrap_or_default()
}

/// Predicate over a text field. `message` is shown when the check fails.
#[derive(Debug, Clone, PartialEq)]
pub enum TextRule {
    Required(&'static str),
    MinLen(usize, &'static str),
    MaxLen(usize, &'static str),
    StartsWithCapital(&'static str),
    OnlyLetters(&'static str),
    NotForbidden(&'static str),
    EmailFormat(&'static str),
    CorporateDomain(&'static str),
    /// ASCII letters, digits and underscores.
    UsernameChars(&'static str),
    /// At least one lowercase, one uppercase and one digit.
    StrongPassword(&'static str),
}

impl TextRule {
    /// Check `value`; `None` means it passed.
    ///
    /// Only `Required` fails on an empty value. The other rules skip empty
    /// input so optional fields can carry them.
    pub fn check(&self, value: &str) -> Option<String> {
        let empty = value.is_empty();
        let passed = match self {
            TextRule::Required(_) => !value.trim().is_empty(),
            _ if empty => true,
            TextRule::MinLen(n, _) => value.chars().count() >= *n,
            TextRule::MaxLen(n, _) => value.chars().count() <= *n,
            TextRule::StartsWithCapital(_) => value.starts_with(|c: char| c.is_ascii_uppercase()),
            TextRule::OnlyLetters(_) => value.chars().all(|c| c.is_ascii_alphabetic()),
            TextRule::NotForbidden(_) => !FORBIDDEN_NAMES.contains(&value.to_lowercase().as_str()),
            TextRule::EmailFormat(_) => is_email(value),
            TextRule::CorporateDomain(_) => {
                let lower = value.to_lowercase();
                ALLOWED_EMAIL_DOMAINS.iter().any(|d| lower.ends_with(d))
            }
            TextRule::UsernameChars(_) => value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'),
            TextRule::StrongPassword(_) => {
                value.chars().any(|c| c.is_ascii_lowercase())
                    && value.chars().any(|c| c.is_ascii_uppercase())
                    && value.chars().any(|c| c.is_ascii_digit())
            }
        };
        (!passed).then(|| self.message().to_string())
    }

    fn message(&self) -> &'static str {
        match self {
            TextRule::Required(m)
            | TextRule::MinLen(_, m)
            | TextRule::MaxLen(_, m)
            | TextRule::StartsWithCapital(m)
            | TextRule::OnlyLetters(m)
            | TextRule::NotForbidden(m)
            | TextRule::EmailFormat(m)
            | TextRule::CorporateDomain(m)
            | TextRule::UsernameChars(m)
            | TextRule::StrongPassword(m) => m,
        }
    }
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && tld.len() >= 2 && !host.ends_with('.'),
        None => false,
    }
}

/// Range check for integer fields such as age.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeRule {
    pub min: i64,
    pub max: i64,
    pub below: String,
    pub above: String,
}

impl RangeRule {
    pub fn check(&self, value: i64) -> Option<String> {
        if value < self.min {
            Some(self.below.clone())
        } else if value > self.max {
            Some(self.above.clone())
        } else {
            None
        }
    }
}

/// Calendar constraints for date fields.
#[derive(Debug, Clone, PartialEq)]
pub enum DateRule {
    NotAfter(NaiveDate, &'static str),
    NotBefore(NaiveDate, String),
}

impl DateRule {
    pub fn check(&self, value: NaiveDate) -> Option<String> {
        match self {
            DateRule::NotAfter(limit, m) if value > *limit => Some(m.to_string()),
            DateRule::NotBefore(limit, m) if value < *limit => Some(m.clone()),
            _ => None,
        }
    }
}

/// Run `rules` in order and return the first failure.
pub fn first_failure(rules: &[TextRule], value: &str) -> Option<String> {
    rules.iter().find_map(|rule| rule.check(value))
}
