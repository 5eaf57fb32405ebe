//! Seed data loaded into the stores at process start.

use chrono::NaiveDate;

use super::entity::Entity;
use super::user::{SecureString, User};

fn employee(
    id: u64,
    first_name: &str,
    last_name: &str,
    age: u32,
    (y, m, d): (i32, u32, u32),
) -> Entity {
    Entity {
        id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: format!(
            "{}.{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        ),
        age,
        // Literal dates below are all valid.
        hire_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
    }
}

/// Ten employees; every email shares the `example.com` domain.
pub fn seed_entities() -> Vec<Entity> {
    vec![
        employee(1, "John", "Doe", 34, (2015, 3, 12)),
        employee(2, "Jane", "Smith", 28, (2019, 7, 1)),
        employee(3, "Bob", "Johnson", 45, (2011, 9, 23)),
        employee(4, "Alice", "Brown", 31, (2018, 1, 15)),
        employee(5, "Charlie", "Davis", 52, (2010, 6, 30)),
        employee(6, "Emily", "Wilson", 26, (2021, 11, 8)),
        employee(7, "Frank", "Moore", 39, (2016, 4, 19)),
        employee(8, "Grace", "Taylor", 23, (2023, 2, 27)),
        employee(9, "Henry", "Anderson", 47, (2012, 10, 5)),
        employee(10, "Isabel", "Thomas", 36, (2017, 8, 14)),
    ]
}

pub fn seed_users() -> Vec<User> {
    let user = |id, username: &str, password: &str, first_name: &str, last_name: &str| User {
        id,
        username: username.to_string(),
        password: SecureString::new(password),
        email: format!("{}@company.com", username),
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
    };

    vec![
        user(1, "alex", "alex123", "Alex", "Johnson"),
        user(2, "sarah", "sarah123", "Sarah", "Miller"),
        user(3, "mike", "mike123", "Mike", "Davis"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn seed_ids_and_emails_are_unique() {
        let entities = seed_entities();
        assert_eq!(entities.len(), 10);
        let ids: HashSet<_> = entities.iter().map(|e| e.id).collect();
        let emails: HashSet<_> = entities.iter().map(|e| e.email.to_lowercase()).collect();
        assert_eq!(ids.len(), 10);
        assert_eq!(emails.len(), 10);
        assert!(entities.iter().all(|e| e.email.ends_with("@example.com")));
    }

    #[test]
    fn seed_dates_are_real() {
        assert!(seed_entities()
            .iter()
            .all(|e| e.hire_date != NaiveDate::default()));
    }
}
