use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Service-assigned entity identifier. Positive, never reused within a session.
pub type EntityId = u64;

/// Employee record managed by the entity service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: EntityId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    pub hire_date: NaiveDate,
}

impl Entity {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Merge the fields present in `patch` over this record.
    pub fn apply(&mut self, patch: EntityPatch) {
        let EntityPatch {
            first_name,
            last_name,
            email,
            age,
            hire_date,
        } = patch;

        if let Some(v) = first_name {
            self.first_name = v;
        }
        if let Some(v) = last_name {
            self.last_name = v;
        }
        if let Some(v) = email {
            self.email = v;
        }
        if let Some(v) = age {
            self.age = v;
        }
        if let Some(v) = hire_date {
            self.hire_date = v;
        }
    }
}

/// Payload for creating an entity. The service assigns the id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEntity {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub age: u32,
    /// Defaults to the current date when omitted.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

impl NewEntity {
    pub fn into_entity(self, id: EntityId, default_hire_date: NaiveDate) -> Entity {
        Entity {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            age: self.age,
            hire_date: self.hire_date.unwrap_or(default_hire_date),
        }
    }
}

/// Partial update; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntityPatch {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub age: Option<u32>,
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}

impl EntityPatch {
    pub fn is_empty(&self) -> bool {
        self == &EntityPatch::default()
    }
}

/// Case-insensitive email comparison used for uniqueness checks.
pub fn same_email(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn jane() -> Entity {
        Entity {
            id: 2,
            first_name: "Jane".into(),
            last_name: "Smith".into(),
            email: "jane.smith@example.com".into(),
            age: 28,
            hire_date: date(2020, 3, 1),
        }
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut entity = jane();
        entity.apply(EntityPatch {
            last_name: Some("Doe".into()),
            age: Some(29),
            ..Default::default()
        });
        assert_eq!(entity.first_name, "Jane");
        assert_eq!(entity.last_name, "Doe");
        assert_eq!(entity.age, 29);
        assert_eq!(entity.hire_date, date(2020, 3, 1));
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(jane()).unwrap();
        assert_eq!(json["firstName"], "Jane");
        assert_eq!(json["hireDate"], "2020-03-01");
    }

    #[test]
    fn email_comparison_ignores_case() {
        assert!(same_email("Jane.Smith@Example.com", "jane.smith@example.com"));
        assert!(!same_email("jane@example.com", "jane.smith@example.com"));
    }

    #[test]
    fn email_comparison_folds_non_ascii_letters() {
        assert!(same_email("ÉMILE@company.com", "émile@company.com"));
        assert!(same_email(" Øyvind@Company.com", "øyvind@company.com "));
    }

    #[test]
    fn missing_hire_date_uses_default() {
        let entity = NewEntity {
            first_name: "Ann".into(),
            email: "ann@example.com".into(),
            ..Default::default()
        }
        .into_entity(11, date(2024, 1, 2));
        assert_eq!(entity.id, 11);
        assert_eq!(entity.hire_date, date(2024, 1, 2));
    }
}
