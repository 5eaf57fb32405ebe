//! Form schemas built from the rules in [`super::rules`].
//!
//! Forms hold raw text as typed by the user. `validate` either yields the
//! typed payload for the service or a report with one message per field.

use chrono::NaiveDate;

use super::rules::{
    company_founded, first_failure, DateRule, RangeRule, TextRule, MAX_AGE, MIN_AGE,
};
use super::{Field, ValidationReport};
use crate::model::{EntityPatch, NewEntity, Registration, SecureString};

const FIRST_NAME_RULES: &[TextRule] = &[
    TextRule::Required("First name is required"),
    TextRule::MinLen(2, "First name must be at least 2 characters"),
    TextRule::MaxLen(50, "First name must be less than 50 characters"),
    TextRule::StartsWithCapital("First name must start with a capital letter"),
    TextRule::OnlyLetters("First name must contain only letters"),
    TextRule::NotForbidden("This name is not allowed"),
];

const LAST_NAME_RULES: &[TextRule] = &[
    TextRule::Required("Last name is required"),
    TextRule::MinLen(2, "Last name must be at least 2 characters"),
    TextRule::MaxLen(50, "Last name must be less than 50 characters"),
    TextRule::StartsWithCapital("Last name must start with a capital letter"),
    TextRule::OnlyLetters("Last name must contain only letters"),
];

const EMAIL_RULES: &[TextRule] = &[
    TextRule::Required("Email is required"),
    TextRule::EmailFormat("Invalid email format"),
    TextRule::CorporateDomain("Email must be a corporate email (@company.com or @corp.company.com)"),
];

fn age_rule() -> RangeRule {
    RangeRule {
        min: MIN_AGE,
        max: MAX_AGE,
        below: format!("Employee must be at least {} years old", MIN_AGE),
        above: format!("Employee must be no older than {} years", MAX_AGE),
    }
}

fn hire_date_rules(today: NaiveDate) -> [DateRule; 2] {
    let founded = company_founded();
    [
        DateRule::NotAfter(today, "Hire date cannot be in the future"),
        DateRule::NotBefore(
            founded,
            format!("Hire date must be after company was founded ({})", founded),
        ),
    ]
}

/// Employee add/edit form. `None` means the field was left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntityForm {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub age: Option<String>,
    pub hire_date: Option<String>,
}

impl EntityForm {
    /// Validate a complete form for creation. Every field is required.
    pub fn validate_new(&self, today: NaiveDate) -> Result<NewEntity, ValidationReport> {
        let mut report = ValidationReport::default();
        let text = |v: &Option<String>| v.clone().unwrap_or_default();

        let first_name = text(&self.first_name);
        let last_name = text(&self.last_name);
        let email = text(&self.email);
        report.check(Field::FirstName, first_failure(FIRST_NAME_RULES, &first_name));
        report.check(Field::LastName, first_failure(LAST_NAME_RULES, &last_name));
        report.check(Field::Email, first_failure(EMAIL_RULES, &email));

        let age = parse_age(&text(&self.age), &mut report);
        let hire_date = parse_hire_date(&text(&self.hire_date), today, &mut report);

        match (age, hire_date) {
            (Some(age), Some(hire_date)) if report.is_empty() => Ok(NewEntity {
                first_name,
                last_name,
                email,
                age,
                hire_date: Some(hire_date),
            }),
            _ => Err(report),
        }
    }

    /// Validate only the fields that were provided, for an edit.
    pub fn validate_patch(&self, today: NaiveDate) -> Result<EntityPatch, ValidationReport> {
        let mut report = ValidationReport::default();
        let mut patch = EntityPatch::default();

        if let Some(v) = &self.first_name {
            report.check(Field::FirstName, first_failure(FIRST_NAME_RULES, v));
            patch.first_name = Some(v.clone());
        }
        if let Some(v) = &self.last_name {
            report.check(Field::LastName, first_failure(LAST_NAME_RULES, v));
            patch.last_name = Some(v.clone());
        }
        if let Some(v) = &self.email {
            report.check(Field::Email, first_failure(EMAIL_RULES, v));
            patch.email = Some(v.clone());
        }
        if let Some(v) = &self.age {
            patch.age = parse_age(v, &mut report);
        }
        if let Some(v) = &self.hire_date {
            patch.hire_date = parse_hire_date(v, today, &mut report);
        }

        if report.is_empty() {
            Ok(patch)
        } else {
            Err(report)
        }
    }
}

fn parse_age(raw: &str, report: &mut ValidationReport) -> Option<u32> {
    let raw = raw.trim();
    if raw.is_empty() {
        report.push(Field::Age, "Age is required");
        return None;
    }
    let Ok(number) = raw.parse::<f64>() else {
        report.push(Field::Age, "Age must be a number");
        return None;
    };
    if number.fract() != 0.0 {
        report.push(Field::Age, "Age must be a whole number");
        return None;
    }
    let age = number as i64;
    if let Some(message) = age_rule().check(age) {
        report.push(Field::Age, message);
        return None;
    }
    u32::try_from(age).ok()
}

fn parse_hire_date(raw: &str, today: NaiveDate, report: &mut ValidationReport) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        report.push(Field::HireDate, "Hire date is required");
        return None;
    }
    let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") else {
        report.push(Field::HireDate, "Invalid date format");
        return None;
    };
    if let Some(message) = hire_date_rules(today).iter().find_map(|r| r.check(date)) {
        report.push(Field::HireDate, message);
        return None;
    }
    Some(date)
}

/// Account registration form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl RegistrationForm {
    pub fn validate(&self) -> Result<Registration, ValidationReport> {
        let mut report = ValidationReport::default();

        report.check(
            Field::FirstName,
            first_failure(
                &[
                    TextRule::Required("First name is required"),
                    TextRule::MinLen(2, "First name must be at least 2 characters"),
                    TextRule::StartsWithCapital("Must start with a capital letter"),
                ],
                &self.first_name,
            ),
        );
        report.check(
            Field::LastName,
            first_failure(
                &[
                    TextRule::MinLen(2, "Last name must be at least 2 characters"),
                    TextRule::StartsWithCapital("Must start with a capital letter"),
                ],
                &self.last_name,
            ),
        );
        report.check(
            Field::Email,
            first_failure(
                &[
                    TextRule::Required("Email is required"),
                    TextRule::EmailFormat("Invalid email format"),
                ],
                &self.email,
            ),
        );
        report.check(
            Field::Username,
            first_failure(
                &[
                    TextRule::Required("Username is required"),
                    TextRule::MinLen(3, "Username must be at least 3 characters"),
                    TextRule::MaxLen(20, "Username must be less than 20 characters"),
                    TextRule::UsernameChars(
                        "Username can only contain letters, numbers and underscores",
                    ),
                    TextRule::NotForbidden("This username is not allowed"),
                ],
                &self.username,
            ),
        );
        report.check(
            Field::Password,
            first_failure(
                &[
                    TextRule::Required("Password is required"),
                    TextRule::MinLen(8, "Password must be at least 8 characters"),
                    TextRule::StrongPassword(
                        "Password must contain at least one uppercase letter, one lowercase letter, and one number",
                    ),
                ],
                &self.password,
            ),
        );
        if self.confirm_password.is_empty() {
            report.push(Field::ConfirmPassword, "Please confirm your password");
        } else if self.confirm_password != self.password {
            report.push(Field::ConfirmPassword, "Passwords must match");
        }

        if !report.is_empty() {
            return Err(report);
        }

        Ok(Registration {
            username: self.username.clone(),
            password: SecureString::new(self.password.clone()),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: (!self.last_name.is_empty()).then(|| self.last_name.clone()),
        })
    }
}

/// Sign-in form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationReport> {
        let mut report = ValidationReport::default();
        report.check(
            Field::Username,
            first_failure(
                &[
                    TextRule::Required("Username is required"),
                    TextRule::MinLen(3, "Username must be at least 3 characters"),
                ],
                &self.username,
            ),
        );
        report.check(
            Field::Password,
            first_failure(
                &[
                    TextRule::Required("Password is required"),
                    TextRule::MinLen(6, "Password must be at least 6 characters"),
                ],
                &self.password,
            ),
        );
        if report.is_empty() {
            Ok(())
        } else {
            Err(report)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn valid_form() -> EntityForm {
        EntityForm {
            first_name: Some("Nora".into()),
            last_name: Some("Quinn".into()),
            email: Some("nora.quinn@company.com".into()),
            age: Some("30".into()),
            hire_date: Some("2022-05-10".into()),
        }
    }

    #[test]
    fn valid_entity_form_yields_payload() {
        let entity = valid_form().validate_new(today()).unwrap();
        assert_eq!(entity.age, 30);
        assert_eq!(entity.hire_date, NaiveDate::from_ymd_opt(2022, 5, 10));
    }

    #[test]
    fn entity_form_reports_each_bad_field() {
        let form = EntityForm {
            first_name: Some("root".into()),
            email: Some("nora@example.com".into()),
            age: Some("17".into()),
            hire_date: Some("2009-12-31".into()),
            ..Default::default()
        };
        let report = form.validate_new(today()).unwrap_err();
        assert_eq!(
            report.get(Field::FirstName),
            Some("First name must start with a capital letter")
        );
        assert_eq!(report.get(Field::LastName), Some("Last name is required"));
        assert!(report.get(Field::Email).unwrap().contains("corporate"));
        assert_eq!(
            report.get(Field::Age),
            Some("Employee must be at least 18 years old")
        );
        assert_eq!(
            report.get(Field::HireDate),
            Some("Hire date must be after company was founded (2010-01-01)")
        );
    }

    #[test]
    fn future_hire_date_and_fractional_age_are_rejected() {
        let mut form = valid_form();
        form.age = Some("30.5".into());
        form.hire_date = Some("2025-06-02".into());
        let report = form.validate_new(today()).unwrap_err();
        assert_eq!(report.get(Field::Age), Some("Age must be a whole number"));
        assert_eq!(
            report.get(Field::HireDate),
            Some("Hire date cannot be in the future")
        );
    }

    #[test]
    fn patch_checks_only_provided_fields() {
        let form = EntityForm {
            age: Some("44".into()),
            ..Default::default()
        };
        let patch = form.validate_patch(today()).unwrap();
        assert_eq!(patch.age, Some(44));
        assert!(patch.first_name.is_none());

        let form = EntityForm {
            age: Some("abc".into()),
            ..Default::default()
        };
        let report = form.validate_patch(today()).unwrap_err();
        assert_eq!(report.get(Field::Age), Some("Age must be a number"));
    }

    #[test]
    fn registration_rules() {
        let mut form = RegistrationForm {
            username: "nina_k".into(),
            password: "Secret123".into(),
            confirm_password: "Secret123".into(),
            email: "nina@example.com".into(),
            first_name: "Nina".into(),
            last_name: String::new(),
        };
        let registration = form.validate().unwrap();
        assert_eq!(registration.last_name, None);

        form.confirm_password = "Secret124".into();
        form.username = "test".into();
        let report = form.validate().unwrap_err();
        assert_eq!(report.get(Field::ConfirmPassword), Some("Passwords must match"));
        assert_eq!(report.get(Field::Username), Some("This username is not allowed"));
    }

    #[test]
    fn login_rules() {
        let form = LoginForm {
            username: "al".into(),
            password: "12345".into(),
        };
        let report = form.validate().unwrap_err();
        assert_eq!(report.len(), 2);

        let form = LoginForm {
            username: "alex".into(),
            password: "alex123".into(),
        };
        assert!(form.validate().is_ok());
    }
}
