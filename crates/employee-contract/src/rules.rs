//! The rule table
//!
//! `CONTRACT` is the only place the employee acceptance rules are written
//! down. Each entry carries enough metadata for a form to render the field
//! and for a browser to re-run the same checks from JSON.

use std::borrow::Cow;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::record::{fields, Violation};
use crate::{date, email, string};

/// A single acceptance rule.
///
/// Serialized form (used in `data-validate` attributes):
/// `{"rule":"digits","min":3,"max":3,"message":"Invalid format"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum Rule {
    /// At least `min` characters
    MinLength {
        min: usize,
        message: Cow<'static, str>,
    },
    /// Only ASCII digits, between `min` and `max` of them
    Digits {
        min: usize,
        max: usize,
        message: Cow<'static, str>,
    },
    Email {
        message: Cow<'static, str>,
    },
    /// A date that is not after the moment of validation
    NotFuture {
        message: Cow<'static, str>,
    },
}

impl Rule {
    /// Checks one value, returning the failure message
    pub fn check(&self, value: &str, now: DateTime<Utc>) -> Result<(), String> {
        match self {
            Rule::MinLength { min, message } => {
                if string::has_min_length(value, *min) {
                    Ok(())
                } else {
                    Err(message.to_string())
                }
            }
            Rule::Digits { min, max, message } => {
                if string::is_digits(value, *min, *max) {
                    Ok(())
                } else {
                    Err(message.to_string())
                }
            }
            Rule::Email { message } => {
                if email::is_valid_email(value) {
                    Ok(())
                } else {
                    Err(message.to_string())
                }
            }
            Rule::NotFuture { message } => date::validate_not_future(value, now, message),
        }
    }

    /// HTML5 attributes hinting this rule to the browser
    fn html5_attrs(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        match self {
            Rule::MinLength { min, .. } if *min > 0 => vec![
                ("required", String::new()),
                ("minlength", min.to_string()),
            ],
            Rule::MinLength { .. } => Vec::new(),
            Rule::Digits { min, max, .. } => vec![
                ("required", String::new()),
                ("pattern", string::digits_pattern(*min, *max)),
                ("maxlength", max.to_string()),
                ("inputmode", "numeric".to_string()),
            ],
            Rule::Email { .. } => vec![("required", String::new())],
            // `now` is the renderer's UTC date, so east of UTC the picker can lag a day
            Rule::NotFuture { .. } => vec![
                ("required", String::new()),
                ("max", now.format("%Y-%m-%d").to_string()),
            ],
        }
    }
}

/// How a field is presented in a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Text,
    Email,
    Tel,
    Select,
    Date,
}

impl InputKind {
    /// Value of the `type` attribute, `None` for non-`<input>` controls
    pub fn input_type(self) -> Option<&'static str> {
        match self {
            InputKind::Text => Some("text"),
            InputKind::Email => Some("email"),
            InputKind::Tel => Some("tel"),
            InputKind::Date => Some("date"),
            InputKind::Select => None,
        }
    }
}

/// One field of the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub rules: &'static [Rule],
    /// Offered choices for select inputs. A UI convenience only; the
    /// server does not restrict values to this list.
    #[serde(skip_serializing_if = "no_choices")]
    pub choices: &'static [&'static str],
}

fn no_choices(choices: &&'static [&'static str]) -> bool {
    choices.is_empty()
}

impl FieldSpec {
    /// Runs every rule of this field against `value`
    pub fn check(&self, value: &str, now: DateTime<Utc>) -> Vec<Violation> {
        self.rules
            .iter()
            .filter_map(|rule| rule.check(value, now).err())
            .map(|message| Violation::new(self.name, message))
            .collect()
    }

    /// JSON rule list for the `data-validate` attribute
    pub fn client_rules(&self) -> String {
        serde_json::to_string(self.rules).unwrap_or_else(|_| "[]".to_string())
    }

    /// HTML5 attributes for the field's control, in a stable order
    pub fn html5_attrs(&self, now: DateTime<Utc>) -> Vec<(&'static str, String)> {
        let mut attrs: Vec<(&'static str, String)> = Vec::new();

        if let Some(input_type) = self.kind.input_type() {
            attrs.push(("type", input_type.to_string()));
        }

        for (key, value) in self.rules.iter().flat_map(|rule| rule.html5_attrs(now)) {
            if !attrs.iter().any(|(existing, _)| *existing == key) {
                attrs.push((key, value));
            }
        }

        attrs
    }
}

const fn required(message: &'static str) -> Rule {
    Rule::MinLength {
        min: 1,
        message: Cow::Borrowed(message),
    }
}

const fn digits(min: usize, max: usize, message: &'static str) -> Rule {
    Rule::Digits {
        min,
        max,
        message: Cow::Borrowed(message),
    }
}

/// Department choices the form offers
pub const DEPARTMENTS: &[&str] = &["HR", "Engineering", "Marketing"];

static CONTRACT: [FieldSpec; 9] = [
    FieldSpec {
        name: fields::FIRSTNAME,
        label: "First Name",
        kind: InputKind::Text,
        rules: &[required("First name is required")],
        choices: &[],
    },
    FieldSpec {
        name: fields::LASTNAME,
        label: "Last Name",
        kind: InputKind::Text,
        rules: &[required("Last name is required")],
        choices: &[],
    },
    FieldSpec {
        name: fields::EMPLOYEE_ID,
        label: "Employee ID",
        kind: InputKind::Text,
        rules: &[digits(3, 3, "Invalid format")],
        choices: &[],
    },
    FieldSpec {
        name: fields::EMAIL,
        label: "Email",
        kind: InputKind::Email,
        rules: &[Rule::Email {
            message: Cow::Borrowed("Invalid email format"),
        }],
        choices: &[],
    },
    FieldSpec {
        name: fields::PHONE,
        label: "Phone",
        kind: InputKind::Tel,
        rules: &[digits(10, 10, "Must be 10 digits")],
        choices: &[],
    },
    FieldSpec {
        name: fields::DEPARTMENT,
        label: "Department",
        kind: InputKind::Select,
        rules: &[required("Department is required")],
        choices: DEPARTMENTS,
    },
    FieldSpec {
        name: fields::DATE_OF_JOINING,
        label: "Date of Joining",
        kind: InputKind::Date,
        rules: &[Rule::NotFuture {
            message: Cow::Borrowed("Cannot be a future date"),
        }],
        choices: &[],
    },
    FieldSpec {
        name: fields::ROLE,
        label: "Role",
        kind: InputKind::Text,
        rules: &[required("Role is required")],
        choices: &[],
    },
    FieldSpec {
        name: fields::SALARY,
        label: "Salary",
        kind: InputKind::Text,
        rules: &[digits(1, 10, "Can be 10 digits")],
        choices: &[],
    },
];

/// The full contract, in form order
pub fn contract() -> &'static [FieldSpec] {
    &CONTRACT
}

/// Looks up a field by its wire name
pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    CONTRACT.iter().find(|spec| spec.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_contract_covers_nine_fields() {
        let names: Vec<&str> = contract().iter().map(|spec| spec.name).collect();
        assert_eq!(
            names,
            vec![
                "firstname",
                "lastname",
                "employeeId",
                "email",
                "phone",
                "department",
                "dateOfJoining",
                "role",
                "salary",
            ]
        );
    }

    #[test]
    fn test_client_rules_json() {
        let spec = field_spec("employeeId").unwrap();
        assert_eq!(
            spec.client_rules(),
            r#"[{"rule":"digits","min":3,"max":3,"message":"Invalid format"}]"#
        );
    }

    #[test]
    fn test_client_rules_deserialize_back() {
        for spec in contract() {
            let parsed: Vec<Rule> = serde_json::from_str(&spec.client_rules()).unwrap();
            assert_eq!(parsed.as_slice(), spec.rules);
        }
    }

    #[test]
    fn test_html5_attrs_for_digits() {
        let attrs = field_spec("phone").unwrap().html5_attrs(now());
        assert_eq!(
            attrs,
            vec![
                ("type", "tel".to_string()),
                ("required", String::new()),
                ("pattern", r"\d{10}".to_string()),
                ("maxlength", "10".to_string()),
                ("inputmode", "numeric".to_string()),
            ]
        );
    }

    #[test]
    fn test_html5_attrs_for_date() {
        let attrs = field_spec("dateOfJoining").unwrap().html5_attrs(now());
        assert!(attrs.contains(&("type", "date".to_string())));
        assert!(attrs.contains(&("max", "2024-06-15".to_string())));
    }

    #[test]
    fn test_select_has_no_type() {
        let spec = field_spec("department").unwrap();
        assert!(spec.html5_attrs(now()).iter().all(|(k, _)| *k != "type"));
        assert_eq!(spec.choices, &["HR", "Engineering", "Marketing"]);
    }

    #[test]
    fn test_min_length_fails_with_rule_message() {
        let rule = Rule::MinLength {
            min: 2,
            message: Cow::Borrowed("Too short"),
        };
        assert_eq!(rule.check("é", now()), Err("Too short".to_string()));
        assert_eq!(rule.check("éé", now()), Ok(()));
    }

    #[test]
    fn test_department_not_restricted_to_choices() {
        let spec = field_spec("department").unwrap();
        assert!(spec.check("Finance", now()).is_empty());
        assert_eq!(spec.check("", now()).len(), 1);
    }

    #[test]
    fn test_contract_serializes_choices_only_when_present() {
        let json = serde_json::to_value(contract()).unwrap();
        assert!(json[5].get("choices").is_some());
        assert!(json[0].get("choices").is_none());
        assert_eq!(json[3]["kind"], "email");
    }
}
