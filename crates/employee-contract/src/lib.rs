//! Employee Validation Contract
//!
//! One rule table describing what an acceptable employee record looks like.
//! The server enforces it before inserting a row, the WASM bindings enforce it
//! in the browser, and the form page renders its inputs from it. None of those
//! sites carries its own copy of the rules.
//!
//! ```
//! use chrono::Utc;
//! use employee_contract::validate;
//!
//! let candidate = serde_json::json!({
//!     "firstname": "Ann", "lastname": "Lee", "employeeId": "007",
//!     "email": "ann@x.com", "phone": "1234567890", "department": "HR",
//!     "dateOfJoining": "2020-01-01", "role": "Clerk", "salary": "50000"
//! });
//! let record = validate(candidate.as_object().unwrap(), Utc::now()).unwrap();
//! assert_eq!(record.employee_id, "007");
//! ```

pub mod date;
pub mod email;
pub mod record;
pub mod rules;
pub mod string;

pub use record::{fields, ValidatedEmployee, Violation};
pub use rules::{contract, field_spec, FieldSpec, InputKind, Rule};

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};

/// Message for a field that is missing or `null`
pub const REQUIRED: &str = "Required";

/// Message for a field that is present but not text
pub const EXPECTED_STRING: &str = "Expected string";

/// Validates a candidate record against the contract.
///
/// Every field of the contract is checked, in contract order, so the
/// returned violations list every problem at once. Unknown keys are ignored.
/// `now` is the moment the joining date must not exceed.
pub fn validate(
    candidate: &Map<String, Value>,
    now: DateTime<Utc>,
) -> Result<ValidatedEmployee, Vec<Violation>> {
    let mut violations = Vec::new();

    for spec in contract() {
        match candidate.get(spec.name) {
            None | Some(Value::Null) => violations.push(Violation::new(spec.name, REQUIRED)),
            Some(Value::String(value)) => violations.extend(spec.check(value, now)),
            Some(_) => violations.push(Violation::new(spec.name, EXPECTED_STRING)),
        }
    }

    if !violations.is_empty() {
        return Err(violations);
    }

    let text = |name: &str| {
        candidate
            .get(name)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let raw_date = text(fields::DATE_OF_JOINING);
    let Some(date_of_joining) = date::parse_joining_date(&raw_date) else {
        return Err(vec![Violation::new(fields::DATE_OF_JOINING, date::INVALID_DATE)]);
    };

    Ok(ValidatedEmployee {
        firstname: text(fields::FIRSTNAME),
        lastname: text(fields::LASTNAME),
        employee_id: text(fields::EMPLOYEE_ID),
        email: text(fields::EMAIL),
        phone: text(fields::PHONE),
        department: text(fields::DEPARTMENT),
        date_of_joining,
        role: text(fields::ROLE),
        salary: text(fields::SALARY),
    })
}

/// Validates a single field value, for inline feedback while a form is filled.
///
/// Unknown field names produce no violations.
pub fn validate_field(name: &str, value: &str, now: DateTime<Utc>) -> Vec<Violation> {
    field_spec(name)
        .map(|spec| spec.check(value, now))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn ann() -> Map<String, Value> {
        json!({
            "firstname": "Ann",
            "lastname": "Lee",
            "employeeId": "007",
            "email": "ann@x.com",
            "phone": "1234567890",
            "department": "HR",
            "dateOfJoining": "2020-01-01",
            "role": "Clerk",
            "salary": "50000"
        })
        .as_object()
        .unwrap()
        .clone()
    }

    fn with(field: &str, value: Value) -> Map<String, Value> {
        let mut candidate = ann();
        candidate.insert(field.to_string(), value);
        candidate
    }

    fn violated_fields(result: Result<ValidatedEmployee, Vec<Violation>>) -> Vec<String> {
        result
            .unwrap_err()
            .into_iter()
            .map(|v| v.field)
            .collect()
    }

    #[test]
    fn test_valid_record_is_normalized() {
        let record = validate(&ann(), now()).unwrap();

        assert_eq!(record.firstname, "Ann");
        assert_eq!(record.employee_id, "007");
        assert_eq!(record.salary, "50000");
        assert_eq!(
            record.date_of_joining,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap()
        );
    }

    #[rstest]
    #[case("7")]
    #[case("12")]
    #[case("1234")]
    #[case("abc")]
    #[case("")]
    #[case("12a")]
    fn test_employee_id_rejected(#[case] id: &str) {
        let result = validate(&with(fields::EMPLOYEE_ID, json!(id)), now());
        assert_eq!(violated_fields(result), vec!["employeeId"]);
    }

    #[rstest]
    #[case("123456789")]
    #[case("12345678901")]
    #[case("123456789a")]
    #[case("")]
    fn test_phone_rejected(#[case] phone: &str) {
        let result = validate(&with(fields::PHONE, json!(phone)), now());
        assert_eq!(violated_fields(result), vec!["phone"]);
    }

    #[test]
    fn test_future_date_rejected() {
        let result = validate(&with(fields::DATE_OF_JOINING, json!("2024-06-16")), now());
        let violations = result.unwrap_err();
        assert_eq!(
            violations,
            vec![Violation::new("dateOfJoining", "Cannot be a future date")]
        );
    }

    #[test]
    fn test_today_is_accepted() {
        assert!(validate(&with(fields::DATE_OF_JOINING, json!("2024-06-15")), now()).is_ok());
    }

    #[test]
    fn test_unparseable_date_rejected() {
        let violations = validate(&with(fields::DATE_OF_JOINING, json!("soon")), now()).unwrap_err();
        assert_eq!(violations, vec![Violation::new("dateOfJoining", "Invalid date")]);
    }

    #[test]
    fn test_empty_object_reports_every_field_in_order() {
        let violations = validate(&Map::new(), now()).unwrap_err();
        let names: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();

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
        assert!(violations.iter().all(|v| v.message == REQUIRED));
    }

    #[test]
    fn test_non_string_value_rejected() {
        let violations = validate(&with(fields::SALARY, json!(50000)), now()).unwrap_err();
        assert_eq!(violations, vec![Violation::new("salary", EXPECTED_STRING)]);
    }

    #[test]
    fn test_null_treated_as_missing() {
        let violations = validate(&with(fields::ROLE, Value::Null), now()).unwrap_err();
        assert_eq!(violations, vec![Violation::new("role", REQUIRED)]);
    }

    #[test]
    fn test_several_violations_collected() {
        let mut candidate = with(fields::EMAIL, json!("not-an-email"));
        candidate.insert("firstname".into(), json!(""));
        candidate.insert("salary".into(), json!("12345678901"));

        let result = validate(&candidate, now());
        assert_eq!(violated_fields(result), vec!["firstname", "email", "salary"]);
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let candidate = with("nickname", json!(42));
        assert!(validate(&candidate, now()).is_ok());
    }

    #[test]
    fn test_validate_field() {
        assert!(validate_field("employeeId", "123", now()).is_empty());
        assert_eq!(
            validate_field("employeeId", "12", now()),
            vec![Violation::new("employeeId", "Invalid format")]
        );
        assert!(validate_field("unknown", "", now()).is_empty());
    }
}
