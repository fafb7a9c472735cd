//! Record and violation types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Wire names of the employee record fields
pub mod fields {
    pub const FIRSTNAME: &str = "firstname";
    pub const LASTNAME: &str = "lastname";
    pub const EMPLOYEE_ID: &str = "employeeId";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const DEPARTMENT: &str = "department";
    pub const DATE_OF_JOINING: &str = "dateOfJoining";
    pub const ROLE: &str = "role";
    pub const SALARY: &str = "salary";
}

/// A single reason a candidate record failed the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// A candidate record that passed the contract.
///
/// Everything stays text except the joining date, which is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedEmployee {
    pub firstname: String,
    pub lastname: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub date_of_joining: DateTime<Utc>,
    pub role: String,
    pub salary: String,
}
