//! Employee Contract WASM
//!
//! WebAssembly bindings for the employee validation contract.
//! The form page loads this module so the browser checks a record with the
//! same rule table the server enforces.

use chrono::{DateTime, Utc};
use employee_contract as contract;
use employee_contract::{Rule, Violation};
use serde_json::{Map, Value};
use wasm_bindgen::prelude::*;

/// Set panic hook for better error messages in the browser
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Current moment according to the browser clock
fn browser_now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

fn to_js(violations: &[Violation]) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(violations).map_err(JsValue::from)
}

/// Validate a whole record
///
/// # Arguments
/// * `record` - JavaScript object mapping field names to values
///
/// # Returns
/// Array of `{ field, message }` (empty if valid)
///
/// # Example (JavaScript)
/// ```javascript
/// const errors = validateRecord({ firstname: 'Ann', employeeId: '7', ... });
/// // [{ field: 'employeeId', message: 'Invalid format' }, ...]
/// ```
#[wasm_bindgen(js_name = validateRecord)]
pub fn validate_record(record: JsValue) -> Result<JsValue, JsValue> {
    let candidate: Map<String, Value> = serde_wasm_bindgen::from_value(record)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse record: {}", e)))?;

    match contract::validate(&candidate, browser_now()) {
        Ok(_) => to_js(&[]),
        Err(violations) => {
            web_sys::console::debug_1(&JsValue::from_str(&format!(
                "record rejected: {} violation(s)",
                violations.len()
            )));
            to_js(&violations)
        }
    }
}

/// Validate one field by name against the contract
///
/// Public for scripts that know only the field name; the bundled form page
/// reads its rules from `data-validate` and uses `validateWithRules`.
#[wasm_bindgen(js_name = validateField)]
pub fn validate_field(field_name: &str, value: &str) -> Result<JsValue, JsValue> {
    to_js(&contract::validate_field(field_name, value, browser_now()))
}

/// Validate one value against rules read from a `data-validate` attribute
///
/// # Example (JavaScript)
/// ```javascript
/// const rules = JSON.parse(input.dataset.validate);
/// const errors = validateWithRules(input.name, input.value, rules);
/// ```
#[wasm_bindgen(js_name = validateWithRules)]
pub fn validate_with_rules(
    field_name: &str,
    value: &str,
    rules: JsValue,
) -> Result<JsValue, JsValue> {
    let rules: Vec<Rule> = serde_wasm_bindgen::from_value(rules)
        .map_err(|e| JsValue::from_str(&format!("Failed to parse rules: {}", e)))?;

    let now = browser_now();
    let violations: Vec<Violation> = rules
        .iter()
        .filter_map(|rule| rule.check(value, now).err())
        .map(|message| Violation::new(field_name, message))
        .collect();

    to_js(&violations)
}
