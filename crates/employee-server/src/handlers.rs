// File: src/handlers.rs
// Purpose: HTTP handlers for the record endpoint and its companions

use crate::database::{self, Employee};
use crate::error::ApiError;
use crate::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, StatusCode},
    response::Json,
};
use chrono::Utc;
use employee_contract::FieldSpec;
use serde::Serialize;
use serde_json::{Map, Value as JsonValue};
use tracing::info;

pub const CREATED_MESSAGE: &str = "Employee added successfully";

/// Response for POST /api/employeeadd
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreated {
    pub message: &'static str,
    pub new_employee: Employee,
}

/// Turn a request body into a candidate record.
///
/// Form-encoded bodies become text fields. Anything else is read as JSON;
/// a body that is not a JSON object yields an empty candidate, which then
/// fails every field of the contract.
pub fn parse_candidate(headers: &HeaderMap, body: &[u8]) -> Map<String, JsonValue> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|ct| ct.to_str().ok())
        .unwrap_or_default();

    if content_type.contains("application/x-www-form-urlencoded") {
        let form_str = String::from_utf8_lossy(body);
        return form_str
            .split('&')
            .filter_map(|pair| {
                pair.split_once('=').map(|(k, v)| {
                    (
                        decode_form_component(k),
                        JsonValue::String(decode_form_component(v)),
                    )
                })
            })
            .collect();
    }

    match serde_json::from_slice::<JsonValue>(body) {
        Ok(JsonValue::Object(map)) => map,
        _ => Map::new(),
    }
}

fn decode_form_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(|s| s.into_owned())
        .unwrap_or(spaced)
}

/// POST /api/employeeadd
///
/// Validate, then insert exactly one row.
pub async fn add_employee(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<EmployeeCreated>), ApiError> {
    let candidate = parse_candidate(&headers, &body);

    let record = employee_contract::validate(&candidate, Utc::now()).map_err(ApiError::Validation)?;

    let employee = database::create_employee(&state.db, record).await?;
    info!(id = employee.id, employee_id = %employee.employee_id, "Employee added");

    Ok((
        StatusCode::CREATED,
        Json(EmployeeCreated {
            message: CREATED_MESSAGE,
            new_employee: employee,
        }),
    ))
}

/// GET /api/contract
pub async fn contract_rules() -> Json<&'static [FieldSpec]> {
    Json(employee_contract::contract())
}

/// GET /health
pub async fn health() -> Json<JsonValue> {
    Json(serde_json::json!({ "status": "ok" }))
}
