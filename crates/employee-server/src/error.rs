// File: src/error.rs
// Purpose: Two-tier API error (client-fixable violations vs. opaque server faults)

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use employee_contract::Violation;
use serde::Serialize;
use tracing::{error, warn};

/// Body of every 500 response; the cause stays in the server log
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The candidate record failed the contract
    #[error("validation failed for {} field(s)", .0.len())]
    Validation(Vec<Violation>),

    /// Anything else: storage unavailable, constraint violated, ...
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        ApiError::Internal(anyhow::Error::new(err).context("database operation failed"))
    }
}

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<Violation>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                let fields: Vec<&str> = errors.iter().map(|v| v.field.as_str()).collect();
                warn!(?fields, "Rejected employee record");

                (StatusCode::BAD_REQUEST, Json(ValidationBody { errors })).into_response()
            }
            ApiError::Internal(err) => {
                error!("Error adding employee: {:#}", err);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(ErrorBody {
                        error: INTERNAL_ERROR_MESSAGE,
                    }),
                )
                    .into_response()
            }
        }
    }
}
