//! Response types for the Benefits Engine API.
//!
//! Every endpoint answers with the same envelope, [`ApiResponse`]. Errors
//! are mapped to an HTTP status and a failed envelope in one place, the
//! `From<EngineError>` conversion for [`ApiErrorResponse`].

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::EngineError;
use crate::models::{Dependent, Employee, Paycheck};

/// Message returned when an employee id has no match.
pub const EMPLOYEE_NOT_FOUND: &str = "Employee not found";
/// Message returned when a dependent id has no match.
pub const DEPENDENT_NOT_FOUND: &str = "Dependent not found";

/// Response envelope shared by all endpoints.
///
/// `data` and `message` serialize as `null` when absent; all three keys are
/// always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[aliases(
    EmployeeResponse = ApiResponse<Employee>,
    EmployeeListResponse = ApiResponse<Vec<Employee>>,
    DependentResponse = ApiResponse<Dependent>,
    DependentListResponse = ApiResponse<Vec<Dependent>>,
    PaycheckResponse = ApiResponse<Paycheck>
)]
pub struct ApiResponse<T> {
    /// The payload, present on success.
    pub data: Option<T>,
    /// Whether the request succeeded.
    pub success: bool,
    /// Human-readable message, present on failure.
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Creates a successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            success: true,
            message: None,
        }
    }

    /// Creates a failed envelope with no data.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            data: None,
            success: false,
            message: Some(message.into()),
        }
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The failed envelope.
    pub body: ApiResponse<()>,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        match error {
            EngineError::EmployeeNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                body: ApiResponse::failure(EMPLOYEE_NOT_FOUND),
            },
            EngineError::DependentNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                body: ApiResponse::failure(DEPENDENT_NOT_FOUND),
            },
            EngineError::InvalidId { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                body: ApiResponse::failure(error.to_string()),
            },
            EngineError::ConfigNotFound { .. }
            | EngineError::ConfigParseError { .. }
            | EngineError::DuplicateEmployeeId { .. }
            | EngineError::DuplicateDependentId { .. }
            | EngineError::InvalidEmployee { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                body: ApiResponse::failure(format!("Configuration error: {}", error)),
            },
        }
    }
}
