//! HTTP API module for the Benefits Engine.
//!
//! This module provides the read-only REST endpoints over the employee
//! roster and the paycheck calculation, plus their OpenAPI document and
//! Swagger UI.

mod handlers;
mod response;
mod state;

pub use handlers::{create_router, ApiDoc, OPENAPI_JSON_PATH, SWAGGER_UI_PATH};
pub use response::{
    ApiErrorResponse, ApiResponse, DependentListResponse, DependentResponse,
    EmployeeListResponse, EmployeeResponse, PaycheckResponse, DEPENDENT_NOT_FOUND,
    EMPLOYEE_NOT_FOUND,
};
pub use state::AppState;
