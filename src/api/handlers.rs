//! HTTP request handlers for the Benefits Engine API.
//!
//! This module contains the handler functions for all API endpoints and
//! the OpenAPI document describing them.

use std::time::Instant;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use tracing::{info, warn};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;
use uuid::Uuid;

use crate::calculation::calculate_paycheck;
use crate::error::EngineError;
use crate::models::{Dependent, Employee, Paycheck, Relationship};

use super::response::{
    ApiErrorResponse, ApiResponse, DependentListResponse, DependentResponse,
    EmployeeListResponse, EmployeeResponse, PaycheckResponse,
};
use super::state::AppState;

type ApiResult<T> = Result<Json<ApiResponse<T>>, ApiErrorResponse>;

/// Path the generated OpenAPI document is served from.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";
/// Path the Swagger UI is served from.
pub const SWAGGER_UI_PATH: &str = "/swagger";

/// OpenAPI description of the roster and paycheck endpoints.
#[derive(OpenApi)]
#[openapi(
    paths(
        list_employees_handler,
        get_employee_handler,
        get_paycheck_handler,
        list_dependents_handler,
        get_dependent_handler
    ),
    components(schemas(
        Employee,
        Dependent,
        Relationship,
        Paycheck,
        EmployeeResponse,
        EmployeeListResponse,
        DependentResponse,
        DependentListResponse,
        PaycheckResponse
    )),
    tags(
        (name = "employees", description = "Employee roster and paychecks"),
        (name = "dependents", description = "Dependents covered by employees")
    )
)]
pub struct ApiDoc;

/// Creates the API router with all endpoints, the OpenAPI document and
/// the Swagger UI.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/api/v1/employees", get(list_employees_handler))
        .route("/api/v1/employees/:id", get(get_employee_handler))
        .route("/api/v1/employees/:id/paycheck", get(get_paycheck_handler))
        .route("/api/v1/dependents", get(list_dependents_handler))
        .route("/api/v1/dependents/:id", get(get_dependent_handler))
        .with_state(state)
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, ApiDoc::openapi()))
}

/// Parses a path segment as an id.
///
/// Axum's own `Path<i32>` rejection is plain text; parsing here keeps the
/// failure inside the response envelope.
fn parse_id(raw: &str, correlation_id: Uuid) -> Result<i32, ApiErrorResponse> {
    raw.parse::<i32>().map_err(|_| {
        warn!(correlation_id = %correlation_id, raw_id = raw, "Invalid id in path");
        EngineError::InvalidId {
            value: raw.to_string(),
        }
        .into()
    })
}

/// Get all employees
#[utoipa::path(
    get,
    path = "/api/v1/employees",
    tag = "employees",
    responses(
        (status = 200, description = "All employees", body = EmployeeListResponse)
    )
)]
async fn list_employees_handler(State(state): State<AppState>) -> ApiResult<Vec<Employee>> {
    let correlation_id = Uuid::new_v4();
    let employees = state.roster().list_employees().to_vec();
    info!(correlation_id = %correlation_id, count = employees.len(), "Listing employees");
    Ok(Json(ApiResponse::ok(employees)))
}

/// Get employee by id
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Employee found", body = EmployeeResponse),
        (status = 400, description = "Id is not a 32-bit integer"),
        (status = 404, description = "Employee not found")
    )
)]
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Employee> {
    let correlation_id = Uuid::new_v4();
    let id = parse_id(&raw_id, correlation_id)?;

    match state.roster().find_employee(id) {
        Some(employee) => {
            info!(correlation_id = %correlation_id, employee_id = id, "Employee found");
            Ok(Json(ApiResponse::ok(employee.clone())))
        }
        None => {
            warn!(correlation_id = %correlation_id, employee_id = id, "Employee not found");
            Err(EngineError::EmployeeNotFound { id }.into())
        }
    }
}

/// Get paycheck for employee by id
///
/// Looks the employee up and, when found, calculates one pay period's
/// paycheck as of the state's clock.
#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}/paycheck",
    tag = "employees",
    params(("id" = i32, Path, description = "Employee id")),
    responses(
        (status = 200, description = "Paycheck for one pay period", body = PaycheckResponse),
        (status = 400, description = "Id is not a 32-bit integer"),
        (status = 404, description = "Employee not found")
    )
)]
async fn get_paycheck_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Paycheck> {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing paycheck request");
    let id = parse_id(&raw_id, correlation_id)?;

    let Some(employee) = state.roster().find_employee(id) else {
        warn!(correlation_id = %correlation_id, employee_id = id, "Employee not found");
        return Err(EngineError::EmployeeNotFound { id }.into());
    };

    let start_time = Instant::now();
    let today = state.clock().today();
    let paycheck = calculate_paycheck(employee, state.cost_model(), today);
    let duration = start_time.elapsed();

    info!(
        correlation_id = %correlation_id,
        employee_id = id,
        dependents_count = employee.dependents.len(),
        as_of = %today,
        gross_pay = %paycheck.gross_pay,
        total_deductions = %paycheck.total_deductions,
        net_pay = %paycheck.net_pay,
        duration_us = duration.as_micros(),
        "Paycheck calculated"
    );

    Ok(Json(ApiResponse::ok(paycheck)))
}

/// Get all dependents
#[utoipa::path(
    get,
    path = "/api/v1/dependents",
    tag = "dependents",
    responses(
        (status = 200, description = "All dependents", body = DependentListResponse)
    )
)]
async fn list_dependents_handler(State(state): State<AppState>) -> ApiResult<Vec<Dependent>> {
    let correlation_id = Uuid::new_v4();
    let dependents: Vec<Dependent> = state
        .roster()
        .list_dependents()
        .into_iter()
        .cloned()
        .collect();
    info!(correlation_id = %correlation_id, count = dependents.len(), "Listing dependents");
    Ok(Json(ApiResponse::ok(dependents)))
}

/// Get dependent by id
#[utoipa::path(
    get,
    path = "/api/v1/dependents/{id}",
    tag = "dependents",
    params(("id" = i32, Path, description = "Dependent id")),
    responses(
        (status = 200, description = "Dependent found", body = DependentResponse),
        (status = 400, description = "Id is not a 32-bit integer"),
        (status = 404, description = "Dependent not found")
    )
)]
async fn get_dependent_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Dependent> {
    let correlation_id = Uuid::new_v4();
    let id = parse_id(&raw_id, correlation_id)?;

    match state.roster().find_dependent(id) {
        Some(dependent) => {
            info!(correlation_id = %correlation_id, dependent_id = id, "Dependent found");
            Ok(Json(ApiResponse::ok(dependent.clone())))
        }
        None => {
            warn!(correlation_id = %correlation_id, dependent_id = id, "Dependent not found");
            Err(EngineError::DependentNotFound { id }.into())
        }
    }
}
