//! HTTP request handlers for the payroll engine API.
//!
//! This module contains the handler functions for all API endpoints.

use axum::{
    Json, Router,
    extract::{Path, Query, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payslip;
use crate::config::ExemptionRule;
use crate::models::{AuthenticatedUser, Employee, NewEmployee, PayrollRequest, Payslip};

use super::request::{
    EmployeeRequest, ExemptionRequest, LoginRequest, PayrollProcessRequest, PayslipListQuery,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/login", post(login))
        .route(
            "/employees",
            get(list_employees).post(create_employee),
        )
        .route(
            "/employees/:id",
            get(get_employee).put(update_employee).delete(delete_employee),
        )
        .route(
            "/exemptions",
            get(list_exemptions).post(create_exemption),
        )
        .route(
            "/exemptions/:id",
            put(update_exemption).delete(delete_exemption),
        )
        .route("/payroll/process", post(process_payroll))
        .route("/payslips", get(list_payslips))
        .route("/payslips/:id", get(get_payslip))
        .with_state(state)
}

/// Handler for POST /login.
///
/// Checks the supplied credentials against the static user table.
async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthenticatedUser>, ApiErrorResponse> {
    match state.users().authenticate(&request.username, &request.password) {
        Ok(user) => {
            info!(username = %user.username, "Login succeeded");
            Ok(Json(user))
        }
        Err(err) => {
            warn!(username = %request.username, "Login failed");
            Err(err.into())
        }
    }
}

/// Handler for GET /employees.
async fn list_employees(State(state): State<AppState>) -> Json<Vec<Employee>> {
    Json(state.employees().list())
}

/// Handler for POST /employees.
async fn create_employee(
    State(state): State<AppState>,
    Json(request): Json<EmployeeRequest>,
) -> Result<(StatusCode, Json<Employee>), ApiErrorResponse> {
    let details: NewEmployee = request.into();
    details.salary.validate()?;

    let employee = state.employees().create(details);
    info!(employee_id = %employee.id, "Employee created");
    Ok((StatusCode::CREATED, Json(employee)))
}

/// Handler for GET /employees/{id}.
async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    Ok(Json(state.employees().get(&id)?))
}

/// Handler for PUT /employees/{id}.
async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<EmployeeRequest>,
) -> Result<Json<Employee>, ApiErrorResponse> {
    let details: NewEmployee = request.into();
    details.salary.validate()?;

    let employee = state.employees().update(&id, details)?;
    info!(employee_id = %employee.id, "Employee updated");
    Ok(Json(employee))
}

/// Handler for DELETE /employees/{id}.
async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.employees().delete(&id)?;
    info!(employee_id = %id, "Employee deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /exemptions.
async fn list_exemptions(State(state): State<AppState>) -> Json<Vec<ExemptionRule>> {
    Json(state.exemptions().list())
}

/// Handler for POST /exemptions.
async fn create_exemption(
    State(state): State<AppState>,
    Json(request): Json<ExemptionRequest>,
) -> (StatusCode, Json<ExemptionRule>) {
    let rule = state.exemptions().add(request.into());
    info!(exemption_id = %rule.id, "Exemption rule added");
    (StatusCode::CREATED, Json(rule))
}

/// Handler for PUT /exemptions/{id}.
async fn update_exemption(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<ExemptionRequest>,
) -> Result<Json<ExemptionRule>, ApiErrorResponse> {
    let rule = state.exemptions().update(&id, request.into())?;
    info!(exemption_id = %rule.id, "Exemption rule updated");
    Ok(Json(rule))
}

/// Handler for DELETE /exemptions/{id}.
async fn delete_exemption(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiErrorResponse> {
    state.exemptions().delete(&id)?;
    info!(exemption_id = %id, "Exemption rule deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Handler for POST /payroll/process.
///
/// Validates the request, looks up the employee, computes the payslip,
/// and upserts it into the payslip store.
async fn process_payroll(
    State(state): State<AppState>,
    payload: Result<Json<PayrollProcessRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payroll request");

    // Handle JSON parsing errors
    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
                    // Get the body text which contains the detailed error from serde
                    let body_text = err.body_text();
                    warn!(
                        correlation_id = %correlation_id,
                        error = %body_text,
                        "JSON data error"
                    );
                    // Check if it's a missing field error
                    if body_text.contains("missing field") {
                        ApiError::new("VALIDATION_ERROR", body_text)
                    } else {
                        ApiError::malformed_json(body_text)
                    }
                }
                JsonRejection::JsonSyntaxError(err) => {
                    warn!(
                        correlation_id = %correlation_id,
                        error = %err,
                        "JSON syntax error"
                    );
                    ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
                }
                JsonRejection::MissingJsonContentType(_) => {
                    ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
                }
                _ => ApiError::malformed_json("Failed to parse request body"),
            };
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    // Convert request types to domain types
    let request: PayrollRequest = request.into();

    // Validate at the boundary; the calculator trusts its preconditions
    if let Err(err) = request.validate() {
        warn!(
            correlation_id = %correlation_id,
            error = %err,
            "Invalid payroll request"
        );
        return ApiErrorResponse::from(err).into_response();
    }

    // Look up the employee
    let employee = match state.employees().get(&request.employee_id) {
        Ok(employee) => employee,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                employee_id = %request.employee_id,
                "Employee not found"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    // Perform the calculation and store the result
    let payslip = compute_payslip(
        &employee,
        &request,
        state.config().statutory(),
        state.clock().now(),
    );
    let stored = state.payslips().upsert(payslip);

    info!(
        correlation_id = %correlation_id,
        payslip_id = %stored.id,
        gross_salary = %stored.earnings.gross_salary,
        net_salary = %stored.net_salary,
        "Payroll processed successfully"
    );
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(stored),
    )
        .into_response()
}

/// Handler for GET /payslips.
///
/// Lists all processed payslips, optionally filtered to one employee.
async fn list_payslips(
    State(state): State<AppState>,
    Query(query): Query<PayslipListQuery>,
) -> Json<Vec<Payslip>> {
    let payslips = match query.employee_id {
        Some(employee_id) => state.payslips().for_employee(&employee_id),
        None => state.payslips().list(),
    };
    Json(payslips)
}

/// Handler for GET /payslips/{id}.
async fn get_payslip(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payslip>, ApiErrorResponse> {
    Ok(Json(state.payslips().get(&id)?))
}
