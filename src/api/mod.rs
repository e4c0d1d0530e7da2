//! HTTP API module for the payroll engine.
//!
//! This module provides the REST API endpoints for login, employee and
//! exemption management, payroll runs, and payslip retrieval.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    EmployeeRequest, ExemptionRequest, LoginRequest, PayrollProcessRequest, PayslipListQuery,
};
pub use response::ApiError;
pub use state::AppState;
