//! In-memory stores backing the payroll engine.
//!
//! These stores stand in for a database: thread-safe collections seeded
//! with fixtures and injected through the application state, so the
//! calculator and the API can be tested against arbitrary data.

mod employees;
mod exemptions;
mod payslips;
mod users;

pub use employees::EmployeeStore;
pub use exemptions::ExemptionStore;
pub use payslips::PayslipStore;
pub use users::UserStore;
