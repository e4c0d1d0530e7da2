//! Core data models for the payroll engine.
//!
//! This module contains all the domain models used throughout the engine.

mod employee;
mod payroll_request;
mod payslip;
mod user;

pub use employee::{BankDetails, Employee, NewEmployee, SalaryStructure};
pub use payroll_request::{PayrollRequest, TaxRegime};
pub use payslip::{Deductions, Earnings, Payslip, PayslipStatus};
pub use user::{AuthenticatedUser, User};
