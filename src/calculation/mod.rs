//! Calculation logic for the payroll engine.
//!
//! This module contains the statutory deduction calculations: gross
//! salary aggregation, Provident Fund, Employee State Insurance,
//! professional tax, and Tax Deducted at Source under both regimes,
//! combined by the payslip computation.

mod esi;
mod gross_salary;
mod payroll;
mod professional_tax;
mod provident_fund;
mod tds;

pub use esi::calculate_esi;
pub use gross_salary::calculate_gross_salary;
pub use payroll::compute_payslip;
pub use professional_tax::calculate_professional_tax;
pub use provident_fund::calculate_provident_fund;
pub use tds::{TdsResult, calculate_tds};
