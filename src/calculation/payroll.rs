//! Payslip computation.
//!
//! This module combines the four statutory deduction calculations into
//! the single payroll operation: given an employee, a validated payroll
//! request, and the statutory tables, produce a payslip.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::config::StatutoryConfig;
use crate::models::{Deductions, Earnings, Employee, PayrollRequest, Payslip, PayslipStatus};

use super::{
    calculate_esi, calculate_gross_salary, calculate_professional_tax, calculate_provident_fund,
    calculate_tds,
};

/// Number of pay periods in a year; TDS is annualized over this.
const MONTHS_PER_YEAR: u32 = 12;

/// Computes the payslip for one employee and pay period.
///
/// This is a total, pure function over its precondition domain: salary
/// components are finite non-negative amounts, the month is in 1-12, and
/// exemptions are non-negative. Callers validate at the boundary (see
/// [`PayrollRequest::validate`] and [`SalaryStructure::validate`]); the
/// calculator itself has no error paths and will propagate nonsensical
/// arithmetic for out-of-domain inputs rather than failing.
///
/// Net salary is not clamped at zero: when deductions exceed gross, the
/// payslip reports a negative net.
///
/// Calling this twice with identical arguments yields identical payslips;
/// `processed_at` is injected so even the timestamp is reproducible.
///
/// [`SalaryStructure::validate`]: crate::models::SalaryStructure::validate
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use payroll_engine::calculation::compute_payslip;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::{
///     BankDetails, Employee, PayrollRequest, SalaryStructure, TaxRegime,
/// };
/// use rust_decimal::Decimal;
///
/// # fn main() -> Result<(), payroll_engine::error::EngineError> {
/// let config = ConfigLoader::load("./config/india")?;
/// let employee = Employee {
///     id: "EMP001".to_string(),
///     name: "Ankit Patel".to_string(),
///     email: "ankit.patel@example.com".to_string(),
///     phone: "9876543210".to_string(),
///     pan: "ABCDE1234F".to_string(),
///     bank_details: BankDetails {
///         account_number: "1234567890".to_string(),
///         ifsc_code: "HDFC0001234".to_string(),
///         bank_name: "HDFC Bank".to_string(),
///     },
///     designation: "Software Engineer".to_string(),
///     department: "Engineering".to_string(),
///     joining_date: chrono::NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
///     salary: SalaryStructure {
///         basic: Decimal::from(50000),
///         hra: Decimal::from(20000),
///         conveyance_allowance: Decimal::from(5000),
///         special_allowance: Decimal::from(15000),
///         medical_allowance: Decimal::from(2000),
///     },
/// };
/// let request = PayrollRequest {
///     employee_id: "EMP001".to_string(),
///     month: 4,
///     year: 2026,
///     tax_regime: TaxRegime::Old,
///     exemptions: Decimal::ZERO,
/// };
///
/// let processed_at = Utc.with_ymd_and_hms(2026, 4, 30, 12, 0, 0).unwrap();
/// let payslip = compute_payslip(&employee, &request, config.statutory(), processed_at);
/// assert_eq!(payslip.net_salary, Decimal::from(77925));
/// # Ok(())
/// # }
/// ```
pub fn compute_payslip(
    employee: &Employee,
    request: &PayrollRequest,
    config: &StatutoryConfig,
    processed_at: DateTime<Utc>,
) -> Payslip {
    let salary = &employee.salary;
    let gross_salary = calculate_gross_salary(salary);

    let pf = calculate_provident_fund(salary.basic, &config.provident_fund);
    let esi = calculate_esi(gross_salary, &config.esi);
    let professional_tax = calculate_professional_tax(gross_salary, &config.professional_tax);

    let annual_gross = gross_salary * Decimal::from(MONTHS_PER_YEAR);
    let tds = calculate_tds(annual_gross, request.exemptions, request.tax_regime, &config.tds);

    let total_deductions = pf + esi + professional_tax + tds.monthly_tds;
    let net_salary = gross_salary - total_deductions;

    Payslip {
        id: Payslip::derive_id(&employee.id, request.month, request.year),
        employee_id: employee.id.clone(),
        employee_name: employee.name.clone(),
        month: request.month,
        year: request.year,
        earnings: Earnings {
            basic: salary.basic,
            hra: salary.hra,
            conveyance_allowance: salary.conveyance_allowance,
            special_allowance: salary.special_allowance,
            medical_allowance: salary.medical_allowance,
            gross_salary,
        },
        deductions: Deductions {
            pf,
            esi,
            professional_tax,
            tds: tds.monthly_tds,
            total_deductions,
        },
        net_salary,
        tax_regime: request.tax_regime,
        processed_date: processed_at,
        status: PayslipStatus::Processed,
    }
}
