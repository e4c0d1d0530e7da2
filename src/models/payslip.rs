//! Payslip models for the payroll engine.
//!
//! This module contains the [`Payslip`] type and its associated earnings
//! and deduction breakdowns, the sole output of a payroll run.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::TaxRegime;

/// The earnings side of a payslip.
///
/// Mirrors the employee's salary structure, plus the derived gross salary.
/// The invariant `gross_salary == basic + hra + conveyance_allowance +
/// special_allowance + medical_allowance` holds for every payslip the
/// engine produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Earnings {
    /// The basic salary component.
    pub basic: Decimal,
    /// House rent allowance.
    pub hra: Decimal,
    /// Conveyance allowance.
    pub conveyance_allowance: Decimal,
    /// Special allowance.
    pub special_allowance: Decimal,
    /// Medical allowance.
    pub medical_allowance: Decimal,
    /// The sum of the five earnings components.
    pub gross_salary: Decimal,
}

/// The statutory deductions side of a payslip.
///
/// The invariant `total_deductions == pf + esi + professional_tax + tds`
/// holds for every payslip the engine produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deductions {
    /// Employee Provident Fund contribution.
    pub pf: Decimal,
    /// Employee State Insurance contribution.
    pub esi: Decimal,
    /// Professional tax.
    pub professional_tax: Decimal,
    /// Monthly Tax Deducted at Source.
    pub tds: Decimal,
    /// The sum of the four deduction components.
    pub total_deductions: Decimal,
}

/// The processing status of a payslip.
///
/// The engine only ever emits [`PayslipStatus::Processed`]; the variant
/// exists so consuming systems can extend the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PayslipStatus {
    /// The payslip has been computed.
    Processed,
}

/// The complete output of a payroll run for one employee and period.
///
/// A payslip is a value: the engine never mutates one after creation, and
/// reprocessing the same (employee, month, year) triple yields a new value
/// with the same derived id. Net salary is intentionally not clamped at
/// zero and may go negative when deductions exceed gross salary.
///
/// # Example
///
/// ```
/// use payroll_engine::models::Payslip;
///
/// let id = Payslip::derive_id("EMP001", 4, 2026);
/// assert_eq!(id, "PAY-EMP001-4-2026");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Deterministic id derived from employee, month, and year.
    pub id: String,
    /// The id of the employee this payslip belongs to.
    pub employee_id: String,
    /// The employee's name at processing time.
    pub employee_name: String,
    /// The pay period month (1-12).
    pub month: u32,
    /// The pay period year.
    pub year: i32,
    /// The earnings breakdown.
    pub earnings: Earnings,
    /// The deductions breakdown.
    pub deductions: Deductions,
    /// Gross salary minus total deductions.
    pub net_salary: Decimal,
    /// The tax regime the TDS was computed under.
    pub tax_regime: TaxRegime,
    /// When the payslip was computed.
    pub processed_date: DateTime<Utc>,
    /// The processing status.
    pub status: PayslipStatus,
}

impl Payslip {
    /// Derives the deterministic payslip id for a pay period.
    ///
    /// Two runs for the same (employee, month, year) triple produce the
    /// same id; collision handling is the payslip store's concern.
    pub fn derive_id(employee_id: &str, month: u32, year: i32) -> String {
        format!("PAY-{}-{}-{}", employee_id, month, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_payslip() -> Payslip {
        Payslip {
            id: Payslip::derive_id("EMP001", 4, 2026),
            employee_id: "EMP001".to_string(),
            employee_name: "Ankit Patel".to_string(),
            month: 4,
            year: 2026,
            earnings: Earnings {
                basic: dec("50000"),
                hra: dec("20000"),
                conveyance_allowance: dec("5000"),
                special_allowance: dec("15000"),
                medical_allowance: dec("2000"),
                gross_salary: dec("92000"),
            },
            deductions: Deductions {
                pf: dec("1800"),
                esi: dec("0"),
                professional_tax: dec("300"),
                tds: dec("11975"),
                total_deductions: dec("14075"),
            },
            net_salary: dec("77925"),
            tax_regime: TaxRegime::Old,
            processed_date: Utc.with_ymd_and_hms(2026, 4, 30, 12, 0, 0).unwrap(),
            status: PayslipStatus::Processed,
        }
    }

    #[test]
    fn test_derive_id_format() {
        assert_eq!(Payslip::derive_id("EMP001", 4, 2026), "PAY-EMP001-4-2026");
        assert_eq!(Payslip::derive_id("EMP042", 12, 2025), "PAY-EMP042-12-2025");
    }

    #[test]
    fn test_derive_id_is_deterministic() {
        assert_eq!(
            Payslip::derive_id("EMP001", 4, 2026),
            Payslip::derive_id("EMP001", 4, 2026)
        );
    }

    #[test]
    fn test_status_serializes_as_processed() {
        assert_eq!(
            serde_json::to_string(&PayslipStatus::Processed).unwrap(),
            "\"Processed\""
        );
    }

    #[test]
    fn test_serialize_payslip_round_trip() {
        let payslip = create_test_payslip();
        let json = serde_json::to_string(&payslip).unwrap();
        let deserialized: Payslip = serde_json::from_str(&json).unwrap();
        assert_eq!(payslip, deserialized);
    }

    #[test]
    fn test_payslip_json_shape() {
        let payslip = create_test_payslip();
        let value = serde_json::to_value(&payslip).unwrap();

        assert_eq!(value["id"], "PAY-EMP001-4-2026");
        assert_eq!(value["earnings"]["gross_salary"], "92000");
        assert_eq!(value["deductions"]["total_deductions"], "14075");
        assert_eq!(value["net_salary"], "77925");
        assert_eq!(value["tax_regime"], "old");
        assert_eq!(value["status"], "Processed");
    }
}
