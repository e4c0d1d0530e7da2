//! Request types for the payroll engine API.
//!
//! This module defines the JSON request structures for the API endpoints
//! and their conversions into domain types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::{NewExemptionRule, RegimeApplicability};
use crate::models::{BankDetails, NewEmployee, PayrollRequest, SalaryStructure, TaxRegime};

/// Request body for the `POST /login` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// The username to authenticate.
    pub username: String,
    /// The password to check.
    pub password: String,
}

/// Employee details in a create or update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// The employee's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Permanent Account Number for tax reporting.
    pub pan: String,
    /// Bank account details for salary disbursement.
    pub bank_details: BankDetailsRequest,
    /// Job title.
    pub designation: String,
    /// Department the employee belongs to.
    pub department: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// The employee's monthly salary structure.
    pub salary: SalaryStructureRequest,
}

/// Bank details in an employee request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BankDetailsRequest {
    /// The bank account number.
    pub account_number: String,
    /// The IFSC code of the branch.
    pub ifsc_code: String,
    /// The name of the bank.
    pub bank_name: String,
}

/// Salary components in an employee request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryStructureRequest {
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
}

/// Exemption rule details in a create or update request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExemptionRequest {
    /// The display name of the rule.
    pub name: String,
    /// A description of what the exemption covers.
    pub description: String,
    /// The maximum claimable amount, or `None` if uncapped.
    #[serde(default)]
    pub max_limit: Option<Decimal>,
    /// Which tax regime the rule applies under.
    pub applicable: RegimeApplicability,
}

/// Request body for the `POST /payroll/process` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayrollProcessRequest {
    /// The id of the employee to run payroll for.
    pub employee_id: String,
    /// The pay period month (1-12).
    pub month: u32,
    /// The pay period year.
    pub year: i32,
    /// The tax regime to compute TDS under.
    pub tax_regime: TaxRegime,
    /// Total annual exemption amount subtracted before slab lookup.
    pub exemptions: Decimal,
}

/// Query parameters for the `GET /payslips` endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct PayslipListQuery {
    /// Restrict the listing to one employee's payslips.
    #[serde(default)]
    pub employee_id: Option<String>,
}

impl From<BankDetailsRequest> for BankDetails {
    fn from(req: BankDetailsRequest) -> Self {
        BankDetails {
            account_number: req.account_number,
            ifsc_code: req.ifsc_code,
            bank_name: req.bank_name,
        }
    }
}

impl From<SalaryStructureRequest> for SalaryStructure {
    fn from(req: SalaryStructureRequest) -> Self {
        SalaryStructure {
            basic: req.basic,
            hra: req.hra,
            conveyance_allowance: req.conveyance_allowance,
            special_allowance: req.special_allowance,
            medical_allowance: req.medical_allowance,
        }
    }
}

impl From<EmployeeRequest> for NewEmployee {
    fn from(req: EmployeeRequest) -> Self {
        NewEmployee {
            name: req.name,
            email: req.email,
            phone: req.phone,
            pan: req.pan,
            bank_details: req.bank_details.into(),
            designation: req.designation,
            department: req.department,
            joining_date: req.joining_date,
            salary: req.salary.into(),
        }
    }
}

impl From<ExemptionRequest> for NewExemptionRule {
    fn from(req: ExemptionRequest) -> Self {
        NewExemptionRule {
            name: req.name,
            description: req.description,
            max_limit: req.max_limit,
            applicable: req.applicable,
        }
    }
}

impl From<PayrollProcessRequest> for PayrollRequest {
    fn from(req: PayrollProcessRequest) -> Self {
        PayrollRequest {
            employee_id: req.employee_id,
            month: req.month,
            year: req.year,
            tax_regime: req.tax_regime,
            exemptions: req.exemptions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_payroll_process_request() {
        let json = r#"{
            "employee_id": "EMP001",
            "month": 4,
            "year": 2026,
            "tax_regime": "old",
            "exemptions": "150000"
        }"#;

        let request: PayrollProcessRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee_id, "EMP001");
        assert_eq!(request.tax_regime, TaxRegime::Old);
        assert_eq!(request.exemptions, Decimal::from(150000));
    }

    #[test]
    fn test_deserialize_employee_request() {
        let json = r#"{
            "name": "New Hire",
            "email": "new.hire@example.com",
            "phone": "9876543213",
            "pan": "QRSTU3456V",
            "bank_details": {
                "account_number": "1111222233",
                "ifsc_code": "AXIS0001234",
                "bank_name": "Axis Bank"
            },
            "designation": "Analyst",
            "department": "Finance",
            "joining_date": "2026-02-01",
            "salary": {
                "basic": "30000",
                "hra": "12000",
                "conveyance_allowance": "3000",
                "special_allowance": "8000",
                "medical_allowance": "1500"
            }
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        let employee: NewEmployee = request.into();
        assert_eq!(employee.name, "New Hire");
        assert_eq!(employee.salary.basic, Decimal::from(30000));
        assert_eq!(employee.bank_details.bank_name, "Axis Bank");
    }

    #[test]
    fn test_exemption_request_defaults_max_limit() {
        let json = r#"{
            "name": "HRA Exemption",
            "description": "House Rent Allowance",
            "applicable": "old"
        }"#;

        let request: ExemptionRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.max_limit, None);
    }

    #[test]
    fn test_payroll_request_conversion() {
        let api_request = PayrollProcessRequest {
            employee_id: "EMP001".to_string(),
            month: 4,
            year: 2026,
            tax_regime: TaxRegime::New,
            exemptions: Decimal::from(50000),
        };

        let domain: PayrollRequest = api_request.into();
        assert_eq!(domain.employee_id, "EMP001");
        assert_eq!(domain.tax_regime, TaxRegime::New);
    }
}
