//! Employee model and related types.
//!
//! This module defines the [`Employee`] struct, its monthly
//! [`SalaryStructure`], and the [`NewEmployee`] payload used when creating
//! or updating employee records.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The monthly salary components of an employee.
///
/// All amounts are monthly, in rupees. The calculator treats the structure
/// as immutable: gross salary is always the sum of these five components.
///
/// # Example
///
/// ```
/// use payroll_engine::models::SalaryStructure;
/// use rust_decimal::Decimal;
///
/// let salary = SalaryStructure {
///     basic: Decimal::from(50000),
///     hra: Decimal::from(20000),
///     conveyance_allowance: Decimal::from(5000),
///     special_allowance: Decimal::from(15000),
///     medical_allowance: Decimal::from(2000),
/// };
/// assert!(salary.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryStructure {
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

impl SalaryStructure {
    /// Validates that every component is non-negative.
    ///
    /// The calculator itself trusts its precondition contract, so callers
    /// must validate salary data at the boundary before computing pay.
    pub fn validate(&self) -> EngineResult<()> {
        let components = [
            ("basic", self.basic),
            ("hra", self.hra),
            ("conveyance_allowance", self.conveyance_allowance),
            ("special_allowance", self.special_allowance),
            ("medical_allowance", self.medical_allowance),
        ];

        for (field, amount) in components {
            if amount < Decimal::ZERO {
                return Err(EngineError::InvalidInput {
                    field: field.to_string(),
                    message: "salary component must be non-negative".to_string(),
                });
            }
        }

        Ok(())
    }
}

/// Bank account details for salary disbursement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankDetails {
    /// The bank account number.
    pub account_number: String,
    /// The IFSC code of the branch.
    pub ifsc_code: String,
    /// The name of the bank.
    pub bank_name: String,
}

/// Represents an employee subject to payroll processing.
///
/// The employee record is read-only from the calculator's perspective; it
/// is owned and mutated by the employee store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee (e.g., "EMP001").
    pub id: String,
    /// The employee's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Permanent Account Number for tax reporting.
    pub pan: String,
    /// Bank account details for salary disbursement.
    pub bank_details: BankDetails,
    /// Job title (e.g., "Software Engineer").
    pub designation: String,
    /// Department the employee belongs to.
    pub department: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// The employee's monthly salary structure.
    pub salary: SalaryStructure,
}

/// The attributes of an employee record, without the store-assigned id.
///
/// Used both when creating a new employee and when replacing the details
/// of an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewEmployee {
    /// The employee's full name.
    pub name: String,
    /// Contact email address.
    pub email: String,
    /// Contact phone number.
    pub phone: String,
    /// Permanent Account Number for tax reporting.
    pub pan: String,
    /// Bank account details for salary disbursement.
    pub bank_details: BankDetails,
    /// Job title.
    pub designation: String,
    /// Department the employee belongs to.
    pub department: String,
    /// The date the employee joined.
    pub joining_date: NaiveDate,
    /// The employee's monthly salary structure.
    pub salary: SalaryStructure,
}

impl NewEmployee {
    /// Attaches a store-assigned id, producing a full employee record.
    pub fn with_id(self, id: String) -> Employee {
        Employee {
            id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            pan: self.pan,
            bank_details: self.bank_details,
            designation: self.designation,
            department: self.department,
            joining_date: self.joining_date,
            salary: self.salary,
        }
    }
}
