//! Payroll run request model.
//!
//! This module contains the [`PayrollRequest`] type describing a single
//! payroll run for one employee and pay period, and the [`TaxRegime`]
//! selection that drives the TDS slab lookup.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The income tax regime an employee has opted into.
///
/// The two regimes are mutually exclusive slab tables; the same taxable
/// income generally produces different TDS under each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaxRegime {
    /// The old regime: higher rates, exemption-friendly.
    Old,
    /// The new regime: more slabs, lower rates, fewer exemptions.
    New,
}

/// A request to run payroll for one employee and pay period.
///
/// The request is transient input to the calculator and is not persisted.
///
/// # Example
///
/// ```
/// use payroll_engine::models::{PayrollRequest, TaxRegime};
/// use rust_decimal::Decimal;
///
/// let request = PayrollRequest {
///     employee_id: "EMP001".to_string(),
///     month: 4,
///     year: 2026,
///     tax_regime: TaxRegime::Old,
///     exemptions: Decimal::from(150000),
/// };
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayrollRequest {
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

impl PayrollRequest {
    /// Validates the request against the calculator's precondition domain.
    ///
    /// The calculator itself is total over valid inputs and does not guard
    /// against out-of-domain values, so this must be called at the
    /// orchestration boundary before computing.
    pub fn validate(&self) -> EngineResult<()> {
        if !(1..=12).contains(&self.month) {
            return Err(EngineError::InvalidInput {
                field: "month".to_string(),
                message: "must be between 1 and 12".to_string(),
            });
        }

        if self.exemptions < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "exemptions".to_string(),
                message: "must be non-negative".to_string(),
            });
        }

        Ok(())
    }
}
