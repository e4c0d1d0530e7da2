//! Professional tax calculation.
//!
//! Professional tax is a step function of gross salary: a flat monthly
//! amount per slab, not a marginal rate. Slab bounds are inclusive, so a
//! gross of exactly 10000 falls in the first slab and pays nothing.

use rust_decimal::Decimal;

use crate::config::ProfessionalTaxSlab;

/// Computes the monthly professional tax for a gross salary.
///
/// The first slab whose bound the gross salary does not exceed applies;
/// the final open slab catches everything above the last bound. An empty
/// table yields zero, though the config loader rejects empty tables.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_professional_tax;
/// use payroll_engine::config::ProfessionalTaxSlab;
/// use rust_decimal::Decimal;
///
/// let slabs = vec![
///     ProfessionalTaxSlab { gross_up_to: Some(Decimal::from(10000)), amount: Decimal::ZERO },
///     ProfessionalTaxSlab { gross_up_to: None, amount: Decimal::from(300) },
/// ];
/// assert_eq!(
///     calculate_professional_tax(Decimal::from(92000), &slabs),
///     Decimal::from(300)
/// );
/// ```
pub fn calculate_professional_tax(gross_salary: Decimal, slabs: &[ProfessionalTaxSlab]) -> Decimal {
    slabs
        .iter()
        .find(|slab| slab.gross_up_to.is_none_or(|bound| gross_salary <= bound))
        .map(|slab| slab.amount)
        .unwrap_or(Decimal::ZERO)
}
