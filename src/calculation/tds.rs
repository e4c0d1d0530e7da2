//! Tax Deducted at Source calculation.
//!
//! TDS is computed on annual taxable income through a regime-dependent
//! marginal slab table, then spread evenly across the twelve months of
//! the year.
//!
//! Taxable income is deliberately NOT floored at zero when exemptions
//! exceed the annual gross; the first slab of each regime carries a zero
//! rate, so a negative taxable income still produces zero tax.

use rust_decimal::Decimal;

use crate::config::TdsConfig;
use crate::models::TaxRegime;

/// The result of a TDS calculation.
#[derive(Debug, Clone, PartialEq)]
pub struct TdsResult {
    /// Annual gross minus exemptions. May be negative.
    pub taxable_income: Decimal,
    /// The annual tax under the selected regime's slab table.
    pub annual_tax: Decimal,
    /// The annual tax divided by twelve.
    pub monthly_tds: Decimal,
}

/// Computes TDS for an annual gross salary under the given regime.
///
/// The applicable slab is the first whose bound the taxable income does
/// not exceed, and the tax is the slab's accumulated base plus its
/// marginal rate applied to the income above the slab threshold.
///
/// # Example
///
/// ```
/// use payroll_engine::calculation::calculate_tds;
/// use payroll_engine::config::ConfigLoader;
/// use payroll_engine::models::TaxRegime;
/// use rust_decimal::Decimal;
///
/// # fn main() -> Result<(), payroll_engine::error::EngineError> {
/// let config = ConfigLoader::load("./config/india")?;
/// let result = calculate_tds(
///     Decimal::from(1_104_000),
///     Decimal::ZERO,
///     TaxRegime::Old,
///     &config.statutory().tds,
/// );
/// assert_eq!(result.annual_tax, Decimal::from(143_700));
/// assert_eq!(result.monthly_tds, Decimal::from(11_975));
/// # Ok(())
/// # }
/// ```
pub fn calculate_tds(
    annual_gross: Decimal,
    exemptions: Decimal,
    regime: TaxRegime,
    config: &TdsConfig,
) -> TdsResult {
    let taxable_income = annual_gross - exemptions;

    let annual_tax = config
        .slabs_for(regime)
        .iter()
        .find(|slab| slab.income_up_to.is_none_or(|bound| taxable_income <= bound))
        .map(|slab| slab.base_tax + (taxable_income - slab.threshold) * slab.marginal_rate)
        .unwrap_or(Decimal::ZERO);

    TdsResult {
        taxable_income,
        annual_tax,
        monthly_tds: annual_tax / Decimal::from(12),
    }
}
