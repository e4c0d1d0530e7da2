//! Configuration types for statutory payroll rules.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. All statutory numbers
//! (rates, caps, thresholds, and slab tables) live here rather than in the
//! calculation code, so the slab tables are data-driven and extensible.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::TaxRegime;

/// Employee Provident Fund parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct ProvidentFundConfig {
    /// The employee contribution rate applied to basic salary.
    pub rate: Decimal,
    /// The fixed monthly ceiling on the contribution.
    pub monthly_cap: Decimal,
}

/// Employee State Insurance parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct EsiConfig {
    /// The contribution rate applied to gross salary.
    pub rate: Decimal,
    /// The gross salary above which ESI does not apply. The threshold is
    /// a hard cliff, not a phase-out.
    pub gross_threshold: Decimal,
}

/// One step of the professional tax table.
///
/// Slabs are ordered ascending by bound; the first slab whose bound the
/// gross salary does not exceed applies. Bounds are inclusive.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfessionalTaxSlab {
    /// The upper gross salary bound for this slab (inclusive), or `None`
    /// for the open final slab.
    #[serde(default)]
    pub gross_up_to: Option<Decimal>,
    /// The flat monthly tax for this slab.
    pub amount: Decimal,
}

/// One slab of a marginal income tax table.
///
/// The first slab whose bound the taxable income does not exceed applies,
/// and the tax is `base_tax + (taxable - threshold) * marginal_rate`.
#[derive(Debug, Clone, Deserialize)]
pub struct TaxSlab {
    /// The upper taxable income bound for this slab (inclusive), or
    /// `None` for the open final slab.
    #[serde(default)]
    pub income_up_to: Option<Decimal>,
    /// Tax accumulated by all lower slabs.
    pub base_tax: Decimal,
    /// The marginal rate applied to income above the threshold.
    pub marginal_rate: Decimal,
    /// The lower income bound the marginal rate applies from.
    pub threshold: Decimal,
}

/// The TDS slab tables for both tax regimes.
#[derive(Debug, Clone, Deserialize)]
pub struct TdsConfig {
    /// The old regime slab table.
    pub old_regime: Vec<TaxSlab>,
    /// The new regime slab table.
    pub new_regime: Vec<TaxSlab>,
}

impl TdsConfig {
    /// Returns the slab table for the given regime.
    pub fn slabs_for(&self, regime: TaxRegime) -> &[TaxSlab] {
        match regime {
            TaxRegime::Old => &self.old_regime,
            TaxRegime::New => &self.new_regime,
        }
    }
}

/// The complete statutory configuration for payroll calculation.
#[derive(Debug, Clone, Deserialize)]
pub struct StatutoryConfig {
    /// Provident Fund parameters.
    pub provident_fund: ProvidentFundConfig,
    /// Employee State Insurance parameters.
    pub esi: EsiConfig,
    /// The professional tax slab table, ordered ascending by bound.
    pub professional_tax: Vec<ProfessionalTaxSlab>,
    /// The TDS slab tables per regime.
    pub tds: TdsConfig,
}

impl StatutoryConfig {
    /// Validates the slab tables.
    ///
    /// Each table must be non-empty, ordered strictly ascending by bound,
    /// and end with a single open slab so every income falls somewhere.
    pub fn validate(&self) -> Result<(), String> {
        let pt_bounds: Vec<_> = self.professional_tax.iter().map(|s| s.gross_up_to).collect();
        validate_bounds("professional_tax", &pt_bounds)?;

        let old_bounds: Vec<_> = self.tds.old_regime.iter().map(|s| s.income_up_to).collect();
        validate_bounds("tds.old_regime", &old_bounds)?;

        let new_bounds: Vec<_> = self.tds.new_regime.iter().map(|s| s.income_up_to).collect();
        validate_bounds("tds.new_regime", &new_bounds)?;

        Ok(())
    }
}

fn validate_bounds(table: &str, bounds: &[Option<Decimal>]) -> Result<(), String> {
    let Some((last, rest)) = bounds.split_last() else {
        return Err(format!("{}: slab table must not be empty", table));
    };

    if last.is_some() {
        return Err(format!("{}: final slab must have no upper bound", table));
    }

    let mut previous: Option<Decimal> = None;
    for bound in rest {
        let Some(bound) = bound else {
            return Err(format!("{}: only the final slab may be unbounded", table));
        };
        if previous.is_some_and(|p| p >= *bound) {
            return Err(format!("{}: slab bounds must be strictly ascending", table));
        }
        previous = Some(*bound);
    }

    Ok(())
}

/// Which tax regime an exemption rule applies under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegimeApplicability {
    /// Applies only under the old regime.
    Old,
    /// Applies only under the new regime.
    New,
    /// Applies under both regimes.
    Both,
}

/// A configurable tax exemption rule.
///
/// Rules describe the exemption categories an employee may claim (e.g.,
/// Section 80C investments); the payroll request carries the claimed total
/// as a single amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExemptionRule {
    /// Unique identifier for the rule (e.g., "80c").
    pub id: String,
    /// The display name of the rule (e.g., "Section 80C").
    pub name: String,
    /// A description of what the exemption covers.
    pub description: String,
    /// The maximum claimable amount, or `None` if uncapped.
    #[serde(default)]
    pub max_limit: Option<Decimal>,
    /// Which tax regime the rule applies under.
    pub applicable: RegimeApplicability,
}

/// The attributes of an exemption rule, without the store-assigned id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewExemptionRule {
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

impl NewExemptionRule {
    /// Attaches a store-assigned id, producing a full exemption rule.
    pub fn with_id(self, id: String) -> ExemptionRule {
        ExemptionRule {
            id,
            name: self.name,
            description: self.description,
            max_limit: self.max_limit,
            applicable: self.applicable,
        }
    }
}

/// Exemption rules configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct ExemptionsConfig {
    /// The seed exemption rules.
    pub exemptions: Vec<ExemptionRule>,
}
