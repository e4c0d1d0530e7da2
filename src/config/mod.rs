//! Configuration loading and management for the payroll engine.
//!
//! This module provides functionality to load statutory payroll
//! configuration from YAML files, including PF and ESI parameters, the
//! professional tax table, the TDS slab tables for both regimes, and the
//! seed tax exemption rules.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/india").unwrap();
//! println!("{} exemption rules", config.exemptions().len());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    EsiConfig, ExemptionRule, ExemptionsConfig, NewExemptionRule, ProfessionalTaxSlab,
    ProvidentFundConfig, RegimeApplicability, StatutoryConfig, TaxSlab, TdsConfig,
};
