//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! payroll configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{ExemptionRule, ExemptionsConfig, StatutoryConfig};

/// Loads and provides access to statutory payroll configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory and
/// provides access to the statutory rule tables and the seed exemption
/// rules.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/india/
/// ├── statutory.yaml   # PF, ESI, professional tax, and TDS slab tables
/// └── exemptions.yaml  # Seed tax exemption rules
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/india").unwrap();
/// println!("PF cap: {}", loader.statutory().provident_fund.monthly_cap);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    statutory: StatutoryConfig,
    exemptions: Vec<ExemptionRule>,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/india")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - The slab tables fail validation (unordered or open-ended bounds)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let statutory_path = path.join("statutory.yaml");
        let statutory = Self::load_yaml::<StatutoryConfig>(&statutory_path)?;

        statutory
            .validate()
            .map_err(|message| EngineError::ConfigParseError {
                path: statutory_path.display().to_string(),
                message,
            })?;

        let exemptions_path = path.join("exemptions.yaml");
        let exemptions_config = Self::load_yaml::<ExemptionsConfig>(&exemptions_path)?;

        Ok(Self {
            statutory,
            exemptions: exemptions_config.exemptions,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the statutory configuration.
    pub fn statutory(&self) -> &StatutoryConfig {
        &self.statutory
    }

    /// Returns the seed exemption rules.
    pub fn exemptions(&self) -> &[ExemptionRule] {
        &self.exemptions
    }
}
