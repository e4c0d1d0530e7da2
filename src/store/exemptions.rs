//! In-memory exemption rule store.
//!
//! Holds the configurable tax exemption table, seeded from the loaded
//! configuration. Added rules get generated `exemption-{uuid}` ids.

use std::sync::RwLock;

use uuid::Uuid;

use crate::config::{ExemptionRule, NewExemptionRule};
use crate::error::{EngineError, EngineResult};

/// Thread-safe in-memory exemption rule collection.
#[derive(Debug)]
pub struct ExemptionStore {
    rules: RwLock<Vec<ExemptionRule>>,
}

impl ExemptionStore {
    /// Creates a store holding the given seed rules.
    pub fn new(seed: Vec<ExemptionRule>) -> Self {
        Self {
            rules: RwLock::new(seed),
        }
    }

    /// Returns all exemption rules.
    pub fn list(&self) -> Vec<ExemptionRule> {
        self.read().clone()
    }

    /// Adds a new rule with a generated id.
    pub fn add(&self, details: NewExemptionRule) -> ExemptionRule {
        let rule = details.with_id(format!("exemption-{}", Uuid::new_v4()));
        self.write().push(rule.clone());
        rule
    }

    /// Replaces the details of an existing rule, keeping its id.
    pub fn update(&self, id: &str, details: NewExemptionRule) -> EngineResult<ExemptionRule> {
        let mut rules = self.write();
        let slot = rules
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| EngineError::ExemptionNotFound { id: id.to_string() })?;

        *slot = details.with_id(id.to_string());
        Ok(slot.clone())
    }

    /// Removes the rule with the given id.
    pub fn delete(&self, id: &str) -> EngineResult<()> {
        let mut rules = self.write();
        let before = rules.len();
        rules.retain(|r| r.id != id);

        if rules.len() == before {
            return Err(EngineError::ExemptionNotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<ExemptionRule>> {
        self.rules
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<ExemptionRule>> {
        self.rules
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
