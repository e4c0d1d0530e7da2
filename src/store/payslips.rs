//! In-memory payslip store.
//!
//! Holds the payslips produced by payroll runs. Payslip ids are derived
//! deterministically from (employee, month, year), so the store resolves
//! collisions by upsert: reprocessing a period replaces the stored
//! payslip rather than appending a duplicate.

use std::sync::RwLock;

use crate::error::{EngineError, EngineResult};
use crate::models::Payslip;

/// Thread-safe in-memory payslip collection.
#[derive(Debug, Default)]
pub struct PayslipStore {
    payslips: RwLock<Vec<Payslip>>,
}

impl PayslipStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a payslip, replacing any existing payslip with the same id.
    ///
    /// Returns the stored payslip.
    pub fn upsert(&self, payslip: Payslip) -> Payslip {
        let mut payslips = self.write();
        match payslips.iter_mut().find(|p| p.id == payslip.id) {
            Some(slot) => *slot = payslip.clone(),
            None => payslips.push(payslip.clone()),
        }
        payslip
    }

    /// Returns all stored payslips in insertion order.
    pub fn list(&self) -> Vec<Payslip> {
        self.read().clone()
    }

    /// Returns the payslip with the given id.
    pub fn get(&self, id: &str) -> EngineResult<Payslip> {
        self.read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| EngineError::PayslipNotFound { id: id.to_string() })
    }

    /// Returns all payslips for the given employee.
    pub fn for_employee(&self, employee_id: &str) -> Vec<Payslip> {
        self.read()
            .iter()
            .filter(|p| p.employee_id == employee_id)
            .cloned()
            .collect()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Payslip>> {
        self.payslips
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Payslip>> {
        self.payslips
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
