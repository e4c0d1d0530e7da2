//! Application state for the payroll engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::clock::{Clock, SystemClock};
use crate::config::ConfigLoader;
use crate::store::{EmployeeStore, ExemptionStore, PayslipStore, UserStore};

/// Shared application state.
///
/// Contains the loaded configuration, the in-memory stores, and the
/// clock used to stamp payslips. Everything is behind an `Arc` so the
/// state clones cheaply per request.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    employees: Arc<EmployeeStore>,
    payslips: Arc<PayslipStore>,
    exemptions: Arc<ExemptionStore>,
    users: Arc<UserStore>,
    clock: Arc<dyn Clock>,
}

impl AppState {
    /// Creates application state with the given configuration, the sample
    /// store fixtures, and the system clock.
    pub fn new(config: ConfigLoader) -> Self {
        let exemptions = ExemptionStore::new(config.exemptions().to_vec());
        Self {
            config: Arc::new(config),
            employees: Arc::new(EmployeeStore::with_sample_data()),
            payslips: Arc::new(PayslipStore::new()),
            exemptions: Arc::new(exemptions),
            users: Arc::new(UserStore::with_sample_data()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Replaces the clock, for deterministic payslip timestamps in tests.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns a reference to the employee store.
    pub fn employees(&self) -> &EmployeeStore {
        &self.employees
    }

    /// Returns a reference to the payslip store.
    pub fn payslips(&self) -> &PayslipStore {
        &self.payslips
    }

    /// Returns a reference to the exemption rule store.
    pub fn exemptions(&self) -> &ExemptionStore {
        &self.exemptions
    }

    /// Returns a reference to the user store.
    pub fn users(&self) -> &UserStore {
        &self.users
    }

    /// Returns a reference to the clock.
    pub fn clock(&self) -> &dyn Clock {
        self.clock.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }
}
