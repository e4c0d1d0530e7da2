//! In-memory employee store.
//!
//! A thread-safe stand-in for a database table, seeded with fixtures and
//! injected through the application state so tests can supply arbitrary
//! data.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU32, Ordering};

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{BankDetails, Employee, NewEmployee, SalaryStructure};

/// Thread-safe in-memory employee collection.
///
/// Created employees are assigned sequential ids of the form `EMP{n:03}`
/// so that store behavior stays deterministic under test.
#[derive(Debug)]
pub struct EmployeeStore {
    employees: RwLock<Vec<Employee>>,
    next_id: AtomicU32,
}

impl EmployeeStore {
    /// Creates a store holding the given employees.
    ///
    /// The id counter resumes after the highest numeric `EMP` suffix in
    /// the seed data.
    pub fn new(seed: Vec<Employee>) -> Self {
        let highest = seed
            .iter()
            .filter_map(|e| e.id.strip_prefix("EMP").and_then(|n| n.parse::<u32>().ok()))
            .max()
            .unwrap_or(0);

        Self {
            employees: RwLock::new(seed),
            next_id: AtomicU32::new(highest + 1),
        }
    }

    /// Creates a store seeded with the sample employee fixtures.
    pub fn with_sample_data() -> Self {
        Self::new(sample_employees())
    }

    /// Returns all employees.
    pub fn list(&self) -> Vec<Employee> {
        self.read().clone()
    }

    /// Returns the employee with the given id.
    pub fn get(&self, id: &str) -> EngineResult<Employee> {
        self.read()
            .iter()
            .find(|e| e.id == id)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })
    }

    /// Adds a new employee, assigning the next sequential id.
    pub fn create(&self, details: NewEmployee) -> Employee {
        let id = format!("EMP{:03}", self.next_id.fetch_add(1, Ordering::SeqCst));
        let employee = details.with_id(id);
        self.write().push(employee.clone());
        employee
    }

    /// Replaces the details of an existing employee, keeping its id.
    pub fn update(&self, id: &str, details: NewEmployee) -> EngineResult<Employee> {
        let mut employees = self.write();
        let slot = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| EngineError::EmployeeNotFound { id: id.to_string() })?;

        *slot = details.with_id(id.to_string());
        Ok(slot.clone())
    }

    /// Removes the employee with the given id.
    pub fn delete(&self, id: &str) -> EngineResult<()> {
        let mut employees = self.write();
        let before = employees.len();
        employees.retain(|e| e.id != id);

        if employees.len() == before {
            return Err(EngineError::EmployeeNotFound { id: id.to_string() });
        }
        Ok(())
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Vec<Employee>> {
        self.employees
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Vec<Employee>> {
        self.employees
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// The sample employee fixtures the store ships with.
fn sample_employees() -> Vec<Employee> {
    vec![
        Employee {
            id: "EMP001".to_string(),
            name: "Ankit Patel".to_string(),
            email: "ankit.patel@example.com".to_string(),
            phone: "9876543210".to_string(),
            pan: "ABCDE1234F".to_string(),
            bank_details: BankDetails {
                account_number: "1234567890".to_string(),
                ifsc_code: "HDFC0001234".to_string(),
                bank_name: "HDFC Bank".to_string(),
            },
            designation: "Software Engineer".to_string(),
            department: "Engineering".to_string(),
            joining_date: NaiveDate::from_ymd_opt(2022, 1, 15).expect("valid date"),
            salary: SalaryStructure {
                basic: Decimal::from(50000),
                hra: Decimal::from(20000),
                conveyance_allowance: Decimal::from(5000),
                special_allowance: Decimal::from(15000),
                medical_allowance: Decimal::from(2000),
            },
        },
        Employee {
            id: "EMP002".to_string(),
            name: "Priya Sharma".to_string(),
            email: "priya.sharma@example.com".to_string(),
            phone: "9876543211".to_string(),
            pan: "FGHIJ5678K".to_string(),
            bank_details: BankDetails {
                account_number: "0987654321".to_string(),
                ifsc_code: "ICIC0001234".to_string(),
                bank_name: "ICICI Bank".to_string(),
            },
            designation: "HR Manager".to_string(),
            department: "Human Resources".to_string(),
            joining_date: NaiveDate::from_ymd_opt(2021, 5, 10).expect("valid date"),
            salary: SalaryStructure {
                basic: Decimal::from(60000),
                hra: Decimal::from(24000),
                conveyance_allowance: Decimal::from(5000),
                special_allowance: Decimal::from(20000),
                medical_allowance: Decimal::from(2500),
            },
        },
        Employee {
            id: "EMP003".to_string(),
            name: "Rahul Verma".to_string(),
            email: "rahul.verma@example.com".to_string(),
            phone: "9876543212".to_string(),
            pan: "LMNOP9012Q".to_string(),
            bank_details: BankDetails {
                account_number: "5678901234".to_string(),
                ifsc_code: "SBIN0001234".to_string(),
                bank_name: "State Bank of India".to_string(),
            },
            designation: "Finance Manager".to_string(),
            department: "Finance".to_string(),
            joining_date: NaiveDate::from_ymd_opt(2020, 11, 20).expect("valid date"),
            salary: SalaryStructure {
                basic: Decimal::from(70000),
                hra: Decimal::from(28000),
                conveyance_allowance: Decimal::from(5000),
                special_allowance: Decimal::from(25000),
                medical_allowance: Decimal::from(3000),
            },
        },
    ]
}
