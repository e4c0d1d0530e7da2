//! Error types for the payroll engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payroll processing.

use thiserror::Error;

/// The main error type for the payroll engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound {
///     id: "EMP999".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: EMP999");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// No employee matches the requested id.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The employee id that was not found.
        id: String,
    },

    /// No payslip matches the requested id.
    #[error("Payslip not found: {id}")]
    PayslipNotFound {
        /// The payslip id that was not found.
        id: String,
    },

    /// No exemption rule matches the requested id.
    #[error("Exemption not found: {id}")]
    ExemptionNotFound {
        /// The exemption rule id that was not found.
        id: String,
    },

    /// The supplied username/password pair did not match any user.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// An input value was outside the calculator's precondition domain.
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the value invalid.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_not_found_displays_id() {
        let error = EngineError::EmployeeNotFound {
            id: "EMP999".to_string(),
        };
        assert_eq!(error.to_string(), "Employee not found: EMP999");
    }

    #[test]
    fn test_payslip_not_found_displays_id() {
        let error = EngineError::PayslipNotFound {
            id: "PAY-EMP001-4-2026".to_string(),
        };
        assert_eq!(error.to_string(), "Payslip not found: PAY-EMP001-4-2026");
    }

    #[test]
    fn test_exemption_not_found_displays_id() {
        let error = EngineError::ExemptionNotFound {
            id: "80c".to_string(),
        };
        assert_eq!(error.to_string(), "Exemption not found: 80c");
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            EngineError::InvalidCredentials.to_string(),
            "Invalid credentials"
        );
    }

    #[test]
    fn test_invalid_input_displays_field_and_message() {
        let error = EngineError::InvalidInput {
            field: "month".to_string(),
            message: "must be between 1 and 12".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid input for 'month': must be between 1 and 12"
        );
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = EngineError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::EmployeeNotFound {
                id: "EMP000".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
