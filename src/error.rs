//! Error types for the Benefits Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while loading the roster or
//! serving requests against it.

use thiserror::Error;

/// The main error type for the Benefits Engine.
///
/// Roster lookups and the paycheck calculation never fail; absence is an
/// `Option`. These variants cover startup (configuration and fixture
/// integrity) and the HTTP boundary, where absence is turned into a
/// not-found error.
///
/// # Example
///
/// ```
/// use benefits_engine::error::EngineError;
///
/// let error = EngineError::EmployeeNotFound { id: 42 };
/// assert_eq!(error.to_string(), "Employee not found: 42");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file or value could not be parsed.
    #[error("Failed to parse configuration '{path}': {message}")]
    ConfigParseError {
        /// The path (or variable name) that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Two employees in the roster share an id.
    #[error("Duplicate employee id in roster: {id}")]
    DuplicateEmployeeId {
        /// The repeated employee id.
        id: i32,
    },

    /// Two dependents in the roster share an id, possibly under different employees.
    #[error("Duplicate dependent id in roster: {id}")]
    DuplicateDependentId {
        /// The repeated dependent id.
        id: i32,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee {id} field '{field}': {message}")]
    InvalidEmployee {
        /// The id of the offending employee.
        id: i32,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// No employee with the requested id exists.
    #[error("Employee not found: {id}")]
    EmployeeNotFound {
        /// The requested employee id.
        id: i32,
    },

    /// No dependent with the requested id exists.
    #[error("Dependent not found: {id}")]
    DependentNotFound {
        /// The requested dependent id.
        id: i32,
    },

    /// A path identifier could not be parsed as an integer.
    #[error("Invalid id: {value}")]
    InvalidId {
        /// The raw value that failed to parse.
        value: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_not_found_displays_path() {
        let error = EngineError::ConfigNotFound {
            path: "/missing/roster.yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: /missing/roster.yaml"
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
            "Failed to parse configuration '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_duplicate_ids_display_id() {
        assert_eq!(
            EngineError::DuplicateEmployeeId { id: 3 }.to_string(),
            "Duplicate employee id in roster: 3"
        );
        assert_eq!(
            EngineError::DuplicateDependentId { id: 7 }.to_string(),
            "Duplicate dependent id in roster: 7"
        );
    }

    #[test]
    fn test_invalid_employee_displays_id_field_and_message() {
        let error = EngineError::InvalidEmployee {
            id: 9,
            field: "salary".to_string(),
            message: "must not be negative".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee 9 field 'salary': must not be negative"
        );
    }

    #[test]
    fn test_not_found_errors_display_id() {
        assert_eq!(
            EngineError::EmployeeNotFound { id: -1 }.to_string(),
            "Employee not found: -1"
        );
        assert_eq!(
            EngineError::DependentNotFound { id: 99 }.to_string(),
            "Dependent not found: 99"
        );
    }

    #[test]
    fn test_invalid_id_displays_value() {
        let error = EngineError::InvalidId {
            value: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid id: abc");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_config_not_found() -> EngineResult<()> {
            Err(EngineError::ConfigNotFound {
                path: "/test".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_config_not_found()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
