//! # Error Types
//!
//! Structured error types for rocket_core. The calculation pipeline itself has
//! no recovery paths: every error is raised either while validating a request
//! (before any stage runs) or by a persistence collaborator.
//!
//! ## Example
//!
//! ```rust
//! use rocket_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thrust(thrust_lbf: f64) -> CalcResult<()> {
//!     if thrust_lbf <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "thrust_lbf".to_string(),
//!             value: thrust_lbf.to_string(),
//!             reason: "Thrust must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rocket_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, non-finite, zero count)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Fuel identifier not recognised by the strict parser
    #[error("Unknown fuel: '{identifier}' (expected alcohol, gasoline or ethanol)")]
    UnknownFuel { identifier: String },

    /// A sample table violates its ordering invariant
    #[error("Invalid table '{table}': {reason}")]
    InvalidTable { table: String, reason: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownFuel error
    pub fn unknown_fuel(identifier: impl Into<String>) -> Self {
        CalcError::UnknownFuel {
            identifier: identifier.into(),
        }
    }

    /// Create an InvalidTable error
    pub fn invalid_table(table: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidTable {
            table: table.into(),
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Create a SerializationError
    pub fn serialization(reason: impl Into<String>) -> Self {
        CalcError::SerializationError {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownFuel { .. } => "UNKNOWN_FUEL",
            CalcError::InvalidTable { .. } => "INVALID_TABLE",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("fuel_holes", "0", "Hole count must be at least 1");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::unknown_fuel("kerosene").error_code(), "UNKNOWN_FUEL");
        assert_eq!(CalcError::invalid_table("isp", "empty").error_code(), "INVALID_TABLE");
        assert_eq!(CalcError::serialization("bad").error_code(), "SERIALIZATION_ERROR");
    }

    #[test]
    fn test_display_names_field() {
        let error = CalcError::invalid_input("contraction_ratio", "0.8", "Must exceed 1");
        assert_eq!(
            error.to_string(),
            "Invalid input for 'contraction_ratio': 0.8 - Must exceed 1"
        );
    }
}
