/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for SIGEP request fields.
//!
//! Every failure is raised synchronously by [`Field::set`](crate::Field::set)
//! and carries the name of the field that rejected the value.

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias using [`FieldError`] as the error type.
pub type Result<T> = std::result::Result<T, FieldError>;

/// Errors raised while formatting or validating a field value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// A required field was left without a value.
    #[error("missing required field: {name}")]
    MissingRequiredField {
        /// Name of the field.
        name: String,
    },

    /// The value's runtime type does not match the field kind.
    #[error("wrong type for field {name}: got {actual}, expected {expected}")]
    WrongType {
        /// Name of the field.
        name: String,
        /// Type of the rejected value.
        actual: ValueKind,
        /// Type the field accepts.
        expected: ValueKind,
    },

    /// A fixed-length field received text of a different length.
    #[error("wrong length for field {name}: expected {expected}, got {actual}")]
    WrongLength {
        /// Name of the field.
        name: String,
        /// Configured length in characters.
        expected: usize,
        /// Length of the formatted value in characters.
        actual: usize,
    },

    /// A numeric-only field received non-digit text.
    #[error("field {name} accepts only digits")]
    NotNumeric {
        /// Name of the field.
        name: String,
    },
}

impl FieldError {
    /// Returns the name of the field that raised the error.
    #[must_use]
    pub fn field_name(&self) -> &str {
        match self {
            Self::MissingRequiredField { name }
            | Self::WrongType { name, .. }
            | Self::WrongLength { name, .. }
            | Self::NotNumeric { name } => name,
        }
    }

    pub(crate) fn wrong_type(name: &str, actual: ValueKind, expected: ValueKind) -> Self {
        Self::WrongType {
            name: name.to_string(),
            actual,
            expected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrong_type_display() {
        let err = FieldError::wrong_type("qtd", ValueKind::Float, ValueKind::Int);
        assert_eq!(
            err.to_string(),
            "wrong type for field qtd: got float, expected int"
        );
    }

    #[test]
    fn test_wrong_length_display() {
        let err = FieldError::WrongLength {
            name: "codigo".to_string(),
            expected: 5,
            actual: 3,
        };
        assert_eq!(
            err.to_string(),
            "wrong length for field codigo: expected 5, got 3"
        );
    }

    #[test]
    fn test_field_name() {
        let missing = FieldError::MissingRequiredField {
            name: "nome".to_string(),
        };
        let numeric = FieldError::NotNumeric {
            name: "cep".to_string(),
        };
        assert_eq!(missing.field_name(), "nome");
        assert_eq!(numeric.field_name(), "cep");
        assert_eq!(missing.to_string(), "missing required field: nome");
    }
}
