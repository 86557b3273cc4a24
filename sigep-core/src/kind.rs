/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Field kinds.
//!
//! This module provides:
//! - [`FieldKind`]: The format/validate/render contract every kind implements
//! - [`BooleanKind`], [`IntegerKind`], [`DecimalKind`]: Scalar kinds with
//!   identity formatting and type-checking validation
//!
//! The text kind and its CEP/CNPJ presets live in [`crate::text`].

use crate::error::{FieldError, Result};
use crate::value::{Value, ValueKind};
use std::fmt;

/// Per-kind formatting and validation rules.
///
/// `format` and `validate` are pure and independently testable. The
/// required-field check is not part of a kind; [`Field::set`](crate::Field::set)
/// runs it after `validate`.
pub trait FieldKind {
    /// Result of formatting, handed to `validate`.
    type Formatted;

    /// Type stored in the field once a value is accepted.
    type Output: Clone + fmt::Debug + PartialEq;

    /// Normalizes the raw input.
    ///
    /// # Errors
    /// Returns `FieldError::WrongType` if the input cannot be formatted by
    /// this kind.
    fn format(&self, name: &str, value: Value) -> Result<Self::Formatted>;

    /// Checks kind-specific constraints and yields the value to store.
    ///
    /// `None` means the field is left unset.
    ///
    /// # Errors
    /// Returns the `FieldError` describing the violated constraint.
    fn validate(&self, name: &str, value: Self::Formatted) -> Result<Option<Self::Output>>;

    /// Appends the element text of a stored value.
    fn render(value: &Self::Output, out: &mut String);
}

/// Boolean kind. Renders `true`/`false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BooleanKind;

impl FieldKind for BooleanKind {
    type Formatted = Value;
    type Output = bool;

    fn format(&self, _name: &str, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn validate(&self, name: &str, value: Value) -> Result<Option<bool>> {
        match value {
            Value::Bool(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            other => Err(FieldError::wrong_type(name, other.kind(), ValueKind::Bool)),
        }
    }

    fn render(value: &bool, out: &mut String) {
        out.push_str(if *value { "true" } else { "false" });
    }
}

/// Integer kind.
///
/// Accepts `Int`, and `UInt` values that fit in an `i64`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntegerKind;

impl FieldKind for IntegerKind {
    type Formatted = Value;
    type Output = i64;

    fn format(&self, _name: &str, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn validate(&self, name: &str, value: Value) -> Result<Option<i64>> {
        match value {
            Value::Int(v) => Ok(Some(v)),
            Value::UInt(v) => i64::try_from(v)
                .map(Some)
                .map_err(|_| FieldError::wrong_type(name, ValueKind::UInt, ValueKind::Int)),
            Value::Null => Ok(None),
            other => Err(FieldError::wrong_type(name, other.kind(), ValueKind::Int)),
        }
    }

    fn render(value: &i64, out: &mut String) {
        let mut buf = itoa::Buffer::new();
        out.push_str(buf.format(*value));
    }
}

/// Floating-point kind.
///
/// Finite values always render with a fractional part (`10.0`); non-finite
/// values render as `NaN`, `INF` and `-INF`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecimalKind;

impl FieldKind for DecimalKind {
    type Formatted = Value;
    type Output = f64;

    fn format(&self, _name: &str, value: Value) -> Result<Value> {
        Ok(value)
    }

    fn validate(&self, name: &str, value: Value) -> Result<Option<f64>> {
        match value {
            Value::Float(v) => Ok(Some(v)),
            Value::Null => Ok(None),
            other => Err(FieldError::wrong_type(name, other.kind(), ValueKind::Float)),
        }
    }

    fn render(value: &f64, out: &mut String) {
        if value.is_nan() {
            out.push_str("NaN");
        } else if value.is_infinite() {
            out.push_str(if *value > 0.0 { "INF" } else { "-INF" });
        } else {
            let text = value.to_string();
            out.push_str(&text);
            if !text.contains('.') {
                out.push_str(".0");
            }
        }
    }
}
