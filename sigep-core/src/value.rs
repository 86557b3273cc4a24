/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Dynamic input values.
//!
//! This module provides:
//! - [`Value`]: The untyped value handed to [`Field::set`](crate::Field::set)
//! - [`ValueKind`]: The runtime type tag reported by type mismatches

use serde::{Deserialize, Serialize};
use std::fmt;

/// Runtime type of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// No value.
    Null,
    /// Text string.
    Text,
    /// Single character.
    Char,
    /// Signed integer.
    Int,
    /// Unsigned integer.
    UInt,
    /// Floating-point number.
    Float,
    /// Boolean.
    Bool,
}

impl ValueKind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Text => "text",
            Self::Char => "char",
            Self::Int => "int",
            Self::UInt => "uint",
            Self::Float => "float",
            Self::Bool => "bool",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Untyped value assigned to a field.
///
/// Deserializes untagged, so JSON scalars map directly onto variants:
/// `null` → `Null`, strings → `Text`, whole numbers in `i64` range → `Int`,
/// larger whole numbers → `UInt`, other numbers → `Float`,
/// booleans → `Bool`. A `Char` serializes as a one-character string and
/// therefore deserializes back as `Text`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value.
    #[default]
    Null,
    /// Text value.
    Text(String),
    /// Single character value.
    Char(char),
    /// Integer value.
    Int(i64),
    /// Unsigned integer value, for magnitudes above `i64::MAX`.
    UInt(u64),
    /// Floating-point value.
    Float(f64),
    /// Boolean value.
    Bool(bool),
}

impl Value {
    /// Returns the runtime type of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Text(_) => ValueKind::Text,
            Self::Char(_) => ValueKind::Char,
            Self::Int(_) => ValueKind::Int,
            Self::UInt(_) => ValueKind::UInt,
            Self::Float(_) => ValueKind::Float,
            Self::Bool(_) => ValueKind::Bool,
        }
    }

    /// Returns true if this is the `Null` variant.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value as a string, if it is a Text variant.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an i64, if it is an Int variant.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as an f64, if it is a Float variant.
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the value as a bool, if it is a Bool variant.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        i64::try_from(value).map_or(Self::UInt(value), Self::Int)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::from("abc").kind(), ValueKind::Text);
        assert_eq!(Value::from('a').kind(), ValueKind::Char);
        assert_eq!(Value::from(3).kind(), ValueKind::Int);
        assert_eq!(Value::from(3.5).kind(), ValueKind::Float);
        assert_eq!(Value::from(true).kind(), ValueKind::Bool);
        assert_eq!(Value::from(None::<&str>).kind(), ValueKind::Null);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(Some(7)), Value::Int(7));
        assert!(Value::from(None::<i64>).is_null());
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from("x").as_str(), Some("x"));
        assert_eq!(Value::Int(4).as_i64(), Some(4));
        assert_eq!(Value::Float(0.5).as_f64(), Some(0.5));
        assert_eq!(Value::Bool(false).as_bool(), Some(false));
        assert_eq!(Value::Int(4).as_str(), None);
    }

    #[test]
    fn test_value_from_json() {
        let values: Vec<Value> =
            serde_json::from_str(r#"[null, "01310-100", 12, 3.5, true]"#).unwrap();
        assert_eq!(
            values,
            vec![
                Value::Null,
                Value::Text("01310-100".to_string()),
                Value::Int(12),
                Value::Float(3.5),
                Value::Bool(true),
            ]
        );
    }

    #[test]
    fn test_large_integer_from_json_stays_integral() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value, Value::UInt(u64::MAX));

        let value: Value = serde_json::from_str("9223372036854775807").unwrap();
        assert_eq!(value, Value::Int(i64::MAX));
    }

    #[test]
    fn test_u64_conversion() {
        assert_eq!(Value::from(7_u64), Value::Int(7));
        assert_eq!(Value::from(u64::MAX), Value::UInt(u64::MAX));
    }

    #[test]
    fn test_char_round_trips_as_text() {
        let json = serde_json::to_string(&Value::Char('S')).unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, Value::Text("S".to_string()));
    }

    #[test]
    fn test_value_kind_display() {
        assert_eq!(ValueKind::Float.to_string(), "float");
        assert_eq!(ValueKind::Int.to_string(), "int");
        assert_eq!(ValueKind::Text.to_string(), "text");
    }
}
