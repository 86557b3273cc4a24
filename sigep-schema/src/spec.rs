/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Serde-driven field declarations.
//!
//! A declaration names a field, its required flag and its kind:
//!
//! ```json
//! [
//!   { "name": "cep_destino", "required": true, "kind": "postal_code" },
//!   { "name": "codigo", "kind": "string", "length": 5, "numeric_only": true },
//!   { "name": "peso", "kind": "decimal" }
//! ]
//! ```

use crate::any::AnyField;
use crate::error::{Result, SchemaError};
use serde::{Deserialize, Serialize};
use sigep_core::{BooleanField, DecimalField, IntegerField, StringField};
use std::collections::HashSet;
use tracing::debug;

/// Kind of a declared field and its options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum KindSpec {
    /// Free text, optionally fixed-length or digits-only.
    String {
        /// Required length in characters; zero disables the check.
        #[serde(default)]
        length: usize,
        /// Whether only digits are accepted.
        #[serde(default)]
        numeric_only: bool,
    },
    /// CEP.
    PostalCode,
    /// CNPJ.
    TaxId,
    /// Boolean.
    Boolean,
    /// Integer.
    Integer,
    /// Floating-point number.
    Decimal,
}

/// Declaration of a single field.
///
/// Deserialization rejects unknown keys, and rejects `length` or
/// `numeric_only` on kinds other than `string`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawFieldSpec")]
pub struct FieldSpec {
    /// Field name, also the XML tag.
    pub name: String,
    /// Whether an unset value is rejected.
    #[serde(default)]
    pub required: bool,
    /// Kind and kind options.
    #[serde(flatten)]
    pub kind: KindSpec,
}

/// Flat wire form of a declaration, checked before it becomes a [`FieldSpec`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawFieldSpec {
    name: String,
    #[serde(default)]
    required: bool,
    kind: RawKind,
    length: Option<usize>,
    numeric_only: Option<bool>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum RawKind {
    String,
    PostalCode,
    TaxId,
    Boolean,
    Integer,
    Decimal,
}

impl TryFrom<RawFieldSpec> for FieldSpec {
    type Error = String;

    fn try_from(raw: RawFieldSpec) -> std::result::Result<Self, Self::Error> {
        let has_options = raw.length.is_some() || raw.numeric_only.is_some();
        let fixed = |kind: KindSpec| {
            if has_options {
                Err(format!(
                    "field {}: length and numeric_only apply only to kind string",
                    raw.name
                ))
            } else {
                Ok(kind)
            }
        };

        let kind = match raw.kind {
            RawKind::String => KindSpec::String {
                length: raw.length.unwrap_or(0),
                numeric_only: raw.numeric_only.unwrap_or(false),
            },
            RawKind::PostalCode => fixed(KindSpec::PostalCode)?,
            RawKind::TaxId => fixed(KindSpec::TaxId)?,
            RawKind::Boolean => fixed(KindSpec::Boolean)?,
            RawKind::Integer => fixed(KindSpec::Integer)?,
            RawKind::Decimal => fixed(KindSpec::Decimal)?,
        };

        Ok(Self {
            name: raw.name,
            required: raw.required,
            kind,
        })
    }
}

impl FieldSpec {
    /// Creates a declaration.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool, kind: KindSpec) -> Self {
        Self {
            name: name.into(),
            required,
            kind,
        }
    }

    /// Parses a single declaration from JSON.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` if the document is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a list of declarations from a JSON array.
    ///
    /// # Errors
    /// Returns `SchemaError::Json` if the document is malformed.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds an unset field from this declaration.
    ///
    /// # Errors
    /// Returns `SchemaError::InvalidTagName` if the name is not a usable XML tag.
    pub fn build(&self) -> Result<AnyField> {
        if !is_valid_tag(&self.name) {
            return Err(SchemaError::InvalidTagName {
                name: self.name.clone(),
            });
        }

        let name = self.name.as_str();
        let required = self.required;
        let field = match self.kind {
            KindSpec::String {
                length,
                numeric_only,
            } => StringField::with_constraints(name, required, length, numeric_only).into(),
            KindSpec::PostalCode => StringField::postal_code(name, required).into(),
            KindSpec::TaxId => StringField::tax_id(name, required).into(),
            KindSpec::Boolean => BooleanField::new(name, required).into(),
            KindSpec::Integer => IntegerField::new(name, required).into(),
            KindSpec::Decimal => DecimalField::new(name, required).into(),
        };
        debug!(field = name, kind = ?self.kind, required, "built field");
        Ok(field)
    }
}

/// Builds every declared field, in order.
///
/// # Errors
/// Returns `SchemaError::DuplicateField` if two declarations share a name,
/// or the first error raised by [`FieldSpec::build`].
pub fn build_all(specs: &[FieldSpec]) -> Result<Vec<AnyField>> {
    let mut seen = HashSet::with_capacity(specs.len());
    specs
        .iter()
        .map(|spec| {
            if !seen.insert(spec.name.as_str()) {
                return Err(SchemaError::DuplicateField {
                    name: spec.name.clone(),
                });
            }
            spec.build()
        })
        .collect()
}

/// Returns true if `name` can be used as an XML element name.
///
/// Accepts a letter or `_` followed by letters, digits, `_`, `-` or `.`.
#[must_use]
pub fn is_valid_tag(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
}
