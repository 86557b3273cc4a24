/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Request fields.
//!
//! This module provides:
//! - [`Field`]: Named, typed container driving the format → validate pipeline
//! - [`XmlField`]: Object-safe view used by request builders
//! - Aliases [`StringField`], [`BooleanField`], [`IntegerField`], [`DecimalField`]

use crate::error::{FieldError, Result};
use crate::kind::{BooleanKind, DecimalKind, FieldKind, IntegerKind};
use crate::text::TextKind;
use crate::value::Value;
use crate::xml;
use bytes::BytesMut;
use tracing::{debug, trace};

/// Text field, including the CEP and CNPJ presets.
pub type StringField = Field<TextKind>;

/// Boolean field.
pub type BooleanField = Field<BooleanKind>;

/// Integer field.
pub type IntegerField = Field<IntegerKind>;

/// Floating-point field.
pub type DecimalField = Field<DecimalKind>;

/// Checks the required flag against a validated value.
///
/// # Errors
/// Returns `FieldError::MissingRequiredField` if `required` is set and the
/// value is absent.
pub fn check_required<T>(name: &str, required: bool, value: Option<&T>) -> Result<()> {
    if value.is_none() && required {
        return Err(FieldError::MissingRequiredField {
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Named, typed request field.
///
/// The stored value is always either unset or a value that passed
/// formatting and validation for kind `K`.
#[derive(Debug, Clone, PartialEq)]
pub struct Field<K: FieldKind> {
    name: String,
    required: bool,
    kind: K,
    value: Option<K::Output>,
}

impl<K: FieldKind> Field<K> {
    /// Creates an unset field of the given kind.
    ///
    /// # Arguments
    /// * `name` - The field name, also used as the XML tag
    /// * `required` - Whether an unset value is rejected
    /// * `kind` - The formatting and validation rules
    #[must_use]
    pub fn with_kind(name: impl Into<String>, required: bool, kind: K) -> Self {
        Self {
            name: name.into(),
            required,
            kind,
            value: None,
        }
    }

    /// Returns the field name.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns true if the field must hold a value.
    #[inline]
    #[must_use]
    pub const fn is_required(&self) -> bool {
        self.required
    }

    /// Returns the kind rules of this field.
    #[inline]
    #[must_use]
    pub const fn kind(&self) -> &K {
        &self.kind
    }

    /// Returns the stored value, if any.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> Option<&K::Output> {
        self.value.as_ref()
    }

    /// Returns true if the field holds a value.
    #[inline]
    #[must_use]
    pub const fn is_set(&self) -> bool {
        self.value.is_some()
    }

    /// Formats, validates and stores a value.
    ///
    /// Kind checks run before the required check. The stored value is only
    /// replaced when every step succeeds.
    ///
    /// # Errors
    /// Returns the `FieldError` raised by the first failing step; the
    /// previously stored value is kept.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        match self.process(value.into()) {
            Ok(accepted) => {
                trace!(field = %self.name, set = accepted.is_some(), "field value accepted");
                self.value = accepted;
                Ok(())
            }
            Err(err) => {
                debug!(field = %self.name, error = %err, "field value rejected");
                Err(err)
            }
        }
    }

    fn process(&self, value: Value) -> Result<Option<K::Output>> {
        let formatted = self.kind.format(&self.name, value)?;
        let validated = self.kind.validate(&self.name, formatted)?;
        check_required(&self.name, self.required, validated.as_ref())?;
        Ok(validated)
    }

    /// Returns the element text of the stored value, empty when unset.
    #[must_use]
    pub fn text(&self) -> String {
        let mut out = String::new();
        if let Some(value) = &self.value {
            K::render(value, &mut out);
        }
        out
    }

    /// Serializes the field as `<name>text</name>`.
    ///
    /// An unset field yields an empty element.
    #[must_use]
    pub fn serialize(&self) -> String {
        xml::element(&self.name, &self.text())
    }

    /// Appends the serialized element to `buf`.
    pub fn encode_into(&self, buf: &mut BytesMut) {
        xml::put_element(buf, &self.name, &self.text());
    }
}

impl<K: FieldKind + Default> Field<K> {
    /// Creates an unset field with the kind's default rules.
    #[must_use]
    pub fn new(name: impl Into<String>, required: bool) -> Self {
        Self::with_kind(name, required, K::default())
    }
}

impl Field<TextKind> {
    /// Creates a text field with a fixed length and optional digits-only rule.
    ///
    /// A `length` of zero disables the length check.
    #[must_use]
    pub fn with_constraints(
        name: impl Into<String>,
        required: bool,
        length: usize,
        numeric_only: bool,
    ) -> Self {
        let mut kind = TextKind::new().with_length(length);
        if numeric_only {
            kind = kind.numeric_only();
        }
        Self::with_kind(name, required, kind)
    }

    /// Creates a CEP field (8 digits, `-` and `.` stripped).
    #[must_use]
    pub fn postal_code(name: impl Into<String>, required: bool) -> Self {
        Self::with_kind(name, required, TextKind::postal_code())
    }

    /// Creates a CNPJ field (14 digits, `-`, `.` and `/` stripped).
    #[must_use]
    pub fn tax_id(name: impl Into<String>, required: bool) -> Self {
        Self::with_kind(name, required, TextKind::tax_id())
    }

    /// Returns the stored text, if any.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

/// Object-safe view of a field, for builders holding heterogeneous fields.
pub trait XmlField {
    /// Returns the field name.
    fn name(&self) -> &str;

    /// Returns true if the field must hold a value.
    fn is_required(&self) -> bool;

    /// Returns true if the field holds a value.
    fn is_set(&self) -> bool;

    /// Serializes the field as `<name>text</name>`.
    fn serialize(&self) -> String;

    /// Appends the serialized element to `buf`.
    fn encode_into(&self, buf: &mut BytesMut);
}

impl<K: FieldKind> XmlField for Field<K> {
    fn name(&self) -> &str {
        Field::name(self)
    }

    fn is_required(&self) -> bool {
        Field::is_required(self)
    }

    fn is_set(&self) -> bool {
        Field::is_set(self)
    }

    fn serialize(&self) -> String {
        Field::serialize(self)
    }

    fn encode_into(&self, buf: &mut BytesMut) {
        Field::encode_into(self, buf);
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::text::{POSTAL_CODE_LEN, POSTAL_CODE_SEPARATORS, TAX_ID_LEN, TAX_ID_SEPARATORS};
    use proptest::prelude::*;

    /// Digits of the given length, decorated with separators before any
    /// digit and trailing whitespace. Yields `(decorated, digits)`.
    fn decorated(
        len: usize,
        separators: &'static [char],
    ) -> impl Strategy<Value = (String, String)> {
        (
            prop::collection::vec(prop::char::range('0', '9'), len),
            prop::collection::vec(prop::option::of(prop::sample::select(separators)), len),
            "[ \t\n]{0,3}",
        )
            .prop_map(|(digits, seps, tail)| {
                let mut input = String::new();
                for (digit, sep) in digits.iter().zip(&seps) {
                    if let Some(sep) = sep {
                        input.push(*sep);
                    }
                    input.push(*digit);
                }
                input.push_str(&tail);
                (input, digits.into_iter().collect())
            })
    }

    proptest! {
        /// A decorated CEP stores its bare digits, and storing them again changes nothing.
        #[test]
        fn postal_code_set_is_stable((input, digits) in decorated(POSTAL_CODE_LEN, POSTAL_CODE_SEPARATORS)) {
            let mut cep = StringField::postal_code("cep", true);
            cep.set(input).unwrap();
            prop_assert_eq!(cep.as_str(), Some(digits.as_str()));

            let stored = cep.as_str().unwrap().to_string();
            cep.set(stored.clone()).unwrap();
            prop_assert_eq!(cep.as_str(), Some(stored.as_str()));
        }

        /// A decorated CNPJ stores its bare digits, and storing them again changes nothing.
        #[test]
        fn tax_id_set_is_stable((input, digits) in decorated(TAX_ID_LEN, TAX_ID_SEPARATORS)) {
            let mut cnpj = StringField::tax_id("cnpj", true);
            cnpj.set(input).unwrap();
            prop_assert_eq!(cnpj.as_str(), Some(digits.as_str()));

            let stored = cnpj.as_str().unwrap().to_string();
            cnpj.set(stored.clone()).unwrap();
            prop_assert_eq!(cnpj.as_str(), Some(stored.as_str()));
        }

        /// Any text assigned to a free text field is stored normalized and re-sets unchanged.
        #[test]
        fn string_set_is_stable(input in any::<String>()) {
            let mut nome = StringField::new("nome", false);
            nome.set(input.clone()).unwrap();
            let stored = nome.as_str().unwrap().to_string();
            prop_assert_eq!(stored.as_str(), input.trim_end());

            nome.set(stored.clone()).unwrap();
            prop_assert_eq!(nome.as_str(), Some(stored.as_str()));
        }
    }
}
