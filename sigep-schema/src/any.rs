/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Closed set of field types, for fields chosen at runtime.

use bytes::BytesMut;
use sigep_core::{
    BooleanField, DecimalField, IntegerField, Result, StringField, Value, XmlField,
};

/// A field of any supported kind.
#[derive(Debug, Clone, PartialEq)]
pub enum AnyField {
    /// Text field, including CEP and CNPJ presets.
    Text(StringField),
    /// Boolean field.
    Boolean(BooleanField),
    /// Integer field.
    Integer(IntegerField),
    /// Floating-point field.
    Decimal(DecimalField),
}

macro_rules! each_field {
    ($self:expr, $field:ident => $body:expr) => {
        match $self {
            AnyField::Text($field) => $body,
            AnyField::Boolean($field) => $body,
            AnyField::Integer($field) => $body,
            AnyField::Decimal($field) => $body,
        }
    };
}

impl AnyField {
    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        each_field!(self, f => f.name())
    }

    /// Returns true if the field must hold a value.
    #[must_use]
    pub fn is_required(&self) -> bool {
        each_field!(self, f => f.is_required())
    }

    /// Returns true if the field holds a value.
    #[must_use]
    pub fn is_set(&self) -> bool {
        each_field!(self, f => f.is_set())
    }

    /// Formats, validates and stores a value.
    ///
    /// # Errors
    /// Returns the `FieldError` raised by the underlying field; the stored
    /// value is kept.
    pub fn set(&mut self, value: impl Into<Value>) -> Result<()> {
        let value = value.into();
        each_field!(self, f => f.set(value))
    }

    /// Returns the stored value, `Value::Null` when unset.
    #[must_use]
    pub fn get(&self) -> Value {
        match self {
            Self::Text(f) => Value::from(f.get().cloned()),
            Self::Boolean(f) => Value::from(f.get().copied()),
            Self::Integer(f) => Value::from(f.get().copied()),
            Self::Decimal(f) => Value::from(f.get().copied()),
        }
    }

    /// Serializes the field as `<name>text</name>`.
    #[must_use]
    pub fn serialize(&self) -> String {
        each_field!(self, f => f.serialize())
    }

    /// Appends the serialized element to `buf`.
    pub fn encode_into(&self, buf: &mut BytesMut) {
        each_field!(self, f => f.encode_into(buf))
    }
}

impl From<StringField> for AnyField {
    fn from(field: StringField) -> Self {
        Self::Text(field)
    }
}

impl From<BooleanField> for AnyField {
    fn from(field: BooleanField) -> Self {
        Self::Boolean(field)
    }
}

impl From<IntegerField> for AnyField {
    fn from(field: IntegerField) -> Self {
        Self::Integer(field)
    }
}

impl From<DecimalField> for AnyField {
    fn from(field: DecimalField) -> Self {
        Self::Decimal(field)
    }
}

impl XmlField for AnyField {
    fn name(&self) -> &str {
        AnyField::name(self)
    }

    fn is_required(&self) -> bool {
        AnyField::is_required(self)
    }

    fn is_set(&self) -> bool {
        AnyField::is_set(self)
    }

    fn serialize(&self) -> String {
        AnyField::serialize(self)
    }

    fn encode_into(&self, buf: &mut BytesMut) {
        AnyField::encode_into(self, buf);
    }
}
