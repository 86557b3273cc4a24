/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SIGEP Core
//!
//! Typed request fields for building SIGEP request payloads.
//!
//! This crate provides:
//! - **Error types**: `FieldError` with `thiserror`
//! - **Values**: `Value` and `ValueKind`, the untyped input to a field
//! - **Kinds**: the `FieldKind` contract, the text kind with its CEP/CNPJ
//!   presets, and the boolean, integer and decimal kinds
//! - **Fields**: `Field<K>`, driving format → validate → required check,
//!   and serializing to `<name>text</name>`
//!
//! ## Example
//!
//! ```
//! use sigep_core::{FieldError, StringField};
//!
//! let mut cep = StringField::postal_code("cep", true);
//! cep.set("01310-100")?;
//! assert_eq!(cep.serialize(), "<cep>01310100</cep>");
//! # Ok::<(), FieldError>(())
//! ```

pub mod error;
pub mod field;
pub mod kind;
pub mod text;
pub mod value;
pub mod xml;

pub use error::{FieldError, Result};
pub use field::{BooleanField, DecimalField, Field, IntegerField, StringField, XmlField};
pub use kind::{BooleanKind, DecimalKind, FieldKind, IntegerKind};
pub use text::TextKind;
pub use value::{Value, ValueKind};
