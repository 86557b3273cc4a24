/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SIGEP Schema
//!
//! Declarative field definitions for SIGEP request payloads.
//!
//! Field declarations are loaded with `serde` and built into [`AnyField`],
//! a closed enum over the typed fields of `sigep-core`.

pub mod any;
pub mod error;
pub mod spec;

pub use any::AnyField;
pub use error::{Result, SchemaError};
pub use spec::{FieldSpec, KindSpec, build_all, is_valid_tag};
