/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! # SIGEP
//!
//! Typed, validated XML request fields for the Correios SIGEP web service.
//!
//! This is the facade crate that re-exports the SIGEP components:
//!
//! - [`core`]: Field kinds, the format → validate pipeline, and errors
//! - [`schema`]: Serde-driven field declarations
//!
//! ## Quick Start
//!
//! ```
//! use sigep::prelude::*;
//!
//! let mut cnpj = StringField::tax_id("cnpj", true);
//! cnpj.set("12.345.678/0001-95")?;
//!
//! let mut qtd = IntegerField::new("qtd", false);
//! assert!(qtd.set(3.5).is_err());
//!
//! assert_eq!(cnpj.serialize(), "<cnpj>12345678000195</cnpj>");
//! assert_eq!(qtd.serialize(), "<qtd></qtd>");
//! # Ok::<(), FieldError>(())
//! ```

pub mod core {
    //! Field kinds, the format → validate pipeline, and errors.
    pub use sigep_core::*;
}

pub mod schema {
    //! Serde-driven field declarations.
    pub use sigep_schema::*;
}

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sigep_core::{
        BooleanField, DecimalField, Field, FieldError, FieldKind, IntegerField, StringField,
        TextKind, Value, ValueKind, XmlField,
    };
    pub use sigep_schema::{AnyField, FieldSpec, KindSpec, SchemaError, build_all};
}
