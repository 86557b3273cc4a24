/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

//! Error types for field declarations.

use sigep_core::FieldError;
use thiserror::Error;

/// Result type alias using [`SchemaError`] as the error type.
pub type Result<T> = std::result::Result<T, SchemaError>;

/// Errors raised while loading or building field declarations.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// A field rejected a value.
    #[error("field error: {0}")]
    Field(#[from] FieldError),

    /// The declaration document is not valid JSON for a field spec.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// The field name cannot be used as an XML tag.
    #[error("invalid tag name: {name:?}")]
    InvalidTagName {
        /// The rejected name.
        name: String,
    },

    /// Two declarations share the same name.
    #[error("duplicate field: {name}")]
    DuplicateField {
        /// The repeated name.
        name: String,
    },
}
