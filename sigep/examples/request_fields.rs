//! Request Fields Example
//!
//! Builds the fields of a postage request from JSON declarations, assigns
//! values, and emits the XML fragments a request builder would concatenate.
//!
//! Run with `RUST_LOG=debug` to see rejected values.
use bytes::BytesMut;
use sigep::prelude::*;
use tracing::{info, warn};

const DECLARATIONS: &str = r#"[
    { "name": "cep_origem", "required": true, "kind": "postal_code" },
    { "name": "cep_destino", "required": true, "kind": "postal_code" },
    { "name": "cnpj", "required": true, "kind": "tax_id" },
    { "name": "codigo_servico", "kind": "string", "length": 5, "numeric_only": true },
    { "name": "aviso_recebimento", "kind": "boolean" },
    { "name": "quantidade", "kind": "integer" },
    { "name": "peso", "kind": "decimal" }
]"#;

/// Initializes logging for the example.
fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let specs = FieldSpec::list_from_json(DECLARATIONS)?;
    let mut fields = build_all(&specs)?;
    info!("Built {} fields", fields.len());

    let values: [Value; 7] = [
        "01310-100".into(),
        "70002-900".into(),
        "12.345.678/0001-95".into(),
        "04014".into(),
        true.into(),
        1.into(),
        0.35.into(),
    ];
    for (field, value) in fields.iter_mut().zip(values) {
        field.set(value)?;
    }

    // Rejected values leave the stored value untouched.
    if let Err(e) = fields[5].set(2.5) {
        warn!("Rejected: {}", e);
    }

    let mut buf = BytesMut::with_capacity(256);
    for field in &fields {
        field.encode_into(&mut buf);
    }
    info!("Fragment: {}", String::from_utf8_lossy(&buf));

    let missing: Vec<&str> = fields
        .iter()
        .filter(|f| f.is_required() && !f.is_set())
        .map(AnyField::name)
        .collect();
    info!("Unset required fields: {:?}", missing);

    Ok(())
}
