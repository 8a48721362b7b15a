//! The record representation and loaders.
//!
//! A [`Record`] is one semi-structured input document: an ordered set of named
//! fields holding scalars or nested records. Records are read-only once
//! loaded; the view and its cursors only ever look fields up by name.
//!
//! Loaders:
//! - [`json`]: JSON array-of-objects, single object, or NDJSON
//! - [`csv`]: header-driven CSV rows with scalar kind inference
//! - [`records_from_values`]: programmatic construction from `serde_json` values

pub mod csv;
pub mod json;

use crate::error::{DataViewError, DataViewResult};

pub use csv::{records_from_csv_path, records_from_csv_reader};
pub use json::{records_from_path, records_from_str};

/// One semi-structured input document with named, possibly nested, fields.
///
/// Field order is document order (`serde_json`'s `preserve_order` feature),
/// which is what makes inferred column order deterministic.
pub type Record = serde_json::Map<String, serde_json::Value>;

/// Runtime type tag of a record field.
///
/// The closed set of kinds schema inference understands. Anything else
/// ([`FieldKind::Other`]) aborts schema construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Boolean.
    Bool,
    /// Integer number.
    Integer,
    /// Floating point number.
    Float,
    /// UTF-8 text.
    Text,
    /// Explicit null.
    Null,
    /// Nested object; flattened into its leaf scalars, never a column itself.
    Nested,
    /// Unsupported kind, named for diagnostics (e.g. `"array"`).
    Other(&'static str),
}

impl FieldKind {
    /// Human-readable kind name, used in error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Text => "string",
            Self::Null => "null",
            Self::Nested => "object",
            Self::Other(name) => name,
        }
    }
}

/// Tag a field value with its runtime kind.
pub fn field_kind(value: &serde_json::Value) -> FieldKind {
    match value {
        serde_json::Value::Bool(_) => FieldKind::Bool,
        serde_json::Value::Number(n) => {
            if n.is_i64() || n.is_u64() {
                FieldKind::Integer
            } else {
                FieldKind::Float
            }
        }
        serde_json::Value::String(_) => FieldKind::Text,
        serde_json::Value::Null => FieldKind::Null,
        serde_json::Value::Object(_) => FieldKind::Nested,
        serde_json::Value::Array(_) => FieldKind::Other("array"),
    }
}

/// Convert already-parsed JSON values into records.
///
/// Every value must be an object; the offending 1-based position is reported
/// otherwise.
pub fn records_from_values(values: Vec<serde_json::Value>) -> DataViewResult<Vec<Record>> {
    let mut records = Vec::with_capacity(values.len());
    for (idx0, value) in values.into_iter().enumerate() {
        match value {
            serde_json::Value::Object(map) => records.push(map),
            other => {
                return Err(DataViewError::InvalidRecords {
                    message: format!(
                        "record {} is not a json object (found {})",
                        idx0 + 1,
                        field_kind(&other).name()
                    ),
                });
            }
        }
    }
    Ok(records)
}
