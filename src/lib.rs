//! `record-dataview` turns a collection of heterogeneous, semi-structured
//! records (nested JSON documents with mixed scalar types) into a columnar,
//! schema-typed [`view::DataView`] for ML feature pipelines.
//!
//! Given one representative record, the view:
//!
//! - infers a flat column [`types::Schema`], recursively flattening nested
//!   objects into dot-qualified names (`"address.zip"`);
//! - classifies columns by role: the single **indicative** (label) column,
//!   directly usable **feature** columns, and synthesized text-typed
//!   **derived feature** shadows of non-text features;
//! - registers a per-column transformer for the external pipeline to invoke;
//! - exposes rows through a forward-only [`view::RowCursor`] with memoized,
//!   lazily evaluated per-column getters.
//!
//! ## Quick example
//!
//! ```
//! use record_dataview::records::records_from_str;
//! use record_dataview::types::{CellValue, ColumnRole, ColumnType};
//! use record_dataview::view::DataView;
//!
//! # fn main() -> Result<(), record_dataview::DataViewError> {
//! let records = records_from_str(r#"[
//!     {"cat": "x", "age": 5.0},
//!     {"cat": "y", "age": 3.0}
//! ]"#)?;
//! let view = DataView::new(records, "cat")?;
//!
//! assert_eq!(view.row_count(), 2);
//! // "age" keeps its typed column; its text shadow is what gets featurized.
//! assert_eq!(view.feature_column_names(), ["__Tx__age"]);
//!
//! let mut cursor = view.cursor();
//! let get_cat = cursor.getter(ColumnType::Text, "cat")?;
//! let get_age_text = cursor.getter(ColumnType::Text, "__Tx__age")?;
//!
//! assert!(cursor.move_next());
//! assert_eq!(get_cat.get(), CellValue::Text("x".to_string()));
//! assert_eq!(get_age_text.get(), CellValue::Text("5".to_string()));
//! # Ok(())
//! # }
//! ```
//!
//! ## Absence vs. errors
//!
//! The first record is canonical for the whole collection; later records are
//! never re-validated. A field missing from some row is a normal signal, not
//! an error: its getter yields the column type's zero-value (`false`, `0`,
//! `""`). Loud failures are reserved for construction (unsupported field
//! kinds, missing indicative column) and caller bugs (getters for unknown
//! columns).
//!
//! ## Modules
//!
//! - [`view`]: the data view, cursors, and construction observability
//! - [`schema`]: schema inference from a representative record
//! - [`records`]: the record representation and JSON/CSV loaders
//! - [`resolve`]: dot-qualified path resolution
//! - [`transform`]: per-column transformers and the pipeline boundary
//! - [`types`]: the column data model
//! - [`currency`]: a standalone currency value type
//! - [`error`]: the shared error enum

pub mod currency;
pub mod error;
pub mod records;
pub mod resolve;
pub mod schema;
pub mod transform;
pub mod types;
pub mod view;

pub use error::{DataViewError, DataViewResult};
