//! The columnar data view.
//!
//! A [`DataView`] owns an ordered record collection, the schema inferred from
//! its first record, the feature column name list, and the transformer
//! registry. Consumers read it through forward-only [`RowCursor`]s.
//!
//! The first record is treated as canonical for the whole collection; later
//! records are never re-validated. A later record that diverges in shape reads
//! as absent values (zero-values), never as an error.

pub mod cursor;
pub mod observability;

use std::fmt;
use std::sync::Arc;

use crate::error::{DataViewError, DataViewResult};
use crate::records::Record;
use crate::schema::build_schema;
use crate::transform::TransformerRegistry;
use crate::types::Schema;

pub use cursor::{IdGetter, RowCursor, ValueGetter};
pub use observability::{CompositeObserver, StdErrObserver, ViewContext, ViewObserver, ViewStats};

/// Options controlling view construction.
///
/// Use [`Default`] for common cases.
#[derive(Default, Clone)]
pub struct ViewOptions {
    /// Optional observer for construction outcomes.
    pub observer: Option<Arc<dyn ViewObserver>>,
}

impl fmt::Debug for ViewOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewOptions")
            .field("observer_set", &self.observer.is_some())
            .finish()
    }
}

/// A columnar, schema-typed view over a collection of records.
#[derive(Clone)]
pub struct DataView {
    records: Vec<Record>,
    schema: Schema,
    feature_columns: Vec<String>,
    transformers: TransformerRegistry,
    indicative_column: String,
}

impl DataView {
    /// Build a view from a non-empty record collection, designating
    /// `indicative_column` as the label.
    ///
    /// Schema inference runs once against the first record. Construction is
    /// atomic: any unsupported field kind fails the whole view.
    ///
    /// ```
    /// use record_dataview::records::records_from_str;
    /// use record_dataview::view::DataView;
    ///
    /// # fn main() -> Result<(), record_dataview::DataViewError> {
    /// let records = records_from_str(r#"[{"cat":"x","age":5.0},{"cat":"y","age":3.0}]"#)?;
    /// let view = DataView::new(records, "cat")?;
    /// assert_eq!(view.row_count(), 2);
    /// assert_eq!(view.feature_column_names(), ["__Tx__age"]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(records: Vec<Record>, indicative_column: impl Into<String>) -> DataViewResult<Self> {
        Self::with_options(records, indicative_column, &ViewOptions::default())
    }

    /// Like [`DataView::new`], reporting the construction outcome to the
    /// observer configured in `options`.
    pub fn with_options(
        records: Vec<Record>,
        indicative_column: impl Into<String>,
        options: &ViewOptions,
    ) -> DataViewResult<Self> {
        let indicative_column = indicative_column.into();
        let ctx = ViewContext {
            indicative_column: indicative_column.clone(),
            rows: records.len(),
        };

        let result = Self::build(records, indicative_column);

        if let Some(obs) = options.observer.as_ref() {
            match &result {
                Ok(view) => obs.on_view_built(
                    &ctx,
                    ViewStats {
                        columns: view.schema.len(),
                        feature_columns: view.feature_columns.len(),
                    },
                ),
                Err(e) => obs.on_schema_error(&ctx, e),
            }
        }

        result
    }

    fn build(records: Vec<Record>, indicative_column: String) -> DataViewResult<Self> {
        let representative = records.first().ok_or(DataViewError::EmptyCollection)?;
        let parts = build_schema(representative, &indicative_column)?;

        Ok(Self {
            records,
            schema: parts.schema,
            feature_columns: parts.feature_columns,
            transformers: parts.transformers,
            indicative_column,
        })
    }

    /// Total record count.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// The inferred column schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Ordered names the consumer concatenates into a single feature vector.
    ///
    /// Text features appear under their own name, other features under their
    /// derived-text shadow name; the indicative column never appears.
    pub fn feature_column_names(&self) -> &[String] {
        &self.feature_columns
    }

    /// Per-column transformers, keyed by column name.
    pub fn transformers(&self) -> &TransformerRegistry {
        &self.transformers
    }

    /// The designated indicative (label) column name, as requested by the caller.
    pub fn indicative_column(&self) -> &str {
        &self.indicative_column
    }

    /// The underlying records, in stored order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Whether shuffled row access is supported. Always `false`: traversal
    /// order is collection order, which downstream determinism depends on.
    pub fn can_shuffle(&self) -> bool {
        false
    }

    /// Create a fresh forward-only cursor over the view.
    ///
    /// Each call returns an independent cursor; position state is never shared.
    pub fn cursor(&self) -> RowCursor<'_> {
        RowCursor::new(self)
    }

    /// Honor a cursor-set request with a single cursor.
    ///
    /// Concurrent partitioned scans are not supported; the returned vector
    /// always has length 1 regardless of `n`.
    pub fn cursor_set(&self, n: usize) -> Vec<RowCursor<'_>> {
        let _ = n;
        vec![self.cursor()]
    }
}

impl fmt::Debug for DataView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataView")
            .field("rows", &self.records.len())
            .field("columns", &self.schema.len())
            .field("indicative_column", &self.indicative_column)
            .finish()
    }
}
