use thiserror::Error;

/// Convenience result type for data-view operations.
pub type DataViewResult<T> = Result<T, DataViewError>;

/// Error type shared across record loading, schema construction, and cursor use.
///
/// Per-row absence of a *known* column is never an error: cursor getters map it to
/// the column's zero-value. Everything here is either malformed input, a fatal
/// schema problem, or a caller bug.
#[derive(Debug, Error)]
pub enum DataViewError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parse error while loading records.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error while loading records.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// The record input was readable but not usable (non-object rows, empty input, etc.).
    #[error("invalid records: {message}")]
    InvalidRecords { message: String },

    /// A data view needs at least one record to infer its schema from.
    #[error("empty record collection: cannot infer a schema without a representative record")]
    EmptyCollection,

    /// A field of the representative record has a type outside the supported set.
    ///
    /// Fatal to the whole view: no partial schema is produced.
    #[error("unsupported type '{kind}' of field '{path}'")]
    UnsupportedField { path: String, kind: String },

    /// No field of the representative record matched the requested indicative column name.
    #[error("indicative column '{column}' not found in the representative record")]
    IndicativeColumnMissing { column: String },

    /// A cursor getter was requested for a column name that is not in the schema.
    ///
    /// This is a programming error on the caller's side, distinct from per-row absence.
    #[error("unknown column '{column}': not present in the schema")]
    UnknownColumn { column: String },
}
