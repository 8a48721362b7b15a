//! Observer hooks for view construction.
//!
//! Schema inference happens once per view and is the only fallible step, so
//! this is where monitoring attaches: implementors can record metrics, logs,
//! or alerts when a view is built or its schema is rejected.

use std::fmt;
use std::sync::Arc;

use crate::error::DataViewError;

/// Context about a view construction attempt.
#[derive(Debug, Clone)]
pub struct ViewContext {
    /// The requested indicative (label) column name.
    pub indicative_column: String,
    /// Number of records in the collection.
    pub rows: usize,
}

/// Minimal stats reported on successful construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewStats {
    /// Number of inferred columns (including derived shadows).
    pub columns: usize,
    /// Number of feature column names exposed to the consumer.
    pub feature_columns: usize,
}

/// Observer interface for view construction outcomes.
pub trait ViewObserver: Send + Sync {
    /// Called when a view is built successfully.
    fn on_view_built(&self, _ctx: &ViewContext, _stats: ViewStats) {}

    /// Called when schema inference fails.
    fn on_schema_error(&self, _ctx: &ViewContext, _error: &DataViewError) {}
}

/// An observer that fans out callbacks to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ViewObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ViewObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ViewObserver for CompositeObserver {
    fn on_view_built(&self, ctx: &ViewContext, stats: ViewStats) {
        for o in &self.observers {
            o.on_view_built(ctx, stats);
        }
    }

    fn on_schema_error(&self, ctx: &ViewContext, error: &DataViewError) {
        for o in &self.observers {
            o.on_schema_error(ctx, error);
        }
    }
}

/// Logs view construction events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ViewObserver for StdErrObserver {
    fn on_view_built(&self, ctx: &ViewContext, stats: ViewStats) {
        eprintln!(
            "[dataview][ok] indicative={} rows={} columns={} features={}",
            ctx.indicative_column, ctx.rows, stats.columns, stats.feature_columns
        );
    }

    fn on_schema_error(&self, ctx: &ViewContext, error: &DataViewError) {
        eprintln!(
            "[dataview][err] indicative={} rows={} err={}",
            ctx.indicative_column, ctx.rows, error
        );
    }
}
