//! Per-column transformers and the pipeline boundary.
//!
//! Each column registers one [`Transform`] during schema construction. The
//! external pipeline drives them: it hands in its shared [`PipelineContext`]
//! and the current view, and receives the next view. Most columns get the
//! identity transform; numeric columns get a min-max normalization transform
//! that delegates the math to the pipeline's normalizer.
//!
//! Training, normalization math, and model persistence are the pipeline's
//! business; this module only fixes the calling convention.

use std::collections::HashMap;
use std::sync::Arc;

use crate::types::Schema;
use crate::view::DataView;

/// A data view as passed between pipeline stages.
pub type SharedView = Arc<DataView>;

/// A per-column transformation: `(column name, shared context, current view) -> next view`.
pub type Transform = Arc<dyn Fn(&str, &mut dyn PipelineContext, SharedView) -> SharedView + Send + Sync>;

/// The external pipeline's side of the transformer contract.
///
/// The crate never implements normalization itself; numeric transforms call
/// back through this trait.
pub trait PipelineContext {
    /// Fit and apply min-max normalization to `column`, returning the next view.
    fn normalize_min_max(&mut self, column: &str, view: SharedView) -> SharedView;
}

/// A [`PipelineContext`] for pipelines without a numeric normalizer.
///
/// All transforms become the identity.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopContext;

impl PipelineContext for NoopContext {
    fn normalize_min_max(&mut self, _column: &str, view: SharedView) -> SharedView {
        view
    }
}

/// The identity transform: returns the view unchanged.
pub fn identity_transform() -> Transform {
    Arc::new(|_name: &str, _ctx: &mut dyn PipelineContext, view: SharedView| view)
}

/// A transform that min-max normalizes its column via the pipeline context.
pub fn min_max_transform() -> Transform {
    Arc::new(|column: &str, ctx: &mut dyn PipelineContext, view: SharedView| {
        ctx.normalize_min_max(column, view)
    })
}

/// Mapping from column name to its registered [`Transform`].
///
/// Built once during schema construction, read-only afterwards.
#[derive(Default, Clone)]
pub struct TransformerRegistry {
    transforms: HashMap<String, Transform>,
}

impl TransformerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a transform for `column`. Later registrations replace earlier ones.
    pub fn insert(&mut self, column: impl Into<String>, transform: Transform) {
        self.transforms.insert(column.into(), transform);
    }

    /// Look up the transform registered for `column`.
    pub fn get(&self, column: &str) -> Option<&Transform> {
        self.transforms.get(column)
    }

    /// Whether a transform is registered for `column`.
    pub fn contains(&self, column: &str) -> bool {
        self.transforms.contains_key(column)
    }

    /// Number of registered transforms.
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns true if no transforms are registered.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Apply every registered transform in schema order.
    ///
    /// Schema order (not map order) keeps the pipeline deterministic.
    pub fn apply_all(
        &self,
        schema: &Schema,
        ctx: &mut dyn PipelineContext,
        view: SharedView,
    ) -> SharedView {
        let mut current = view;
        for column in schema.iter() {
            if let Some(transform) = self.get(&column.name) {
                current = transform(&column.name, ctx, current);
            }
        }
        current
    }
}

impl std::fmt::Debug for TransformerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransformerRegistry")
            .field("transforms_len", &self.transforms.len())
            .finish()
    }
}
