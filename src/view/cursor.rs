//! Forward-only row cursor with memoized per-column getters.
//!
//! A cursor starts before the first row (position −1). [`RowCursor::move_next`]
//! always increments the position and reports whether the new position is a
//! valid row; an exhausted cursor stays exhausted. Getters are built on first
//! request per column from the column's precomputed [`ResolveStrategy`] and
//! cached by column name.
//!
//! Getter closures share the cursor's position through an `Rc<Cell<i64>>` and
//! borrow only the view, so a getter handle obtained once stays valid across
//! `move_next` calls. Cursors are single-threaded by construction.

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::{DataViewError, DataViewResult};
use crate::resolve::resolve_path;
use crate::types::{CellValue, ColumnType, ResolveStrategy, RowId};

use super::DataView;

/// A memoized getter bound to one column of a cursor's view.
///
/// Evaluates lazily against the row the cursor is positioned on at call time;
/// cloning is cheap and shares the underlying closure.
#[derive(Clone)]
pub struct ValueGetter<'a> {
    inner: Rc<dyn Fn() -> CellValue + 'a>,
}

impl std::fmt::Debug for ValueGetter<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValueGetter").finish_non_exhaustive()
    }
}

impl ValueGetter<'_> {
    /// Evaluate against the cursor's current row.
    pub fn get(&self) -> CellValue {
        (*self.inner)()
    }
}

/// Getter for the cursor's stable row identifier.
#[derive(Clone)]
pub struct IdGetter {
    position: Rc<Cell<i64>>,
}

impl IdGetter {
    /// Identifier of the cursor's current row.
    pub fn get(&self) -> RowId {
        RowId::at(self.position.get().max(0) as u64)
    }
}

/// A stateful, forward-only row iterator over a [`DataView`].
pub struct RowCursor<'a> {
    view: &'a DataView,
    position: Rc<Cell<i64>>,
    getters: HashMap<String, ValueGetter<'a>>,
}

impl<'a> RowCursor<'a> {
    pub(super) fn new(view: &'a DataView) -> Self {
        Self {
            view,
            position: Rc::new(Cell::new(-1)),
            getters: HashMap::new(),
        }
    }

    /// Current position: −1 before the first row, then the 0-based row index.
    pub fn position(&self) -> i64 {
        self.position.get()
    }

    /// Advance to the next row.
    ///
    /// Always increments the position by one; returns `true` iff the new
    /// position is a valid row. Never moves backward or resets, and keeps
    /// returning `false` once the view is exhausted.
    pub fn move_next(&mut self) -> bool {
        self.position.set(self.position.get() + 1);
        self.position.get() < self.view.row_count() as i64
    }

    /// Get (building and caching on first request) the typed getter for `column`.
    ///
    /// Requesting a column name not present in the schema is a caller bug and
    /// fails with [`DataViewError::UnknownColumn`]. Per-row absence of a known
    /// column is not an error: the getter yields the zero-value of `requested`.
    ///
    /// The cache is keyed by column name alone; the `requested` type of the
    /// first call for a column wins for the cursor's lifetime.
    pub fn getter(
        &mut self,
        requested: ColumnType,
        column: &str,
    ) -> DataViewResult<ValueGetter<'a>> {
        if let Some(cached) = self.getters.get(column) {
            return Ok(cached.clone());
        }

        let view = self.view;
        let col = view
            .schema()
            .column(column)
            .ok_or_else(|| DataViewError::UnknownColumn {
                column: column.to_string(),
            })?;

        let position = Rc::clone(&self.position);
        let inner: Rc<dyn Fn() -> CellValue + 'a> = Rc::new(move || {
            let row = usize::try_from(position.get())
                .ok()
                .and_then(|i| view.records().get(i));
            let Some(record) = row else {
                // Not positioned on a row; getters are total and absence-like.
                return CellValue::zero(requested);
            };

            match &col.strategy {
                ResolveStrategy::Direct => match resolve_path(record, &col.name) {
                    None => CellValue::zero(requested),
                    Some(value) => coerce_direct(requested, value),
                },
                ResolveStrategy::DerivedText { path } => match resolve_path(record, path) {
                    None => CellValue::zero(requested),
                    Some(value) => CellValue::Text(scalar_text(value)),
                },
                ResolveStrategy::LabelBool { path } => match resolve_path(record, path) {
                    None => CellValue::Bool(false),
                    Some(value) => CellValue::Bool(value.as_bool().unwrap_or(false)),
                },
            }
        });

        let getter = ValueGetter { inner };
        self.getters.insert(column.to_string(), getter.clone());
        Ok(getter)
    }

    /// Getter for the current row's stable identifier.
    ///
    /// The identifier derives directly from the position (not from row
    /// content), with a constant secondary component.
    pub fn id_getter(&self) -> IdGetter {
        IdGetter {
            position: Rc::clone(&self.position),
        }
    }

    /// Whether `column` participates in traversal. Column pruning is not
    /// supported, so every column is always active.
    pub fn is_active(&self, _column: &str) -> bool {
        true
    }
}

impl std::fmt::Debug for RowCursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowCursor")
            .field("position", &self.position.get())
            .field("cached_getters", &self.getters.len())
            .finish()
    }
}

/// Coerce a present value for a directly resolved column.
///
/// Textual values come back as text regardless of the requested type; nulls
/// become the zero-value; other scalars coerce to the requested type.
fn coerce_direct(requested: ColumnType, value: &serde_json::Value) -> CellValue {
    match value {
        serde_json::Value::Null => CellValue::zero(requested),
        serde_json::Value::String(s) => CellValue::Text(s.clone()),
        other => match requested {
            ColumnType::Text => CellValue::Text(scalar_text(other)),
            ColumnType::Number => CellValue::Number(other.as_f64().unwrap_or(0.0)),
            ColumnType::Bool => CellValue::Bool(other.as_bool().unwrap_or(false)),
        },
    }
}

/// Text representation of a scalar value.
///
/// Floats format through `f64`'s `Display`, so `5.0` renders as `"5"`.
fn scalar_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => String::new(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                format!("{}", n.as_f64().unwrap_or(0.0))
            }
        }
        other => other.to_string(),
    }
}
