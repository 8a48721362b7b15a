//! Core column data model.
//!
//! A [`Schema`] is an ordered, append-only list of [`Column`]s inferred from one
//! representative record. Each column carries its [`ColumnType`], its [`ColumnRole`],
//! and a precomputed [`ResolveStrategy`] so cursors never have to re-parse
//! reserved name prefixes at traversal time.

use serde::{Deserialize, Serialize};

/// Reserved prefix for derived text-feature shadow columns.
///
/// A non-text, non-indicative column `x` gets a text-typed shadow named
/// `__Tx__x`; downstream text featurization operates uniformly over text
/// columns, so the shadow (not `x` itself) is what enters the feature list.
pub const DERIVED_TEXT_PREFIX: &str = "__Tx__";

/// Reserved prefix for boolean label shadow columns.
pub const LABEL_BOOL_PREFIX: &str = "__Lbl__";

/// Logical data type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
    /// Boolean.
    Bool,
    /// 64-bit floating point number. Integers and nulls coerce into this type.
    Number,
    /// UTF-8 text.
    Text,
}

/// Role of a column within a schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnRole {
    /// The single designated label/target column.
    Indicative,
    /// A directly usable feature column.
    Feature,
    /// A synthesized text-typed shadow of a non-text feature column.
    DerivedFeature,
}

/// How a cursor resolves a column's value against the current record.
///
/// Computed once from the column name when the column is constructed; the
/// reserved prefixes are a naming convention, not something getters should
/// string-match per row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolveStrategy {
    /// Resolve the column's own qualified name as a dot path.
    Direct,
    /// Resolve `path` (the name minus [`DERIVED_TEXT_PREFIX`]) and coerce to text.
    DerivedText { path: String },
    /// Resolve `path` (the name minus [`LABEL_BOOL_PREFIX`]) and coerce to boolean.
    LabelBool { path: String },
}

impl ResolveStrategy {
    /// Derive the strategy implied by a column name's reserved prefix, if any.
    pub fn for_name(name: &str) -> Self {
        if let Some(path) = name.strip_prefix(DERIVED_TEXT_PREFIX) {
            Self::DerivedText {
                path: path.to_string(),
            }
        } else if let Some(path) = name.strip_prefix(LABEL_BOOL_PREFIX) {
            Self::LabelBool {
                path: path.to_string(),
            }
        } else {
            Self::Direct
        }
    }
}

/// A single named, typed, role-classified column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Qualified column name (dot-separated path from the record root,
    /// e.g. `"address.zip"`), possibly carrying a reserved prefix.
    pub name: String,
    /// Column data type.
    pub column_type: ColumnType,
    /// Column role.
    pub role: ColumnRole,
    /// Resolution strategy, derived from `name` at construction.
    pub strategy: ResolveStrategy,
}

impl Column {
    /// Create a new column. The resolution strategy is derived from `name`.
    pub fn new(name: impl Into<String>, column_type: ColumnType, role: ColumnRole) -> Self {
        let name = name.into();
        let strategy = ResolveStrategy::for_name(&name);
        Self {
            name,
            column_type,
            role,
            strategy,
        }
    }
}

/// An ordered, append-only list of columns describing every record in a view.
///
/// Built exactly once from one representative record; later records are never
/// re-validated against it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    columns: Vec<Column>,
}

impl Schema {
    /// Create a schema from an ordered list of columns.
    pub fn new(columns: Vec<Column>) -> Self {
        Self { columns }
    }

    /// Append a column. Columns are never removed or reordered.
    pub fn push(&mut self, column: Column) {
        self.columns.push(column);
    }

    /// Ordered columns.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Iterate columns in order.
    pub fn iter(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter()
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the index of a column by name, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name == name)
    }

    /// Look up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// The single indicative (label) column, if the schema has one.
    pub fn indicative(&self) -> Option<&Column> {
        self.columns.iter().find(|c| c.role == ColumnRole::Indicative)
    }
}

/// A single typed value produced by a cursor getter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    /// Boolean.
    Bool(bool),
    /// 64-bit float.
    Number(f64),
    /// UTF-8 text.
    Text(String),
}

impl CellValue {
    /// The zero-value substituted when a field is absent for a known column.
    pub fn zero(column_type: ColumnType) -> Self {
        match column_type {
            ColumnType::Bool => Self::Bool(false),
            ColumnType::Number => Self::Number(0.0),
            ColumnType::Text => Self::Text(String::new()),
        }
    }

    /// Boolean payload, if this is a [`CellValue::Bool`].
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Numeric payload, if this is a [`CellValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Text payload, if this is a [`CellValue::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

/// Stable identifier for the cursor's current row.
///
/// Derived directly from the cursor position (not from row content); `batch`
/// is a constant secondary component, always zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RowId {
    /// Row position within the view's stored order.
    pub row: u64,
    /// Constant secondary component.
    pub batch: u64,
}

impl RowId {
    /// Identifier for the row at `position`.
    pub fn at(position: u64) -> Self {
        Self {
            row: position,
            batch: 0,
        }
    }
}
