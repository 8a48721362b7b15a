//! Schema inference from one representative record.
//!
//! The builder walks every field of the record, maps runtime kinds to column
//! types, recursively flattens nested objects into dot-qualified names,
//! classifies columns by role, and registers a transformer per column. It
//! either produces the complete result or fails atomically: an unsupported
//! field kind anywhere aborts construction with the offending qualified path.

use crate::error::{DataViewError, DataViewResult};
use crate::records::{field_kind, FieldKind, Record};
use crate::transform::{identity_transform, min_max_transform, Transform, TransformerRegistry};
use crate::types::{Column, ColumnRole, ColumnType, Schema, DERIVED_TEXT_PREFIX};

/// Everything schema inference produces, threaded through the recursive walk
/// as one explicit accumulator.
#[derive(Debug, Default)]
pub struct SchemaParts {
    /// Ordered column schema.
    pub schema: Schema,
    /// One registered transform per column.
    pub transformers: TransformerRegistry,
    /// Names the consumer concatenates into its feature vector: text features
    /// under their own name, other features under their derived shadow name.
    /// Never contains the indicative column.
    pub feature_columns: Vec<String>,
}

impl SchemaParts {
    fn push_column(&mut self, column: Column, transform: Transform) {
        self.transformers.insert(column.name.clone(), transform);
        self.schema.push(column);
    }
}

/// Infer a schema from `record`, designating `indicative_column` as the label.
///
/// The indicative name is compared against the *unqualified* leaf name at any
/// depth; the first match in walk order becomes the single Indicative column.
/// Construction fails if no field matches, or if any field's kind is outside
/// the supported set.
pub fn build_schema(record: &Record, indicative_column: &str) -> DataViewResult<SchemaParts> {
    let mut parts = SchemaParts::default();
    let mut indicative_seen = false;
    walk(record, "", indicative_column, &mut parts, &mut indicative_seen)?;
    if !indicative_seen {
        return Err(DataViewError::IndicativeColumnMissing {
            column: indicative_column.to_string(),
        });
    }
    Ok(parts)
}

fn walk(
    record: &Record,
    prefix: &str,
    indicative: &str,
    parts: &mut SchemaParts,
    indicative_seen: &mut bool,
) -> DataViewResult<()> {
    for (name, value) in record {
        let qualified = format!("{prefix}{name}");
        let kind = field_kind(value);

        let column_type = match kind {
            FieldKind::Bool => ColumnType::Bool,
            // Integers coerce to floating representation; explicit nulls
            // coerce to zero and are therefore numeric too.
            FieldKind::Integer | FieldKind::Float | FieldKind::Null => ColumnType::Number,
            FieldKind::Text => ColumnType::Text,
            FieldKind::Nested => {
                if let Some(nested) = value.as_object() {
                    walk(
                        nested,
                        &format!("{qualified}."),
                        indicative,
                        parts,
                        indicative_seen,
                    )?;
                }
                continue;
            }
            FieldKind::Other(kind_name) => {
                return Err(DataViewError::UnsupportedField {
                    path: qualified,
                    kind: kind_name.to_string(),
                });
            }
        };

        let transform = match column_type {
            ColumnType::Number => min_max_transform(),
            ColumnType::Bool | ColumnType::Text => identity_transform(),
        };

        if !*indicative_seen && name == indicative {
            *indicative_seen = true;
            parts.push_column(
                Column::new(qualified, column_type, ColumnRole::Indicative),
                transform,
            );
            continue;
        }

        parts.push_column(
            Column::new(qualified.clone(), column_type, ColumnRole::Feature),
            transform,
        );

        if column_type == ColumnType::Text {
            parts.feature_columns.push(qualified);
        } else {
            // Non-text features are exposed to text featurization through a
            // text-typed shadow; the original typed column stays available
            // for other consumers.
            let shadow = format!("{DERIVED_TEXT_PREFIX}{qualified}");
            parts.feature_columns.push(shadow.clone());
            parts.push_column(
                Column::new(shadow, ColumnType::Text, ColumnRole::DerivedFeature),
                identity_transform(),
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::build_schema;
    use crate::error::DataViewError;
    use crate::records::records_from_str;
    use crate::types::{ColumnRole, ColumnType, ResolveStrategy};

    fn first_record(json: &str) -> crate::records::Record {
        records_from_str(json).unwrap().into_iter().next().unwrap()
    }

    #[test]
    fn nested_objects_flatten_to_dot_qualified_leaves() {
        let record = first_record(r#"{"cat": "x", "a": {"b": 1}}"#);
        let parts = build_schema(&record, "cat").unwrap();
        let col = parts.schema.column("a.b").expect("flattened column");
        assert_eq!(col.column_type, ColumnType::Number);
        assert_eq!(col.role, ColumnRole::Feature);
        // The nested object itself never becomes a column.
        assert!(parts.schema.column("a").is_none());
    }

    #[test]
    fn null_fields_type_as_number() {
        let record = first_record(r#"{"cat": "x", "maybe": null}"#);
        let parts = build_schema(&record, "cat").unwrap();
        assert_eq!(
            parts.schema.column("maybe").unwrap().column_type,
            ColumnType::Number
        );
        assert!(parts.feature_columns.contains(&"__Tx__maybe".to_string()));
    }

    #[test]
    fn text_features_enter_feature_list_directly() {
        let record = first_record(r#"{"cat": "x", "city": "Berlin"}"#);
        let parts = build_schema(&record, "cat").unwrap();
        assert_eq!(parts.feature_columns, ["city"]);
        assert!(parts.schema.column("__Tx__city").is_none());
    }

    #[test]
    fn non_text_features_get_a_derived_shadow() {
        let record = first_record(r#"{"cat": "x", "age": 5, "active": true}"#);
        let parts = build_schema(&record, "cat").unwrap();

        for name in ["age", "active"] {
            let shadow_name = format!("__Tx__{name}");
            let shadow = parts.schema.column(&shadow_name).expect("shadow column");
            assert_eq!(shadow.column_type, ColumnType::Text);
            assert_eq!(shadow.role, ColumnRole::DerivedFeature);
            assert_eq!(
                shadow.strategy,
                ResolveStrategy::DerivedText {
                    path: name.to_string()
                }
            );
            assert!(parts.feature_columns.contains(&shadow_name));
            assert!(!parts.feature_columns.contains(&name.to_string()));
        }
    }

    #[test]
    fn indicative_matches_unqualified_leaf_name_at_depth() {
        let record = first_record(r#"{"user": {"cat": "x"}, "age": 1}"#);
        let parts = build_schema(&record, "cat").unwrap();
        let indicative = parts.schema.indicative().unwrap();
        assert_eq!(indicative.name, "user.cat");
        // No shadow, and never in the feature list.
        assert!(parts.schema.column("__Tx__user.cat").is_none());
        assert_eq!(parts.feature_columns, ["__Tx__age"]);
    }

    #[test]
    fn only_first_indicative_match_is_the_label() {
        let record = first_record(r#"{"cat": "x", "pet": {"cat": "y"}}"#);
        let parts = build_schema(&record, "cat").unwrap();
        let indicatives: Vec<&str> = parts
            .schema
            .iter()
            .filter(|c| c.role == ColumnRole::Indicative)
            .map(|c| c.name.as_str())
            .collect();
        assert_eq!(indicatives, ["cat"]);
        assert_eq!(
            parts.schema.column("pet.cat").unwrap().role,
            ColumnRole::Feature
        );
    }

    #[test]
    fn unsupported_field_aborts_with_qualified_path() {
        let record = first_record(r#"{"cat": "x", "outer": {"tags": ["a", "b"]}}"#);
        let err = build_schema(&record, "cat").unwrap_err();
        match err {
            DataViewError::UnsupportedField { path, kind } => {
                assert_eq!(path, "outer.tags");
                assert_eq!(kind, "array");
            }
            other => panic!("expected UnsupportedField, got {other:?}"),
        }
    }

    #[test]
    fn missing_indicative_fails() {
        let record = first_record(r#"{"age": 5}"#);
        let err = build_schema(&record, "cat").unwrap_err();
        assert!(matches!(
            err,
            DataViewError::IndicativeColumnMissing { column } if column == "cat"
        ));
    }

    #[test]
    fn schema_build_is_deterministic() {
        let record = first_record(r#"{"cat": "x", "age": 5, "user": {"name": "Ada", "score": 1.5}}"#);
        let a = build_schema(&record, "cat").unwrap();
        let b = build_schema(&record, "cat").unwrap();
        assert_eq!(a.schema, b.schema);
        assert_eq!(a.feature_columns, b.feature_columns);
    }

    #[test]
    fn every_column_has_a_transformer() {
        let record = first_record(r#"{"cat": "x", "age": 5, "name": "Ada"}"#);
        let parts = build_schema(&record, "cat").unwrap();
        for column in parts.schema.iter() {
            assert!(
                parts.transformers.contains(&column.name),
                "no transformer for '{}'",
                column.name
            );
        }
        assert_eq!(parts.transformers.len(), parts.schema.len());
    }
}
