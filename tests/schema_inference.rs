use record_dataview::records::records_from_str;
use record_dataview::types::{ColumnRole, ColumnType};
use record_dataview::view::DataView;
use record_dataview::DataViewError;

fn view_from(json: &str, indicative: &str) -> Result<DataView, DataViewError> {
    DataView::new(records_from_str(json).unwrap(), indicative)
}

#[test]
fn scalar_only_record_yields_exactly_one_indicative() {
    let view = view_from(
        r#"[{"cat": "x", "age": 5, "score": 1.5, "active": true, "city": "Berlin"}]"#,
        "cat",
    )
    .unwrap();

    let indicatives: Vec<_> = view
        .schema()
        .iter()
        .filter(|c| c.role == ColumnRole::Indicative)
        .collect();
    assert_eq!(indicatives.len(), 1);
    assert_eq!(indicatives[0].name, "cat");
    assert_eq!(indicatives[0].column_type, ColumnType::Text);
}

#[test]
fn nested_object_flattens_to_qualified_number_column() {
    let view = view_from(r#"[{"cat": "x", "a": {"b": 1}}]"#, "cat").unwrap();
    let col = view.schema().column("a.b").expect("column a.b");
    assert_eq!(col.column_type, ColumnType::Number);
}

#[test]
fn non_text_features_shadow_into_feature_names() {
    let view = view_from(r#"[{"cat": "x", "age": 5, "active": true, "city": "Berlin"}]"#, "cat")
        .unwrap();

    // Numeric/boolean features keep their typed column and gain a text shadow.
    for name in ["age", "active"] {
        let shadow = format!("__Tx__{name}");
        let col = view.schema().column(&shadow).expect("shadow column");
        assert_eq!(col.column_type, ColumnType::Text);
        assert_eq!(col.role, ColumnRole::DerivedFeature);
        assert!(view.feature_column_names().contains(&shadow));
        assert!(!view.feature_column_names().contains(&name.to_string()));
    }

    // Text features enter under their own name, with no shadow.
    assert!(view.feature_column_names().contains(&"city".to_string()));
    assert!(view.schema().column("__Tx__city").is_none());

    // The indicative column never enters the feature list.
    assert!(!view.feature_column_names().contains(&"cat".to_string()));
}

#[test]
fn unsupported_array_field_fails_with_qualified_path() {
    let err = view_from(r#"[{"cat": "x", "meta": {"tags": [1, 2]}}]"#, "cat").unwrap_err();
    match err {
        DataViewError::UnsupportedField { path, kind } => {
            assert_eq!(path, "meta.tags");
            assert_eq!(kind, "array");
        }
        other => panic!("expected UnsupportedField, got {other:?}"),
    }
}

#[test]
fn empty_collection_is_rejected() {
    let err = DataView::new(Vec::new(), "cat").unwrap_err();
    assert!(matches!(err, DataViewError::EmptyCollection));
}

#[test]
fn missing_indicative_is_rejected() {
    let err = view_from(r#"[{"age": 5}]"#, "cat").unwrap_err();
    assert!(matches!(err, DataViewError::IndicativeColumnMissing { .. }));
}

#[test]
fn rebuilding_from_the_same_record_is_deterministic() {
    let json = r#"[{"cat": "x", "age": 5, "user": {"name": "Ada", "score": 1.5}, "ok": true}]"#;
    let a = view_from(json, "cat").unwrap();
    let b = view_from(json, "cat").unwrap();

    let names_a: Vec<_> = a.schema().iter().map(|c| (&c.name, c.role)).collect();
    let names_b: Vec<_> = b.schema().iter().map(|c| (&c.name, c.role)).collect();
    assert_eq!(names_a, names_b);
    assert_eq!(a.feature_column_names(), b.feature_column_names());
}

#[test]
fn later_records_are_not_validated_against_the_schema() {
    // The second record has a different shape; construction only looks at the first.
    let view = view_from(r#"[{"cat": "x", "age": 5}, {"cat": "y", "other": [1, 2]}]"#, "cat")
        .unwrap();
    assert_eq!(view.row_count(), 2);
    assert!(view.schema().column("other").is_none());
}
