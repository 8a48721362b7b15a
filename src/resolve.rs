//! Dot-qualified path resolution against a record.
//!
//! Resolution is a pure function of `(record, path)`: absence of any
//! intermediate segment short-circuits to `None` instead of failing. Absence
//! is a normal signal here, not an error.

use crate::records::Record;

/// Resolve a dot-qualified field path against a record.
///
/// Splits `path` on `.`, looks up the first segment in the root record, then
/// successively indexes into nested objects with the remaining segments. Any
/// missing segment, or a non-object intermediate, yields `None`.
///
/// ```
/// use record_dataview::records::records_from_str;
/// use record_dataview::resolve::resolve_path;
///
/// # fn main() -> Result<(), record_dataview::DataViewError> {
/// let records = records_from_str(r#"{"address": {"zip": "90210"}}"#)?;
/// let v = resolve_path(&records[0], "address.zip");
/// assert_eq!(v.and_then(|v| v.as_str()), Some("90210"));
/// assert!(resolve_path(&records[0], "address.street").is_none());
/// assert!(resolve_path(&records[0], "name.first").is_none());
/// # Ok(())
/// # }
/// ```
pub fn resolve_path<'a>(record: &'a Record, path: &str) -> Option<&'a serde_json::Value> {
    let mut segments = path.split('.');
    let mut current = record.get(segments.next()?)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::resolve_path;
    use crate::records::records_from_str;
    use serde_json::Value;

    fn sample() -> crate::records::Record {
        let records = records_from_str(
            r#"{"id": 7, "user": {"name": "Ada", "location": {"zip": "90210"}}, "note": null}"#,
        )
        .unwrap();
        records.into_iter().next().unwrap()
    }

    #[test]
    fn resolves_top_level_field() {
        let record = sample();
        assert_eq!(resolve_path(&record, "id"), Some(&Value::from(7)));
    }

    #[test]
    fn resolves_deeply_nested_field() {
        let record = sample();
        let v = resolve_path(&record, "user.location.zip");
        assert_eq!(v.and_then(Value::as_str), Some("90210"));
    }

    #[test]
    fn null_is_present_not_absent() {
        let record = sample();
        assert_eq!(resolve_path(&record, "note"), Some(&Value::Null));
    }

    #[test]
    fn missing_intermediate_short_circuits() {
        let record = sample();
        assert!(resolve_path(&record, "user.address.zip").is_none());
        assert!(resolve_path(&record, "nothing").is_none());
    }

    #[test]
    fn scalar_intermediate_short_circuits() {
        let record = sample();
        // "id" is a number; indexing into it must yield absence, not a failure.
        assert!(resolve_path(&record, "id.subfield").is_none());
    }
}
