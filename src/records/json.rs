//! JSON record loading.
//!
//! Supported inputs:
//! - A JSON array of objects: `[{"a":1}, {"a":2}]`
//! - A single JSON object: `{"a":1}`
//! - Newline-delimited JSON (NDJSON): `{"a":1}\n{"a":2}\n`

use std::fs;
use std::path::Path;

use crate::error::{DataViewError, DataViewResult};

use super::{records_from_values, Record};

/// Load records from a JSON or NDJSON file.
pub fn records_from_path(path: impl AsRef<Path>) -> DataViewResult<Vec<Record>> {
    let text = fs::read_to_string(path)?;
    records_from_str(&text)
}

/// Load records from an in-memory JSON or NDJSON string.
pub fn records_from_str(input: &str) -> DataViewResult<Vec<Record>> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DataViewError::InvalidRecords {
            message: "json input is empty".to_string(),
        });
    }

    // First try parsing as a single JSON value (array or object).
    if let Ok(v) = serde_json::from_str::<serde_json::Value>(trimmed) {
        match v {
            serde_json::Value::Array(items) => records_from_values(items),
            serde_json::Value::Object(_) => records_from_values(vec![v]),
            _ => Err(DataViewError::InvalidRecords {
                message: "json must be an object, an array of objects, or NDJSON".to_string(),
            }),
        }
    } else {
        // Fall back to NDJSON.
        let mut values = Vec::new();
        for (i, line) in trimmed.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let v = serde_json::from_str::<serde_json::Value>(line).map_err(|e| {
                DataViewError::InvalidRecords {
                    message: format!("invalid ndjson at line {}: {}", i + 1, e),
                }
            })?;
            values.push(v);
        }
        records_from_values(values)
    }
}
