//! CSV record loading.
//!
//! Each CSV row becomes one flat [`Record`] keyed by the header names. Cell
//! scalar kinds are inferred per value: integer first, then float, then
//! boolean, otherwise text. Empty cells become explicit nulls, which schema
//! inference later types as Number (the null-to-zero coercion rule).

use std::path::Path;

use crate::error::DataViewResult;

use super::Record;

/// Load records from a CSV file. The file must have a header row.
pub fn records_from_csv_path(path: impl AsRef<Path>) -> DataViewResult<Vec<Record>> {
    let mut rdr = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;
    records_from_csv_reader(&mut rdr)
}

/// Load records from an existing CSV reader.
pub fn records_from_csv_reader<R: std::io::Read>(
    rdr: &mut csv::Reader<R>,
) -> DataViewResult<Vec<Record>> {
    let headers = rdr.headers()?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let row = result?;
        let mut record = Record::new();
        for (header, raw) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), infer_scalar(raw));
        }
        records.push(record);
    }
    Ok(records)
}

fn infer_scalar(raw: &str) -> serde_json::Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return serde_json::Value::Null;
    }
    if let Ok(i) = trimmed.parse::<i64>() {
        return serde_json::Value::from(i);
    }
    if let Ok(f) = trimmed.parse::<f64>() {
        if let Some(n) = serde_json::Number::from_f64(f) {
            return serde_json::Value::Number(n);
        }
    }
    match trimmed.to_ascii_lowercase().as_str() {
        "true" => serde_json::Value::Bool(true),
        "false" => serde_json::Value::Bool(false),
        _ => serde_json::Value::String(trimmed.to_string()),
    }
}
