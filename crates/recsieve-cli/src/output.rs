//! Result presentation.
//!
//! [`OutputMode`] selects how matched records are written: indented JSON
//! (one document per record), a YAML list, or flattened CSV.

use clap::ValueEnum;
use recsieve::Record;
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Controls how matched records are rendered.
///
/// This is the user-facing enum for the `--output` CLI flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputMode {
    /// Each record as an indented JSON object
    #[default]
    Json,
    /// The result list as a YAML sequence
    Yaml,
    /// One row per record, columns from every field seen
    Csv,
}

/// Errors that can occur while rendering results.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(String),
}

/// Renders matched records in the given mode.
///
/// An empty result renders as an empty string in JSON and CSV mode.
pub fn render(records: &[&Record], mode: OutputMode) -> Result<String, OutputError> {
    match mode {
        OutputMode::Json => to_json(records),
        OutputMode::Yaml => Ok(serde_yaml::to_string(records)?),
        OutputMode::Csv => to_csv(records),
    }
}

fn to_json(records: &[&Record]) -> Result<String, OutputError> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string_pretty(record)?);
        out.push('\n');
    }
    Ok(out)
}

fn to_csv(records: &[&Record]) -> Result<String, OutputError> {
    if records.is_empty() {
        return Ok(String::new());
    }

    // Records are loosely typed, so the header is the union of all fields in
    // first-seen order.
    let mut headers: Vec<&str> = Vec::new();
    for record in records {
        for key in record.keys() {
            if !headers.contains(&key.as_str()) {
                headers.push(key);
            }
        }
    }

    let mut wtr = csv::Writer::from_writer(vec![]);
    wtr.write_record(&headers)
        .map_err(|e| OutputError::Csv(e.to_string()))?;
    for record in records {
        let row: Vec<String> = headers
            .iter()
            .map(|h| record.get(*h).map(cell).unwrap_or_default())
            .collect();
        wtr.write_record(&row)
            .map_err(|e| OutputError::Csv(e.to_string()))?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| OutputError::Csv(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| OutputError::Csv(e.to_string()))
}

/// Converts a JSON value to a CSV cell.
fn cell(v: &JsonValue) -> String {
    match v {
        JsonValue::String(s) => s.clone(),
        JsonValue::Null => String::new(),
        other => other.to_string(),
    }
}
