//! Record source: reads a record file into memory.
//!
//! Record files hold a JSON array of objects. Files exported for a browser
//! often wrap that array in a script assignment such as
//! `var vessels = [ ... ];`, so the wrapper is stripped before decoding.

use std::fs;
use std::path::Path;

use recsieve::Record;
use thiserror::Error;

/// Keywords that mark a file as a script assignment rather than bare JSON.
const ASSIGNMENT_KEYWORDS: &[&str] = &["var", "let", "const"];

/// Errors that can occur while loading records.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read record file: {0}")]
    Io(#[from] std::io::Error),

    #[error("no JSON array found after script assignment")]
    MissingArray,

    #[error("invalid record data: {0}")]
    Json(#[from] serde_json::Error),
}

/// Reads and decodes the record file at `path`.
pub fn load_records(path: &Path) -> Result<Vec<Record>, SourceError> {
    let text = fs::read_to_string(path)?;
    let records = parse_records(&text)?;
    tracing::debug!(path = %path.display(), count = records.len(), "decoded record file");
    Ok(records)
}

/// Decodes record file contents.
///
/// Every element of the array must be an object.
pub fn parse_records(text: &str) -> Result<Vec<Record>, SourceError> {
    let json = strip_wrapper(text)?;
    Ok(serde_json::from_str(json)?)
}

/// Returns the JSON part of `text`.
///
/// Plain JSON is returned unchanged. For a script assignment the slice from
/// the first `[` to the last `]` is returned, which drops the declaration
/// and any trailing `;`.
pub fn strip_wrapper(text: &str) -> Result<&str, SourceError> {
    let trimmed = text.trim_start();
    if !is_assignment(trimmed) {
        return Ok(text);
    }

    let start = trimmed.find('[').ok_or(SourceError::MissingArray)?;
    let end = trimmed.rfind(']').ok_or(SourceError::MissingArray)?;
    if end < start {
        return Err(SourceError::MissingArray);
    }
    Ok(&trimmed[start..=end])
}

fn is_assignment(text: &str) -> bool {
    ASSIGNMENT_KEYWORDS.iter().any(|keyword| {
        text.strip_prefix(*keyword)
            .is_some_and(|rest| rest.starts_with(char::is_whitespace))
    })
}
