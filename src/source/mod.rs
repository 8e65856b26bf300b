//! Record input sources.
//!
//! This module loads the ordered collection a view paginates:
//! - File loading for a path argument
//! - Stdin for piped input
//! - Unified InputSource enum for both
//!
//! Two layouts are accepted: a JSON array of objects, or JSON Lines with one
//! object per line (blank lines skipped).

use crate::model::error::InputError;
use crate::model::Record;
use serde_json::Value;
use std::path::PathBuf;
use tracing::info;

pub mod file;
pub mod stdin;

pub use file::FileSource;
pub use stdin::StdinSource;

/// Unified input source for record data.
///
/// Sum type enforces exactly one variant.
#[derive(Debug)]
pub enum InputSource {
    /// File source - read once on construction
    File(FileSource),
    /// Stdin source - reads piped stdin to EOF
    Stdin(StdinSource<std::io::Stdin>),
}

impl InputSource {
    /// Read and parse every record, in input order.
    ///
    /// # Errors
    ///
    /// Returns `InputError::Io` for read failures and `InputError::Malformed`
    /// for content that is not a collection of JSON objects.
    pub fn read_records(self) -> Result<Vec<Record>, InputError> {
        let records = match self {
            InputSource::File(f) => parse_records(f.contents())?,
            InputSource::Stdin(s) => parse_records(&s.read_to_end()?)?,
        };
        info!(count = records.len(), "records loaded");
        Ok(records)
    }
}

/// Detect and create appropriate input source.
///
/// # Logic:
/// 1. If file path is provided: create FileSource (loads on construction)
/// 2. Else: use StdinSource, which refuses an interactive terminal
///
/// # Errors
///
/// Returns `InputError::NoInput` if no file is provided and stdin is not piped.
/// Returns `InputError::FileNotFound` if file does not exist.
/// Returns `InputError::Io` for I/O errors during file reading.
pub fn detect_input_source(file: Option<PathBuf>) -> Result<InputSource, InputError> {
    match file {
        Some(path) => Ok(InputSource::File(FileSource::new(path)?)),
        None => Ok(InputSource::Stdin(StdinSource::new()?)),
    }
}

/// Parse a JSON array of objects or JSON Lines into records.
///
/// Empty (or whitespace-only) content is an empty collection.
///
/// # Errors
///
/// Returns `InputError::Malformed` naming the offending line.
pub fn parse_records(content: &str) -> Result<Vec<Record>, InputError> {
    let trimmed = content.trim_start();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        // Shape errors surface from serde with the element's own line
        return serde_json::from_str::<Vec<Record>>(content).map_err(|e| {
            InputError::Malformed {
                line: e.line(),
                reason: e.to_string(),
            }
        });
    }

    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let value: Value = serde_json::from_str(line).map_err(|e| InputError::Malformed {
                line: i + 1,
                reason: e.to_string(),
            })?;
            Record::from_value(value).map_err(|other| InputError::Malformed {
                line: i + 1,
                reason: format!("expected an object, found {}", other),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_records_accepts_json_array() {
        let records = parse_records(r#"[{"id": 1}, {"id": 2}, {"id": 3}]"#).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[2].get("id"), Some(&Value::from(3)));
    }

    #[test]
    fn parse_records_accepts_json_lines() {
        let content = "{\"id\": 1}\n\n{\"id\": 2}\n";
        let records = parse_records(content).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].get("id"), Some(&Value::from(2)));
    }

    #[test]
    fn parse_records_treats_blank_content_as_empty() {
        assert!(parse_records("").unwrap().is_empty());
        assert!(parse_records("  \n\n").unwrap().is_empty());
        assert!(parse_records("[]").unwrap().is_empty());
    }

    #[test]
    fn parse_records_reports_json_lines_error_line() {
        let content = "{\"id\": 1}\n{\"id\": \n";
        match parse_records(content) {
            Err(InputError::Malformed { line, .. }) => assert_eq!(line, 2),
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn parse_records_rejects_non_object_elements() {
        match parse_records("[{\"id\": 1}, 42]") {
            Err(InputError::Malformed { line, reason }) => {
                assert_eq!(line, 1);
                assert!(reason.contains("integer `42`"), "reason: {}", reason)
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }

        assert!(matches!(
            parse_records("\"just a string\"\n"),
            Err(InputError::Malformed { line: 1, .. })
        ));
    }

    #[test]
    fn parse_records_reports_array_element_line() {
        let content = "[\n  {\"id\": 1},\n  {\"id\": 2},\n  \"three\"\n]\n";
        match parse_records(content) {
            Err(InputError::Malformed { line, reason }) => {
                assert_eq!(line, 4, "reason: {}", reason);
                assert!(reason.contains("expected a map"), "reason: {}", reason);
            }
            other => panic!("Expected Malformed, got {:?}", other),
        }
    }

    #[test]
    fn read_records_from_file_source() {
        let test_file = std::env::temp_dir().join("pagewin_source_read_records.json");
        fs::write(&test_file, r#"[{"name": "a"}, {"name": "b"}]"#).unwrap();

        let source = detect_input_source(Some(test_file.clone())).unwrap();
        let _ = fs::remove_file(&test_file);

        let records = source.read_records().unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn detect_input_source_missing_file_is_not_found() {
        let path = PathBuf::from("/nonexistent/pagewin/records.json");
        match detect_input_source(Some(path.clone())) {
            Err(InputError::FileNotFound { path: p }) => assert_eq!(p, path),
            other => panic!("Expected FileNotFound, got {:?}", other),
        }
    }
}
