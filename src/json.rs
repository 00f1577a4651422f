//! json
//!
//! JSON encode/decode helpers and flat-file persistence.
//!
//! # Overview
//!
//! This module is the crate's serialization collaborator. The container
//! core only depends on [`encode`] (through `Collection::to_json`); the
//! decode and file helpers exist as conveniences for callers that keep
//! their maps in flat JSON documents.
//!
//! File writes go through a temp file and an atomic rename, with Unix
//! permission bits applied before content lands on disk.
//!
//! # Example
//!
//! ```
//! use dotmap::json;
//!
//! let encoded = json::encode(&vec![1, 2, 3]).unwrap();
//! assert_eq!(encoded, "[1,2,3]");
//!
//! let decoded: Vec<i32> = json::decode(encoded.as_bytes()).unwrap();
//! assert_eq!(decoded, vec![1, 2, 3]);
//! ```

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Errors from JSON operations.
#[derive(Debug, Error)]
pub enum JsonError {
    /// Failed to serialize a value to JSON.
    #[error("failed to serialize to JSON: {0}")]
    Serialize(String),

    /// Failed to parse JSON input.
    #[error("failed to parse JSON: {0}")]
    Parse(String),

    /// Failed to read a file.
    #[error("failed to read '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Serialize a value to a compact JSON string.
pub fn encode<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string(value).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Serialize a value to a human-readable JSON string.
pub fn encode_pretty<T: Serialize>(value: &T) -> Result<String, JsonError> {
    serde_json::to_string_pretty(value).map_err(|e| JsonError::Serialize(e.to_string()))
}

/// Deserialize a value from JSON bytes.
pub fn decode<T: DeserializeOwned>(data: &[u8]) -> Result<T, JsonError> {
    serde_json::from_slice(data).map_err(|e| JsonError::Parse(e.to_string()))
}

/// JSON-escape a string, without the surrounding quotes.
///
/// # Example
///
/// ```
/// use dotmap::json;
///
/// assert_eq!(json::escape("say \"hi\"").unwrap(), r#"say \"hi\""#);
/// ```
pub fn escape(text: &str) -> Result<String, JsonError> {
    let quoted = encode(&text)?;
    // strip the quotes serde_json wraps string literals in
    Ok(quoted[1..quoted.len() - 1].to_string())
}

/// Load a value from a JSON file.
pub fn load_from_file<T: DeserializeOwned>(path: &Path) -> Result<T, JsonError> {
    let data = fs::read(path).map_err(|e| JsonError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    decode(&data)
}

/// Save a value to a JSON file with the given Unix mode bits.
///
/// Writes pretty JSON through a temp file followed by an atomic rename,
/// creating parent directories as needed. `mode` is applied before any
/// content is written; on non-Unix platforms it is ignored.
pub fn save_to_file<T: Serialize>(value: &T, path: &Path, mode: u32) -> Result<(), JsonError> {
    let content = encode_pretty(value)?;

    let write_err = |source: std::io::Error| JsonError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    {
        let mut file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(write_err)?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(mode))
                .map_err(write_err)?;
        }
        #[cfg(not(unix))]
        let _ = mode;

        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.sync_all().map_err(write_err)?;
    }

    fs::rename(&temp_path, path).map_err(write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn encode_compact() {
        let value = json!({"a": 1});
        assert_eq!(encode(&value).unwrap(), r#"{"a":1}"#);
    }

    #[test]
    fn decode_rejects_malformed_input() {
        let result: Result<Value, _> = decode(b"{not json");
        let err = result.unwrap_err();
        assert!(matches!(err, JsonError::Parse(_)));
        assert!(err.to_string().contains("parse"));
    }

    #[test]
    fn escape_strips_quotes() {
        assert_eq!(escape("plain").unwrap(), "plain");
        assert_eq!(escape("line\nbreak").unwrap(), r"line\nbreak");
        assert_eq!(escape(r#"quote " here"#).unwrap(), r#"quote \" here"#);
        assert_eq!(escape("").unwrap(), "");
    }

    #[test]
    fn load_missing_file_reports_path() {
        let result: Result<Value, _> = load_from_file(Path::new("/nonexistent/missing.json"));
        let err = result.unwrap_err();
        assert!(err.to_string().contains("missing.json"));
    }
}
