//! Reading the config document from disk.
//!
//! Responsibilities:
//! - Read the file in one scoped call and parse it as a JSON object.
//!
//! Does NOT handle:
//! - Deciding what a failure means for the snapshot (see `ConfigWarning::from`).
//! - Interpreting individual keys (see `overrides.rs`).

use serde_json::{Map, Value};
use std::path::Path;

use super::error::ConfigFileError;

/// Read `path` and return its top-level JSON object.
pub(crate) fn read_document(path: &Path) -> Result<Map<String, Value>, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    let value: Value = serde_json::from_str(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        source: e,
    })?;

    match value {
        Value::Object(map) => Ok(map),
        _ => Err(ConfigFileError::NotAnObject {
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_reads_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"NUM_THREADS": 8, "extra": [1, 2]}"#).unwrap();

        let doc = read_document(&path).unwrap();
        assert_eq!(doc["NUM_THREADS"], 8);
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_document(&dir.path().join("absent.json")).unwrap_err();
        assert!(matches!(
            err,
            ConfigFileError::Read { ref source, .. } if source.kind() == ErrorKind::NotFound
        ));
    }

    #[test]
    fn test_directory_is_read_error() {
        let dir = TempDir::new().unwrap();
        let err = read_document(dir.path()).unwrap_err();
        assert!(matches!(err, ConfigFileError::Read { .. }));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            read_document(&path),
            Err(ConfigFileError::Parse { .. })
        ));
    }

    #[test]
    fn test_array_is_not_an_object() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();
        assert!(matches!(
            read_document(&path),
            Err(ConfigFileError::NotAnObject { .. })
        ));
    }
}
