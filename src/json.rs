// engine-installer: Project Configuration Installer
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading JSON documents from disk.
//!
//! Reads are synchronous and whole-file. A missing or unreadable file and
//! malformed contents are reported as distinct [`JsonFileError`] variants.

use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::error::JsonFileError;

/// Reads `path` and decodes it as an untyped JSON value.
///
/// # Errors
///
/// Returns [`JsonFileError::Read`] if the file cannot be read and
/// [`JsonFileError::Parse`] if its contents are not valid JSON.
pub fn get_json_object_from_file(
    path: impl AsRef<Path>,
) -> Result<serde_json::Value, JsonFileError> {
    read_json_file(path)
}

/// Reads `path` and decodes it into `T`.
///
/// # Errors
///
/// Returns [`JsonFileError::Read`] if the file cannot be read and
/// [`JsonFileError::Parse`] if its contents do not decode into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: impl AsRef<Path>) -> Result<T, JsonFileError> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| JsonFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read json file");

    serde_json::from_slice(&bytes).map_err(|source| JsonFileError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{get_json_object_from_file, read_json_file};
    use serde::Deserialize;
    use serde_json::json;

    #[test]
    fn test_reads_nested_document() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("engine.json");
        let text = r#"{"window":{"width":1280,"height":720},"layers":["VK_LAYER_KHRONOS_validation"],"vsync":true,"scale":1.5,"name":null}"#;
        std::fs::write(&path, text).unwrap();

        let value = get_json_object_from_file(&path).unwrap();
        assert_eq!(
            value,
            json!({
                "window": {"width": 1280, "height": 720},
                "layers": ["VK_LAYER_KHRONOS_validation"],
                "vsync": true,
                "scale": 1.5,
                "name": null,
            })
        );
        let independent: serde_json::Value = serde_json::from_str(text).unwrap();
        assert_eq!(value, independent);
    }

    #[test]
    fn test_reads_non_object_roots() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("list.json");
        std::fs::write(&path, "[1, \"two\", 3.0]\n").unwrap();
        assert_eq!(get_json_object_from_file(&path).unwrap(), json!([1, "two", 3.0]));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp = tempfile::tempdir().unwrap();
        let err = get_json_object_from_file(temp.path().join("missing.json")).unwrap_err();
        assert!(err.is_not_found());
        assert!(err.path().ends_with("missing.json"));
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("broken.json");
        std::fs::write(&path, "{invalid").unwrap();

        let err = get_json_object_from_file(&path).unwrap_err();
        assert!(err.is_parse());
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_typed_read() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Window {
            width: u32,
            height: u32,
        }

        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("window.json");
        std::fs::write(&path, r#"{"width": 800, "height": 600}"#).unwrap();

        let window: Window = read_json_file(&path).unwrap();
        assert_eq!(window, Window { width: 800, height: 600 });

        std::fs::write(&path, r#"{"width": "wide"}"#).unwrap();
        assert!(read_json_file::<Window>(&path).unwrap_err().is_parse());
    }
}
