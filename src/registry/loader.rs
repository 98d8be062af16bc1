//! Strict loading of an existing registry file.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use serde::Deserialize;

use super::template::Registry;
use crate::error::{Result, StencilError};

/// Read the raw registry bytes.
///
/// Returns `Ok(None)` when no file exists at `path`; any other read failure
/// is an error.
pub fn read_registry(path: &Path) -> Result<Option<Vec<u8>>> {
    match fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(StencilError::RegistryRead {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Decode registry bytes.
///
/// Fails on malformed JSON, on any key outside the registry schema, and on
/// anything but whitespace after the top-level object. `path` is only used
/// in error messages.
pub fn decode_registry(bytes: &[u8], path: &Path) -> Result<Registry> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    let registry =
        Registry::deserialize(&mut de).map_err(|e| StencilError::RegistryDecode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    de.end().map_err(|_| StencilError::TrailingData {
        path: path.to_path_buf(),
    })?;

    tracing::debug!("Decoded {} templates from {}", registry.len(), path.display());
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::template::LANDSCAPE_ICON;
    use tempfile::TempDir;

    const PATH: &str = "/templates.json";

    fn decode(json: &str) -> Result<Registry> {
        decode_registry(json.as_bytes(), Path::new(PATH))
    }

    const VENDOR: &str = r#"{
    "templates": [
        {
            "name": "Blank",
            "filename": "Blank",
            "iconCode": "\ue9fe",
            "categories": ["Creative", "Lines", "Grids", "Life/organize"]
        },
        {
            "name": "Calendar Week",
            "filename": "LS Week",
            "iconCode": "\ue9fd",
            "landscape": true,
            "categories": ["Life/organize"]
        }
    ]
}"#;

    #[test]
    fn decodes_entries_in_document_order() {
        let registry = decode(VENDOR).unwrap();
        assert_eq!(registry.names(), vec!["Blank", "Calendar Week"]);

        let week = registry.get("Calendar Week").unwrap();
        assert!(week.landscape);
        assert_eq!(week.icon_code, LANDSCAPE_ICON);
        assert_eq!(
            registry.get("Blank").unwrap().categories,
            vec!["Creative", "Lines", "Grids", "Life/organize"]
        );
    }

    #[test]
    fn unknown_template_field_fails() {
        let json = r#"{"templates":[{"name":"Grid","filename":"Grid","iconCode":"x","categories":[],"extra":1}]}"#;
        let err = decode(json).unwrap_err();
        assert!(matches!(err, StencilError::RegistryDecode { .. }));
        assert!(err.to_string().contains("extra"));
    }

    #[test]
    fn unknown_top_level_field_fails() {
        let err = decode(r#"{"templates":[],"version":2}"#).unwrap_err();
        assert!(matches!(err, StencilError::RegistryDecode { .. }));
    }

    #[test]
    fn trailing_document_fails() {
        let err = decode(r#"{"templates":[]} {"templates":[]}"#).unwrap_err();
        assert!(matches!(err, StencilError::TrailingData { .. }));
        assert!(err.to_string().contains("extra data in JSON"));
    }

    #[test]
    fn trailing_whitespace_is_fine() {
        assert!(decode("{\"templates\":[]}\n\n  ").unwrap().is_empty());
    }

    #[test]
    fn malformed_json_fails() {
        assert!(matches!(
            decode(r#"{"templates":["#),
            Err(StencilError::RegistryDecode { .. })
        ));
        assert!(matches!(
            decode(""),
            Err(StencilError::RegistryDecode { .. })
        ));
    }

    #[test]
    fn missing_templates_key_is_empty() {
        assert!(decode("{}").unwrap().is_empty());
    }

    #[test]
    fn read_missing_file_is_none() {
        let temp = TempDir::new().unwrap();
        let result = read_registry(&temp.path().join("templates.json")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn read_existing_file_returns_bytes() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("templates.json");
        std::fs::write(&path, VENDOR).unwrap();
        assert_eq!(read_registry(&path).unwrap().unwrap(), VENDOR.as_bytes());
    }

    #[test]
    fn read_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let err = read_registry(temp.path()).unwrap_err();
        assert!(matches!(err, StencilError::RegistryRead { .. }));
    }
}
