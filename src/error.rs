//! Error types for Stencil operations.
//!
//! This module defines [`StencilError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every fatal stage of an install run has its own variant, and its message
//!   names that stage so the user knows what failed
//! - Use `anyhow::Error` (via `StencilError::Other`) for unexpected errors
//! - Nothing is retried; the first error aborts the run

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Stencil operations.
#[derive(Debug, Error)]
pub enum StencilError {
    /// One of the configured paths could not be resolved.
    #[error("Invalid configuration: {message}")]
    ConfigResolution { message: String },

    /// The existing registry file could not be read.
    #[error("Failed to read registry at {path}: {source}")]
    RegistryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The existing registry is not a valid registry document.
    #[error("Failed to decode registry at {path}: {message}")]
    RegistryDecode { path: PathBuf, message: String },

    /// The registry document is followed by more JSON.
    #[error("Failed to decode registry at {path}: extra data in JSON")]
    TrailingData { path: PathBuf },

    /// The bundled asset tree could not be enumerated.
    #[error("Failed to walk asset tree at {path}: {message}")]
    AssetTraversal { path: PathBuf, message: String },

    /// The registry could not be copied to its backup location.
    #[error("Failed to back up {from} to {to}: {source}")]
    Backup {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The merged registry could not be encoded.
    #[error("Failed to serialize registry: {message}")]
    Serialize { message: String },

    /// The new registry could not be written.
    #[error("Failed to write registry to {path}: {source}")]
    RegistryWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A bundled asset could not be copied into the template directory.
    #[error("Failed to copy asset to {path}: {source}")]
    AssetCopy {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Stencil operations.
pub type Result<T> = std::result::Result<T, StencilError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn denied() -> std::io::Error {
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "permission denied")
    }

    #[test]
    fn config_resolution_displays_message() {
        let err = StencilError::ConfigResolution {
            message: "registry path is empty".into(),
        };
        assert!(err.to_string().contains("registry path is empty"));
    }

    #[test]
    fn registry_decode_displays_path_and_message() {
        let err = StencilError::RegistryDecode {
            path: PathBuf::from("/templates.json"),
            message: "unknown field `extra`".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/templates.json"));
        assert!(msg.contains("unknown field `extra`"));
    }

    #[test]
    fn trailing_data_mentions_extra_data() {
        let err = StencilError::TrailingData {
            path: PathBuf::from("/templates.json"),
        };
        assert!(err.to_string().contains("extra data in JSON"));
    }

    #[test]
    fn backup_displays_both_paths_and_cause() {
        let err = StencilError::Backup {
            from: PathBuf::from("/templates.json"),
            to: PathBuf::from("/backup.json"),
            source: denied(),
        };
        let msg = err.to_string();
        assert!(msg.contains("back up"));
        assert!(msg.contains("/templates.json"));
        assert!(msg.contains("/backup.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn write_failures_name_their_stage() {
        let write = StencilError::RegistryWrite {
            path: PathBuf::from("/templates.json"),
            source: denied(),
        };
        assert!(write.to_string().contains("write registry"));

        let copy = StencilError::AssetCopy {
            path: PathBuf::from("/templates/Lists/P Todo.svg"),
            source: denied(),
        };
        assert!(copy.to_string().contains("copy asset"));
        assert!(copy.to_string().contains("P Todo.svg"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: StencilError = io_err.into();
        assert!(matches!(err, StencilError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(StencilError::Serialize {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
