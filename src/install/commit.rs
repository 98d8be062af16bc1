//! Backing up and replacing the registry file.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, StencilError};

/// What a commit wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitReport {
    /// Backup path, if a previous registry existed.
    pub backup: Option<PathBuf>,

    /// The registry path that now holds the new document.
    pub registry: PathBuf,
}

/// Save the previous registry to `backup_path`, then write the new one.
///
/// `previous` is the registry's current contents, or `None` if there was no
/// registry file, in which case no backup is made. If the backup cannot be
/// written the registry is left untouched.
pub fn commit(
    registry_path: &Path,
    backup_path: &Path,
    previous: Option<&[u8]>,
    contents: &[u8],
) -> Result<CommitReport> {
    let backup = match previous {
        Some(bytes) => {
            fs::write(backup_path, bytes).map_err(|source| StencilError::Backup {
                from: registry_path.to_path_buf(),
                to: backup_path.to_path_buf(),
                source,
            })?;
            tracing::info!("Backed up registry to {}", backup_path.display());
            Some(backup_path.to_path_buf())
        }
        None => None,
    };

    write_registry(registry_path, contents)?;
    tracing::info!("Wrote registry {}", registry_path.display());

    Ok(CommitReport {
        backup,
        registry: registry_path.to_path_buf(),
    })
}

/// Replace the registry file in one step.
///
/// Writes to a sibling temp file and renames it over the registry, so the
/// registry is always either the old or the new complete document. A
/// symlinked registry is written through: the link stays and its target is
/// replaced.
pub fn write_registry(path: &Path, contents: &[u8]) -> Result<()> {
    let target = fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    let temp_path = temp_sibling(&target);
    let to_error = |source: std::io::Error| {
        let _ = fs::remove_file(&temp_path);
        StencilError::RegistryWrite {
            path: path.to_path_buf(),
            source,
        }
    };

    fs::write(&temp_path, contents).map_err(to_error)?;
    fs::rename(&temp_path, &target).map_err(to_error)?;
    if target != path {
        tracing::debug!("Wrote {} through {}", target.display(), path.display());
    }
    Ok(())
}

fn temp_sibling(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("registry"));
    name.push(".tmp");
    path.with_file_name(name)
}
