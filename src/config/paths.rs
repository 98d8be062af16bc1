//! Resolved install paths.

use std::path::{Path, PathBuf};

use crate::error::{Result, StencilError};

/// Environment variable overriding the template directory.
pub const ENV_TEMPLATE_DIR: &str = "TEMPLATE_GLOBAL_DIR";

/// Environment variable overriding the registry file.
pub const ENV_REGISTRY_FILE: &str = "TEMPLATE_JSON_FILE";

/// Environment variable overriding the backup file.
pub const ENV_BACKUP_FILE: &str = "TEMPLATE_JSON_BACKUP_FILE";

pub const DEFAULT_TEMPLATE_DIR: &str = "/usr/share/remarkable/templates";
pub const DEFAULT_REGISTRY_FILE: &str = "/usr/share/remarkable/templates/templates.json";
pub const DEFAULT_BACKUP_FILE: &str = "/home/root/templates_backup.json";

/// The three paths an install run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPaths {
    /// Directory the bundled assets are copied into.
    pub template_dir: PathBuf,

    /// The registry (`templates.json`) to merge into.
    pub registry_file: PathBuf,

    /// Where the previous registry is saved before it is overwritten.
    pub backup_file: PathBuf,
}

impl InstallPaths {
    /// Validate and build the run paths.
    ///
    /// Fails if any path is empty, or if the backup would overwrite the
    /// registry it is meant to preserve.
    pub fn resolve(
        template_dir: impl Into<PathBuf>,
        registry_file: impl Into<PathBuf>,
        backup_file: impl Into<PathBuf>,
    ) -> Result<Self> {
        let paths = Self {
            template_dir: template_dir.into(),
            registry_file: registry_file.into(),
            backup_file: backup_file.into(),
        };

        require_non_empty("template directory", ENV_TEMPLATE_DIR, &paths.template_dir)?;
        require_non_empty("registry file", ENV_REGISTRY_FILE, &paths.registry_file)?;
        require_non_empty("backup file", ENV_BACKUP_FILE, &paths.backup_file)?;

        if paths.registry_file == paths.backup_file {
            return Err(StencilError::ConfigResolution {
                message: format!(
                    "backup file must differ from the registry file ({})",
                    paths.registry_file.display()
                ),
            });
        }

        tracing::debug!(
            "Resolved paths: templates={} registry={} backup={}",
            paths.template_dir.display(),
            paths.registry_file.display(),
            paths.backup_file.display()
        );
        Ok(paths)
    }

    /// Shell command comparing the backup with the new registry.
    pub fn diff_command(&self) -> String {
        format!(
            "diff <(jq --sort-keys . {}) <(jq --sort-keys . {})",
            self.backup_file.display(),
            self.registry_file.display()
        )
    }
}

impl Default for InstallPaths {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from(DEFAULT_TEMPLATE_DIR),
            registry_file: PathBuf::from(DEFAULT_REGISTRY_FILE),
            backup_file: PathBuf::from(DEFAULT_BACKUP_FILE),
        }
    }
}

fn require_non_empty(what: &str, env: &str, path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(StencilError::ConfigResolution {
            message: format!("{} is empty (check {})", what, env),
        });
    }
    Ok(())
}
