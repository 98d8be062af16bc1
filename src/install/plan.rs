//! Install planning.
//!
//! [`InstallPlan::build`] does all decoding, merging and encoding up front
//! without touching the disk. Only [`InstallPlan::apply`] writes, so a bad
//! registry or an encoding error never leaves a half-finished install.

use std::path::PathBuf;

use crate::assets::AssetTree;
use crate::config::InstallPaths;
use crate::error::Result;
use crate::registry::{decode_registry, discover, merge, to_json_bytes, Registry};

use super::commit::commit;
use super::materialize::{execute, plan_copies, CopyOp};

/// Everything an install run will write.
#[derive(Debug, Clone)]
pub struct InstallPlan<'a> {
    /// The merged registry.
    pub registry: Registry,

    /// Serialized merged registry.
    pub registry_bytes: Vec<u8>,

    /// Previous registry contents to back up, if a registry existed.
    pub backup: Option<Vec<u8>>,

    /// Template names appended to the registry.
    pub added: Vec<String>,

    /// Bundled template names already present in the registry.
    pub skipped: Vec<String>,

    /// Asset copy operations, in order.
    pub copies: Vec<CopyOp<'a>>,
}

/// What an applied plan touched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub template_dir: PathBuf,
    pub files_copied: Vec<PathBuf>,
    pub registry: PathBuf,
    pub backup: Option<PathBuf>,
    pub added: Vec<String>,
}

impl<'a> InstallPlan<'a> {
    /// Build the plan from the current registry bytes and the asset tree.
    ///
    /// `existing` is `None` when there is no registry file yet; the result
    /// is then made of the bundled templates only.
    pub fn build(
        paths: &InstallPaths,
        existing: Option<Vec<u8>>,
        tree: &'a dyn AssetTree,
    ) -> Result<Self> {
        let current = match &existing {
            Some(bytes) => decode_registry(bytes, &paths.registry_file)?,
            None => {
                tracing::info!(
                    "No registry at {}, starting from bundled templates",
                    paths.registry_file.display()
                );
                Registry::new()
            }
        };

        let outcome = merge(&current, discover(tree)?);
        let registry_bytes = to_json_bytes(&outcome.registry)?;
        let copies = plan_copies(tree, &paths.template_dir)?;

        tracing::info!(
            "{} existing templates, {} to add, {} already present",
            current.len(),
            outcome.added.len(),
            outcome.skipped.len()
        );

        Ok(Self {
            registry: outcome.registry,
            registry_bytes,
            backup: existing,
            added: outcome.added,
            skipped: outcome.skipped,
            copies,
        })
    }

    /// Number of asset files the plan copies.
    pub fn file_count(&self) -> usize {
        self.copies
            .iter()
            .filter(|op| matches!(op, CopyOp::WriteFile { .. }))
            .count()
    }

    /// Copy the assets, back up the previous registry and write the new one.
    pub fn apply(&self, paths: &InstallPaths) -> Result<InstallReport> {
        let copied = execute(&self.copies)?;
        tracing::info!(
            "Copied {} files to {}",
            copied.files.len(),
            paths.template_dir.display()
        );

        let committed = commit(
            &paths.registry_file,
            &paths.backup_file,
            self.backup.as_deref(),
            &self.registry_bytes,
        )?;

        Ok(InstallReport {
            template_dir: paths.template_dir.clone(),
            files_copied: copied.files,
            registry: committed.registry,
            backup: committed.backup,
            added: self.added.clone(),
        })
    }
}
