//! Copying bundled assets onto disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::assets::{AssetKind, AssetTree};
use crate::error::{Result, StencilError};

/// One filesystem operation of an asset copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOp<'a> {
    /// Create a directory (and any missing parents).
    CreateDir { target: PathBuf },
    /// Write a file, replacing whatever is there.
    WriteFile { target: PathBuf, contents: &'a [u8] },
}

impl CopyOp<'_> {
    /// Destination path of this operation.
    pub fn target(&self) -> &Path {
        match self {
            CopyOp::CreateDir { target } | CopyOp::WriteFile { target, .. } => target,
        }
    }
}

/// Summary of an executed copy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopySummary {
    pub dirs: usize,
    pub files: Vec<PathBuf>,
}

/// Plan the copy of every entry of `tree` into `target_dir`.
///
/// The first operation creates `target_dir` itself; every directory is
/// created before the files inside it.
pub fn plan_copies<'a>(tree: &'a dyn AssetTree, target_dir: &Path) -> Result<Vec<CopyOp<'a>>> {
    let mut ops = vec![CopyOp::CreateDir {
        target: target_dir.to_path_buf(),
    }];

    for entry in tree.walk() {
        let entry = entry?;
        let target = target_dir.join(&entry.path);
        ops.push(match entry.kind {
            AssetKind::Dir => CopyOp::CreateDir { target },
            AssetKind::File(contents) => CopyOp::WriteFile { target, contents },
        });
    }

    Ok(ops)
}

/// Run copy operations in order, stopping at the first failure.
///
/// Existing directories are fine; existing files are overwritten. Nothing
/// outside the planned targets is touched.
pub fn execute(ops: &[CopyOp<'_>]) -> Result<CopySummary> {
    let mut summary = CopySummary::default();

    for op in ops {
        match op {
            CopyOp::CreateDir { target } => {
                fs::create_dir_all(target).map_err(|source| StencilError::AssetCopy {
                    path: target.clone(),
                    source,
                })?;
                summary.dirs += 1;
            }
            CopyOp::WriteFile { target, contents } => {
                fs::write(target, contents).map_err(|source| StencilError::AssetCopy {
                    path: target.clone(),
                    source,
                })?;
                tracing::debug!("Copied {}", target.display());
                summary.files.push(target.clone());
            }
        }
    }

    Ok(summary)
}

/// Copy the whole tree into `target_dir`.
pub fn materialize(tree: &dyn AssetTree, target_dir: &Path) -> Result<CopySummary> {
    execute(&plan_copies(tree, target_dir)?)
}
