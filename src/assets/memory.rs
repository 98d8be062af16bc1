//! In-memory asset tree for testing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{AssetEntry, AssetKind, AssetTree};
use crate::error::{Result, StencilError};

/// In-memory asset tree.
///
/// Directories are implied by the files added under them. Entries are kept
/// in a `BTreeMap` keyed by path, whose component-wise ordering is exactly
/// the preorder walk [`AssetTree`] requires.
#[derive(Debug, Clone, Default)]
pub struct MemoryAssets {
    nodes: BTreeMap<PathBuf, Option<Vec<u8>>>,
    broken: Option<PathBuf>,
}

impl MemoryAssets {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file, creating its parent directories.
    pub fn with_file(mut self, path: impl AsRef<Path>, contents: impl Into<Vec<u8>>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), Some(contents.into()));
        self
    }

    /// Add an empty directory.
    pub fn with_dir(mut self, path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        self.add_parents(path);
        self.nodes.insert(path.to_path_buf(), None);
        self
    }

    /// Make the walk fail when it reaches `path`.
    pub fn fail_at(mut self, path: impl AsRef<Path>) -> Self {
        self.broken = Some(path.as_ref().to_path_buf());
        self
    }

    /// Number of files in the tree.
    pub fn file_count(&self) -> usize {
        self.nodes.values().filter(|n| n.is_some()).count()
    }

    fn add_parents(&mut self, path: &Path) {
        for ancestor in path.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(ancestor.to_path_buf()).or_insert(None);
        }
    }
}

impl AssetTree for MemoryAssets {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<AssetEntry<'_>>> + '_> {
        let broken = self.broken.as_deref();
        let mut failed = false;
        let iter = self.nodes.iter().map_while(move |(path, node)| {
            if failed {
                return None;
            }
            if Some(path.as_path()) == broken {
                failed = true;
                return Some(Err(StencilError::AssetTraversal {
                    path: path.clone(),
                    message: "entry is unreadable".to_string(),
                }));
            }
            let kind = match node {
                Some(bytes) => AssetKind::File(bytes.as_slice()),
                None => AssetKind::Dir,
            };
            Some(Ok(AssetEntry {
                path: path.clone(),
                kind,
            }))
        });
        Box::new(iter)
    }
}
