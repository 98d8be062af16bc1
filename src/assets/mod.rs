//! Read-only asset trees.
//!
//! Templates ship as a small directory tree of `<category>/<file>` assets.
//! The rest of the crate only sees that tree through the [`AssetTree`]
//! trait, so discovery and materialization work the same against the
//! bundled assets ([`EmbeddedAssets`]) and an in-memory fake
//! ([`MemoryAssets`]).
//!
//! # Example
//!
//! ```
//! use stencil::assets::{AssetTree, MemoryAssets};
//!
//! let tree = MemoryAssets::new()
//!     .with_file("Lists/P Todo.svg", b"<svg/>".to_vec());
//!
//! let paths: Vec<_> = tree
//!     .walk()
//!     .map(|entry| entry.unwrap().path)
//!     .collect();
//! assert_eq!(paths.len(), 2); // "Lists" and "Lists/P Todo.svg"
//! ```

pub mod embedded;
pub mod memory;

pub use embedded::EmbeddedAssets;
pub use memory::MemoryAssets;

use std::path::PathBuf;

use crate::error::Result;

/// A provider of a hierarchical listing of assets.
pub trait AssetTree {
    /// Walk every directory and file below the root.
    ///
    /// Entries come in preorder: a directory is yielded before its
    /// contents, and siblings are visited in lexical order. The root itself
    /// is not yielded. The order is the same on every call.
    fn walk(&self) -> Box<dyn Iterator<Item = Result<AssetEntry<'_>>> + '_>;
}

/// One node of an asset tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetEntry<'a> {
    /// Path relative to the tree root.
    pub path: PathBuf,

    /// Whether this is a directory or a file with contents.
    pub kind: AssetKind<'a>,
}

/// The kind of an [`AssetEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind<'a> {
    Dir,
    File(&'a [u8]),
}

impl AssetEntry<'_> {
    /// Check if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        matches!(self.kind, AssetKind::Dir)
    }

    /// File contents, or `None` for directories.
    pub fn contents(&self) -> Option<&[u8]> {
        match self.kind {
            AssetKind::Dir => None,
            AssetKind::File(bytes) => Some(bytes),
        }
    }
}
