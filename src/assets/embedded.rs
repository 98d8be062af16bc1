//! Template assets embedded at compile time.

use include_dir::{include_dir, Dir, DirEntry};

use super::{AssetEntry, AssetKind, AssetTree};
use crate::error::Result;

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Asset tree backed by a directory compiled into the binary.
#[derive(Debug, Clone, Copy)]
pub struct EmbeddedAssets {
    root: &'static Dir<'static>,
}

impl EmbeddedAssets {
    /// The template assets bundled with this binary.
    pub fn bundled() -> Self {
        Self::new(&TEMPLATES_DIR)
    }

    /// Wrap any embedded directory.
    pub fn new(root: &'static Dir<'static>) -> Self {
        Self { root }
    }
}

impl Default for EmbeddedAssets {
    fn default() -> Self {
        Self::bundled()
    }
}

impl AssetTree for EmbeddedAssets {
    fn walk(&self) -> Box<dyn Iterator<Item = Result<AssetEntry<'_>>> + '_> {
        let root: &Dir<'_> = self.root;
        let mut stack = Vec::new();
        push_children(&mut stack, root);
        Box::new(EmbeddedWalk { stack })
    }
}

/// Depth-first walk over an embedded directory.
///
/// The stack holds entries still to visit, last sibling at the bottom, so
/// popping yields siblings in lexical order.
struct EmbeddedWalk<'a> {
    stack: Vec<&'a DirEntry<'a>>,
}

impl<'a> Iterator for EmbeddedWalk<'a> {
    type Item = Result<AssetEntry<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;
        let item = match entry {
            DirEntry::Dir(dir) => {
                push_children(&mut self.stack, dir);
                AssetEntry {
                    path: dir.path().to_path_buf(),
                    kind: AssetKind::Dir,
                }
            }
            DirEntry::File(file) => AssetEntry {
                path: file.path().to_path_buf(),
                kind: AssetKind::File(file.contents()),
            },
        };
        Some(Ok(item))
    }
}

fn push_children<'a>(stack: &mut Vec<&'a DirEntry<'a>>, dir: &'a Dir<'a>) {
    let mut children: Vec<_> = dir.entries().iter().collect();
    children.sort_by(|a, b| b.path().cmp(a.path()));
    stack.extend(children);
}
