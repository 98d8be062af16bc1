//! Template discovery from an asset tree.

use crate::assets::AssetTree;
use crate::error::Result;

use super::naming::template_from_path;
use super::template::Template;

/// Derive one template per file in the tree, in walk order.
///
/// Directories produce nothing. A traversal error aborts discovery; there
/// is no partial result.
pub fn discover(tree: &dyn AssetTree) -> Result<Vec<Template>> {
    let mut templates = Vec::new();
    for entry in tree.walk() {
        let entry = entry?;
        if entry.is_dir() {
            continue;
        }
        templates.push(template_from_path(&entry.path));
    }

    tracing::debug!("Discovered {} bundled templates", templates.len());
    Ok(templates)
}
