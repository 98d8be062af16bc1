//! The install pipeline.
//!
//! An install run:
//! 1. Reads and strictly decodes the existing registry (if any)
//! 2. Discovers the bundled templates and merges them in by name
//! 3. Serializes the merged registry
//! 4. Copies the bundled assets into the template directory
//! 5. Backs up the previous registry and writes the new one
//!
//! Steps 1-3 only build an [`InstallPlan`]; nothing is written until it is
//! applied, so any decode or encode failure leaves the disk untouched.

pub mod commit;
pub mod materialize;
pub mod plan;

pub use commit::{commit, write_registry, CommitReport};
pub use materialize::{materialize, CopyOp, CopySummary};
pub use plan::{InstallPlan, InstallReport};

use crate::assets::AssetTree;
use crate::config::InstallPaths;
use crate::error::Result;
use crate::registry::read_registry;

/// Build an install plan from the registry currently on disk.
pub fn plan<'a>(paths: &InstallPaths, tree: &'a dyn AssetTree) -> Result<InstallPlan<'a>> {
    let existing = read_registry(&paths.registry_file)?;
    InstallPlan::build(paths, existing, tree)
}

/// Run a full install.
pub fn install(paths: &InstallPaths, tree: &dyn AssetTree) -> Result<InstallReport> {
    plan(paths, tree)?.apply(paths)
}
