//! Merging discovered templates into an existing registry.

use std::collections::HashSet;

use super::template::{Registry, Template};

/// Result of a merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MergeOutcome {
    /// The merged registry.
    pub registry: Registry,

    /// Names appended by this merge, in order.
    pub added: Vec<String>,

    /// Candidate names dropped because the name was already present.
    pub skipped: Vec<String>,
}

/// Append every candidate whose name is not yet in the registry.
///
/// Existing entries keep their order and contents. Candidates are appended
/// in the order given; the first template with a given name wins and later
/// ones are dropped without error, even if their other fields differ.
/// `existing` is left untouched.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use stencil::registry::{merge, naming::template_from_path, Registry};
///
/// let existing = Registry::from_templates([template_from_path(Path::new("Grids/P Grid.png"))]);
/// let candidates = ["Grids/LS Grid.png", "Lines/P Lines.png"]
///     .map(|p| template_from_path(Path::new(p)));
///
/// let outcome = merge(&existing, candidates);
/// assert_eq!(outcome.registry.names(), vec!["Grid", "Lines"]);
/// assert_eq!(outcome.skipped, vec!["Grid"]);
/// ```
pub fn merge(existing: &Registry, candidates: impl IntoIterator<Item = Template>) -> MergeOutcome {
    let mut registry = existing.clone();
    let mut names: HashSet<String> = existing.templates().iter().map(|t| t.name.clone()).collect();
    let mut added = Vec::new();
    let mut skipped = Vec::new();

    for candidate in candidates {
        if names.contains(&candidate.name) {
            tracing::debug!("Skipping '{}': already in registry", candidate.name);
            skipped.push(candidate.name);
            continue;
        }
        names.insert(candidate.name.clone());
        added.push(candidate.name.clone());
        registry.push(candidate);
    }

    MergeOutcome {
        registry,
        added,
        skipped,
    }
}
