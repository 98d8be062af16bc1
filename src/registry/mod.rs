//! Template registry for Stencil.
//!
//! This module handles the `templates.json` registry:
//! - Deriving templates from asset file names ([`naming`], [`discovery`])
//! - Strictly decoding an existing registry ([`loader`])
//! - Merging discovered templates in by name ([`merge`])
//! - Writing the registry back in its fixed layout ([`serializer`])
//!
//! # Example
//!
//! ```
//! use std::path::Path;
//! use stencil::assets::MemoryAssets;
//! use stencil::registry::{decode_registry, discover, merge, to_json_bytes};
//!
//! let existing = decode_registry(br#"{"templates": []}"#, Path::new("templates.json")).unwrap();
//! let tree = MemoryAssets::new().with_file("Calendars/LS Week.png", b"png".to_vec());
//!
//! let outcome = merge(&existing, discover(&tree).unwrap());
//! assert_eq!(outcome.added, vec!["Week"]);
//!
//! let bytes = to_json_bytes(&outcome.registry).unwrap();
//! assert!(String::from_utf8(bytes).unwrap().contains("\"landscape\": true"));
//! ```

pub mod discovery;
pub mod loader;
pub mod merge;
pub mod naming;
pub mod serializer;
pub mod template;

// Re-exports
pub use discovery::discover;
pub use loader::{decode_registry, read_registry};
pub use merge::{merge, MergeOutcome};
pub use serializer::to_json_bytes;
pub use template::{Registry, Template, LANDSCAPE_ICON, PORTRAIT_ICON};
