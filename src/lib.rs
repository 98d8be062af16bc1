//! Stencil - reMarkable template installer.
//!
//! Stencil ships a set of template assets inside its binary, copies them
//! onto the device and merges matching entries into the device's template
//! registry (`templates.json`), keeping everything already registered.
//!
//! # Modules
//!
//! - [`assets`] - Read-only asset trees (bundled and in-memory)
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Resolved install paths
//! - [`error`] - Error types and result aliases
//! - [`install`] - Install planning, asset copying and registry commit
//! - [`registry`] - Registry decoding, discovery, merging and serialization
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use stencil::assets::MemoryAssets;
//! use stencil::config::InstallPaths;
//! use stencil::install::InstallPlan;
//!
//! let paths = InstallPaths::resolve("/t", "/t/templates.json", "/b.json").unwrap();
//! let tree = MemoryAssets::new().with_file("Lists/P Todo.svg", b"<svg/>".to_vec());
//!
//! // Planning reads nothing from disk and writes nothing.
//! let plan = InstallPlan::build(&paths, None, &tree).unwrap();
//! assert_eq!(plan.added, vec!["Todo"]);
//! ```

pub mod assets;
pub mod cli;
pub mod config;
pub mod error;
pub mod install;
pub mod registry;
pub mod ui;

pub use error::{Result, StencilError};
