//! Run configuration for Stencil.
//!
//! A run needs exactly three paths, see [`InstallPaths`]. Each one has a
//! default matching the stock reMarkable layout and can be overridden by an
//! environment variable or a command-line flag (see [`crate::cli::Cli`]).
//! The paths are resolved once at startup and passed down explicitly.
//!
//! # Example
//!
//! ```
//! use stencil::config::InstallPaths;
//!
//! let paths = InstallPaths::resolve(
//!     "/tmp/templates",
//!     "/tmp/templates/templates.json",
//!     "/tmp/templates_backup.json",
//! )
//! .unwrap();
//! assert_eq!(paths.registry_file.file_name().unwrap(), "templates.json");
//! ```

pub mod paths;

pub use paths::{
    InstallPaths, DEFAULT_BACKUP_FILE, DEFAULT_REGISTRY_FILE, DEFAULT_TEMPLATE_DIR,
    ENV_BACKUP_FILE, ENV_REGISTRY_FILE, ENV_TEMPLATE_DIR,
};
