//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{
    InstallPaths, DEFAULT_BACKUP_FILE, DEFAULT_REGISTRY_FILE, DEFAULT_TEMPLATE_DIR,
    ENV_BACKUP_FILE, ENV_REGISTRY_FILE, ENV_TEMPLATE_DIR,
};
use crate::error::Result;
use crate::ui::OutputMode;

/// Stencil - reMarkable template installer.
#[derive(Debug, Parser)]
#[command(name = "stencil")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory the bundled template files are copied into
    #[arg(
        long,
        global = true,
        value_name = "DIR",
        env = ENV_TEMPLATE_DIR,
        default_value = DEFAULT_TEMPLATE_DIR
    )]
    pub template_dir: PathBuf,

    /// Registry file to merge the bundled templates into
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = ENV_REGISTRY_FILE,
        default_value = DEFAULT_REGISTRY_FILE
    )]
    pub registry: PathBuf,

    /// Where to save the previous registry before overwriting it
    #[arg(
        long,
        global = true,
        value_name = "FILE",
        env = ENV_BACKUP_FILE,
        default_value = DEFAULT_BACKUP_FILE
    )]
    pub backup: PathBuf,

    /// Show every file and template touched
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only show errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Resolve the configured paths for an install run.
    pub fn install_paths(&self) -> Result<InstallPaths> {
        InstallPaths::resolve(
            self.template_dir.clone(),
            self.registry.clone(),
            self.backup.clone(),
        )
    }

    /// Output mode selected by `--verbose` / `--quiet`.
    pub fn output_mode(&self) -> OutputMode {
        if self.quiet {
            OutputMode::Quiet
        } else if self.verbose {
            OutputMode::Verbose
        } else {
            OutputMode::Normal
        }
    }
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Copy bundled templates and merge them into the registry (default)
    Install(InstallArgs),

    /// List the bundled templates
    List(ListArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `install` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct InstallArgs {
    /// Show what would change without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output in registry JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
