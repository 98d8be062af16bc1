//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use crate::assets::AssetTree;
use crate::cli::args::{Cli, Commands, InstallArgs};
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] carrying the exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self { exit_code: 0 }
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    assets: Box<dyn AssetTree>,
}

impl CommandDispatcher {
    /// Create a new dispatcher working from the given asset tree.
    pub fn new(assets: Box<dyn AssetTree>) -> Self {
        Self { assets }
    }

    /// Get the asset tree.
    pub fn assets(&self) -> &dyn AssetTree {
        self.assets.as_ref()
    }

    /// Dispatch and execute a command.
    ///
    /// Paths are resolved here, before a command does any I/O. Running with
    /// no subcommand is the same as `install`.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let default_install = Commands::Install(InstallArgs::default());
        match cli.command.as_ref().unwrap_or(&default_install) {
            Commands::Install(args) => {
                let cmd = super::install::InstallCommand::new(
                    cli.install_paths()?,
                    args.clone(),
                    self.assets(),
                );
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(args.clone(), self.assets());
                cmd.execute(ui)
            }
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
