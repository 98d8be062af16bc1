//! Install command implementation.
//!
//! The `stencil install` command copies the bundled templates into the
//! template directory and merges them into the registry.

use crate::assets::AssetTree;
use crate::cli::args::InstallArgs;
use crate::config::InstallPaths;
use crate::error::Result;
use crate::install::{self, InstallPlan};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The install command implementation.
pub struct InstallCommand<'a> {
    paths: InstallPaths,
    args: InstallArgs,
    assets: &'a dyn AssetTree,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(paths: InstallPaths, args: InstallArgs, assets: &'a dyn AssetTree) -> Self {
        Self {
            paths,
            args,
            assets,
        }
    }

    fn report_templates(&self, plan: &InstallPlan<'_>, ui: &mut dyn UserInterface) {
        let details = ui.output_mode().shows_details();
        if details {
            for name in &plan.added {
                ui.message(&format!("  + {}", name));
            }
            for name in &plan.skipped {
                ui.message(&format!("  = {} (already registered)", name));
            }
        }
    }

    fn dry_run(&self, plan: &InstallPlan<'_>, ui: &mut dyn UserInterface) {
        ui.message("Dry run: nothing will be written");
        ui.message(&format!(
            "Would copy {} files to {}",
            plan.file_count(),
            self.paths.template_dir.display()
        ));
        ui.message(&format!(
            "Would add {} templates to {}",
            plan.added.len(),
            self.paths.registry_file.display()
        ));
        self.report_templates(plan, ui);
        if plan.backup.is_some() {
            ui.message(&format!(
                "Would back up the current registry to {}",
                self.paths.backup_file.display()
            ));
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.show_header("Installing templates");

        let plan = install::plan(&self.paths, self.assets)?;

        if self.args.dry_run {
            self.dry_run(&plan, ui);
            return Ok(CommandResult::success());
        }

        let report = plan.apply(&self.paths)?;

        ui.success(&format!(
            "Copied {} files to {}",
            report.files_copied.len(),
            report.template_dir.display()
        ));
        if ui.output_mode().shows_details() {
            for file in &report.files_copied {
                ui.message(&format!("  {}", file.display()));
            }
        }

        if report.added.is_empty() {
            ui.message(&format!(
                "All {} bundled templates were already registered",
                plan.skipped.len()
            ));
        } else {
            ui.success(&format!(
                "Added {} templates to {}",
                report.added.len(),
                report.registry.display()
            ));
        }
        self.report_templates(&plan, ui);

        if let Some(backup) = &report.backup {
            ui.success(&format!("Backed up previous registry to {}", backup.display()));
        }
        ui.success(&format!("Wrote {}", report.registry.display()));

        if report.backup.is_some() {
            ui.message("");
            ui.message("You can compare with:");
            ui.command(&self.paths.diff_command());
        }

        Ok(CommandResult::success())
    }
}
