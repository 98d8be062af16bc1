//! List command implementation.
//!
//! The `stencil list` command shows the templates bundled with the binary.

use crate::assets::AssetTree;
use crate::cli::args::ListArgs;
use crate::error::{Result, StencilError};
use crate::registry::{discover, to_json_bytes, Registry};
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand<'a> {
    args: ListArgs,
    assets: &'a dyn AssetTree,
}

impl<'a> ListCommand<'a> {
    /// Create a new list command.
    pub fn new(args: ListArgs, assets: &'a dyn AssetTree) -> Self {
        Self { args, assets }
    }
}

impl Command for ListCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let templates = discover(self.assets)?;

        if self.args.json {
            let registry = Registry::from_templates(templates);
            let bytes = to_json_bytes(&registry)?;
            let json = String::from_utf8(bytes).map_err(|e| StencilError::Other(e.into()))?;
            ui.data(json.trim_end());
            return Ok(CommandResult::success());
        }

        if templates.is_empty() {
            ui.message("No bundled templates");
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(["Name", "Orientation", "Category", "File"]);
        for t in &templates {
            table.add_row([
                t.name.clone(),
                t.orientation().to_string(),
                t.categories.join(", "),
                t.filename.clone(),
            ]);
        }
        ui.message(&table.render());
        ui.message(&format!("{} bundled templates", templates.len()));

        Ok(CommandResult::success())
    }
}
