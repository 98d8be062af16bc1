//! Visual theme and styling.

use console::Style;

/// Stencil's visual theme.
#[derive(Debug, Clone)]
pub struct StencilTheme {
    /// Style for success messages (green).
    pub success: Style,
    /// Style for warning messages (orange).
    pub warning: Style,
    /// Style for error messages (red bold).
    pub error: Style,
    /// Style for headers (cyan bold).
    pub header: Style,
    /// Style for shell commands the user can copy (dim italic).
    pub command: Style,
}

impl Default for StencilTheme {
    fn default() -> Self {
        Self::new()
    }
}

impl StencilTheme {
    /// Create the default theme.
    pub fn new() -> Self {
        Self {
            success: Style::new().green(),
            warning: Style::new().color256(208),
            error: Style::new().red().bold(),
            header: Style::new().bold().cyan(),
            command: Style::new().dim().italic(),
        }
    }

    /// Create a theme without colors (for non-TTY or --no-color).
    pub fn plain() -> Self {
        let none = Style::new();
        Self {
            success: none.clone(),
            warning: none.clone(),
            error: none.clone(),
            header: none.clone(),
            command: none,
        }
    }

    pub fn format_success(&self, msg: &str) -> String {
        self.success.apply_to(format!("✓ {}", msg)).to_string()
    }

    pub fn format_warning(&self, msg: &str) -> String {
        self.warning.apply_to(format!("⚠ {}", msg)).to_string()
    }

    pub fn format_error(&self, msg: &str) -> String {
        self.error.apply_to(format!("✗ {}", msg)).to_string()
    }

    pub fn format_header(&self, title: &str) -> String {
        self.header.apply_to(title).to_string()
    }

    /// Indent a shell command so it stands apart from status lines.
    pub fn format_command(&self, cmd: &str) -> String {
        format!("  {}", self.command.apply_to(cmd))
    }
}

/// Check if colors should be enabled.
pub fn should_use_colors() -> bool {
    // https://no-color.org/
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }

    console::Term::stdout().is_term()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_lines_carry_icons() {
        let theme = StencilTheme::plain();
        assert_eq!(theme.format_success("Wrote templates.json"), "✓ Wrote templates.json");
        assert_eq!(theme.format_warning("Caution"), "⚠ Caution");
        assert_eq!(theme.format_error("Failed"), "✗ Failed");
    }

    #[test]
    fn plain_header_is_unstyled() {
        let theme = StencilTheme::plain();
        assert_eq!(theme.format_header("Templates"), "Templates");
    }

    #[test]
    fn commands_are_indented() {
        let theme = StencilTheme::plain();
        assert_eq!(theme.format_command("diff a b"), "  diff a b");
    }
}
