//! Template metadata from asset file names.
//!
//! Assets are laid out as `<category>/<prefix><name>.<ext>` where the
//! prefix `LS ` marks a landscape template and `P ` a portrait one.
//! A name without either prefix is treated as portrait.

use std::path::Path;

use super::template::{Template, LANDSCAPE_ICON, PORTRAIT_ICON};

const LANDSCAPE_PREFIX: &str = "LS ";
const PORTRAIT_PREFIX: &str = "P ";

/// Derive a template entry from an asset path relative to the asset root.
///
/// Never fails: a path that does not follow the convention still yields an
/// entry, possibly with an empty or unexpected name.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use stencil::registry::naming::template_from_path;
///
/// let t = template_from_path(Path::new("Calendars/LS Week.png"));
/// assert_eq!(t.name, "Week");
/// assert!(t.landscape);
/// assert_eq!(t.categories, vec!["Calendars"]);
/// ```
pub fn template_from_path(path: &Path) -> Template {
    let file = path
        .file_name()
        .map(|f| f.to_string_lossy().into_owned())
        .unwrap_or_default();

    let (name, landscape) = split_orientation(strip_extension(&file));
    let icon = if landscape {
        LANDSCAPE_ICON
    } else {
        PORTRAIT_ICON
    };

    Template {
        name: name.trim().to_string(),
        filename: slash_path(path),
        icon_code: icon.to_string(),
        categories: vec![category_of(path)],
        landscape,
    }
}

/// Drop everything from the last `.` of the file name.
fn strip_extension(file: &str) -> &str {
    match file.rfind('.') {
        Some(idx) => &file[..idx],
        None => file,
    }
}

fn split_orientation(stem: &str) -> (&str, bool) {
    if let Some(rest) = stem.strip_prefix(LANDSCAPE_PREFIX) {
        (rest, true)
    } else if let Some(rest) = stem.strip_prefix(PORTRAIT_PREFIX) {
        (rest, false)
    } else {
        (stem, false)
    }
}

/// Base name of the parent directory, `.` for files at the root.
fn category_of(path: &Path) -> String {
    path.parent()
        .and_then(|p| p.file_name())
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| ".".to_string())
}

/// Registry filenames always use `/`, whatever the host separator.
fn slash_path(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
