//! Registry serialization.
//!
//! The written document has to diff cleanly against the vendor file, so the
//! layout is fixed rather than derived:
//!
//! - keys appear as `name`, `filename`, `landscape`, `categories`, `iconCode`
//! - `landscape` is only written when true
//! - `iconCode` is written as one `\uXXXX` escape of the glyph's first
//!   UTF-16 code unit
//! - three-space indentation, trailing newline, no HTML escaping

use serde::ser::{Error as _, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::ser::PrettyFormatter;
use serde_json::value::RawValue;

use super::template::{Registry, Template};
use crate::error::{Result, StencilError};

const INDENT: &[u8] = b"   ";

#[derive(Serialize)]
struct Document<'a> {
    templates: Vec<Entry<'a>>,
}

/// Writes one template with the registry's key order.
struct Entry<'a>(&'a Template);

impl Serialize for Entry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let t = self.0;
        let icon = escaped_icon(&t.icon_code).ok_or_else(|| {
            S::Error::custom(format!("template '{}' has an empty iconCode", t.name))
        })?;
        let icon = RawValue::from_string(icon).map_err(S::Error::custom)?;

        let len = if t.landscape { 5 } else { 4 };
        let mut state = serializer.serialize_struct("Template", len)?;
        state.serialize_field("name", &t.name)?;
        state.serialize_field("filename", &t.filename)?;
        if t.landscape {
            state.serialize_field("landscape", &true)?;
        } else {
            state.skip_field("landscape")?;
        }
        state.serialize_field("categories", &t.categories)?;
        state.serialize_field("iconCode", &icon)?;
        state.end()
    }
}

/// JSON string literal holding a `\uXXXX` escape of the first UTF-16 unit.
fn escaped_icon(icon: &str) -> Option<String> {
    let unit = icon.encode_utf16().next()?;
    Some(format!("\"\\u{:04x}\"", unit))
}

/// Serialize a registry to the bytes written to `templates.json`.
///
/// # Example
///
/// ```
/// use std::path::Path;
/// use stencil::registry::{naming::template_from_path, to_json_bytes, Registry};
///
/// let registry = Registry::from_templates([template_from_path(Path::new("Lists/P Todo.svg"))]);
/// let json = String::from_utf8(to_json_bytes(&registry).unwrap()).unwrap();
/// assert!(json.contains(r#""iconCode": "\ue9fe""#));
/// assert!(!json.contains("landscape"));
/// ```
pub fn to_json_bytes(registry: &Registry) -> Result<Vec<u8>> {
    let document = Document {
        templates: registry.templates().iter().map(Entry).collect(),
    };

    let mut out = Vec::new();
    let formatter = PrettyFormatter::with_indent(INDENT);
    let mut ser = serde_json::Serializer::with_formatter(&mut out, formatter);
    document
        .serialize(&mut ser)
        .map_err(|e| StencilError::Serialize {
            message: e.to_string(),
        })?;
    out.push(b'\n');
    Ok(out)
}
