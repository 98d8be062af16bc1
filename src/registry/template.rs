//! Registry schema definitions.
//!
//! The registry (`templates.json`) is a single object with a `templates`
//! array. Decoding is strict: unknown keys are rejected at both levels.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;

/// Glyph shown for portrait templates.
pub const PORTRAIT_ICON: &str = "\u{e9fe}";

/// Glyph shown for landscape templates.
pub const LANDSCAPE_ICON: &str = "\u{e9fd}";

/// One visual template.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Template {
    /// Display name; unique within a registry
    pub name: String,

    /// Asset path relative to the template directory
    pub filename: String,

    /// Icon glyph, normally [`PORTRAIT_ICON`] or [`LANDSCAPE_ICON`]
    #[serde(rename = "iconCode", deserialize_with = "icon_code")]
    pub icon_code: String,

    /// Groupings this template is listed under; missing or null is empty
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<String>,

    #[serde(default)]
    pub landscape: bool,
}

/// Decode `iconCode`, replacing unpaired surrogate escapes with U+FFFD.
///
/// The registry writer keeps only the first UTF-16 unit of a glyph, so a
/// glyph outside the BMP comes back as a lone `\ud83d`-style escape.
fn icon_code<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    decode_utf16_lossy(raw.get().trim())
        .ok_or_else(|| D::Error::custom(format!("iconCode must be a string, found {}", raw.get())))
}

fn null_as_empty<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Decode a JSON string literal unit by unit. `None` if `literal` is not a
/// string.
fn decode_utf16_lossy(literal: &str) -> Option<String> {
    let body = literal.strip_prefix('"')?.strip_suffix('"')?;
    let mut units = Vec::with_capacity(body.len());
    let mut chars = body.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            let mut buf = [0u16; 2];
            units.extend_from_slice(c.encode_utf16(&mut buf));
            continue;
        }
        let unit = match chars.next()? {
            '"' => 0x22,
            '\\' => 0x5c,
            '/' => 0x2f,
            'b' => 0x08,
            'f' => 0x0c,
            'n' => 0x0a,
            'r' => 0x0d,
            't' => 0x09,
            'u' => {
                let hex: String = chars.by_ref().take(4).collect();
                if hex.len() != 4 {
                    return None;
                }
                u16::from_str_radix(&hex, 16).ok()?
            }
            _ => return None,
        };
        units.push(unit);
    }

    Some(String::from_utf16_lossy(&units))
}

impl Template {
    /// Orientation label for display.
    pub fn orientation(&self) -> &'static str {
        if self.landscape {
            "landscape"
        } else {
            "portrait"
        }
    }
}

/// An ordered collection of templates with unique names.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Registry {
    #[serde(default)]
    templates: Vec<Template>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from templates, keeping the first of each name.
    pub fn from_templates(templates: impl IntoIterator<Item = Template>) -> Self {
        let mut registry = Self::new();
        for template in templates {
            if !registry.contains(&template.name) {
                registry.push(template);
            }
        }
        registry
    }

    /// All templates in registry order.
    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Get a template by name.
    pub fn get(&self, name: &str) -> Option<&Template> {
        self.templates.iter().find(|t| t.name == name)
    }

    /// Check if a template with this exact name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Template names in registry order.
    pub fn names(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    pub(crate) fn push(&mut self, template: Template) {
        self.templates.push(template);
    }
}
