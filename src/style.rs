//! Inline style flattening.
//!
//! Editors like Inkscape pack presentation properties into a single
//! `style="fill:#fff;stroke:none"` attribute. The device only reads real
//! attributes, so each property is turned into one.

use crate::errors::StyleError;
use crate::log::warn;
use crate::tree::Attributes;

/// Name of the attribute holding inline styles
pub const STYLE_ATTR: &str = "style";

/// One `name:value` pair from a style attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyleProperty<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> StyleProperty<'a> {
    /// Parse a single `name:value` entry. Splits on the first `:` only, so
    /// values like `url(data:...)` survive.
    pub fn parse(entry: &'a str) -> Result<Self, StyleError> {
        let (name, value) = entry
            .split_once(':')
            .ok_or_else(|| StyleError::MissingSeparator(entry.trim().to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(StyleError::EmptyName(entry.trim().to_string()));
        }
        Ok(StyleProperty {
            name,
            value: value.trim(),
        })
    }
}

/// Parse style text into its properties, in source order.
///
/// Malformed entries are skipped with a warning; the rest still apply.
pub fn parse_styles(text: &str) -> Vec<StyleProperty<'_>> {
    text.split(';')
        .filter(|entry| !entry.trim().is_empty())
        .filter_map(|entry| match StyleProperty::parse(entry) {
            Ok(property) => Some(property),
            Err(err) => {
                warn!(%err, "skipping malformed style property");
                None
            }
        })
        .collect()
}

/// Replace the `style` attribute with one attribute per property.
///
/// Style properties win over explicit attributes of the same name. An
/// overwritten attribute keeps its position; new ones are appended.
pub fn flatten_style(attrs: &mut Attributes) {
    let Some(style) = attrs.shift_remove(STYLE_ATTR) else {
        return;
    };
    for property in parse_styles(&style) {
        attrs.insert(property.name.to_string(), property.value.to_string());
    }
}
