//! Tree walking and serialization.
//!
//! Every subtree is rendered into its own buffer and handed back to the
//! caller, so the traversal carries no shared output state.

use indexmap::IndexMap;

use crate::errors::Error;
use crate::log::debug;
use crate::number::limit_decimals;
use crate::path::normalize_path;
use crate::style::flatten_style;
use crate::tree::{Attributes, Element};
use crate::whitelist::{
    SVG_NS, XLINK_NS, is_numeric_attr, is_supported_attr, is_supported_tag, normalize_name,
};

pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="utf-8"?>"#;

pub const DOCTYPE: &str = r#"<!DOCTYPE svg PUBLIC "-//W3C//DTD SVG 1.1//EN" "http://www.w3.org/Graphics/SVG/1.1/DTD/svg11.dtd">"#;

const ROOT_TAG: &str = "svg";

/// Spaces per nesting level when indenting
pub const DEFAULT_INDENT: usize = 2;

/// Output layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmitOptions {
    /// Spaces per nesting level, or `None` to write the tree on one line
    pub indent: Option<usize>,
}

impl EmitOptions {
    pub fn compact() -> Self {
        Self { indent: None }
    }

    pub fn indented(width: usize) -> Self {
        Self {
            indent: Some(width),
        }
    }
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self::indented(DEFAULT_INDENT)
    }
}

/// Build the complete output document for `root`.
///
/// The root always gets the SVG and XLink namespace declarations, whatever
/// the input declared. A root other than `<svg>` is rejected.
pub fn assemble(root: &Element, options: &EmitOptions) -> Result<String, Error> {
    if root.local_name() != ROOT_TAG || !is_supported_tag(&root.name) {
        return Err(Error::UnsupportedRoot {
            tag: root.local_name().to_string(),
        });
    }

    let emitter = Emitter::new(*options);

    let mut attrs = flattened_attributes(root);
    attrs.insert("xmlns".to_string(), SVG_NS.to_string());
    attrs.insert("xmlns:xlink".to_string(), XLINK_NS.to_string());

    let mut out = String::new();
    out.push_str(XML_DECLARATION);
    out.push('\n');
    out.push_str(DOCTYPE);
    out.push('\n');
    out.push_str(&emitter.emit_element_with(root, attrs, 0)?);
    if !out.ends_with('\n') {
        out.push('\n');
    }
    Ok(out)
}

/// Depth-first serializer for supported elements
#[derive(Debug, Clone, Copy)]
pub struct Emitter {
    options: EmitOptions,
}

impl Emitter {
    pub fn new(options: EmitOptions) -> Self {
        Self { options }
    }

    /// Render the supported children of `parent` at `depth`.
    ///
    /// Unsupported children are skipped along with everything inside them.
    pub fn emit_children(&self, parent: &Element, depth: usize) -> Result<String, Error> {
        let mut out = String::new();
        for child in &parent.children {
            if !is_supported_tag(&child.name) {
                debug!(tag = %child.name, "dropping unsupported element");
                continue;
            }
            out.push_str(&self.emit_element(child, depth)?);
        }
        Ok(out)
    }

    /// Render one element and its subtree.
    pub fn emit_element(&self, element: &Element, depth: usize) -> Result<String, Error> {
        self.emit_element_with(element, flattened_attributes(element), depth)
    }

    fn emit_element_with(
        &self,
        element: &Element,
        attrs: Attributes,
        depth: usize,
    ) -> Result<String, Error> {
        let indent = self.indent(depth);
        let newline = self.newline();
        let self_closing = element.is_self_closing();

        let mut out = String::new();
        out.push_str(&indent);
        out.push('<');
        out.push_str(element.local_name());
        out.push_str(&render_attributes(element, &attrs)?);
        out.push_str(if self_closing { "/>" } else { ">" });
        out.push_str(newline);

        if let Some(text) = element.content() {
            out.push_str(&self.indent(depth + 1));
            out.push_str(&escape_xml(text));
            out.push_str(newline);
        }

        out.push_str(&self.emit_children(element, depth + 1)?);

        if !self_closing {
            out.push_str(&indent);
            out.push_str("</");
            out.push_str(element.local_name());
            out.push('>');
            out.push_str(newline);
        }

        Ok(out)
    }

    fn indent(&self, depth: usize) -> String {
        match self.options.indent {
            Some(width) => " ".repeat(width * depth),
            None => String::new(),
        }
    }

    fn newline(&self) -> &'static str {
        if self.options.indent.is_some() { "\n" } else { "" }
    }
}

/// The element's attributes with its inline style merged in.
fn flattened_attributes(element: &Element) -> Attributes {
    let mut attrs = element.attributes.clone();
    flatten_style(&mut attrs);
    attrs
}

/// Filter, clamp and serialize attributes as ` name="value"` pairs.
///
/// Two names that normalize to the same output name (`href` and
/// `xlink:href`) are written once, with the later value.
fn render_attributes(element: &Element, attrs: &Attributes) -> Result<String, Error> {
    let mut rendered: IndexMap<&str, String> = IndexMap::new();

    for (name, value) in attrs {
        if !is_supported_attr(name) {
            debug!(tag = element.local_name(), attr = %name, "dropping unsupported attribute");
            continue;
        }
        let local = normalize_name(name);
        let value = if local == "d" {
            normalize_path(value).map_err(|err| err.with_element(describe(element)))?
        } else if is_numeric_attr(name) {
            limit_decimals(value).into_owned()
        } else {
            value.clone()
        };
        rendered.insert(local, value);
    }

    let mut out = String::new();
    for (name, value) in rendered {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_xml(&value));
        out.push('"');
    }
    Ok(out)
}

/// `<path id="wave">`, for pointing at the element in diagnostics
fn describe(element: &Element) -> String {
    match element.attributes.get("id") {
        Some(id) => format!("<{} id=\"{}\">", element.local_name(), id),
        None => format!("<{}>", element.local_name()),
    }
}

/// Escape text for use in attribute values and character data.
///
/// Literal tabs and line breaks in attribute values would be folded into
/// spaces by the next XML parser, so they are written as character
/// references.
fn escape_xml(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\t' => result.push_str("&#9;"),
            '\n' => result.push_str("&#10;"),
            '\r' => result.push_str("&#13;"),
            _ => result.push(c),
        }
    }
    result
}
