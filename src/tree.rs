//! Owned element tree built from the input document.
//!
//! Only elements, their attributes and their leading text survive loading.
//! Comments and processing instructions never make it into the tree, which
//! is how they disappear from the output.

use indexmap::IndexMap;

use crate::errors::Error;
use crate::whitelist::{is_supported_tag, normalize_name};

/// Attribute name to value, in document order
pub type Attributes = IndexMap<String, String>;

/// A single element of the input document.
///
/// Namespaced names use Clark notation: `{http://www.w3.org/2000/svg}rect`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Element {
    pub name: String,
    pub attributes: Attributes,
    pub children: Vec<Element>,
    pub text: Option<String>,
}

impl Element {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Tag name without its namespace
    pub fn local_name(&self) -> &str {
        normalize_name(&self.name)
    }

    /// Text content, if there is any besides whitespace
    pub fn content(&self) -> Option<&str> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
    }

    /// Written as `<tag/>`: nothing that will be emitted lives inside it.
    pub fn is_self_closing(&self) -> bool {
        self.content().is_none() && !self.children.iter().any(|c| is_supported_tag(&c.name))
    }
}

/// Parse a document into its root [`Element`].
///
/// `name` labels the source in diagnostics. DTDs are accepted, so normalized
/// output (which carries a DOCTYPE) can be read back in.
pub fn parse_document(name: &str, source: &str) -> Result<Element, Error> {
    let options = roxmltree::ParsingOptions {
        allow_dtd: true,
        ..roxmltree::ParsingOptions::default()
    };
    let doc = roxmltree::Document::parse_with_options(source, options)
        .map_err(|err| Error::xml(name, source, err))?;
    Ok(from_node(doc.root_element()))
}

fn from_node(node: roxmltree::Node<'_, '_>) -> Element {
    let tag = node.tag_name();
    let attributes = node
        .attributes()
        .map(|attr| {
            (
                clark_name(attr.namespace(), attr.name()),
                attr.value().to_string(),
            )
        })
        .collect();
    let children = node
        .children()
        .filter(|child| child.is_element())
        .map(from_node)
        .collect();

    Element {
        name: clark_name(tag.namespace(), tag.name()),
        attributes,
        children,
        text: node.text().map(str::to_string),
    }
}

fn clark_name(namespace: Option<&str>, local: &str) -> String {
    match namespace {
        Some(ns) => format!("{{{ns}}}{local}"),
        None => local.to_string(),
    }
}
