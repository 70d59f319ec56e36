//! Element trait and rendered node tree.
//!
//! Anything that ends up in the scene document implements [`Element`]. An
//! element contributes a tag, attributes, an optional body and child nodes;
//! [`Element::to_node`] collects them into a plain [`Node`] that the writer
//! serialises. Rendering is pure: calling it twice yields equal trees.

use serde::Serialize;

use crate::attributes::Attributes;
use crate::error::SdfResult;
use crate::writer;

/// Rendered element: tag, attributes, optional body text and children.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    /// Qualified tag name, e.g. `rv:motor`.
    pub tag: String,
    /// Attributes in render order.
    pub attributes: Attributes,
    /// Text content, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    /// Child elements in render order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty node with the given tag.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: Attributes::new(),
            body: None,
            children: Vec::new(),
        }
    }

    /// Add or replace an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name, value);
        self
    }

    /// Set the body text.
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Find the first direct child with the given tag.
    pub fn child(&self, tag: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.tag == tag)
    }

    /// Tags of the direct children, in order.
    pub fn child_tags(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.tag.as_str()).collect()
    }
}

/// A value that renders itself into a [`Node`].
///
/// Implementors override the parts they contribute. Specialised elements
/// compose their base explicitly: they call the base's render functions and
/// append or override on the result.
pub trait Element {
    /// Qualified tag name.
    fn tag_name(&self) -> &str;

    /// Attributes of this element.
    fn render_attributes(&self) -> Attributes {
        Attributes::new()
    }

    /// Child nodes of this element, in order.
    fn render_elements(&self) -> Vec<Node> {
        Vec::new()
    }

    /// Body text of this element.
    fn render_body(&self) -> Option<String> {
        None
    }

    /// Collect tag, attributes, body and children into a node.
    fn to_node(&self) -> Node {
        Node {
            tag: self.tag_name().to_string(),
            attributes: self.render_attributes(),
            body: self.render_body(),
            children: self.render_elements(),
        }
    }

    /// Render as compact XML.
    fn to_xml(&self) -> SdfResult<String> {
        writer::write_node(&self.to_node(), None)
    }

    /// Render as XML indented by two spaces per level.
    fn to_xml_pretty(&self) -> SdfResult<String> {
        writer::write_node(&self.to_node(), Some(2))
    }
}

impl Element for Node {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn render_attributes(&self) -> Attributes {
        self.attributes.clone()
    }

    fn render_elements(&self) -> Vec<Node> {
        self.children.clone()
    }

    fn render_body(&self) -> Option<String> {
        self.body.clone()
    }

    fn to_node(&self) -> Node {
        self.clone()
    }
}
