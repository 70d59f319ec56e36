//! XML serialisation of node trees.
//!
//! Elements with neither body nor children are written self-closing.
//! Attribute values and body text are escaped by the writer.

use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use tracing::trace;

use crate::element::Node;
use crate::error::{SdfError, SdfResult};

/// Serialise one node tree.
///
/// `indent` is the number of spaces per nesting level; `None` writes the
/// whole tree on one line.
pub fn write_node(node: &Node, indent: Option<usize>) -> SdfResult<String> {
    let mut writer = match indent {
        Some(width) => Writer::new_with_indent(Vec::new(), b' ', width),
        None => Writer::new(Vec::new()),
    };

    write_element(&mut writer, node)?;
    trace!(tag = %node.tag, "wrote element tree");

    String::from_utf8(writer.into_inner()).map_err(|e| SdfError::Utf8(e.to_string()))
}

/// Serialise a sequence of sibling trees, one per line.
pub fn write_fragment(nodes: &[Node], indent: Option<usize>) -> SdfResult<String> {
    let parts = nodes
        .iter()
        .map(|node| write_node(node, indent))
        .collect::<SdfResult<Vec<_>>>()?;
    Ok(parts.join("\n"))
}

fn write_element(writer: &mut Writer<Vec<u8>>, node: &Node) -> SdfResult<()> {
    let mut start = BytesStart::new(node.tag.as_str());
    for (name, value) in node.attributes.iter() {
        start.push_attribute((name, value));
    }

    if node.body.is_none() && node.children.is_empty() {
        return writer
            .write_event(Event::Empty(start))
            .map_err(|e| SdfError::write(&node.tag, e));
    }

    writer
        .write_event(Event::Start(start))
        .map_err(|e| SdfError::write(&node.tag, e))?;

    if let Some(body) = &node.body {
        writer
            .write_event(Event::Text(BytesText::new(body)))
            .map_err(|e| SdfError::write(&node.tag, e))?;
    }

    for child in &node.children {
        write_element(writer, child)?;
    }

    writer
        .write_event(Event::End(BytesEnd::new(node.tag.as_str())))
        .map_err(|e| SdfError::write(&node.tag, e))
}
