//! XML rendering of structured nodes.

use std::io::Cursor;

use quick_xml::Writer;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};

use crate::model::ElementRegistry;

use super::error::InterchangeError;
use super::node::Node;

/// Tag of the document root when rendering a whole registry.
pub const MODEL_TAG: &str = "model";

/// Renders structured nodes as indented XML documents.
#[derive(Debug, Default)]
pub struct XmlWriter;

impl XmlWriter {
    pub fn new() -> Self {
        Self
    }

    /// Render a single node as an XML document.
    pub fn write_node(&self, node: &Node) -> Result<Vec<u8>, InterchangeError> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = Writer::new_with_indent(&mut buffer, b' ', 2);

        writer
            .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
            .map_err(|e| InterchangeError::xml(format!("write error: {e}")))?;

        Self::write_node_events(&mut writer, node)?;

        let mut output = buffer.into_inner();
        output.push(b'\n');
        Ok(output)
    }

    /// Render every registered element under a `<model>` root, sorted by
    /// category then id.
    pub fn write_model(&self, registry: &ElementRegistry) -> Result<Vec<u8>, InterchangeError> {
        let mut root = Node::new(MODEL_TAG);
        for element in registry.elements() {
            root.push_child(Node::from_element(&element));
        }
        self.write_node(&root)
    }

    fn write_node_events<W: std::io::Write>(
        writer: &mut Writer<W>,
        node: &Node,
    ) -> Result<(), InterchangeError> {
        let mut start = BytesStart::new(&node.tag);
        for (name, value) in &node.attributes {
            start.push_attribute((name.as_str(), value.as_str()));
        }

        if node.children.is_empty() {
            writer
                .write_event(Event::Empty(start))
                .map_err(|e| InterchangeError::xml(format!("write error: {e}")))?;
        } else {
            writer
                .write_event(Event::Start(start))
                .map_err(|e| InterchangeError::xml(format!("write error: {e}")))?;
            for child in &node.children {
                Self::write_node_events(writer, child)?;
            }
            writer
                .write_event(Event::End(BytesEnd::new(&node.tag)))
                .map_err(|e| InterchangeError::xml(format!("write error: {e}")))?;
        }
        Ok(())
    }
}
