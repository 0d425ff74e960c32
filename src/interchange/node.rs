//! Structured-node representation of elements.

use indexmap::IndexMap;

use crate::model::{Category, Element, ElementHandle};

use super::error::InterchangeError;

/// Attribute name carrying the element identifier.
pub const ATTR_ID: &str = "id";

/// A generic labeled tree node.
///
/// Attributes preserve insertion order so rendered output is stable.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Node {
    pub tag: String,
    pub attributes: IndexMap<String, String>,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attributes: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute insertion.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn push_child(&mut self, child: Node) {
        self.children.push(child);
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Render an element as a node: tag is the category tag, attributes
    /// carry the full identifier.
    pub fn from_element(element: &Element) -> Node {
        Node::new(element.category().tag()).with_attribute(ATTR_ID, element.id())
    }

    /// Read an element identity back out of a node.
    pub fn to_handle(&self) -> Result<ElementHandle, InterchangeError> {
        let category = Category::from_tag(&self.tag)
            .ok_or_else(|| InterchangeError::UnknownTag(self.tag.clone()))?;
        let id = self.attribute(ATTR_ID).ok_or_else(|| InterchangeError::Missing {
            kind: "attribute",
            name: ATTR_ID.to_string(),
        })?;
        Ok(ElementHandle {
            category,
            id: id.to_string(),
        })
    }
}

impl From<&Element> for Node {
    fn from(element: &Element) -> Self {
        Node::from_element(element)
    }
}
