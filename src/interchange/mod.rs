//! Export and persistence adapters for the element model.
//!
//! Two surfaces:
//!
//! - **Structured nodes** — [`Node`] is the generic labeled-tree
//!   representation consumed by the external exporter: tag = category,
//!   attributes carry at least the element id. [`xml::XmlWriter`] renders
//!   nodes (or a whole registry) to XML bytes.
//! - **Snapshots** — [`snapshot`] writes every registered element as a JSON
//!   list of `(category, id)` handles and rehydrates them through a registry,
//!   preserving flyweight uniqueness after reload.

mod error;
pub mod node;
pub mod snapshot;
pub mod xml;

pub use error::InterchangeError;
pub use node::{ATTR_ID, Node};
pub use xml::XmlWriter;
