//! # factex
//!
//! Canonical in-memory model of program elements (classes, methods, fields,
//! packages) discovered by a static fact-extraction front-end.
//!
//! Elements are named by structured textual identifiers and canonicalized
//! through a flyweight registry: for a given `(category, id)` pair there is at
//! most one live [`Element`] instance per registry. Structural relationships
//! (declaring class, package membership, display names) are derived purely by
//! decomposing the identifier string, never by stored back-pointers, which
//! keeps the model acyclic and trivially serializable.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! interchange  → structured-node export, XML rendering, model snapshots
//!   ↓
//! model        → Category, identifier grammar, Element variants, ElementRegistry
//! ```

/// Element model: categories, identifier grammar, variants, flyweight registry
pub mod model;

/// Model interchange: structured nodes, XML rendering, JSON snapshots
#[cfg(feature = "interchange")]
pub mod interchange;

// Re-export commonly needed items
pub use model::{Category, Element, ElementHandle, ElementRegistry, ModelError};
