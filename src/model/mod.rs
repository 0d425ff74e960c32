//! The element identity model.
//!
//! An element is named by a single structured identifier string; everything
//! else (package, short display name, declaring class) is derived by parsing
//! that string. The [`ElementRegistry`] is the sole construction path and
//! guarantees at most one live instance per `(category, id)` pair.

pub mod category;
pub mod element;
pub mod error;
pub mod grammar;
pub mod handle;
pub mod registry;

pub use category::Category;
pub use element::{ClassElement, Element, FieldElement, MethodElement, PackageElement};
pub use error::ModelError;
pub use handle::ElementHandle;
pub use registry::ElementRegistry;
