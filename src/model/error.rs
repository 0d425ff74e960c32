//! Error types for the element model.

use thiserror::Error;

use super::category::Category;

/// Errors raised when a derived attribute cannot be computed from an
/// element's identifier.
///
/// Identifiers are stored verbatim and parsed lazily, so these surface at
/// derived-attribute access, not at construction. A failure here is a
/// contract violation by the upstream extractor, never a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The identifier lacks a structural separator its category's grammar
    /// requires (e.g. a method id with no `(`).
    #[error("malformed {category} identifier `{id}`: expected {expected}")]
    MalformedIdentifier {
        category: Category,
        id: String,
        expected: &'static str,
    },

    /// The identifier is structurally present but cannot yield the derivation
    /// its claimed category requires (e.g. a member id with no
    /// class-qualifying prefix).
    #[error("identifier `{id}` does not parse under category {category}")]
    CategoryMismatch { category: Category, id: String },
}

impl ModelError {
    /// Create a malformed-identifier error.
    pub fn malformed(category: Category, id: impl Into<String>, expected: &'static str) -> Self {
        Self::MalformedIdentifier {
            category,
            id: id.into(),
            expected,
        }
    }

    /// Create a category-mismatch error.
    pub fn mismatch(category: Category, id: impl Into<String>) -> Self {
        Self::CategoryMismatch {
            category,
            id: id.into(),
        }
    }
}
