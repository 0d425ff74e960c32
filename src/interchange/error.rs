//! Error types for interchange operations.

use thiserror::Error;

use crate::model::ModelError;

/// Errors that can occur during export and snapshot operations.
#[derive(Debug, Error)]
pub enum InterchangeError {
    /// XML serialization error.
    #[error("XML error: {0}")]
    Xml(String),

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(String),

    /// IO error during read/write.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Identifier decomposition failure from the model layer.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A node tag that names no known category.
    #[error("unknown element tag: {0}")]
    UnknownTag(String),

    /// Missing required attribute.
    #[error("missing required {kind}: {name}")]
    Missing { kind: &'static str, name: String },
}

impl InterchangeError {
    /// Create an XML error.
    pub fn xml(message: impl Into<String>) -> Self {
        Self::Xml(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
