//! Whole-model snapshots for session persistence.
//!
//! A snapshot is the JSON list of every registered element's
//! `(category, id)` handle. Loading re-resolves each handle through the
//! target registry, so rehydrated elements are canonical in that registry.

use std::sync::Arc;

use crate::model::{Element, ElementHandle, ElementRegistry};

use super::error::InterchangeError;

/// Serialize every registered element as JSON handles.
pub fn write_snapshot(registry: &ElementRegistry) -> Result<Vec<u8>, InterchangeError> {
    let handles: Vec<ElementHandle> = registry
        .elements()
        .iter()
        .map(|e| ElementHandle::capture(e))
        .collect();
    tracing::debug!(elements = handles.len(), "writing model snapshot");
    serde_json::to_vec_pretty(&handles).map_err(|e| InterchangeError::json(e.to_string()))
}

/// Rehydrate a snapshot by resolving every handle through `registry`.
///
/// Returns the restored elements in snapshot order.
pub fn load_snapshot(
    registry: &ElementRegistry,
    bytes: &[u8],
) -> Result<Vec<Arc<Element>>, InterchangeError> {
    let handles: Vec<ElementHandle> =
        serde_json::from_slice(bytes).map_err(|e| InterchangeError::json(e.to_string()))?;
    tracing::debug!(elements = handles.len(), "loading model snapshot");
    Ok(handles.iter().map(|h| h.resolve(registry)).collect())
}
