//! Flyweight registry: the sole construction path for elements.

use std::sync::Arc;

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use super::category::Category;
use super::element::Element;

/// Canonicalizing cache over `(category, id)` pairs.
///
/// For a given pair the registry returns the same `Arc<Element>` on every
/// call, constructing the variant at most once. The registry is an explicit
/// value owned by the extraction session; each test constructs its own
/// instead of sharing hidden process-wide state.
///
/// The registry is the only shared mutable state in the model. Lookups take
/// the read lock; a miss re-checks under the write lock so concurrent first
/// requests for the same pair never construct two instances.
#[derive(Debug, Default)]
pub struct ElementRegistry {
    elements: RwLock<FxHashMap<Category, FxHashMap<Arc<str>, Arc<Element>>>>,
}

impl ElementRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical element for `(category, id)`, constructing and
    /// registering it on first request.
    ///
    /// The id is stored verbatim; it is parsed lazily when derived attributes
    /// are accessed, never validated here.
    pub fn get_element(&self, category: Category, id: &str) -> Arc<Element> {
        if let Some(existing) = self.elements.read().get(&category).and_then(|m| m.get(id)) {
            return Arc::clone(existing);
        }

        let mut elements = self.elements.write();
        let per_category = elements.entry(category).or_default();
        // Re-check: another worker may have constructed it between locks.
        if let Some(existing) = per_category.get(id) {
            return Arc::clone(existing);
        }

        tracing::trace!(%category, id, "registering element");
        let id: Arc<str> = Arc::from(id);
        let element = Arc::new(Element::new(category, Arc::clone(&id)));
        per_category.insert(id, Arc::clone(&element));
        element
    }

    /// Return the canonical element if it has been registered, without
    /// creating it.
    pub fn get_if_registered(&self, category: Category, id: &str) -> Option<Arc<Element>> {
        self.elements
            .read()
            .get(&category)
            .and_then(|m| m.get(id))
            .map(Arc::clone)
    }

    /// Number of registered elements across all categories.
    pub fn len(&self) -> usize {
        self.elements.read().values().map(|m| m.len()).sum()
    }

    /// True if no elements have been registered.
    pub fn is_empty(&self) -> bool {
        self.elements.read().values().all(|m| m.is_empty())
    }

    /// Snapshot of all registered elements, sorted by category then id for
    /// deterministic export.
    pub fn elements(&self) -> Vec<Arc<Element>> {
        let elements = self.elements.read();
        let mut out: Vec<Arc<Element>> = elements
            .values()
            .flat_map(|m| m.values().cloned())
            .collect();
        out.sort_by(|a, b| (a.category(), a.id()).cmp(&(b.category(), b.id())));
        out
    }
}
