//! Self-contained capture of an element for persistence.

use std::sync::Arc;

use super::category::Category;
use super::element::Element;
use super::registry::ElementRegistry;

/// A `(category, id)` pair capturing an element as plain data.
///
/// A handle is everything needed to identify an element across sessions: a
/// model snapshot writes handles, and rehydration resolves each one back
/// through a registry. Resolving never bypasses the registry, so flyweight
/// uniqueness survives a reload.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "interchange", derive(serde::Serialize, serde::Deserialize))]
pub struct ElementHandle {
    pub category: Category,
    pub id: String,
}

impl ElementHandle {
    /// Capture the identity of an element.
    pub fn capture(element: &Element) -> Self {
        Self {
            category: element.category(),
            id: element.id().to_string(),
        }
    }

    /// Resolve this handle to the canonical element in `registry`.
    pub fn resolve(&self, registry: &ElementRegistry) -> Arc<Element> {
        registry.get_element(self.category, &self.id)
    }
}

impl From<&Element> for ElementHandle {
    fn from(element: &Element) -> Self {
        Self::capture(element)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_and_resolve_is_canonical() {
        let registry = ElementRegistry::new();
        let method = registry.get_element(Category::Method, "p.Foo.bar(int)");
        let handle = ElementHandle::capture(&method);
        assert_eq!(handle.category, Category::Method);
        assert_eq!(handle.id, "p.Foo.bar(int)");
        assert!(Arc::ptr_eq(&handle.resolve(&registry), &method));
    }

    #[test]
    fn test_resolve_into_fresh_registry() {
        let registry = ElementRegistry::new();
        let class = registry.get_element(Category::Class, "a.b.C");
        let handle = ElementHandle::from(&*class);

        let rehydrated = ElementRegistry::new();
        let restored = handle.resolve(&rehydrated);
        // Different registry, different instance, same identity.
        assert!(!Arc::ptr_eq(&restored, &class));
        assert_eq!(*restored, *class);
        assert!(Arc::ptr_eq(
            &restored,
            &rehydrated.get_element(Category::Class, "a.b.C")
        ));
    }
}
