//! Element variants: one immutable value type per category.
//!
//! Variants carry only their identifier; every derived attribute is a pure
//! function of that string. Cross-references (the declaring class of a
//! method, the enclosing class of a nested type) are computed by re-parsing
//! the identifier and resolving the result through the registry, so the model
//! stays acyclic and serializes as plain `(category, id)` pairs.
//!
//! Variant constructors are crate-private: the registry is the only
//! construction path, which is what keeps instances canonical.

use std::sync::Arc;

use super::category::Category;
use super::error::ModelError;
use super::grammar;
use super::registry::ElementRegistry;

/// A canonical program element.
///
/// Equality and hashing are defined solely by `(category, id)`: the enum
/// discriminant carries the category, each variant carries the id. Two
/// elements of different categories are never equal, even with identical
/// identifier text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Element {
    Package(PackageElement),
    Class(ClassElement),
    Method(MethodElement),
    Field(FieldElement),
}

impl Element {
    pub(crate) fn new(category: Category, id: Arc<str>) -> Self {
        match category {
            Category::Package => Element::Package(PackageElement { id }),
            Category::Class => Element::Class(ClassElement { id }),
            Category::Method => Element::Method(MethodElement { id }),
            Category::Field => Element::Field(FieldElement { id }),
        }
    }

    /// The category of this element.
    pub fn category(&self) -> Category {
        match self {
            Element::Package(_) => Category::Package,
            Element::Class(_) => Category::Class,
            Element::Method(_) => Category::Method,
            Element::Field(_) => Category::Field,
        }
    }

    /// The full identifier of this element.
    pub fn id(&self) -> &str {
        match self {
            Element::Package(e) => &e.id,
            Element::Class(e) => &e.id,
            Element::Method(e) => &e.id,
            Element::Field(e) => &e.id,
        }
    }

    /// Name of the package this element belongs to.
    ///
    /// A top-level class with no dotted prefix has package `""`.
    pub fn package_name(&self) -> Result<&str, ModelError> {
        match self {
            Element::Package(e) => Ok(&e.id),
            Element::Class(e) => Ok(e.package_name()),
            Element::Method(e) => e.package_name(),
            Element::Field(e) => e.package_name(),
        }
    }

    /// The identifier rendered without package qualification, for display.
    pub fn short_name(&self) -> Result<String, ModelError> {
        match self {
            Element::Package(e) => Ok(e.short_name().to_string()),
            Element::Class(e) => Ok(e.short_name().to_string()),
            Element::Method(e) => e.short_name(),
            Element::Field(e) => e.short_name(),
        }
    }

    /// The canonical class element lexically containing this element.
    ///
    /// `None` exactly when the element is a top-level type or a package.
    pub fn declaring_class(
        &self,
        registry: &ElementRegistry,
    ) -> Result<Option<Arc<Element>>, ModelError> {
        match self {
            Element::Package(_) => Ok(None),
            Element::Class(e) => Ok(e
                .enclosing_class_id()
                .map(|id| registry.get_element(Category::Class, id))),
            Element::Method(e) => {
                let sig = grammar::split_method_signature(&e.id)?;
                Ok(Some(registry.get_element(Category::Class, sig.declaring_class)))
            }
            Element::Field(e) => {
                let (class_id, _) = grammar::split_member(&e.id)?;
                Ok(Some(registry.get_element(Category::Class, class_id)))
            }
        }
    }

    pub fn as_package(&self) -> Option<&PackageElement> {
        match self {
            Element::Package(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_class(&self) -> Option<&ClassElement> {
        match self {
            Element::Class(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_method(&self) -> Option<&MethodElement> {
        match self {
            Element::Method(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_field(&self) -> Option<&FieldElement> {
        match self {
            Element::Field(e) => Some(e),
            _ => None,
        }
    }
}

/// A package, identified by its dotted name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PackageElement {
    id: Arc<str>,
}

impl PackageElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The last dotted segment of the package name.
    pub fn short_name(&self) -> &str {
        grammar::strip_package(&self.id)
    }
}

/// A class or interface, identified by its fully qualified name.
///
/// Nested types carry their enclosing chain in the simple-name segment,
/// e.g. `a.b.C$D` is `D` nested in `a.b.C`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClassElement {
    id: Arc<str>,
}

impl ClassElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The package this class is defined in; `""` for the default package.
    pub fn package_name(&self) -> &str {
        grammar::split_package_and_simple_name(&self.id).0
    }

    /// The simple name, nested-type separators preserved.
    pub fn short_name(&self) -> &str {
        grammar::split_package_and_simple_name(&self.id).1
    }

    /// True iff this class is nested inside another type.
    pub fn is_nested(&self) -> bool {
        self.enclosing_class_id().is_some()
    }

    /// The fully qualified name of the enclosing type, if any.
    fn enclosing_class_id(&self) -> Option<&str> {
        let simple = self.short_name();
        grammar::split_nested_name(simple)?;
        // Everything up to the last `$` qualifies the enclosing type.
        self.id.rfind(grammar::NESTED_SEPARATOR).map(|pos| &self.id[..pos])
    }
}

/// A method or constructor.
///
/// The identifier comprises the fully qualified name of the declaring class,
/// the member name (the reserved token for constructors), and the
/// parenthesized parameter type list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MethodElement {
    id: Arc<str>,
}

impl MethodElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The simple name of the method.
    pub fn name(&self) -> Result<&str, ModelError> {
        Ok(grammar::split_method_signature(&self.id)?.name)
    }

    /// The parameter type list, parentheses included.
    pub fn parameters(&self) -> Result<&str, ModelError> {
        Ok(grammar::split_method_signature(&self.id)?.parameters)
    }

    /// Package of the declaring class.
    pub fn package_name(&self) -> Result<&str, ModelError> {
        let sig = grammar::split_method_signature(&self.id)?;
        Ok(grammar::split_package_and_simple_name(sig.declaring_class).0)
    }

    /// The id without package qualification: declaring class simple name,
    /// member name, and parameter list with package prefixes stripped.
    pub fn short_name(&self) -> Result<String, ModelError> {
        let sig = grammar::split_method_signature(&self.id)?;
        let class_short = grammar::split_package_and_simple_name(sig.declaring_class).1;
        Ok(format!(
            "{}.{}{}",
            class_short,
            sig.name,
            grammar::short_parameter_list(sig.parameters)
        ))
    }

    /// True iff the member name is the reserved constructor token.
    pub fn is_constructor(&self) -> Result<bool, ModelError> {
        Ok(grammar::is_constructor(self.name()?))
    }
}

/// A field, identified like a method but without a parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldElement {
    id: Arc<str>,
}

impl FieldElement {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The simple name of the field.
    pub fn name(&self) -> Result<&str, ModelError> {
        Ok(grammar::split_member(&self.id)?.1)
    }

    /// Package of the declaring class.
    pub fn package_name(&self) -> Result<&str, ModelError> {
        let (class_id, _) = grammar::split_member(&self.id)?;
        Ok(grammar::split_package_and_simple_name(class_id).0)
    }

    /// Declaring class simple name plus field name.
    pub fn short_name(&self) -> Result<String, ModelError> {
        let (class_id, name) = grammar::split_member(&self.id)?;
        let class_short = grammar::split_package_and_simple_name(class_id).1;
        Ok(format!("{class_short}.{name}"))
    }
}
