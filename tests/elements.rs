//! End-to-end behavior of the element model as the extraction front-end
//! drives it: a stream of `(category, id)` requests against one registry.

use std::sync::Arc;

use factex::model::grammar::CONSTRUCTOR_NAME;
use factex::{Category, ElementRegistry};

#[test]
fn method_registration_scenario() {
    let registry = ElementRegistry::new();
    let element = registry.get_element(Category::Method, "p.Foo.bar(p.Baz,int)");
    let method = element.as_method().unwrap();

    assert_eq!(method.name().unwrap(), "bar");
    assert_eq!(method.parameters().unwrap(), "(p.Baz,int)");
    assert_eq!(element.short_name().unwrap(), "Foo.bar(Baz,int)");
    assert_eq!(element.package_name().unwrap(), "p");

    let declaring = element.declaring_class(&registry).unwrap().unwrap();
    assert_eq!(declaring.short_name().unwrap(), "Foo");
}

#[test]
fn flyweight_uniqueness_across_derivations() {
    let registry = ElementRegistry::new();
    let method = registry.get_element(Category::Method, "a.b.C.m()");
    let field = registry.get_element(Category::Field, "a.b.C.count");

    // Both members derive the same canonical declaring class.
    let from_method = method.declaring_class(&registry).unwrap().unwrap();
    let from_field = field.declaring_class(&registry).unwrap().unwrap();
    let direct = registry.get_element(Category::Class, "a.b.C");
    assert!(Arc::ptr_eq(&from_method, &from_field));
    assert!(Arc::ptr_eq(&from_method, &direct));
}

#[test]
fn package_derivation() {
    let registry = ElementRegistry::new();
    assert_eq!(
        registry
            .get_element(Category::Class, "a.b.C")
            .package_name()
            .unwrap(),
        "a.b"
    );
    assert_eq!(
        registry
            .get_element(Category::Class, "C")
            .package_name()
            .unwrap(),
        ""
    );
}

#[test]
fn constructor_round_trip() {
    let registry = ElementRegistry::new();
    let ctor_id = format!("p.Foo.{CONSTRUCTOR_NAME}(p.Baz)");
    let ctor = registry.get_element(Category::Method, &ctor_id);
    assert!(ctor.as_method().unwrap().is_constructor().unwrap());

    let plain = registry.get_element(Category::Method, "p.Foo.init(p.Baz)");
    assert!(!plain.as_method().unwrap().is_constructor().unwrap());
}

#[test]
fn nested_type_chain_resolves_per_level() {
    let registry = ElementRegistry::new();
    let inner = registry.get_element(Category::Class, "a.b.Outer$Mid$Inner");
    assert_eq!(inner.short_name().unwrap(), "Outer$Mid$Inner");

    let mid = inner.declaring_class(&registry).unwrap().unwrap();
    assert_eq!(mid.id(), "a.b.Outer$Mid");
    let outer = mid.declaring_class(&registry).unwrap().unwrap();
    assert_eq!(outer.id(), "a.b.Outer");
    assert!(outer.declaring_class(&registry).unwrap().is_none());
}

#[test]
fn registries_are_isolated() {
    let first = ElementRegistry::new();
    let second = ElementRegistry::new();
    let a = first.get_element(Category::Class, "a.b.C");
    let b = second.get_element(Category::Class, "a.b.C");
    // Separate sessions, separate canonical instances, equal values.
    assert!(!Arc::ptr_eq(&a, &b));
    assert_eq!(*a, *b);
}
