//! Identifier grammar: pure decomposition of element identifier strings.
//!
//! Grammar by category:
//!
//! - CLASS: dot-separated fully qualified name, e.g. `a.b.C`. The text before
//!   the last `.` is the package, the text after is the simple name. Nested
//!   types use `$` inside the simple-name segment (`a.b.C$D`).
//! - METHOD: `<declaring-class-FQN>.<member>(<comma-separated-param-types>)`.
//!   Constructors use the reserved member token [`CONSTRUCTOR_NAME`].
//! - FIELD: `<declaring-class-FQN>.<member>`, no parameter list.
//! - PACKAGE: the dotted package name itself.
//!
//! All functions here are stateless. Class ids are assumed well-formed by the
//! upstream extractor, so [`split_package_and_simple_name`] is total; member
//! ids carry required separators and fail with a typed error when one is
//! absent.

use super::category::Category;
use super::error::ModelError;

/// Reserved member-name token identifying constructors.
pub const CONSTRUCTOR_NAME: &str = "<init>";

/// Separator between package segments and between a class and its members.
pub const PACKAGE_SEPARATOR: char = '.';

/// Separator between a type and a type nested inside it.
pub const NESTED_SEPARATOR: char = '$';

/// The structural parts of a method identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MethodSignature<'a> {
    /// Fully qualified name of the declaring class.
    pub declaring_class: &'a str,
    /// The member name (or [`CONSTRUCTOR_NAME`] for constructors).
    pub name: &'a str,
    /// The parenthesized parameter type list, parentheses included.
    pub parameters: &'a str,
}

/// Split a class id into `(package, simple_name)` on its last `.`.
///
/// Total: an id with no `.` has package `""` and the whole id as simple name.
pub fn split_package_and_simple_name(class_id: &str) -> (&str, &str) {
    match class_id.rfind(PACKAGE_SEPARATOR) {
        Some(pos) => (&class_id[..pos], &class_id[pos + 1..]),
        None => ("", class_id),
    }
}

/// Split a method id into declaring class, member name, and parameter list.
///
/// The first `(` separates the qualifying prefix from the parameter list; the
/// prefix splits on its last `.` into declaring class and member name.
pub fn split_method_signature(method_id: &str) -> Result<MethodSignature<'_>, ModelError> {
    let open = method_id.find('(').ok_or_else(|| {
        ModelError::malformed(Category::Method, method_id, "a parenthesized parameter list")
    })?;
    let (prefix, parameters) = method_id.split_at(open);
    let dot = prefix
        .rfind(PACKAGE_SEPARATOR)
        .ok_or_else(|| ModelError::mismatch(Category::Method, method_id))?;
    Ok(MethodSignature {
        declaring_class: &prefix[..dot],
        name: &prefix[dot + 1..],
        parameters,
    })
}

/// Split a field id into `(declaring_class, member_name)` on its last `.`.
pub fn split_member(field_id: &str) -> Result<(&str, &str), ModelError> {
    let dot = field_id
        .rfind(PACKAGE_SEPARATOR)
        .ok_or_else(|| ModelError::mismatch(Category::Field, field_id))?;
    Ok((&field_id[..dot], &field_id[dot + 1..]))
}

/// Split a simple name into `(enclosing, innermost)` on its last `$`.
///
/// Returns `None` for top-level types.
pub fn split_nested_name(simple_name: &str) -> Option<(&str, &str)> {
    simple_name
        .rfind(NESTED_SEPARATOR)
        .map(|pos| (&simple_name[..pos], &simple_name[pos + 1..]))
}

/// Strip the package prefix from a type name, keeping the simple name.
pub fn strip_package(type_name: &str) -> &str {
    match type_name.rfind(PACKAGE_SEPARATOR) {
        Some(pos) => &type_name[pos + 1..],
        None => type_name,
    }
}

/// Re-render a parenthesized parameter list with package prefixes stripped.
///
/// Parameter order and count are preserved exactly; a zero-parameter list
/// stays `()`.
pub fn short_parameter_list(parameters: &str) -> String {
    let inner = parameters
        .trim_start_matches('(')
        .trim_end_matches(')');
    let mut out = String::with_capacity(parameters.len());
    out.push('(');
    for (i, ty) in inner.split(',').filter(|t| !t.is_empty()).enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(strip_package(ty));
    }
    out.push(')');
    out
}

/// True iff `member_name` is the reserved constructor token.
pub fn is_constructor(member_name: &str) -> bool {
    member_name == CONSTRUCTOR_NAME
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("a.b.C", "a.b", "C")]
    #[case("C", "", "C")]
    #[case("a.b.C$D", "a.b", "C$D")]
    #[case("p.Foo", "p", "Foo")]
    fn test_split_package_and_simple_name(
        #[case] class_id: &str,
        #[case] package: &str,
        #[case] simple: &str,
    ) {
        assert_eq!(split_package_and_simple_name(class_id), (package, simple));
    }

    #[test]
    fn test_split_method_signature() {
        let sig = split_method_signature("p.Foo.bar(p.Baz,int)").unwrap();
        assert_eq!(sig.declaring_class, "p.Foo");
        assert_eq!(sig.name, "bar");
        assert_eq!(sig.parameters, "(p.Baz,int)");
    }

    #[test]
    fn test_split_method_signature_zero_params() {
        let sig = split_method_signature("a.b.C.m()").unwrap();
        assert_eq!(sig.declaring_class, "a.b.C");
        assert_eq!(sig.name, "m");
        assert_eq!(sig.parameters, "()");
    }

    #[test]
    fn test_split_method_signature_missing_parens() {
        let err = split_method_signature("a.b.C.m").unwrap_err();
        assert!(matches!(err, ModelError::MalformedIdentifier { .. }));
    }

    #[test]
    fn test_split_method_signature_unqualified() {
        let err = split_method_signature("m()").unwrap_err();
        assert!(matches!(err, ModelError::CategoryMismatch { .. }));
    }

    #[test]
    fn test_split_member() {
        assert_eq!(split_member("a.b.C.f").unwrap(), ("a.b.C", "f"));
        assert!(matches!(
            split_member("f").unwrap_err(),
            ModelError::CategoryMismatch { .. }
        ));
    }

    #[test]
    fn test_split_nested_name() {
        assert_eq!(split_nested_name("C$D"), Some(("C", "D")));
        assert_eq!(split_nested_name("C$D$E"), Some(("C$D", "E")));
        assert_eq!(split_nested_name("C"), None);
    }

    #[rstest]
    #[case("(a.b.D,E)", "(D,E)")]
    #[case("()", "()")]
    #[case("(int)", "(int)")]
    #[case("(p.Baz,int)", "(Baz,int)")]
    #[case("(x.y.Z,x.y.Z,x.y.Z)", "(Z,Z,Z)")]
    fn test_short_parameter_list(#[case] parameters: &str, #[case] expected: &str) {
        assert_eq!(short_parameter_list(parameters), expected);
    }

    #[test]
    fn test_is_constructor() {
        assert!(is_constructor(CONSTRUCTOR_NAME));
        assert!(!is_constructor("init"));
        assert!(!is_constructor("bar"));
    }
}
