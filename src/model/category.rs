//! The closed set of element kinds.

use std::fmt;

/// The kind of a program element.
///
/// The category selects which identifier grammar rule applies and which
/// [`Element`](super::Element) variant the registry instantiates. It is part
/// of the element's identity: two elements with the same identifier text but
/// different categories are distinct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "interchange",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Category {
    Package,
    Class,
    Method,
    Field,
}

impl Category {
    /// All categories, in export order.
    pub const ALL: [Category; 4] = [
        Category::Package,
        Category::Class,
        Category::Method,
        Category::Field,
    ];

    /// The tag used for this category in structured-node export.
    pub fn tag(self) -> &'static str {
        match self {
            Category::Package => "package",
            Category::Class => "class",
            Category::Method => "method",
            Category::Field => "field",
        }
    }

    /// Parse an export tag back into a category.
    pub fn from_tag(tag: &str) -> Option<Category> {
        match tag {
            "package" => Some(Category::Package),
            "class" => Some(Category::Class),
            "method" => Some(Category::Method),
            "field" => Some(Category::Field),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_round_trip() {
        for category in Category::ALL {
            assert_eq!(Category::from_tag(category.tag()), Some(category));
        }
    }

    #[test]
    fn test_unknown_tag() {
        assert_eq!(Category::from_tag("interface"), None);
        assert_eq!(Category::from_tag(""), None);
    }

    #[test]
    fn test_display_matches_tag() {
        assert_eq!(Category::Method.to_string(), "method");
    }
}
