//! Value type aliasing.
//!
//! Callers think in scripting primitives (`number`, `boolean`), while the
//! dump stores the engine type (`float`, `int64`, `bool`). The table below
//! lists every alias explicitly; names not in the table only match
//! themselves.

/// Primitive names and the stored value type names each one covers.
pub const ALIASES: &[(&str, &[&str])] = &[
    ("number", &["float", "double", "int", "int64"]),
    ("boolean", &["bool"]),
    ("string", &["string"]),
];

/// Returns the stored names a primitive name aliases to, if it is one.
pub fn aliases(name: &str) -> Option<&'static [&'static str]> {
    ALIASES
        .iter()
        .find(|(primitive, _)| *primitive == name)
        .map(|(_, stored)| *stored)
}

/// Returns `true` if a member whose value type is `stored` satisfies a
/// request for `requested`.
pub fn matches(requested: &str, stored: &str) -> bool {
    match aliases(requested) {
        Some(names) => names.contains(&stored),
        None => requested == stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_covers_numeric_types() {
        for stored in ["float", "double", "int", "int64"] {
            assert!(matches("number", stored), "number should cover {stored}");
        }
        assert!(!matches("number", "string"));
        assert!(!matches("number", "number"));
    }

    #[test]
    fn boolean_and_string() {
        assert!(matches("boolean", "bool"));
        assert!(!matches("boolean", "boolean"));
        assert!(matches("string", "string"));
    }

    #[test]
    fn unaliased_names_match_exactly() {
        assert!(matches("float", "float"));
        assert!(!matches("float", "double"));
        assert!(matches("Vector3", "Vector3"));
        assert!(!matches("Vector3", "vector3"));
    }

    #[test]
    fn alias_lookup() {
        assert_eq!(aliases("boolean"), Some(&["bool"][..]));
        assert_eq!(aliases("Instance"), None);
    }
}
