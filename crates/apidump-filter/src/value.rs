//! Runtime field values read from API members.
//!
//! The [`Value`] enum is what a [`Member`](crate::Member) hands back for a
//! field. Filters only ever compare against these shapes, so any record type
//! can be filtered as long as it can describe its fields this way.

/// Runtime value of a member field, borrowed from the source record.
///
/// # Example
///
/// ```
/// use apidump_filter::{Field, Member, Value};
///
/// struct Prop {
///     name: String,
/// }
///
/// impl Member for Prop {
///     fn field(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Name => Value::Str(&self.name),
///             Field::MemberType => Value::Str("Property"),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let prop = Prop { name: "Health".into() };
/// assert_eq!(prop.field(Field::Name), Value::Str("Health"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value<'a> {
    /// String value (borrowed).
    Str(&'a str),
    /// The string labels of a tag list.
    Tags(Vec<&'a str>),
    /// Security requirement of the member.
    Security(SecurityValue<'a>),
    /// Boolean value.
    Bool(bool),
    /// Field is present but has a shape the crate does not understand.
    Other,
    /// Field not present or null.
    None,
}

impl<'a> Value<'a> {
    /// Returns `true` if this is a `None` value.
    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Returns `true` unless the value is `None` or `Bool(false)`.
    ///
    /// This is how the predefined flag filters decide whether a member
    /// carries a flag. Any other present value counts, so a malformed flag
    /// such as `"yes"` or `0` reads as set.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::None | Value::Bool(false))
    }

    /// Extracts the string value, if present.
    pub fn as_str(&self) -> Option<&'a str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extracts the tag labels, if present.
    pub fn as_tags(&self) -> Option<&[&'a str]> {
        match self {
            Value::Tags(tags) => Some(tags.as_slice()),
            _ => None,
        }
    }

    /// Extracts the security value, if present.
    pub fn as_security(&self) -> Option<SecurityValue<'a>> {
        match self {
            Value::Security(s) => Some(s.clone()),
            _ => None,
        }
    }

    /// Extracts the boolean value, if present.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// The security requirement a member declares.
///
/// Properties carry separate read and write requirements, each one level or
/// a set of levels that all grant access. Functions, events and callbacks
/// carry a single string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecurityValue<'a> {
    /// One requirement covering every kind of access.
    Single(&'a str),
    /// Separate requirements; a side is `None` when the record omits it.
    Split {
        read: Option<Vec<&'a str>>,
        write: Option<Vec<&'a str>>,
    },
}

impl<'a> SecurityValue<'a> {
    /// Levels that grant read access.
    pub fn read(&self) -> Option<&[&'a str]> {
        match self {
            SecurityValue::Single(s) => Some(std::slice::from_ref(s)),
            SecurityValue::Split { read, .. } => read.as_deref(),
        }
    }

    /// Levels that grant write access.
    pub fn write(&self) -> Option<&[&'a str]> {
        match self {
            SecurityValue::Single(s) => Some(std::slice::from_ref(s)),
            SecurityValue::Split { write, .. } => write.as_deref(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truthiness() {
        assert!(Value::Bool(true).is_truthy());
        assert!(Value::Str("").is_truthy());
        assert!(Value::Tags(vec![]).is_truthy());
        assert!(Value::Other.is_truthy());
        assert!(!Value::Bool(false).is_truthy());
        assert!(!Value::None.is_truthy());
    }

    #[test]
    fn value_extractors() {
        assert_eq!(Value::Str("hello").as_str(), Some("hello"));
        assert_eq!(Value::Tags(vec!["a", "b"]).as_tags(), Some(&["a", "b"][..]));
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(
            Value::Security(SecurityValue::Single("None")).as_security(),
            Some(SecurityValue::Single("None"))
        );

        // Wrong shape returns None
        assert_eq!(Value::Str("test").as_bool(), None);
        assert_eq!(Value::Bool(true).as_str(), None);
        assert_eq!(Value::Other.as_tags(), None);
        assert!(Value::None.is_none());
    }

    #[test]
    fn single_security_covers_both_sides() {
        let security = SecurityValue::Single("PluginSecurity");
        assert_eq!(security.read(), Some(&["PluginSecurity"][..]));
        assert_eq!(security.write(), Some(&["PluginSecurity"][..]));
    }

    #[test]
    fn split_security_sides() {
        let security = SecurityValue::Split {
            read: Some(vec!["None", "PluginSecurity"]),
            write: None,
        };
        assert_eq!(security.read(), Some(&["None", "PluginSecurity"][..]));
        assert_eq!(security.write(), None);
    }
}
