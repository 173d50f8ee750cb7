//! Field access for filterable API members.
//!
//! This module provides the [`Member`] trait, which every record type that
//! filters run against implements. Filters never see the concrete record;
//! they ask for a [`Field`] and inspect the returned [`Value`].

use std::fmt;

use crate::value::Value;

/// Classification flags that the predefined filters test.
///
/// How a record derives these is up to the record. Filters only check
/// whether the flag field is truthy: anything present other than `false`
/// counts as set, including malformed values such as `"yes"` or `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    Deprecated,
    ReadOnly,
    Replicated,
    Scriptable,
    Yields,
    ThreadSafe,
    Readable,
    Writable,
    Service,
}

impl Flag {
    /// Every flag, in declaration order.
    pub const ALL: [Flag; 9] = [
        Flag::Deprecated,
        Flag::ReadOnly,
        Flag::Replicated,
        Flag::Scriptable,
        Flag::Yields,
        Flag::ThreadSafe,
        Flag::Readable,
        Flag::Writable,
        Flag::Service,
    ];

    /// Returns the record field name for this flag.
    pub fn as_str(self) -> &'static str {
        match self {
            Flag::Deprecated => "Deprecated",
            Flag::ReadOnly => "ReadOnly",
            Flag::Replicated => "Replicated",
            Flag::Scriptable => "Scriptable",
            Flag::Yields => "Yields",
            Flag::ThreadSafe => "ThreadSafe",
            Flag::Readable => "Readable",
            Flag::Writable => "Writable",
            Flag::Service => "Service",
        }
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of an API member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Set of string labels.
    Tags,
    /// Security requirement, single or split into read/write.
    Security,
    /// `"Property"`, `"Function"`, `"Event"`, `"Callback"`, ...
    MemberType,
    /// Member name.
    Name,
    /// Declared value type name, e.g. `"float"`.
    ValueType,
    /// A classification flag.
    Flag(Flag),
}

impl Field {
    /// Returns the record field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Field::Tags => "Tags",
            Field::Security => "Security",
            Field::MemberType => "MemberType",
            Field::Name => "Name",
            Field::ValueType => "ValueType",
            Field::Flag(flag) => flag.as_str(),
        }
    }
}

impl From<Flag> for Field {
    fn from(flag: Flag) -> Self {
        Field::Flag(flag)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for records that filters can inspect.
///
/// Implementations return [`Value::None`] for fields the record lacks and
/// [`Value::Other`] for fields whose shape they cannot describe. Neither
/// ever panics; a filter reading such a field simply fails.
///
/// # Manual Implementation
///
/// ```
/// use apidump_filter::{Field, Filter, Flag, Member, Value};
///
/// struct Event {
///     name: String,
///     deprecated: bool,
/// }
///
/// impl Member for Event {
///     fn field(&self, field: Field) -> Value<'_> {
///         match field {
///             Field::Name => Value::Str(&self.name),
///             Field::MemberType => Value::Str("Event"),
///             Field::Flag(Flag::Deprecated) => Value::Bool(self.deprecated),
///             _ => Value::None,
///         }
///     }
/// }
///
/// let event = Event { name: "Changed".into(), deprecated: false };
/// assert!(Filter::member_type("Event").matches(&event));
/// assert!(!Filter::deprecated().matches(&event));
/// ```
pub trait Member {
    /// Returns the value of a field for filter comparison.
    fn field(&self, field: Field) -> Value<'_>;

    /// Returns `true` if the flag field is truthy.
    ///
    /// See [`Value::is_truthy`]; a non-boolean flag value passes.
    fn flag(&self, flag: Flag) -> bool {
        self.field(Field::Flag(flag)).is_truthy()
    }
}

impl<M: Member + ?Sized> Member for &M {
    fn field(&self, field: Field) -> Value<'_> {
        (**self).field(field)
    }
}

impl<M: Member + ?Sized> Member for Box<M> {
    fn field(&self, field: Field) -> Value<'_> {
        (**self).field(field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestMember {
        name: String,
        service: Option<bool>,
    }

    impl Member for TestMember {
        fn field(&self, field: Field) -> Value<'_> {
            match field {
                Field::Name => Value::Str(&self.name),
                Field::Flag(Flag::Service) => self.service.map_or(Value::None, Value::Bool),
                _ => Value::None,
            }
        }
    }

    #[test]
    fn member_manual_impl() {
        let member = TestMember {
            name: "Workspace".to_string(),
            service: Some(true),
        };

        assert_eq!(member.field(Field::Name), Value::Str("Workspace"));
        assert_eq!(member.field(Field::Tags), Value::None);
        assert!(member.flag(Flag::Service));
        assert!(!member.flag(Flag::Deprecated));
    }

    #[test]
    fn member_flag_false_and_missing() {
        let explicit = TestMember {
            name: "a".to_string(),
            service: Some(false),
        };
        let missing = TestMember {
            name: "b".to_string(),
            service: None,
        };

        assert!(!explicit.flag(Flag::Service));
        assert!(!missing.flag(Flag::Service));
    }

    #[test]
    fn member_through_references() {
        let member = TestMember {
            name: "Lighting".to_string(),
            service: Some(true),
        };
        let boxed: Box<dyn Member> = Box::new(TestMember {
            name: "Lighting".to_string(),
            service: Some(true),
        });

        assert_eq!((&member).field(Field::Name), Value::Str("Lighting"));
        assert!(boxed.flag(Flag::Service));
    }

    #[test]
    fn field_names() {
        assert_eq!(Field::ValueType.as_str(), "ValueType");
        assert_eq!(Field::from(Flag::ThreadSafe).as_str(), "ThreadSafe");
        assert_eq!(Flag::ReadOnly.to_string(), "ReadOnly");
        assert_eq!(Flag::ALL.len(), 9);
    }
}
