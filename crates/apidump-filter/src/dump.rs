//! API dump records.
//!
//! The dump lists classes, each with its members. [`ApiMember`] maps one
//! member entry with serde; `serde_json::Value` also implements
//! [`Member`] so entries can be filtered without committing to a schema.

use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

use crate::error::Result;
use crate::member::{Field, Flag, Member};
use crate::value::{SecurityValue, Value};

/// A whole API dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiDump {
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub classes: Vec<ApiClass>,
}

impl ApiDump {
    /// Parses a dump from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a dump.
    pub fn from_reader(reader: impl Read) -> Result<Self> {
        let json = std::io::read_to_string(reader)?;
        Self::from_json(&json)
    }

    /// Looks up a class by name.
    pub fn class(&self, name: &str) -> Option<&ApiClass> {
        self.classes.iter().find(|class| class.name == name)
    }

    /// Iterates every member of every class, paired with its class.
    pub fn members(&self) -> impl Iterator<Item = (&ApiClass, &ApiMember)> {
        self.classes
            .iter()
            .flat_map(|class| class.members.iter().map(move |member| (class, member)))
    }
}

/// A class entry of the dump.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiClass {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub memory_category: Option<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub members: Vec<ApiMember>,
}

/// A member entry of the dump: a property, function, event or callback.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ApiMember {
    pub member_type: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<Tag>,
    #[serde(default)]
    pub security: Option<Security>,
    #[serde(default)]
    pub value_type: Option<TypeRef>,
    #[serde(default)]
    pub return_type: Option<TypeRef>,
    #[serde(default)]
    pub thread_safety: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(flatten)]
    pub flags: Flags,
}

impl ApiMember {
    /// Returns the string tags of this member, skipping structured ones.
    pub fn tag_names(&self) -> Vec<&str> {
        self.tags.iter().filter_map(Tag::as_name).collect()
    }
}

impl Member for ApiMember {
    fn field(&self, field: Field) -> Value<'_> {
        match field {
            Field::Tags => Value::Tags(self.tag_names()),
            Field::Security => match &self.security {
                Some(security) => security.as_value().map_or(Value::Other, Value::Security),
                None => Value::None,
            },
            Field::MemberType => Value::Str(&self.member_type),
            Field::Name => Value::Str(&self.name),
            Field::ValueType => match &self.value_type {
                Some(ty) => Value::Str(&ty.name),
                None => Value::None,
            },
            Field::Flag(flag) => self.flags.get(flag).map_or(Value::None, Value::Bool),
        }
    }
}

/// A tag entry. Most tags are plain strings; newer dumps also carry
/// structured tags such as `{"PreferredDescriptorName": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Tag {
    Name(String),
    Structured(Json),
}

impl Tag {
    /// Returns the tag string, if this is a plain tag.
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Tag::Name(name) => Some(name),
            Tag::Structured(_) => None,
        }
    }
}

impl From<&str> for Tag {
    fn from(name: &str) -> Self {
        Tag::Name(name.to_string())
    }
}

/// A member's `Security` entry.
///
/// Functions, events and callbacks carry one level. Properties carry a
/// `{"Read": .., "Write": ..}` object whose sides are each a [`Level`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Security {
    Single(String),
    Split {
        #[serde(rename = "Read", default, skip_serializing_if = "Option::is_none")]
        read: Option<Level>,
        #[serde(rename = "Write", default, skip_serializing_if = "Option::is_none")]
        write: Option<Level>,
    },
}

impl Security {
    /// Borrows this entry as a [`SecurityValue`].
    ///
    /// Returns `None` for a malformed split entry with neither side.
    pub fn as_value(&self) -> Option<SecurityValue<'_>> {
        match self {
            Security::Single(level) => Some(SecurityValue::Single(level)),
            Security::Split { read: None, write: None } => None,
            Security::Split { read, write } => Some(SecurityValue::Split {
                read: read.as_ref().map(Level::names),
                write: write.as_ref().map(Level::names),
            }),
        }
    }
}

impl From<&str> for Security {
    fn from(level: &str) -> Self {
        Security::Single(level.to_string())
    }
}

/// One side of a split `Security` entry: a level, or several levels any of
/// which grants access.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Level {
    One(String),
    AnyOf(Vec<String>),
}

impl Level {
    /// The level names on this side.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Level::One(level) => vec![level.as_str()],
            Level::AnyOf(levels) => levels.iter().map(String::as_str).collect(),
        }
    }
}

impl From<&str> for Level {
    fn from(level: &str) -> Self {
        Level::One(level.to_string())
    }
}

/// A type reference, e.g. `{"Category": "Primitive", "Name": "float"}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TypeRef {
    #[serde(default)]
    pub category: String,
    pub name: String,
}

impl TypeRef {
    /// Creates a type reference from its category and name.
    pub fn new(category: impl Into<String>, name: impl Into<String>) -> Self {
        TypeRef {
            category: category.into(),
            name: name.into(),
        }
    }
}

/// Classification flags carried alongside a member entry.
///
/// Each flag is `None` when the entry does not mention it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Flags {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deprecated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_only: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicated: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scriptable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yields: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_safe: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub writable: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service: Option<bool>,
}

impl Flags {
    /// Returns the flag's value, or `None` when the entry omits it.
    pub fn get(&self, flag: Flag) -> Option<bool> {
        match flag {
            Flag::Deprecated => self.deprecated,
            Flag::ReadOnly => self.read_only,
            Flag::Replicated => self.replicated,
            Flag::Scriptable => self.scriptable,
            Flag::Yields => self.yields,
            Flag::ThreadSafe => self.thread_safe,
            Flag::Readable => self.readable,
            Flag::Writable => self.writable,
            Flag::Service => self.service,
        }
    }

    /// Sets a flag, returning the updated flags.
    pub fn with(mut self, flag: Flag, value: bool) -> Self {
        let slot = match flag {
            Flag::Deprecated => &mut self.deprecated,
            Flag::ReadOnly => &mut self.read_only,
            Flag::Replicated => &mut self.replicated,
            Flag::Scriptable => &mut self.scriptable,
            Flag::Yields => &mut self.yields,
            Flag::ThreadSafe => &mut self.thread_safe,
            Flag::Readable => &mut self.readable,
            Flag::Writable => &mut self.writable,
            Flag::Service => &mut self.service,
        };
        *slot = Some(value);
        self
    }
}

// Raw JSON entries: anything unexpected reads as `Value::Other`. A
// non-object entry carries no flags and every other field is malformed.
impl Member for Json {
    fn field(&self, field: Field) -> Value<'_> {
        let Json::Object(entry) = self else {
            return match field {
                Field::Flag(_) => Value::None,
                _ => Value::Other,
            };
        };
        let Some(raw) = entry.get(field.as_str()) else {
            return match field {
                Field::Tags => Value::Tags(Vec::new()),
                _ => Value::None,
            };
        };

        match field {
            Field::Tags => match raw {
                Json::Array(tags) => Value::Tags(tags.iter().filter_map(Json::as_str).collect()),
                Json::Null => Value::Tags(Vec::new()),
                _ => Value::Other,
            },
            Field::Security => json_security(raw),
            Field::MemberType | Field::Name => json_str(raw),
            Field::ValueType => match raw {
                Json::Object(ty) => ty.get("Name").map_or(Value::Other, json_str),
                other => json_str(other),
            },
            Field::Flag(_) => match raw {
                Json::Bool(b) => Value::Bool(*b),
                Json::Null => Value::None,
                _ => Value::Other,
            },
        }
    }
}

fn json_str(raw: &Json) -> Value<'_> {
    match raw {
        Json::String(s) => Value::Str(s),
        Json::Null => Value::None,
        _ => Value::Other,
    }
}

fn json_security(raw: &Json) -> Value<'_> {
    match raw {
        Json::String(level) => Value::Security(SecurityValue::Single(level)),
        Json::Object(levels) => {
            let (Some(read), Some(write)) = (
                json_levels(levels.get("Read")),
                json_levels(levels.get("Write")),
            ) else {
                return Value::Other;
            };
            if read.is_none() && write.is_none() {
                return Value::Other;
            }
            Value::Security(SecurityValue::Split { read, write })
        }
        Json::Null => Value::None,
        _ => Value::Other,
    }
}

// One side of a split entry. The outer `None` marks a malformed side, the
// inner one a missing side.
fn json_levels(raw: Option<&Json>) -> Option<Option<Vec<&str>>> {
    match raw {
        None | Some(Json::Null) => Some(None),
        Some(Json::String(level)) => Some(Some(vec![level.as_str()])),
        Some(Json::Array(levels)) => levels
            .iter()
            .map(Json::as_str)
            .collect::<Option<Vec<_>>>()
            .map(Some),
        Some(_) => None,
    }
}
