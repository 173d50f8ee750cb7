//! apidump-filter - Composable filters for engine API dump members.
//!
//! An API dump describes every class of an engine API and its members:
//! properties, functions, events and callbacks. This crate builds small,
//! pure predicates over those members and runs them against collections.
//! It supports:
//!
//! - Tag, security, member type, name and value type predicates
//! - Predefined flag filters (`deprecated`, `read_only`, `service`, ...)
//! - Combinators: `invert` (or `!`), `any`, `all`, `and`, `or`
//! - Any record type, through the [`Member`] field-access trait
//! - Typed dump records ([`ApiDump`], [`ApiMember`]) and raw `serde_json::Value`
//!
//! # Quick Start
//!
//! ```rust
//! use apidump_filter::{ApiDump, ApiMember, Filter, SecurityLevels};
//!
//! let dump = ApiDump::from_json(r#"{
//!     "Version": 1,
//!     "Classes": [{
//!         "Name": "Humanoid",
//!         "Members": [
//!             {
//!                 "MemberType": "Property",
//!                 "Name": "Health",
//!                 "Security": { "Read": "None", "Write": "LocalUserSecurity" },
//!                 "ValueType": { "Category": "Primitive", "Name": "float" }
//!             },
//!             {
//!                 "MemberType": "Function",
//!                 "Name": "TakeDamage",
//!                 "Security": "None",
//!                 "Tags": ["Deprecated"],
//!                 "Deprecated": true
//!             }
//!         ]
//!     }]
//! }"#)?;
//!
//! let readable_numbers: Filter<ApiMember> = Filter::all([
//!     Filter::member_type("Property"),
//!     Filter::value_type(Some("number")),
//!     Filter::has_security(SecurityLevels::new().read("None")),
//! ]);
//!
//! let members = &dump.classes[0].members;
//! let results = readable_numbers.filter(members);
//! assert_eq!(results.len(), 1);
//! assert_eq!(results[0].name, "Health");
//!
//! let current = !Filter::<ApiMember>::deprecated();
//! assert_eq!(current.count(members), 1);
//! # Ok::<(), apidump_filter::FilterError>(())
//! ```
//!
//! # Evaluation Rules
//!
//! Filters never fail. A field that is missing, or present in a shape the
//! record cannot describe, makes the predicate reading it return `false`.
//! The one diagnostic is [`Filter::any`] with no filters: the result accepts
//! everything and a `tracing` warning is emitted.
//!
//! | Filter | Accepts a member when |
//! |--------|-----------------------|
//! | `has_tags(tags)` | every tag is present |
//! | `has_security(levels)` | each set axis allows the member's level |
//! | `member_type(s)`, `name(s)` | the field equals `s` exactly |
//! | `value_type(Some(t))` | the value type is `t` or one of its aliases |
//! | `value_type(None)` | there is no value type |
//! | `deprecated()`, ... | the flag field is truthy (any present non-`false` value) |

mod dump;
mod error;
mod filter;
mod member;
mod security;
mod value;
pub mod value_type;

// Re-export public API
pub use dump::{ApiClass, ApiDump, ApiMember, Flags, Level, Security, Tag, TypeRef};
pub use error::{FilterError, Result};
pub use filter::Filter;
pub use member::{Field, Flag, Member};
pub use security::{Allowed, SecurityLevels};
pub use value::{SecurityValue, Value};
