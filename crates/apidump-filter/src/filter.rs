//! Filter construction, combination and execution.
//!
//! The [`Filter`] struct wraps a predicate over an API member. Constructors
//! build the common member predicates, combinators join them, and the
//! execution methods run them against collections.

use std::fmt;
use std::ops::Not;
use std::sync::Arc;

use regex::Regex;

use crate::error::Result;
use crate::member::{Field, Flag, Member};
use crate::security::SecurityLevels;
use crate::value::Value;
use crate::value_type;

/// A reusable predicate over items of type `T`.
///
/// Filters are pure: they read items through shared references and hold no
/// mutable state, so a filter can be cloned cheaply and evaluated from any
/// number of threads.
///
/// # Example
///
/// ```
/// use apidump_filter::{ApiMember, Filter};
///
/// let visible_properties: Filter<ApiMember> = Filter::all([
///     Filter::member_type("Property"),
///     Filter::has_security("None"),
///     Filter::invert(Filter::deprecated()),
/// ]);
///
/// let members: Vec<ApiMember> = Vec::new();
/// assert!(visible_properties.filter(&members).is_empty());
/// ```
pub struct Filter<T: ?Sized> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T: ?Sized> Clone for Filter<T> {
    fn clone(&self) -> Self {
        Filter {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T: ?Sized> fmt::Debug for Filter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Filter").finish_non_exhaustive()
    }
}

impl<T: ?Sized + 'static> Filter<T> {
    /// Wraps a closure as a filter.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Filter {
            predicate: Arc::new(predicate),
        }
    }

    /// A filter that accepts every item.
    pub fn always() -> Self {
        Filter::new(|_: &T| true)
    }

    /// Tests if a single item passes this filter.
    pub fn matches(&self, item: &T) -> bool {
        (self.predicate)(item)
    }

    // ========================================================================
    // Combinators
    // ========================================================================

    /// Inverts the given filter.
    ///
    /// ```
    /// use apidump_filter::{ApiMember, Filter};
    ///
    /// let non_deprecated: Filter<ApiMember> = Filter::invert(Filter::deprecated());
    /// ```
    pub fn invert(filter: Filter<T>) -> Self {
        Filter::new(move |item: &T| !filter.matches(item))
    }

    /// Combines filters so that the result accepts an item if *any* of them
    /// does.
    ///
    /// With no filters the result accepts everything and a warning is
    /// logged.
    pub fn any<I>(filters: I) -> Self
    where
        I: IntoIterator<Item = Filter<T>>,
    {
        let filters: Vec<Filter<T>> = filters.into_iter().collect();
        if filters.is_empty() {
            tracing::warn!(
                combinator = "any",
                "no filters given; the combined filter accepts every item"
            );
            return Filter::always();
        }
        Filter::new(move |item: &T| filters.iter().any(|f| f.matches(item)))
    }

    /// Combines filters so that the result accepts an item only if *all* of
    /// them do. With no filters the result accepts everything.
    pub fn all<I>(filters: I) -> Self
    where
        I: IntoIterator<Item = Filter<T>>,
    {
        let filters: Vec<Filter<T>> = filters.into_iter().collect();
        Filter::new(move |item: &T| filters.iter().all(|f| f.matches(item)))
    }

    /// Returns a filter accepting items that pass both `self` and `other`.
    pub fn and(self, other: Filter<T>) -> Self {
        Filter::new(move |item: &T| self.matches(item) && other.matches(item))
    }

    /// Returns a filter accepting items that pass `self` or `other`.
    pub fn or(self, other: Filter<T>) -> Self {
        Filter::new(move |item: &T| self.matches(item) || other.matches(item))
    }
}

impl<T: ?Sized + 'static> Not for Filter<T> {
    type Output = Filter<T>;

    fn not(self) -> Self::Output {
        Filter::invert(self)
    }
}

// ============================================================================
// Member predicates
// ============================================================================

impl<T: Member + ?Sized + 'static> Filter<T> {
    /// Accepts members carrying every one of the given tags.
    ///
    /// ```
    /// use apidump_filter::{ApiMember, Filter};
    ///
    /// let hidden_deprecated: Filter<ApiMember> = Filter::has_tags(["Hidden", "Deprecated"]);
    /// ```
    pub fn has_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tags: Vec<String> = tags.into_iter().map(Into::into).collect();
        Filter::new(move |item: &T| match item.field(Field::Tags) {
            Value::Tags(present) => tags.iter().all(|tag| present.contains(&tag.as_str())),
            _ => false,
        })
    }

    /// Accepts members whose security satisfies `levels`.
    ///
    /// A plain string requires that level for both reading and writing.
    /// Members whose `Security` is a single string (functions, events) are
    /// checked against both axes with that string. A member side that lists
    /// several levels passes when any of them is allowed.
    ///
    /// ```
    /// use apidump_filter::{ApiMember, Filter, SecurityLevels};
    ///
    /// let scriptable: Filter<ApiMember> = Filter::has_security("None");
    /// let plugin_readable: Filter<ApiMember> =
    ///     Filter::has_security(SecurityLevels::new().read(["None", "PluginSecurity"]));
    /// ```
    pub fn has_security(levels: impl Into<SecurityLevels>) -> Self {
        let levels = levels.into();
        Filter::new(move |item: &T| match item.field(Field::Security) {
            Value::Security(security) => levels.accepts(&security),
            _ => false,
        })
    }

    /// Accepts members of the given member type, e.g. `"Property"`.
    pub fn member_type(member_type: impl Into<String>) -> Self {
        Self::str_eq(Field::MemberType, member_type.into())
    }

    /// Accepts members with exactly the given name.
    pub fn name(name: impl Into<String>) -> Self {
        Self::str_eq(Field::Name, name.into())
    }

    /// Accepts members whose name matches a regular expression.
    ///
    /// Returns an error if the pattern is invalid.
    pub fn name_matching(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)?;
        Ok(Filter::new(move |item: &T| {
            item.field(Field::Name)
                .as_str()
                .is_some_and(|name| regex.is_match(name))
        }))
    }

    /// Accepts members whose value type is `ty`.
    ///
    /// Primitive names are aliased onto the stored type names, so
    /// `Some("number")` accepts `float`, `double`, `int` and `int64`
    /// members. `None` accepts members without a value type.
    ///
    /// ```
    /// use apidump_filter::{ApiMember, Filter};
    ///
    /// let numeric: Filter<ApiMember> = Filter::value_type(Some("number"));
    /// let untyped: Filter<ApiMember> = Filter::value_type(None);
    /// ```
    pub fn value_type(ty: Option<&str>) -> Self {
        let requested = ty.map(str::to_string);
        Filter::new(move |item: &T| {
            let stored = match item.field(Field::ValueType) {
                Value::Str(s) => Some(s),
                Value::None => None,
                _ => return false,
            };
            match (requested.as_deref(), stored) {
                (Some(requested), Some(stored)) => value_type::matches(requested, stored),
                (Some(_), None) => false,
                (None, stored) => stored.map_or(true, str::is_empty),
            }
        })
    }

    /// Accepts members whose `flag` is truthy.
    ///
    /// A present flag that is not a boolean, such as `"yes"` or `0`,
    /// counts as set.
    pub fn flag(flag: Flag) -> Self {
        Filter::new(move |item: &T| item.flag(flag))
    }

    /// Accepts members whose `Deprecated` flag is set.
    pub fn deprecated() -> Self {
        Self::flag(Flag::Deprecated)
    }

    /// Accepts members whose `ReadOnly` flag is set.
    pub fn read_only() -> Self {
        Self::flag(Flag::ReadOnly)
    }

    /// Accepts members whose `Replicated` flag is set.
    pub fn replicated() -> Self {
        Self::flag(Flag::Replicated)
    }

    /// Accepts members whose `Scriptable` flag is set.
    pub fn scriptable() -> Self {
        Self::flag(Flag::Scriptable)
    }

    /// Accepts members whose `Yields` flag is set.
    pub fn yields() -> Self {
        Self::flag(Flag::Yields)
    }

    /// Accepts members whose `ThreadSafe` flag is set.
    pub fn thread_safe() -> Self {
        Self::flag(Flag::ThreadSafe)
    }

    /// Accepts members whose `Readable` flag is set.
    pub fn readable() -> Self {
        Self::flag(Flag::Readable)
    }

    /// Accepts members whose `Writable` flag is set.
    pub fn writable() -> Self {
        Self::flag(Flag::Writable)
    }

    /// Accepts members whose `Service` flag is set.
    pub fn service() -> Self {
        Self::flag(Flag::Service)
    }

    fn str_eq(field: Field, expected: String) -> Self {
        Filter::new(move |item: &T| item.field(field).as_str() == Some(expected.as_str()))
    }
}

// ============================================================================
// Execution
// ============================================================================

impl<T: 'static> Filter<T> {
    /// Filters a slice, returning references to matching items in order.
    pub fn filter<'a>(&self, items: &'a [T]) -> Vec<&'a T> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Filters and clones matching items.
    pub fn filter_cloned(&self, items: &[T]) -> Vec<T>
    where
        T: Clone,
    {
        self.filter(items).into_iter().cloned().collect()
    }

    /// Filters a vector in place, keeping only matching items.
    pub fn retain(&self, items: &mut Vec<T>) {
        items.retain(|item| self.matches(item));
    }

    /// Counts the number of matching items.
    pub fn count(&self, items: &[T]) -> usize {
        items.iter().filter(|item| self.matches(item)).count()
    }

    /// Returns `true` if any item matches.
    pub fn any_match(&self, items: &[T]) -> bool {
        items.iter().any(|item| self.matches(item))
    }

    /// Returns `true` if all items match.
    pub fn all_match(&self, items: &[T]) -> bool {
        items.iter().all(|item| self.matches(item))
    }

    /// Finds the first matching item.
    pub fn find<'a>(&self, items: &'a [T]) -> Option<&'a T> {
        items.iter().find(|item| self.matches(item))
    }

    /// Finds the first matching item and returns its index.
    pub fn position(&self, items: &[T]) -> Option<usize> {
        items.iter().position(|item| self.matches(item))
    }
}
