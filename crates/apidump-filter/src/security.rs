//! Security requirements accepted by [`Filter::has_security`](crate::Filter::has_security).

use crate::value::SecurityValue;

/// The set of security levels accepted on one access axis.
///
/// A member passes the axis if its level equals any entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allowed {
    /// A single accepted level.
    One(String),
    /// Any of several accepted levels.
    AnyOf(Vec<String>),
}

impl Allowed {
    /// Returns `true` if `level` is accepted.
    pub fn contains(&self, level: &str) -> bool {
        match self {
            Allowed::One(allowed) => allowed == level,
            Allowed::AnyOf(allowed) => allowed.iter().any(|a| a == level),
        }
    }
}

impl From<&str> for Allowed {
    fn from(s: &str) -> Self {
        Allowed::One(s.to_string())
    }
}

impl From<String> for Allowed {
    fn from(s: String) -> Self {
        Allowed::One(s)
    }
}

impl From<Vec<String>> for Allowed {
    fn from(v: Vec<String>) -> Self {
        Allowed::AnyOf(v)
    }
}

impl From<Vec<&str>> for Allowed {
    fn from(v: Vec<&str>) -> Self {
        Allowed::AnyOf(v.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Allowed {
    fn from(v: [&str; N]) -> Self {
        Allowed::AnyOf(v.iter().map(|s| s.to_string()).collect())
    }
}

/// Read and write requirements for a security filter.
///
/// An axis left as `None` is not checked. A plain string converts into
/// levels that require it on both axes.
///
/// # Example
///
/// ```
/// use apidump_filter::SecurityLevels;
///
/// let plugin_readable = SecurityLevels::new()
///     .read(["None", "PluginSecurity"]);
/// let everywhere: SecurityLevels = "None".into();
///
/// assert!(plugin_readable.write_levels().is_none());
/// assert_eq!(everywhere, SecurityLevels::new().read("None").write("None"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecurityLevels {
    read: Option<Allowed>,
    write: Option<Allowed>,
}

impl SecurityLevels {
    /// Creates levels with neither axis checked.
    pub fn new() -> Self {
        SecurityLevels::default()
    }

    /// Requires the given level(s) for reading.
    pub fn read(mut self, allowed: impl Into<Allowed>) -> Self {
        self.read = Some(allowed.into());
        self
    }

    /// Requires the given level(s) for writing.
    pub fn write(mut self, allowed: impl Into<Allowed>) -> Self {
        self.write = Some(allowed.into());
        self
    }

    /// Returns the read requirement, if any.
    pub fn read_levels(&self) -> Option<&Allowed> {
        self.read.as_ref()
    }

    /// Returns the write requirement, if any.
    pub fn write_levels(&self) -> Option<&Allowed> {
        self.write.as_ref()
    }

    /// Returns `true` if a member with this security passes every
    /// requirement that is set.
    pub fn accepts(&self, security: &SecurityValue<'_>) -> bool {
        axis_passes(self.read.as_ref(), security.read())
            && axis_passes(self.write.as_ref(), security.write())
    }
}

// A member side listing several levels passes if any one of them is allowed.
fn axis_passes(allowed: Option<&Allowed>, actual: Option<&[&str]>) -> bool {
    match (allowed, actual) {
        (None, _) => true,
        (Some(allowed), Some(actual)) => actual.iter().any(|level| allowed.contains(level)),
        (Some(_), None) => false,
    }
}

impl From<&str> for SecurityLevels {
    fn from(s: &str) -> Self {
        SecurityLevels::new().read(s).write(s)
    }
}

impl From<String> for SecurityLevels {
    fn from(s: String) -> Self {
        SecurityLevels::new().read(s.clone()).write(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split<'a>(read: &'a str, write: &'a str) -> SecurityValue<'a> {
        SecurityValue::Split {
            read: Some(vec![read]),
            write: Some(vec![write]),
        }
    }

    #[test]
    fn allowed_contains() {
        assert!(Allowed::from("None").contains("None"));
        assert!(!Allowed::from("None").contains("none"));

        let many = Allowed::from(["None", "PluginSecurity"]);
        assert!(many.contains("PluginSecurity"));
        assert!(!many.contains("RobloxScriptSecurity"));
        assert!(!Allowed::AnyOf(Vec::new()).contains("None"));
    }

    #[test]
    fn read_only_requirement() {
        let levels = SecurityLevels::new().read("None");
        assert!(levels.accepts(&split("None", "LocalUserSecurity")));
        assert!(!levels.accepts(&split("PluginSecurity", "None")));
    }

    #[test]
    fn write_only_requirement() {
        let levels = SecurityLevels::new().write("None");
        assert!(!levels.accepts(&split("None", "LocalUserSecurity")));
        assert!(levels.accepts(&split("PluginSecurity", "None")));
    }

    #[test]
    fn both_axes_must_pass() {
        let levels = SecurityLevels::new().read("None").write(vec!["None", "PluginSecurity"]);
        assert!(levels.accepts(&split("None", "PluginSecurity")));
        assert!(!levels.accepts(&split("PluginSecurity", "PluginSecurity")));
    }

    #[test]
    fn single_string_security_checks_both_axes() {
        let levels = SecurityLevels::new().read("None").write("PluginSecurity");
        assert!(!levels.accepts(&SecurityValue::Single("None")));

        let levels = SecurityLevels::new().read(["None", "PluginSecurity"]);
        assert!(levels.accepts(&SecurityValue::Single("PluginSecurity")));
    }

    #[test]
    fn missing_side_fails_checked_axis() {
        let partial = SecurityValue::Split {
            read: Some(vec!["None"]),
            write: None,
        };
        assert!(SecurityLevels::new().read("None").accepts(&partial));
        assert!(!SecurityLevels::new().write("None").accepts(&partial));
    }

    #[test]
    fn member_level_set_passes_on_any_level() {
        let security = SecurityValue::Split {
            read: Some(vec!["None", "PluginSecurity"]),
            write: Some(vec!["None"]),
        };
        assert!(SecurityLevels::new().read("None").accepts(&security));
        assert!(SecurityLevels::new().read("PluginSecurity").accepts(&security));
        assert!(!SecurityLevels::new().read("RobloxScriptSecurity").accepts(&security));
        assert!(SecurityLevels::from("None").accepts(&security));

        let empty = SecurityValue::Split {
            read: Some(Vec::new()),
            write: None,
        };
        assert!(!SecurityLevels::new().read("None").accepts(&empty));
        assert!(SecurityLevels::new().accepts(&empty));
    }

    #[test]
    fn unchecked_levels_accept_anything() {
        assert!(SecurityLevels::new().accepts(&split("A", "B")));
        assert!(SecurityLevels::new().accepts(&SecurityValue::Single("C")));
    }

    #[test]
    fn string_applies_to_both_axes() {
        let from_str: SecurityLevels = "None".into();
        let from_string: SecurityLevels = String::from("None").into();
        let explicit = SecurityLevels::new().read("None").write("None");
        assert_eq!(from_str, explicit);
        assert_eq!(from_string, explicit);
    }
}
