//! Sets of deployment role names.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A set of role names, always iterated and serialized in sorted order.
///
/// # Examples
///
/// ```
/// use neuron::RoleSet;
///
/// let roles: RoleSet = ["cls", "artifact", "cls"].into_iter().collect();
/// assert_eq!(roles.names(), vec!["artifact", "cls"]);
/// assert_eq!(serde_json::to_string(&roles).unwrap(), r#"["artifact","cls"]"#);
///
/// let parsed = RoleSet::parse_list(" cls, artifact ,,");
/// assert_eq!(parsed, roles);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoleSet {
    roles: BTreeSet<String>,
}

impl RoleSet {
    /// An empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list, ignoring blanks and surrounding space.
    #[must_use]
    pub fn parse_list(list: &str) -> Self {
        list.split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .collect()
    }

    /// Add a role. Returns false if it was already present.
    pub fn insert(&mut self, role: impl Into<String>) -> bool {
        self.roles.insert(role.into())
    }

    /// True if `role` is in the set.
    #[must_use]
    pub fn contains(&self, role: &str) -> bool {
        self.roles.contains(role)
    }

    /// Role names in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.roles.iter().map(String::as_str)
    }

    /// Role names in sorted order, collected.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.iter().collect()
    }

    /// Number of roles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.roles.len()
    }

    /// True when no role is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for RoleSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for RoleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(none)");
        }
        f.write_str(&self.names().join(", "))
    }
}
