//! Environment-home resolution.
//!
//! Deployment paths hang off the target account's home directory. The home is
//! looked up through an ordered chain: facts gathered from the target host
//! first, then the `HOME` variable of this process, then the home directory
//! of the resolving user. Facts must win over the ambient environment because
//! the resolving process usually runs on a different machine than the one
//! being provisioned.

use std::collections::BTreeMap;
use std::env;

use serde_json::{Map, Value};

use crate::value::as_text;

/// Key under which gathered facts carry the target environment.
pub const FACTS_ENV_KEY: &str = "ansible_env";

/// Fallback used when no lookup yields a home directory.
pub const UNKNOWN_HOME: &str = "~";

/// Environment variables reported for the target host.
///
/// # Examples
///
/// ```
/// use neuron::config::EnvFacts;
/// use serde_json::json;
///
/// let facts = json!({"ansible_env": {"HOME": "/home/svc", "USER": "svc"}});
/// let facts = EnvFacts::from_map(facts.as_object().unwrap());
/// assert_eq!(facts.home(), Some("/home/svc"));
///
/// assert_eq!(EnvFacts::default().with_home("/srv").home(), Some("/srv"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFacts {
    env: BTreeMap<String, String>,
}

impl EnvFacts {
    /// Facts with no environment at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read facts from a mapping.
    ///
    /// When the mapping has an `ansible_env` sub-mapping, that is the
    /// environment; otherwise the mapping's own scalar entries are.
    #[must_use]
    pub fn from_map(facts: &Map<String, Value>) -> Self {
        let source = facts
            .get(FACTS_ENV_KEY)
            .and_then(Value::as_object)
            .unwrap_or(facts);

        let env = source
            .iter()
            .filter_map(|(key, value)| as_text(value).map(|text| (key.clone(), text)))
            .collect();

        Self { env }
    }

    /// Set the reported `HOME`.
    #[must_use]
    pub fn with_home(mut self, home: impl Into<String>) -> Self {
        self.env.insert("HOME".to_string(), home.into());
        self
    }

    /// Look up a reported variable.
    #[must_use]
    pub fn var(&self, name: &str) -> Option<&str> {
        self.env.get(name).map(String::as_str)
    }

    /// The reported `HOME`, if any.
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.var("HOME")
    }
}

/// A single step of the home lookup chain.
pub type HomeLookup = fn(&EnvFacts) -> Option<String>;

/// A named home lookup, so the winning source can be reported.
#[derive(Debug, Clone, Copy)]
pub struct HomeSource {
    /// Short label used in diagnostics.
    pub name: &'static str,
    /// The lookup itself.
    pub lookup: HomeLookup,
}

/// The resolved environment home and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvHome {
    /// The home directory.
    pub path: String,
    /// Name of the [`HomeSource`] that produced it.
    pub source: &'static str,
}

fn from_facts(facts: &EnvFacts) -> Option<String> {
    facts.home().map(str::to_string)
}

fn from_process_env(_facts: &EnvFacts) -> Option<String> {
    env::var("HOME").ok()
}

fn from_user_home(_facts: &EnvFacts) -> Option<String> {
    home::home_dir().map(|path| path.to_string_lossy().into_owned())
}

/// Default lookup order: facts, process environment, user home.
pub const DEFAULT_HOME_CHAIN: [HomeSource; 3] = [
    HomeSource {
        name: "facts",
        lookup: from_facts,
    },
    HomeSource {
        name: "environment",
        lookup: from_process_env,
    },
    HomeSource {
        name: "user",
        lookup: from_user_home,
    },
];

/// Resolve the environment home with [`DEFAULT_HOME_CHAIN`].
///
/// Falls back to [`UNKNOWN_HOME`] when every lookup comes up empty.
#[must_use]
pub fn resolve_env_home(facts: &EnvFacts) -> EnvHome {
    resolve_env_home_with(&DEFAULT_HOME_CHAIN, facts)
}

/// Resolve the environment home with a custom chain.
///
/// Lookups are tried in order; the first non-empty answer wins.
///
/// # Examples
///
/// ```
/// use neuron::config::{resolve_env_home_with, EnvFacts, HomeSource};
///
/// let chain = [
///     HomeSource { name: "none", lookup: |_| None },
///     HomeSource { name: "fixed", lookup: |_| Some("/srv/home".to_string()) },
/// ];
/// let home = resolve_env_home_with(&chain, &EnvFacts::new());
/// assert_eq!(home.path, "/srv/home");
/// assert_eq!(home.source, "fixed");
/// ```
#[must_use]
pub fn resolve_env_home_with(chain: &[HomeSource], facts: &EnvFacts) -> EnvHome {
    chain
        .iter()
        .find_map(|source| {
            (source.lookup)(facts)
                .filter(|path| !path.is_empty())
                .map(|path| EnvHome {
                    path,
                    source: source.name,
                })
        })
        .unwrap_or_else(|| EnvHome {
            path: UNKNOWN_HOME.to_string(),
            source: "fallback",
        })
}
