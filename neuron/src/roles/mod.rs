//! Optional deployment roles.
//!
//! Each role is a [`RoleRule`]: a name, a predicate deciding whether the role
//! is active for a merged configuration, and a validator run when the role is
//! active or declared. Rules are independent of each other. Adding a role
//! means adding a module with a `RULE` and listing it in [`ROLE_RULES`].
//!
//! # Examples
//!
//! ```
//! use neuron::roles::RoleActivator;
//! use serde_json::json;
//!
//! let config = json!({
//!     "artifact_source": {
//!         "type": "nexus",
//!         "nexus": {"url": "https://nexus.example.com", "group_id": "com.acme", "artifact_id": "svc"}
//!     },
//!     "neuron_features": {"cls": "true"}
//! });
//! let roles = RoleActivator::activate(config.as_object().unwrap());
//! assert_eq!(roles.names(), vec!["artifact"]);
//! ```

pub mod artifact;
pub mod cls;
pub mod set;

pub use set::RoleSet;

use serde_json::{Map, Value};

use crate::deployment::DEFAULT_RELEASE_VERSION;
use crate::resolver::ResolvedConfig;
use crate::validation::ValidationReport;

/// Decides whether a role is active for a merged configuration.
pub type ActivationFn = fn(&Map<String, Value>) -> bool;

/// Appends a role's findings to a report.
pub type RoleValidationFn = fn(&ResolvedConfig, &mut ValidationReport);

/// A named role with its activation predicate and validator.
#[derive(Debug, Clone, Copy)]
pub struct RoleRule {
    /// Role name as it appears in [`RoleSet`]s.
    pub name: &'static str,
    /// Activation predicate. Sees only the merged configuration.
    pub activates: ActivationFn,
    /// Validator, run when the role is active or declared.
    pub validate: RoleValidationFn,
}

/// Registered roles in validation order.
pub const ROLE_RULES: &[RoleRule] = &[artifact::RULE, cls::RULE];

/// Look up a registered role by name.
#[must_use]
pub fn rule_for(name: &str) -> Option<&'static RoleRule> {
    ROLE_RULES.iter().find(|rule| rule.name == name)
}

/// Infers active roles from a merged configuration.
pub struct RoleActivator;

impl RoleActivator {
    /// Evaluate [`ROLE_RULES`] against `config`.
    #[must_use]
    pub fn activate(config: &Map<String, Value>) -> RoleSet {
        Self::activate_with(ROLE_RULES, config)
    }

    /// Evaluate `rules` against `config`.
    ///
    /// Each predicate sees only the configuration, never the roles activated so
    /// far, so rule order does not affect the result.
    #[must_use]
    pub fn activate_with(rules: &[RoleRule], config: &Map<String, Value>) -> RoleSet {
        let roles: RoleSet = rules
            .iter()
            .filter(|rule| (rule.activates)(config))
            .map(|rule| rule.name)
            .collect();

        log::debug!("activated roles: {roles}");
        roles
    }
}

/// Every active role needs an instance identifier.
pub(crate) fn require_instance(role: &str, resolved: &ResolvedConfig, report: &mut ValidationReport) {
    if resolved.identity.instance_id.is_none() {
        report.error(format!("{role} role requires instance_id"));
    }
}

/// A missing release version is defaulted, never fatal.
pub(crate) fn note_release_default(resolved: &ResolvedConfig, report: &mut ValidationReport) {
    if resolved.identity.release_version_defaulted {
        report.warn(format!(
            "release_version not set, using default {DEFAULT_RELEASE_VERSION}"
        ));
    }
}
