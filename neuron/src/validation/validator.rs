//! Rule evaluation over a resolved configuration.

use crate::deployment::DeploymentType;
use crate::resolver::ResolvedConfig;
use crate::roles::{require_instance, RoleRule, ROLE_RULES};
use crate::validation::ValidationReport;

/// Validates a [`ResolvedConfig`] against the registered role rules.
///
/// Evaluation order is fixed: registered roles in registry order, then roles
/// with no registered rule, then the cross-cutting deployment type and root
/// checks. Nothing short-circuits.
///
/// # Examples
///
/// ```
/// use neuron::{ResolveRequest, Resolver, Validator};
/// use serde_json::json;
///
/// let request = ResolveRequest::new()
///     .with_value_layer("host", json!({"neuron_features": {"cls": true}}))
///     .unwrap()
///     .with_env_home("/home/svc");
/// let resolution = Resolver::new().resolve(&request);
///
/// let report = Validator::validate(&resolution.config);
/// assert!(!report.valid);
/// assert_eq!(report, resolution.validation);
/// ```
pub struct Validator;

impl Validator {
    /// Validate against [`ROLE_RULES`].
    #[must_use]
    pub fn validate(resolved: &ResolvedConfig) -> ValidationReport {
        Self::validate_with(ROLE_RULES, resolved)
    }

    /// Validate against an explicit rule list.
    #[must_use]
    pub fn validate_with(rules: &[RoleRule], resolved: &ResolvedConfig) -> ValidationReport {
        let mut report = ValidationReport::new();

        for rule in rules {
            if resolved.roles.contains(rule.name) {
                (rule.validate)(resolved, &mut report);
            }
        }

        for role in resolved.roles.iter() {
            if rules.iter().all(|rule| rule.name != role) {
                report.warn(format!("no validation rules registered for role '{role}'"));
                require_instance(role, resolved, &mut report);
            }
        }

        Self::check_deployment_type(resolved, &mut report);
        Self::check_deployment_root(resolved, &mut report);

        log::debug!(
            "validation finished: {} error(s), {} warning(s)",
            report.errors.len(),
            report.warnings.len()
        );
        report
    }

    fn check_deployment_type(resolved: &ResolvedConfig, report: &mut ValidationReport) {
        if resolved.identity.kind().is_none() {
            let allowed: Vec<&str> = DeploymentType::ALL.iter().map(|t| t.as_str()).collect();
            report.error(format!(
                "neuron_config.deployment_type must be one of: {} (got: {})",
                allowed.join(", "),
                resolved.identity.deployment_type
            ));
        }
    }

    fn check_deployment_root(resolved: &ResolvedConfig, report: &mut ValidationReport) {
        let root = &resolved.paths.deployment_root;
        if !root.is_absolute() {
            report.error(format!(
                "deployment root must be an absolute path: {}",
                root.display()
            ));
        }
    }
}
