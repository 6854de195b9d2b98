//! Deployment identity extracted from the merged configuration.

use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::value::{as_text, lookup, text_at};

/// Release version used when none is configured.
pub const DEFAULT_RELEASE_VERSION: &str = "1.0.0";

/// Instance identifier key; wins over [`INSTANCE_ID_KEY`].
pub const INSTANCE_FQN_KEY: &str = "NEURON_APP_INSTANCE_FQN";

/// Legacy instance identifier key.
pub const INSTANCE_ID_KEY: &str = "instance_id";

/// The kinds of deployment a root directory can hold.
///
/// # Examples
///
/// ```
/// use neuron::deployment::DeploymentType;
///
/// assert_eq!(DeploymentType::parse("tools"), Some(DeploymentType::Tools));
/// assert_eq!(DeploymentType::parse("Tools"), None);
/// assert_eq!(DeploymentType::default().as_str(), "app");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentType {
    /// An application deployment.
    #[default]
    App,
    /// Operational tooling.
    Tools,
    /// A store of build artifacts.
    Artifacts,
}

impl DeploymentType {
    /// Every accepted deployment type, in display order.
    pub const ALL: [Self; 3] = [Self::App, Self::Tools, Self::Artifacts];

    /// The configuration spelling of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Tools => "tools",
            Self::Artifacts => "artifacts",
        }
    }

    /// Parse the exact configuration spelling. Matching is case-sensitive.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

impl fmt::Display for DeploymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who and what is being deployed.
///
/// The deployment type is kept as configured text so that an unsupported value
/// survives extraction and can be reported by validation.
///
/// # Examples
///
/// ```
/// use neuron::deployment::DeploymentIdentity;
/// use serde_json::json;
///
/// let config = json!({
///     "neuron_config": {"team": "acme", "app_name": "billing"},
///     "instance_id": "inst-1",
/// });
/// let identity = DeploymentIdentity::extract(config.as_object().unwrap());
/// assert_eq!(identity.app, "billing");
/// assert_eq!(identity.deployment_type, "app");
/// assert_eq!(identity.release_version, "1.0.0");
/// assert!(identity.release_version_defaulted);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentIdentity {
    /// Owning team (`neuron_config.team`), empty when unset.
    pub team: String,
    /// Application (`neuron_config.app`, else `neuron_config.app_name`), empty when unset.
    pub app: String,
    /// Deployment type as configured (`neuron_config.deployment_type`, default `app`).
    pub deployment_type: String,
    /// Instance identifier (`NEURON_APP_INSTANCE_FQN`, else `instance_id`).
    pub instance_id: Option<String>,
    /// Release version (`release_version`, default `1.0.0`).
    pub release_version: String,
    /// Whether `release_version` fell back to the default.
    #[serde(skip)]
    pub release_version_defaulted: bool,
}

impl DeploymentIdentity {
    /// Extract the identity from a merged configuration.
    #[must_use]
    pub fn extract(config: &Map<String, Value>) -> Self {
        let team = text_at(config, &["neuron_config", "team"]).unwrap_or_default();
        let app = text_at(config, &["neuron_config", "app"])
            .or_else(|| text_at(config, &["neuron_config", "app_name"]))
            .unwrap_or_default();

        // An explicit empty string is kept so validation can reject it
        let deployment_type = lookup(config, &["neuron_config", "deployment_type"])
            .and_then(as_text)
            .unwrap_or_else(|| DeploymentType::default().as_str().to_string());

        let instance_id = text_at(config, &[INSTANCE_FQN_KEY])
            .or_else(|| text_at(config, &[INSTANCE_ID_KEY]));

        let (release_version, release_version_defaulted) =
            match text_at(config, &["release_version"]) {
                Some(version) => (version, false),
                None => (DEFAULT_RELEASE_VERSION.to_string(), true),
            };

        Self {
            team,
            app,
            deployment_type,
            instance_id,
            release_version,
            release_version_defaulted,
        }
    }

    /// The deployment type, if it is one of the supported values.
    #[must_use]
    pub fn kind(&self) -> Option<DeploymentType> {
        DeploymentType::parse(&self.deployment_type)
    }

    /// True when both team and app are set, selecting the new-style layout.
    #[must_use]
    pub fn has_team_and_app(&self) -> bool {
        !self.team.is_empty() && !self.app.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn extract(value: Value) -> DeploymentIdentity {
        DeploymentIdentity::extract(value.as_object().unwrap())
    }

    #[test]
    fn test_defaults_on_empty_config() {
        let identity = extract(json!({}));
        assert_eq!(identity.team, "");
        assert_eq!(identity.app, "");
        assert_eq!(identity.deployment_type, "app");
        assert_eq!(identity.kind(), Some(DeploymentType::App));
        assert_eq!(identity.instance_id, None);
        assert_eq!(identity.release_version, DEFAULT_RELEASE_VERSION);
        assert!(identity.release_version_defaulted);
        assert!(!identity.has_team_and_app());
    }

    #[test]
    fn test_app_preferred_over_app_name() {
        let identity = extract(json!({"neuron_config": {"app": "a", "app_name": "b"}}));
        assert_eq!(identity.app, "a");
    }

    #[test]
    fn test_fqn_preferred_over_instance_id() {
        let identity = extract(json!({"NEURON_APP_INSTANCE_FQN": "fqn", "instance_id": "id"}));
        assert_eq!(identity.instance_id.as_deref(), Some("fqn"));

        let identity = extract(json!({"NEURON_APP_INSTANCE_FQN": "", "instance_id": "id"}));
        assert_eq!(identity.instance_id.as_deref(), Some("id"));
    }

    #[test]
    fn test_numeric_release_version_is_text() {
        let identity = extract(json!({"release_version": 2.5}));
        assert_eq!(identity.release_version, "2.5");
        assert!(!identity.release_version_defaulted);
    }

    #[test]
    fn test_unsupported_deployment_type_is_kept() {
        let identity = extract(json!({"neuron_config": {"deployment_type": "batch"}}));
        assert_eq!(identity.deployment_type, "batch");
        assert_eq!(identity.kind(), None);

        let identity = extract(json!({"neuron_config": {"deployment_type": ""}}));
        assert_eq!(identity.deployment_type, "");
        assert_eq!(identity.kind(), None);
    }

    #[test]
    fn test_null_deployment_type_defaults() {
        let identity = extract(json!({"neuron_config": {"deployment_type": null}}));
        assert_eq!(identity.kind(), Some(DeploymentType::App));
    }

    #[test]
    fn test_deployment_type_display() {
        let names: Vec<String> = DeploymentType::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, vec!["app", "tools", "artifacts"]);
    }
}
