//! The resolved configuration handed to provisioning.

use std::path::Path;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::deployment::{
    DeploymentIdentity, DeploymentPaths, INSTANCES_DIR, INSTANCE_FQN_KEY, RELEASES_DIR,
};
use crate::roles::RoleSet;

/// Key prefixes passed through as environment variables.
pub const ENV_PREFIXES: [&str; 3] = ["ENV_", ENVSTRIP_PREFIX, "BEDROCK_"];

/// Prefix removed from the key name on output.
pub const ENVSTRIP_PREFIX: &str = "ENVSTRIP_";

/// Output name of an environment key, or `None` if `key` is not one.
///
/// # Examples
///
/// ```
/// use neuron::resolver::env_key_name;
///
/// assert_eq!(env_key_name("ENVSTRIP_JAVA_OPTS"), Some("JAVA_OPTS"));
/// assert_eq!(env_key_name("ENV_REGION"), Some("ENV_REGION"));
/// assert_eq!(env_key_name("BEDROCK_URL"), Some("BEDROCK_URL"));
/// assert_eq!(env_key_name("release_version"), None);
/// ```
#[must_use]
pub fn env_key_name(key: &str) -> Option<&str> {
    if let Some(stripped) = key.strip_prefix(ENVSTRIP_PREFIX) {
        return (!stripped.is_empty()).then_some(stripped);
    }
    ENV_PREFIXES
        .iter()
        .any(|prefix| key.starts_with(prefix))
        .then_some(key)
}

/// Everything downstream templates need for one deployment.
///
/// Serializes to a single flat mapping; see [`ResolvedConfig::to_map`].
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    /// Active or declared roles.
    pub roles: RoleSet,
    /// Identity extracted from the merged configuration.
    pub identity: DeploymentIdentity,
    /// Derived directories.
    pub paths: DeploymentPaths,
    /// Environment home the paths were derived from.
    pub env_home: String,
    /// `instance_user`, as configured.
    pub instance_user: Option<Value>,
    /// `instance_group`, as configured.
    pub instance_group: Option<Value>,
    /// `artifact_source`, as configured.
    pub artifact_source: Option<Value>,
    /// `neuron_cls_java`, as configured.
    pub neuron_cls_java: Option<Value>,
    /// `neuron_features`, as configured.
    pub neuron_features: Option<Value>,
    /// `neuron_config`, as configured.
    pub neuron_config: Option<Value>,
    /// Environment keys, after `ENVSTRIP_` removal.
    pub environment: Map<String, Value>,
    /// Remaining merged keys not starting with `_`.
    pub extra: Map<String, Value>,
}

fn path_value(path: Option<&Path>) -> Value {
    path.map_or(Value::Null, |p| Value::String(p.to_string_lossy().into_owned()))
}

impl ResolvedConfig {
    /// Build the resolved configuration from a merged mapping and the values
    /// derived from it.
    #[must_use]
    pub fn assemble(
        merged: &Map<String, Value>,
        roles: RoleSet,
        identity: DeploymentIdentity,
        paths: DeploymentPaths,
        env_home: String,
    ) -> Self {
        let passthrough = |key: &str| merged.get(key).cloned();

        let mut environment = Map::new();
        let mut extra = Map::new();
        for (key, value) in merged {
            if let Some(name) = env_key_name(key) {
                environment.insert(name.to_string(), value.clone());
            } else if !key.starts_with('_') {
                extra.insert(key.clone(), value.clone());
            }
        }

        Self {
            instance_user: passthrough("instance_user"),
            instance_group: passthrough("instance_group"),
            artifact_source: passthrough("artifact_source"),
            neuron_cls_java: passthrough("neuron_cls_java"),
            neuron_features: passthrough("neuron_features"),
            neuron_config: passthrough("neuron_config"),
            roles,
            identity,
            paths,
            env_home,
            environment,
            extra,
        }
    }

    /// The flat output mapping.
    ///
    /// Fixed keys come first, then pass-through sub-objects, then environment
    /// keys (which replace fixed keys of the same name), then every extra key
    /// not already present.
    #[must_use]
    pub fn to_map(&self) -> Map<String, Value> {
        let mut out = Map::new();
        let text = |s: &str| Value::String(s.to_string());

        let roles = self.roles.iter().map(text).collect();
        out.insert("neuron_roles".into(), Value::Array(roles));
        out.insert(
            INSTANCE_FQN_KEY.into(),
            self.identity.instance_id.as_deref().map_or(Value::Null, text),
        );
        out.insert("release_version".into(), text(&self.identity.release_version));
        out.insert(
            "instance_user".into(),
            self.instance_user.clone().unwrap_or(Value::Null),
        );
        out.insert(
            "instance_group".into(),
            self.instance_group.clone().unwrap_or(Value::Null),
        );
        out.insert(
            "neuron_deployment_type".into(),
            text(&self.identity.deployment_type),
        );
        out.insert("neuron_team".into(), text(&self.identity.team));
        out.insert("neuron_app".into(), text(&self.identity.app));

        let root = path_value(Some(self.paths.deployment_root.as_path()));
        out.insert("_neuron_deployment_root".into(), root.clone());
        out.insert(
            "_neuron_release_dir_path".into(),
            path_value(self.paths.release_dir.as_deref()),
        );
        out.insert(
            "_neuron_instance_dir".into(),
            path_value(self.paths.instance_dir.as_deref()),
        );
        out.insert("neuron_deployment_root".into(), root);
        out.insert("neuron_instance_base".into(), text(INSTANCES_DIR));
        out.insert("neuron_release_base".into(), text(RELEASES_DIR));

        let subobjects = [
            ("neuron_features", &self.neuron_features),
            ("neuron_cls_java", &self.neuron_cls_java),
            ("neuron_config", &self.neuron_config),
            ("artifact_source", &self.artifact_source),
        ];
        for (key, value) in subobjects {
            if let Some(value) = value {
                out.insert(key.into(), value.clone());
            }
        }

        for (key, value) in &self.environment {
            out.insert(key.clone(), value.clone());
        }

        for (key, value) in &self.extra {
            if !out.contains_key(key) {
                out.insert(key.clone(), value.clone());
            }
        }

        out
    }
}

impl Serialize for ResolvedConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_map().serialize(serializer)
    }
}
