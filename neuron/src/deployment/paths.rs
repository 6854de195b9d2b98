//! Deployment directory layout.
//!
//! Two mutually exclusive schemes exist.
//!
//! New style, when team and app are both known:
//!
//! ```text
//! <home>/<team>/<app>/<type>/releases/<version>
//! <home>/<team>/<app>/<type>/instances/<instance>
//! ```
//!
//! Legacy, otherwise. The release directory nests *inside* the instance
//! directory instead of sitting beside it:
//!
//! ```text
//! <root>/<instance_base>/<instance>/<release_base>/<version>
//! ```

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::deployment::identity::DeploymentIdentity;
use crate::value::text_at;

/// Release directory name under a new-style deployment root.
pub const RELEASES_DIR: &str = "releases";

/// Instance directory name under a new-style deployment root.
pub const INSTANCES_DIR: &str = "instances";

/// Default legacy instance base.
pub const LEGACY_INSTANCE_BASE: &str = "instances";

/// Default legacy release base (singular, nested under the instance).
pub const LEGACY_RELEASE_BASE: &str = "release";

/// Caller-supplied overrides for the legacy scheme.
///
/// Read from `neuron_deployment_root`, `neuron_instance_base` and
/// `neuron_release_base`; empty values count as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegacyLayout {
    /// Explicit deployment root. `None` means `<home>/team/app`.
    pub deployment_root: Option<PathBuf>,
    /// Directory holding instances under the root.
    pub instance_base: String,
    /// Directory holding releases under an instance.
    pub release_base: String,
}

impl Default for LegacyLayout {
    fn default() -> Self {
        Self {
            deployment_root: None,
            instance_base: LEGACY_INSTANCE_BASE.to_string(),
            release_base: LEGACY_RELEASE_BASE.to_string(),
        }
    }
}

impl LegacyLayout {
    /// Read legacy overrides from a merged configuration.
    #[must_use]
    pub fn extract(config: &Map<String, Value>) -> Self {
        let defaults = Self::default();
        Self {
            deployment_root: text_at(config, &["neuron_deployment_root"]).map(PathBuf::from),
            instance_base: text_at(config, &["neuron_instance_base"])
                .unwrap_or(defaults.instance_base),
            release_base: text_at(config, &["neuron_release_base"])
                .unwrap_or(defaults.release_base),
        }
    }
}

/// Which layout produced a set of paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathScheme {
    /// `<home>/<team>/<app>/<type>` with sibling releases and instances.
    NewStyle,
    /// Legacy root with releases nested under the instance.
    Legacy,
}

/// Derived deployment directories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeploymentPaths {
    /// The scheme that produced these paths.
    pub scheme: PathScheme,
    /// Top-level directory for this team/app/type.
    pub deployment_root: PathBuf,
    /// Directory of the configured release, when derivable.
    pub release_dir: Option<PathBuf>,
    /// Directory of the configured instance, when an instance is known.
    pub instance_dir: Option<PathBuf>,
}

/// Computes [`DeploymentPaths`] from an identity.
///
/// Derivation never fails: missing identity fields leave the dependent paths
/// unset, and validation reports the gap.
///
/// # Examples
///
/// ```
/// use neuron::deployment::{DeploymentIdentity, LegacyLayout, PathDeriver, PathScheme};
/// use serde_json::json;
/// use std::path::Path;
///
/// let config = json!({
///     "neuron_config": {"team": "acme", "app": "billing"},
///     "instance_id": "inst-1",
///     "release_version": "2.3.1",
/// });
/// let identity = DeploymentIdentity::extract(config.as_object().unwrap());
/// let paths = PathDeriver::derive(&identity, "/home/svc", &LegacyLayout::default());
///
/// assert_eq!(paths.scheme, PathScheme::NewStyle);
/// assert_eq!(paths.deployment_root, Path::new("/home/svc/acme/billing/app"));
/// assert_eq!(
///     paths.release_dir.as_deref(),
///     Some(Path::new("/home/svc/acme/billing/app/releases/2.3.1"))
/// );
/// ```
pub struct PathDeriver;

impl PathDeriver {
    /// Derive paths for `identity` under `env_home`.
    #[must_use]
    pub fn derive(
        identity: &DeploymentIdentity,
        env_home: &str,
        legacy: &LegacyLayout,
    ) -> DeploymentPaths {
        if identity.has_team_and_app() {
            Self::new_style(identity, Path::new(env_home))
        } else {
            Self::legacy(identity, Path::new(env_home), legacy)
        }
    }

    fn new_style(identity: &DeploymentIdentity, env_home: &Path) -> DeploymentPaths {
        let deployment_root = env_home
            .join(&identity.team)
            .join(&identity.app)
            .join(&identity.deployment_type);

        let release_dir = deployment_root
            .join(RELEASES_DIR)
            .join(&identity.release_version);

        let instance_dir = identity
            .instance_id
            .as_ref()
            .map(|instance| deployment_root.join(INSTANCES_DIR).join(instance));

        log::debug!("new-style deployment root {}", deployment_root.display());

        DeploymentPaths {
            scheme: PathScheme::NewStyle,
            deployment_root,
            release_dir: Some(release_dir),
            instance_dir,
        }
    }

    fn legacy(
        identity: &DeploymentIdentity,
        env_home: &Path,
        legacy: &LegacyLayout,
    ) -> DeploymentPaths {
        let deployment_root = legacy
            .deployment_root
            .clone()
            .unwrap_or_else(|| env_home.join("team").join("app"));

        let instance_dir = identity
            .instance_id
            .as_ref()
            .map(|instance| deployment_root.join(&legacy.instance_base).join(instance));

        let release_dir = instance_dir.as_ref().map(|dir| {
            dir.join(&legacy.release_base)
                .join(&identity.release_version)
        });

        log::debug!("legacy deployment root {}", deployment_root.display());

        DeploymentPaths {
            scheme: PathScheme::Legacy,
            deployment_root,
            release_dir,
            instance_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn identity(value: Value) -> DeploymentIdentity {
        DeploymentIdentity::extract(value.as_object().unwrap())
    }

    #[test]
    fn test_new_style_sibling_layout() {
        let id = identity(json!({
            "neuron_config": {"team": "acme", "app": "billing", "deployment_type": "app"},
            "release_version": "2.3.1",
            "instance_id": "inst-1",
        }));
        let paths = PathDeriver::derive(&id, "/home/svc", &LegacyLayout::default());

        assert_eq!(paths.scheme, PathScheme::NewStyle);
        assert_eq!(paths.deployment_root, PathBuf::from("/home/svc/acme/billing/app"));
        assert_eq!(
            paths.release_dir,
            Some(PathBuf::from("/home/svc/acme/billing/app/releases/2.3.1"))
        );
        assert_eq!(
            paths.instance_dir,
            Some(PathBuf::from("/home/svc/acme/billing/app/instances/inst-1"))
        );
    }

    #[test]
    fn test_new_style_without_instance() {
        let id = identity(json!({"neuron_config": {"team": "acme", "app": "billing", "deployment_type": "tools"}}));
        let paths = PathDeriver::derive(&id, "/home/svc", &LegacyLayout::default());

        assert_eq!(paths.deployment_root, PathBuf::from("/home/svc/acme/billing/tools"));
        assert_eq!(
            paths.release_dir,
            Some(PathBuf::from("/home/svc/acme/billing/tools/releases/1.0.0"))
        );
        assert_eq!(paths.instance_dir, None);
    }

    #[test]
    fn test_new_style_ignores_legacy_overrides() {
        let id = identity(json!({
            "neuron_config": {"team": "acme", "app": "billing"},
            "instance_id": "inst-1",
            "neuron_deployment_root": "/opt/legacy",
        }));
        let config = json!({"neuron_deployment_root": "/opt/legacy"});
        let legacy = LegacyLayout::extract(config.as_object().unwrap());
        let paths = PathDeriver::derive(&id, "/home/svc", &legacy);

        assert_eq!(paths.scheme, PathScheme::NewStyle);
        assert!(paths.deployment_root.starts_with("/home/svc"));
    }

    #[test]
    fn test_legacy_nested_layout() {
        let id = identity(json!({"instance_id": "inst-1", "release_version": "1.0.0"}));
        let paths = PathDeriver::derive(&id, "/home/svc", &LegacyLayout::default());

        assert_eq!(paths.scheme, PathScheme::Legacy);
        assert_eq!(paths.deployment_root, PathBuf::from("/home/svc/team/app"));
        assert_eq!(
            paths.instance_dir,
            Some(PathBuf::from("/home/svc/team/app/instances/inst-1"))
        );
        assert_eq!(
            paths.release_dir,
            Some(PathBuf::from("/home/svc/team/app/instances/inst-1/release/1.0.0"))
        );
    }

    #[test]
    fn test_legacy_without_instance_has_no_dirs() {
        let id = identity(json!({"neuron_config": {"team": "acme"}}));
        let paths = PathDeriver::derive(&id, "/home/svc", &LegacyLayout::default());

        assert_eq!(paths.scheme, PathScheme::Legacy);
        assert_eq!(paths.instance_dir, None);
        assert_eq!(paths.release_dir, None);
    }

    #[test]
    fn test_legacy_overrides() {
        let config = json!({
            "neuron_deployment_root": "/srv/deploy",
            "neuron_instance_base": "inst",
            "neuron_release_base": "rel",
            "instance_id": "i-9",
            "release_version": "3.0.0",
        });
        let map = config.as_object().unwrap();
        let id = DeploymentIdentity::extract(map);
        let paths = PathDeriver::derive(&id, "/home/svc", &LegacyLayout::extract(map));

        assert_eq!(paths.deployment_root, PathBuf::from("/srv/deploy"));
        assert_eq!(paths.instance_dir, Some(PathBuf::from("/srv/deploy/inst/i-9")));
        assert_eq!(
            paths.release_dir,
            Some(PathBuf::from("/srv/deploy/inst/i-9/rel/3.0.0"))
        );
    }

    #[test]
    fn test_empty_legacy_overrides_use_defaults() {
        let config = json!({"neuron_deployment_root": "", "neuron_release_base": null});
        let legacy = LegacyLayout::extract(config.as_object().unwrap());
        assert_eq!(legacy, LegacyLayout::default());
    }

    #[test]
    fn test_relative_home_gives_relative_root() {
        let id = identity(json!({"neuron_config": {"team": "acme", "app": "billing"}}));
        let paths = PathDeriver::derive(&id, "~", &LegacyLayout::default());
        assert!(paths.deployment_root.is_relative());
    }
}
