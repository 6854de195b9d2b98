//! Compact digest of a resolution, per active role.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::deployment::DeploymentIdentity;
use crate::roles::{artifact, cls, RoleSet};
use crate::value::{lookup, mapping_at};

/// What was resolved, at a glance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigSummary {
    /// Active roles, sorted.
    pub roles: RoleSet,
    /// Instance identifier, if any.
    pub instance_id: Option<String>,
    /// Release version, possibly defaulted.
    pub release_version: String,
    /// Artifact source digest, when the `artifact` role is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub artifact: Option<ArtifactSummary>,
    /// Java process digest, when the `cls` role is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cls: Option<ClsSummary>,
}

/// Digest of `artifact_source`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArtifactSummary {
    /// `artifact_source.type` as configured.
    #[serde(rename = "type")]
    pub kind: Value,
    /// Local source fields, for `type: local`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<LocalSummary>,
    /// Nexus coordinates, for `type: nexus`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nexus: Option<NexusSummary>,
}

/// `artifact_source.local` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LocalSummary {
    /// Owning domain.
    pub domain: Value,
    /// Application name in the store.
    pub app_name: Value,
}

/// `artifact_source.nexus` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NexusSummary {
    /// Repository URL.
    pub url: Value,
    /// Maven group.
    pub group_id: Value,
    /// Maven artifact.
    pub artifact_id: Value,
    /// Pinned version, if any.
    pub version: Value,
}

/// `neuron_cls_java` fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClsSummary {
    /// Entry point class.
    pub main_class: Value,
    /// JDK location, if configured.
    pub java_home: Value,
}

fn field(section: Option<&Map<String, Value>>, key: &str) -> Value {
    section
        .and_then(|s| s.get(key))
        .cloned()
        .unwrap_or(Value::Null)
}

impl ConfigSummary {
    /// Summarize a merged configuration for the given roles.
    #[must_use]
    pub fn build(
        merged: &Map<String, Value>,
        roles: &RoleSet,
        identity: &DeploymentIdentity,
    ) -> Self {
        let artifact = roles
            .contains(artifact::NAME)
            .then(|| ArtifactSummary::build(merged));

        let cls = roles.contains(cls::NAME).then(|| {
            let cls_java = mapping_at(merged, &["neuron_cls_java"]);
            ClsSummary {
                main_class: field(cls_java, "main_class"),
                java_home: field(cls_java, "java_home"),
            }
        });

        Self {
            roles: roles.clone(),
            instance_id: identity.instance_id.clone(),
            release_version: identity.release_version.clone(),
            artifact,
            cls,
        }
    }
}

impl ArtifactSummary {
    fn build(merged: &Map<String, Value>) -> Self {
        let kind = lookup(merged, &["artifact_source", "type"])
            .cloned()
            .unwrap_or(Value::Null);

        let mut summary = Self {
            kind,
            local: None,
            nexus: None,
        };

        match summary.kind.as_str() {
            Some("local") => {
                let local = mapping_at(merged, &["artifact_source", "local"]);
                summary.local = Some(LocalSummary {
                    domain: field(local, "domain"),
                    app_name: field(local, "app_name"),
                });
            }
            Some("nexus") => {
                let nexus = mapping_at(merged, &["artifact_source", "nexus"]);
                summary.nexus = Some(NexusSummary {
                    url: field(nexus, "url"),
                    group_id: field(nexus, "group_id"),
                    artifact_id: field(nexus, "artifact_id"),
                    version: field(nexus, "version"),
                });
            }
            _ => {}
        }

        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(value: Value, roles: &str) -> ConfigSummary {
        let merged = value.as_object().cloned().unwrap();
        let identity = DeploymentIdentity::extract(&merged);
        ConfigSummary::build(&merged, &RoleSet::parse_list(roles), &identity)
    }

    #[test]
    fn test_no_roles_has_no_digests() {
        let summary = build(json!({"instance_id": "i-1"}), "");
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            json!({"roles": [], "instance_id": "i-1", "release_version": "1.0.0"})
        );
    }

    #[test]
    fn test_nexus_digest_keeps_missing_fields_as_null() {
        let summary = build(
            json!({"artifact_source": {"type": "nexus", "nexus": {"url": "https://n", "group_id": "g", "artifact_id": "a"}}}),
            "artifact",
        );
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["artifact"]["type"], "nexus");
        assert_eq!(json["artifact"]["nexus"]["url"], "https://n");
        assert_eq!(json["artifact"]["nexus"]["version"], Value::Null);
        assert!(json["artifact"].get("local").is_none());
    }

    #[test]
    fn test_cls_digest() {
        let summary = build(
            json!({"neuron_cls_java": {"main_class": "com.acme.Main"}, "release_version": "3.1"}),
            "cls",
        );
        let cls = summary.cls.unwrap();
        assert_eq!(cls.main_class, json!("com.acme.Main"));
        assert_eq!(cls.java_home, Value::Null);
        assert_eq!(summary.release_version, "3.1");
    }
}
