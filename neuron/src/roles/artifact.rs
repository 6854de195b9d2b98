//! The `artifact` role: fetch a release artifact from a local store or Nexus.

use serde_json::{Map, Value};

use crate::resolver::ResolvedConfig;
use crate::roles::{note_release_default, require_instance, RoleRule};
use crate::validation::ValidationReport;
use crate::value::{is_present, lookup};

/// Role name.
pub const NAME: &str = "artifact";

/// Fields a local source needs, under `artifact_source.local`.
pub const LOCAL_FIELDS: [&str; 2] = ["domain", "app_name"];

/// Fields a Nexus source needs, under `artifact_source.nexus`. `version` is optional.
pub const NEXUS_FIELDS: [&str; 3] = ["url", "group_id", "artifact_id"];

/// Registry entry.
pub const RULE: RoleRule = RoleRule {
    name: NAME,
    activates,
    validate,
};

fn source_type(source: &Map<String, Value>) -> Option<&str> {
    source.get("type").and_then(Value::as_str)
}

fn has_all(source: &Map<String, Value>, section: &str, fields: &[&str]) -> bool {
    fields
        .iter()
        .all(|field| is_present(source, &[section, *field]))
}

/// Active when the configured source type has every required field.
///
/// A missing or unrecognized `artifact_source.type` activates nothing and is
/// not reported.
fn activates(config: &Map<String, Value>) -> bool {
    let Some(source) = lookup(config, &["artifact_source"]).and_then(Value::as_object) else {
        return false;
    };

    match source_type(source) {
        Some("local") => has_all(source, "local", &LOCAL_FIELDS),
        Some("nexus") => has_all(source, "nexus", &NEXUS_FIELDS),
        _ => false,
    }
}

fn validate(resolved: &ResolvedConfig, report: &mut ValidationReport) {
    let empty = Map::new();
    let source = resolved
        .artifact_source
        .as_ref()
        .and_then(Value::as_object)
        .unwrap_or(&empty);

    match source_type(source) {
        Some(kind @ ("local" | "nexus")) => {
            let fields: &[&str] = if kind == "local" {
                &LOCAL_FIELDS
            } else {
                &NEXUS_FIELDS
            };
            for field in fields {
                if !is_present(source, &[kind, *field]) {
                    report.error(format!(
                        "artifact role ({kind}) requires artifact_source.{kind}.{field}"
                    ));
                }
            }
        }
        _ => report.warn(
            "artifact role is enabled but artifact_source.type is neither 'local' nor 'nexus'",
        ),
    }

    require_instance(NAME, resolved, report);
    note_release_default(resolved, report);
}
