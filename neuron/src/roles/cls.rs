//! The `cls` role: a managed Java process with start/stop/restart lifecycle.

use serde_json::{Map, Value};

use crate::resolver::ResolvedConfig;
use crate::roles::{note_release_default, require_instance, RoleRule};
use crate::validation::ValidationReport;
use crate::value::{is_present, is_truthy, lookup};

/// Role name.
pub const NAME: &str = "cls";

/// Registry entry.
pub const RULE: RoleRule = RoleRule {
    name: NAME,
    activates,
    validate,
};

/// Active only when `neuron_features.cls` is the boolean `true`.
fn activates(config: &Map<String, Value>) -> bool {
    matches!(lookup(config, &["neuron_features", "cls"]), Some(Value::Bool(true)))
}

fn validate(resolved: &ResolvedConfig, report: &mut ValidationReport) {
    match resolved.neuron_cls_java.as_ref().filter(|v| is_truthy(v)) {
        None => report.error("cls role requires neuron_cls_java"),
        Some(cls_java) => {
            let empty = Map::new();
            let cls_java = cls_java.as_object().unwrap_or(&empty);

            if !is_present(cls_java, &["main_class"]) {
                report.error("cls role requires neuron_cls_java.main_class");
            }
            if !is_present(cls_java, &["java_home"]) {
                report.warn("neuron_cls_java.java_home not set, using default");
            }
        }
    }

    require_instance(NAME, resolved, report);
    note_release_default(resolved, report);
}
