//! Deep merge of configuration layers.
//!
//! Merging recurses only where *both* sides hold a mapping. In every other
//! case the overriding value replaces the base value outright: sequences are
//! not concatenated, and a mapping never merges with a scalar in either
//! direction. Callers expecting list accumulation must build the list in a
//! single layer.

use serde_json::{Map, Value};

use crate::config::layer::ConfigLayer;

/// Merges configuration values and layers according to precedence rules.
///
/// # Examples
///
/// ```
/// use neuron::config::ConfigMerger;
/// use serde_json::json;
///
/// let base = json!({"neuron_cls_java": {"main_class": "a.Main", "java_home": "/opt/jdk"}});
/// let overlay = json!({"neuron_cls_java": {"main_class": "b.Main"}});
///
/// let merged = ConfigMerger::merge(&base, &overlay);
/// assert_eq!(merged["neuron_cls_java"]["main_class"], "b.Main");
/// assert_eq!(merged["neuron_cls_java"]["java_home"], "/opt/jdk");
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge `overlay` onto `base`, producing a new value.
    ///
    /// If either side is not a mapping the result is a copy of `overlay`.
    #[must_use]
    pub fn merge(base: &Value, overlay: &Value) -> Value {
        match (base, overlay) {
            (Value::Object(base), Value::Object(overlay)) => {
                Value::Object(Self::merge_maps(base, overlay))
            }
            (_, overlay) => overlay.clone(),
        }
    }

    /// Merge two mappings, producing a new mapping.
    #[must_use]
    pub fn merge_maps(base: &Map<String, Value>, overlay: &Map<String, Value>) -> Map<String, Value> {
        let mut result = base.clone();
        Self::merge_into(&mut result, overlay);
        result
    }

    /// Merge `source` into `target` in place (source wins).
    ///
    /// # Merging Rules
    ///
    /// - Key only in target: kept untouched
    /// - Key in both, both mappings: merged recursively
    /// - Anything else: source value replaces target value
    pub fn merge_into(target: &mut Map<String, Value>, source: &Map<String, Value>) {
        for (key, value) in source {
            match (target.get_mut(key), value) {
                (Some(Value::Object(existing)), Value::Object(incoming)) => {
                    Self::merge_into(existing, incoming);
                }
                _ => {
                    target.insert(key.clone(), value.clone());
                }
            }
        }
    }

    /// Fold layers left to right, lowest precedence first.
    ///
    /// The input layers are not modified.
    #[must_use]
    pub fn fold(layers: &[ConfigLayer]) -> Map<String, Value> {
        let mut result = Map::new();

        for layer in layers {
            log::debug!("merging layer '{}' ({} keys)", layer.name(), layer.len());
            Self::merge_into(&mut result, layer.values());
        }

        result
    }
}
