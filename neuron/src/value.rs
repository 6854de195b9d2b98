//! Helpers for reading loosely-typed configuration values.
//!
//! Configuration layers are free-form mappings, so rules ask two questions of a
//! value: is it *present* (truthy), and can it be read as text. A value is
//! absent when it is `null`, `false`, `0`, an empty string, an empty sequence
//! or an empty mapping.

use serde_json::{Map, Value};

/// Returns true unless the value is null, false, zero, or empty.
///
/// # Examples
///
/// ```
/// use neuron::value::is_truthy;
/// use serde_json::json;
///
/// assert!(is_truthy(&json!("svc")));
/// assert!(!is_truthy(&json!("")));
/// assert!(!is_truthy(&json!({})));
/// assert!(!is_truthy(&json!(null)));
/// ```
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// Reads a scalar as text. Strings are returned as-is, numbers and booleans
/// are rendered; sequences, mappings and null yield `None`.
///
/// # Examples
///
/// ```
/// use neuron::value::as_text;
/// use serde_json::json;
///
/// assert_eq!(as_text(&json!(2.5)), Some("2.5".to_string()));
/// assert_eq!(as_text(&json!(["a"])), None);
/// ```
#[must_use]
pub fn as_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Follows `path` through nested mappings starting at `root`.
///
/// Any intermediate value that is not a mapping ends the walk with `None`.
///
/// # Examples
///
/// ```
/// use neuron::value::lookup;
/// use serde_json::json;
///
/// let config = json!({"artifact_source": {"nexus": {"url": "https://n"}}});
/// let root = config.as_object().unwrap();
/// assert_eq!(lookup(root, &["artifact_source", "nexus", "url"]), Some(&json!("https://n")));
/// assert_eq!(lookup(root, &["artifact_source", "local", "domain"]), None);
/// ```
#[must_use]
pub fn lookup<'a>(root: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Value> {
    let (first, rest) = path.split_first()?;
    let mut current = root.get(*first)?;
    for segment in rest {
        current = current.as_object()?.get(*segment)?;
    }
    Some(current)
}

/// True when the value at `path` exists and is truthy.
#[must_use]
pub fn is_present(root: &Map<String, Value>, path: &[&str]) -> bool {
    lookup(root, path).is_some_and(is_truthy)
}

/// The truthy value at `path`, read as text.
#[must_use]
pub fn text_at(root: &Map<String, Value>, path: &[&str]) -> Option<String> {
    lookup(root, path)
        .filter(|v| is_truthy(v))
        .and_then(as_text)
}

/// The mapping at `path`, if the value there is a mapping.
#[must_use]
pub fn mapping_at<'a>(root: &'a Map<String, Value>, path: &[&str]) -> Option<&'a Map<String, Value>> {
    lookup(root, path).and_then(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_truthiness_table() {
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!([])));
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(7)));
        assert!(is_truthy(&json!("false")));
        assert!(is_truthy(&json!([0])));
        assert!(is_truthy(&json!({"a": null})));
    }

    #[test]
    fn test_as_text_renders_scalars() {
        assert_eq!(as_text(&json!("inst-1")), Some("inst-1".to_string()));
        assert_eq!(as_text(&json!(42)), Some("42".to_string()));
        assert_eq!(as_text(&json!(true)), Some("true".to_string()));
        assert_eq!(as_text(&json!(null)), None);
        assert_eq!(as_text(&json!({"k": "v"})), None);
    }

    #[test]
    fn test_lookup_stops_at_scalars() {
        let root = obj(json!({"artifact_source": "nexus"}));
        assert_eq!(lookup(&root, &["artifact_source", "type"]), None);
        assert_eq!(lookup(&root, &[]), None);
    }

    #[test]
    fn test_text_at_skips_empty_values() {
        let root = obj(json!({"neuron_config": {"team": "", "app": "billing"}}));
        assert_eq!(text_at(&root, &["neuron_config", "team"]), None);
        assert_eq!(
            text_at(&root, &["neuron_config", "app"]),
            Some("billing".to_string())
        );
    }

    #[test]
    fn test_is_present_and_mapping_at() {
        let root = obj(json!({"neuron_cls_java": {"main_class": "com.acme.Main"}}));
        assert!(is_present(&root, &["neuron_cls_java", "main_class"]));
        assert!(!is_present(&root, &["neuron_cls_java", "java_home"]));
        assert!(mapping_at(&root, &["neuron_cls_java"]).is_some());
        assert!(mapping_at(&root, &["neuron_cls_java", "main_class"]).is_none());
    }
}
