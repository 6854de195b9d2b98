//! Named configuration layers.

use serde_json::{Map, Value};

use crate::error::{Error, Result};

/// One named source of configuration values.
///
/// Layers are supplied to the resolver as an ordered list, lowest precedence
/// first. A layer is always a mapping; a YAML document that is empty becomes an
/// empty layer.
///
/// # Examples
///
/// ```
/// use neuron::config::ConfigLayer;
/// use serde_json::json;
///
/// let layer = ConfigLayer::from_value("host:web-1", json!({"instance_id": "inst-1"})).unwrap();
/// assert_eq!(layer.name(), "host:web-1");
/// assert_eq!(layer.get("instance_id"), Some(&json!("inst-1")));
///
/// assert!(ConfigLayer::from_value("bad", json!([1, 2])).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigLayer {
    name: String,
    values: Map<String, Value>,
}

impl ConfigLayer {
    /// Create a layer from an existing mapping.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Create a layer from an arbitrary value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayer`] if the value is neither null nor a mapping.
    pub fn from_value(name: impl Into<String>, value: Value) -> Result<Self> {
        let name = name.into();
        match value {
            Value::Null => Ok(Self::new(name, Map::new())),
            Value::Object(values) => Ok(Self::new(name, values)),
            other => Err(Error::InvalidLayer {
                layer: name,
                reason: format!("expected a mapping, found {}", describe(&other)),
            }),
        }
    }

    /// The layer's name, used in diagnostics.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The layer's values.
    #[must_use]
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Consume the layer, returning its values.
    #[must_use]
    pub fn into_values(self) -> Map<String, Value> {
        self.values
    }

    /// Look up a top-level key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// Set a top-level key, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    /// Number of top-level keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the layer holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a sequence",
        Value::Object(_) => "a mapping",
    }
}
