//! Loading configuration layers from files and command-line overrides.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::config::layer::ConfigLayer;
use crate::error::{Error, Result};

/// Name given to the layer built from `KEY=VALUE` overrides.
pub const OVERRIDES_LAYER: &str = "extra-vars";

/// Loads configuration layers from YAML sources.
///
/// # Examples
///
/// ```
/// use neuron::config::LayerLoader;
///
/// let layer = LayerLoader::load_str("defaults", "release_version: 1.2.0\n").unwrap();
/// assert_eq!(layer.get("release_version").unwrap(), "1.2.0");
/// ```
pub struct LayerLoader;

impl LayerLoader {
    /// Load and parse a YAML layer file. The layer is named after the path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the YAML is invalid, or
    /// the document is not a mapping with string-representable keys.
    pub fn load_file(path: &Path) -> Result<ConfigLayer> {
        let contents = Self::read(path)?;
        Self::load_str(path.display().to_string(), &contents)
    }

    /// Parse a YAML layer from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the YAML is invalid or the document is not a mapping
    /// with string-representable keys.
    pub fn load_str(name: impl Into<String>, contents: &str) -> Result<ConfigLayer> {
        let name = name.into();
        let document: serde_yaml::Value = serde_yaml::from_str(contents)?;
        let value = yaml_to_json(&name, &document)?;
        ConfigLayer::from_value(name, value)
    }

    /// Build the highest-precedence layer from `KEY=VALUE` overrides.
    ///
    /// Later overrides of the same key replace earlier ones.
    ///
    /// # Errors
    ///
    /// Returns an error if any override is malformed.
    ///
    /// # Examples
    ///
    /// ```
    /// use neuron::config::LayerLoader;
    /// use serde_json::json;
    ///
    /// let layer = LayerLoader::overrides(&["instance_id=inst-9", "neuron_features={cls: true}"]).unwrap();
    /// assert_eq!(layer.get("instance_id"), Some(&json!("inst-9")));
    /// assert_eq!(layer.get("neuron_features"), Some(&json!({"cls": true})));
    /// ```
    pub fn overrides<S: AsRef<str>>(raw: &[S]) -> Result<ConfigLayer> {
        let mut layer = ConfigLayer::new(OVERRIDES_LAYER, serde_json::Map::new());
        for entry in raw {
            let (key, value) = Self::parse_override(entry.as_ref())?;
            layer.insert(key, value);
        }
        Ok(layer)
    }

    /// Parse one `KEY=VALUE` override.
    ///
    /// The value is read as YAML, so `2` is a number, `{a: 1}` a mapping and
    /// `2.0.1` a string. An empty value is the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidOverride`] when `=` is missing, the key is blank,
    /// or the value is not valid YAML.
    pub fn parse_override(raw: &str) -> Result<(String, Value)> {
        let (key, value) = raw.split_once('=').ok_or_else(|| Error::InvalidOverride {
            raw: raw.to_string(),
            reason: "expected KEY=VALUE".to_string(),
        })?;

        let key = key.trim();
        if key.is_empty() {
            return Err(Error::InvalidOverride {
                raw: raw.to_string(),
                reason: "key cannot be empty".to_string(),
            });
        }

        if value.is_empty() {
            return Ok((key.to_string(), Value::String(String::new())));
        }

        let parsed: serde_yaml::Value =
            serde_yaml::from_str(value).map_err(|e| Error::InvalidOverride {
                raw: raw.to_string(),
                reason: format!("invalid value: {e}"),
            })?;

        let value = serde_json::to_value(&parsed).map_err(|e| Error::InvalidOverride {
            raw: raw.to_string(),
            reason: format!("invalid value: {e}"),
        })?;
        Ok((key.to_string(), value))
    }

    pub(crate) fn read(path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })
    }
}

/// Convert a YAML value into the JSON value model used by the resolver.
///
/// Non-string mapping keys (numbers, booleans) are rendered as strings.
///
/// # Errors
///
/// Returns [`Error::InvalidLayer`] naming `layer` if a mapping key cannot be
/// represented as a string (null, sequence or mapping keys).
pub fn yaml_to_json(layer: &str, value: &serde_yaml::Value) -> Result<Value> {
    serde_json::to_value(value).map_err(|e| Error::InvalidLayer {
        layer: layer.to_string(),
        reason: e.to_string(),
    })
}
