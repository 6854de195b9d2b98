//! Host variables from a YAML inventory.
//!
//! The inventory shape is the usual one:
//!
//! ```yaml
//! all:
//!   vars: { ... }            # group layer for every host
//!   hosts:
//!     web-1: { ... }         # host layer
//!   children:
//!     billing:
//!       vars: { ... }        # group layer for the hosts listed below
//!       hosts:
//!         web-1:
//! ```
//!
//! A host must be declared under `all.hosts`. Group `vars` apply to a host
//! when the group (or a nested child group) lists it under `hosts`.

use std::path::Path;

use serde_yaml::{Mapping, Value as YamlValue};

use crate::config::layer::ConfigLayer;
use crate::config::loader::{yaml_to_json, LayerLoader};
use crate::error::{Error, Result};

/// A parsed inventory document.
///
/// # Examples
///
/// ```
/// use neuron::config::Inventory;
///
/// let inventory = Inventory::from_str(
///     "all:\n  vars:\n    release_version: 1.4.0\n  hosts:\n    web-1:\n      instance_id: inst-1\n",
/// ).unwrap();
/// assert_eq!(inventory.host_names(), vec!["web-1".to_string()]);
///
/// let (host, layers) = inventory.layers_for(None).unwrap();
/// assert_eq!(host, "web-1");
/// assert_eq!(layers.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct Inventory {
    root: YamlValue,
}

impl Inventory {
    /// Load an inventory file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid YAML.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = LayerLoader::read(path)?;
        Self::from_str(&contents)
    }

    /// Parse an inventory document.
    ///
    /// # Errors
    ///
    /// Returns an error if the document is not valid YAML.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(contents: &str) -> Result<Self> {
        let root: YamlValue = serde_yaml::from_str(contents)?;
        Ok(Self { root })
    }

    fn all(&self) -> Option<&Mapping> {
        self.root.get("all").and_then(YamlValue::as_mapping)
    }

    fn hosts(&self) -> Option<&Mapping> {
        self.all()
            .and_then(|all| all.get("hosts"))
            .and_then(YamlValue::as_mapping)
    }

    /// Host names under `all.hosts`, in document order.
    #[must_use]
    pub fn host_names(&self) -> Vec<String> {
        self.hosts()
            .map(|hosts| hosts.keys().filter_map(key_to_string).collect())
            .unwrap_or_default()
    }

    /// Build the layers for `host`, or for the first host when `None`.
    ///
    /// Layers are returned lowest precedence first: `all.vars`, then matching
    /// child group vars in document order (parents before their children), then
    /// the host's own variables. Empty layers are omitted, except the host
    /// layer which is always present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoHosts`] when the inventory declares no hosts,
    /// [`Error::HostNotFound`] when `host` is not declared, and a conversion
    /// [`Error::InvalidLayer`] when a layer is not a usable mapping.
    pub fn layers_for(&self, host: Option<&str>) -> Result<(String, Vec<ConfigLayer>)> {
        let hosts = self.hosts().filter(|h| !h.is_empty()).ok_or(Error::NoHosts)?;

        let (name, host_vars) = match host {
            Some(wanted) => hosts
                .iter()
                .find(|(key, _)| key_to_string(key).as_deref() == Some(wanted))
                .map(|(_, vars)| (wanted.to_string(), vars))
                .ok_or_else(|| Error::HostNotFound {
                    host: wanted.to_string(),
                })?,
            None => hosts
                .iter()
                .find_map(|(key, vars)| key_to_string(key).map(|name| (name, vars)))
                .ok_or(Error::NoHosts)?,
        };

        let mut layers = Vec::new();

        if let Some(vars) = self.all().and_then(|all| all.get("vars")) {
            push_group_layer(&mut layers, "group:all", vars)?;
        }

        if let Some(children) = self
            .all()
            .and_then(|all| all.get("children"))
            .and_then(YamlValue::as_mapping)
        {
            collect_child_layers(children, &name, &mut layers)?;
        }

        let host_layer = format!("host:{name}");
        let host_value = yaml_to_json(&host_layer, host_vars)?;
        layers.push(ConfigLayer::from_value(host_layer, host_value)?);

        log::debug!("inventory host '{name}' contributes {} layer(s)", layers.len());
        Ok((name, layers))
    }
}

fn push_group_layer(layers: &mut Vec<ConfigLayer>, name: &str, vars: &YamlValue) -> Result<()> {
    let layer = ConfigLayer::from_value(name, yaml_to_json(name, vars)?)?;
    if !layer.is_empty() {
        layers.push(layer);
    }
    Ok(())
}

/// Walk child groups depth-first; a group contributes when it lists `host`.
fn collect_child_layers(children: &Mapping, host: &str, layers: &mut Vec<ConfigLayer>) -> Result<()> {
    for (group_key, group) in children {
        let Some(group_name) = key_to_string(group_key) else {
            continue;
        };

        let lists_host = group
            .get("hosts")
            .and_then(YamlValue::as_mapping)
            .is_some_and(|hosts| hosts.keys().any(|k| key_to_string(k).as_deref() == Some(host)));

        if lists_host {
            if let Some(vars) = group.get("vars") {
                push_group_layer(layers, &format!("group:{group_name}"), vars)?;
            }
        }

        if let Some(nested) = group.get("children").and_then(YamlValue::as_mapping) {
            collect_child_layers(nested, host, layers)?;
        }
    }
    Ok(())
}

fn key_to_string(key: &YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s.clone()),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
