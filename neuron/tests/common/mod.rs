//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the neuron library.

use std::fs;
use std::path::{Path, PathBuf};

use neuron::{ConfigLayer, ResolveRequest, Resolution, Resolver, RoleSet};
use serde_json::{json, Value};

/// Environment home used by every fixture unless overridden.
#[allow(dead_code)]
pub const HOME: &str = "/home/svc";

/// Builds a layer from a JSON mapping.
#[allow(dead_code)]
pub fn layer(name: &str, value: Value) -> ConfigLayer {
    ConfigLayer::from_value(name, value).unwrap()
}

/// Writes `contents` to `dir/name` and returns the path.
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// A complete nexus `artifact_source`.
#[allow(dead_code)]
pub fn nexus_source() -> Value {
    json!({
        "type": "nexus",
        "nexus": {
            "url": "https://nexus.example.com",
            "group_id": "com.acme",
            "artifact_id": "svc",
        }
    })
}

/// Builder for resolution scenarios with sensible defaults.
///
/// Defaults: no layers, environment home [`HOME`], inferred roles.
#[allow(dead_code)]
pub struct Scenario {
    layers: Vec<ConfigLayer>,
    home: String,
    declared: Option<RoleSet>,
}

#[allow(dead_code)]
impl Scenario {
    /// Creates a new scenario with default values.
    pub fn new() -> Self {
        Self {
            layers: Vec::new(),
            home: HOME.to_string(),
            declared: None,
        }
    }

    /// Appends a layer; later layers win.
    pub fn layer(mut self, value: Value) -> Self {
        let name = format!("layer-{}", self.layers.len());
        self.layers.push(layer(&name, value));
        self
    }

    /// Sets the environment home.
    pub fn home(mut self, home: &str) -> Self {
        self.home = home.to_string();
        self
    }

    /// Declares roles instead of inferring them.
    pub fn declare(mut self, roles: &str) -> Self {
        self.declared = Some(RoleSet::parse_list(roles));
        self
    }

    /// Builds the request.
    pub fn request(&self) -> ResolveRequest {
        let request = ResolveRequest::new()
            .with_layers(self.layers.clone())
            .with_env_home(self.home.clone());
        match &self.declared {
            Some(roles) => request.with_declared_roles(roles.clone()),
            None => request,
        }
    }

    /// Resolves with a default resolver.
    pub fn resolve(&self) -> Resolution {
        Resolver::new().resolve(&self.request())
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::new()
    }
}
