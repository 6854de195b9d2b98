//! The resolution pipeline.
//!
//! A [`Resolver`] turns a [`ResolveRequest`] into a [`Resolution`] in one
//! pass: fold layers, extract the identity, resolve the environment home,
//! derive paths, activate (or accept declared) roles, assemble the resolved
//! configuration, validate, summarize. Inputs are never mutated and no state
//! survives between calls.
//!
//! # Examples
//!
//! ```
//! use neuron::{ResolveRequest, Resolver};
//! use serde_json::json;
//!
//! let request = ResolveRequest::new()
//!     .with_value_layer("group", json!({
//!         "neuron_config": {"team": "acme", "app": "billing"},
//!         "release_version": "2.3.1",
//!     }))
//!     .unwrap()
//!     .with_value_layer("host", json!({"instance_id": "inst-1"}))
//!     .unwrap()
//!     .with_env_home("/home/svc");
//!
//! let resolution = Resolver::new().resolve(&request);
//! assert!(resolution.validation.valid);
//!
//! let output = resolution.config.to_map();
//! assert_eq!(output["_neuron_instance_dir"], "/home/svc/acme/billing/app/instances/inst-1");
//! ```

pub mod resolved;
pub mod summary;

pub use resolved::{env_key_name, ResolvedConfig, ENVSTRIP_PREFIX, ENV_PREFIXES};
pub use summary::{ArtifactSummary, ClsSummary, ConfigSummary, LocalSummary, NexusSummary};

use serde::Serialize;
use serde_json::Value;

use crate::config::{resolve_env_home_with, ConfigLayer, ConfigMerger, EnvFacts, HomeSource, DEFAULT_HOME_CHAIN};
use crate::deployment::{DeploymentIdentity, LegacyLayout, PathDeriver};
use crate::error::Result;
use crate::roles::{RoleActivator, RoleSet};
use crate::validation::{ValidationReport, Validator};

/// How the role set is chosen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RoleMode {
    /// Evaluate the activation rules against the merged configuration.
    #[default]
    Infer,
    /// Use roles declared by an upstream orchestrator, without inference.
    Declared(RoleSet),
}

/// Inputs for one resolution.
#[derive(Debug, Clone, Default)]
pub struct ResolveRequest {
    layers: Vec<ConfigLayer>,
    facts: EnvFacts,
    roles: RoleMode,
}

impl ResolveRequest {
    /// An empty request: no layers, no facts, inferred roles.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a layer. Later layers take precedence.
    #[must_use]
    pub fn with_layer(mut self, layer: ConfigLayer) -> Self {
        self.layers.push(layer);
        self
    }

    /// Append several layers, in order.
    #[must_use]
    pub fn with_layers(mut self, layers: impl IntoIterator<Item = ConfigLayer>) -> Self {
        self.layers.extend(layers);
        self
    }

    /// Append a layer built from a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLayer`](crate::Error::InvalidLayer) if `value`
    /// is neither a mapping nor null.
    pub fn with_value_layer(self, name: impl Into<String>, value: Value) -> Result<Self> {
        Ok(self.with_layer(ConfigLayer::from_value(name, value)?))
    }

    /// Replace the host facts.
    #[must_use]
    pub fn with_facts(mut self, facts: EnvFacts) -> Self {
        self.facts = facts;
        self
    }

    /// Report `home` as the facts home, which takes precedence over the
    /// process environment.
    #[must_use]
    pub fn with_env_home(mut self, home: impl Into<String>) -> Self {
        self.facts = self.facts.with_home(home);
        self
    }

    /// Use `roles` instead of inferring them.
    #[must_use]
    pub fn with_declared_roles(mut self, roles: RoleSet) -> Self {
        self.roles = RoleMode::Declared(roles);
        self
    }

    /// Layers in precedence order, lowest first.
    #[must_use]
    pub fn layers(&self) -> &[ConfigLayer] {
        &self.layers
    }

    /// Host facts.
    #[must_use]
    pub fn facts(&self) -> &EnvFacts {
        &self.facts
    }

    /// Role selection mode.
    #[must_use]
    pub fn role_mode(&self) -> &RoleMode {
        &self.roles
    }
}

/// The result of one resolution: configuration, report and summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Resolution {
    /// The resolved configuration.
    pub config: ResolvedConfig,
    /// Validation findings. Always present, even when invalid.
    pub validation: ValidationReport,
    /// Digest of the resolution.
    pub summary: ConfigSummary,
}

/// Runs the resolution pipeline.
#[derive(Debug, Clone)]
pub struct Resolver {
    home_chain: Vec<HomeSource>,
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new()
    }
}

impl Resolver {
    /// A resolver using [`DEFAULT_HOME_CHAIN`].
    #[must_use]
    pub fn new() -> Self {
        Self {
            home_chain: DEFAULT_HOME_CHAIN.to_vec(),
        }
    }

    /// Replace the environment-home lookup chain.
    #[must_use]
    pub fn with_home_chain(mut self, chain: impl IntoIterator<Item = HomeSource>) -> Self {
        self.home_chain = chain.into_iter().collect();
        self
    }

    /// Resolve one request.
    #[must_use]
    pub fn resolve(&self, request: &ResolveRequest) -> Resolution {
        let merged = ConfigMerger::fold(request.layers());

        let identity = DeploymentIdentity::extract(&merged);
        log::debug!(
            "identity: team={:?} app={:?} type={:?} instance={:?} release={}",
            identity.team,
            identity.app,
            identity.deployment_type,
            identity.instance_id,
            identity.release_version
        );

        let home = resolve_env_home_with(&self.home_chain, request.facts());
        log::debug!("environment home {} (from {})", home.path, home.source);

        let paths = PathDeriver::derive(&identity, &home.path, &LegacyLayout::extract(&merged));

        let roles = match request.role_mode() {
            RoleMode::Infer => RoleActivator::activate(&merged),
            RoleMode::Declared(declared) => declared.clone(),
        };

        let summary = ConfigSummary::build(&merged, &roles, &identity);
        let config = ResolvedConfig::assemble(&merged, roles, identity, paths, home.path);
        let validation = Validator::validate(&config);

        Resolution {
            config,
            validation,
            summary,
        }
    }

    /// Resolve several independent requests.
    #[must_use]
    pub fn resolve_many(&self, requests: &[ResolveRequest]) -> Vec<Resolution> {
        requests.iter().map(|request| self.resolve(request)).collect()
    }
}

/// Resolve `request` with a default [`Resolver`].
#[must_use]
pub fn resolve(request: &ResolveRequest) -> Resolution {
    Resolver::new().resolve(request)
}
