#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # neuron
//!
//! A library for resolving and validating deployment configuration.
//!
//! Layered configuration sources are deep-merged, optional deployment roles
//! are activated from the merged result, each role's prerequisites are
//! validated, and the deployment, release and instance directories are
//! derived. Resolution is a pure computation: no filesystem, process or
//! network access happens past loading the input layers.
//!
//! ## Core Types
//!
//! - [`ConfigLayer`] and [`ConfigMerger`]: layered input and deep merge
//! - [`RoleSet`] and [`RoleActivator`]: role activation rules
//! - [`PathDeriver`] and [`DeploymentPaths`]: directory layout
//! - [`Validator`] and [`ValidationReport`]: accumulated errors and warnings
//! - [`Resolver`], [`ResolveRequest`] and [`Resolution`]: the pipeline
//! - [`Error`] and [`Result`]: input errors
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use neuron::{ResolveRequest, Resolver};
//! use serde_json::json;
//!
//! let request = ResolveRequest::new()
//!     .with_value_layer("host", json!({
//!         "artifact_source": {
//!             "type": "nexus",
//!             "nexus": {"url": "https://nexus.example.com", "group_id": "com.acme", "artifact_id": "svc"}
//!         },
//!         "instance_id": "inst-1",
//!         "release_version": "2.3.1",
//!     }))
//!     .unwrap()
//!     .with_env_home("/home/svc");
//!
//! let resolution = Resolver::new().resolve(&request);
//! assert_eq!(resolution.config.roles.names(), vec!["artifact"]);
//! assert!(resolution.validation.valid);
//! ```

pub mod config;
pub mod deployment;
pub mod error;
pub mod logging;
pub mod output;
pub mod resolver;
pub mod roles;
pub mod validation;
pub mod value;

// Re-export key types at crate root for convenience
pub use config::{ConfigLayer, ConfigMerger, EnvFacts, Inventory, LayerLoader};
pub use deployment::{DeploymentIdentity, DeploymentPaths, DeploymentType, PathDeriver, PathScheme};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::{OutputFormat, OutputFormatter, RoleReport};
pub use resolver::{
    resolve, ConfigSummary, ResolveRequest, Resolution, ResolvedConfig, Resolver, RoleMode,
};
pub use roles::{RoleActivator, RoleRule, RoleSet, ROLE_RULES};
pub use validation::{ValidationReport, Validator};
