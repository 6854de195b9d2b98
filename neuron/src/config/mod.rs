//! Layered configuration input for the resolver.
//!
//! This module provides:
//! - [`ConfigLayer`]: one named mapping of configuration values
//! - [`ConfigMerger`]: deep merge with override precedence
//! - [`LayerLoader`] and [`Inventory`]: YAML files, inventories, `KEY=VALUE` overrides
//! - [`EnvFacts`] and the environment-home lookup chain
//!
//! # Layer Precedence
//!
//! Layers are folded left to right, so later layers win. The command-line
//! front end assembles them as (lowest to highest):
//!
//! 1. Layer files (`--layer`), in the order given
//! 2. Inventory `all.vars`
//! 3. Inventory child group vars for groups listing the host
//! 4. Inventory host variables
//! 5. `KEY=VALUE` overrides (`--extra-var`)
//!
//! # Examples
//!
//! ```
//! use neuron::config::{ConfigMerger, LayerLoader};
//!
//! let defaults = LayerLoader::load_str("defaults", "release_version: 1.0.0\nneuron_features:\n  cls: false\n").unwrap();
//! let host = LayerLoader::load_str("host", "neuron_features:\n  cls: true\n").unwrap();
//!
//! let merged = ConfigMerger::fold(&[defaults, host]);
//! assert_eq!(merged["release_version"], "1.0.0");
//! assert_eq!(merged["neuron_features"]["cls"], true);
//! ```

pub mod environment;
pub mod inventory;
pub mod layer;
pub mod loader;
pub mod merger;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use environment::{
    resolve_env_home, resolve_env_home_with, EnvFacts, EnvHome, HomeLookup, HomeSource,
    DEFAULT_HOME_CHAIN,
};
pub use inventory::Inventory;
pub use layer::ConfigLayer;
pub use loader::{yaml_to_json, LayerLoader, OVERRIDES_LAYER};
pub use merger::ConfigMerger;
