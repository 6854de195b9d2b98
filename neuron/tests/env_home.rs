//! Environment-home resolution against the real process environment.
//!
//! These tests modify `HOME` and are marked `#[serial]`.

mod common;

use std::env;
use std::path::Path;

use neuron::config::{resolve_env_home, EnvFacts};
use neuron::{ConfigLayer, ResolveRequest, Resolver};
use serde_json::json;
use serial_test::serial;

/// RAII guard for setting and restoring an environment variable.
struct EnvGuard {
    key: &'static str,
    old_value: Option<String>,
}

impl EnvGuard {
    fn set(key: &'static str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self { key, old_value }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(value) => env::set_var(self.key, value),
            None => env::remove_var(self.key),
        }
    }
}

fn team_app() -> ConfigLayer {
    common::layer("host", json!({"neuron_config": {"team": "acme", "app": "billing"}}))
}

#[test]
#[serial]
fn test_facts_win_over_process_environment() {
    let _home = EnvGuard::set("HOME", "/home/ambient");
    let home = resolve_env_home(&EnvFacts::new().with_home("/home/facts"));
    assert_eq!(home.path, "/home/facts");
    assert_eq!(home.source, "facts");
}

#[test]
#[serial]
fn test_process_environment_used_without_facts() {
    let _home = EnvGuard::set("HOME", "/home/ambient");
    let request = ResolveRequest::new().with_layer(team_app());
    let resolution = Resolver::new().resolve(&request);
    assert_eq!(resolution.config.env_home, "/home/ambient");
    assert_eq!(
        resolution.config.paths.deployment_root,
        Path::new("/home/ambient/acme/billing/app")
    );
}

#[test]
#[serial]
fn test_facts_without_home_fall_through() {
    let _home = EnvGuard::set("HOME", "/home/ambient");
    let facts = EnvFacts::from_map(json!({"ansible_env": {"USER": "svc"}}).as_object().unwrap());
    let home = resolve_env_home(&facts);
    assert_eq!(home.path, "/home/ambient");
    assert_eq!(home.source, "environment");
}

#[test]
#[serial]
fn test_empty_process_home_is_skipped() {
    let _home = EnvGuard::set("HOME", "");
    let home = resolve_env_home(&EnvFacts::new());
    assert_ne!(home.source, "environment");
}
