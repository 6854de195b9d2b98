//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Validation failed (report still printed)
//! - Exit code 2: Argument parsing rejected by clap
//! - Exit code 5: I/O error
//! - Exit code 7: Input error (unreadable or unparsable layer, missing host)

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().arg("resolve").assert().code(0);
}

#[test]
fn test_invalid_configuration_exit_code() {
    let env = TestEnv::new();
    let layer = env.write("host.yml", "neuron_config:\n  team: a\n  app: b\n  deployment_type: batch\n");

    env.command()
        .arg("resolve")
        .arg("--layer")
        .arg(&layer)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("must be one of: app, tools, artifacts (got: batch)"))
        .stderr(predicate::str::contains("Validation failed with 1 error(s)"));
}

#[test]
fn test_relative_env_home_is_invalid() {
    let env = TestEnv::new();
    env.command_bare()
        .arg("--env-home")
        .arg("relative")
        .arg("resolve")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("deployment root must be an absolute path"));
}

#[test]
fn test_missing_layer_file() {
    let env = TestEnv::new();
    env.command()
        .arg("resolve")
        .arg("--layer")
        .arg(env.path().join("missing.yml"))
        .assert()
        .code(7)
        .stderr(predicate::str::contains("missing.yml"));
}

#[test]
fn test_malformed_layer_file() {
    let env = TestEnv::new();
    let layer = env.write("bad.yml", "key: [unclosed\n");
    env.command()
        .arg("resolve")
        .arg("--layer")
        .arg(&layer)
        .assert()
        .code(7);
}

#[test]
fn test_non_mapping_layer_file() {
    let env = TestEnv::new();
    let layer = env.write("list.yml", "- a\n- b\n");
    env.command()
        .arg("resolve")
        .arg("--layer")
        .arg(&layer)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("expected a mapping, found a sequence"));
}

#[test]
fn test_null_key_in_layer_file() {
    let env = TestEnv::new();
    let layer = env.write("host.yml", "~: 1\nrelease_version: 2.0.0\n");
    env.command()
        .arg("resolve")
        .arg("--layer")
        .arg(&layer)
        .assert()
        .code(7)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("host.yml"))
        .stderr(predicate::str::contains("key must be a string"));
}

#[test]
fn test_sequence_key_in_inventory_host() {
    let env = TestEnv::new();
    let inventory = env.write(
        "inventory.yml",
        "all:\n  hosts:\n    web-1:\n      [a, b]: 1\n",
    );
    env.command()
        .arg("resolve")
        .arg("--inventory")
        .arg(&inventory)
        .assert()
        .code(7)
        .stderr(predicate::str::contains("host:web-1"));
}

#[test]
fn test_malformed_extra_var() {
    let env = TestEnv::new();
    env.command()
        .arg("resolve")
        .arg("-e")
        .arg("no_equals_sign")
        .assert()
        .code(7)
        .stderr(predicate::str::contains("expected KEY=VALUE"));
}

#[test]
fn test_host_requires_inventory() {
    let env = TestEnv::new();
    env.command()
        .arg("resolve")
        .arg("--host")
        .arg("web-1")
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_rejected() {
    let env = TestEnv::new();
    env.command()
        .arg("--format")
        .arg("toml")
        .arg("resolve")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unknown output format"));
}

#[test]
fn test_quiet_suppresses_diagnostics() {
    let env = TestEnv::new();
    let layer = env.write("host.yml", "neuron_features:\n  cls: true\n");
    env.command()
        .arg("--quiet")
        .arg("resolve")
        .arg("--layer")
        .arg(&layer)
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
