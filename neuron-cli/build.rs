//! Build script for neuron-cli.
//!
//! This script generates a man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("neuron")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Resolve and validate layered deployment configuration")
        .long_about(
            "Deep-merge configuration layers, activate deployment roles, validate their \
             prerequisites and derive release and instance directories",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Output format (json, yaml, human)")
                .value_name("FORMAT")
                .global(true)
                .env("NEURON_OUTPUT_FORMAT"),
        )
        .arg(
            Arg::new("env-home")
                .long("env-home")
                .help("Environment home used for path derivation (overrides facts)")
                .value_name("PATH")
                .global(true)
                .env("NEURON_ENV_HOME"),
        )
        .subcommands(vec![
            Command::new("resolve")
                .about("Resolve layered configuration into deployment settings")
                .long_about(
                    "Fold layer files, inventory variables and extra variables, then print the \
                     resolved configuration, validation report and summary",
                ),
            Command::new("parse")
                .about("Infer roles for an inventory host and validate them")
                .long_about("Print the enabled roles, validation report and summary for one host"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("neuron.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
