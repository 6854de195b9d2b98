//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ParseCommand, ResolveCommand};
use clap::{Parser, Subcommand};
use neuron::OutputFormat;

/// Command-line tool for resolving and validating deployment configuration.
#[derive(Parser)]
#[command(name = "neuron")]
#[command(version, about = "Resolve and validate layered deployment configuration", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Output format (json, yaml, human)
    #[arg(
        long,
        value_name = "FORMAT",
        global = true,
        env = "NEURON_OUTPUT_FORMAT",
        default_value = "json"
    )]
    pub format: OutputFormat,

    /// Environment home used for path derivation (overrides facts)
    #[arg(long, value_name = "PATH", global = true, env = "NEURON_ENV_HOME")]
    pub env_home: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Resolve layered configuration into deployment settings
    Resolve(ResolveCommand),

    /// Infer roles for an inventory host and validate them
    Parse(ParseCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
