//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including layer assembly, host facts, finding reports and output.

use crate::error::CliError;
use neuron::config::{ConfigLayer, EnvFacts, Inventory, LayerLoader};
use neuron::{init_logger, Logger, OutputFormat, ValidationReport};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Output format for the printed document.
    pub format: OutputFormat,

    /// Environment home override.
    pub env_home: Option<String>,
}

impl GlobalOptions {
    /// A stderr logger for these options.
    pub fn logger(&self) -> Logger {
        init_logger(self.verbose, self.quiet)
    }
}

/// Assemble layers in precedence order: layer files, inventory layers for
/// `host`, then `KEY=VALUE` overrides.
///
/// Returns the layers and the inventory host they were built for, if any.
pub fn assemble_layers(
    layer_files: &[PathBuf],
    inventory: Option<&Path>,
    host: Option<&str>,
    overrides: &[String],
) -> Result<(Vec<ConfigLayer>, Option<String>), CliError> {
    if host.is_some() && inventory.is_none() {
        return Err(CliError::InvalidArguments(
            "--host requires --inventory".to_string(),
        ));
    }

    let mut layers = layer_files
        .iter()
        .map(|path| LayerLoader::load_file(path))
        .collect::<Result<Vec<_>, _>>()?;

    let mut selected = None;
    if let Some(path) = inventory {
        let (name, host_layers) = Inventory::load(path)?.layers_for(host)?;
        layers.extend(host_layers);
        selected = Some(name);
    }

    if !overrides.is_empty() {
        layers.push(LayerLoader::overrides(overrides)?);
    }

    Ok((layers, selected))
}

/// Build host facts from an optional facts file and the global home override.
///
/// `--env-home` wins over a home reported by the facts file.
pub fn load_facts(global: &GlobalOptions, facts_file: Option<&Path>) -> Result<EnvFacts, CliError> {
    let facts = match facts_file {
        Some(path) => EnvFacts::from_map(LayerLoader::load_file(path)?.values()),
        None => EnvFacts::new(),
    };

    Ok(match &global.env_home {
        Some(home) => facts.with_home(home.clone()),
        None => facts,
    })
}

/// Echo validation findings to stderr.
pub fn report_findings(logger: &Logger, report: &ValidationReport) {
    for warning in &report.warnings {
        logger.warn(warning);
    }
    for error in &report.errors {
        logger.error(error);
    }
}

/// Print a rendered document, then fail if the report is invalid.
pub fn emit(rendered: &str, report: &ValidationReport) -> Result<(), CliError> {
    println!("{rendered}");

    if report.valid {
        Ok(())
    } else {
        Err(CliError::ValidationFailed {
            errors: report.errors.len(),
        })
    }
}
