//! Command to resolve layered configuration.

use crate::error::CliError;
use crate::utils::{assemble_layers, emit, load_facts, report_findings, GlobalOptions};
use clap::Args;
use neuron::{ResolveRequest, Resolver, RoleSet};
use std::path::PathBuf;

/// Resolve layered configuration into deployment settings.
#[derive(Args)]
pub struct ResolveCommand {
    /// Layer file, lowest precedence first (repeatable)
    #[arg(long = "layer", value_name = "FILE")]
    pub layers: Vec<PathBuf>,

    /// Inventory file to take group and host variables from
    #[arg(long, value_name = "FILE")]
    pub inventory: Option<PathBuf>,

    /// Inventory host (defaults to the first host)
    #[arg(long, value_name = "NAME", requires = "inventory")]
    pub host: Option<String>,

    /// Extra variable as KEY=VALUE, highest precedence (repeatable)
    #[arg(short = 'e', long = "extra-var", value_name = "KEY=VALUE")]
    pub extra_vars: Vec<String>,

    /// Declare roles (comma-separated) instead of inferring them
    #[arg(long, value_name = "ROLES")]
    pub roles: Option<String>,

    /// Host facts file providing the environment home
    #[arg(long, value_name = "FILE")]
    pub facts: Option<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let (layers, host) = assemble_layers(
            &self.layers,
            self.inventory.as_deref(),
            self.host.as_deref(),
            &self.extra_vars,
        )?;
        if let Some(host) = &host {
            logger.info(&format!("Resolving inventory host {host}"));
        }
        logger.info(&format!("Folding {} layer(s)", layers.len()));
        for layer in &layers {
            logger.debug(&format!("layer '{}': {} key(s)", layer.name(), layer.len()));
        }

        let mut request = ResolveRequest::new()
            .with_layers(layers)
            .with_facts(load_facts(global, self.facts.as_deref())?);
        if let Some(list) = &self.roles {
            request = request.with_declared_roles(RoleSet::parse_list(list));
        }

        let resolution = Resolver::new().resolve(&request);
        logger.info(&format!("Roles: {}", resolution.config.roles));
        logger.debug(&format!(
            "Path scheme: {:?} under {}",
            resolution.config.paths.scheme, resolution.config.env_home
        ));
        logger.info(&format!(
            "Deployment root: {}",
            resolution.config.paths.deployment_root.display()
        ));
        report_findings(&logger, &resolution.validation);

        let rendered = global.format.create_formatter().format_resolution(&resolution)?;
        emit(&rendered, &resolution.validation)
    }
}
