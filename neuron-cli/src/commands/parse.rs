//! Command to infer and validate roles for an inventory host.

use crate::error::CliError;
use crate::utils::{assemble_layers, emit, load_facts, report_findings, GlobalOptions};
use clap::Args;
use neuron::{ResolveRequest, Resolver, RoleReport};
use std::path::PathBuf;

/// Infer roles for an inventory host and validate them.
#[derive(Args)]
pub struct ParseCommand {
    /// Inventory file
    #[arg(value_name = "INVENTORY")]
    pub inventory: PathBuf,

    /// Host to check (defaults to the first host in the inventory)
    #[arg(value_name = "HOST")]
    pub host: Option<String>,
}

impl ParseCommand {
    /// Execute the parse command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let logger = global.logger();

        let (layers, host) =
            assemble_layers(&[], Some(self.inventory.as_path()), self.host.as_deref(), &[])?;
        if let Some(host) = &host {
            logger.info(&format!("Checking inventory host {host}"));
        }

        let request = ResolveRequest::new()
            .with_layers(layers)
            .with_facts(load_facts(global, None)?);
        let resolution = Resolver::new().resolve(&request);
        report_findings(&logger, &resolution.validation);

        let report = RoleReport::from(&resolution);
        let rendered = global.format.create_formatter().format_role_report(&report)?;
        emit(&rendered, &report.validation)
    }
}
