//! Output formatter implementations.

use std::path::Path;

use crate::resolver::Resolution;
use crate::validation::ValidationReport;
use crate::Result;

use super::{OutputFormatter, RoleReport};

/// Formatter for pretty-printed JSON.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        Ok(serde_json::to_string_pretty(resolution)?)
    }

    fn format_role_report(&self, report: &RoleReport) -> Result<String> {
        Ok(serde_json::to_string_pretty(report)?)
    }
}

/// Formatter for YAML.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        Ok(serde_yaml::to_string(resolution)?)
    }

    fn format_role_report(&self, report: &RoleReport) -> Result<String> {
        Ok(serde_yaml::to_string(report)?)
    }
}

/// Formatter for human-readable text.
pub struct HumanFormatter;

fn path_line(label: &str, path: Option<&Path>) -> String {
    match path {
        Some(path) => format!("{label}: {}", path.display()),
        None => format!("{label}: (not derived)"),
    }
}

fn push_findings(lines: &mut Vec<String>, report: &ValidationReport) {
    lines.push(format!(
        "Valid: {}",
        if report.valid { "yes" } else { "no" }
    ));
    for (heading, entries) in [("Errors", &report.errors), ("Warnings", &report.warnings)] {
        if !entries.is_empty() {
            lines.push(format!("{heading}:"));
            lines.extend(entries.iter().map(|entry| format!("  - {entry}")));
        }
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        let config = &resolution.config;
        let identity = &config.identity;
        let paths = &config.paths;

        let mut lines = vec![
            format!("Roles: {}", config.roles),
            format!(
                "Instance: {}",
                identity.instance_id.as_deref().unwrap_or("(none)")
            ),
            format!("Release: {}", identity.release_version),
            format!("Deployment type: {}", identity.deployment_type),
            format!("Environment home: {}", config.env_home),
            path_line("Deployment root", Some(paths.deployment_root.as_path())),
            path_line("Release dir", paths.release_dir.as_deref()),
            path_line("Instance dir", paths.instance_dir.as_deref()),
        ];
        push_findings(&mut lines, &resolution.validation);

        Ok(lines.join("\n"))
    }

    fn format_role_report(&self, report: &RoleReport) -> Result<String> {
        let mut lines = vec![format!("Enabled roles: {}", report.enabled_roles)];
        push_findings(&mut lines, &report.validation);
        Ok(lines.join("\n"))
    }
}
