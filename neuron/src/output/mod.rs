//! Output formatting for resolutions.
//!
//! Two documents are rendered: the full [`Resolution`] (`config`, `validation`,
//! `summary`) and the narrower [`RoleReport`] (`enabled_roles`, `validation`,
//! `config_summary`) used by inventory checks. Each can be printed as JSON,
//! YAML, or human-readable text.

mod formatters;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::resolver::{ConfigSummary, Resolution};
use crate::roles::RoleSet;
use crate::validation::ValidationReport;
use crate::Result;

pub use formatters::{HumanFormatter, JsonFormatter, YamlFormatter};

/// Roles and findings for one host, without the resolved configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoleReport {
    /// Roles inferred for the host.
    pub enabled_roles: RoleSet,
    /// Validation findings.
    pub validation: ValidationReport,
    /// Digest of the resolution.
    pub config_summary: ConfigSummary,
}

impl From<&Resolution> for RoleReport {
    fn from(resolution: &Resolution) -> Self {
        Self {
            enabled_roles: resolution.config.roles.clone(),
            validation: resolution.validation.clone(),
            config_summary: resolution.summary.clone(),
        }
    }
}

/// Trait for rendering resolution documents.
pub trait OutputFormatter {
    /// Render a full resolution.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_resolution(&self, resolution: &Resolution) -> Result<String>;

    /// Render a role report.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format_role_report(&self, report: &RoleReport) -> Result<String>;
}

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// Human-readable text.
    Human,
}

impl OutputFormat {
    /// Every format, in display order.
    pub const ALL: [Self; 3] = [Self::Json, Self::Yaml, Self::Human];

    /// Create a formatter for this output format.
    #[must_use]
    pub fn create_formatter(self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }

    /// Name used on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Human => "human",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown output format '{s}' (expected json, yaml, or human)"))
    }
}
