//! Validation of resolved configurations.
//!
//! Validation never fails fast. Every rule runs and contributes to a
//! [`ValidationReport`]; errors make the report invalid, warnings never do.

pub mod validator;

pub use validator::Validator;

use serde::{Deserialize, Serialize};

/// Accumulated validation findings.
///
/// `valid` is always equal to `errors.is_empty()`.
///
/// # Examples
///
/// ```
/// use neuron::ValidationReport;
///
/// let mut report = ValidationReport::new();
/// report.warn("release_version not set, using default 1.0.0");
/// assert!(report.valid);
///
/// report.error("cls role requires neuron_cls_java");
/// assert!(!report.valid);
/// assert_eq!(report.errors.len(), 1);
/// assert_eq!(report.warnings.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when there are no errors.
    pub valid: bool,
    /// Hard failures, in rule-evaluation order.
    pub errors: Vec<String>,
    /// Defaulted or ignored settings, in rule-evaluation order.
    pub warnings: Vec<String>,
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationReport {
    /// An empty, valid report.
    #[must_use]
    pub fn new() -> Self {
        Self {
            valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Record an error.
    pub fn error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.valid = false;
    }

    /// Record a warning. A warning identical to one already recorded is dropped.
    pub fn warn(&mut self, message: impl Into<String>) {
        let message = message.into();
        if !self.warnings.contains(&message) {
            self.warnings.push(message);
        }
    }

    /// True when no errors have been recorded.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.valid
    }

    /// Append another report's findings, in order.
    pub fn extend(&mut self, other: Self) {
        for error in other.errors {
            self.error(error);
        }
        for warning in other.warnings {
            self.warn(warning);
        }
    }
}
