//! Outcome record for one expression or rule evaluation.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Severity of a failed rule.
///
/// Does not affect evaluation; it only classifies the failure for downstream
/// handling (e.g. a caller may exit non-zero on `Error` but not on
/// `Warning`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Violation that must be fixed (default).
    #[default]
    Error,
    /// Violation that should be addressed but does not block.
    Warning,
}

impl Severity {
    /// Check for the default severity, used to skip it on serialization.
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning"),
        }
    }
}

/// Result of evaluating one expression or rule against a context.
///
/// A valid result carries nothing but the flag; every diagnostic field is
/// populated only on failure. `error_locations` may be shorter than
/// `error_fields` when some fields have no known source location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// Whether the check passed.
    pub is_valid: bool,
    /// Rendered error message; set only when invalid.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    /// Fields implicated in the failure, in evaluation order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_fields: Vec<String>,
    /// Source locations of the implicated fields, de-duplicated.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub error_locations: Vec<String>,
    /// Failure classification; `Error` unless a caller downgraded it.
    #[serde(default, skip_serializing_if = "Severity::is_error")]
    pub severity: Severity,
    /// Name of the rule that produced this result; stamped by
    /// [`Rule::validate`](crate::Rule::validate), never by a bare expression.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule_name: Option<String>,
}

impl ValidationResult {
    /// A passing result.
    pub fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
            error_fields: Vec::new(),
            error_locations: Vec::new(),
            severity: Severity::Error,
            rule_name: None,
        }
    }

    /// A failing result with the rendered message and no field detail yet.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message.into()),
            error_fields: Vec::new(),
            error_locations: Vec::new(),
            severity: Severity::Error,
            rule_name: None,
        }
    }

    /// Attach the implicated field names.
    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.error_fields = fields;
        self
    }

    /// Attach the resolved source locations.
    #[must_use]
    pub fn with_locations(mut self, locations: Vec<String>) -> Self {
        self.error_locations = locations;
        self
    }

    /// Override the severity classification.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Stamp the owning rule's name.
    #[must_use]
    pub fn with_rule_name(mut self, name: impl Into<String>) -> Self {
        self.rule_name = Some(name.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn valid_result_carries_no_diagnostics() {
        let result = ValidationResult::valid();
        assert!(result.is_valid);
        assert_eq!(result.error_message, None);
        assert!(result.error_fields.is_empty());
        assert!(result.error_locations.is_empty());
        assert_eq!(result.severity, Severity::Error);
        assert_eq!(result.rule_name, None);
    }

    #[test]
    fn invalid_result_defaults_to_empty_lists() {
        let result = ValidationResult::invalid("email format is wrong");
        assert!(!result.is_valid);
        assert_eq!(result.error_message.as_deref(), Some("email format is wrong"));
        assert!(result.error_fields.is_empty());
        assert!(result.error_locations.is_empty());
    }

    #[test]
    fn builders_attach_diagnostics() {
        let result = ValidationResult::invalid("bad")
            .with_fields(vec!["email".to_owned()])
            .with_locations(vec!["Sheet1!B1".to_owned()])
            .with_severity(Severity::Warning)
            .with_rule_name("email-format");

        assert_eq!(result.error_fields, vec!["email".to_owned()]);
        assert_eq!(result.error_locations, vec!["Sheet1!B1".to_owned()]);
        assert_eq!(result.severity, Severity::Warning);
        assert_eq!(result.rule_name.as_deref(), Some("email-format"));
    }

    #[test]
    fn serialization_skips_empty_diagnostics() {
        let json = serde_json::to_string(&ValidationResult::valid()).unwrap();
        assert_eq!(json, "{\"is_valid\":true}");

        let json = serde_json::to_string(
            &ValidationResult::invalid("bad").with_severity(Severity::Warning),
        )
        .unwrap();
        assert_eq!(
            json,
            "{\"is_valid\":false,\"error_message\":\"bad\",\"severity\":\"warning\"}"
        );
    }

    #[test]
    fn deserialization_fills_defaults() {
        let result: ValidationResult = serde_json::from_str("{\"is_valid\":true}").unwrap();
        assert_eq!(result, ValidationResult::valid());
    }
}
