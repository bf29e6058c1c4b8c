//! Error types for rule construction and value extraction.
//!
//! Evaluation itself never errors: a failed check is an ordinary
//! [`ValidationResult`](crate::ValidationResult). The types here cover the two
//! genuinely fatal surfaces — a malformed rule definition, which must be
//! rejected while the rule set is being built, and an extraction collaborator
//! that could not produce field values at all.

use thiserror::Error;

/// A rule definition that cannot be turned into a runnable expression.
///
/// Raised at construction time only; once an [`Expression`](crate::Expression)
/// exists, evaluating it cannot fail.
#[derive(Debug, Error)]
pub enum ExpressionError {
    /// A `compare` side named neither a literal value nor a field.
    #[error("compare `{side}` side needs a literal value or a field reference")]
    MissingOperand {
        /// `"left"` or `"right"`.
        side: &'static str,
    },

    /// A `compare` side named both a literal value and a field.
    #[error("compare `{side}` side has both a literal value and a field reference; pick one")]
    ConflictingOperand {
        /// `"left"` or `"right"`.
        side: &'static str,
    },

    /// `required` / `is_empty` with an empty field list.
    #[error("`{variant}` needs at least one field name")]
    NoFields { variant: &'static str },

    /// `enum` with an empty allowed-value list.
    #[error("`enum` needs at least one allowed value")]
    NoAllowedValues,

    /// `all_of` / `any_of` with no sub-expressions.
    #[error("`{variant}` needs at least one sub-expression")]
    NoChildren { variant: &'static str },

    /// `regex_match` pattern that does not compile.
    #[error("invalid pattern for field `{field}`")]
    BadPattern {
        field: String,
        #[source]
        source: Box<regex::Error>,
    },
}

/// Failure of the extraction collaborator to produce field values.
///
/// Propagated out of [`ValidationEngine::validate`](crate::ValidationEngine::validate)
/// unchanged: without data there is no meaningful per-rule diagnosis, so this
/// is never folded into a [`ValidationResult`](crate::ValidationResult).
#[derive(Debug, Error)]
#[error("extraction from `{origin}` failed: {message}")]
pub struct ExtractError {
    origin: String,
    message: String,
    #[source]
    cause: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl ExtractError {
    /// Create an extraction error for the given source identifier.
    pub fn new(origin: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying cause (I/O error, parse error, ...).
    #[must_use]
    pub fn with_cause(mut self, cause: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// The source identifier the extraction was asked about.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expression_error_messages_name_the_problem() {
        let err = ExpressionError::MissingOperand { side: "left" };
        assert!(err.to_string().contains("left"));

        let err = ExpressionError::NoFields { variant: "required" };
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn extract_error_carries_origin_and_cause() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = ExtractError::new("data.xlsx", "workbook could not be opened").with_cause(io);

        assert_eq!(err.origin(), "data.xlsx");
        assert!(err.to_string().contains("data.xlsx"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
