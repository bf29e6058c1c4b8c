//! Named rules: one expression paired with its user-facing error message.

use serde::{Deserialize, Serialize};

use crate::context::ValidationContext;
use crate::error::ExpressionError;
use crate::expression::{Expression, ExpressionSpec};
use crate::result::ValidationResult;

/// A named validation rule.
///
/// Pairs one [`Expression`] with the message template reported on failure.
/// Rules are built once at configuration-load time and held for the lifetime
/// of a [`ValidationEngine`](crate::engine::ValidationEngine); evaluation
/// never mutates them.
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    name: String,
    expression: Expression,
    error_message: String,
}

impl Rule {
    /// Create a rule around an already-validated expression.
    pub fn new(
        name: impl Into<String>,
        expression: Expression,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expression,
            error_message: error_message.into(),
        }
    }

    /// The rule's configured name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The wrapped expression.
    pub fn expression(&self) -> &Expression {
        &self.expression
    }

    /// The unrendered error message template.
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Evaluate the rule against one context.
    ///
    /// Delegates to the expression, then post-processes failures: stamps
    /// `rule_name`, and when the expression reported offending fields without
    /// locations, resolves them through the context's location map. Valid
    /// results pass through untouched.
    pub fn validate(&self, context: &ValidationContext) -> ValidationResult {
        let mut result = self.expression.validate(context, &self.error_message);
        if result.is_valid {
            return result;
        }

        result.rule_name = Some(self.name.clone());
        if result.error_locations.is_empty() && !result.error_fields.is_empty() {
            result.error_locations =
                context.locations_for(result.error_fields.iter().map(String::as_str));
        }
        result
    }
}

/// Raw rule record as written in a rule set.
///
/// ```rust
/// use gridlint_validator::{Rule, RuleSpec};
///
/// let spec: RuleSpec = serde_json::from_str(
///     r#"{
///         "name": "adult_check",
///         "expression": {"compare": {"left_field": "age", "operator": ">=", "right": 18}},
///         "error_message": "age {left_value} is below 18"
///     }"#,
/// )?;
/// let rule = Rule::try_from(spec)?;
/// assert_eq!(rule.name(), "adult_check");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleSpec {
    pub name: String,
    pub expression: ExpressionSpec,
    pub error_message: String,
}

impl TryFrom<RuleSpec> for Rule {
    type Error = ExpressionError;

    fn try_from(spec: RuleSpec) -> Result<Self, Self::Error> {
        Ok(Self {
            name: spec.name,
            expression: spec.expression.try_into()?,
            error_message: spec.error_message,
        })
    }
}
