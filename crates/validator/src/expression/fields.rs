//! Presence checks over one or more fields.

use gridlint_value::Scalar;

use crate::context::ValidationContext;
use crate::error::ExpressionError;
use crate::result::ValidationResult;
use crate::template::TemplateVars;

/// A field counts as blank when it is absent or an empty string. Zero and
/// `false` are real values.
fn is_blank(value: &Scalar) -> bool {
    value.is_absent() || value.as_str().is_some_and(str::is_empty)
}

fn failure(
    offending: Vec<String>,
    context: &ValidationContext,
    error_message_template: &str,
) -> ValidationResult {
    let locations = context.locations_for(offending.iter().map(String::as_str));
    let message = TemplateVars::new()
        .with("field", offending.join(", "))
        .render(error_message_template);
    ValidationResult::invalid(message)
        .with_fields(offending)
        .with_locations(locations)
}

/// `required`: every listed field must have a non-blank value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    fields: Vec<String>,
}

impl RequiredFields {
    /// Build from a non-empty field list.
    pub fn new(fields: Vec<String>) -> Result<Self, ExpressionError> {
        if fields.is_empty() {
            return Err(ExpressionError::NoFields {
                variant: "required",
            });
        }
        Ok(Self { fields })
    }

    /// Require a single field.
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
        }
    }

    pub(crate) fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        let offending: Vec<String> = self
            .fields
            .iter()
            .filter(|field| is_blank(context.value(field)))
            .cloned()
            .collect();

        if offending.is_empty() {
            ValidationResult::valid()
        } else {
            failure(offending, context, error_message_template)
        }
    }
}

/// `is_empty`: every listed field must be blank.
///
/// The mirror of [`RequiredFields`], used for fields that must stay unfilled
/// (e.g. a comment column that is only valid when a selection is "other").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IsEmpty {
    fields: Vec<String>,
}

impl IsEmpty {
    /// Build from a non-empty field list.
    pub fn new(fields: Vec<String>) -> Result<Self, ExpressionError> {
        if fields.is_empty() {
            return Err(ExpressionError::NoFields {
                variant: "is_empty",
            });
        }
        Ok(Self { fields })
    }

    /// Check a single field.
    pub fn single(field: impl Into<String>) -> Self {
        Self {
            fields: vec![field.into()],
        }
    }

    pub(crate) fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        let offending: Vec<String> = self
            .fields
            .iter()
            .filter(|field| !is_blank(context.value(field)))
            .cloned()
            .collect();

        if offending.is_empty() {
            ValidationResult::valid()
        } else {
            failure(offending, context, error_message_template)
        }
    }
}
