//! Prefix-anchored pattern matching on one field.

use regex::Regex;

use crate::context::ValidationContext;
use crate::error::ExpressionError;
use crate::result::ValidationResult;
use crate::template::TemplateVars;

/// `regex_match`: the field's value, coerced to a string, must match the
/// pattern at the start of the string.
///
/// Anchoring is prefix-only: `[0-9]+` accepts `"12ab"`. Write `...$` for a
/// full match. An absent value fails the check outright; pair with
/// `is_empty` inside `any_of` when the field is optional.
#[derive(Debug, Clone)]
pub struct RegexMatch {
    field: String,
    pattern: String,
    regex: Regex,
}

impl RegexMatch {
    /// Compile `pattern` for `field`; fails on an invalid pattern.
    pub fn new(field: impl Into<String>, pattern: impl Into<String>) -> Result<Self, ExpressionError> {
        let field = field.into();
        let pattern = pattern.into();
        // Match from the start of the haystack, like the prefix semantics of
        // the declarative format. `(?:...)` keeps alternations contained.
        let regex = Regex::new(&format!(r"\A(?:{pattern})")).map_err(|source| {
            ExpressionError::BadPattern {
                field: field.clone(),
                source: Box::new(source),
            }
        })?;
        Ok(Self {
            field,
            pattern,
            regex,
        })
    }

    /// The pattern as written in the rule definition.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub(crate) fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        let value = context.value(&self.field);

        let is_valid = !value.is_absent() && self.regex.is_match(&value.to_string());
        if is_valid {
            return ValidationResult::valid();
        }

        let message = TemplateVars::new()
            .with("field", self.field.clone())
            .with("value", value.to_string())
            .with("pattern", self.pattern.clone())
            .render(error_message_template);
        let locations = context.locations_for([self.field.as_str()]);

        ValidationResult::invalid(message)
            .with_fields(vec![self.field.clone()])
            .with_locations(locations)
    }
}

impl PartialEq for RegexMatch {
    // Compiled automata are equal iff field and source pattern are.
    fn eq(&self, other: &Self) -> bool {
        self.field == other.field && self.pattern == other.pattern
    }
}
