//! Allowed-value membership check.

use gridlint_value::Scalar;

use crate::context::ValidationContext;
use crate::error::ExpressionError;
use crate::result::ValidationResult;
use crate::template::TemplateVars;

/// `enum`: the field's value must be one of a fixed set.
///
/// Pure membership under scalar equality; listing `null` explicitly admits
/// an absent field. There is no implicit blank-skip — combine with
/// `required` or `is_empty` for presence concerns.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMatch {
    field: String,
    values: Vec<Scalar>,
}

impl EnumMatch {
    /// Build from a non-empty allowed-value list.
    pub fn new(field: impl Into<String>, values: Vec<Scalar>) -> Result<Self, ExpressionError> {
        if values.is_empty() {
            return Err(ExpressionError::NoAllowedValues);
        }
        Ok(Self {
            field: field.into(),
            values,
        })
    }

    pub(crate) fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        let value = context.value(&self.field);

        if self.values.iter().any(|allowed| allowed == value) {
            return ValidationResult::valid();
        }

        let allowed_values = self
            .values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        let message = TemplateVars::new()
            .with("field", self.field.clone())
            .with("value", value.to_string())
            .with("allowed_values", allowed_values)
            .render(error_message_template);
        let locations = context.locations_for([self.field.as_str()]);

        ValidationResult::invalid(message)
            .with_fields(vec![self.field.clone()])
            .with_locations(locations)
    }
}

#[cfg(test)]
mod tests {
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use super::*;

    fn context() -> ValidationContext {
        let values = IndexMap::from([
            ("color".to_owned(), Scalar::from("赤")),
            ("status".to_owned(), Scalar::from("active")),
            ("count".to_owned(), Scalar::from(2_i64)),
        ]);
        let locations = IndexMap::from([("color".to_owned(), "Sheet1!F1".to_owned())]);
        ValidationContext::new(values, locations)
    }

    fn strings(values: &[&str]) -> Vec<Scalar> {
        values.iter().copied().map(Scalar::from).collect()
    }

    #[test]
    fn member_value_passes() {
        let expr = EnumMatch::new("color", strings(&["赤", "青", "緑"])).unwrap();
        assert!(expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn non_member_fails_with_joined_allowed_values() {
        let expr = EnumMatch::new("status", strings(&["pending", "done"])).unwrap();
        let result = expr.validate(&context(), "{field}={value}, allowed: {allowed_values}");

        assert!(!result.is_valid);
        assert_eq!(result.error_fields, vec!["status".to_owned()]);
        assert_eq!(
            result.error_message.as_deref(),
            Some("status=active, allowed: pending, done")
        );
        // No location mapped for status.
        assert!(result.error_locations.is_empty());
    }

    #[test]
    fn absent_is_a_member_only_when_null_is_listed() {
        let with_null = EnumMatch::new(
            "missing",
            vec![Scalar::from("a"), Scalar::Absent],
        )
        .unwrap();
        assert!(with_null.validate(&context(), "x").is_valid);

        let without_null = EnumMatch::new("missing", strings(&["a", "b"])).unwrap();
        assert!(!without_null.validate(&context(), "x").is_valid);
    }

    #[test]
    fn numeric_membership_widens_like_equality() {
        let expr = EnumMatch::new("count", vec![Scalar::from(1_i64), Scalar::from(2.0)]).unwrap();
        // 2 == 2.0 under scalar equality.
        assert!(expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn no_cross_kind_membership() {
        let expr = EnumMatch::new("count", strings(&["2"])).unwrap();
        assert!(!expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn empty_allowed_list_is_rejected_at_construction() {
        assert!(matches!(
            EnumMatch::new("color", Vec::new()),
            Err(ExpressionError::NoAllowedValues)
        ));
    }
}
