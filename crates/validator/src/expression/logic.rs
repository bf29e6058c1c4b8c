//! Boolean combinators: conjunction, disjunction, negation.
//!
//! Combinators evaluate their children with an empty message template and
//! keep only the children's field/location diagnostics; the combinator's own
//! template produces the single message for the aggregate failure. Every
//! child is always evaluated — no short-circuiting — so the aggregate names
//! all offending fields at once.

use indexmap::IndexSet;

use crate::context::ValidationContext;
use crate::result::ValidationResult;
use crate::template::TemplateVars;

use super::Expression;

pub(crate) fn validate_all_of(
    children: &[Expression],
    context: &ValidationContext,
    error_message_template: &str,
) -> ValidationResult {
    let results: Vec<ValidationResult> = children
        .iter()
        .map(|child| child.validate(context, ""))
        .collect();

    if results.iter().all(|result| result.is_valid) {
        ValidationResult::valid()
    } else {
        aggregate(results, error_message_template)
    }
}

pub(crate) fn validate_any_of(
    children: &[Expression],
    context: &ValidationContext,
    error_message_template: &str,
) -> ValidationResult {
    let results: Vec<ValidationResult> = children
        .iter()
        .map(|child| child.validate(context, ""))
        .collect();

    if results.iter().any(|result| result.is_valid) {
        ValidationResult::valid()
    } else {
        aggregate(results, error_message_template)
    }
}

pub(crate) fn validate_not(
    child: &Expression,
    context: &ValidationContext,
    error_message_template: &str,
) -> ValidationResult {
    if child.validate(context, "").is_valid {
        // The child succeeded, so there is no offending field to point at;
        // fields and locations stay deliberately empty.
        ValidationResult::invalid(TemplateVars::new().render(error_message_template))
    } else {
        ValidationResult::valid()
    }
}

/// Union of the failing children's diagnostics: fields and locations
/// de-duplicated in first-encounter order, child messages discarded.
fn aggregate(results: Vec<ValidationResult>, error_message_template: &str) -> ValidationResult {
    let mut fields: IndexSet<String> = IndexSet::new();
    let mut locations: IndexSet<String> = IndexSet::new();

    for result in results.into_iter().filter(|result| !result.is_valid) {
        fields.extend(result.error_fields);
        locations.extend(result.error_locations);
    }

    let fields: Vec<String> = fields.into_iter().collect();
    let locations: Vec<String> = locations.into_iter().collect();
    let message = TemplateVars::new()
        .with("field", fields.join(", "))
        .render(error_message_template);

    ValidationResult::invalid(message)
        .with_fields(fields)
        .with_locations(locations)
}

#[cfg(test)]
mod tests {
    use gridlint_value::Scalar;
    use indexmap::IndexMap;
    use pretty_assertions::assert_eq;

    use crate::expression::{Compare, ComparisonOp, Operand, RequiredFields};

    use super::*;

    fn context() -> ValidationContext {
        let values = IndexMap::from([
            ("age".to_owned(), Scalar::from(25_i64)),
            ("name".to_owned(), Scalar::from("Ann")),
            ("email".to_owned(), Scalar::Absent),
        ]);
        let locations = IndexMap::from([
            ("age".to_owned(), "Sheet1!B1".to_owned()),
            ("name".to_owned(), "Sheet1!A1".to_owned()),
            ("email".to_owned(), "Sheet1!C1".to_owned()),
        ]);
        ValidationContext::new(values, locations)
    }

    fn age_at_least(n: i64) -> Expression {
        Expression::Compare(Compare::new(
            Operand::field("age"),
            ComparisonOp::Ge,
            Operand::literal(n),
        ))
    }

    fn required(field: &str) -> Expression {
        Expression::RequiredFields(RequiredFields::single(field))
    }

    #[test]
    fn all_of_passes_when_every_child_passes() {
        let expr = Expression::all_of(vec![age_at_least(20), required("name")]).unwrap();
        assert!(expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn all_of_collects_only_failing_children() {
        let expr = Expression::all_of(vec![age_at_least(20), required("email")]).unwrap();
        let result = expr.validate(&context(), "profile incomplete: {field}");

        assert!(!result.is_valid);
        assert_eq!(result.error_fields, vec!["email".to_owned()]);
        assert_eq!(result.error_locations, vec!["Sheet1!C1".to_owned()]);
        assert_eq!(
            result.error_message.as_deref(),
            Some("profile incomplete: email")
        );
    }

    #[test]
    fn all_of_discards_child_messages() {
        let expr = Expression::all_of(vec![required("email")]).unwrap();
        let result = expr.validate(&context(), "outer message");
        assert_eq!(result.error_message.as_deref(), Some("outer message"));
    }

    #[test]
    fn any_of_passes_when_one_child_passes() {
        let expr = Expression::any_of(vec![required("email"), age_at_least(20)]).unwrap();
        assert!(expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn any_of_aggregates_all_children_on_total_failure() {
        let expr = Expression::any_of(vec![required("email"), age_at_least(30)]).unwrap();
        let result = expr.validate(&context(), "{field}");

        assert!(!result.is_valid);
        assert_eq!(
            result.error_fields,
            vec!["email".to_owned(), "age".to_owned()]
        );
        assert_eq!(
            result.error_locations,
            vec!["Sheet1!C1".to_owned(), "Sheet1!B1".to_owned()]
        );
        assert_eq!(result.error_message.as_deref(), Some("email, age"));
    }

    #[test]
    fn aggregation_dedupes_repeated_fields() {
        let expr = Expression::any_of(vec![age_at_least(30), age_at_least(40)]).unwrap();
        let result = expr.validate(&context(), "x");
        assert_eq!(result.error_fields, vec!["age".to_owned()]);
        assert_eq!(result.error_locations, vec!["Sheet1!B1".to_owned()]);
    }

    #[test]
    fn not_inverts_a_failing_child() {
        let expr = Expression::not(age_at_least(30));
        assert!(expr.validate(&context(), "x").is_valid);
    }

    #[test]
    fn not_failure_has_no_fields() {
        let expr = Expression::not(age_at_least(20));
        let result = expr.validate(&context(), "age must not qualify");

        assert!(!result.is_valid);
        assert!(result.error_fields.is_empty());
        assert!(result.error_locations.is_empty());
        assert_eq!(result.error_message.as_deref(), Some("age must not qualify"));
    }

    #[test]
    fn nested_combinators_evaluate_recursively() {
        // any_of(all_of(age>=30, name present), not(email present))
        let expr = Expression::any_of(vec![
            Expression::all_of(vec![age_at_least(30), required("name")]).unwrap(),
            Expression::not(required("email")),
        ])
        .unwrap();
        // email is absent, so not(required(email)) passes.
        assert!(expr.validate(&context(), "x").is_valid);
    }
}
