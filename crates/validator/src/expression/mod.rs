//! The rule expression tree and its evaluation.
//!
//! An [`Expression`] is a closed tagged union: four leaf predicates that
//! inspect the context directly (`compare`, `required` / `is_empty`,
//! `regex_match`, `enum`) and three combinators that recurse (`all_of`,
//! `any_of`, `not`). Evaluation is pure and total — malformed *data* can
//! only ever produce an invalid [`ValidationResult`], while malformed rule
//! *definitions* are rejected at construction (see
//! [`ExpressionError`](crate::ExpressionError)).

mod compare;
mod fields;
mod logic;
mod membership;
mod pattern;
mod spec;

pub use compare::{Compare, ComparisonOp, Operand};
pub use fields::{IsEmpty, RequiredFields};
pub use membership::EnumMatch;
pub use pattern::RegexMatch;
pub use spec::{CompareSpec, EnumSpec, ExpressionSpec, FieldList, RegexSpec};

use crate::context::ValidationContext;
use crate::error::ExpressionError;
use crate::result::ValidationResult;

/// One node of a rule's condition tree.
///
/// Build leaves through their own constructors and combinators through
/// [`Expression::all_of`] / [`Expression::any_of`] / [`Expression::not`],
/// or convert a whole declarative record with
/// `Expression::try_from(ExpressionSpec)`.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Relate two operands (`==`, `!=`, `>`, `>=`, `<`, `<=`).
    Compare(Compare),
    /// Every listed field must have a non-blank value.
    RequiredFields(RequiredFields),
    /// Every listed field must be blank.
    IsEmpty(IsEmpty),
    /// The field's value must match a prefix-anchored pattern.
    RegexMatch(RegexMatch),
    /// The field's value must be a member of a fixed set.
    Enum(EnumMatch),
    /// All children must pass.
    AllOf(Vec<Expression>),
    /// At least one child must pass.
    AnyOf(Vec<Expression>),
    /// The child must fail.
    Not(Box<Expression>),
}

impl Expression {
    /// Conjunction over a non-empty child list.
    pub fn all_of(children: Vec<Expression>) -> Result<Self, ExpressionError> {
        if children.is_empty() {
            return Err(ExpressionError::NoChildren { variant: "all_of" });
        }
        Ok(Self::AllOf(children))
    }

    /// Disjunction over a non-empty child list.
    pub fn any_of(children: Vec<Expression>) -> Result<Self, ExpressionError> {
        if children.is_empty() {
            return Err(ExpressionError::NoChildren { variant: "any_of" });
        }
        Ok(Self::AnyOf(children))
    }

    /// Negation.
    pub fn not(child: Expression) -> Self {
        Self::Not(Box::new(child))
    }

    /// Evaluate this expression against a context.
    ///
    /// `error_message_template` is rendered with the variant's own
    /// placeholder table when the check fails; it is ignored on success.
    /// Never panics and never returns an error: every data-level problem
    /// (absent fields, mixed-kind ordering, non-membership) is an *invalid*
    /// result.
    pub fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        match self {
            Self::Compare(expr) => expr.validate(context, error_message_template),
            Self::RequiredFields(expr) => expr.validate(context, error_message_template),
            Self::IsEmpty(expr) => expr.validate(context, error_message_template),
            Self::RegexMatch(expr) => expr.validate(context, error_message_template),
            Self::Enum(expr) => expr.validate(context, error_message_template),
            Self::AllOf(children) => {
                logic::validate_all_of(children, context, error_message_template)
            }
            Self::AnyOf(children) => {
                logic::validate_any_of(children, context, error_message_template)
            }
            Self::Not(child) => logic::validate_not(child, context, error_message_template),
        }
    }
}
