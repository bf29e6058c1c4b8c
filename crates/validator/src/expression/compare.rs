//! Two-sided value comparison.

use core::cmp::Ordering;
use core::fmt;

use gridlint_value::Scalar;
use serde::{Deserialize, Serialize};

use crate::context::ValidationContext;
use crate::result::ValidationResult;
use crate::template::TemplateVars;

/// One side of a comparison: a literal value or a field reference.
///
/// A literal `null` is a real operand (`Operand::Literal(Scalar::Absent)`),
/// which is how a rule can check that a field is unset via `== null`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Literal(Scalar),
    Field(String),
}

impl Operand {
    /// Create a field-reference operand.
    pub fn field(name: impl Into<String>) -> Self {
        Self::Field(name.into())
    }

    /// Create a literal operand.
    pub fn literal(value: impl Into<Scalar>) -> Self {
        Self::Literal(value.into())
    }

    fn resolve<'a>(&'a self, context: &'a ValidationContext) -> &'a Scalar {
        match self {
            Self::Literal(value) => value,
            Self::Field(name) => context.value(name),
        }
    }

    fn field_name(&self) -> Option<&str> {
        match self {
            Self::Literal(_) => None,
            Self::Field(name) => Some(name),
        }
    }
}

/// Comparison operator of a `compare` expression.
///
/// Serialized as the operator symbol (`"=="`, `">="`, ...), matching the
/// declarative rule format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ComparisonOp {
    #[serde(rename = "==")]
    Eq,
    #[serde(rename = "!=")]
    Ne,
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Ge,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Le,
}

impl ComparisonOp {
    /// The operator as written in rule definitions.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Gt => ">",
            Self::Ge => ">=",
            Self::Lt => "<",
            Self::Le => "<=",
        }
    }

    /// Whether the operator holds for the two resolved values.
    ///
    /// Equality is total over scalars. Ordering operators hold only when
    /// [`Scalar::try_compare`] produces an ordering; an incomparable pairing
    /// (mixed kinds, an absent side, NaN) makes every ordering operator
    /// false, which surfaces as a failed check rather than an error.
    fn holds(self, left: &Scalar, right: &Scalar) -> bool {
        match self {
            Self::Eq => left == right,
            Self::Ne => left != right,
            Self::Gt => matches!(left.try_compare(right), Some(Ordering::Greater)),
            Self::Ge => matches!(
                left.try_compare(right),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Self::Lt => matches!(left.try_compare(right), Some(Ordering::Less)),
            Self::Le => matches!(
                left.try_compare(right),
                Some(Ordering::Less | Ordering::Equal)
            ),
        }
    }
}

impl fmt::Display for ComparisonOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `compare`: relate two operands with one operator.
#[derive(Debug, Clone, PartialEq)]
pub struct Compare {
    left: Operand,
    op: ComparisonOp,
    right: Operand,
}

impl Compare {
    pub fn new(left: Operand, op: ComparisonOp, right: Operand) -> Self {
        Self { left, op, right }
    }

    pub(crate) fn validate(
        &self,
        context: &ValidationContext,
        error_message_template: &str,
    ) -> ValidationResult {
        let left = self.left.resolve(context);
        let right = self.right.resolve(context);

        if self.op.holds(left, right) {
            return ValidationResult::valid();
        }

        // Only field references are implicated; literal sides have no
        // location to point at.
        let fields: Vec<String> = [self.left.field_name(), self.right.field_name()]
            .into_iter()
            .flatten()
            .map(str::to_owned)
            .collect();
        let locations = context.locations_for(fields.iter().map(String::as_str));

        let message = TemplateVars::new()
            .with("left_field", self.left.field_name().unwrap_or(""))
            .with("left_value", left.to_string())
            .with("right_field", self.right.field_name().unwrap_or(""))
            .with("right_value", right.to_string())
            .with("operator", self.op.symbol())
            .with("field", fields.join(", "))
            .render(error_message_template);

        ValidationResult::invalid(message)
            .with_fields(fields)
            .with_locations(locations)
    }
}
