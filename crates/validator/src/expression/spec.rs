//! Declarative expression records.
//!
//! The configuration layer hands the engine key-tagged records: exactly one
//! of `compare`, `required`, `is_empty`, `regex_match`, `enum`, `all_of`,
//! `any_of`, `not` selects the variant. [`ExpressionSpec`] is the serde image
//! of that format; `TryFrom` turns it into a validated [`Expression`],
//! compiling patterns and enforcing the structural rules the wire format
//! cannot express (one operand form per side, non-empty lists).
//!
//! An unknown tag is a deserialization error, not a silently-passing rule:
//!
//! ```rust
//! use gridlint_validator::ExpressionSpec;
//!
//! let err = serde_json::from_str::<ExpressionSpec>(r#"{"requried": "name"}"#);
//! assert!(err.unwrap_err().to_string().contains("unknown variant"));
//! ```

use gridlint_value::Scalar;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ExpressionError;

use super::{
    Compare, ComparisonOp, EnumMatch, Expression, IsEmpty, Operand, RegexMatch, RequiredFields,
};

/// Raw, not-yet-validated expression record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpressionSpec {
    Compare(CompareSpec),
    Required(FieldList),
    IsEmpty(FieldList),
    RegexMatch(RegexSpec),
    Enum(EnumSpec),
    AllOf(Vec<ExpressionSpec>),
    AnyOf(Vec<ExpressionSpec>),
    Not(Box<ExpressionSpec>),
}

/// One field name or a list of field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldList {
    One(String),
    Many(Vec<String>),
}

impl FieldList {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(field) => vec![field],
            Self::Many(fields) => fields,
        }
    }
}

/// Raw `compare` parameters.
///
/// Each side is either a literal (`left` / `right`) or a field reference
/// (`left_field` / `right_field`). A present-but-`null` literal key is kept
/// distinct from a missing key: `"right": null` is a real operand that
/// compares equal to an absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompareSpec {
    #[serde(
        default,
        deserialize_with = "literal_operand",
        skip_serializing_if = "Option::is_none"
    )]
    pub left: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub left_field: Option<String>,
    pub operator: ComparisonOp,
    #[serde(
        default,
        deserialize_with = "literal_operand",
        skip_serializing_if = "Option::is_none"
    )]
    pub right: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub right_field: Option<String>,
}

/// Raw `regex_match` parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegexSpec {
    pub field: String,
    pub pattern: String,
}

/// Raw `enum` parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EnumSpec {
    pub field: String,
    pub values: Vec<Scalar>,
}

/// Deserialize a literal operand so that an explicit `null` survives as
/// `Some(Scalar::Absent)` instead of collapsing into "key not given".
fn literal_operand<'de, D>(deserializer: D) -> Result<Option<Scalar>, D::Error>
where
    D: Deserializer<'de>,
{
    Scalar::deserialize(deserializer).map(Some)
}

impl TryFrom<ExpressionSpec> for Expression {
    type Error = ExpressionError;

    fn try_from(spec: ExpressionSpec) -> Result<Self, Self::Error> {
        match spec {
            ExpressionSpec::Compare(compare) => Ok(Self::Compare(compare.try_into()?)),
            ExpressionSpec::Required(fields) => {
                Ok(Self::RequiredFields(RequiredFields::new(fields.into_vec())?))
            }
            ExpressionSpec::IsEmpty(fields) => Ok(Self::IsEmpty(IsEmpty::new(fields.into_vec())?)),
            ExpressionSpec::RegexMatch(regex) => {
                Ok(Self::RegexMatch(RegexMatch::new(regex.field, regex.pattern)?))
            }
            ExpressionSpec::Enum(spec) => Ok(Self::Enum(EnumMatch::new(spec.field, spec.values)?)),
            ExpressionSpec::AllOf(children) => Expression::all_of(convert_children(children)?),
            ExpressionSpec::AnyOf(children) => Expression::any_of(convert_children(children)?),
            ExpressionSpec::Not(child) => Ok(Expression::not((*child).try_into()?)),
        }
    }
}

impl TryFrom<CompareSpec> for Compare {
    type Error = ExpressionError;

    fn try_from(spec: CompareSpec) -> Result<Self, Self::Error> {
        let left = operand("left", spec.left, spec.left_field)?;
        let right = operand("right", spec.right, spec.right_field)?;
        Ok(Compare::new(left, spec.operator, right))
    }
}

fn operand(
    side: &'static str,
    literal: Option<Scalar>,
    field: Option<String>,
) -> Result<Operand, ExpressionError> {
    match (literal, field) {
        (Some(_), Some(_)) => Err(ExpressionError::ConflictingOperand { side }),
        (Some(value), None) => Ok(Operand::Literal(value)),
        (None, Some(field)) => Ok(Operand::Field(field)),
        (None, None) => Err(ExpressionError::MissingOperand { side }),
    }
}

fn convert_children(children: Vec<ExpressionSpec>) -> Result<Vec<Expression>, ExpressionError> {
    children.into_iter().map(Expression::try_from).collect()
}
