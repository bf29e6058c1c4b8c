//! Prelude module for convenient imports.
//!
//! A single `use gridlint_validator::prelude::*;` brings in everything needed
//! to define a rule set and run it, including the scalar value types from
//! `gridlint-value`.
//!
//! # Examples
//!
//! ```rust
//! use gridlint_validator::prelude::*;
//!
//! let rule = Rule::new(
//!     "name_required",
//!     Expression::RequiredFields(RequiredFields::single("name")),
//!     "name must not be blank",
//! );
//! assert_eq!(rule.name(), "name_required");
//! ```

pub use crate::context::ValidationContext;
pub use crate::engine::{FieldSource, StaticSource, ValidationEngine};
pub use crate::error::{ExpressionError, ExtractError};
pub use crate::expression::{
    Compare, ComparisonOp, EnumMatch, Expression, ExpressionSpec, IsEmpty, Operand, RegexMatch,
    RequiredFields,
};
pub use crate::result::{Severity, ValidationResult};
pub use crate::rule::{Rule, RuleSpec};

pub use gridlint_value::{Number, Scalar, ScalarKind};
