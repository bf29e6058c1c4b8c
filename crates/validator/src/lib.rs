//! # gridlint-validator
//!
//! A rule engine for validating field values extracted from spreadsheet-like
//! sources.
//!
//! A rule set is an ordered list of named rules. Each rule wraps one
//! [`Expression`] — a comparison, a required/empty-field check, a regex or
//! enum membership test, or an `all_of`/`any_of`/`not` combination of those —
//! plus an error message template. The [`ValidationEngine`] fetches field
//! values through a [`FieldSource`](engine::FieldSource), evaluates every
//! rule against them, and returns the failures, each pointing back at the
//! offending fields and their cell locations.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlint_validator::prelude::*;
//! use indexmap::IndexMap;
//!
//! // Rules are written declaratively and validated while loading.
//! let specs: Vec<RuleSpec> = serde_json::from_str(
//!     r#"[
//!         {
//!             "name": "adult_check",
//!             "expression": {"compare": {"left_field": "age", "operator": ">=", "right": 20}},
//!             "error_message": "age {left_value} is below the minimum"
//!         },
//!         {
//!             "name": "email_format",
//!             "expression": {"regex_match": {"field": "email", "pattern": "[\\w.-]+@[\\w.-]+"}},
//!             "error_message": "{field} is not an email address: {value}"
//!         }
//!     ]"#,
//! )?;
//! let engine = ValidationEngine::from_specs(specs)?;
//!
//! // Field values normally come from a spreadsheet extractor; an in-memory
//! // source stands in for it here.
//! let source = StaticSource::new(IndexMap::from([
//!     ("age".to_owned(), Scalar::from(25_i64)),
//!     ("email".to_owned(), Scalar::from("invalid-email")),
//! ]));
//! let locations = IndexMap::from([
//!     ("age".to_owned(), "Sheet1!B2".to_owned()),
//!     ("email".to_owned(), "Sheet1!C2".to_owned()),
//! ]);
//!
//! let failures = engine.validate(&source, "data.xlsx", &locations)?;
//!
//! assert_eq!(failures.len(), 1);
//! assert_eq!(failures[0].rule_name.as_deref(), Some("email_format"));
//! assert_eq!(failures[0].error_fields, vec!["email"]);
//! assert_eq!(failures[0].error_locations, vec!["Sheet1!C2"]);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Design notes
//!
//! - Malformed rule definitions fail at load time with an
//!   [`ExpressionError`]; evaluation itself never errors on data. Bad data
//!   produces invalid [`ValidationResult`]s, and only a failing extraction
//!   aborts a run (with an [`ExtractError`]).
//! - Every rule is evaluated on every run. There is no short-circuiting
//!   across rules, so a single call reports the complete set of violations.
//! - Everything is immutable after construction; one engine can serve any
//!   number of concurrent `validate` calls.

pub mod context;
pub mod engine;
pub mod error;
pub mod expression;
pub mod prelude;
pub mod result;
pub mod rule;

mod template;

pub use context::ValidationContext;
pub use engine::{FieldSource, StaticSource, ValidationEngine};
pub use error::{ExpressionError, ExtractError};
pub use expression::{
    Compare, CompareSpec, ComparisonOp, EnumMatch, EnumSpec, Expression, ExpressionSpec, FieldList,
    IsEmpty, Operand, RegexMatch, RegexSpec, RequiredFields,
};
pub use result::{Severity, ValidationResult};
pub use rule::{Rule, RuleSpec};
