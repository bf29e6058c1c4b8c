//! # gridlint-value
//!
//! Scalar value model for the gridlint validation engine.
//!
//! Field values extracted from a tabular source are dynamically typed; this
//! crate pins them down as an explicit sum type instead of leaning on
//! `serde_json::Value`, so that comparison and coercion are total functions
//! and a type mismatch is an ordinary value, not a panic.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridlint_value::{Scalar, ScalarKind};
//!
//! let age = Scalar::from(25_i64);
//! assert_eq!(age.kind(), ScalarKind::Number);
//! assert_eq!(age, Scalar::from(25.0));       // numeric widening
//! assert_ne!(age, Scalar::from("25"));       // no cross-kind coercion
//! assert_eq!(Scalar::Absent.to_string(), "null");
//! ```

pub mod kind;
pub mod scalar;

pub use kind::ScalarKind;
pub use scalar::{Number, Scalar};
