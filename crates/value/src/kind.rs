//! Scalar kinds and orderability.
//!
//! `ScalarKind` is a lightweight classification for [`Scalar`](crate::Scalar),
//! used in diagnostics and to decide which pairs of values support ordering
//! comparisons.
//!
//! ```rust
//! use gridlint_value::{Scalar, ScalarKind};
//!
//! let v = Scalar::from(3.14);
//! assert_eq!(v.kind(), ScalarKind::Number);
//! assert!(ScalarKind::Number.is_orderable());
//! assert!(!ScalarKind::Absent.is_orderable());
//! ```

use core::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Represents the kind of a scalar field value.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarKind {
    String,
    Number,
    Bool,
    Absent,
}

impl ScalarKind {
    /// Check if values of this kind admit `<`/`>` style ordering.
    ///
    /// `Absent` never orders; an ordering comparison involving an absent
    /// value is reported as a validation failure, not an error.
    pub const fn is_orderable(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    /// Get a descriptive name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Absent => "absent",
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_are_stable() {
        assert_eq!(ScalarKind::String.name(), "string");
        assert_eq!(ScalarKind::Number.name(), "number");
        assert_eq!(ScalarKind::Bool.name(), "bool");
        assert_eq!(ScalarKind::Absent.name(), "absent");
    }

    #[test]
    fn orderability() {
        assert!(ScalarKind::String.is_orderable());
        assert!(ScalarKind::Number.is_orderable());
        assert!(ScalarKind::Bool.is_orderable());
        assert!(!ScalarKind::Absent.is_orderable());
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&ScalarKind::Number).unwrap();
        assert_eq!(json, "\"number\"");
        let kind: ScalarKind = serde_json::from_str("\"absent\"").unwrap();
        assert_eq!(kind, ScalarKind::Absent);
    }
}
