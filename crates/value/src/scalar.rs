//! Dynamically-typed scalar field values.
//!
//! A [`Scalar`] is one extracted cell value: a string, a number, a boolean,
//! or nothing at all. The engine never mutates scalars; it only compares and
//! renders them, so this module carries the whole comparison algebra:
//!
//! - **Equality** is total. Any two scalars can be checked with `==`; values
//!   of different kinds are simply unequal, integers and floats compare
//!   numerically, and `Absent == Absent` holds (an explicit `null` literal is
//!   the same thing as a missing field).
//! - **Ordering** is partial. [`Scalar::try_compare`] succeeds only within a
//!   single kind; everything else returns `None` and is reported by callers
//!   as a failed comparison, never a panic.
//!
//! ```rust
//! use gridlint_value::Scalar;
//!
//! assert_eq!(Scalar::from(25_i64), Scalar::from(25.0));
//! assert_ne!(Scalar::from("25"), Scalar::from(25_i64));
//! assert!(Scalar::from("b").try_compare(&Scalar::from("a")).is_some());
//! assert!(Scalar::from("b").try_compare(&Scalar::from(1_i64)).is_none());
//! ```

use core::cmp::Ordering;
use core::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::kind::ScalarKind;

// ==================== Number ====================

/// Numeric payload of a [`Scalar`].
///
/// Integers and floats are distinct representations of one logical kind:
/// they compare numerically against each other (`Int(25) == Float(25.0)`)
/// but keep their own display form (`25` vs `25.5`).
#[derive(Copy, Clone, Debug)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit floating point
    Float(f64),
}

impl Number {
    /// Widen to `f64` for mixed-representation comparisons.
    #[inline]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(f) => f,
        }
    }

    /// Check if this number is finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(f) => f.is_finite(),
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(a), Self::Float(b)) | (Self::Float(b), Self::Int(a)) => (*a as f64) == *b,
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(b)),
            _ => self.as_f64().partial_cmp(&other.as_f64()),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(fl) => {
                if fl.is_finite() {
                    write!(f, "{fl}")
                } else if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_sign_positive() {
                    write!(f, "Infinity")
                } else {
                    write!(f, "-Infinity")
                }
            }
        }
    }
}

// ==================== Scalar ====================

/// One extracted field value.
///
/// `Absent` stands in both for a field missing from the extraction result
/// and for an explicit `null` in a rule literal; the two are deliberately
/// indistinguishable at evaluation time.
#[derive(Clone, Debug)]
pub enum Scalar {
    String(String),
    Number(Number),
    Bool(bool),
    Absent,
}

impl Scalar {
    // ==================== Constructors ====================

    /// Create a string scalar.
    #[inline]
    pub fn string(value: impl Into<String>) -> Self {
        Self::String(value.into())
    }

    /// Create an integer scalar.
    #[inline]
    pub fn int(value: i64) -> Self {
        Self::Number(Number::Int(value))
    }

    /// Create a floating-point scalar.
    #[inline]
    pub fn float(value: f64) -> Self {
        Self::Number(Number::Float(value))
    }

    // ==================== Type queries ====================

    /// Get the kind of this scalar.
    pub const fn kind(&self) -> ScalarKind {
        match self {
            Self::String(_) => ScalarKind::String,
            Self::Number(_) => ScalarKind::Number,
            Self::Bool(_) => ScalarKind::Bool,
            Self::Absent => ScalarKind::Absent,
        }
    }

    /// Check if this scalar is absent.
    #[inline]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Borrow the string payload, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    // ==================== Comparison ====================

    /// Ordering comparison, defined only within one kind.
    ///
    /// Numbers order numerically (with integer/float widening), strings
    /// lexicographically by code point, booleans as `false < true`. Every
    /// cross-kind pairing, any pairing involving `Absent`, and any pairing
    /// involving NaN returns `None`.
    ///
    /// This is an inherent method rather than a `PartialOrd` impl: equality
    /// holds for two `Absent` values while ordering between them must not,
    /// and `PartialOrd` is not allowed to disagree with `PartialEq` that way.
    pub fn try_compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::String(a), Self::String(b)) => Some(a.cmp(b)),
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b),
            (Self::Bool(a), Self::Bool(b)) => Some(a.cmp(b)),
            _ => None,
        }
    }
}

impl PartialEq for Scalar {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Absent, Self::Absent) => true,
            _ => false,
        }
    }
}

impl fmt::Display for Scalar {
    /// Render the coerced string form used by pattern matching and message
    /// templates: strings verbatim (no quotes), numbers in their shortest
    /// decimal form, booleans as `true`/`false`, absent values as `null`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Absent => f.write_str("null"),
        }
    }
}

impl Default for Scalar {
    fn default() -> Self {
        Self::Absent
    }
}

// ==================== From implementations ====================

impl From<Number> for Scalar {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Self::int(v)
    }
}

impl From<i32> for Scalar {
    fn from(v: i32) -> Self {
        Self::int(i64::from(v))
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Self::float(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl<T> From<Option<T>> for Scalar
where
    T: Into<Scalar>,
{
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Absent, Into::into)
    }
}

// ==================== Serde ====================

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::String(s) => serializer.serialize_str(s),
            Self::Number(Number::Int(i)) => serializer.serialize_i64(*i),
            Self::Number(Number::Float(f)) => {
                if f.is_finite() {
                    serializer.serialize_f64(*f)
                } else {
                    // JSON has no NaN/Infinity; degrade to null.
                    serializer.serialize_none()
                }
            }
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Absent => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    /// Deserialize from any self-describing scalar; `null` becomes
    /// [`Scalar::Absent`]. Sequences and maps are rejected — a rule literal
    /// is always a single scalar.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}

struct ScalarVisitor;

impl<'de> Visitor<'de> for ScalarVisitor {
    type Value = Scalar;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a scalar value (string, number, boolean, or null)")
    }

    fn visit_bool<E>(self, v: bool) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Bool(v))
    }

    fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::int(v))
    }

    fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        // Beyond i64 range the value degrades to a float.
        Ok(i64::try_from(v).map_or_else(|_| Scalar::float(v as f64), Scalar::int))
    }

    fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::float(v))
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::String(v.to_owned()))
    }

    fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::String(v))
    }

    fn visit_none<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Absent)
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E>
    where
        E: de::Error,
    {
        Ok(Scalar::Absent)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(ScalarVisitor)
    }
}
