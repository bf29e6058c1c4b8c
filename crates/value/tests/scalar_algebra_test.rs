//! Property-based tests for the scalar comparison algebra.

use std::cmp::Ordering;

use gridlint_value::Scalar;
use proptest::prelude::*;

fn any_scalar() -> impl Strategy<Value = Scalar> {
    prop_oneof![
        Just(Scalar::Absent),
        any::<bool>().prop_map(Scalar::from),
        any::<i64>().prop_map(Scalar::from),
        // Finite floats only; NaN breaks reflexivity by design (IEEE 754).
        (-1.0e12..1.0e12_f64).prop_map(Scalar::from),
        "[a-zA-Z0-9 ]{0,12}".prop_map(Scalar::from),
    ]
}

// ============================================================================
// EQUALITY: reflexive, symmetric, total
// ============================================================================

proptest! {
    #[test]
    fn equality_is_reflexive(a in any_scalar()) {
        let copy = a.clone();
        prop_assert_eq!(a, copy);
    }

    #[test]
    fn equality_is_symmetric(a in any_scalar(), b in any_scalar()) {
        prop_assert_eq!(a == b, b == a);
    }

    #[test]
    fn cross_kind_never_equal(a in any_scalar(), b in any_scalar()) {
        if a.kind() != b.kind() {
            prop_assert_ne!(a, b);
        }
    }
}

// ============================================================================
// ORDERING: defined within a kind, antisymmetric, agrees with equality
// ============================================================================

proptest! {
    #[test]
    fn ordering_requires_matching_kinds(a in any_scalar(), b in any_scalar()) {
        if a.kind() != b.kind() {
            prop_assert_eq!(a.try_compare(&b), None);
        }
    }

    #[test]
    fn ordering_is_antisymmetric(a in any_scalar(), b in any_scalar()) {
        let forward = a.try_compare(&b);
        let backward = b.try_compare(&a);
        prop_assert_eq!(forward, backward.map(Ordering::reverse));
    }

    #[test]
    fn ordering_equal_agrees_with_eq(a in any_scalar(), b in any_scalar()) {
        if a.try_compare(&b) == Some(Ordering::Equal) {
            prop_assert_eq!(a, b);
        }
    }

    #[test]
    fn absent_never_orders(a in any_scalar()) {
        prop_assert_eq!(Scalar::Absent.try_compare(&a), None);
        prop_assert_eq!(a.try_compare(&Scalar::Absent), None);
    }
}

// ============================================================================
// NUMERIC WIDENING: integers and floats are one ordered line
// ============================================================================

proptest! {
    #[test]
    fn int_float_widening_is_consistent(i in -1_000_000_i64..1_000_000) {
        let int = Scalar::from(i);
        let float = Scalar::from(i as f64);
        prop_assert_eq!(&int, &float);
        prop_assert_eq!(int.try_compare(&float), Some(Ordering::Equal));

        let bigger = Scalar::from(i as f64 + 0.5);
        prop_assert_eq!(int.try_compare(&bigger), Some(Ordering::Less));
    }
}

// ============================================================================
// DISPLAY / SERDE: coercion and round-trips stay aligned
// ============================================================================

proptest! {
    #[test]
    fn json_round_trip_preserves_value(a in any_scalar()) {
        let json = serde_json::to_string(&a).unwrap();
        let back: Scalar = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, a);
    }

    #[test]
    fn display_never_quotes_strings(s in "[a-z]{1,8}") {
        prop_assert_eq!(Scalar::from(s.as_str()).to_string(), s);
    }
}
