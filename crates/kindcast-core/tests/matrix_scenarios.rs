//! # Matrix Scenario Tests
//!
//! If ANY scenario fails, the conversion table is INVALID.
//!
//! ## Groups
//! - S0: Concrete lookups against the standard matrix
//! - S1: Identity edges
//! - S2: Checked edge boundaries over the full catalog
//! - S3: Direct edges

use kindcast_core::{
    Category, ConvertError, Decimal, EdgeKind, Kind, Matrix, OverflowReason, Signedness, Value,
};

/// Build a value of integer `kind`, panicking in tests if out of range.
fn int(kind: Kind, n: i128) -> Value {
    Value::from_integer(kind, n).expect("in range")
}

// =============================================================================
// S0: CONCRETE LOOKUPS
// =============================================================================

mod s0_concrete {
    use super::*;

    /// S0.1: i64 → u32 is checked and guarded.
    #[test]
    fn signed_long_to_unsigned_int() {
        let matrix = Matrix::standard();
        let edge = matrix.lookup(Kind::I64, Kind::U32).expect("edge");

        assert_eq!(edge.kind, EdgeKind::CheckedConversion);
        assert!(edge.requires_non_negative_guard);

        let err = edge.apply(Value::I64(-1)).expect_err("negative");
        assert!(matches!(
            err,
            ConvertError::Overflow(o) if o.reason == OverflowReason::NegativeToUnsigned
        ));
        assert_eq!(edge.apply(Value::I64(5)), Ok(Value::U32(5)));
    }

    /// S0.2: i64 → f64 is direct; precision loss is permitted.
    #[test]
    fn signed_long_to_double() {
        let matrix = Matrix::standard();
        let edge = matrix.lookup(Kind::I64, Kind::F64).expect("edge");

        assert_eq!(edge.kind, EdgeKind::DirectConversion);
        assert_eq!(
            edge.apply(Value::I64(9_007_199_254_740_993)),
            Ok(Value::F64(9_007_199_254_740_992.0))
        );
    }

    /// S0.3: bool → i32 is not convertible.
    #[test]
    fn bool_to_int_absent() {
        let matrix = Matrix::standard();
        assert!(matrix.lookup(Kind::Bool, Kind::I32).is_none());
    }

    /// S0.4: text → text is identity.
    #[test]
    fn text_identity() {
        let matrix = Matrix::standard();
        let edge = matrix.lookup(Kind::Text, Kind::Text).expect("edge");

        assert_eq!(edge.kind, EdgeKind::Identity);
        assert_eq!(edge.apply(Value::from("abc")), Ok(Value::from("abc")));
    }

    /// S0.5: i64 → i64 is identity.
    #[test]
    fn long_identity() {
        let matrix = Matrix::standard();
        let edge = matrix.lookup(Kind::I64, Kind::I64).expect("edge");

        assert_eq!(edge.kind, EdgeKind::Identity);
        assert_eq!(edge.apply(Value::I64(42)), Ok(Value::I64(42)));
    }

    /// S0.6: bool and text only reach themselves.
    #[test]
    fn bool_and_text_are_isolated() {
        let matrix = Matrix::standard();
        for kind in Kind::ALL {
            assert_eq!(matrix.lookup(Kind::Bool, kind).is_some(), kind == Kind::Bool);
            assert_eq!(matrix.lookup(Kind::Text, kind).is_some(), kind == Kind::Text);
        }
    }

    /// S0.7: f64 never narrows into an integer kind.
    #[test]
    fn double_never_reaches_integers() {
        let matrix = Matrix::standard();
        for kind in Kind::ALL.into_iter().filter(|k| k.is_integer()) {
            assert!(matrix.lookup(Kind::F64, kind).is_none(), "{kind}");
        }
    }
}

// =============================================================================
// S1: IDENTITY
// =============================================================================

mod s1_identity {
    use super::*;

    fn sample(kind: Kind) -> Value {
        match kind {
            Kind::Bool => Value::Bool(true),
            Kind::Decimal => Value::Decimal(Decimal::new(31_415, 4)),
            Kind::F64 => Value::F64(2.5),
            Kind::F32 => Value::F32(0.25),
            Kind::Text => Value::from("same"),
            integer => int(integer, 7),
        }
    }

    /// S1.1: every kind has an identity edge that returns its input.
    #[test]
    fn identity_for_every_kind() {
        let matrix = Matrix::build(Kind::ALL);
        for kind in Kind::ALL {
            let edge = matrix.lookup(kind, kind).expect("identity");
            assert_eq!(edge.kind, EdgeKind::Identity);
            assert_eq!(edge.apply(sample(kind)), Ok(sample(kind)));
        }
    }

    /// S1.2: identity never trips, even at extremes.
    #[test]
    fn identity_at_extremes() {
        let matrix = Matrix::build(Kind::ALL);
        let edge = matrix.lookup(Kind::I64, Kind::I64).expect("identity");
        assert_eq!(edge.apply(Value::I64(i64::MIN)), Ok(Value::I64(i64::MIN)));
        assert_eq!(edge.apply(Value::I64(i64::MAX)), Ok(Value::I64(i64::MAX)));
    }
}

// =============================================================================
// S2: CHECKED BOUNDARIES
// =============================================================================

mod s2_checked_boundaries {
    use super::*;

    fn bounds(kind: Kind) -> (i128, i128) {
        kind.integer_bounds().expect("integer kind")
    }

    /// S2.1: destination max/min succeed whenever the origin can hold them.
    #[test]
    fn exact_bounds_succeed() {
        let matrix = Matrix::build(Kind::ALL);
        let checked = matrix
            .edges()
            .filter(|e| e.kind == EdgeKind::CheckedConversion);

        for edge in checked {
            let (omin, omax) = bounds(edge.origin);
            let (dmin, dmax) = bounds(edge.destination);

            for bound in [dmin, dmax] {
                if (omin..=omax).contains(&bound) {
                    assert_eq!(
                        edge.apply(int(edge.origin, bound)),
                        Ok(int(edge.destination, bound)),
                        "{edge} at {bound}"
                    );
                }
            }
        }
    }

    /// S2.2: one past the destination max fails whenever the origin can hold it.
    #[test]
    fn one_past_max_fails() {
        let matrix = Matrix::build(Kind::ALL);
        let checked = matrix
            .edges()
            .filter(|e| e.kind == EdgeKind::CheckedConversion);

        for edge in checked {
            let (_, omax) = bounds(edge.origin);
            let (_, dmax) = bounds(edge.destination);
            let past = dmax + 1;

            if past <= omax {
                let err = edge.apply(int(edge.origin, past)).expect_err("overflow");
                assert!(matches!(
                    err,
                    ConvertError::Overflow(o) if o.reason == OverflowReason::OutOfRange
                ), "{edge}");
            }
        }
    }

    /// S2.3: every guarded edge rejects -1 through the guard.
    #[test]
    fn guarded_edges_reject_negative() {
        let matrix = Matrix::build(Kind::ALL);
        let guarded: Vec<_> = matrix
            .edges()
            .filter(|e| e.requires_non_negative_guard)
            .collect();

        // 4 signed origins × 5 unsigned destinations.
        assert_eq!(guarded.len(), 20);

        for edge in guarded {
            assert_eq!(edge.origin.signedness(), Signedness::Signed);
            assert_eq!(edge.destination.signedness(), Signedness::Unsigned);

            let err = edge.apply(int(edge.origin, -1)).expect_err("negative");
            assert!(matches!(
                err,
                ConvertError::Overflow(o) if o.reason == OverflowReason::NegativeToUnsigned
            ), "{edge}");
            assert_eq!(edge.apply(int(edge.origin, 0)), Ok(int(edge.destination, 0)));
        }
    }

    /// S2.4: unsigned → signed narrowing reports range, not sign.
    #[test]
    fn unsigned_to_signed_overflow_is_range() {
        let matrix = Matrix::build([Kind::U64]);
        let edge = matrix.lookup(Kind::U64, Kind::I64).expect("edge");
        assert!(!edge.requires_non_negative_guard);

        let err = edge.apply(Value::U64(u64::MAX)).expect_err("overflow");
        assert!(matches!(
            err,
            ConvertError::Overflow(o) if o.reason == OverflowReason::OutOfRange
        ));
    }
}

// =============================================================================
// S3: DIRECT
// =============================================================================

mod s3_direct {
    use super::*;

    /// S3.1: direct edges land only in the decimal-number category.
    #[test]
    fn direct_edges_target_decimal_numbers() {
        let matrix = Matrix::build(Kind::ALL);
        for edge in matrix.edges().filter(|e| e.kind == EdgeKind::DirectConversion) {
            assert_eq!(edge.destination.category(), Category::DecimalNumber, "{edge}");
            assert!(!edge.requires_non_negative_guard);
        }
    }

    /// S3.2: decimal → double and back through the standard matrix.
    #[test]
    fn decimal_and_double_interconvert() {
        let matrix = Matrix::build([Kind::Decimal, Kind::F64]);
        let quarter = Decimal::new(25, 2);

        let as_double = matrix
            .convert(Value::Decimal(quarter), Kind::F64)
            .expect("direct");
        assert_eq!(as_double, Value::F64(0.25));

        let back = matrix.convert(as_double, Kind::Decimal).expect("direct");
        assert_eq!(back, Value::Decimal(quarter));
    }

    /// S3.3: char widens into floating point by code unit.
    #[test]
    fn char_to_double() {
        let matrix = Matrix::build([Kind::Char]);
        assert_eq!(
            matrix.convert(Value::Char(0x41), Kind::F64),
            Ok(Value::F64(65.0))
        );
    }
}
