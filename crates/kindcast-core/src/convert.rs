//! # Conversion Operators
//!
//! The two routines every matrix edge is realized with:
//!
//! 1. **Direct**: reinterpret a value in a decimal-number representation.
//!    Infallible; follows Rust `as` semantics (round to nearest, saturate).
//! 2. **Checked**: overflow-detecting integer narrowing behind an optional
//!    sign guard. Fails with [`OverflowError`] instead of truncating.
//!
//! One routine per shape, not one function per kind pair: the destination
//! kind selects the specialization at runtime.

use crate::error::{OverflowError, OverflowReason};
use crate::kind::{Kind, Signedness};
use crate::value::Value;
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

// =============================================================================
// SIGN GUARD
// =============================================================================

/// True when a conversion must reject negative inputs before narrowing.
#[must_use]
pub fn requires_non_negative_guard(from: Kind, to: Kind) -> bool {
    from.signedness() == Signedness::Signed && to.signedness() == Signedness::Unsigned
}

// =============================================================================
// CHECKED NARROWING
// =============================================================================

/// Narrow the integer `n` (a value of kind `from`) into kind `to`.
///
/// With `guard` set, a negative `n` fails as
/// [`OverflowReason::NegativeToUnsigned`] before any cast is attempted.
/// Otherwise the cast either fits exactly or fails as
/// [`OverflowReason::OutOfRange`].
pub fn checked_narrow(n: i128, from: Kind, to: Kind, guard: bool) -> Result<Value, OverflowError> {
    let overflow = |reason| OverflowError {
        from,
        to,
        value: n,
        reason,
    };

    if guard && n < 0 {
        return Err(overflow(OverflowReason::NegativeToUnsigned));
    }

    Value::from_integer(to, n).ok_or_else(|| overflow(OverflowReason::OutOfRange))
}

// =============================================================================
// DIRECT CONVERSION
// =============================================================================

/// Reinterpret `value` in the representation of the decimal-number kind `to`.
///
/// `None` when `to` is not a decimal-number kind or `value` is not numeric.
pub(crate) fn direct(value: &Value, to: Kind) -> Option<Value> {
    match to {
        Kind::F64 => to_f64(value).map(Value::F64),
        Kind::F32 => to_f32(value).map(Value::F32),
        Kind::Decimal => to_decimal(value).map(Value::Decimal),
        _ => None,
    }
}

fn to_f64(value: &Value) -> Option<f64> {
    match value {
        Value::F64(v) => Some(*v),
        Value::F32(v) => Some(f64::from(*v)),
        Value::Decimal(d) => d.to_f64(),
        other => other.as_integer().map(|n| n as f64),
    }
}

fn to_f32(value: &Value) -> Option<f32> {
    match value {
        Value::F32(v) => Some(*v),
        Value::F64(v) => Some(*v as f32),
        Value::Decimal(d) => d.to_f32(),
        other => other.as_integer().map(|n| n as f32),
    }
}

fn to_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Decimal(d) => Some(*d),
        Value::F64(v) => Some(saturating_decimal(*v, Decimal::from_f64(*v))),
        Value::F32(v) => Some(saturating_decimal(
            f64::from(*v),
            Decimal::from_f32(*v),
        )),
        other => other
            .as_integer()
            .and_then(|n| Decimal::try_from_i128_with_scale(n, 0).ok()),
    }
}

/// NaN maps to zero; anything the decimal cannot hold saturates by sign.
fn saturating_decimal(source: f64, converted: Option<Decimal>) -> Decimal {
    if source.is_nan() {
        return Decimal::ZERO;
    }
    converted.unwrap_or(if source.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

// =============================================================================
// TESTS
// =============================================================================
