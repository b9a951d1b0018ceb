//! # Runtime Values
//!
//! One variant per [`Kind`], each holding that kind's runtime representation.
//!
//! A `Value` always knows its own kind, so the matrix can dispatch on it
//! without any reflection.

use crate::error::ConvertError;
use crate::kind::Kind;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A primitive value tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum Value {
    Bool(bool),
    U8(u8),
    I8(i8),
    /// A UTF-16 code unit.
    Char(u16),
    Decimal(Decimal),
    F64(f64),
    F32(f32),
    I32(i32),
    U32(u32),
    I64(i64),
    U64(u64),
    I16(i16),
    U16(u16),
    Text(String),
}

impl Value {
    /// The kind of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::U8(_) => Kind::U8,
            Value::I8(_) => Kind::I8,
            Value::Char(_) => Kind::Char,
            Value::Decimal(_) => Kind::Decimal,
            Value::F64(_) => Kind::F64,
            Value::F32(_) => Kind::F32,
            Value::I32(_) => Kind::I32,
            Value::U32(_) => Kind::U32,
            Value::I64(_) => Kind::I64,
            Value::U64(_) => Kind::U64,
            Value::I16(_) => Kind::I16,
            Value::U16(_) => Kind::U16,
            Value::Text(_) => Kind::Text,
        }
    }

    /// Widen an integer value to `i128`. Every integer kind fits.
    #[must_use]
    pub fn as_integer(&self) -> Option<i128> {
        match *self {
            Value::U8(v) => Some(i128::from(v)),
            Value::I8(v) => Some(i128::from(v)),
            Value::Char(v) | Value::U16(v) => Some(i128::from(v)),
            Value::I16(v) => Some(i128::from(v)),
            Value::U32(v) => Some(i128::from(v)),
            Value::I32(v) => Some(i128::from(v)),
            Value::U64(v) => Some(i128::from(v)),
            Value::I64(v) => Some(i128::from(v)),
            _ => None,
        }
    }

    /// Build a value of an integer `kind` from `n`.
    ///
    /// Returns `None` when `n` is outside the kind's range or `kind` is not
    /// an integer kind. Never truncates or wraps.
    #[must_use]
    pub fn from_integer(kind: Kind, n: i128) -> Option<Self> {
        match kind {
            Kind::U8 => narrow(n, Value::U8),
            Kind::I8 => narrow(n, Value::I8),
            Kind::Char => narrow(n, Value::Char),
            Kind::U16 => narrow(n, Value::U16),
            Kind::I16 => narrow(n, Value::I16),
            Kind::U32 => narrow(n, Value::U32),
            Kind::I32 => narrow(n, Value::I32),
            Kind::U64 => narrow(n, Value::U64),
            Kind::I64 => narrow(n, Value::I64),
            Kind::Bool | Kind::Decimal | Kind::F64 | Kind::F32 | Kind::Text => None,
        }
    }

    /// Parse literal text as a value of `kind`.
    ///
    /// `char` accepts exactly one character that fits in a single UTF-16
    /// code unit. `text` takes the literal verbatim.
    pub fn parse(kind: Kind, literal: &str) -> Result<Self, ConvertError> {
        let value = match kind {
            Kind::Bool => Value::Bool(parse_as(kind, literal)?),
            Kind::U8 => Value::U8(parse_as(kind, literal)?),
            Kind::I8 => Value::I8(parse_as(kind, literal)?),
            Kind::Char => {
                let mut units = literal.encode_utf16();
                match (units.next(), units.next()) {
                    (Some(unit), None) => Value::Char(unit),
                    _ => return Err(invalid_literal(kind, literal)),
                }
            }
            Kind::Decimal => Value::Decimal(parse_as(kind, literal)?),
            Kind::F64 => Value::F64(parse_as(kind, literal)?),
            Kind::F32 => Value::F32(parse_as(kind, literal)?),
            Kind::I32 => Value::I32(parse_as(kind, literal)?),
            Kind::U32 => Value::U32(parse_as(kind, literal)?),
            Kind::I64 => Value::I64(parse_as(kind, literal)?),
            Kind::U64 => Value::U64(parse_as(kind, literal)?),
            Kind::I16 => Value::I16(parse_as(kind, literal)?),
            Kind::U16 => Value::U16(parse_as(kind, literal)?),
            Kind::Text => Value::Text(literal.to_string()),
        };
        Ok(value)
    }
}

/// Checked narrowing of an `i128` into any integer representation.
fn narrow<T: TryFrom<i128>>(n: i128, wrap: fn(T) -> Value) -> Option<Value> {
    T::try_from(n).ok().map(wrap)
}

fn parse_as<T: FromStr>(kind: Kind, literal: &str) -> Result<T, ConvertError> {
    literal
        .trim()
        .parse()
        .map_err(|_| invalid_literal(kind, literal))
}

fn invalid_literal(kind: Kind, literal: &str) -> ConvertError {
    ConvertError::InvalidLiteral {
        kind,
        literal: literal.to_string(),
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{v}"),
            Value::U8(v) => write!(f, "{v}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::Char(unit) => match char::from_u32(u32::from(*unit)) {
                Some(c) => write!(f, "{c}"),
                None => write!(f, "\\u{{{unit:04x}}}"),
            },
            Value::Decimal(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::U32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::U64(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::U16(v) => write!(f, "{v}"),
            Value::Text(v) => f.write_str(v),
        }
    }
}

// =============================================================================
// CONVERSIONS FROM NATIVE TYPES
// =============================================================================

macro_rules! impl_from_native {
    ($($native:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$native> for Value {
                fn from(v: $native) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

impl_from_native! {
    bool => Bool,
    u8 => U8,
    i8 => I8,
    Decimal => Decimal,
    f64 => F64,
    f32 => F32,
    i32 => I32,
    u32 => U32,
    i64 => I64,
    u64 => U64,
    i16 => I16,
    u16 => U16,
    String => Text,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

// =============================================================================
// TESTS
// =============================================================================
