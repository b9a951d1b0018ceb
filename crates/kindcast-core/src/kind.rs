//! # Kind Taxonomy
//!
//! The closed catalog of primitive kinds that participate in conversion.
//!
//! Every [`Kind`] maps to exactly one `(Category, Signedness)` pair. The
//! catalog is compiled into the binary and never grows at runtime.
//!
//! ## Catalog Order
//!
//! Declaration order is an observable contract: `Kind::ALL`, the derived
//! `Ord`, and therefore every `BTreeMap<Kind, _>` iterate in this order.
//! Downstream consumers rely on it for a stable table layout.

use crate::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// CATEGORY & SIGNEDNESS
// =============================================================================

/// Coarse classification of a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Boolean,
    Integer,
    DecimalNumber,
    Text,
}

impl Category {
    /// Get the category name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Category::Boolean => "boolean",
            Category::Integer => "integer",
            Category::DecimalNumber => "decimal-number",
            Category::Text => "text",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether an integer kind can represent negative values.
///
/// Non-integer kinds are always `NotApplicable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Signedness {
    Signed,
    Unsigned,
    NotApplicable,
}

impl Signedness {
    /// Get the signedness name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Signedness::Signed => "signed",
            Signedness::Unsigned => "unsigned",
            Signedness::NotApplicable => "not-applicable",
        }
    }
}

impl fmt::Display for Signedness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// KIND
// =============================================================================

/// A primitive kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Bool,
    U8,
    I8,
    /// A single UTF-16 code unit. Classified as an unsigned integer.
    Char,
    /// 96-bit scaled decimal.
    Decimal,
    F64,
    F32,
    I32,
    U32,
    I64,
    U64,
    I16,
    U16,
    Text,
}

impl Kind {
    /// The full catalog in declaration order.
    pub const ALL: [Kind; 14] = [
        Kind::Bool,
        Kind::U8,
        Kind::I8,
        Kind::Char,
        Kind::Decimal,
        Kind::F64,
        Kind::F32,
        Kind::I32,
        Kind::U32,
        Kind::I64,
        Kind::U64,
        Kind::I16,
        Kind::U16,
        Kind::Text,
    ];

    /// Canonical lowercase name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Kind::Bool => "bool",
            Kind::U8 => "u8",
            Kind::I8 => "i8",
            Kind::Char => "char",
            Kind::Decimal => "decimal",
            Kind::F64 => "f64",
            Kind::F32 => "f32",
            Kind::I32 => "i32",
            Kind::U32 => "u32",
            Kind::I64 => "i64",
            Kind::U64 => "u64",
            Kind::I16 => "i16",
            Kind::U16 => "u16",
            Kind::Text => "text",
        }
    }

    /// The category of this kind.
    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Kind::Bool => Category::Boolean,
            Kind::U8
            | Kind::I8
            | Kind::Char
            | Kind::I32
            | Kind::U32
            | Kind::I64
            | Kind::U64
            | Kind::I16
            | Kind::U16 => Category::Integer,
            Kind::Decimal | Kind::F64 | Kind::F32 => Category::DecimalNumber,
            Kind::Text => Category::Text,
        }
    }

    /// The signedness of this kind.
    #[must_use]
    pub const fn signedness(self) -> Signedness {
        match self {
            Kind::I8 | Kind::I16 | Kind::I32 | Kind::I64 => Signedness::Signed,
            Kind::U8 | Kind::Char | Kind::U16 | Kind::U32 | Kind::U64 => Signedness::Unsigned,
            Kind::Bool | Kind::Decimal | Kind::F64 | Kind::F32 | Kind::Text => {
                Signedness::NotApplicable
            }
        }
    }

    /// Inclusive `(min, max)` bounds for integer kinds, `None` otherwise.
    #[must_use]
    pub const fn integer_bounds(self) -> Option<(i128, i128)> {
        match self {
            Kind::U8 => Some((u8::MIN as i128, u8::MAX as i128)),
            Kind::I8 => Some((i8::MIN as i128, i8::MAX as i128)),
            Kind::Char | Kind::U16 => Some((u16::MIN as i128, u16::MAX as i128)),
            Kind::I16 => Some((i16::MIN as i128, i16::MAX as i128)),
            Kind::U32 => Some((u32::MIN as i128, u32::MAX as i128)),
            Kind::I32 => Some((i32::MIN as i128, i32::MAX as i128)),
            Kind::U64 => Some((u64::MIN as i128, u64::MAX as i128)),
            Kind::I64 => Some((i64::MIN as i128, i64::MAX as i128)),
            Kind::Bool | Kind::Decimal | Kind::F64 | Kind::F32 | Kind::Text => None,
        }
    }

    /// Shorthand for `category() == Category::Integer`.
    #[must_use]
    pub const fn is_integer(self) -> bool {
        matches!(self.category(), Category::Integer)
    }
}

/// Category lookup over the closed catalog.
#[must_use]
pub const fn category_of(kind: Kind) -> Category {
    kind.category()
}

/// Signedness lookup over the closed catalog.
#[must_use]
pub const fn signedness_of(kind: Kind) -> Signedness {
    kind.signedness()
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ConvertError;

    /// Accepts canonical names and the common long-form aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = match s.trim().to_ascii_lowercase().as_str() {
            "bool" | "boolean" => Kind::Bool,
            "u8" | "byte" => Kind::U8,
            "i8" | "sbyte" => Kind::I8,
            "char" => Kind::Char,
            "decimal" => Kind::Decimal,
            "f64" | "double" => Kind::F64,
            "f32" | "float" => Kind::F32,
            "i32" | "int" => Kind::I32,
            "u32" | "uint" => Kind::U32,
            "i64" | "long" => Kind::I64,
            "u64" | "ulong" => Kind::U64,
            "i16" | "short" => Kind::I16,
            "u16" | "ushort" => Kind::U16,
            "text" | "string" => Kind::Text,
            _ => return Err(ConvertError::UnknownKind(s.to_string())),
        };
        Ok(kind)
    }
}

// =============================================================================
// TESTS
// =============================================================================
