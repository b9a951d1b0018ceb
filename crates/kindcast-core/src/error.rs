//! # Error Types
//!
//! - No silent failures: truncation and wrap-around are reported, never produced
//! - Use `Result<T, ConvertError>` for fallible operations
//! - The CORE never panics; every conversion failure is recoverable

use crate::kind::Kind;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// =============================================================================
// OVERFLOW
// =============================================================================

/// Why a checked conversion rejected its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OverflowReason {
    /// The sign guard tripped: a negative value headed for an unsigned kind.
    NegativeToUnsigned,
    /// The magnitude does not fit the destination's representable range.
    OutOfRange,
}

impl fmt::Display for OverflowReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverflowReason::NegativeToUnsigned => f.write_str("negative value for unsigned kind"),
            OverflowReason::OutOfRange => f.write_str("value out of range"),
        }
    }
}

/// A checked conversion failed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, Deserialize)]
#[error("Overflow converting {value} from {from} to {to}: {reason}")]
pub struct OverflowError {
    pub from: Kind,
    pub to: Kind,
    pub value: i128,
    pub reason: OverflowReason,
}

// =============================================================================
// CONVERT ERROR
// =============================================================================

/// Errors that can occur when looking up or applying conversions.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConvertError {
    /// The pair has no edge in the matrix.
    #[error("No conversion from {from} to {to}")]
    NotConvertible { from: Kind, to: Kind },

    /// A checked conversion's guard or narrowing cast failed.
    #[error(transparent)]
    Overflow(#[from] OverflowError),

    /// An edge was handed a value of some other kind.
    #[error("Edge expects a {expected} value, got {found}")]
    OriginMismatch { expected: Kind, found: Kind },

    /// A kind name did not match the catalog.
    #[error("Unknown kind: {0}")]
    UnknownKind(String),

    /// Literal text could not be parsed as the requested kind.
    #[error("Invalid {kind} literal: {literal:?}")]
    InvalidLiteral { kind: Kind, literal: String },

    /// A JSON node has no primitive kind.
    #[error("Unsupported JSON node: {0}")]
    UnsupportedJson(String),
}

impl ConvertError {
    /// True for the recoverable runtime failure of a checked conversion.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, ConvertError::Overflow(_))
    }
}
