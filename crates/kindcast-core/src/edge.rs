//! # Conversion Edges
//!
//! A directed `(origin, destination)` pair tagged with how the conversion is
//! realized. Classification is a pure function of the two kinds' taxonomy
//! entries.

use crate::convert::{checked_narrow, direct, requires_non_negative_guard};
use crate::error::ConvertError;
use crate::kind::{Category, Kind};
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// EDGE KIND
// =============================================================================

/// How an edge converts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeKind {
    /// Origin equals destination; the input is returned unchanged.
    Identity,
    /// Reinterpretation with no runtime check. Always succeeds.
    DirectConversion,
    /// Integer narrowing or sign change that may fail at runtime.
    CheckedConversion,
}

impl EdgeKind {
    /// Get the edge kind name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            EdgeKind::Identity => "identity",
            EdgeKind::DirectConversion => "direct",
            EdgeKind::CheckedConversion => "checked",
        }
    }

    /// Only checked edges have a failure outcome.
    #[must_use]
    pub fn is_fallible(&self) -> bool {
        matches!(self, EdgeKind::CheckedConversion)
    }
}

impl fmt::Display for EdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// CONVERSION EDGE
// =============================================================================

/// A single entry of the conversion matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConversionEdge {
    pub origin: Kind,
    pub destination: Kind,
    pub kind: EdgeKind,
    /// Set on checked signed → unsigned edges: negative inputs fail up front.
    pub requires_non_negative_guard: bool,
}

impl ConversionEdge {
    /// Classify the pair, or `None` when it is not convertible.
    ///
    /// - same kind → identity
    /// - same category, both integer → checked
    /// - same category otherwise → direct
    /// - integer → decimal-number → direct
    /// - anything else → no edge
    #[must_use]
    pub fn between(origin: Kind, destination: Kind) -> Option<Self> {
        let kind = if origin == destination {
            EdgeKind::Identity
        } else {
            match (origin.category(), destination.category()) {
                (Category::Integer, Category::Integer) => EdgeKind::CheckedConversion,
                (o, d) if o == d => EdgeKind::DirectConversion,
                (Category::Integer, Category::DecimalNumber) => EdgeKind::DirectConversion,
                _ => return None,
            }
        };

        let requires_non_negative_guard =
            kind.is_fallible() && requires_non_negative_guard(origin, destination);

        Some(Self {
            origin,
            destination,
            kind,
            requires_non_negative_guard,
        })
    }

    /// Run this edge's operator on `value`.
    ///
    /// For a value of the origin kind, identity and direct edges always
    /// return `Ok`; checked edges return [`ConvertError::Overflow`] when the
    /// guard trips or the value does not fit. A value of any other kind is
    /// rejected with [`ConvertError::OriginMismatch`].
    pub fn apply(&self, value: Value) -> Result<Value, ConvertError> {
        let found = value.kind();
        if found != self.origin {
            return Err(self.mismatch(found));
        }

        match self.kind {
            EdgeKind::Identity => Ok(value),
            EdgeKind::DirectConversion => {
                direct(&value, self.destination).ok_or_else(|| self.mismatch(found))
            }
            EdgeKind::CheckedConversion => {
                let n = value.as_integer().ok_or_else(|| self.mismatch(found))?;
                let converted = checked_narrow(
                    n,
                    self.origin,
                    self.destination,
                    self.requires_non_negative_guard,
                )?;
                Ok(converted)
            }
        }
    }

    fn mismatch(&self, found: Kind) -> ConvertError {
        ConvertError::OriginMismatch {
            expected: self.origin,
            found,
        }
    }
}

impl fmt::Display for ConversionEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} ({})", self.origin, self.destination, self.kind)?;
        if self.requires_non_negative_guard {
            f.write_str(" [non-negative]")?;
        }
        Ok(())
    }
}

// =============================================================================
// TESTS
// =============================================================================
