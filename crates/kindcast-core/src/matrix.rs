//! # Conversion Matrix
//!
//! Two-level dispatch table: origin kind → destination kind → edge.
//!
//! - Origins are restricted to the eligible set passed to [`build_matrix`]
//! - Destinations range over the entire catalog
//! - Non-convertible pairs are simply absent
//!
//! Both levels are `BTreeMap`s keyed by [`Kind`], so iteration follows
//! catalog order. The matrix is immutable once built and is `Send + Sync`.

use crate::edge::ConversionEdge;
use crate::error::ConvertError;
use crate::kind::Kind;
use crate::value::Value;
use std::collections::BTreeMap;

/// Origins used by the standard matrix: the kinds a JSON reader produces.
pub const STANDARD_ORIGINS: [Kind; 4] = [Kind::Bool, Kind::I64, Kind::F64, Kind::Text];

/// The complete set of edges from eligible origins to every kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    table: BTreeMap<Kind, BTreeMap<Kind, ConversionEdge>>,
}

/// Build the matrix for `eligible_origins`. Duplicates are ignored.
pub fn build_matrix(eligible_origins: impl IntoIterator<Item = Kind>) -> Matrix {
    Matrix::build(eligible_origins)
}

impl Matrix {
    /// Build the matrix for `eligible_origins`. Duplicates are ignored.
    #[must_use]
    pub fn build(eligible_origins: impl IntoIterator<Item = Kind>) -> Self {
        let mut table = BTreeMap::new();

        for origin in eligible_origins {
            table.entry(origin).or_insert_with(|| {
                Kind::ALL
                    .iter()
                    .filter_map(|&destination| {
                        ConversionEdge::between(origin, destination)
                            .map(|edge| (destination, edge))
                    })
                    .collect::<BTreeMap<_, _>>()
            });
        }

        Self { table }
    }

    /// Build the matrix over [`STANDARD_ORIGINS`].
    #[must_use]
    pub fn standard() -> Self {
        Self::build(STANDARD_ORIGINS)
    }

    /// Find the edge for a pair. `None` means not convertible.
    #[must_use]
    pub fn lookup(&self, origin: Kind, destination: Kind) -> Option<&ConversionEdge> {
        self.table.get(&origin)?.get(&destination)
    }

    /// Check whether `kind` may serve as an origin.
    #[must_use]
    pub fn is_eligible(&self, kind: Kind) -> bool {
        self.table.contains_key(&kind)
    }

    /// Eligible origins in catalog order.
    pub fn origins(&self) -> impl Iterator<Item = Kind> + '_ {
        self.table.keys().copied()
    }

    /// Edges leaving `origin`, in catalog order of destination.
    pub fn destinations(&self, origin: Kind) -> impl Iterator<Item = &ConversionEdge> + '_ {
        self.table
            .get(&origin)
            .into_iter()
            .flat_map(|row| row.values())
    }

    /// All edges, origin-major, both levels in catalog order.
    pub fn edges(&self) -> impl Iterator<Item = &ConversionEdge> + '_ {
        self.table.values().flat_map(|row| row.values())
    }

    /// Total number of edges.
    #[must_use]
    pub fn len(&self) -> usize {
        self.table.values().map(BTreeMap::len).sum()
    }

    /// Check if the matrix has no edges (no eligible origins).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Convert `value` into kind `to` through the edge for
    /// `(value.kind(), to)`.
    pub fn convert(&self, value: Value, to: Kind) -> Result<Value, ConvertError> {
        let from = value.kind();
        let edge = self
            .lookup(from, to)
            .ok_or(ConvertError::NotConvertible { from, to })?;
        edge.apply(value)
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::standard()
    }
}

// =============================================================================
// TESTS
// =============================================================================
