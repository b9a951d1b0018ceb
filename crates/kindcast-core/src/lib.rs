//! # kindcast-core
//!
//! The runtime conversion dispatch model for kindcast - THE LOGIC.
//!
//! This crate decides which primitive kinds may convert into which others
//! and performs those conversions at runtime, reporting overflow and sign
//! loss instead of truncating.
//!
//! ## Layers
//!
//! - `kind` → the closed catalog: `(category, signedness)` per kind
//! - `edge` → classification of one `(origin, destination)` pair
//! - `matrix` → origin → destination → edge table over eligible origins
//! - `convert` → the direct and checked-narrowing operators
//! - `value` / `coerce` → runtime values and JSON primitive input
//!
//! ## Architectural Constraints
//!
//! - Has NO async, NO I/O, NO logging (pure Rust)
//! - The catalog is closed: no user-defined kinds
//! - Built once, read-only afterwards: safe to share across threads
//! - Never panics: every conversion failure is a `Result`

// =============================================================================
// MODULES
// =============================================================================

pub mod coerce;
pub mod convert;
pub mod edge;
pub mod error;
pub mod kind;
pub mod matrix;
pub mod value;

// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use convert::{checked_narrow, requires_non_negative_guard};
pub use edge::{ConversionEdge, EdgeKind};
pub use error::{ConvertError, OverflowError, OverflowReason};
pub use kind::{Category, Kind, Signedness, category_of, signedness_of};
pub use matrix::{Matrix, STANDARD_ORIGINS, build_matrix};
pub use value::Value;

pub use rust_decimal::Decimal;
