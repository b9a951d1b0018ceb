//! # CLI Command Implementations
//!
//! Each command renders its output to a `String`; `execute` prints it.
//!
//! A checked conversion that overflows is a reported outcome, not a command
//! failure: `convert` and `coerce` print `success: false` and exit cleanly.

use crate::error::AppError;
use kindcast_core::{ConversionEdge, ConvertError, Kind, Matrix, Value};

/// Render JSON the same way everywhere.
fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}

fn edge_json(edge: &ConversionEdge) -> serde_json::Value {
    serde_json::json!({
        "origin": edge.origin,
        "destination": edge.destination,
        "edge": edge.kind,
        "requires_non_negative_guard": edge.requires_non_negative_guard
    })
}

fn edge_row(edge: &ConversionEdge) -> String {
    let guard = if edge.requires_non_negative_guard {
        "non-negative"
    } else {
        "-"
    };
    format!(
        "{:<8} {:<12} {:<9} {}",
        edge.origin.name(),
        edge.destination.name(),
        edge.kind.name(),
        guard
    )
}

// =============================================================================
// KINDS COMMAND
// =============================================================================

/// List the kind catalog.
pub fn cmd_kinds(json_mode: bool) -> String {
    if json_mode {
        let kinds: Vec<_> = Kind::ALL
            .iter()
            .map(|kind| {
                serde_json::json!({
                    "name": kind,
                    "category": kind.category(),
                    "signedness": kind.signedness()
                })
            })
            .collect();
        return pretty(&serde_json::Value::Array(kinds));
    }

    let mut out = String::new();
    out.push_str("kindcast Kind Catalog\n");
    out.push_str("=====================\n");
    for kind in Kind::ALL {
        out.push_str(&format!(
            "{:<8} {:<15} {}\n",
            kind.name(),
            kind.category().name(),
            kind.signedness().name()
        ));
    }
    out.trim_end().to_string()
}

// =============================================================================
// TABLE COMMAND
// =============================================================================

/// Print the matrix, or one origin's row.
pub fn cmd_table(matrix: &Matrix, origin: Option<Kind>, json_mode: bool) -> String {
    let edges: Vec<&ConversionEdge> = match origin {
        Some(origin) => matrix.destinations(origin).collect(),
        None => matrix.edges().collect(),
    };

    if let Some(origin) = origin {
        if !matrix.is_eligible(origin) {
            tracing::warn!("{} is not an eligible origin", origin);
        }
    }

    if json_mode {
        let rows: Vec<_> = edges.iter().map(|edge| edge_json(edge)).collect();
        return pretty(&serde_json::json!({
            "origins": matrix.origins().collect::<Vec<_>>(),
            "edge_count": rows.len(),
            "edges": rows
        }));
    }

    let mut out = String::new();
    out.push_str("kindcast Conversion Matrix\n");
    out.push_str("==========================\n");
    out.push_str(&format!(
        "{:<8} {:<12} {:<9} {}\n",
        "ORIGIN", "DESTINATION", "EDGE", "GUARD"
    ));
    for edge in &edges {
        out.push_str(&edge_row(edge));
        out.push('\n');
    }
    out.push_str(&format!("\n{} edges", edges.len()));
    out
}

// =============================================================================
// LOOKUP COMMAND
// =============================================================================

/// Show the edge for one pair, or report that none exists.
pub fn cmd_lookup(matrix: &Matrix, from: Kind, to: Kind, json_mode: bool) -> String {
    let edge = matrix.lookup(from, to);

    if json_mode {
        return pretty(&serde_json::json!({
            "from": from,
            "to": to,
            "convertible": edge.is_some(),
            "edge": edge.map(edge_json)
        }));
    }

    match edge {
        Some(edge) => edge.to_string(),
        None if !matrix.is_eligible(from) => {
            format!("{} -> {}: not convertible ({} is not an eligible origin)", from, to, from)
        }
        None => format!("{} -> {}: not convertible", from, to),
    }
}

// =============================================================================
// CONVERT / COERCE COMMANDS
// =============================================================================

/// Render the outcome of a conversion. Overflow is an outcome, not an error.
fn render_outcome(
    result: Result<Value, ConvertError>,
    to: Kind,
    json_mode: bool,
) -> Result<String, AppError> {
    match result {
        Ok(value) => {
            if json_mode {
                Ok(pretty(&serde_json::json!({
                    "success": true,
                    "value": value
                })))
            } else {
                Ok(format!("{} ({})", value, to))
            }
        }
        Err(ConvertError::Overflow(overflow)) => {
            tracing::warn!("{}", overflow);
            if json_mode {
                Ok(pretty(&serde_json::json!({
                    "success": false,
                    "error": overflow.to_string(),
                    "reason": overflow.reason
                })))
            } else {
                Ok(format!("failed: {}", overflow))
            }
        }
        Err(other) => Err(other.into()),
    }
}

/// Parse `literal` as `from` and convert it into `to`.
pub fn cmd_convert(
    matrix: &Matrix,
    from: Kind,
    to: Kind,
    literal: &str,
    json_mode: bool,
) -> Result<String, AppError> {
    let value = Value::parse(from, literal)?;
    tracing::debug!("Converting {:?} from {} to {}", value, from, to);
    render_outcome(matrix.convert(value, to), to, json_mode)
}

/// Coerce a primitive JSON node into `to`.
pub fn cmd_coerce(
    matrix: &Matrix,
    to: Kind,
    json: &str,
    json_mode: bool,
) -> Result<String, AppError> {
    let node: serde_json::Value =
        serde_json::from_str(json).map_err(|e| AppError::Json(e.to_string()))?;
    tracing::debug!("Coercing {} into {}", node, to);
    render_outcome(matrix.coerce_json(&node, to), to, json_mode)
}
