//! # Application Errors
//!
//! Everything the binary can fail with. Conversion failures come from
//! kindcast-core; configuration and I/O failures are local.

use kindcast_core::ConvertError;
use thiserror::Error;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum AppError {
    /// Lookup, parsing, or conversion failed in the core.
    #[error(transparent)]
    Convert(#[from] ConvertError),

    /// The configuration file could not be parsed or is invalid.
    #[error("Config error in {source_name}: {message}")]
    Config {
        source_name: String,
        message: String,
    },

    /// A file could not be read.
    #[error("I/O error: {0}")]
    Io(String),

    /// A command argument was not valid JSON.
    #[error("Invalid JSON: {0}")]
    Json(String),
}
