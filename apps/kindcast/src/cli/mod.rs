//! # kindcast CLI Module
//!
//! This module implements the CLI interface for kindcast.
//!
//! ## Available Commands
//!
//! - `kinds` - List the kind catalog
//! - `table` - Print the conversion matrix
//! - `lookup` - Show the edge for one origin/destination pair
//! - `convert` - Parse a literal and run it through the matrix
//! - `coerce` - Coerce a primitive JSON node into a kind

mod commands;

use crate::config::Config;
use crate::error::AppError;
use clap::{Parser, Subcommand};
use kindcast_core::{Kind, Matrix};
use std::path::{Path, PathBuf};

pub use commands::*;

// =============================================================================
// CLI STRUCTURE
// =============================================================================

/// kindcast - primitive kind conversion matrix
///
/// Inspect which primitive kinds convert into which others, and run
/// checked conversions that report overflow instead of truncating.
#[derive(Parser, Debug)]
#[command(name = "kindcast")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a TOML configuration file (overrides KINDCAST_CONFIG)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output in JSON format (for programmatic access)
    #[arg(long, global = true)]
    pub json_mode: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the kind catalog with category and signedness
    Kinds,

    /// Print the conversion matrix, origin-major
    Table {
        /// Only show edges leaving this origin
        #[arg(short, long)]
        origin: Option<Kind>,
    },

    /// Show the edge for one pair
    Lookup {
        /// Origin kind
        from: Kind,

        /// Destination kind
        to: Kind,
    },

    /// Parse a literal of one kind and convert it into another
    Convert {
        /// Kind of the literal
        #[arg(short, long)]
        from: Kind,

        /// Destination kind
        #[arg(short, long)]
        to: Kind,

        /// The literal value
        #[arg(allow_hyphen_values = true)]
        literal: String,
    },

    /// Coerce a primitive JSON node into a kind
    Coerce {
        /// Destination kind
        #[arg(short, long)]
        to: Kind,

        /// The JSON node, e.g. `42`, `true`, `"text"`
        #[arg(allow_hyphen_values = true)]
        json: String,
    },
}

// =============================================================================
// COMMAND EXECUTION
// =============================================================================

/// Execute the CLI with parsed arguments.
///
/// Configuration is only read by commands that consult the matrix.
pub fn execute(cli: Cli) -> Result<(), AppError> {
    let json_mode = cli.json_mode;
    let config_path = cli.config.as_deref();

    let output = match cli.command {
        Some(Commands::Kinds) => cmd_kinds(json_mode),
        Some(Commands::Table { origin }) => {
            cmd_table(&load_matrix(config_path)?, origin, json_mode)
        }
        Some(Commands::Lookup { from, to }) => {
            cmd_lookup(&load_matrix(config_path)?, from, to, json_mode)
        }
        Some(Commands::Convert { from, to, literal }) => {
            cmd_convert(&load_matrix(config_path)?, from, to, &literal, json_mode)?
        }
        Some(Commands::Coerce { to, json }) => {
            cmd_coerce(&load_matrix(config_path)?, to, &json, json_mode)?
        }
        None => {
            // No subcommand - show the table by default
            cmd_table(&load_matrix(config_path)?, None, json_mode)
        }
    };

    println!("{}", output);
    Ok(())
}

fn load_matrix(config_path: Option<&Path>) -> Result<Matrix, AppError> {
    let matrix = Config::load(config_path)?.matrix();
    tracing::debug!(
        "Matrix built: {} origins, {} edges",
        matrix.origins().count(),
        matrix.len()
    );
    Ok(matrix)
}
