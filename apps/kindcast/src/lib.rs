//! # kindcast
//!
//! Library half of the kindcast binary: configuration, CLI definitions and
//! command implementations, exposed so integration tests can drive them.

pub mod cli;
pub mod config;
pub mod error;

pub use config::Config;
pub use error::AppError;
