//! # Configuration
//!
//! TOML configuration of the conversion matrix.
//!
//! ```toml
//! # Kinds allowed to act as conversion origins.
//! eligible_origins = ["bool", "i64", "f64", "text"]
//! ```
//!
//! ## Resolution Order
//!
//! 1. `--config <path>` flag
//! 2. `KINDCAST_CONFIG` environment variable
//! 3. Built-in defaults (the standard origins)

use crate::error::AppError;
use kindcast_core::{Kind, Matrix, STANDARD_ORIGINS};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable naming a configuration file.
pub const CONFIG_ENV_VAR: &str = "KINDCAST_CONFIG";

/// Maximum configuration file size (64 KB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

fn default_origins() -> Vec<Kind> {
    STANDARD_ORIGINS.to_vec()
}

/// Matrix configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Kinds allowed to act as conversion origins.
    #[serde(default = "default_origins")]
    pub eligible_origins: Vec<Kind>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            eligible_origins: default_origins(),
        }
    }
}

impl Config {
    /// Pick the configuration file: explicit flag first, then environment.
    #[must_use]
    pub fn resolve_path(flag: Option<&Path>, env_value: Option<String>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf)
            .or_else(|| env_value.filter(|v| !v.trim().is_empty()).map(PathBuf::from))
    }

    /// Load from the resolved path, or fall back to defaults.
    pub fn load(flag: Option<&Path>) -> Result<Self, AppError> {
        let env_value = std::env::var(CONFIG_ENV_VAR).ok();

        match Self::resolve_path(flag, env_value) {
            Some(path) => Self::from_file(&path),
            None => {
                tracing::debug!("No config file, using standard origins");
                Ok(Self::default())
            }
        }
    }

    /// Read and parse a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let metadata = std::fs::metadata(path)
            .map_err(|e| AppError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(AppError::Config {
                source_name: path.display().to_string(),
                message: format!(
                    "file size {} bytes exceeds maximum allowed {} bytes",
                    metadata.len(),
                    MAX_CONFIG_FILE_SIZE
                ),
            });
        }

        let text = std::fs::read_to_string(path)
            .map_err(|e| AppError::Io(format!("Cannot read '{}': {}", path.display(), e)))?;

        tracing::info!("Loading config from {}", path.display());
        Self::parse(&text, &path.display().to_string())
    }

    /// Parse TOML text. `source_name` only labels errors.
    pub fn parse(text: &str, source_name: &str) -> Result<Self, AppError> {
        let config: Self = toml::from_str(text).map_err(|e| AppError::Config {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
        config.validate(source_name)?;
        Ok(config)
    }

    fn validate(&self, source_name: &str) -> Result<(), AppError> {
        if self.eligible_origins.is_empty() {
            return Err(AppError::Config {
                source_name: source_name.to_string(),
                message: "eligible_origins must name at least one kind".to_string(),
            });
        }
        Ok(())
    }

    /// Build the matrix this configuration describes.
    #[must_use]
    pub fn matrix(&self) -> Matrix {
        Matrix::build(self.eligible_origins.iter().copied())
    }
}

// =============================================================================
// TESTS
// =============================================================================
