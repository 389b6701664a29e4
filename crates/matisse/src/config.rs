//! Workspace configuration loading.
//!
//! Bundled defaults ship with the library (`matisse.toml` at the repository
//! root, compiled in via `include_str!`); a `matisse.toml` in the working
//! directory overrides individual values.

use config::{Config, File, FileFormat};
use matisse_error::{ConfigError, MatisseError, MatisseResult};
use matisse_registry::RegistryConfig;
use matisse_upload::UploadConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument};

/// Combined configuration for an editing session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct MatisseConfig {
    /// Local asset registry settings
    #[serde(default)]
    registry: RegistryConfig,
    /// Upload transport settings
    #[serde(default)]
    upload: UploadConfig,
}

impl MatisseConfig {
    /// Create a configuration from its parts.
    pub fn new(registry: RegistryConfig, upload: UploadConfig) -> Self {
        Self { registry, upload }
    }

    /// Load configuration from a specific TOML file.
    #[instrument]
    pub fn from_file(path: impl AsRef<Path> + std::fmt::Debug) -> MatisseResult<Self> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .map_err(|e| {
                MatisseError::from(ConfigError::new(format!(
                    "Failed to read configuration from {}: {}",
                    path.as_ref().display(),
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MatisseError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }

    /// Load configuration with precedence: user override > bundled default.
    ///
    /// Sources in order of precedence (later overrides earlier):
    /// 1. Bundled defaults (matisse.toml shipped with the library)
    /// 2. ./matisse.toml in the working directory (optional)
    #[instrument]
    pub fn load() -> MatisseResult<Self> {
        debug!("Loading configuration with precedence: current dir > bundled defaults");

        // Bundled default configuration
        const DEFAULT_CONFIG: &str = include_str!("../../../matisse.toml");

        Config::builder()
            .add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
            .add_source(File::with_name("matisse").required(false))
            .build()
            .map_err(|e| {
                MatisseError::from(ConfigError::new(format!(
                    "Failed to build configuration: {}",
                    e
                )))
            })?
            .try_deserialize()
            .map_err(|e| {
                MatisseError::from(ConfigError::new(format!(
                    "Failed to parse configuration: {}",
                    e
                )))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_defaults_match_type_defaults() {
        let loaded = MatisseConfig::load().unwrap();
        assert_eq!(*loaded.registry().max_payload_bytes(), 2 * 1024 * 1024);
        assert_eq!(*loaded.upload().timeout_secs(), 30);
    }
}
