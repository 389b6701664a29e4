//! Tracing initialization.

use matisse_error::{ConfigError, MatisseResult};
use std::env;
use tracing_subscriber::EnvFilter;

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Log level filter (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
}

impl ObservabilityConfig {
    /// Create a configuration, honoring `RUST_LOG` when set.
    pub fn new() -> Self {
        Self {
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
        }
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Initialize the tracing subscriber with default configuration.
pub fn init_observability() -> MatisseResult<()> {
    init_observability_with_config(ObservabilityConfig::default())
}

/// Initialize the tracing subscriber with custom configuration.
///
/// Fails if a global subscriber is already installed.
pub fn init_observability_with_config(config: ObservabilityConfig) -> MatisseResult<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .map_err(|e| ConfigError::new(format!("Invalid log filter '{}': {}", config.log_level, e)))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    let result = if config.json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    result.map_err(|e| ConfigError::new(format!("Failed to install subscriber: {e}")))?;

    tracing::debug!(level = %config.log_level, json = config.json_logs, "Observability initialized");
    Ok(())
}
