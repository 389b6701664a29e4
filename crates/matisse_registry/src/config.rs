//! Registry configuration.

use serde::{Deserialize, Serialize};

/// Default payload ceiling: 2 MiB.
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 2 * 1024 * 1024;

/// Configuration for the local asset registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_getters::Getters)]
pub struct RegistryConfig {
    /// Maximum accepted payload size in bytes.
    ///
    /// Payloads above this are rejected at `create` time with
    /// `PayloadTooLarge`; the reference is never minted.
    #[serde(default = "default_max_payload_bytes")]
    max_payload_bytes: usize,
}

fn default_max_payload_bytes() -> usize {
    DEFAULT_MAX_PAYLOAD_BYTES
}

impl RegistryConfig {
    /// Create a configuration with a custom payload ceiling.
    pub fn with_max_payload_bytes(max_payload_bytes: usize) -> Self {
        Self { max_payload_bytes }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload_bytes(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_ceiling_is_two_mebibytes() {
        let config = RegistryConfig::default();
        assert_eq!(*config.max_payload_bytes(), 2 * 1024 * 1024);
    }
}
