use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration as stored in TOML files (with optional fields for merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawStackfitConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub contact: RawContactConfig,
}

/// Contact config as stored in TOML (optional fields for proper merging)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RawContactConfig {
    /// Delay of the mock submitter in milliseconds
    pub submit_delay_ms: Option<u64>,
}

/// Final configuration with defaults applied
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StackfitConfig {
    #[serde(default)]
    pub catalog: CatalogConfig,

    #[serde(default)]
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    /// Custom catalog file; the built-in catalog is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactConfig {
    /// Delay of the mock submitter in milliseconds
    pub submit_delay_ms: u64,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: DEFAULT_SUBMIT_DELAY_MS,
        }
    }
}

/// Default delay before a mock contact submission completes
pub const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;
