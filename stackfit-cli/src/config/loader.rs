use super::types::{
    CatalogConfig, ContactConfig, DEFAULT_SUBMIT_DELAY_MS, RawContactConfig, RawStackfitConfig,
    StackfitConfig,
};
use anyhow::{Context, Result};
use stackfit_core::Catalog;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load merged configuration (user + project)
    pub fn load() -> Result<StackfitConfig> {
        Self::load_layers(&Self::user_config_path(), &Self::project_config_path())
    }

    fn load_layers(user_path: &Path, project_path: &Path) -> Result<StackfitConfig> {
        let mut raw = RawStackfitConfig::default();

        // Layer 1: User config
        if user_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(user_path)?);
        }

        // Layer 2: Project config
        if project_path.exists() {
            raw = Self::merge_raw(raw, Self::read_raw(project_path)?);
        }

        Ok(Self::finalize(raw))
    }

    fn read_raw(path: &Path) -> Result<RawStackfitConfig> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let raw = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        debug!(path = %path.display(), "Loaded config layer");
        Ok(raw)
    }

    /// Get user config path (`$XDG_CONFIG_HOME/stackfit/config.toml`)
    pub fn user_config_path() -> PathBuf {
        stackfit_paths::user_config_file()
    }

    /// Get project config path
    /// Can be overridden with STACKFIT_PROJECT_CONFIG_DIR env var (useful for isolated tests)
    pub fn project_config_path() -> PathBuf {
        if let Ok(dir) = std::env::var("STACKFIT_PROJECT_CONFIG_DIR") {
            PathBuf::from(dir).join("config.toml")
        } else {
            PathBuf::from(".stackfit/config.toml")
        }
    }

    /// Merge two raw configs (overlay values override base only if explicitly set)
    fn merge_raw(base: RawStackfitConfig, overlay: RawStackfitConfig) -> RawStackfitConfig {
        RawStackfitConfig {
            catalog: CatalogConfig {
                path: overlay.catalog.path.or(base.catalog.path),
            },
            contact: RawContactConfig {
                submit_delay_ms: overlay
                    .contact
                    .submit_delay_ms
                    .or(base.contact.submit_delay_ms),
            },
        }
    }

    /// Convert raw config to final config with defaults applied
    fn finalize(raw: RawStackfitConfig) -> StackfitConfig {
        StackfitConfig {
            catalog: raw.catalog,
            contact: ContactConfig {
                submit_delay_ms: raw
                    .contact
                    .submit_delay_ms
                    .unwrap_or(DEFAULT_SUBMIT_DELAY_MS),
            },
        }
    }

    /// Resolve the catalog for this run.
    ///
    /// A `--catalog` override wins over `catalog.path` from config; with
    /// neither set the built-in catalog is used.
    pub fn load_catalog(config: &StackfitConfig, cli_override: Option<&Path>) -> Result<Catalog> {
        match cli_override.or(config.catalog.path.as_deref()) {
            Some(path) => Catalog::load(path)
                .with_context(|| format!("Failed to load catalog {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }
}
