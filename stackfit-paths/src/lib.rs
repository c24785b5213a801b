//! XDG Base Directory paths for stackfit.
//!
//! CLI tools should use XDG paths for cross-platform consistency,
//! not platform-native paths.

use std::path::PathBuf;

/// Name of the directory stackfit keeps its files under.
pub const APP_DIR: &str = "stackfit";

/// Get the stackfit config directory.
///
/// Returns `$XDG_CONFIG_HOME/stackfit` if set, otherwise `~/.config/stackfit`.
///
/// # Examples
///
/// ```
/// use stackfit_paths::config_dir;
///
/// let config = config_dir();
/// let catalog = config.join("catalog.toml");
/// ```
pub fn config_dir() -> PathBuf {
    if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg_config).join(APP_DIR)
    } else if let Some(home) = dirs::home_dir() {
        home.join(".config").join(APP_DIR)
    } else {
        PathBuf::from(".config").join(APP_DIR)
    }
}

/// Path of the user-level config file.
pub fn user_config_file() -> PathBuf {
    config_dir().join("config.toml")
}
