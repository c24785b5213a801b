//! Configuration inspection.

use std::path::Path;

use crate::config::ConfigLoader;
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show current configuration (merged)
    Show,
    /// Show configuration file paths and whether they exist
    Path,
}

pub fn run(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Show => show_config(),
        ConfigCommands::Path => show_paths(),
    }
}

fn show_config() -> Result<()> {
    let config = ConfigLoader::load()?;
    let source = match &config.catalog.path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    };
    println!("# catalog: {source}");
    println!("{}", toml::to_string_pretty(&config)?);
    Ok(())
}

fn path_line(label: &str, path: &Path) -> String {
    let state = if path.exists() { "" } else { " (not found)" };
    format!("{label:<16}{}{state}", path.display())
}

fn show_paths() -> Result<()> {
    println!(
        "{}",
        path_line("User config:", &ConfigLoader::user_config_path())
    );
    println!(
        "{}",
        path_line("Project config:", &ConfigLoader::project_config_path())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn path_line_flags_missing_files() {
        let line = path_line("User config:", Path::new("/nonexistent/config.toml"));
        assert_eq!(line, "User config:    /nonexistent/config.toml (not found)");
    }

    #[test]
    fn path_line_existing_file_has_no_flag() {
        let file = tempfile::NamedTempFile::new().unwrap();
        let line = path_line("Project config:", file.path());
        assert!(!line.ends_with("(not found)"));
        assert!(line.starts_with("Project config: "));
    }
}
