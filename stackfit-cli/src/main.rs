use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;

use config::ConfigLoader;

#[derive(Parser)]
#[command(name = "stackfit", about = "See how well your operational stack is covered")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use this catalog file instead of the configured or built-in one
    #[arg(long, global = true, value_name = "PATH")]
    catalog: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Walk through the interactive stack wizard (default)
    Wizard,
    /// Assess a list of option ids without prompting
    Assess(commands::assess::AssessArgs),
    /// List categories and options
    Catalog(commands::catalog::CatalogArgs),
    /// Manage configuration
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let settings = ConfigLoader::load()?;
    let catalog = || ConfigLoader::load_catalog(&settings, cli.catalog.as_deref());

    match cli.command.unwrap_or(Commands::Wizard) {
        Commands::Wizard => commands::wizard::run(catalog()?, &settings).await,
        Commands::Assess(args) => commands::assess::run(args, catalog()?),
        Commands::Catalog(args) => commands::catalog::run(args, catalog()?),
        Commands::Config(args) => commands::config::run(args),
    }
}
