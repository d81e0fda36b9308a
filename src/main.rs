use clap::Parser;
use json_helpers::{
    config::{Config, ConfigLoadSaveError, DEFAULT_CONFIG_PATH},
    LoadError,
};
use std::{path::PathBuf, process};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        process::exit(1);
    }
}

#[derive(Debug, Error)]
pub enum MainError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("Failed to load the config: {0}")]
    Config(#[from] ConfigLoadSaveError),
}

#[derive(Debug, clap::Parser)]
#[command(author, version, about = "Print and check JSON files", long_about = None)]
struct Args {
    #[arg(value_enum)]
    pub mode: Mode,

    /// JSON file to operate on
    pub path: PathBuf,

    /// TOML config file, defaults apply if it doesn't exist
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, clap::ValueEnum)]
enum Mode {
    /// Pretty-print the file as two-space indented JSON
    Print,
    /// Only check that the file loads
    Check,
}

async fn run() -> Result<(), MainError> {
    let args = Args::parse();

    let config = Config::load_or_default(&args.config).await?;
    tracing::debug!(?config, mode = ?args.mode, "starting");

    match args.mode {
        Mode::Print => cli::print(&args.path, &config).await,
        Mode::Check => cli::check(&args.path).await,
    }
}
