//! docshell CLI - build a themed HTML guide from AsciiDoc sources.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "docshell")]
#[command(about = "Build a themed HTML guide from AsciiDoc sources")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to site.toml config file
    #[arg(short, long, default_value = "site.toml")]
    config: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the web site afresh
    Build {
        /// Output directory (defaults to config or "www")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove generated shells and the output directory
    Clean,

    /// Convert new or revised documents only, then reassemble pages
    Update,

    /// Serve the built site locally
    Serve {
        /// Port to listen on (defaults to config or 8000)
        #[arg(short, long)]
        port: Option<u16>,

        /// Directory to serve (defaults to the output directory)
        #[arg(short, long)]
        dir: Option<PathBuf>,

        /// Open the site in a browser
        #[arg(long)]
        open: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt().with_env_filter(filter).with_target(false).init();

    let config = config::load_config(&cli.config)?;

    match cli.command {
        Commands::Build { output } => {
            commands::build::run(&config, output)?;
        }
        Commands::Clean => {
            commands::clean::run(&config)?;
        }
        Commands::Update => {
            commands::update::run(&config)?;
        }
        Commands::Serve { port, dir, open } => {
            let port = port.unwrap_or(config.serve.port);
            let dir = dir.unwrap_or_else(|| config.site.output.clone());
            commands::serve::run(port, dir, open).await?;
        }
    }

    Ok(())
}
