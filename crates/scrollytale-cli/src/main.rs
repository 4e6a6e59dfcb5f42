use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use scrollytale_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "scrollytale")]
#[command(author, version, about = "A scrollytelling section-scroll demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Disable audio cues
    #[arg(long)]
    no_audio: bool,

    /// Number of sections in the demo story
    #[arg(long, value_name = "N")]
    sections: Option<usize>,

    /// Path to a config file (defaults to the user config location)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the scrollytelling view (default)
    Run,
    /// Print the effective configuration as TOML
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    let cli = Cli::parse();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from(path)?,
        None => AppConfig::load()?,
    };
    if cli.no_audio {
        config.audio.enabled = false;
    }

    match cli.command {
        Some(Commands::Config) => {
            println!("{}", toml::to_string_pretty(&config)?);
            Ok(())
        }
        Some(Commands::Run) | None => commands::run::run(config, cli.sections).await,
    }
}
