//! Chrysanthium CLI entry point

use chrysanthium::cli::{Cli, Commands};
use chrysanthium::config::ConfigManager;
use chrysanthium::error::ChrysanthiumResult;
use clap::Parser;
use console::style;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", style("Error:").red().bold(), e);
            if let Some(hint) = e.hint() {
                eprintln!("{} {}", style("Hint:").yellow(), hint);
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> ChrysanthiumResult<()> {
    let cli = Cli::parse();

    let mut manager = match cli.config {
        Some(ref path) => ConfigManager::with_path(path.clone()),
        None => ConfigManager::new(),
    };
    if let Some(ref dir) = cli.state_dir {
        manager = manager.with_state_dir(dir.clone());
    }

    let config = manager.load().await?;

    // 0 = warn, 1 = info, 2+ = debug
    let filter = match cli.verbose {
        0 => EnvFilter::new("chrysanthium=warn"),
        1 => EnvFilter::new("chrysanthium=info"),
        _ => EnvFilter::new("chrysanthium=debug"),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    if config.general.json_logs() {
        subscriber.json().init();
    } else {
        subscriber.without_time().init();
    }

    debug!("Using config {}", manager.path().display());

    match cli.command {
        Commands::Quote(args) => {
            manager.ensure_state_dir().await?;
            chrysanthium::cli::commands::quote(args, &config, &manager).await
        }
        Commands::Authored(args) => chrysanthium::cli::commands::authored(args, &config).await,
        Commands::Build(args) => chrysanthium::cli::commands::build(args, &config).await,
        Commands::Cache(args) => chrysanthium::cli::commands::cache(args, &config, &manager).await,
        Commands::Config(args) => {
            chrysanthium::cli::commands::config(args, &config, &manager).await
        }
    }
}
