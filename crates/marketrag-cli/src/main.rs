//! marketrag CLI entry point.
//!
//! Binary name: `mrag`
//!
//! Parses CLI arguments, initializes tracing based on verbosity, then
//! dispatches to the appropriate command handler.

mod cli;

use clap::Parser;
use clap_complete::generate;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up tracing based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info,marketrag_core=debug,marketrag_infra=debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            generate(shell, &mut cmd, "mrag", &mut std::io::stdout());
        }

        Commands::BundleEnv { mode, dir } => {
            cli::bundle_env::run(&mode, &dir)?;
        }

        Commands::Ingest {
            path,
            chunk_size,
            chunk_overlap,
        } => {
            // Pick up credentials from a local .env if present.
            dotenvy::dotenv().ok();
            cli::ingest::run(&path, chunk_size, chunk_overlap, cli.json, cli.quiet).await?;
        }

        Commands::Query { text, top_k } => {
            dotenvy::dotenv().ok();
            cli::query::run(&text, top_k, cli.json).await?;
        }
    }

    Ok(())
}
