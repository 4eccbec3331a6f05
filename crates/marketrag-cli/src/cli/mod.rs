//! CLI command definitions and dispatch for the `mrag` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod bundle_env;
pub mod ingest;
pub mod query;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use marketrag_infra::chunker::{DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};

/// Retrieval backend tooling for the market-news assistant.
#[derive(Parser)]
#[command(name = "mrag", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for verbose, -vv for debug/trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Split a document, embed its chunks, and insert them into the vector store.
    Ingest {
        /// Text or Markdown file to ingest.
        path: PathBuf,

        /// Target chunk size in characters.
        #[arg(long, default_value_t = DEFAULT_CHUNK_SIZE)]
        chunk_size: usize,

        /// Overlap between consecutive chunks in characters.
        #[arg(long, default_value_t = DEFAULT_CHUNK_OVERLAP)]
        chunk_overlap: usize,
    },

    /// Retrieve the stored documents most relevant to a query.
    Query {
        /// Free-text query.
        text: String,

        /// How many documents to return.
        #[arg(long)]
        top_k: Option<usize>,
    },

    /// Print the frontend bundler configuration for a build mode.
    #[command(name = "bundle-env")]
    BundleEnv {
        /// Build mode (selects the .env.{mode} files).
        #[arg(long, default_value = "production")]
        mode: String,

        /// Directory containing the .env files.
        #[arg(long, default_value = ".")]
        dir: PathBuf,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_bundle_env_defaults() {
        let cli = Cli::parse_from(["mrag", "bundle-env"]);
        match cli.command {
            Commands::BundleEnv { mode, dir } => {
                assert_eq!(mode, "production");
                assert_eq!(dir, PathBuf::from("."));
            }
            _ => panic!("expected bundle-env"),
        }
    }

    #[test]
    fn test_ingest_chunk_defaults() {
        let cli = Cli::parse_from(["mrag", "ingest", "notes.md"]);
        match cli.command {
            Commands::Ingest {
                chunk_size,
                chunk_overlap,
                ..
            } => {
                assert_eq!(chunk_size, 1000);
                assert_eq!(chunk_overlap, 200);
            }
            _ => panic!("expected ingest"),
        }
    }

    #[test]
    fn test_query_top_k_flag() {
        let cli = Cli::parse_from(["mrag", "query", "rates", "--top-k", "8"]);
        match cli.command {
            Commands::Query { text, top_k } => {
                assert_eq!(text, "rates");
                assert_eq!(top_k, Some(8));
            }
            _ => panic!("expected query"),
        }
    }
}
