use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line word lookups.
#[derive(Debug, Parser)]
#[command(name = "whub-shell")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Query and load the WordHub word store")]
pub(crate) struct Cli {
    /// Configuration file (defaults to an optional `whub.toml`)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Answer one lookup request and print the response as JSON
    Query {
        /// Request payload, e.g. '{"letters": "eilrst"}'
        payload: String,
        /// Search this newline-separated word list instead of the database
        #[arg(short, long)]
        words: Option<PathBuf>,
        /// Pretty-print the response
        #[arg(short, long)]
        pretty: bool,
    },
    /// Load a newline-separated word list into the database
    Import {
        /// Word list file
        file: PathBuf,
    },
}
