#![allow(clippy::print_stdout)]

mod args;
mod commands;

use crate::args::{Cli, Commands};
use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use whub::domain::config::ApiConfig;
use whub::kernel::config::load_config;
use whub_logger::{ConsoleTarget, Logger};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let cfg: ApiConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;

    // stdout carries the command's output.
    let mut logger = Logger::builder(env!("CARGO_PKG_NAME"))
        .console(Some(ConsoleTarget::Stderr))
        .level_name(&cfg.logging.level)?
        .json(cfg.logging.json);
    if let Some(path) = &cfg.logging.path {
        logger = logger.path(path);
    }
    let _log = logger.init()?;

    match cli.command {
        Commands::Query { payload, words, pretty } => {
            let response = commands::query(&cfg, &payload, words.as_deref()).await?;
            let output = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{output}");
            Ok(if response.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        Commands::Import { file } => {
            let report = commands::import(&cfg, &file).await?;
            println!("imported {} words, skipped {}", report.imported, report.skipped);
            Ok(ExitCode::SUCCESS)
        }
    }
}
