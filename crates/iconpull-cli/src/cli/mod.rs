//! CLI for iconpull.

mod args;
mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use iconpull_core::config::{self, IconpullConfig};
use std::path::PathBuf;

pub use args::{CollectionArgs, FetchArgs};
use commands::{run_fetch, run_list, run_plan};

/// Top-level CLI for iconpull.
#[derive(Debug, Parser)]
#[command(name = "iconpull")]
#[command(about = "iconpull: download every SVG of a paginated icon collection", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/iconpull/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Discover every icon in the page range and download it.
    Fetch(FetchArgs),

    /// Print the listing page URLs for a page range (no network).
    Plan(CollectionArgs),

    /// Discover icons and print `url  filename` without downloading.
    List(CollectionArgs),
}

/// How a command finished, mapped to the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    /// Some assets failed and `--strict` was given.
    Partial,
    /// Interrupted by Ctrl-C.
    Aborted,
}

impl RunStatus {
    pub fn exit_code(self) -> i32 {
        match self {
            RunStatus::Success => 0,
            RunStatus::Partial => 2,
            RunStatus::Aborted => 130,
        }
    }
}

impl CliCommand {
    pub async fn run_from_args() -> Result<RunStatus> {
        let cli = Cli::parse();
        let cfg = load_config(cli.config.as_deref())?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch(args) => run_fetch(&cfg, args).await,
            CliCommand::Plan(args) => run_plan(&cfg, &args),
            CliCommand::List(args) => run_list(&cfg, args).await,
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<IconpullConfig> {
    match path {
        Some(p) => config::load_from(p),
        None => config::load_or_init(),
    }
}

#[cfg(test)]
mod tests;
