//! CLI for scid, the SoundCloud ID resolver.

mod commands;
mod terminal;

use anyhow::Result;
use clap::{Parser, Subcommand};
use scid_core::config;

use commands::{run_interactive, run_resolve};

/// Top-level CLI for scid.
#[derive(Debug, Parser)]
#[command(name = "scid")]
#[command(about = "scid: resolve SoundCloud URLs to numeric IDs", long_about = None)]
pub struct Cli {
    /// Client credential to send instead of the configured one.
    #[arg(long, global = true, value_name = "ID")]
    pub client_id: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Resolve one SoundCloud URL and print its ID.
    Resolve {
        /// Public SoundCloud URL (track, playlist or user).
        url: String,
    },

    /// Read one URL per line from stdin and resolve each.
    Interactive,
}

impl CliCommand {
    /// Runs the parsed command. Ok(false) means the final screen shows an error.
    pub async fn run_from_args() -> Result<bool> {
        let cli = Cli::parse();
        let mut cfg = config::load_or_init()?;
        if let Some(client_id) = cli.client_id {
            cfg.client_id = client_id;
        }
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Resolve { url } => run_resolve(&cfg, &url).await,
            CliCommand::Interactive => run_interactive(&cfg).await,
        }
    }
}

#[cfg(test)]
mod tests;
