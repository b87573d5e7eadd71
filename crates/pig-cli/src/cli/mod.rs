//! CLI for the pig placeholder-image generator.

mod commands;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use pig_core::config;
use std::path::PathBuf;

use commands::{run_download, run_generate, run_presets};

/// Top-level CLI for the pig placeholder-image generator.
#[derive(Debug, Parser)]
#[command(name = "pig")]
#[command(about = "pig: placeholder image URL generator and fetcher", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// Size and caption flags shared by `generate` and `download`.
#[derive(Debug, Args)]
pub struct SelectionArgs {
    /// Catalog preset slug (see `pig presets`).
    #[arg(long, conflicts_with_all = ["width", "height"])]
    pub preset: Option<String>,

    /// Custom width in pixels. Repaired, never rejected: non-numeric input
    /// falls back to the previous value and everything is clamped into
    /// [50, 2000].
    #[arg(long)]
    pub width: Option<String>,

    /// Custom height in pixels; repaired like --width.
    #[arg(long)]
    pub height: Option<String>,

    /// Caption text rendered into the image (selects the text endpoint).
    #[arg(long)]
    pub text: Option<String>,

    /// Keywords for the alternative photo-search endpoint.
    #[arg(long, conflicts_with = "text")]
    pub query: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List the fixed size presets.
    Presets,

    /// Generate an image URL for the selected size and print it.
    Generate {
        #[command(flatten)]
        selection: SelectionArgs,
    },

    /// Generate an image URL and download the image to disk.
    Download {
        #[command(flatten)]
        selection: SelectionArgs,

        /// Directory to save into (default: config `download_dir`, else the
        /// current directory).
        #[arg(long, value_name = "DIR")]
        download_dir: Option<PathBuf>,
    },
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Presets => run_presets(),
            CliCommand::Generate { selection } => run_generate(&cfg, &selection).await?,
            CliCommand::Download {
                selection,
                download_dir,
            } => run_download(&cfg, &selection, download_dir.as_deref()).await?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
