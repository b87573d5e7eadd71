//! `pig download` – generate a URL and save the image locally.

use anyhow::Result;
use std::path::{Path, PathBuf};

use pig_core::config::PigConfig;
use pig_core::download::{download_or_open, DownloadOutcome};
use pig_core::url_builder::{self, suggested_filename};

use super::generator_for;
use crate::cli::SelectionArgs;

pub async fn run_download(
    cfg: &PigConfig,
    selection: &SelectionArgs,
    download_dir: Option<&Path>,
) -> Result<()> {
    let mut generator = generator_for(cfg, selection)?;
    let dims = generator.size().dimensions;

    let url = if let Some(query) = &selection.query {
        url_builder::build_photo_search_url(dims, query)
    } else {
        println!("Generating {dims} image...");
        generator.generate().await;
        if let Some(message) = generator.error() {
            anyhow::bail!("{message}");
        }
        match generator.current_image() {
            Some(image) => image.url.clone(),
            None => anyhow::bail!("generation finished without an image"),
        }
    };

    let dir: PathBuf = download_dir
        .map(Path::to_path_buf)
        .or_else(|| cfg.download_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));
    let filename = suggested_filename(dims);

    // curl is blocking; keep it off the async runtime.
    let outcome = tokio::task::spawn_blocking({
        let url = url.clone();
        let dir = dir.clone();
        move || download_or_open(&url, &dir, &filename)
    })
    .await?;

    match outcome {
        DownloadOutcome::Saved(saved) => {
            println!("Saved {} ({} bytes)", saved.path.display(), saved.bytes);
        }
        DownloadOutcome::OpenedInBrowser { opened: true } => {
            println!("Download failed; opened {url} in your browser instead");
        }
        DownloadOutcome::OpenedInBrowser { opened: false } => {
            println!("Download failed; fetch it manually: {url}");
        }
    }
    Ok(())
}
