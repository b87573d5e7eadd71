//! `pig generate` – build and print an image URL.

use anyhow::Result;
use pig_core::config::PigConfig;
use pig_core::url_builder;

use super::generator_for;
use crate::cli::SelectionArgs;

pub async fn run_generate(cfg: &PigConfig, selection: &SelectionArgs) -> Result<()> {
    let mut generator = generator_for(cfg, selection)?;
    let dims = generator.size().dimensions;

    // The alternative keyword-photo service is a plain URL mapping with no
    // generation lifecycle around it.
    if let Some(query) = &selection.query {
        println!("{}", url_builder::build_photo_search_url(dims, query));
        return Ok(());
    }

    println!("Generating {dims} image...");
    generator.generate().await;

    if let Some(message) = generator.error() {
        anyhow::bail!("{message}");
    }
    let image = generator
        .current_image()
        .ok_or_else(|| anyhow::anyhow!("generation finished without an image"))?;

    // The URL goes to stdout on its own line so it can be piped or copied.
    println!("{}", image.url);
    println!("Dimensions: {}", image.source_dimensions);
    Ok(())
}
