//! Subcommand implementations.

mod download;
mod generate;
mod presets;

pub use download::run_download;
pub use generate::run_generate;
pub use presets::run_presets;

use anyhow::Result;
use pig_core::config::PigConfig;
use pig_core::generator::Generator;
use pig_core::size_model::{find_preset, Axis, PRESETS};

use crate::cli::SelectionArgs;

/// Builds a generator reflecting the requested size and caption. Unknown
/// preset slugs are the one selection error that is surfaced rather than
/// repaired, since there is nothing sensible to repair them to.
pub(super) fn generator_for(cfg: &PigConfig, selection: &SelectionArgs) -> Result<Generator> {
    let mut generator = Generator::new(cfg);

    if let Some(slug) = &selection.preset {
        let preset = find_preset(slug).ok_or_else(|| {
            let slugs: Vec<&str> = PRESETS.iter().map(|p| p.slug).collect();
            anyhow::anyhow!("unknown preset '{slug}' (available: {})", slugs.join(", "))
        })?;
        generator.select_preset(preset);
    } else if selection.width.is_some() || selection.height.is_some() {
        if let Some(raw) = &selection.width {
            generator.set_custom_dimension(Axis::Width, raw);
        }
        if let Some(raw) = &selection.height {
            generator.set_custom_dimension(Axis::Height, raw);
        }
        generator.commit_custom();
    }

    if let Some(text) = &selection.text {
        generator.set_caption(text);
    }

    Ok(generator)
}
