//! `pig presets` – print the fixed size catalog.

use pig_core::size_model::PRESETS;

pub fn run_presets() {
    for preset in PRESETS {
        println!(
            "{:<14} {:<14} {}x{}",
            preset.slug, preset.label, preset.width, preset.height
        );
    }
}
