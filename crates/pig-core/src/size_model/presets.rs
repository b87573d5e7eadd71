//! Fixed catalog of named size presets.

use super::Dimensions;

/// A named, fixed size offered for one-shot selection.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    /// Stable identifier used on the command line.
    pub slug: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Preset {
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }
}

/// The full catalog. Every entry is inside
/// [`MIN_DIMENSION`](super::MIN_DIMENSION)..=[`MAX_DIMENSION`](super::MAX_DIMENSION)
/// on both axes, so selecting a preset never needs validation.
pub static PRESETS: &[Preset] = &[
    Preset {
        slug: "small",
        label: "Small",
        width: 300,
        height: 200,
    },
    Preset {
        slug: "medium",
        label: "Medium",
        width: 400,
        height: 300,
    },
    Preset {
        slug: "large",
        label: "Large",
        width: 800,
        height: 600,
    },
    Preset {
        slug: "square-small",
        label: "Square Small",
        width: 250,
        height: 250,
    },
    Preset {
        slug: "square-large",
        label: "Square Large",
        width: 500,
        height: 500,
    },
    Preset {
        slug: "wide-banner",
        label: "Wide Banner",
        width: 1200,
        height: 400,
    },
];

/// Looks up a preset by slug, case-insensitively. Surrounding whitespace in
/// the input is ignored.
pub fn find_preset(slug: &str) -> Option<&'static Preset> {
    let slug = slug.trim();
    PRESETS.iter().find(|p| p.slug.eq_ignore_ascii_case(slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::size_model::{MAX_DIMENSION, MIN_DIMENSION};

    #[test]
    fn catalog_has_six_entries_in_range() {
        assert_eq!(PRESETS.len(), 6);
        for preset in PRESETS {
            assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&preset.width));
            assert!((MIN_DIMENSION..=MAX_DIMENSION).contains(&preset.height));
        }
    }

    #[test]
    fn find_preset_by_slug() {
        let preset = find_preset("square-large").unwrap();
        assert_eq!(preset.label, "Square Large");
        assert_eq!(preset.dimensions(), Dimensions::new(500, 500));
    }

    #[test]
    fn find_preset_is_case_insensitive_and_trims() {
        assert!(find_preset("Wide-Banner").is_some());
        assert!(find_preset("  small ").is_some());
    }

    #[test]
    fn find_preset_unknown_is_none() {
        assert!(find_preset("huge").is_none());
        assert!(find_preset("").is_none());
    }

    #[test]
    fn slugs_are_unique() {
        for (i, a) in PRESETS.iter().enumerate() {
            for b in &PRESETS[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }
}
