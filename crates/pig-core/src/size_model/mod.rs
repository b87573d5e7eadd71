//! Size selection and validation.
//!
//! Owns the active target dimensions and the preset/custom mode. Custom
//! input is kept as raw text while editing and silently repaired on commit:
//! unparsable values fall back to the previously committed axis value and
//! everything is clamped into `[MIN_DIMENSION, MAX_DIMENSION]`.

mod presets;

pub use presets::{find_preset, Preset, PRESETS};

/// Smallest accepted dimension in pixels.
pub const MIN_DIMENSION: u32 = 50;
/// Largest accepted dimension in pixels.
pub const MAX_DIMENSION: u32 = 2000;

/// Width committed before any user interaction.
pub const DEFAULT_WIDTH: u32 = 400;
/// Height committed before any user interaction.
pub const DEFAULT_HEIGHT: u32 = 300;

/// Target image dimensions in pixels. In range by construction once
/// produced by [`SizeModel`] or taken from a preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl std::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Axis selector for per-field custom input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

/// Clamps one dimension into `[MIN_DIMENSION, MAX_DIMENSION]`.
/// Identity for values already in range.
pub fn clamp_dimension(value: u32) -> u32 {
    value.clamp(MIN_DIMENSION, MAX_DIMENSION)
}

/// Active selection mode. A single tagged value, so preset and custom mode
/// cannot both be active at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SizeSelection {
    /// One of the fixed catalog entries.
    Preset(&'static Preset),
    /// Custom dimensions; per-axis raw text as typed, committed on demand.
    Custom {
        width_raw: String,
        height_raw: String,
    },
}

/// Snapshot of the model for display layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeState {
    pub dimensions: Dimensions,
    pub is_custom: bool,
}

/// Committed dimensions plus the selection mode driving them.
#[derive(Debug, Clone)]
pub struct SizeModel {
    dimensions: Dimensions,
    selection: SizeSelection,
}

impl Default for SizeModel {
    fn default() -> Self {
        Self {
            dimensions: Dimensions::new(DEFAULT_WIDTH, DEFAULT_HEIGHT),
            // Medium, which matches the default dimensions.
            selection: SizeSelection::Preset(&PRESETS[1]),
        }
    }
}

impl SizeModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Activates a catalog preset, replacing the committed dimensions with
    /// the preset's values. Presets are in range by construction, so no
    /// validation happens here.
    pub fn select_preset(&mut self, preset: &'static Preset) {
        self.dimensions = preset.dimensions();
        self.selection = SizeSelection::Preset(preset);
    }

    /// Stores raw text for one axis and switches to custom mode. Nothing is
    /// parsed or clamped until [`SizeModel::commit_custom`], so editing
    /// stays responsive through intermediate invalid states.
    pub fn set_custom_dimension(&mut self, axis: Axis, raw: &str) {
        let (mut width_raw, mut height_raw) = match &self.selection {
            SizeSelection::Custom {
                width_raw,
                height_raw,
            } => (width_raw.clone(), height_raw.clone()),
            SizeSelection::Preset(_) => (
                self.dimensions.width.to_string(),
                self.dimensions.height.to_string(),
            ),
        };
        match axis {
            Axis::Width => width_raw = raw.to_string(),
            Axis::Height => height_raw = raw.to_string(),
        }
        self.selection = SizeSelection::Custom {
            width_raw,
            height_raw,
        };
    }

    /// Parses and commits the pending custom values. Each axis is repaired
    /// independently: unparsable input falls back to the previously
    /// committed value, parsed values are clamped into range. The raw
    /// strings are rewritten to the committed values so displays reflect
    /// the repaired result, not the out-of-range input. Never fails.
    pub fn commit_custom(&mut self) {
        let (width_raw, height_raw) = match &self.selection {
            SizeSelection::Custom {
                width_raw,
                height_raw,
            } => (width_raw.as_str(), height_raw.as_str()),
            // Nothing pending to commit.
            SizeSelection::Preset(_) => return,
        };

        let width = parse_axis(width_raw, self.dimensions.width);
        let height = parse_axis(height_raw, self.dimensions.height);

        self.dimensions = Dimensions::new(width, height);
        self.selection = SizeSelection::Custom {
            width_raw: width.to_string(),
            height_raw: height.to_string(),
        };
    }

    pub fn current(&self) -> SizeState {
        SizeState {
            dimensions: self.dimensions,
            is_custom: matches!(self.selection, SizeSelection::Custom { .. }),
        }
    }

    pub fn selection(&self) -> &SizeSelection {
        &self.selection
    }
}

/// Parses one axis value, clamped into range; `fallback` (the previously
/// committed value, always in range) is used for anything unparsable.
fn parse_axis(raw: &str, fallback: u32) -> u32 {
    match raw.trim().parse::<i64>() {
        Ok(v) => clamp_dimension(v.clamp(0, i64::from(u32::MAX)) as u32),
        Err(_) => fallback,
    }
}
