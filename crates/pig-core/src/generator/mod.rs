//! Generation state machine.
//!
//! Drives the `Idle → Generating → Ready | Failed` lifecycle around the
//! size model. Size changes invalidate the current image, and a completion
//! whose token was superseded is dropped, so a stale result can never land
//! next to a newer selection (last writer wins).

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;
use url::Url;

use crate::config::PigConfig;
use crate::size_model::{Axis, Dimensions, Preset, SizeModel, SizeState};
use crate::url_builder;

/// User-visible message for unexpected generation failures.
pub const GENERATION_ERROR_MESSAGE: &str = "Failed to generate image. Please try again.";

/// A single generation attempt: dimensions plus optional caption, captured
/// at the moment the user triggered it. Never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub dimensions: Dimensions,
    /// Caption after trimming; whitespace-only input counts as absent.
    pub caption: Option<String>,
}

impl GenerationRequest {
    pub fn new(dimensions: Dimensions, caption: &str) -> Self {
        let caption = caption.trim();
        Self {
            dimensions,
            caption: (!caption.is_empty()).then(|| caption.to_string()),
        }
    }
}

/// A generated image reference: the service URL plus the dimensions it was
/// built from, kept together so a display can never pair a stale URL with
/// a newer selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedImage {
    pub url: String,
    pub source_dimensions: Dimensions,
}

/// Lifecycle of the generate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationState {
    Idle,
    /// A generation is in flight; `token` identifies it so superseded
    /// completions can be discarded.
    Generating { token: u64 },
    Ready(GeneratedImage),
    Failed(String),
}

/// Façade over the size model and the generation lifecycle. All mutation
/// comes from sequential user-initiated events; the only suspension point
/// is the minimum visible delay inside [`Generator::generate`].
#[derive(Debug)]
pub struct Generator {
    size: SizeModel,
    caption: String,
    state: GenerationState,
    next_token: u64,
    min_delay: Duration,
    rng: StdRng,
}

impl Generator {
    /// Creates a generator with an entropy-seeded RNG.
    pub fn new(cfg: &PigConfig) -> Self {
        Self::with_rng(cfg, StdRng::from_entropy())
    }

    /// Creates a generator with an explicit RNG, for deterministic tests.
    pub fn with_rng(cfg: &PigConfig, rng: StdRng) -> Self {
        Self {
            size: SizeModel::new(),
            caption: String::new(),
            state: GenerationState::Idle,
            next_token: 0,
            min_delay: Duration::from_millis(cfg.min_delay_ms),
            rng,
        }
    }

    pub fn size(&self) -> SizeState {
        self.size.current()
    }

    pub fn caption(&self) -> &str {
        &self.caption
    }

    /// Switches to a catalog preset and drops any current image.
    pub fn select_preset(&mut self, preset: &'static Preset) {
        self.size.select_preset(preset);
        self.invalidate();
    }

    /// Stores raw custom input for one axis. Not committed yet, so the
    /// current image survives until [`Generator::commit_custom`].
    pub fn set_custom_dimension(&mut self, axis: Axis, raw: &str) {
        self.size.set_custom_dimension(axis, raw);
    }

    /// Commits pending custom input and drops any current image.
    pub fn commit_custom(&mut self) {
        self.size.commit_custom();
        self.invalidate();
    }

    pub fn set_caption(&mut self, text: &str) {
        self.caption = text.to_string();
    }

    /// Drops the current image (or error) and supersedes any in-flight
    /// generation, so its completion will be discarded.
    pub fn invalidate(&mut self) {
        self.state = GenerationState::Idle;
    }

    pub fn state(&self) -> &GenerationState {
        &self.state
    }

    pub fn current_image(&self) -> Option<&GeneratedImage> {
        match &self.state {
            GenerationState::Ready(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_generating(&self) -> bool {
        matches!(self.state, GenerationState::Generating { .. })
    }

    /// User-visible error message, if the last generation failed.
    pub fn error(&self) -> Option<&str> {
        match &self.state {
            GenerationState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Marks a generation as started and returns its token.
    pub fn begin_generation(&mut self) -> u64 {
        let token = self.next_token;
        self.next_token += 1;
        self.state = GenerationState::Generating { token };
        token
    }

    /// Applies the outcome of generation `token`. Outcomes whose token was
    /// superseded by a newer generation or a size change are discarded.
    pub fn complete_generation(&mut self, token: u64, outcome: Result<GeneratedImage>) {
        match self.state {
            GenerationState::Generating { token: current } if current == token => {}
            _ => {
                tracing::debug!(token, "discarding superseded generation");
                return;
            }
        }
        match outcome {
            Ok(image) => self.state = GenerationState::Ready(image),
            Err(err) => {
                tracing::error!("image generation failed: {err:#}");
                self.state = GenerationState::Failed(GENERATION_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Runs one full generation: begin, build the URL, hold the minimum
    /// visible delay, complete. The delay is perceived-latency smoothing so
    /// an instant URL swap doesn't flash; it is not a real dependency.
    ///
    /// Failures never propagate: they land in [`GenerationState::Failed`]
    /// with a user-visible message and are logged for diagnostics.
    pub async fn generate(&mut self) {
        let token = self.begin_generation();
        let outcome = self.build_current();
        tokio::time::sleep(self.min_delay).await;
        self.complete_generation(token, outcome);
    }

    /// Builds an image reference for the current selection and caption.
    fn build_current(&mut self) -> Result<GeneratedImage> {
        let request = GenerationRequest::new(self.size.current().dimensions, &self.caption);
        let url = url_builder::build_image_url(
            request.dimensions,
            request.caption.as_deref().unwrap_or(""),
            &mut self.rng,
        );
        // Formatting cannot normally produce an invalid URL; parse anyway so
        // a bad build surfaces as Failed instead of a bogus link.
        Url::parse(&url).context("built an unparsable image URL")?;
        Ok(GeneratedImage {
            url,
            source_dimensions: request.dimensions,
        })
    }
}
