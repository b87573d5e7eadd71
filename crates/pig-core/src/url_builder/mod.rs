//! Placeholder-image URL construction.
//!
//! Maps validated dimensions plus optional caption text to a fully
//! qualified URL against one of the third-party image services. Pure
//! string formatting: no network I/O here, and no clamping either —
//! out-of-range dimensions pass through untouched, since validation is
//! `size_model`'s single job.

use crate::size_model::Dimensions;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;

/// Text-rendering endpoint, used when a caption is present.
const PLACEHOLD_BASE: &str = "https://placehold.co";
/// Random-photo endpoint, used when no caption is given.
const PICSUM_BASE: &str = "https://picsum.photos";
/// Keyword-photo endpoint (alternative service).
const UNSPLASH_BASE: &str = "https://source.unsplash.com";

/// Background color for rendered caption text.
const TEXT_BACKGROUND: &str = "667eea";
/// Foreground color for rendered caption text.
const TEXT_FOREGROUND: &str = "ffffff";

/// Exclusive upper bound for the picsum cache-busting seed.
const SEED_BOUND: u32 = 1000;

/// Query-component encode set: everything except ASCII alphanumerics and
/// the unreserved marks `-_.!~*'()` is percent-encoded, so decoding the
/// parameter recovers the input exactly (spaces become `%20`, not `+`).
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Builds the image URL for `dims` and optional caption text.
///
/// A caption that is non-empty after trimming selects the text-rendering
/// endpoint. Otherwise the random-photo endpoint is used with a fresh seed
/// drawn from `rng` on every call, so repeated generations with identical
/// dimensions still vary.
pub fn build_image_url(dims: Dimensions, caption: &str, rng: &mut impl Rng) -> String {
    let caption = caption.trim();
    if !caption.is_empty() {
        let encoded = utf8_percent_encode(caption, QUERY_COMPONENT);
        return format!(
            "{PLACEHOLD_BASE}/{}x{}/{TEXT_BACKGROUND}/{TEXT_FOREGROUND}?text={encoded}",
            dims.width, dims.height
        );
    }

    let seed = rng.gen_range(0..SEED_BOUND);
    format!("{PICSUM_BASE}/{}/{}?random={seed}", dims.width, dims.height)
}

/// Builds a keyword-photo URL against the alternative service. An empty or
/// whitespace-only query falls back to `nature`.
pub fn build_photo_search_url(dims: Dimensions, query: &str) -> String {
    let query = query.trim();
    let query = if query.is_empty() { "nature" } else { query };
    format!(
        "{UNSPLASH_BASE}/{}x{}/?{}",
        dims.width,
        dims.height,
        utf8_percent_encode(query, QUERY_COMPONENT)
    )
}

/// Suggested local filename for a generated image.
pub fn suggested_filename(dims: Dimensions) -> String {
    format!("placeholder-{}x{}.jpg", dims.width, dims.height)
}
