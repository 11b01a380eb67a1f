//! Geometric primitives produced by the external document decoder.
//!
//! Coordinates follow the decoder convention: `x` grows rightward, `y` grows
//! downward from the top of the page. The parser never mutates decoder
//! output; it sorts and merges its own working copies.

/// A positioned text fragment on a page.
///
/// The decoder may emit `text` percent-encoded; see [`crate::text::unescape`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphRun {
    /// Text content as emitted by the decoder.
    pub text: String,
    /// Left edge of the fragment.
    pub x: f64,
    /// Top edge of the fragment (distance from the top of the page).
    pub y: f64,
}

impl GlyphRun {
    pub fn new(text: impl Into<String>, x: f64, y: f64) -> Self {
        Self {
            text: text.into(),
            x,
            y,
        }
    }
}

/// A raw horizontal rule fragment.
///
/// Several segments may together paint one visual table-row boundary;
/// [`crate::rules::merge_segments`] reconstructs the full boundary lines.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSegment {
    /// Left edge of the segment.
    pub x: f64,
    /// Vertical position of the segment.
    pub y: f64,
    /// Stroke width. Only consulted for exact-duplicate detection.
    pub w: f64,
    /// Length of the segment along the x axis.
    pub l: f64,
}

impl RuleSegment {
    pub fn new(x: f64, y: f64, w: f64, l: f64) -> Self {
        Self { x, y, w, l }
    }
}

/// Sort glyph runs into reading order: top-to-bottom, then left-to-right.
pub fn sort_reading_order(glyphs: &mut [GlyphRun]) {
    glyphs.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap()
            .then_with(|| a.x.partial_cmp(&b.x).unwrap())
    });
}
