//! Row-boundary reconstruction from raw horizontal rule segments.
//!
//! Statement renderers paint one visual table-row boundary as several short
//! collinear segments, often duplicated. Reconstruction removes exact
//! duplicates, sorts by position, and joins adjacent collinear segments back
//! into full boundary lines.

use crate::geometry::RuleSegment;

/// Default gap tolerance when joining collinear rule segments.
///
/// The decoder emits coordinates at 3-decimal precision, so two segments of
/// the same painted rule may disagree by up to a couple of thousandths.
pub const RULE_JOIN_TOLERANCE: f64 = 0.002;

/// A reconstructed table-row boundary line, merged from raw segments.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowRule {
    /// Left edge of the boundary.
    pub x: f64,
    /// Vertical position of the boundary.
    pub y: f64,
    /// Total merged length along the x axis.
    pub l: f64,
}

/// Round to 3 decimal places, matching the decoder's coordinate precision.
fn round3(v: f64) -> f64 {
    (v * 1000.0).round() / 1000.0
}

/// Remove exact duplicates (same `x`, `y`, `w`, `l`).
///
/// Keeps the first occurrence of each segment. Decoders frequently emit the
/// same painted rule twice (once per drawing pass).
pub fn dedupe_segments(segments: &[RuleSegment]) -> Vec<RuleSegment> {
    let mut kept: Vec<RuleSegment> = Vec::with_capacity(segments.len());

    for seg in segments {
        if !kept.iter().any(|k| k == seg) {
            kept.push(seg.clone());
        }
    }

    kept
}

/// Merge collinear segments into full row-boundary lines.
///
/// Segments are sorted by `y` then `x` and walked in order. A segment joins
/// the most recent rule at the same `y` when the rule's running right edge
/// (`x + l`, rounded to 3 decimals) is within `join_tolerance` of the
/// segment's `x`; joining extends the rule to the segment's right edge.
/// A same-`y` segment past the tolerance starts a new rule.
pub fn merge_segments(segments: &[RuleSegment], join_tolerance: f64) -> Vec<RowRule> {
    let mut sorted: Vec<RuleSegment> = segments.to_vec();
    sorted.sort_by(|a, b| {
        a.y.partial_cmp(&b.y)
            .unwrap()
            .then_with(|| a.x.partial_cmp(&b.x).unwrap())
    });

    let mut rules: Vec<RowRule> = Vec::new();

    for seg in &sorted {
        if let Some(last) = rules.last_mut() {
            let same_row = (last.y - seg.y).abs() < f64::EPSILON;
            if same_row && (round3(last.x + last.l) - seg.x).abs() <= join_tolerance {
                last.l = seg.x + seg.l - last.x;
                continue;
            }
        }
        rules.push(RowRule {
            x: seg.x,
            y: seg.y,
            l: seg.l,
        });
    }

    rules
}

/// Deduplicate and merge one page's raw segments into ordered row boundaries.
pub fn reconstruct_rules(segments: &[RuleSegment], join_tolerance: f64) -> Vec<RowRule> {
    merge_segments(&dedupe_segments(segments), join_tolerance)
}
