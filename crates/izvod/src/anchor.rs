//! Column-boundary anchoring from statement header vocabulary.
//!
//! Statement layouts differ in how they label the amount column, but every
//! layout places a credit header ("odobrenje") after it. The x position of
//! that header, minus a small adjustment, separates the claim (credit) side
//! of the amount column from the owes (debit) side.

use izvod_core::{GlyphRun, unescape};

use crate::parser::ParserOptions;

/// Find the credit-column boundary on one page, if its headers are present.
///
/// Scans the page's sorted glyphs for an amount-column header; from that
/// fragment onward in reading order, scans for the credit header. The
/// boundary is the credit header's x minus `options.boundary_adjust`.
/// Returns `None` when either header is missing on this page; without the
/// amount header, the credit header is not searched for at all.
pub fn locate_column_boundary(glyphs: &[GlyphRun], options: &ParserOptions) -> Option<f64> {
    let anchor = glyphs.iter().position(|g| {
        let text = unescape(&g.text);
        let trimmed = text.trim().to_lowercase();
        options.amount_headers.iter().any(|h| trimmed == *h)
    })?;

    let credit = glyphs[anchor..]
        .iter()
        .find(|g| unescape(&g.text).trim().to_lowercase() == options.credit_header)?;

    Some(credit.x - options.boundary_adjust)
}

/// Fold one page into the running boundary accumulator.
///
/// A page that finds its own anchor re-establishes the boundary — the
/// adjustment is re-applied to the new anchor glyph, not accumulated onto
/// the previous value. A page without an anchor carries the previous
/// boundary forward unchanged.
pub fn advance_column_boundary(
    previous: Option<f64>,
    glyphs: &[GlyphRun],
    options: &ParserOptions,
) -> Option<f64> {
    locate_column_boundary(glyphs, options).or(previous)
}
