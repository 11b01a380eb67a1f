//! Shared builders for synthetic statement documents.
//!
//! Pages follow the layout of the real statements: a header line above the
//! table (anchoring the column boundary at x = 399), one rule segment per
//! row boundary, and row glyphs a couple of units below their rule.

#![allow(dead_code)]

use izvod::{Document, GlyphRun, PageContent, RuleSegment};

pub fn glyph(text: &str, x: f64, y: f64) -> GlyphRun {
    GlyphRun::new(text, x, y)
}

pub fn rule_seg(x: f64, y: f64, l: f64) -> RuleSegment {
    RuleSegment::new(x, y, 1.0, l)
}

/// Column header glyphs; "Odobrenje" at x = 400 puts the boundary at 399.
pub fn header_glyphs() -> Vec<GlyphRun> {
    vec![
        glyph("Datum", 10.0, 20.0),
        glyph("Iznos", 300.0, 20.0),
        glyph("Zaduzenje", 320.0, 20.0),
        glyph("Odobrenje", 400.0, 20.0),
    ]
}

/// One transaction row at band height `y`, with the amount glyph at `amount_x`.
pub fn row_glyphs(
    y: f64,
    code: &str,
    account: &str,
    amount: &str,
    amount_x: f64,
    date: &str,
) -> Vec<GlyphRun> {
    vec![
        glyph(code, 10.0, y),
        glyph(account, 60.0, y),
        glyph(amount, amount_x, y),
        glyph(date, 430.0, y),
    ]
}

pub fn page(glyphs: Vec<GlyphRun>, rules: Vec<RuleSegment>) -> PageContent {
    PageContent::new(glyphs, rules)
}

pub fn document(pages: Vec<PageContent>) -> Document {
    Document::new(pages)
}
