//! The statement parsing pipeline.
//!
//! One invocation consumes one decoded document and produces one
//! [`ParseResult`] or one [`ParseError`]; there are no partial results. The
//! column boundary is the only state shared across pages, threaded through
//! the loop as an explicit accumulator.

use izvod_core::{
    FieldPatterns, GlyphRun, ParseResult, RULE_JOIN_TOLERANCE, assign_bands, reconstruct_rules,
    sort_reading_order, unescape,
};

use crate::anchor::advance_column_boundary;
use crate::document::Document;
use crate::error::ParseError;
use crate::extract::extract_record;

#[cfg(feature = "tracing")]
use tracing::debug;

/// Pipeline tolerances and header vocabulary.
///
/// The defaults reproduce the statement layouts this parser was built for;
/// the knobs exist for layouts that label columns differently or render
/// rules at a different coordinate precision.
#[derive(Debug, Clone)]
pub struct ParserOptions {
    /// Gap tolerance when joining collinear rule segments.
    pub rule_join_tolerance: f64,
    /// Offset subtracted from the credit header's x to form the boundary.
    pub boundary_adjust: f64,
    /// Amount-column header texts (trimmed, lowercase). Layouts vary.
    pub amount_headers: Vec<String>,
    /// Credit-column header text (trimmed, lowercase).
    pub credit_header: String,
}

impl Default for ParserOptions {
    fn default() -> Self {
        Self {
            rule_join_tolerance: RULE_JOIN_TOLERANCE,
            boundary_adjust: 1.0,
            amount_headers: vec![
                "iznos".to_string(),
                "iznos u rsd".to_string(),
                "poreklo naloga".to_string(),
            ],
            credit_header: "odobrenje".to_string(),
        }
    }
}

/// Parse one decoded statement document into transaction records.
///
/// Per page: sort a working copy of the glyphs into reading order, advance
/// the column-boundary accumulator (fatal if no boundary exists yet and the
/// page has no anchor), reconstruct row boundaries from the rule segments,
/// assign glyphs to row bands, and extract a record from every band that
/// fully resolves. Records accumulate in page order then row order.
///
/// Independently, the first page is scanned in reading order for the
/// statement holder's own account number; its absence is not an error.
pub fn parse_statement(
    document: &Document,
    options: &ParserOptions,
) -> Result<ParseResult, ParseError> {
    let patterns = FieldPatterns::new();
    let mut boundary: Option<f64> = None;
    let mut items = Vec::new();

    for (page_index, page) in document.pages.iter().enumerate() {
        let mut glyphs = page.glyphs.clone();
        sort_reading_order(&mut glyphs);

        boundary = advance_column_boundary(boundary, &glyphs, options);
        let Some(boundary_x) = boundary else {
            return Err(ParseError::DocumentStructure { page: page_index });
        };

        #[cfg(feature = "tracing")]
        debug!(page = page_index, boundary = boundary_x, "column boundary");

        let rules = reconstruct_rules(&page.rules, options.rule_join_tolerance);
        let bands = assign_bands(&glyphs, &rules);

        for band in &bands {
            if let Some(record) = extract_record(band, boundary_x, &patterns, page_index)? {
                items.push(record);
            }
        }

        #[cfg(feature = "tracing")]
        debug!(
            page = page_index,
            bands = bands.len(),
            items = items.len(),
            "page processed"
        );
    }

    // A document that never establishes a boundary is structurally
    // unparseable; with zero pages the per-page check above never runs.
    if boundary.is_none() {
        return Err(ParseError::DocumentStructure { page: 0 });
    }

    let statement_account = document.pages.first().and_then(|page| {
        let mut glyphs = page.glyphs.clone();
        sort_reading_order(&mut glyphs);
        find_statement_account(&glyphs, &patterns)
    });

    Ok(ParseResult {
        statement_account,
        items,
    })
}

/// First glyph whose decoded, trimmed text is entirely an account-shaped
/// token — the statement holder's own account number, printed outside the
/// transaction table. `glyphs` must already be in reading order, so the
/// topmost-leftmost match wins regardless of decoder emission order.
fn find_statement_account(glyphs: &[GlyphRun], patterns: &FieldPatterns) -> Option<String> {
    glyphs.iter().find_map(|g| {
        let text = unescape(&g.text);
        let trimmed = text.trim();
        patterns.is_account(trimmed).then(|| trimmed.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_options_defaults() {
        let options = ParserOptions::default();
        assert_eq!(options.rule_join_tolerance, RULE_JOIN_TOLERANCE);
        assert_eq!(options.boundary_adjust, 1.0);
        assert_eq!(
            options.amount_headers,
            vec!["iznos", "iznos u rsd", "poreklo naloga"]
        );
        assert_eq!(options.credit_header, "odobrenje");
    }

    #[test]
    fn test_empty_document_has_no_structure() {
        let err = parse_statement(&Document::default(), &ParserOptions::default());
        assert_eq!(err, Err(ParseError::DocumentStructure { page: 0 }));
    }

    #[test]
    fn test_find_statement_account_first_bare_token() {
        let patterns = FieldPatterns::new();
        let glyphs = vec![
            GlyphRun::new("Izvod broj 42", 10.0, 5.0),
            GlyphRun::new("205-0000000001234-20", 10.0, 8.0),
            GlyphRun::new("265-1234567-70", 10.0, 50.0),
        ];
        assert_eq!(
            find_statement_account(&glyphs, &patterns),
            Some("205-0000000001234-20".to_string())
        );
    }

    #[test]
    fn test_find_statement_account_ignores_embedded_tokens() {
        let patterns = FieldPatterns::new();
        let glyphs = vec![GlyphRun::new("racun: 205-0000000001234-20", 10.0, 8.0)];
        assert_eq!(find_statement_account(&glyphs, &patterns), None);
    }
}
