//! Decoded document model handed over by the external decoder.
//!
//! The decoder has already turned the statement file into positioned glyph
//! runs and horizontal rule segments. No ordering or deduplication is
//! assumed; the parser sorts and merges its own working copies and leaves
//! the caller's data untouched.

use izvod_core::{GlyphRun, RuleSegment};

/// One decoded page: positioned text fragments plus rule fragments.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageContent {
    /// Text fragments as emitted by the decoder.
    pub glyphs: Vec<GlyphRun>,
    /// Horizontal rule fragments as emitted by the decoder.
    pub rules: Vec<RuleSegment>,
}

impl PageContent {
    pub fn new(glyphs: Vec<GlyphRun>, rules: Vec<RuleSegment>) -> Self {
        Self { glyphs, rules }
    }
}

/// A fully decoded statement document: ordered pages.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document {
    pub pages: Vec<PageContent>,
}

impl Document {
    pub fn new(pages: Vec<PageContent>) -> Self {
        Self { pages }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_content_new() {
        let page = PageContent::new(
            vec![GlyphRun::new("101", 5.0, 12.0)],
            vec![RuleSegment::new(0.0, 10.0, 1.0, 100.0)],
        );
        assert_eq!(page.glyphs.len(), 1);
        assert_eq!(page.rules.len(), 1);
    }

    #[test]
    fn test_document_default_is_empty() {
        let doc = Document::default();
        assert!(doc.pages.is_empty());
    }
}
