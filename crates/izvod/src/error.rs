//! Error types for statement parsing.
//!
//! Uses [`thiserror`] for ergonomic error derivation. Both variants are
//! fatal to the whole parse; there are no partial results. Rows that merely
//! lack one of the four fields are skipped silently and are not errors.

use thiserror::Error;

/// Fatal statement parse failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// No page established the credit-column boundary. Raised eagerly on the
    /// first page that lacks the header anchor while no boundary exists yet.
    #[error("document structure error: no amount column anchor on page {page}")]
    DocumentStructure {
        /// 0-indexed page that triggered the failure.
        page: usize,
    },

    /// A row provably holds a transaction (its purpose code was found) but
    /// the winning amount string matches no single glyph, so the amount
    /// cannot be placed relative to the column boundary.
    #[error("field extraction error: amount {amount:?} not found among row glyphs on page {page}")]
    FieldExtraction {
        /// 0-indexed page of the offending row.
        page: usize,
        /// The winning amount token that could not be re-located.
        amount: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_structure_display() {
        let err = ParseError::DocumentStructure { page: 0 };
        assert_eq!(
            err.to_string(),
            "document structure error: no amount column anchor on page 0"
        );
    }

    #[test]
    fn test_field_extraction_display() {
        let err = ParseError::FieldExtraction {
            page: 2,
            amount: "1,234.56".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "field extraction error: amount \"1,234.56\" not found among row glyphs on page 2"
        );
    }

    #[test]
    fn test_implements_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(ParseError::DocumentStructure { page: 1 });
        assert!(err.to_string().contains("page 1"));
    }

    #[test]
    fn test_clone_and_eq() {
        let err = ParseError::FieldExtraction {
            page: 0,
            amount: "45.67".to_string(),
        };
        assert_eq!(err.clone(), err);
    }
}
