//! izvod: Recover structured transactions from geometrically decoded bank
//! statements.
//!
//! The statement file carries no tabular encoding — only text fragments at
//! absolute coordinates and horizontal rule segments. An external decoder
//! (out of scope) produces those primitives; this crate reconstructs the
//! table geometry and extracts one [`TransactionRecord`] per fully resolved
//! row.
//!
//! # Architecture
//!
//! - **izvod-core**: Decoder-independent data types and algorithms — rule
//!   merging, band assignment, field patterns, selection policies
//! - **izvod** (this crate): The statement pipeline — anchor location,
//!   per-band extraction, aggregation
//!
//! # Example
//!
//! ```
//! use izvod::{Document, GlyphRun, PageContent, ParserOptions, RuleSegment, parse_statement};
//!
//! let page = PageContent::new(
//!     vec![
//!         GlyphRun::new("Iznos", 300.0, 20.0),
//!         GlyphRun::new("Odobrenje", 400.0, 20.0),
//!         GlyphRun::new("101", 10.0, 42.0),
//!         GlyphRun::new("265-1234567-70", 60.0, 42.0),
//!         GlyphRun::new("1,234.56", 320.0, 42.0),
//!         GlyphRun::new("01.02.21", 430.0, 42.0),
//!     ],
//!     vec![RuleSegment::new(0.0, 40.0, 1.0, 500.0)],
//! );
//!
//! let result = parse_statement(&Document::new(vec![page]), &ParserOptions::default())?;
//! assert_eq!(result.items.len(), 1);
//! assert_eq!(result.items[0].code, "101");
//! assert_eq!(result.items[0].claim, 1234.56);
//! # Ok::<(), izvod::ParseError>(())
//! ```

pub use izvod_core;

pub mod anchor;
pub mod document;
pub mod error;
pub mod extract;
pub mod parser;

pub use document::{Document, PageContent};
pub use error::ParseError;
pub use izvod_core::{
    AmountSide, GlyphRun, ParseResult, RowBand, RowRule, RuleSegment, TransactionRecord,
};
pub use parser::{ParserOptions, parse_statement};
