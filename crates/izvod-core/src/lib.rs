//! izvod-core: Decoder-independent data types and algorithms.
//!
//! This crate provides the geometric primitives ([`GlyphRun`],
//! [`RuleSegment`]) and the algorithms that reconstruct a statement's table
//! structure from them: row-boundary merging, row-band assignment, and the
//! field patterns with their candidate-selection policies. The statement
//! pipeline itself lives in the `izvod` crate.

pub mod bands;
pub mod fields;
pub mod geometry;
pub mod record;
pub mod rules;
pub mod text;

pub use bands::{RowBand, assign_bands};
pub use fields::{
    AmountCandidate, FieldPatterns, select_amount_candidate, select_date_candidate,
};
pub use geometry::{GlyphRun, RuleSegment, sort_reading_order};
pub use record::{AmountSide, ParseResult, TransactionRecord};
pub use rules::{RULE_JOIN_TOLERANCE, RowRule, dedupe_segments, merge_segments, reconstruct_rules};
pub use text::unescape;
