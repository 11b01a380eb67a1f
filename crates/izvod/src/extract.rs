//! Per-band field extraction and amount side classification.
//!
//! A band is a transaction candidate only when it carries a 3-digit purpose
//! code. For candidates, the account and amount are extracted from the band
//! text and the paid date from the individual glyph texts; the winning
//! amount is then re-located among the band's original glyphs so its x
//! position classifies it as claim or owes.

use chrono::NaiveDate;
use izvod_core::{
    AmountSide, FieldPatterns, RowBand, TransactionRecord, select_amount_candidate,
    select_date_candidate, unescape,
};

use crate::error::ParseError;

/// Extract a transaction record from one row band, if the row fully resolves.
///
/// Returns `Ok(None)` for non-transaction rows (no code, or code present but
/// one of account/amount/date missing) — headers, totals, and spacer rows
/// fall through here. Returns an error only when a code-bearing row's
/// winning amount is a genuine amount token that cannot be matched back to a
/// single glyph: the row provably holds a transaction, so emitting nothing
/// would hide wrong numbers. A winner the amount pattern nibbled out of a
/// date token is not such a case — the row simply carries no amount.
pub fn extract_record(
    band: &RowBand,
    boundary: f64,
    patterns: &FieldPatterns,
    page: usize,
) -> Result<Option<TransactionRecord>, ParseError> {
    let text = band.band_text();

    let Some(code) = patterns.find_code(&text) else {
        return Ok(None);
    };

    let account = patterns.find_account(&text);
    let paid_date = select_date_candidate(&band_date_candidates(band, patterns));

    let candidates = patterns.amount_candidates(&text);
    let amount = match select_amount_candidate(&candidates) {
        Some(winner) => match amount_glyph_x(band, &winner.raw) {
            Some(x) => {
                let side = if x < boundary {
                    AmountSide::Claim
                } else {
                    AmountSide::Owes
                };
                Some((winner.value, side))
            }
            // A winner inside a date-shaped span has no glyph of its own;
            // the row carries no amount and is excluded like any other
            // incomplete row.
            None if patterns.within_date_match(&text, winner.start, winner.end) => None,
            None => {
                return Err(ParseError::FieldExtraction {
                    page,
                    amount: winner.raw.clone(),
                });
            }
        },
        None => None,
    };

    match (account, amount, paid_date) {
        (Some(account), Some((value, side)), Some(date)) => Ok(Some(
            TransactionRecord::for_side(side, code, account, date, value),
        )),
        _ => Ok(None),
    }
}

/// x position of the first glyph whose decoded, trimmed text equals the
/// winning amount token.
fn amount_glyph_x(band: &RowBand, raw: &str) -> Option<f64> {
    band.glyphs
        .iter()
        .find(|g| unescape(&g.text).trim() == raw)
        .map(|g| g.x)
}

/// Calendar-valid dates collected from each glyph's decoded text.
///
/// Dates are matched glyph by glyph rather than against the joined band
/// text: the wildcard separators would otherwise pair digit runs from
/// neighboring tokens (amount decimals, account digits) across token
/// boundaries and mask the real date.
fn band_date_candidates(band: &RowBand, patterns: &FieldPatterns) -> Vec<NaiveDate> {
    band.glyphs
        .iter()
        .flat_map(|g| patterns.date_candidates(&unescape(&g.text)))
        .collect()
}
