//! Field patterns and candidate-selection policies for transaction rows.
//!
//! The code, account, and amount patterns run against a band's padded text
//! (see [`crate::bands::RowBand::band_text`]); the date pattern is meant to
//! run against one token's text at a time, because its wildcard separators
//! would otherwise pair digit runs from neighboring tokens (amount decimals,
//! account digits) across token boundaries and mask the real date.
//! Ambiguity resolution is factored into named policy functions
//! ([`select_amount_candidate`], [`select_date_candidate`]) so each
//! tie-break rule is a single tested unit.

use chrono::NaiveDate;
use regex::Regex;

/// Compiled field patterns, built once per parse.
#[derive(Debug)]
pub struct FieldPatterns {
    code: Regex,
    account: Regex,
    account_exact: Regex,
    amount: Regex,
    date: Regex,
}

impl FieldPatterns {
    /// Compile the statement field patterns.
    pub fn new() -> Self {
        Self {
            // 3-digit purpose code, whitespace-delimited
            code: Regex::new(r"\s(\d{3})\s").expect("code pattern compiles"),
            // bank-code–account–check-digits, whitespace-delimited
            account: Regex::new(r"\s(\d{3}-\d{3,16}-\d{2,3})\s").expect("account pattern compiles"),
            account_exact: Regex::new(r"^\d{3}-\d{3,16}-\d{2,3}$")
                .expect("account shape pattern compiles"),
            // Three mutually exclusive shapes: >= 1.00 with optional thousands
            // groups, 0.10-0.99, and 0.01-0.09. The partition keeps a single
            // pattern from mis-grouping small magnitudes.
            amount: Regex::new(r"[1-9]\d{0,2}(?:,\d{3})*\.\d{2}|0\.[1-9]\d|0\.0[1-9]")
                .expect("amount pattern compiles"),
            // day.month.year with a 2- or 4-digit year. The separator is a
            // deliberate wildcard; source statements have been seen with
            // non-dot separators and the breadth must be preserved.
            date: Regex::new(r"(\d{2}).(\d{2}).(\d{4}|\d{2})").expect("date pattern compiles"),
        }
    }

    /// First whitespace-delimited 3-digit token, the row-candidacy gate.
    pub fn find_code(&self, text: &str) -> Option<String> {
        self.code
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// First whitespace-delimited counterparty account token.
    pub fn find_account(&self, text: &str) -> Option<String> {
        self.account
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }

    /// Whether `text` is entirely an account-shaped token.
    pub fn is_account(&self, text: &str) -> bool {
        self.account_exact.is_match(text)
    }

    /// All amount-shaped matches in `text`, in match order.
    pub fn amount_candidates(&self, text: &str) -> Vec<AmountCandidate> {
        self.amount
            .find_iter(text)
            .filter_map(|m| {
                let raw = m.as_str();
                parse_amount(raw).map(|value| AmountCandidate {
                    raw: raw.to_string(),
                    value,
                    start: m.start(),
                    end: m.end(),
                })
            })
            .collect()
    }

    /// Whether the byte range `start..end` of `text` lies inside a
    /// date-shaped match.
    ///
    /// Distinguishes a value-shaped fragment the amount pattern nibbled out
    /// of a date token from a genuine freestanding amount token.
    pub fn within_date_match(&self, text: &str, start: usize, end: usize) -> bool {
        self.date
            .find_iter(text)
            .any(|m| m.start() <= start && end <= m.end())
    }

    /// All calendar-valid date matches in `text`, in match order.
    ///
    /// 2-digit years normalize via `year % 2000 + 2000` (identity for 20xx
    /// 4-digit years). Matches that do not form a real calendar date, e.g.
    /// digit runs the wildcard separator happens to cut up, are discarded.
    pub fn date_candidates(&self, text: &str) -> Vec<NaiveDate> {
        self.date
            .captures_iter(text)
            .filter_map(|caps| {
                let day: u32 = caps.get(1)?.as_str().parse().ok()?;
                let month: u32 = caps.get(2)?.as_str().parse().ok()?;
                let year: i32 = caps.get(3)?.as_str().parse().ok()?;
                NaiveDate::from_ymd_opt(year % 2000 + 2000, month, day)
            })
            .collect()
    }
}

impl Default for FieldPatterns {
    fn default() -> Self {
        Self::new()
    }
}

/// An amount-shaped token with its parsed numeric value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AmountCandidate {
    /// The matched token exactly as it appears in the band text.
    pub raw: String,
    /// Numeric value with thousands separators stripped.
    pub value: f64,
    /// Byte offset of the match start in the scanned text.
    pub start: usize,
    /// Byte offset of the match end in the scanned text.
    pub end: usize,
}

/// Parse an amount token, stripping thousands separators.
fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse().ok()
}

/// Pick the winning amount among all candidates of a row: the numerically
/// largest. Incidental digit runs (partial codes, date fragments) are
/// smaller than genuine statement amounts. Ties keep the earliest match.
pub fn select_amount_candidate(candidates: &[AmountCandidate]) -> Option<&AmountCandidate> {
    let mut best: Option<&AmountCandidate> = None;
    for candidate in candidates {
        match best {
            Some(b) if candidate.value <= b.value => {}
            _ => best = Some(candidate),
        }
    }
    best
}

/// Pick the paid date among all candidates of a row: the earliest. A row may
/// carry both a paid and a processed date, and the paid date is the earlier.
pub fn select_date_candidate(candidates: &[NaiveDate]) -> Option<NaiveDate> {
    candidates.iter().copied().min()
}
