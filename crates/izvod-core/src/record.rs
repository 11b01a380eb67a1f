//! Transaction records recovered from statement rows.

use chrono::NaiveDate;

/// Which side of the amount column an amount falls on, relative to the
/// credit-column boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AmountSide {
    /// Money received by the statement holder (credit side).
    Claim,
    /// Money paid out by the statement holder (debit side).
    Owes,
}

/// One fully resolved transaction row.
///
/// Invariant: `claim >= 0`, `owes >= 0`, and exactly one of the two is
/// non-zero for any amount greater than zero. Use [`TransactionRecord::claim`]
/// or [`TransactionRecord::owes`] to construct; records are immutable
/// afterward.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransactionRecord {
    /// 3-digit transaction purpose code.
    pub code: String,
    /// Counterparty account in raw dashed form.
    pub bank_account: String,
    /// Date the transaction was paid.
    pub paid_date: NaiveDate,
    /// Amount received, or 0 when the row is a debit.
    pub claim: f64,
    /// Amount paid out, or 0 when the row is a credit.
    pub owes: f64,
}

impl TransactionRecord {
    /// A credit-side record: the amount was received.
    pub fn claim(
        code: impl Into<String>,
        bank_account: impl Into<String>,
        paid_date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            code: code.into(),
            bank_account: bank_account.into(),
            paid_date,
            claim: amount,
            owes: 0.0,
        }
    }

    /// A debit-side record: the amount was paid out.
    pub fn owes(
        code: impl Into<String>,
        bank_account: impl Into<String>,
        paid_date: NaiveDate,
        amount: f64,
    ) -> Self {
        Self {
            code: code.into(),
            bank_account: bank_account.into(),
            paid_date,
            claim: 0.0,
            owes: amount,
        }
    }

    /// Construct for the given column side.
    pub fn for_side(
        side: AmountSide,
        code: impl Into<String>,
        bank_account: impl Into<String>,
        paid_date: NaiveDate,
        amount: f64,
    ) -> Self {
        match side {
            AmountSide::Claim => Self::claim(code, bank_account, paid_date, amount),
            AmountSide::Owes => Self::owes(code, bank_account, paid_date, amount),
        }
    }
}

/// The outcome of one successful statement parse.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseResult {
    /// The statement holder's own account number, when a bare account-shaped
    /// glyph exists on the first page. Optional metadata.
    pub statement_account: Option<String>,
    /// Accepted transaction rows, in page order then row order.
    pub items: Vec<TransactionRecord>,
}
