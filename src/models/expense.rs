//! Expense model
//!
//! A single dated, categorized spending record. Expenses are immutable once
//! created; their identity is their position in the ledger.

use chrono::NaiveDate;
use serde::Serialize;

use super::money::Money;
use crate::error::{LedgerError, LedgerResult};

/// Date format used for input, display and persistence
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    date: NaiveDate,
    category: String,
    amount: Money,
    description: String,
}

impl Expense {
    /// Create a validated expense
    ///
    /// The category is trimmed and must not be blank; the amount must not be
    /// negative.
    pub fn new(
        date: NaiveDate,
        category: impl AsRef<str>,
        amount: Money,
        description: impl Into<String>,
    ) -> LedgerResult<Self> {
        let category = category.as_ref().trim();
        if category.is_empty() {
            return Err(LedgerError::Validation("Category cannot be empty".into()));
        }
        let amount = check_amount(amount, "Amount")?;

        Ok(Self {
            date,
            category: category.to_string(),
            amount,
            description: description.into(),
        })
    }

    /// Build an expense from raw text fields
    pub fn parse(
        date: &str,
        category: &str,
        amount: &str,
        description: &str,
    ) -> LedgerResult<Self> {
        let date = parse_date(date)?;
        let amount = parse_amount(amount)?;
        Self::new(date, category, amount, description)
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Check whether this expense belongs to the given category (exact match)
    pub fn is_in_category(&self, category: &str) -> bool {
        self.category == category
    }
}

/// Parse an ISO 8601 calendar date (YYYY-MM-DD)
pub fn parse_date(s: &str) -> LedgerResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, DATE_FORMAT).map_err(|_| {
        LedgerError::Validation(format!("Invalid date '{}'. Please use YYYY-MM-DD.", s))
    })
}

/// Parse a non-negative amount no larger than `Money::MAX`
pub fn parse_amount(s: &str) -> LedgerResult<Money> {
    let amount = Money::parse(s).map_err(|e| LedgerError::Validation(e.to_string()))?;
    check_amount(amount, "Amount")
}

/// Reject negative amounts and amounts above `Money::MAX`
pub fn check_amount(amount: Money, what: &str) -> LedgerResult<Money> {
    if amount.is_negative() {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative: {}",
            what, amount
        )));
    }
    if amount.exceeds_max() {
        return Err(LedgerError::Validation(format!(
            "{} cannot exceed {}: {}",
            what,
            Money::MAX,
            amount
        )));
    }
    Ok(amount)
}
