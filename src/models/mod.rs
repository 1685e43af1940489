//! Core data models for the expense ledger
//!
//! Expenses, money amounts, and the calendar month used by budget tracking.

pub mod expense;
pub mod money;
pub mod month;

pub use expense::{check_amount, parse_amount, parse_date, Expense, DATE_FORMAT};
pub use money::{Money, MoneyParseError};
pub use month::{Month, MonthParseError};
