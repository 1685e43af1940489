//! Terminal display formatting
//!
//! Formatting functions return Strings so the menu loop can write them to
//! any output.

pub mod expense;
pub mod report;

pub use expense::{format_expense_register, format_expense_row};
pub use report::{format_budget_status, format_monthly_summary};
