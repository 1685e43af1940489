//! Expense Ledger - personal expense tracking and monthly budgeting
//!
//! This library provides the core functionality for the `expenses`
//! command-line tool: an in-memory ledger of expenses with an optional
//! monthly budget, persisted to a CSV data file between sessions.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Data file paths and session settings
//! - `error`: Custom error types
//! - `models`: Core data models (expenses, money, months)
//! - `services`: The expense ledger
//! - `reports`: Monthly budget tracking
//! - `storage`: CSV data file and budget sidecar, with atomic writes
//! - `audit`: Append-only activity log
//! - `display`: Terminal formatting
//! - `menu`: The interactive menu loop
//!
//! # Example
//!
//! ```rust
//! use expense_ledger::models::Money;
//! use expense_ledger::services::{Ledger, NewExpense};
//!
//! let mut ledger = Ledger::new();
//! ledger.set_budget(Money::from_cents(10000))?;
//! ledger.add_expense(NewExpense {
//!     date: "2024-01-05".into(),
//!     category: "Food".into(),
//!     amount: "12.50".into(),
//!     description: "lunch".into(),
//! })?;
//! assert_eq!(ledger.remaining_budget()?, Money::from_cents(8750));
//! # Ok::<(), expense_ledger::LedgerError>(())
//! ```

pub mod audit;
pub mod config;
pub mod display;
pub mod error;
pub mod menu;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
