//! Reports derived from the ledger

pub mod monthly;

pub use monthly::{CategorySpending, MonthlySummary};
