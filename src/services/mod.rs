//! Business logic layer
//!
//! The ledger owns all in-memory state; the menu loop and storage layer
//! operate on it through explicit references.

pub mod ledger;

pub use ledger::{Ledger, NewExpense};
