//! Configuration module for the expense ledger
//!
//! This module provides:
//! - Data file and sidecar path resolution
//! - Session settings from the command line

pub mod paths;
pub mod settings;

pub use paths::{LedgerPaths, DEFAULT_DATA_FILE};
pub use settings::Settings;
