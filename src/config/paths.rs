//! Path management for the expense ledger
//!
//! Every file the tool touches is derived from the data file path:
//!
//! - `expenses.csv`: the expense rows
//! - `expenses.budget.json`: the monthly budget sidecar
//! - `expenses.audit.log`: the append-only activity log

use std::path::{Path, PathBuf};

/// Default data file, relative to the working directory
pub const DEFAULT_DATA_FILE: &str = "expenses.csv";

/// Manages all paths used by the ledger
#[derive(Debug, Clone)]
pub struct LedgerPaths {
    data_file: PathBuf,
}

impl LedgerPaths {
    /// Create paths rooted at the given data file
    pub fn new(data_file: impl Into<PathBuf>) -> Self {
        Self {
            data_file: data_file.into(),
        }
    }

    /// Get the path to the CSV data file
    pub fn data_file(&self) -> &Path {
        &self.data_file
    }

    /// Get the path to the budget sidecar
    pub fn budget_file(&self) -> PathBuf {
        self.sibling("budget.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.sibling("audit.log")
    }

    fn sibling(&self, suffix: &str) -> PathBuf {
        let stem = self
            .data_file
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "expenses".to_string());
        self.data_file.with_file_name(format!("{}.{}", stem, suffix))
    }
}

impl Default for LedgerPaths {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_FILE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_paths() {
        let paths = LedgerPaths::default();
        assert_eq!(paths.data_file(), Path::new("expenses.csv"));
        assert_eq!(paths.budget_file(), PathBuf::from("expenses.budget.json"));
        assert_eq!(paths.audit_log(), PathBuf::from("expenses.audit.log"));
    }

    #[test]
    fn test_sibling_paths_follow_data_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::new(temp_dir.path().join("2024.csv"));

        assert_eq!(paths.budget_file(), temp_dir.path().join("2024.budget.json"));
        assert_eq!(paths.audit_log(), temp_dir.path().join("2024.audit.log"));
    }
}
