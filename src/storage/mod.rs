//! Storage layer for the expense ledger
//!
//! Expenses live in a CSV data file; the budget lives in a JSON sidecar next
//! to it. Every write goes through a temp file and an atomic rename.

pub mod budget;
pub mod expenses;
pub mod file_io;

pub use budget::{load_budget, save_budget};
pub use expenses::{load_expenses, load_expenses_required, save_expenses, HEADER};
pub use file_io::{read_json, write_atomic, write_json_atomic};

use tracing::{debug, info};

use crate::config::paths::LedgerPaths;
use crate::error::LedgerResult;
use crate::models::{Expense, Money};
use crate::services::Ledger;

/// Data read back from disk
#[derive(Debug, Clone, Default)]
pub struct LoadedData {
    pub expenses: Vec<Expense>,
    pub budget: Option<Money>,
    /// False when the data file did not exist yet
    pub file_found: bool,
}

/// Storage coordinator for the data file and its sidecar
pub struct Storage {
    paths: LedgerPaths,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: LedgerPaths) -> Self {
        Self { paths }
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &LedgerPaths {
        &self.paths
    }

    /// Write the whole ledger to disk
    ///
    /// The in-memory ledger is never modified, whether or not this succeeds.
    ///
    /// Each file is replaced atomically, but the pair is not. The budget
    /// sidecar is written first, so a failed sidecar write leaves the data
    /// file untouched. If the data file write fails afterwards, the sidecar
    /// already holds the new budget while the data file keeps its previous
    /// expenses.
    pub fn save(&self, ledger: &Ledger) -> LedgerResult<()> {
        save_budget(self.paths.budget_file(), ledger.budget())?;
        save_expenses(self.paths.data_file(), ledger.expenses())?;
        info!(
            path = %self.paths.data_file().display(),
            expenses = ledger.len(),
            "ledger saved"
        );
        Ok(())
    }

    /// Read expenses and budget from disk
    ///
    /// A missing data file is not an error: it yields an empty dataset with
    /// `file_found` unset. Any malformed row aborts the whole load.
    pub fn load(&self) -> LedgerResult<LoadedData> {
        let data_file = self.paths.data_file();
        let file_found = data_file.exists();
        if !file_found {
            debug!(path = %data_file.display(), "data file not found, starting empty");
        }

        let expenses = load_expenses(data_file)?;
        let budget = load_budget(self.paths.budget_file())?;
        info!(
            path = %data_file.display(),
            expenses = expenses.len(),
            budget_set = budget.is_some(),
            "ledger loaded"
        );

        Ok(LoadedData {
            expenses,
            budget,
            file_found,
        })
    }

    /// Like `load`, but a missing data file is an I/O error
    pub fn load_required(&self) -> LedgerResult<LoadedData> {
        let expenses = load_expenses_required(self.paths.data_file())?;
        let budget = load_budget(self.paths.budget_file())?;
        Ok(LoadedData {
            expenses,
            budget,
            file_found: true,
        })
    }
}
