//! Budget sidecar persistence
//!
//! The monthly budget is stored next to the data file as
//! `{"monthly_limit": <cents>}`. No file means no budget set.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::file_io::{read_json, remove_if_exists, write_json_atomic};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{check_amount, Money};

#[derive(Debug, Serialize, Deserialize)]
struct BudgetFile {
    monthly_limit: Money,
}

/// Persist the budget, removing the sidecar when no budget is set
pub fn save_budget<P: AsRef<Path>>(path: P, budget: Option<Money>) -> LedgerResult<()> {
    match budget {
        Some(monthly_limit) => write_json_atomic(path, &BudgetFile { monthly_limit }),
        None => remove_if_exists(path),
    }
}

/// Read the budget sidecar, if present
pub fn load_budget<P: AsRef<Path>>(path: P) -> LedgerResult<Option<Money>> {
    let path = path.as_ref();
    let Some(file) = read_json::<BudgetFile, _>(path)? else {
        return Ok(None);
    };

    check_amount(file.monthly_limit, "Budget")
        .map(Some)
        .map_err(|e| LedgerError::parse_at(1, format!("{}: {}", path.display(), e)))
}
