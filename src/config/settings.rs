//! Runtime settings for a ledger session
//!
//! Settings come from the command line; nothing is persisted.

/// User preferences for an interactive session
#[derive(Debug, Clone)]
pub struct Settings {
    /// Currency symbol used when displaying amounts
    pub currency_symbol: String,

    /// Save unsaved changes automatically when exiting
    pub autosave_on_exit: bool,

    /// Record ledger activity in the audit log
    pub audit_enabled: bool,
}

fn default_currency() -> String {
    "$".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            autosave_on_exit: true,
            audit_enabled: true,
        }
    }
}

impl Settings {
    /// Override the currency symbol, ignoring blank input
    pub fn with_currency(mut self, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        if !symbol.trim().is_empty() {
            self.currency_symbol = symbol.trim().to_string();
        }
        self
    }
}
