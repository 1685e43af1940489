//! Audit entry data structures
//!
//! Defines the operations and subjects recorded in the activity log and the
//! entry format itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of operations that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// An expense was recorded
    Create,
    /// The budget was replaced
    Update,
    /// The ledger was written to disk
    Save,
    /// The ledger was replaced from disk
    Load,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Update => write!(f, "UPDATE"),
            Operation::Save => write!(f, "SAVE"),
            Operation::Load => write!(f, "LOAD"),
        }
    }
}

/// What an audited operation acted on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Subject {
    Expense,
    Budget,
    Ledger,
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Subject::Expense => write!(f, "Expense"),
            Subject::Budget => write!(f, "Budget"),
            Subject::Ledger => write!(f, "Ledger"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the operation occurred (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    pub subject: Subject,

    /// Human-readable one-line description
    pub summary: String,

    /// JSON representation of the affected value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl AuditEntry {
    /// Create a new entry stamped with the current time
    pub fn new(operation: Operation, subject: Subject, summary: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            subject,
            summary: summary.into(),
            details: None,
        }
    }

    /// Attach a serialized snapshot of the affected value
    pub fn with_details<T: Serialize>(mut self, value: &T) -> Self {
        self.details = serde_json::to_value(value).ok();
        self
    }

    /// Format for display in the activity log view
    pub fn format_line(&self) -> String {
        format!(
            "{} {:<6} {:<7} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.operation,
            self.subject,
            self.summary
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Expense, Money};
    use chrono::NaiveDate;

    #[test]
    fn test_entry_with_details() {
        let expense = Expense::new(
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            "Food",
            Money::from_cents(1250),
            "lunch",
        )
        .unwrap();
        let entry = AuditEntry::new(Operation::Create, Subject::Expense, "Food $12.50")
            .with_details(&expense);

        let details = entry.details.unwrap();
        assert_eq!(details["category"], "Food");
        assert_eq!(details["amount"], 1250);
        assert_eq!(details["date"], "2024-01-05");
    }

    #[test]
    fn test_serialization_omits_empty_details() {
        let entry = AuditEntry::new(Operation::Save, Subject::Ledger, "2 expenses");
        let json = serde_json::to_string(&entry).unwrap();
        assert!(json.contains("\"operation\":\"save\""));
        assert!(json.contains("\"subject\":\"ledger\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_format_line() {
        let entry = AuditEntry::new(Operation::Update, Subject::Budget, "$100.00");
        let line = entry.format_line();
        assert!(line.contains("UPDATE"));
        assert!(line.contains("Budget"));
        assert!(line.ends_with("$100.00"));
    }
}
