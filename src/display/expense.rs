//! Expense display formatting
//!
//! Renders the expense register shown by the "list expenses" action.

use crate::models::{Expense, Money, DATE_FORMAT};

const RULE_WIDTH: usize = 67;

/// Format a single expense as a register row
pub fn format_expense_row(expense: &Expense, symbol: &str) -> String {
    format!(
        "{:<12} {:<15} {:>10} {}",
        expense.date().format(DATE_FORMAT),
        truncate(expense.category(), 15),
        expense.amount().format_with_symbol(symbol),
        single_line(expense.description())
    )
}

/// Format a list of expenses as a register with a total line
pub fn format_expense_register<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    symbol: &str,
) -> String {
    let mut output = String::new();
    let mut total = Money::zero();
    let mut count = 0;

    for expense in expenses {
        if count == 0 {
            output.push_str(&format!(
                "{:<12} {:<15} {:>10} {}\n",
                "Date", "Category", "Amount", "Description"
            ));
            output.push_str(&"-".repeat(RULE_WIDTH));
            output.push('\n');
        }
        output.push_str(&format_expense_row(expense, symbol));
        output.push('\n');
        total += expense.amount();
        count += 1;
    }

    if count == 0 {
        return "No expenses recorded yet.\n".to_string();
    }

    output.push_str(&"-".repeat(RULE_WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "{} expense(s), total: {}\n",
        count,
        total.format_with_symbol(symbol)
    ));
    output
}

/// Truncate a string to a maximum character width
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}

/// Keep multi-line descriptions on one register row
fn single_line(s: &str) -> String {
    s.lines().collect::<Vec<_>>().join(" / ")
}
