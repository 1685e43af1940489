//! Budget report formatting

use crate::models::Money;
use crate::reports::MonthlySummary;
use crate::services::Ledger;

/// Format overall budget status: budget, spent, remaining and per-category totals
pub fn format_budget_status(ledger: &Ledger, symbol: &str) -> String {
    let mut output = String::new();
    let spent = ledger.total_spent(None);

    match ledger.budget().zip(ledger.remaining_budget().ok()) {
        Some((budget, remaining)) => {
            output.push_str(&format!("Monthly Budget: {}\n", budget.format_with_symbol(symbol)));
            output.push_str(&format!("Total Spent:    {}\n", spent.format_with_symbol(symbol)));
            output.push_str(&format!("Remaining:      {}\n", remaining.format_with_symbol(symbol)));
            if remaining.is_negative() {
                output.push_str("WARNING: You have exceeded your budget!\n");
            }
        }
        None => {
            output.push_str("No budget set.\n");
            output.push_str(&format!("Total Spent:    {}\n", spent.format_with_symbol(symbol)));
        }
    }

    let mut categories: Vec<(String, Money)> = ledger.spending_by_category().into_iter().collect();
    categories.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    output.push_str("\nSpending by Category:\n");
    if categories.is_empty() {
        output.push_str("  (no expenses)\n");
    }
    for (category, total) in categories {
        output.push_str(&format!(
            "  {:<20} {:>12}\n",
            category,
            total.format_with_symbol(symbol)
        ));
    }

    output
}

/// Format the monthly budget tracking report
pub fn format_monthly_summary(summary: &MonthlySummary, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Tracking budget for: {}\n", summary.month.long_name()));
    output.push_str(&format!(
        "Found {} expense(s) for this month\n\n",
        summary.expense_count
    ));
    output.push_str(&format!(
        "Monthly Budget: {}\n",
        summary.budget.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Total Spent:    {}\n",
        summary.spent.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Remaining:      {}\n",
        summary.remaining.format_with_symbol(symbol)
    ));

    if summary.is_over_budget() {
        output.push_str("WARNING: You have exceeded your budget!\n");
    } else {
        output.push_str(&format!(
            "You have {} left for the month.\n",
            summary.remaining.format_with_symbol(symbol)
        ));
    }

    output.push_str("\nSpending by Category:\n");
    if summary.categories.is_empty() {
        output.push_str("  No expenses recorded for this month.\n");
    }
    for category in &summary.categories {
        output.push_str(&format!(
            "  {:<20} {:>12} ({:.1}% of budget)\n",
            category.category,
            category.total.format_with_symbol(symbol),
            category.percent_of_budget
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Month;
    use crate::services::NewExpense;

    fn ledger_with_expenses() -> Ledger {
        let mut ledger = Ledger::new();
        for (date, category, amount) in [
            ("2024-01-05", "Food", "12.50"),
            ("2024-01-06", "Transportation", "3.00"),
        ] {
            ledger
                .add_expense(NewExpense {
                    date: date.into(),
                    category: category.into(),
                    amount: amount.into(),
                    description: String::new(),
                })
                .unwrap();
        }
        ledger
    }

    #[test]
    fn test_status_without_budget() {
        let output = format_budget_status(&ledger_with_expenses(), "$");
        assert!(output.contains("No budget set."));
        assert!(output.contains("Total Spent:    $15.50"));
        assert!(output.contains("Food"));
    }

    #[test]
    fn test_status_with_budget() {
        let mut ledger = ledger_with_expenses();
        ledger.set_budget(Money::from_cents(10000)).unwrap();
        let output = format_budget_status(&ledger, "$");
        assert!(output.contains("Remaining:      $84.50"));
        assert!(!output.contains("WARNING"));
    }

    #[test]
    fn test_status_over_budget() {
        let mut ledger = ledger_with_expenses();
        ledger.set_budget(Money::from_cents(1000)).unwrap();
        let output = format_budget_status(&ledger, "$");
        assert!(output.contains("Remaining:      -$5.50"));
        assert!(output.contains("WARNING"));
    }

    #[test]
    fn test_status_remaining_matches_ledger() {
        let mut ledger = ledger_with_expenses();
        ledger.set_budget(Money::MAX).unwrap();
        let remaining = ledger.remaining_budget().unwrap();
        let output = format_budget_status(&ledger, "$");
        assert!(output.contains(&format!("Remaining:      {}", remaining)));
        assert!(output.contains("Remaining:      $999999999984.50"));
    }

    #[test]
    fn test_monthly_summary_output() {
        let mut ledger = ledger_with_expenses();
        ledger.set_budget(Money::from_cents(10000)).unwrap();
        let summary = ledger.monthly_summary(Month::new(2024, 1).unwrap()).unwrap();

        let output = format_monthly_summary(&summary, "$");
        assert!(output.contains("Tracking budget for: January 2024"));
        assert!(output.contains("Found 2 expense(s)"));
        assert!(output.contains("(12.5% of budget)"));
        assert!(output.contains("You have $84.50 left for the month."));
    }
}
