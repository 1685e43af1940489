//! Monthly budget report
//!
//! Compares one month's spending against the monthly budget, with a
//! per-category breakdown.

use std::collections::HashMap;

use crate::models::{Expense, Money, Month};

/// Spending for one category within the month
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySpending {
    pub category: String,
    pub total: Money,
    /// Share of the monthly budget in percent (0 when the budget is zero)
    pub percent_of_budget: f64,
}

/// Budget tracking for a single month
#[derive(Debug, Clone)]
pub struct MonthlySummary {
    pub month: Month,
    pub budget: Money,
    pub spent: Money,
    pub remaining: Money,
    pub expense_count: usize,
    /// Sorted by total, largest first
    pub categories: Vec<CategorySpending>,
}

impl MonthlySummary {
    /// Build a summary from the expenses already filtered to `month`
    pub fn generate<'a>(
        month: Month,
        budget: Money,
        expenses: impl Iterator<Item = &'a Expense>,
    ) -> Self {
        let mut totals: HashMap<&str, Money> = HashMap::new();
        let mut spent = Money::zero();
        let mut expense_count = 0;

        for expense in expenses {
            *totals.entry(expense.category()).or_default() += expense.amount();
            spent += expense.amount();
            expense_count += 1;
        }

        let mut categories: Vec<CategorySpending> = totals
            .into_iter()
            .map(|(category, total)| CategorySpending {
                category: category.to_string(),
                total,
                percent_of_budget: percent_of(total, budget),
            })
            .collect();

        // Largest first; ties by name so output is stable
        categories.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Self {
            month,
            budget,
            spent,
            remaining: budget - spent,
            expense_count,
            categories,
        }
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining.is_negative()
    }
}

fn percent_of(part: Money, whole: Money) -> f64 {
    if whole.is_zero() {
        0.0
    } else {
        part.cents() as f64 / whole.cents() as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{Ledger, NewExpense};

    fn add(ledger: &mut Ledger, date: &str, category: &str, amount: &str) {
        ledger
            .add_expense(NewExpense {
                date: date.into(),
                category: category.into(),
                amount: amount.into(),
                description: String::new(),
            })
            .unwrap();
    }

    #[test]
    fn test_summary_only_counts_month() {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_cents(10000)).unwrap();
        add(&mut ledger, "2024-01-05", "Food", "12.50");
        add(&mut ledger, "2024-01-06", "Transportation", "3.00");
        add(&mut ledger, "2024-02-01", "Food", "40.00");

        let summary = ledger.monthly_summary(Month::new(2024, 1).unwrap()).unwrap();
        assert_eq!(summary.expense_count, 2);
        assert_eq!(summary.spent, Money::from_cents(1550));
        assert_eq!(summary.remaining, Money::from_cents(8450));
        assert!(!summary.is_over_budget());

        assert_eq!(summary.categories[0].category, "Food");
        assert!((summary.categories[0].percent_of_budget - 12.5).abs() < 1e-9);
        assert_eq!(summary.categories[1].category, "Transportation");
    }

    #[test]
    fn test_summary_over_budget() {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_cents(1000)).unwrap();
        add(&mut ledger, "2024-05-10", "Rent", "20.00");

        let summary = ledger.monthly_summary(Month::new(2024, 5).unwrap()).unwrap();
        assert!(summary.is_over_budget());
        assert_eq!(summary.remaining, Money::from_cents(-1000));
    }

    #[test]
    fn test_zero_budget_percentages() {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::zero()).unwrap();
        add(&mut ledger, "2024-05-10", "Rent", "20.00");

        let summary = ledger.monthly_summary(Month::new(2024, 5).unwrap()).unwrap();
        assert_eq!(summary.categories[0].percent_of_budget, 0.0);
    }

    #[test]
    fn test_empty_month() {
        let mut ledger = Ledger::new();
        ledger.set_budget(Money::from_cents(500)).unwrap();
        let summary = ledger.monthly_summary(Month::new(2030, 1).unwrap()).unwrap();
        assert_eq!(summary.expense_count, 0);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.remaining, Money::from_cents(500));
    }
}
