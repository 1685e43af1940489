//! Expense ledger
//!
//! Holds the in-memory list of expenses and the current monthly budget, and
//! provides the queries derived from them (totals, remaining budget,
//! spending by category).

use std::collections::HashMap;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{check_amount, Expense, Money, Month};
use crate::reports::MonthlySummary;

/// Raw user input for a new expense
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub date: String,
    pub category: String,
    pub amount: String,
    pub description: String,
}

/// The expense ledger: ordered expenses plus an optional budget
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    expenses: Vec<Expense>,
    budget: Option<Money>,
}

impl Ledger {
    /// Create an empty ledger with no budget
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from previously loaded data
    pub fn from_parts(expenses: Vec<Expense>, budget: Option<Money>) -> Self {
        Self { expenses, budget }
    }

    /// Validate raw input and append it as a new expense
    ///
    /// On failure the ledger is left unchanged.
    pub fn add_expense(&mut self, input: NewExpense) -> LedgerResult<&Expense> {
        let expense = Expense::parse(
            &input.date,
            &input.category,
            &input.amount,
            &input.description,
        )?;
        Ok(self.push(expense))
    }

    /// Append an already-validated expense
    pub fn push(&mut self, expense: Expense) -> &Expense {
        self.expenses.push(expense);
        &self.expenses[self.expenses.len() - 1]
    }

    /// Iterate expenses in insertion order, optionally restricted to one category
    pub fn list_expenses<'a>(
        &'a self,
        category: Option<&'a str>,
    ) -> impl Iterator<Item = &'a Expense> + 'a {
        self.expenses
            .iter()
            .filter(move |e| category.map_or(true, |c| e.is_in_category(c)))
    }

    /// Sum of all amounts, optionally restricted to one category
    pub fn total_spent(&self, category: Option<&str>) -> Money {
        self.list_expenses(category).map(Expense::amount).sum()
    }

    /// Replace the current budget
    pub fn set_budget(&mut self, amount: Money) -> LedgerResult<()> {
        self.budget = Some(check_amount(amount, "Budget")?);
        Ok(())
    }

    /// Current budget, if one has been set
    pub fn budget(&self) -> Option<Money> {
        self.budget
    }

    /// Budget minus total spending; negative when over budget
    pub fn remaining_budget(&self) -> LedgerResult<Money> {
        let budget = self.budget.ok_or(LedgerError::BudgetNotSet)?;
        Ok(budget - self.total_spent(None))
    }

    /// Total spending per distinct category
    pub fn spending_by_category(&self) -> HashMap<String, Money> {
        let mut totals: HashMap<String, Money> = HashMap::new();
        for expense in &self.expenses {
            *totals.entry(expense.category().to_string()).or_default() += expense.amount();
        }
        totals
    }

    /// Budget tracking for the expenses dated within one month
    pub fn monthly_summary(&self, month: Month) -> LedgerResult<MonthlySummary> {
        let budget = self.budget.ok_or(LedgerError::BudgetNotSet)?;
        let expenses = self.expenses.iter().filter(|e| month.contains(e.date()));
        Ok(MonthlySummary::generate(month, budget, expenses))
    }

    /// Swap in a freshly loaded dataset
    pub fn replace(&mut self, expenses: Vec<Expense>, budget: Option<Money>) {
        self.expenses = expenses;
        self.budget = budget;
    }

    /// All expenses in insertion order
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}
