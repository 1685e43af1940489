//! Interactive menu loop
//!
//! A synchronous read-dispatch-print cycle: show the numbered menu, read one
//! line, run exactly one action, print the outcome, repeat until Exit.

pub mod prompt;
pub mod session;

pub use prompt::Prompter;
pub use session::Session;

/// Entries of the main menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ListExpenses,
    SetBudget,
    BudgetStatus,
    MonthlyReport,
    Save,
    Load,
    ActivityLog,
    Exit,
}

impl MenuChoice {
    /// All entries in menu order
    pub const ALL: [MenuChoice; 9] = [
        MenuChoice::AddExpense,
        MenuChoice::ListExpenses,
        MenuChoice::SetBudget,
        MenuChoice::BudgetStatus,
        MenuChoice::MonthlyReport,
        MenuChoice::Save,
        MenuChoice::Load,
        MenuChoice::ActivityLog,
        MenuChoice::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::AddExpense => "Add expense",
            MenuChoice::ListExpenses => "List expenses",
            MenuChoice::SetBudget => "Set budget",
            MenuChoice::BudgetStatus => "Budget status",
            MenuChoice::MonthlyReport => "Monthly report",
            MenuChoice::Save => "Save expenses",
            MenuChoice::Load => "Load expenses",
            MenuChoice::ActivityLog => "Activity log",
            MenuChoice::Exit => "Exit",
        }
    }

    /// Parse a menu selection: its number, or "q"/"quit"/"exit"
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        if matches!(input.to_lowercase().as_str(), "q" | "quit" | "exit") {
            return Some(MenuChoice::Exit);
        }
        let number: usize = input.parse().ok()?;
        Self::ALL.get(number.checked_sub(1)?).copied()
    }

    /// The numbered menu as displayed
    pub fn render_menu() -> String {
        let mut output = String::from("\n=== Personal Expense Tracker ===\n");
        for (i, choice) in Self::ALL.iter().enumerate() {
            output.push_str(&format!("{}. {}\n", i + 1, choice.label()));
        }
        output
    }
}
