//! Interactive session state and menu actions
//!
//! The session owns the ledger for the lifetime of the process and passes it
//! explicitly to storage and display code.

use std::io::{BufRead, Write};

use tracing::{debug, warn};

use super::{MenuChoice, Prompter};
use crate::audit::{AuditEntry, AuditLogger, Operation, Subject};
use crate::config::Settings;
use crate::display::{format_budget_status, format_expense_register, format_monthly_summary};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{parse_amount, Month, DATE_FORMAT};
use crate::services::{Ledger, NewExpense};
use crate::storage::Storage;

/// Number of entries shown by the activity log view
const RECENT_ACTIVITY: usize = 10;

/// An interactive ledger session
pub struct Session {
    ledger: Ledger,
    storage: Storage,
    settings: Settings,
    audit: Option<AuditLogger>,
    /// In-memory changes not yet written to disk
    dirty: bool,
    /// Set when the startup load failed, so exit never overwrites that file
    autosave_blocked: bool,
}

impl Session {
    pub fn new(storage: Storage, settings: Settings) -> Self {
        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(storage.paths().audit_log()));

        Self {
            ledger: Ledger::new(),
            storage,
            settings,
            audit,
            dirty: false,
            autosave_blocked: false,
        }
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Load existing data, then run the menu loop until Exit or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, output: W) -> LedgerResult<()> {
        let mut prompter = Prompter::new(input, output);
        prompter.say("Welcome to Personal Expense Tracker!")?;

        if let Err(e) = self.load(&mut prompter) {
            prompter.say(format!("Error loading expenses: {}", e))?;
            prompter.say("Starting with an empty ledger. Autosave on exit is disabled.")?;
            self.autosave_blocked = true;
        }

        loop {
            prompter.print(MenuChoice::render_menu())?;
            let count = MenuChoice::ALL.len();
            let Some(line) = prompter.ask(&format!("\nEnter your choice (1-{}): ", count))? else {
                if self.dirty {
                    prompter.say("End of input. Unsaved changes were discarded.")?;
                } else {
                    prompter.say("End of input. Goodbye!")?;
                }
                return Ok(());
            };

            let Some(choice) = MenuChoice::parse(&line) else {
                prompter.say(format!(
                    "Invalid choice. Please enter a number between 1 and {}.",
                    count
                ))?;
                continue;
            };
            debug!(?choice, "menu selection");

            if choice == MenuChoice::Exit {
                if self.exit(&mut prompter)? {
                    return Ok(());
                }
                continue;
            }

            if let Err(e) = self.dispatch(choice, &mut prompter) {
                prompter.say(format!("Error: {}", e))?;
            }
        }
    }

    fn dispatch<R: BufRead, W: Write>(
        &mut self,
        choice: MenuChoice,
        prompter: &mut Prompter<R, W>,
    ) -> LedgerResult<()> {
        match choice {
            MenuChoice::AddExpense => self.add_expense(prompter),
            MenuChoice::ListExpenses => self.list_expenses(prompter),
            MenuChoice::SetBudget => self.set_budget(prompter),
            MenuChoice::BudgetStatus => self.budget_status(prompter),
            MenuChoice::MonthlyReport => self.monthly_report(prompter),
            MenuChoice::Save => self.save(prompter),
            MenuChoice::Load => {
                if self.dirty
                    && !prompter
                        .confirm("Discard unsaved changes and reload from disk? (yes/no) [no]: ")?
                {
                    return prompter.say("Load cancelled.");
                }
                self.load(prompter)
            }
            MenuChoice::ActivityLog => self.activity_log(prompter),
            MenuChoice::Exit => Ok(()),
        }
    }

    fn add_expense<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        prompter.say("\n=== Add Expense ===")?;

        let Some(date) = prompter.ask("Enter date (YYYY-MM-DD) or 'today' for today's date: ")? else {
            return Ok(());
        };
        let date = if date.eq_ignore_ascii_case("today") {
            chrono::Local::now().date_naive().format(DATE_FORMAT).to_string()
        } else {
            date
        };
        let Some(category) =
            prompter.ask("Enter category (e.g., Food, Transportation, Entertainment): ")?
        else {
            return Ok(());
        };
        let Some(amount) = prompter.ask("Enter amount spent: ")? else {
            return Ok(());
        };
        let Some(description) = prompter.ask("Enter a brief description: ")? else {
            return Ok(());
        };

        let expense = self
            .ledger
            .add_expense(NewExpense {
                date,
                category,
                amount,
                description,
            })?
            .clone();
        self.dirty = true;

        let symbol = &self.settings.currency_symbol;
        self.record(
            AuditEntry::new(
                Operation::Create,
                Subject::Expense,
                format!(
                    "{} {} {}",
                    expense.date().format(DATE_FORMAT),
                    expense.category(),
                    expense.amount().format_with_symbol(symbol)
                ),
            )
            .with_details(&expense),
        );
        prompter.say("Expense added successfully!")
    }

    fn list_expenses<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        let Some(filter) = prompter.ask("Filter by category (leave blank for all): ")? else {
            return Ok(());
        };
        let filter = (!filter.is_empty()).then_some(filter.as_str());

        match filter {
            Some(category) => prompter.say(format!("\n=== Expenses: {} ===", category))?,
            None => prompter.say("\n=== Expense Records ===")?,
        }
        let register = format_expense_register(
            self.ledger.list_expenses(filter),
            &self.settings.currency_symbol,
        );
        prompter.print(register)
    }

    fn set_budget<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        prompter.say("\n=== Set Monthly Budget ===")?;
        let Some(input) = prompter.ask("Enter your monthly budget: ")? else {
            return Ok(());
        };

        let amount = parse_amount(&input)?;
        let previous = self.ledger.budget();
        self.ledger.set_budget(amount)?;
        self.dirty = true;

        let symbol = &self.settings.currency_symbol;
        let summary = match previous {
            Some(old) => format!(
                "{} -> {}",
                old.format_with_symbol(symbol),
                amount.format_with_symbol(symbol)
            ),
            None => amount.format_with_symbol(symbol),
        };
        self.record(AuditEntry::new(Operation::Update, Subject::Budget, summary));
        prompter.say(format!(
            "Monthly budget set to {}",
            amount.format_with_symbol(symbol)
        ))
    }

    fn budget_status<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        prompter.say("\n=== Budget Status ===")?;
        prompter.print(format_budget_status(
            &self.ledger,
            &self.settings.currency_symbol,
        ))
    }

    fn monthly_report<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        prompter.say("\n=== Budget Tracker ===")?;
        let Some(input) =
            prompter.ask("Enter month (YYYY-MM or MM-YYYY), blank for the current month: ")?
        else {
            return Ok(());
        };

        let month = if input.is_empty() {
            Month::current()
        } else {
            Month::parse(&input).map_err(|e| LedgerError::Validation(e.to_string()))?
        };

        let summary = self.ledger.monthly_summary(month)?;
        prompter.print(format_monthly_summary(
            &summary,
            &self.settings.currency_symbol,
        ))
    }

    fn save<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        self.storage.save(&self.ledger)?;
        self.dirty = false;
        self.autosave_blocked = false;

        self.record(AuditEntry::new(
            Operation::Save,
            Subject::Ledger,
            format!(
                "{} expense(s) to {}",
                self.ledger.len(),
                self.storage.paths().data_file().display()
            ),
        ));
        prompter.say(format!(
            "Expenses saved to {}",
            self.storage.paths().data_file().display()
        ))
    }

    /// Replace the ledger with the data on disk; on error the ledger is untouched
    fn load<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        let data = self.storage.load()?;
        let path = self.storage.paths().data_file().display().to_string();
        let file_found = data.file_found;
        let count = data.expenses.len();

        self.ledger.replace(data.expenses, data.budget);
        self.dirty = false;
        self.autosave_blocked = false;

        if !file_found {
            return prompter.say(format!(
                "No data file at {}; starting with an empty ledger.",
                path
            ));
        }

        self.record(AuditEntry::new(
            Operation::Load,
            Subject::Ledger,
            format!("{} expense(s) from {}", count, path),
        ));
        prompter.say(format!("Loaded {} expense(s) from {}", count, path))?;
        if let Some(budget) = self.ledger.budget() {
            prompter.say(format!(
                "Monthly budget: {}",
                budget.format_with_symbol(&self.settings.currency_symbol)
            ))?;
        }
        Ok(())
    }

    fn activity_log<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<()> {
        let Some(audit) = &self.audit else {
            return prompter.say("Activity log is disabled.");
        };

        let entries = audit.read_recent(RECENT_ACTIVITY)?;
        prompter.say("\n=== Recent Activity ===")?;
        if entries.is_empty() {
            return prompter.say("No activity recorded yet.");
        }
        for entry in entries {
            prompter.say(entry.format_line())?;
        }
        Ok(())
    }

    /// Returns true when the loop should stop
    fn exit<R: BufRead, W: Write>(&mut self, prompter: &mut Prompter<R, W>) -> LedgerResult<bool> {
        if self.dirty {
            if self.settings.autosave_on_exit && !self.autosave_blocked {
                if let Err(e) = self.save(prompter) {
                    prompter.say(format!("Error saving expenses: {}", e))?;
                    if !prompter.confirm("Exit without saving? (yes/no) [no]: ")? {
                        return Ok(false);
                    }
                }
            } else if !prompter.confirm("You have unsaved changes. Exit without saving? (yes/no) [no]: ")? {
                return Ok(false);
            }
        }

        prompter.say("Thank you for using Personal Expense Tracker. Goodbye!")?;
        Ok(true)
    }

    fn record(&self, entry: AuditEntry) {
        if let Some(audit) = &self.audit {
            if let Err(e) = audit.log(&entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LedgerPaths;
    use crate::models::Money;
    use std::fs;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn session_in(temp_dir: &TempDir) -> Session {
        let paths = LedgerPaths::new(temp_dir.path().join("expenses.csv"));
        Session::new(Storage::new(paths), Settings::default())
    }

    fn run_script(session: &mut Session, script: &str) -> String {
        run_bytes(session, script.as_bytes())
    }

    fn run_bytes(session: &mut Session, script: &[u8]) -> String {
        let mut output = Vec::new();
        session.run(Cursor::new(script.to_vec()), &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_add_and_list() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(
            &mut session,
            "1\n2024-01-05\nFood\n12.50\nlunch\n\
             1\n2024-01-06\nTransportation\n3.00\nbus\n\
             2\nFood\n",
        );

        assert!(output.contains("Expense added successfully!"));
        assert!(output.contains("1 expense(s), total: $12.50"));
        assert_eq!(session.ledger().total_spent(None), Money::from_cents(1550));
        assert!(session.is_dirty());
    }

    #[test]
    fn test_invalid_date_is_reported_and_loop_continues() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "1\n2024-13-01\nFood\n5\nbad\n4\n");

        assert!(output.contains("Error: Validation error: Invalid date '2024-13-01'"));
        assert!(output.contains("=== Budget Status ==="));
        assert!(session.ledger().is_empty());
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_budget_flow() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(
            &mut session,
            "5\n2024-01\n3\n100.00\n1\n2024-01-05\nFood\n12.50\nlunch\n5\n01-2024\n",
        );

        assert!(output.contains("No budget set. Please set a budget first."));
        assert!(output.contains("Monthly budget set to $100.00"));
        assert!(output.contains("You have $87.50 left for the month."));
    }

    #[test]
    fn test_negative_budget_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "3\n-5\n");
        assert!(output.contains("Amount cannot be negative"));
        assert_eq!(session.ledger().budget(), None);
    }

    #[test]
    fn test_exit_autosaves() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "3\n100\n1\ntoday\nFood\n1\nsnack\n9\n");
        assert!(output.contains("Goodbye!"));
        assert!(!session.is_dirty());

        let saved = fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
        assert!(saved.starts_with("date,category,amount,description\n"));
        assert!(saved.contains(",Food,1.00,snack"));
        assert!(temp_dir.path().join("expenses.budget.json").exists());
    }

    #[test]
    fn test_startup_load_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("expenses.csv"),
            "date,category,amount,description\n2024-01-05,Food,12.50,lunch\n",
        )
        .unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "1\n2024-01-06\nFood\n1\nx\n7\nyes\n");
        assert!(output.contains("Loaded 1 expense(s)"));
        assert_eq!(session.ledger().len(), 1);
        assert!(!session.is_dirty());
    }

    #[test]
    fn test_corrupt_file_on_load_keeps_ledger() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("expenses.csv");
        let mut session = session_in(&temp_dir);

        // Save one expense, then corrupt the file and try to reload
        run_script(&mut session, "1\n2024-01-05\nFood\n12.50\nlunch\n6\n");
        fs::write(&data_file, "2024-01-05,Food,twelve,lunch\n").unwrap();

        let mut output = Vec::new();
        let mut prompter = Prompter::new(Cursor::new("".to_string()), &mut output);
        let err = session.load(&mut prompter).unwrap_err();
        assert!(matches!(err, LedgerError::Parse { line: 1, .. }));
        assert_eq!(session.ledger().len(), 1);
    }

    #[test]
    fn test_startup_parse_error_blocks_autosave() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("expenses.csv");
        fs::write(&data_file, "2024-01-05,Food,abc,lunch\n").unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "1\n2024-01-06\nFood\n1\nx\n9\nyes\n");
        assert!(output.contains("Error loading expenses: Parse error at line 1"));
        assert!(output.contains("Exit without saving?"));
        assert_eq!(
            fs::read_to_string(&data_file).unwrap(),
            "2024-01-05,Food,abc,lunch\n"
        );
    }

    #[test]
    fn test_activity_log() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "3\n50\n6\n8\n");
        assert!(output.contains("=== Recent Activity ==="));
        assert!(output.contains("UPDATE"));
        assert!(output.contains("SAVE"));
    }

    #[test]
    fn test_invalid_menu_choice() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(&mut session, "42\n");
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 9."));
        assert!(output.contains("End of input. Goodbye!"));
    }

    #[test]
    fn test_non_utf8_menu_line_keeps_session_alive() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_bytes(
            &mut session,
            b"1\n2024-01-05\nFood\n12.50\nlunch\n\xff\xfe\n\xff\n9\n",
        );
        assert!(output.contains("Invalid choice. Please enter a number between 1 and 9."));
        assert!(output.contains("Goodbye!"));
        assert!(!session.is_dirty());

        let saved = fs::read_to_string(temp_dir.path().join("expenses.csv")).unwrap();
        assert!(saved.contains("2024-01-05,Food,12.50,lunch"));
    }

    #[test]
    fn test_amount_above_max_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let mut session = session_in(&temp_dir);

        let output = run_script(
            &mut session,
            "1\n2024-01-05\nFood\n92233720368547758.07\nx\n\
             1\n2024-01-05\nFood\n92233720368547758.07\nx\n4\n",
        );
        assert!(output.contains("Amount cannot exceed $1000000000000.00"));
        assert!(output.contains("=== Budget Status ==="));
        assert!(session.ledger().is_empty());
    }
}
