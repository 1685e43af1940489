use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use expense_ledger::config::{LedgerPaths, Settings, DEFAULT_DATA_FILE};
use expense_ledger::menu::Session;
use expense_ledger::storage::Storage;

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Command-line personal expense tracker",
    long_about = "Record, categorize and budget personal expenses from an interactive \
                  menu. Expenses are kept in a CSV file between sessions; the monthly \
                  budget and an activity log are stored next to it."
)]
struct Cli {
    /// Path to the expenses CSV file
    #[arg(default_value = DEFAULT_DATA_FILE)]
    data_file: PathBuf,

    /// Currency symbol used when displaying amounts
    #[arg(long, default_value = "$")]
    currency: String,

    /// Do not save unsaved changes automatically on exit
    #[arg(long)]
    no_autosave: bool,

    /// Do not write the activity log
    #[arg(long)]
    no_audit: bool,

    /// Increase diagnostic output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(level))
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let paths = LedgerPaths::new(cli.data_file);
    let mut settings = Settings::default().with_currency(cli.currency);
    settings.autosave_on_exit = !cli.no_autosave;
    settings.audit_enabled = !cli.no_audit;

    tracing::debug!(data_file = %paths.data_file().display(), "starting session");

    let mut session = Session::new(Storage::new(paths), settings);
    session.run(io::stdin().lock(), io::stdout().lock())?;

    Ok(())
}
