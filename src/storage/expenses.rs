//! CSV persistence for expenses
//!
//! File layout: a header row `date,category,amount,description` followed by
//! one row per expense in ledger order. Amounts are written with exactly two
//! decimals; fields containing commas, quotes or newlines are quoted.
//!
//! Reading accepts files with or without the header row. The first malformed
//! row aborts the whole read with a parse error naming its line.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use serde::Serialize;

use super::file_io::write_atomic;
use crate::error::{LedgerError, LedgerResult};
use crate::models::{Expense, DATE_FORMAT};

/// Column names in file order
pub const HEADER: [&str; 4] = ["date", "category", "amount", "description"];

/// One persisted row
#[derive(Debug, Serialize)]
struct ExpenseRow<'a> {
    date: String,
    category: &'a str,
    amount: String,
    description: &'a str,
}

impl<'a> From<&'a Expense> for ExpenseRow<'a> {
    fn from(expense: &'a Expense) -> Self {
        Self {
            date: expense.date().format(DATE_FORMAT).to_string(),
            category: expense.category(),
            amount: expense.amount().to_decimal_string(),
            description: expense.description(),
        }
    }
}

/// Write expenses as CSV to any writer
pub fn write_expenses<W: Write>(writer: W, expenses: &[Expense]) -> LedgerResult<()> {
    let mut csv_writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    csv_writer.write_record(HEADER)?;
    for expense in expenses {
        csv_writer.serialize(ExpenseRow::from(expense))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read expenses from CSV in file order
pub fn read_expenses<R: Read>(reader: R) -> LedgerResult<Vec<Expense>> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut expenses = Vec::new();
    for (index, result) in csv_reader.records().enumerate() {
        let record = result?;
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        if index == 0 && is_header(&record) {
            continue;
        }

        expenses.push(parse_record(&record, line)?);
    }

    Ok(expenses)
}

/// Save expenses to `path`, replacing any existing content atomically
pub fn save_expenses<P: AsRef<Path>>(path: P, expenses: &[Expense]) -> LedgerResult<()> {
    write_atomic(path, |writer| write_expenses(writer, expenses))
}

/// Load expenses from `path`; a missing file yields an empty list
pub fn load_expenses<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<Expense>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(Vec::new());
    }
    load_expenses_required(path)
}

/// Load expenses from `path`; a missing file is an I/O error
pub fn load_expenses_required<P: AsRef<Path>>(path: P) -> LedgerResult<Vec<Expense>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| LedgerError::Io(format!("Failed to open {}: {}", path.display(), e)))?;
    read_expenses(BufReader::new(file))
}

fn is_header(record: &StringRecord) -> bool {
    record.len() == HEADER.len()
        && record
            .iter()
            .zip(HEADER)
            .all(|(field, name)| field.trim().eq_ignore_ascii_case(name))
}

fn parse_record(record: &StringRecord, line: u64) -> LedgerResult<Expense> {
    if record.len() != HEADER.len() {
        return Err(LedgerError::parse_at(
            line,
            format!(
                "expected {} fields ({}), found {}",
                HEADER.len(),
                HEADER.join(","),
                record.len()
            ),
        ));
    }

    Expense::parse(&record[0], &record[1], &record[2], &record[3]).map_err(|e| match e {
        LedgerError::Validation(message) => LedgerError::parse_at(line, message),
        other => other,
    })
}
