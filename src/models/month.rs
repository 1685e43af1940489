//! Calendar month used for monthly budget tracking

use chrono::{Datelike, NaiveDate};
use std::fmt;

/// A calendar month (e.g., "2024-01")
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month {
    year: i32,
    month: u32,
}

impl Month {
    /// Create a month, returning None if `month` is outside 1-12
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    /// The month containing the given date
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The current month in local time
    pub fn current() -> Self {
        Self::of(chrono::Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Long display name, e.g. "January 2024"
    pub fn long_name(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }

    /// Parse "YYYY-MM" or "MM-YYYY"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let invalid = || MonthParseError::InvalidFormat(s.to_string());

        let (first, second) = s.split_once('-').ok_or_else(invalid)?;
        let (year, month) = if first.len() == 4 {
            (first, second)
        } else if second.len() == 4 {
            (second, first)
        } else {
            return Err(invalid());
        };

        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month).ok_or_else(invalid)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}'. Use YYYY-MM or MM-YYYY.", s)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_both_orders() {
        let a = Month::parse("2025-08").unwrap();
        let b = Month::parse("08-2025").unwrap();
        assert_eq!(a, b);
        assert_eq!(a.year(), 2025);
        assert_eq!(a.month(), 8);
    }

    #[test]
    fn test_parse_rejects_bad_month() {
        assert!(Month::parse("2025-13").is_err());
        assert!(Month::parse("2025").is_err());
        assert!(Month::parse("25-08").is_err());
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2024, 1).unwrap();
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[test]
    fn test_display() {
        let month = Month::new(2024, 3).unwrap();
        assert_eq!(month.to_string(), "2024-03");
        assert_eq!(month.long_name(), "March 2024");
    }
}
