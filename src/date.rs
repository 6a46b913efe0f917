//! Calendar primitives
//!
//! Provides the calendar date triple used by the calculations, the validity
//! check, month-length helpers, and parsing of the reference date ("today")
//! expression accepted on the command line.

use std::cmp::Ordering;
use std::fmt;

use chrono::{Datelike, Local, NaiveDate};
use crate::error::{Error, Result};

/// A (day, month, year) triple with a 1-indexed month and no timezone.
///
/// The triple is not guaranteed to be a real date; use [`is_valid_date`] or
/// [`CalendarDate::to_naive`] to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CalendarDate {
    pub day: i32,
    pub month: i32,
    pub year: i32,
}

impl CalendarDate {
    pub fn new(day: i32, month: i32, year: i32) -> Self {
        Self { day, month, year }
    }

    /// Convert to a chrono date, or `None` if the triple is not a real date
    pub fn to_naive(&self) -> Option<NaiveDate> {
        let month = u32::try_from(self.month).ok()?;
        let day = u32::try_from(self.day).ok()?;
        NaiveDate::from_ymd_opt(self.year, month, day)
    }

    fn key(&self) -> (i32, i32, i32) {
        (self.year, self.month, self.day)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self {
            day: date.day() as i32,
            month: date.month() as i32,
            year: date.year(),
        }
    }
}

// Day granularity: year, then month, then day, on the raw integers
impl Ord for CalendarDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for CalendarDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Check whether (day, month, year) names a real calendar date.
///
/// The date is rebuilt from the triple and the rebuilt components must match
/// the inputs exactly, so 31 April and 29 February of a common year fail.
pub fn is_valid_date(day: i32, month: i32, year: i32) -> bool {
    CalendarDate::new(day, month, year)
        .to_naive()
        .map(|date| {
            date.year() == year && date.month() as i32 == month && date.day() as i32 == day
        })
        .unwrap_or(false)
}

/// Leap-year rule (Gregorian):
///   - divisible by 4 → leap year
///   - except divisible by 100 → not leap year
///   - except divisible by 400 → leap year
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns number of days in a given year/month (handles leap years)
pub fn days_in_month(year: i32, month: i32) -> i32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 30, // should never occur but keeps function total
    }
}

/// The (year, month) immediately before the given one
pub fn previous_month(year: i32, month: i32) -> (i32, i32) {
    if month <= 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Reference date expression types
#[derive(Debug, Clone, PartialEq)]
pub enum DateExpression {
    /// Use the local clock
    Today,
    /// Use an explicit date
    Explicit(NaiveDate),
}

/// Parse a reference date expression
///
/// Supported formats:
/// - `"today"` or `""` → Today
/// - `"2024-03-15"` → Explicit date (ISO format)
/// - `"03/15/2024"` → Explicit date (US format)
pub fn parse_date_expression(expr: &str) -> Result<DateExpression> {
    let expr = expr.trim();

    if expr.is_empty() || expr.eq_ignore_ascii_case("today") {
        return Ok(DateExpression::Today);
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%Y-%m-%d") {
        return Ok(DateExpression::Explicit(date));
    }

    if let Ok(date) = NaiveDate::parse_from_str(expr, "%m/%d/%Y") {
        return Ok(DateExpression::Explicit(date));
    }

    Err(Error::InvalidDateExpression(format!("Unable to parse date expression: {}", expr)))
}

/// Resolve a DateExpression to an actual date
pub fn resolve_date(expr: &DateExpression) -> NaiveDate {
    match expr {
        DateExpression::Today => today(),
        DateExpression::Explicit(date) => *date,
    }
}

/// Today's date on the local clock
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Format a date in the standard format: "Month day, year"
/// Example: "March 15, 2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
