//! Date form input validation
//!
//! Turns the three raw text fields of a date form into a [`CalendarDate`],
//! reporting a message for every field that fails.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::date::CalendarDate;
use crate::error::{Error, Field, FieldError, Result};
use crate::span::{Calculation, DateDifference};

const REQUIRED: &str = "This field is required";
const NUMBERS_ONLY: &str = "Numbers only";

/// Raw, unvalidated form input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DateFields {
    pub day: String,
    pub month: String,
    pub year: String,
}

impl DateFields {
    pub fn new(day: impl Into<String>, month: impl Into<String>, year: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            month: month.into(),
            year: year.into(),
        }
    }
}

/// Limits applied to one numeric field
struct FieldRule {
    field: Field,
    max_len: usize,
    min: i32,
    max: Option<i32>,
    invalid: &'static str,
}

const DAY: FieldRule = FieldRule {
    field: Field::Day,
    max_len: 2,
    min: 1,
    max: Some(31),
    invalid: "Invalid day",
};

const MONTH: FieldRule = FieldRule {
    field: Field::Month,
    max_len: 2,
    min: 1,
    max: Some(12),
    invalid: "Invalid month",
};

const YEAR: FieldRule = FieldRule {
    field: Field::Year,
    max_len: 4,
    min: 1,
    max: None,
    invalid: "Invalid year",
};

impl FieldRule {
    fn parse(&self, raw: &str) -> std::result::Result<i32, FieldError> {
        let raw = raw.trim();
        let fail = |message: &str| FieldError::new(self.field, message);

        if raw.is_empty() {
            return Err(fail(REQUIRED));
        }
        if !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(fail(NUMBERS_ONLY));
        }
        if raw.len() > self.max_len {
            return Err(fail(self.invalid));
        }

        let value: i32 = raw.parse().map_err(|_| fail(self.invalid))?;
        if value < self.min || self.max.is_some_and(|max| value > max) {
            return Err(fail(self.invalid));
        }
        Ok(value)
    }
}

/// Year rule of each page: ages need a past year, countdowns a coming one
fn check_year(
    calculation: Calculation,
    year: i32,
    current_year: i32,
) -> std::result::Result<(), FieldError> {
    match calculation {
        Calculation::Age if year > current_year => {
            Err(FieldError::new(Field::Year, "Cannot be in the future"))
        }
        Calculation::Countdown if year < current_year => {
            Err(FieldError::new(Field::Year, "Year must be the current year or later"))
        }
        _ => Ok(()),
    }
}

/// Validate raw form fields into a calendar date.
///
/// Every field is checked and all failures are returned together in
/// [`Error::InvalidFields`]. Range checks are per field only; whether the
/// triple is a real date is left to the calculation.
pub fn parse_fields(
    fields: &DateFields,
    calculation: Calculation,
    today: NaiveDate,
) -> Result<CalendarDate> {
    let mut errors = Vec::new();

    let day = DAY.parse(&fields.day).map_err(|e| errors.push(e)).ok();
    let month = MONTH.parse(&fields.month).map_err(|e| errors.push(e)).ok();
    let year = YEAR
        .parse(&fields.year)
        .and_then(|year| check_year(calculation, year, today.year()).map(|_| year))
        .map_err(|e| errors.push(e))
        .ok();

    match (day, month, year) {
        (Some(day), Some(month), Some(year)) => Ok(CalendarDate::new(day, month, year)),
        _ => {
            debug!(?errors, "form fields rejected");
            Err(Error::InvalidFields(errors))
        }
    }
}

/// Validate the form and run the calculation in one step
pub fn submit(
    fields: &DateFields,
    calculation: Calculation,
    today: NaiveDate,
) -> Result<DateDifference> {
    let date = parse_fields(fields, calculation, today)?;
    calculation.compute_on(date, today)
}
