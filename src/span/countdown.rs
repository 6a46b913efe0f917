//! Remaining time from today to a future date (an event)

use chrono::NaiveDate;
use tracing::debug;

use super::difference::{normalize, DateDifference};
use crate::date::{self, is_valid_date, CalendarDate};
use crate::error::{Error, Result};

/// Calculate the time left until a future date as of the local date
pub fn calculate_countdown(day: i32, month: i32, year: i32) -> Result<DateDifference> {
    calculate_countdown_on(day, month, year, date::today())
}

/// Calculate the time left until a future date as of `today`.
///
/// The calendar check runs first. A target on `today` or earlier is not an
/// upcoming event and fails with [`Error::PastDate`]. Days are borrowed from
/// the month before the target month, not the current one.
pub fn calculate_countdown_on(
    day: i32,
    month: i32,
    year: i32,
    today: NaiveDate,
) -> Result<DateDifference> {
    let target = CalendarDate::new(day, month, year);
    let now = CalendarDate::from(today);
    debug!(%target, %now, "calculating countdown");

    if !is_valid_date(day, month, year) {
        return Err(Error::InvalidDate { day, month, year });
    }

    if target <= now {
        return Err(Error::PastDate);
    }

    Ok(normalize(
        year - now.year,
        month - now.month,
        day - now.day,
        year,
        month,
    ))
}
