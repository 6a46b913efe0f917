//! Elapsed time from a past date (a birth date) to today

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use super::difference::{normalize, DateDifference};
use crate::date::{self, is_valid_date, CalendarDate};
use crate::error::{Error, Result};

/// Calculate an age in years, months and days as of the local date
pub fn calculate_age(day: i32, month: i32, year: i32) -> Result<DateDifference> {
    calculate_age_on(day, month, year, date::today())
}

/// Calculate an age in years, months and days as of `today`.
///
/// A date after `today` is rejected before the calendar check runs, so an
/// impossible date in the future reports [`Error::FutureDate`]. Days are
/// borrowed from the month before `today`'s month.
pub fn calculate_age_on(
    day: i32,
    month: i32,
    year: i32,
    today: NaiveDate,
) -> Result<DateDifference> {
    let birth = CalendarDate::new(day, month, year);
    let now = CalendarDate::from(today);
    debug!(%birth, %now, "calculating age");

    if birth > now {
        return Err(Error::FutureDate);
    }

    if !is_valid_date(day, month, year) {
        return Err(Error::InvalidDate { day, month, year });
    }

    Ok(normalize(
        now.year - year,
        now.month - month,
        now.day - day,
        today.year(),
        today.month() as i32,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_same_day_is_zero() {
        let today = ymd(2024, 3, 15);
        let age = calculate_age_on(15, 3, 2024, today).unwrap();
        assert!(age.is_zero());
    }

    #[test]
    fn test_exact_years() {
        let age = calculate_age_on(15, 3, 2000, ymd(2024, 3, 15)).unwrap();
        assert_eq!(age, DateDifference::new(24, 0, 0));
    }

    #[test]
    fn test_borrows_from_leap_february() {
        let age = calculate_age_on(16, 3, 2000, ymd(2024, 3, 15)).unwrap();
        assert_eq!(age, DateDifference::new(23, 11, 28));
    }

    #[test]
    fn test_borrows_relative_to_today() {
        // Birth month has 31 days but the borrow uses April, the month before today
        let age = calculate_age_on(20, 1, 2020, ymd(2024, 5, 10)).unwrap();
        assert_eq!(age, DateDifference::new(4, 3, 20));
    }

    #[test]
    fn test_january_today_borrows_december() {
        let age = calculate_age_on(20, 6, 1990, ymd(2024, 1, 5)).unwrap();
        assert_eq!(age, DateDifference::new(33, 6, 16));
    }

    #[test]
    fn test_future_date_rejected() {
        let today = ymd(2024, 3, 15);
        assert!(matches!(calculate_age_on(16, 3, 2024, today), Err(Error::FutureDate)));
        assert!(matches!(calculate_age_on(1, 4, 2024, today), Err(Error::FutureDate)));
        assert!(matches!(calculate_age_on(1, 1, 2025, today), Err(Error::FutureDate)));
    }

    #[test]
    fn test_invalid_date_rejected() {
        let today = ymd(2024, 3, 15);
        assert!(matches!(
            calculate_age_on(29, 2, 2023, today),
            Err(Error::InvalidDate { day: 29, month: 2, year: 2023 })
        ));
        assert!(matches!(calculate_age_on(31, 4, 2020, today), Err(Error::InvalidDate { .. })));
    }

    #[test]
    fn test_future_check_precedes_validity_check() {
        let today = ymd(2024, 3, 15);
        assert!(matches!(calculate_age_on(31, 4, 2030, today), Err(Error::FutureDate)));
    }

    #[test]
    fn test_month_end_birth_borrows_twice() {
        let age = calculate_age_on(31, 1, 2023, ymd(2023, 3, 1)).unwrap();
        assert_eq!(age, DateDifference::new(0, 0, 29));
    }

    #[test]
    fn test_leap_day_birth() {
        let age = calculate_age_on(29, 2, 2024, ymd(2024, 3, 15)).unwrap();
        assert_eq!(age, DateDifference::new(0, 0, 15));
    }

    #[test]
    fn test_components_stay_in_range() {
        let today = ymd(2023, 3, 1);
        for year in [2021, 2022, 2023] {
            for month in 1..=12 {
                for day in 1..=31 {
                    if let Ok(age) = calculate_age_on(day, month, year, today) {
                        assert!(age.months <= 11, "{}-{}-{}: {:?}", year, month, day, age);
                        assert!(age.days <= 31, "{}-{}-{}: {:?}", year, month, day, age);
                    }
                }
            }
        }
    }

    #[test]
    fn test_current_date_variant_accepts_today() {
        let now = date::today();
        let age = calculate_age(now.day() as i32, now.month() as i32, now.year()).unwrap();
        assert!(age.is_zero());
    }
}
