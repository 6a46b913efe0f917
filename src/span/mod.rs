//! Date-difference engine

pub mod age;
pub mod countdown;
pub mod difference;

use std::fmt;

use chrono::NaiveDate;

use crate::date::CalendarDate;
use crate::error::Result;

// Re-export commonly used items
pub use age::{calculate_age, calculate_age_on};
pub use countdown::{calculate_countdown, calculate_countdown_on};
pub use difference::DateDifference;

/// Which difference to compute
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Calculation {
    /// Elapsed time since a past date
    Age,
    /// Remaining time until a future date
    Countdown,
}

impl Calculation {
    /// Run the calculation for `date` as of `today`
    pub fn compute_on(self, date: CalendarDate, today: NaiveDate) -> Result<DateDifference> {
        match self {
            Calculation::Age => calculate_age_on(date.day, date.month, date.year, today),
            Calculation::Countdown => {
                calculate_countdown_on(date.day, date.month, date.year, today)
            }
        }
    }

    /// Heading used when presenting a result
    pub fn title(self) -> &'static str {
        match self {
            Calculation::Age => "Age",
            Calculation::Countdown => "Time until the event",
        }
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Calculation::Age => f.write_str("age"),
            Calculation::Countdown => f.write_str("countdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn test_compute_dispatches() {
        let birth = CalendarDate::new(16, 3, 2000);
        assert_eq!(
            Calculation::Age.compute_on(birth, today()).unwrap(),
            DateDifference::new(23, 11, 28)
        );

        let event = CalendarDate::new(1, 1, 2025);
        assert_eq!(
            Calculation::Countdown.compute_on(event, today()).unwrap(),
            DateDifference::new(0, 9, 17)
        );
    }

    #[test]
    fn test_same_day_boundary_differs() {
        let now = CalendarDate::from(today());
        assert!(Calculation::Age.compute_on(now, today()).unwrap().is_zero());
        assert!(matches!(
            Calculation::Countdown.compute_on(now, today()),
            Err(Error::PastDate)
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(Calculation::Age.to_string(), "age");
        assert_eq!(Calculation::Countdown.to_string(), "countdown");
    }
}
