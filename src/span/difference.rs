//! Years/months/days difference and the borrowing rule shared by both calculations

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::date::{days_in_month, previous_month};

/// A non-negative span expressed in calendar units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateDifference {
    pub years: u32,
    /// Always in `0..=11`
    pub months: u32,
    pub days: u32,
}

impl DateDifference {
    pub fn new(years: u32, months: u32, days: u32) -> Self {
        Self { years, months, days }
    }

    /// True for a span of zero days
    pub fn is_zero(&self) -> bool {
        self.years == 0 && self.months == 0 && self.days == 0
    }
}

/// Normalize raw component differences into a [`DateDifference`].
///
/// A negative day count borrows the length of the month before
/// `(anchor_year, anchor_month)`, stepping one month further back for each
/// extra borrow. A negative month count then borrows whole years.
///
/// Callers must pass differences describing a non-negative span.
pub(crate) fn normalize(
    years: i32,
    months: i32,
    days: i32,
    anchor_year: i32,
    anchor_month: i32,
) -> DateDifference {
    let (mut y, mut m, mut d) = (years, months, days);
    let (mut year, mut month) = (anchor_year, anchor_month);

    // Fix day underflow. One borrow is not always enough: 31 January 2023 to
    // 1 March 2023 is (0, 2, -30), and February's 28 days leave (0, 1, -2).
    // Keep borrowing until the days are non-negative, giving (0, 0, 29).
    while d < 0 {
        (year, month) = previous_month(year, month);
        let borrowed = days_in_month(year, month);
        debug!(year, month, borrowed, "borrowing days from previous month");
        d += borrowed;
        m -= 1;
    }

    // Fix month underflow
    while m < 0 {
        m += 12;
        y -= 1;
    }

    debug_assert!(y >= 0, "span must not be negative");
    DateDifference::new(y.max(0) as u32, m as u32, d as u32)
}
