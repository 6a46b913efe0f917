//! Date Span Library
//!
//! Calculates the difference between a calendar date and today in years,
//! months and days. This library provides functionality to:
//! - Check whether a (day, month, year) triple is a real calendar date
//! - Calculate an age from a past date
//! - Calculate a countdown to a future date
//! - Validate raw date form fields
//! - Render results as text or JSON
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use date_span::span::{calculate_age_on, DateDifference};
//!
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let age = calculate_age_on(16, 3, 2000, today).expect("valid past date");
//! assert_eq!(age, DateDifference::new(23, 11, 28));
//! ```

pub mod error;
pub mod date;
pub mod span;
pub mod form;
pub mod report;
pub mod logging;

// Re-export commonly used items
pub use error::{Error, Result};
pub use span::{Calculation, DateDifference};
