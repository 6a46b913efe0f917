//! Error types for the date-span library

use std::fmt;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// One of the three input fields of a date form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Day,
    Month,
    Year,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Day => "day",
            Field::Month => "month",
            Field::Year => "year",
        };
        f.write_str(name)
    }
}

/// A validation message attached to a single form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    pub fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Main error type for the date-span library
#[derive(Error, Debug)]
pub enum Error {
    /// The triple does not name a real calendar date
    #[error("Invalid date")]
    InvalidDate { day: i32, month: i32, year: i32 },

    /// Age input is after today
    #[error("Future dates are not allowed")]
    FutureDate,

    /// Countdown target is today or earlier
    #[error("The event date must be in the future")]
    PastDate,

    /// One or more form fields failed validation
    #[error("{}", join_field_errors(.0))]
    InvalidFields(Vec<FieldError>),

    /// Reference date parsing error
    #[error("Invalid date expression: {0}")]
    InvalidDateExpression(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Per-field messages for a date form.
    ///
    /// Field validation errors keep their own fields. Any other input error
    /// is attached to all three fields with the same message.
    pub fn field_errors(&self) -> Vec<FieldError> {
        match self {
            Error::InvalidFields(errors) => errors.clone(),
            other => {
                let message = other.to_string();
                [Field::Day, Field::Month, Field::Year]
                    .into_iter()
                    .map(|field| FieldError::new(field, message.clone()))
                    .collect()
            }
        }
    }
}
