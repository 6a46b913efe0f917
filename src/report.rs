//! Result presentation
//!
//! Renders the outcome of a calculation either as plain text or as a JSON
//! tagged outcome (`{"ok": true, "value": ..}` / `{"ok": false, "message": ..}`).

use std::fmt::Write as _;
use std::io::Write as _;
use std::path::Path;
use std::str::FromStr;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Result;
use crate::span::{Calculation, DateDifference};

/// Shown with a failed outcome
pub const FALLBACK_MESSAGE: &str = "Please fill in all fields correctly.";

const PLACEHOLDER: &str = "--";

/// Success carrying a difference, or failure carrying a reason
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(DateDifference),
    Failure(String),
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    pub fn value(&self) -> Option<&DateDifference> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }
}

impl<E: std::fmt::Display> From<std::result::Result<DateDifference, E>> for Outcome {
    fn from(result: std::result::Result<DateDifference, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(e) => Outcome::Failure(e.to_string()),
        }
    }
}

impl Serialize for Outcome {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        match self {
            Outcome::Success(value) => {
                state.serialize_field("ok", &true)?;
                state.serialize_field("value", value)?;
            }
            Outcome::Failure(message) => {
                state.serialize_field("ok", &false)?;
                state.serialize_field("message", message)?;
            }
        }
        state.end()
    }
}

/// Output format for a report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for ReportFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(ReportFormat::Text),
            "json" => Ok(ReportFormat::Json),
            other => Err(format!("Unknown format: {} (expected text or json)", other)),
        }
    }
}

fn plural(n: Option<u32>) -> &'static str {
    if n == Some(1) { "" } else { "s" }
}

fn line(out: &mut String, value: Option<u32>, unit: &str) {
    let shown = value.map_or_else(|| PLACEHOLDER.to_string(), |n| n.to_string());
    let _ = writeln!(out, "{} {}{}", shown, unit, plural(value));
}

/// Render an outcome as text, one unit per line.
///
/// A failed outcome keeps the layout with `--` in place of the numbers,
/// followed by the fallback message and the reason.
pub fn render_text(calculation: Calculation, outcome: &Outcome) -> String {
    let value = outcome.value();
    let mut out = String::new();

    let _ = writeln!(out, "{}", calculation.title());
    line(&mut out, value.map(|v| v.years), "year");
    line(&mut out, value.map(|v| v.months), "month");
    line(&mut out, value.map(|v| v.days), "day");

    if let Outcome::Failure(message) = outcome {
        let _ = writeln!(out, "{}", FALLBACK_MESSAGE);
        let _ = writeln!(out, "{}", message);
    }

    out
}

/// Render an outcome as pretty-printed JSON
pub fn render_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

/// Render in the requested format
pub fn render(calculation: Calculation, outcome: &Outcome, format: ReportFormat) -> Result<String> {
    match format {
        ReportFormat::Text => Ok(render_text(calculation, outcome)),
        ReportFormat::Json => {
            let mut json = render_json(outcome)?;
            json.push('\n');
            Ok(json)
        }
    }
}

/// Write a rendered report to `path`, or to stdout when no path is given
pub fn write_report(report: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, report)?,
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(report.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}
