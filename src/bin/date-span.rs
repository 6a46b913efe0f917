//! Date Span CLI tool
//!
//! A command-line tool for calculating an age or a countdown from a date.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use std::process;
use tracing::{info, warn};

use date_span::date::{format_date, parse_date_expression, resolve_date};
use date_span::form::{self, DateFields};
use date_span::logging::init_cli_logger;
use date_span::report::{self, Outcome, ReportFormat};
use date_span::Calculation;

/// Date Span - Age and countdown in years, months and days
#[derive(Parser)]
#[command(name = "date-span")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "EXAMPLES:
    # How old is someone born on 16 March 2000?
    date-span age 16 3 2000

    # How long until New Year's Day 2030, as JSON
    date-span countdown 1 1 2030 --format json

    # Calculate against a fixed reference date
    date-span age 16 3 2000 --today 2024-03-15")]
struct Cli {
    /// Enable debug logging (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Time elapsed since a past date (e.g. a birth date)
    Age(DateArgs),

    /// Time remaining until a future date (e.g. an event)
    Countdown(DateArgs),
}

#[derive(Args)]
struct DateArgs {
    /// Day of the month (1-31)
    #[arg(allow_hyphen_values = true)]
    day: String,

    /// Month (1-12)
    #[arg(allow_hyphen_values = true)]
    month: String,

    /// Year (e.g. 2000)
    #[arg(allow_hyphen_values = true)]
    year: String,

    /// Reference date instead of today ("today", "2024-03-15", "03/15/2024")
    #[arg(long, env = "DATE_SPAN_TODAY", default_value = "today")]
    today: String,

    /// Output format: text or json
    #[arg(long, default_value = "text")]
    format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_cli_logger(cli.verbose);

    let result = match cli.command {
        Commands::Age(args) => cmd_calculate(Calculation::Age, args),
        Commands::Countdown(args) => cmd_calculate(Calculation::Countdown, args),
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Validate the fields, run the calculation and write the report
fn cmd_calculate(calculation: Calculation, args: DateArgs) -> Result<()> {
    let expr = parse_date_expression(&args.today).context("Invalid --today value")?;
    let today = resolve_date(&expr);
    info!(%calculation, today = %format_date(&today), "calculating");

    let fields = DateFields::new(args.day, args.month, args.year);
    let result = form::submit(&fields, calculation, today);

    let outcome = match &result {
        Ok(value) => Outcome::Success(*value),
        Err(e) => Outcome::Failure(e.to_string()),
    };

    let rendered = report::render(calculation, &outcome, args.format)?;
    report::write_report(&rendered, args.output.as_deref())
        .context("Failed to write report")?;

    if let Some(path) = &args.output {
        eprintln!("Output: {}", path.display());
    }

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            // Engine errors repeat one message across all three fields
            let mut reasons: Vec<String> = Vec::new();
            for field_error in e.field_errors() {
                if reasons.contains(&field_error.message) {
                    continue;
                }
                warn!(field = %field_error.field, reason = %field_error.message, "rejected");
                reasons.push(field_error.message);
            }
            Err(e.into())
        }
    }
}
