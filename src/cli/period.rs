//! The `period` command
//!
//! Exposes the period framer on the command line: frame the period
//! containing a date, or step to the adjacent one.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{month_key_string, step_period, Period, PeriodType, StepDirection};

/// Period inspection commands
#[derive(Subcommand, Debug)]
pub enum PeriodCommands {
    /// Show the period containing a date
    Frame {
        /// Anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Period type: weekly, fortnightly, or monthly
        #[arg(short, long)]
        period_type: Option<String>,
    },
    /// Show the start of the following period
    Next {
        /// Anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Period type: weekly, fortnightly, or monthly
        #[arg(short, long)]
        period_type: Option<String>,
    },
    /// Show the start of the preceding period
    Prev {
        /// Anchor date (YYYY-MM-DD)
        #[arg(short, long)]
        date: String,
        /// Period type: weekly, fortnightly, or monthly
        #[arg(short, long)]
        period_type: Option<String>,
    },
}

fn parse_date(s: &str) -> BudgetResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| BudgetError::Validation(format!("Invalid date: {}", s)))
}

fn resolve_period_type(settings: &Settings, arg: Option<String>) -> BudgetResult<PeriodType> {
    match arg {
        Some(s) => s.parse(),
        None => Ok(settings.period_type),
    }
}

/// Handle a period command
pub fn handle_period_command(settings: &Settings, command: PeriodCommands) -> BudgetResult<()> {
    match command {
        PeriodCommands::Frame { date, period_type } => {
            let anchor = parse_date(&date)?;
            let period_type = resolve_period_type(settings, period_type)?;
            let period = Period::containing(anchor, period_type);
            println!("{}", period.label);
            println!("{} to {}", period.start, period.end);
            println!("month key: {}", month_key_string(period.start));
        }
        PeriodCommands::Next { date, period_type } => {
            let anchor = parse_date(&date)?;
            let period_type = resolve_period_type(settings, period_type)?;
            println!("{}", step_period(anchor, period_type, StepDirection::Next));
        }
        PeriodCommands::Prev { date, period_type } => {
            let anchor = parse_date(&date)?;
            let period_type = resolve_period_type(settings, period_type)?;
            println!("{}", step_period(anchor, period_type, StepDirection::Previous));
        }
    }
    Ok(())
}
