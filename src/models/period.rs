//! Budgeting period framing
//!
//! A period is derived, never stored: given an anchor date and a period type
//! the framer computes the inclusive date range and display label of the
//! period containing that date. Weeks start on Monday, fortnights tile the
//! calendar from a fixed reference Monday, months are calendar months.
//!
//! Assignments are always keyed by calendar month regardless of the budget's
//! period type, so weekly and fortnightly budgets still store one assignment
//! set per month; see [`month_key`].

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BudgetError;

/// Reference Monday that anchors the fortnightly grid.
///
/// Every fortnight starts a whole multiple of 14 days from this date, in
/// either direction. Changing it would silently reframe every fortnightly
/// budget, so it is fixed for the life of the data.
fn fortnight_reference() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap() // a Monday
}

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The cycle a budget runs on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PeriodType {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Weekly => write!(f, "weekly"),
            Self::Fortnightly => write!(f, "fortnightly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

impl FromStr for PeriodType {
    type Err = BudgetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Ok(Self::Weekly),
            "fortnightly" => Ok(Self::Fortnightly),
            "monthly" => Ok(Self::Monthly),
            other => Err(BudgetError::unknown_period_type(other)),
        }
    }
}

/// Direction for stepping between adjacent periods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDirection {
    Next,
    Previous,
}

/// An inclusive budgeting period with a display label
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub label: String,
    pub period_type: PeriodType,
}

impl Period {
    /// Frame the period of the given type containing the anchor date
    pub fn containing(anchor: NaiveDate, period_type: PeriodType) -> Self {
        let (start, end) = match period_type {
            PeriodType::Weekly => {
                let offset = anchor.weekday().num_days_from_monday() as i64;
                let start = anchor - Duration::days(offset);
                (start, start + Duration::days(6))
            }
            PeriodType::Fortnightly => {
                let days = (anchor - fortnight_reference()).num_days();
                let start = fortnight_reference() + Duration::days(days.div_euclid(14) * 14);
                (start, start + Duration::days(13))
            }
            PeriodType::Monthly => {
                let start = NaiveDate::from_ymd_opt(anchor.year(), anchor.month(), 1).unwrap();
                let next_month = if anchor.month() == 12 {
                    NaiveDate::from_ymd_opt(anchor.year() + 1, 1, 1)
                } else {
                    NaiveDate::from_ymd_opt(anchor.year(), anchor.month() + 1, 1)
                };
                (start, next_month.unwrap() - Duration::days(1))
            }
        };

        let label = match period_type {
            PeriodType::Weekly => format!("Week of {}", start.format("%b %d, %Y")),
            PeriodType::Fortnightly => {
                format!("{} - {}", start.format("%b %d"), end.format("%b %d, %Y"))
            }
            PeriodType::Monthly => {
                format!("{} {}", MONTH_NAMES[(start.month() - 1) as usize], start.year())
            }
        };

        Self {
            start,
            end,
            label,
            period_type,
        }
    }

    /// Check if a date falls within this period
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days in the period, inclusive of both ends
    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }

    /// The calendar-month key used for assignment lookups in this period
    pub fn month_key(&self) -> NaiveDate {
        month_key(self.start)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Reduce a date to the first day of its containing calendar month
pub fn month_key(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap()
}

/// The "YYYY-MM-01" string shape of a month key, for the JSON boundary
pub fn month_key_string(date: NaiveDate) -> String {
    month_key(date).format("%Y-%m-%d").to_string()
}

/// Step to the adjacent period and return its start date
///
/// Stepping forward then backward lands back in the original date's period,
/// for every period type.
pub fn step_period(anchor: NaiveDate, period_type: PeriodType, direction: StepDirection) -> NaiveDate {
    let current = Period::containing(anchor, period_type);
    match direction {
        StepDirection::Next => current.end + Duration::days(1),
        StepDirection::Previous => {
            Period::containing(current.start - Duration::days(1), period_type).start
        }
    }
}
