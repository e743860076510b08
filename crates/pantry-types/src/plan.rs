use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::recipe::RecipeSummary;

/// Calendar-date format used for meal-plan keys ("2024-03-07")
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Date-keyed meal plan. Keys serialize as ISO calendar dates and iterate in
/// ascending order.
pub type MealPlan = BTreeMap<NaiveDate, Vec<RecipeSummary>>;

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

pub fn parse_date_key(key: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(key.trim(), DATE_KEY_FORMAT)
}

/// First day of the planner week
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sunday" | "sun" => Ok(WeekStart::Sunday),
            "monday" | "mon" => Ok(WeekStart::Monday),
            other => Err(format!("unknown week start: {}", other)),
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Sunday => write!(f, "sunday"),
            WeekStart::Monday => write!(f, "monday"),
        }
    }
}

/// The seven ascending calendar days of the week containing `anchor`
///
/// Weeks that run past the range of `NaiveDate` are cut short: the result
/// then holds only the representable days, and is empty if the week would
/// start before `NaiveDate::MIN`.
pub fn week_of(anchor: NaiveDate, start: WeekStart) -> Vec<NaiveDate> {
    let offset = match start {
        WeekStart::Sunday => anchor.weekday().num_days_from_sunday(),
        WeekStart::Monday => anchor.weekday().num_days_from_monday(),
    };
    match anchor.checked_sub_days(Days::new(u64::from(offset))) {
        Some(first) => first.iter_days().take(7).collect(),
        None => Vec::new(),
    }
}
