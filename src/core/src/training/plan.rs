use chrono::{Datelike, NaiveDate, NaiveTime, Weekday};
use std::fmt;

/// A recurring practice template for one team: every `weekday` between
/// `start_date` and `end_date` (inclusive), practice starts at `start_time`.
#[derive(Debug, Clone)]
pub struct TrainingPlan {
    pub id: u32,
    pub title: String,
    pub team_name: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub weekday: Weekday,
    pub start_time: NaiveTime,
    pub dresscode: Option<String>,
    pub focus: Option<String>,
    pub goals: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanValidationError {
    EmptyTitle,
    DateRangeInverted { start: NaiveDate, end: NaiveDate },
}

impl fmt::Display for PlanValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlanValidationError::EmptyTitle => write!(f, "plan title must not be empty"),
            PlanValidationError::DateRangeInverted { start, end } => {
                write!(f, "plan end date {} is before start date {}", end, start)
            }
        }
    }
}

impl std::error::Error for PlanValidationError {}

impl TrainingPlan {
    pub fn validate(&self) -> Result<(), PlanValidationError> {
        if self.title.trim().is_empty() {
            return Err(PlanValidationError::EmptyTitle);
        }

        if self.end_date < self.start_date {
            return Err(PlanValidationError::DateRangeInverted {
                start: self.start_date,
                end: self.end_date,
            });
        }

        Ok(())
    }

    /// True when the plan runs on the given date: the date falls inside the
    /// active range and matches the plan's weekday.
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date && date.weekday() == self.weekday
    }

    pub fn weekday_name(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        }
    }

    pub fn weekday_color(&self) -> &'static str {
        match self.weekday {
            Weekday::Mon => "blue",
            Weekday::Tue => "green",
            Weekday::Wed => "purple",
            Weekday::Thu => "amber",
            Weekday::Fri => "pink",
            Weekday::Sat => "cyan",
            Weekday::Sun => "red",
        }
    }
}
