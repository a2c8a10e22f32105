//! Picking a day from the last week by its weekday label.

use chrono::{Datelike, NaiveDate, Weekday};
use thiserror::Error;

/// Number of days reachable by label, today included.
pub const WEEK_DAYS: i64 = 7;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WeekError {
    #[error("unknown day {input:?}; use one of MON, TUE, WED, THU, FRI, SAT, SUN")]
    UnknownDay { input: String },
}

/// A navigable day: its short label and date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekDay {
    pub label: &'static str,
    pub date: NaiveDate,
}

/// Maps `MON`..`SUN` to dates from today back through six days prior.
#[derive(Debug, Clone)]
pub struct WeekNavigator {
    days: Vec<WeekDay>,
}

impl WeekNavigator {
    pub fn new(today: NaiveDate) -> Self {
        let days = (0..WEEK_DAYS)
            .map(|offset| today - chrono::Duration::days(offset))
            .map(|date| WeekDay {
                label: weekday_label(date.weekday()),
                date,
            })
            .collect();
        Self { days }
    }

    /// The navigable days, today first.
    pub fn days(&self) -> &[WeekDay] {
        &self.days
    }

    pub fn today(&self) -> NaiveDate {
        self.days[0].date
    }

    /// Resolves user input to a date.
    ///
    /// Empty input selects today. Otherwise the first three letters are
    /// matched case-insensitively, so `mon`, `Mon` and `monday` all work.
    pub fn resolve(&self, input: &str) -> Result<NaiveDate, WeekError> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(self.today());
        }

        let prefix: String = input.chars().take(3).collect::<String>().to_uppercase();
        self.days
            .iter()
            .find(|day| day.label == prefix)
            .map(|day| day.date)
            .ok_or_else(|| WeekError::UnknownDay {
                input: input.to_string(),
            })
    }
}

const fn weekday_label(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "MON",
        Weekday::Tue => "TUE",
        Weekday::Wed => "WED",
        Weekday::Thu => "THU",
        Weekday::Fri => "FRI",
        Weekday::Sat => "SAT",
        Weekday::Sun => "SUN",
    }
}
