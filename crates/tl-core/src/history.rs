//! Independent reports for a run of past days.

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};

use crate::report::{DayReport, ReportEngine};
use crate::store::{EntryStore, StoreError};

/// What one day of history holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayOutcome {
    Report(DayReport),
    /// Nothing was persisted for this day.
    NoEntries(NaiveDate),
    /// The day's log exists but could not be read.
    Unreadable { date: NaiveDate, reason: String },
}

/// Reports `days` calendar days walking backward from `today`, today first.
///
/// Days are loaded and reported one at a time and never summed together.
/// A missing day is a [`DayOutcome::NoEntries`] and an unreadable one a
/// [`DayOutcome::Unreadable`]; neither stops the walk. The walk ends early
/// at the first date chrono cannot represent.
pub fn history<S: EntryStore>(
    store: &S,
    engine: &ReportEngine,
    today: NaiveDate,
    days: u32,
    now: NaiveDateTime,
) -> Vec<DayOutcome> {
    let mut outcomes = Vec::new();
    for offset in 0..i64::from(days) {
        let Some(date) = today.checked_sub_signed(TimeDelta::days(offset)) else {
            tracing::debug!(%today, offset, "history walked past the earliest date");
            break;
        };
        let outcome = match store.load(date) {
            Ok(log) => DayOutcome::Report(engine.compute(&log, now)),
            Err(StoreError::NotFound { .. }) => {
                tracing::debug!(%date, "no log for date");
                DayOutcome::NoEntries(date)
            }
            Err(e) => {
                tracing::warn!(%date, error = %e, "skipping unreadable day log");
                DayOutcome::Unreadable {
                    date,
                    reason: error_chain(&e),
                }
            }
        };
        outcomes.push(outcome);
    }
    outcomes
}

/// Renders an error with its sources, `outer: inner`.
fn error_chain(error: &StoreError) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
