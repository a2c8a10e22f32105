//! Per-category time totals for a day log.
//!
//! Each entry owns the time from its timestamp until the next entry's
//! timestamp. The last entry is the open interval: it runs until now for
//! today's log, until the end of the day for a past log, and counts nothing
//! when it is a break.

use std::cmp::Ordering;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use serde::Serialize;

use crate::model::DayLog;
use crate::types::{Category, EntryTime};

/// Default break category, excluded from worked time.
pub const DEFAULT_BREAK_CATEGORY: &str = "BREAK";

/// Default length of a working day, in hours.
pub const DEFAULT_WORKDAY_HOURS: f64 = 8.0;

const SECONDS_PER_HOUR: i64 = 3600;

/// Time accumulated by one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryTotal {
    pub category: Category,
    /// Number of entries logged under this category.
    pub entries: usize,
    /// Total elapsed seconds.
    pub seconds: i64,
}

impl CategoryTotal {
    /// Total as fractional hours.
    #[allow(clippy::cast_precision_loss)]
    pub fn hours(&self) -> f64 {
        self.seconds as f64 / SECONDS_PER_HOUR as f64
    }

    /// Total as whole hours and leftover whole minutes, both rounded down.
    pub const fn whole_hours_minutes(&self) -> (i64, i64) {
        (
            self.seconds / SECONDS_PER_HOUR,
            (self.seconds % SECONDS_PER_HOUR) / 60,
        )
    }
}

/// The computed report for one day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    pub date: NaiveDate,
    /// Totals in order of each category's first entry.
    pub totals: Vec<CategoryTotal>,
    pub break_category: Category,
    pub workday_seconds: i64,
    /// Indices of entries whose successor has an earlier timestamp.
    /// Those intervals were counted as zero.
    pub negative_intervals: Vec<usize>,
}

impl DayReport {
    pub fn total_for(&self, category: &Category) -> Option<&CategoryTotal> {
        self.totals.iter().find(|total| total.category == *category)
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Sum over all categories, breaks included.
    pub fn total_seconds(&self) -> i64 {
        self.totals.iter().map(|total| total.seconds).sum()
    }

    /// Seconds spent on break. Zero when no break was logged.
    pub fn break_seconds(&self) -> i64 {
        self.total_for(&self.break_category)
            .map_or(0, |total| total.seconds)
    }

    /// Seconds spent on anything but breaks.
    pub fn worked_seconds(&self) -> i64 {
        self.total_seconds() - self.break_seconds()
    }

    /// Seconds left until the workday target. Negative means overtime.
    pub fn remaining_seconds(&self) -> i64 {
        self.workday_seconds - self.worked_seconds()
    }
}

/// Turns day logs into [`DayReport`]s.
#[derive(Debug, Clone)]
pub struct ReportEngine {
    break_category: Category,
    workday: TimeDelta,
}

impl Default for ReportEngine {
    fn default() -> Self {
        Self::with_workday_hours(
            Category(DEFAULT_BREAK_CATEGORY.to_string()),
            DEFAULT_WORKDAY_HOURS,
        )
    }
}

impl ReportEngine {
    pub const fn new(break_category: Category, workday: TimeDelta) -> Self {
        Self {
            break_category,
            workday,
        }
    }

    /// Builds an engine with a workday given in fractional hours.
    ///
    /// Negative or non-finite hours are treated as zero.
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_workday_hours(break_category: Category, hours: f64) -> Self {
        let seconds = if hours.is_finite() && hours > 0.0 {
            (hours * 3600.0).round() as i64
        } else {
            0
        };
        Self::new(break_category, TimeDelta::seconds(seconds))
    }

    pub const fn break_category(&self) -> &Category {
        &self.break_category
    }

    /// Computes per-category totals for `log` as of `now`.
    pub fn compute(&self, log: &DayLog, now: NaiveDateTime) -> DayReport {
        let entries = log.entries();
        let mut totals: Vec<CategoryTotal> = Vec::new();
        let mut negative_intervals = Vec::new();

        for (index, entry) in entries.iter().enumerate() {
            let seconds = match entries.get(index + 1) {
                Some(next) => {
                    let gap = seconds_between(entry.timestamp, next.timestamp);
                    if gap < 0 {
                        tracing::warn!(
                            date = %log.date(),
                            index,
                            from = %entry.timestamp,
                            to = %next.timestamp,
                            "negative interval counted as zero"
                        );
                        negative_intervals.push(index);
                        0
                    } else {
                        gap
                    }
                }
                None if entry.category == self.break_category => 0,
                None => open_interval_end(log.date(), now)
                    .map_or(0, |end| {
                        end.signed_duration_since(entry.timestamp.time())
                            .num_seconds()
                            .max(0)
                    }),
            };

            match totals
                .iter_mut()
                .find(|total| total.category == entry.category)
            {
                Some(total) => {
                    total.entries += 1;
                    total.seconds += seconds;
                }
                None => totals.push(CategoryTotal {
                    category: entry.category.clone(),
                    entries: 1,
                    seconds,
                }),
            }
        }

        DayReport {
            date: log.date(),
            totals,
            break_category: self.break_category.clone(),
            workday_seconds: self.workday.num_seconds(),
            negative_intervals,
        }
    }
}

fn seconds_between(from: EntryTime, to: EntryTime) -> i64 {
    to.time().signed_duration_since(from.time()).num_seconds()
}

/// Where the last entry's interval stops for a log dated `date`.
///
/// Today's log runs until `now`, a past log until the last second of its own
/// day. A log dated after `now` has no open interval.
fn open_interval_end(date: NaiveDate, now: NaiveDateTime) -> Option<NaiveTime> {
    match date.cmp(&now.date()) {
        Ordering::Equal => Some(now.time()),
        Ordering::Less => NaiveTime::from_hms_opt(23, 59, 59),
        Ordering::Greater => None,
    }
}
