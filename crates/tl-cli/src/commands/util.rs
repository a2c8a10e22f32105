//! Shared utilities for CLI commands.

use anyhow::{Context, Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use tl_core::{EditError, EntryTime, WeekNavigator};

/// Resolves the `--day` flag to a date in the last week. `None` is today.
pub fn resolve_day(day: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    let navigator = WeekNavigator::new(today);
    Ok(navigator.resolve(day.unwrap_or(""))?)
}

/// Parses a user-supplied time of day.
pub fn parse_time(value: &str) -> Result<EntryTime> {
    EntryTime::parse(value).with_context(|| format!("could not use {value:?} as a time"))
}

/// Converts a 1-based entry number from the command line to an index.
pub fn entry_index(number: usize) -> Result<usize> {
    match number.checked_sub(1) {
        Some(index) => Ok(index),
        None => bail!("entry numbers start at 1"),
    }
}

/// Rewrites editor errors in terms of the 1-based numbers users see.
pub fn describe_edit_error(error: EditError) -> anyhow::Error {
    match error {
        EditError::OutOfRange { index, len: 0 } => {
            anyhow::anyhow!("no entry #{}: the day has no entries", index + 1)
        }
        EditError::OutOfRange { index, len } => {
            anyhow::anyhow!("no entry #{}: choose 1-{len}", index + 1)
        }
        other => anyhow::Error::new(other),
    }
}

/// Current local wall-clock time.
pub fn local_now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
