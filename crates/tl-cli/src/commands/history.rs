//! History command for reporting several days at once.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use tl_core::{DayOutcome, EntryStore, ReportEngine, history};

use super::report::{format_missing, format_report};

/// Most days `tl history` accepts in one run.
pub const MAX_DAYS: u32 = 366;

/// Runs the history command: `days` independent day reports, today first.
///
/// An unreadable day gets a one-line notice and the remaining days are
/// still reported.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    engine: &ReportEngine,
    today: NaiveDate,
    days: u32,
    now: NaiveDateTime,
) -> Result<()> {
    for outcome in &history(store, engine, today, days, now) {
        match outcome {
            DayOutcome::Report(report) => write!(writer, "{}", format_report(report))?,
            DayOutcome::NoEntries(date) => write!(writer, "{}", format_missing(*date))?,
            DayOutcome::Unreadable { date, reason } => {
                writeln!(
                    writer,
                    "Could not read log for {}: {reason}",
                    date.format("%m-%d-%Y")
                )?;
            }
        }
        writeln!(writer)?;
    }
    Ok(())
}
