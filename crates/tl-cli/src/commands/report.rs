//! Report command for showing time spent per category.
//!
//! This module implements `tl report` in three styles: detailed (entry counts
//! and hours/minutes), compact (fractional hours) and JSON.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tl_core::{DayReport, EntryStore, ReportEngine, StoreError};

/// Output style for the report command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Detailed,
    Compact,
    Json,
}

// ========== Duration Formatting ==========

/// Formats seconds as duration string.
/// Returns "Xh Ym" if >= 1 hour, "Xm" if < 1 hour.
/// Negative durations are treated as 0m.
pub fn format_duration(seconds: i64) -> String {
    if seconds < 0 {
        return "0m".to_string();
    }
    let total_minutes = seconds / 60;
    let hours = total_minutes / 60;
    let minutes = total_minutes % 60;

    if hours >= 1 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

fn format_date(date: NaiveDate) -> String {
    date.format("%m-%d-%Y").to_string()
}

/// Line shown for a day with no persisted log.
pub fn format_missing(date: NaiveDate) -> String {
    format!(
        "No log file for {}. No time logged for this day.\n",
        format_date(date)
    )
}

fn format_remaining(report: &DayReport) -> String {
    let remaining = report.remaining_seconds();
    if remaining >= 0 {
        format!("Time remaining: {}", format_duration(remaining))
    } else {
        format!("Target reached: {} over", format_duration(-remaining))
    }
}

fn write_out_of_order_note(output: &mut String, report: &DayReport) {
    if report.negative_intervals.is_empty() {
        return;
    }
    let numbers = report
        .negative_intervals
        .iter()
        .map(|index| format!("#{}", index + 1))
        .collect::<Vec<_>>()
        .join(", ");
    writeln!(
        output,
        "Note: time after entry {numbers} was counted as zero (next entry is earlier)."
    )
    .unwrap();
}

// ========== Text Output ==========

/// Formats the detailed report: entry counts and whole hours/minutes.
pub fn format_report(report: &DayReport) -> String {
    let mut output = String::new();
    writeln!(output, "Report for {}", format_date(report.date)).unwrap();

    if report.is_empty() {
        writeln!(output, "No entries logged.").unwrap();
        return output;
    }

    for total in &report.totals {
        let (hours, minutes) = total.whole_hours_minutes();
        writeln!(
            output,
            "{}: {} entries, Total Time: {hours}h {minutes}m",
            total.category, total.entries
        )
        .unwrap();
    }
    write_out_of_order_note(&mut output, report);
    writeln!(output, "{}", format_remaining(report)).unwrap();
    output
}

/// Formats the compact report: fractional hours rounded to two places.
pub fn format_compact(report: &DayReport) -> String {
    let mut output = String::new();
    writeln!(output, "Time spent on each category:").unwrap();

    if report.is_empty() {
        writeln!(output, "No entries logged.").unwrap();
        return output;
    }

    for total in &report.totals {
        writeln!(output, "{}: {:.2} hours", total.category, total.hours()).unwrap();
    }
    write_out_of_order_note(&mut output, report);
    writeln!(output, "{}", format_remaining(report)).unwrap();
    output
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub date: String,
    pub totals: Vec<JsonTotal>,
    pub total_seconds: i64,
    pub break_seconds: i64,
    pub worked_seconds: i64,
    pub remaining_seconds: i64,
    /// 1-based numbers of entries whose following gap was negative.
    pub out_of_order_entries: Vec<usize>,
}

#[derive(Debug, Serialize)]
pub struct JsonTotal {
    pub category: String,
    pub entries: usize,
    pub seconds: i64,
    pub hours: f64,
}

/// Formats report data as JSON.
pub fn format_report_json(report: &DayReport) -> Result<String> {
    let json = JsonReport {
        date: report.date.format("%Y-%m-%d").to_string(),
        totals: report
            .totals
            .iter()
            .map(|total| JsonTotal {
                category: total.category.to_string(),
                entries: total.entries,
                seconds: total.seconds,
                hours: total.hours(),
            })
            .collect(),
        total_seconds: report.total_seconds(),
        break_seconds: report.break_seconds(),
        worked_seconds: report.worked_seconds(),
        remaining_seconds: report.remaining_seconds(),
        out_of_order_entries: report.negative_intervals.iter().map(|i| i + 1).collect(),
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

// ========== Public Interface ==========

/// Runs the report command. A day without a log is reported, not created.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    engine: &ReportEngine,
    date: NaiveDate,
    now: NaiveDateTime,
    style: Style,
) -> Result<()> {
    let log = match store.load(date) {
        Ok(log) => log,
        Err(StoreError::NotFound { .. }) => {
            if style == Style::Json {
                writeln!(writer, "null")?;
            } else {
                write!(writer, "{}", format_missing(date))?;
            }
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let report = engine.compute(&log, now);
    match style {
        Style::Detailed => write!(writer, "{}", format_report(&report))?,
        Style::Compact => write!(writer, "{}", format_compact(&report))?,
        Style::Json => writeln!(writer, "{}", format_report_json(&report)?)?,
    }
    Ok(())
}
