//! List command for showing a day's entries.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tl_core::{DayLog, EntryStore};

/// Formats the date heading used above entry lists.
pub fn format_heading(date: NaiveDate) -> String {
    format!("=== {} ({}) ===", date.format("%m-%d-%Y"), date.format("%a"))
}

/// Formats entries with their 1-based numbers.
pub fn format_entries(log: &DayLog) -> String {
    let mut output = String::new();
    writeln!(output, "{}", format_heading(log.date())).unwrap();
    if log.is_empty() {
        writeln!(output, "No entries logged.").unwrap();
        return output;
    }
    for (i, entry) in log.entries().iter().enumerate() {
        let line = format!(
            "{:>3}| {} | {:<8} | {}",
            i + 1,
            entry.timestamp,
            entry.category.as_str(),
            entry.description
        );
        writeln!(output, "{}", line.trim_end()).unwrap();
    }
    output
}

/// Runs the list command. A day without a log gets one.
pub fn run<W: Write, S: EntryStore>(writer: &mut W, store: &S, date: NaiveDate) -> Result<()> {
    let log = store.load_or_create(date)?;
    write!(writer, "{}", format_entries(&log))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use tl_core::{Category, EntryTime, LogEditor, MemoryStore, TimeEntry};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn list_numbers_entries_from_one() {
        let store = MemoryStore::new();
        let editor = LogEditor::new(&store);
        for (time, category, description) in [
            ("09:00:00", "ipop", "inbox"),
            ("09:45:00", "development", "parser work"),
            ("12:00:00", "break", ""),
        ] {
            let entry = TimeEntry::new(
                EntryTime::parse(time).unwrap(),
                Category::new(category).unwrap(),
                description,
            );
            editor.append(date(), entry).unwrap();
        }

        let mut output = Vec::new();
        run(&mut output, &store, date()).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert_snapshot!(output, @r"
        === 10-19-2026 (Mon) ===
          1| 09:00:00 | IPOP     | inbox
          2| 09:45:00 | DEVELOPMENT | parser work
          3| 12:00:00 | BREAK    |
        ");
    }

    #[test]
    fn list_creates_missing_day() {
        let store = MemoryStore::new();
        let mut output = Vec::new();
        run(&mut output, &store, date()).unwrap();
        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("No entries logged."));
        assert!(store.exists(date()).unwrap());
    }
}
