//! Add command for logging an entry.

use std::io::Write;

use anyhow::Result;
use chrono::{NaiveDate, NaiveDateTime};
use tl_core::{EntryStore, EntryTime, LogEditor, TimeEntry};

use super::list::format_entries;
use super::util::{describe_edit_error, parse_time};
use crate::category::resolve_category;

/// Arguments for the add command.
#[derive(Debug, Clone, Default)]
pub struct AddArgs {
    pub category: String,
    pub description: String,
    pub at: Option<String>,
    pub allow_new: bool,
}

/// Runs the add command. Without `--at` the entry is stamped with `now`.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    date: NaiveDate,
    args: &AddArgs,
    now: NaiveDateTime,
) -> Result<()> {
    let timestamp = match args.at.as_deref() {
        Some(value) => parse_time(value)?,
        None => EntryTime::from(now.time()),
    };

    let log = store.load_or_create(date)?;
    let category = resolve_category(&log, &args.category, args.allow_new)?;
    let is_new = !log.knows_category(&category);

    let entry = TimeEntry::new(timestamp, category.clone(), args.description.trim());
    let log = LogEditor::new(store)
        .append(date, entry)
        .map_err(describe_edit_error)?;

    if is_new {
        writeln!(writer, "Added category {category}.")?;
    }
    writeln!(writer, "Logged {timestamp} {category}.")?;
    write!(writer, "{}", format_entries(&log))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tl_core::{Category, MemoryStore};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn now() -> NaiveDateTime {
        date().and_hms_milli_opt(14, 5, 30, 250).unwrap()
    }

    fn add(store: &MemoryStore, args: &AddArgs) -> Result<String> {
        let mut output = Vec::new();
        run(&mut output, store, date(), args, now())?;
        Ok(String::from_utf8(output).unwrap())
    }

    #[test]
    fn add_defaults_timestamp_to_now() {
        let store = MemoryStore::new();
        let args = AddArgs {
            category: "other".to_string(),
            description: "reading".to_string(),
            ..AddArgs::default()
        };
        let output = add(&store, &args).unwrap();
        assert!(output.contains("Logged 14:05:30 OTHER."));

        let log = store.load(date()).unwrap();
        assert_eq!(log.entries()[0].timestamp.to_string(), "14:05:30");
        assert_eq!(log.entries()[0].description, "reading");
    }

    #[test]
    fn add_with_explicit_time_and_number() {
        let store = MemoryStore::new();
        let args = AddArgs {
            category: "3".to_string(),
            at: Some("08:15".to_string()),
            ..AddArgs::default()
        };
        add(&store, &args).unwrap();
        let log = store.load(date()).unwrap();
        assert_eq!(log.entries()[0].category, "IPOP");
        assert_eq!(log.entries()[0].timestamp.to_string(), "08:15:00");
    }

    #[test]
    fn add_unknown_category_needs_new_flag() {
        let store = MemoryStore::new();
        let mut args = AddArgs {
            category: "meetings".to_string(),
            ..AddArgs::default()
        };
        assert!(add(&store, &args).is_err());
        assert!(store.load(date()).unwrap().is_empty());

        args.allow_new = true;
        let output = add(&store, &args).unwrap();
        assert!(output.contains("Added category MEETINGS."));
        let log = store.load(date()).unwrap();
        assert!(log.knows_category(&Category::new("meetings").unwrap()));
    }

    #[test]
    fn add_rejects_bad_time_before_writing() {
        let store = MemoryStore::new();
        let args = AddArgs {
            category: "other".to_string(),
            at: Some("quarter past".to_string()),
            ..AddArgs::default()
        };
        assert!(add(&store, &args).is_err());
        assert!(!store.exists(date()).unwrap());
    }
}
