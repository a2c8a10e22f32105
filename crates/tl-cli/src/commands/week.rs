//! Week command for showing the days reachable with `--day`.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tl_core::{EntryStore, WeekNavigator};

/// Runs the week command.
pub fn run<W: Write, S: EntryStore>(writer: &mut W, store: &S, today: NaiveDate) -> Result<()> {
    let navigator = WeekNavigator::new(today);
    for day in navigator.days() {
        let status = if store.exists(day.date)? {
            let log = store.load(day.date)?;
            format!("{} entries", log.len())
        } else {
            "no log".to_string()
        };
        let marker = if day.date == today { " (today)" } else { "" };
        writeln!(
            writer,
            "{} {}  {status}{marker}",
            day.label,
            day.date.format("%m-%d-%Y")
        )?;
    }
    Ok(())
}
