//! Delete command for removing a logged entry.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tl_core::{EntryStore, LogEditor};

use super::list::format_entries;
use super::util::{describe_edit_error, entry_index};

/// Runs the delete command for the 1-based entry `number`.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    date: NaiveDate,
    number: usize,
) -> Result<()> {
    let index = entry_index(number)?;
    let log = LogEditor::new(store)
        .delete(date, index)
        .map_err(describe_edit_error)?;

    writeln!(writer, "Deleted entry #{number}.")?;
    write!(writer, "{}", format_entries(&log))?;
    Ok(())
}
