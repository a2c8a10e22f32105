//! Edit command for changing a logged entry.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tl_core::{EditError, EntryPatch, EntryStore, LogEditor, StoreError};

use super::list::format_entries;
use super::util::{describe_edit_error, entry_index, parse_time};
use crate::category::resolve_category;

/// Arguments for the edit command. Empty or missing values keep the
/// entry's current value.
#[derive(Debug, Clone, Default)]
pub struct EditArgs {
    pub number: usize,
    pub at: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Runs the edit command.
///
/// The entry keeps its position even when its new time is out of order.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    date: NaiveDate,
    args: &EditArgs,
) -> Result<()> {
    let index = entry_index(args.number)?;

    let timestamp = non_empty(args.at.as_deref()).map(parse_time).transpose()?;
    let category = match non_empty(args.category.as_deref()) {
        Some(input) => match store.load(date) {
            Ok(log) if index >= log.len() => {
                return Err(describe_edit_error(EditError::OutOfRange {
                    index,
                    len: log.len(),
                }));
            }
            Ok(log) => Some(resolve_category(&log, input, false)?),
            Err(StoreError::NotFound { .. }) => {
                return Err(describe_edit_error(EditError::OutOfRange { index, len: 0 }));
            }
            Err(e) => return Err(e.into()),
        },
        None => None,
    };
    let patch = EntryPatch {
        timestamp,
        category,
        description: non_empty(args.description.as_deref()).map(str::to_string),
    };

    if patch.is_empty() {
        writeln!(writer, "Nothing to change.")?;
        return Ok(());
    }

    let log = LogEditor::new(store)
        .edit(date, index, patch)
        .map_err(describe_edit_error)?;

    writeln!(writer, "Updated entry #{}.", args.number)?;
    if !log.is_chronological() {
        writeln!(
            writer,
            "Note: entries are no longer in time order; out-of-order gaps count as zero in reports."
        )?;
    }
    write!(writer, "{}", format_entries(&log))?;
    Ok(())
}
