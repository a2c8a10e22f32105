//! Categories command for listing and adding a day's categories.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use tl_core::{Category, EntryStore, LogEditor};

use super::util::describe_edit_error;
use crate::category::numbered;

/// Runs the categories command, adding `add` first when given.
pub fn run<W: Write, S: EntryStore>(
    writer: &mut W,
    store: &S,
    date: NaiveDate,
    add: Option<&str>,
) -> Result<()> {
    let log = match add {
        Some(name) => {
            let category = Category::new(name)?;
            let (log, added) = LogEditor::new(store)
                .add_category(date, category.clone())
                .map_err(describe_edit_error)?;
            if added {
                writeln!(writer, "Added category {category}.")?;
            } else {
                writeln!(writer, "Category {category} already exists.")?;
            }
            log
        }
        None => store.load_or_create(date)?,
    };

    writeln!(writer, "{}", numbered(log.categories()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tl_core::MemoryStore;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn categories(store: &MemoryStore, add: Option<&str>) -> String {
        let mut output = Vec::new();
        run(&mut output, store, date(), add).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn lists_defaults_for_new_day() {
        let store = MemoryStore::new();
        assert_eq!(categories(&store, None), "[1]BREAK [2]OTHER [3]IPOP\n");
    }

    #[test]
    fn adds_category_once() {
        let store = MemoryStore::new();
        let first = categories(&store, Some("review"));
        assert_eq!(first, "Added category REVIEW.\n[1]BREAK [2]OTHER [3]IPOP [4]REVIEW\n");

        let second = categories(&store, Some("Review"));
        assert!(second.starts_with("Category REVIEW already exists."));
    }
}
