//! Mutating operations on a day log.
//!
//! Every operation is a full round trip through the store: load (or create)
//! the day's log, validate, mutate, save. A failed validation returns before
//! anything is written.
//!
//! Indices are 0-based. Presenting 1-based numbers is up to the caller.

use chrono::NaiveDate;
use thiserror::Error;

use crate::model::{DayLog, TimeEntry};
use crate::store::{EntryStore, StoreError};
use crate::types::{Category, EntryTime};

/// Errors from [`LogEditor`] operations.
#[derive(Debug, Error)]
pub enum EditError {
    /// The index does not point at an existing entry.
    #[error("entry {index} is out of range (log has {len} entries)")]
    OutOfRange { index: usize, len: usize },

    /// An edit tried to use a category the day does not know yet.
    #[error("unknown category {category}; add it to the day first")]
    UnknownCategory { category: Category },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Field replacements for [`LogEditor::edit`]. `None` keeps the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryPatch {
    pub timestamp: Option<EntryTime>,
    pub category: Option<Category>,
    pub description: Option<String>,
}

impl EntryPatch {
    pub const fn is_empty(&self) -> bool {
        self.timestamp.is_none() && self.category.is_none() && self.description.is_none()
    }
}

/// Applies append/edit/delete to day logs held by an [`EntryStore`].
pub struct LogEditor<'a, S: EntryStore> {
    store: &'a S,
}

impl<'a, S: EntryStore> LogEditor<'a, S> {
    pub const fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Adds `entry` to the day and re-sorts by timestamp.
    ///
    /// A category the day has not seen before joins its known set.
    pub fn append(&self, date: NaiveDate, entry: TimeEntry) -> Result<DayLog, EditError> {
        let mut log = self.store.load_or_create(date)?;
        tracing::debug!(
            %date,
            timestamp = %entry.timestamp,
            category = %entry.category,
            "appending entry"
        );
        log.insert(entry);
        self.store.save(&log)?;
        Ok(log)
    }

    /// Replaces the patched fields of the entry at `index`.
    ///
    /// The entry stays where it is even if its new timestamp breaks
    /// chronological order. The category must already be known to the day.
    pub fn edit(
        &self,
        date: NaiveDate,
        index: usize,
        patch: EntryPatch,
    ) -> Result<DayLog, EditError> {
        let mut log = self.load_existing(date, index)?;
        let len = log.len();
        if index >= len {
            return Err(EditError::OutOfRange { index, len });
        }

        if let Some(category) = &patch.category {
            if !log.knows_category(category) {
                return Err(EditError::UnknownCategory {
                    category: category.clone(),
                });
            }
        }

        let entry = log
            .entry_mut(index)
            .ok_or(EditError::OutOfRange { index, len })?;
        if let Some(timestamp) = patch.timestamp {
            entry.timestamp = timestamp;
        }
        if let Some(category) = patch.category {
            entry.category = category;
        }
        if let Some(description) = patch.description {
            entry.description = description;
        }
        tracing::debug!(%date, index, "edited entry");

        if !log.is_chronological() {
            tracing::warn!(%date, index, "edit left entries out of chronological order");
        }

        self.store.save(&log)?;
        Ok(log)
    }

    /// Removes the entry at `index`. Categories are kept.
    pub fn delete(&self, date: NaiveDate, index: usize) -> Result<DayLog, EditError> {
        let mut log = self.load_existing(date, index)?;
        let len = log.len();
        let removed = log
            .remove(index)
            .ok_or(EditError::OutOfRange { index, len })?;
        tracing::debug!(
            %date,
            index,
            timestamp = %removed.timestamp,
            category = %removed.category,
            "deleted entry"
        );
        self.store.save(&log)?;
        Ok(log)
    }

    /// Adds `category` to the day's known set without logging an entry.
    ///
    /// Returns the log and whether the category was new. Nothing is written
    /// when it was already known.
    pub fn add_category(
        &self,
        date: NaiveDate,
        category: Category,
    ) -> Result<(DayLog, bool), EditError> {
        let mut log = self.store.load_or_create(date)?;
        let added = log.commit_category(category);
        if added {
            self.store.save(&log)?;
        }
        Ok((log, added))
    }

    /// Loads a log that an index refers into. A missing log has no entries.
    fn load_existing(&self, date: NaiveDate, index: usize) -> Result<DayLog, EditError> {
        match self.store.load(date) {
            Err(StoreError::NotFound { .. }) => Err(EditError::OutOfRange { index, len: 0 }),
            other => Ok(other?),
        }
    }
}
