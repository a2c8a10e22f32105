//! Persistence boundary for day logs.
//!
//! The core never holds on-disk state. Every operation loads a snapshot
//! through an [`EntryStore`], works on it, and hands it back with
//! [`EntryStore::save`].

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{DayLog, TimeEntry};
use crate::types::Category;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No log has been persisted for this date.
    #[error("no log for {date}")]
    NotFound { date: NaiveDate },

    /// Reading or writing the backing file failed.
    #[error("i/o error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The stored document could not be parsed or failed validation.
    #[error("corrupt day log {}", path.display())]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl StoreError {
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Load/save access to day logs, keyed by calendar date.
pub trait EntryStore {
    /// Whether a log is persisted for `date`.
    fn exists(&self, date: NaiveDate) -> Result<bool, StoreError>;

    /// Loads the log for `date`, failing with [`StoreError::NotFound`] if absent.
    fn load(&self, date: NaiveDate) -> Result<DayLog, StoreError>;

    /// Creates, persists and returns a fresh log for `date`.
    fn create(&self, date: NaiveDate) -> Result<DayLog, StoreError>;

    /// Overwrites the persisted log with `log`.
    fn save(&self, log: &DayLog) -> Result<(), StoreError>;

    /// Loads the log for `date`, creating it on a miss.
    fn load_or_create(&self, date: NaiveDate) -> Result<DayLog, StoreError> {
        match self.load(date) {
            Err(StoreError::NotFound { .. }) => {
                tracing::debug!(%date, "no log for date, creating");
                self.create(date)
            }
            other => other,
        }
    }
}

/// Serialized form of a [`DayLog`].
///
/// The date is not part of the document; it comes from the storage key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayDocument {
    /// Name of the file the document was written to. Written for
    /// compatibility with older logs, ignored on read.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub entries: Vec<TimeEntry>,
}

impl DayDocument {
    pub fn from_log(log: &DayLog, filename: Option<String>) -> Self {
        Self {
            filename,
            categories: log.categories().to_vec(),
            entries: log.entries().to_vec(),
        }
    }

    pub fn into_log(self, date: NaiveDate) -> DayLog {
        DayLog::from_parts(date, self.categories, self.entries)
    }
}

/// An [`EntryStore`] that keeps serialized documents in memory.
#[derive(Debug, Default)]
pub struct MemoryStore {
    documents: RefCell<BTreeMap<NaiveDate, String>>,
    default_categories: Option<Vec<Category>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `categories` instead of the built-in defaults for new logs.
    pub fn with_default_categories(categories: Vec<Category>) -> Self {
        Self {
            documents: RefCell::default(),
            default_categories: Some(categories),
        }
    }

    /// The serialized document for `date`, exactly as last saved.
    pub fn raw(&self, date: NaiveDate) -> Option<String> {
        self.documents.borrow().get(&date).cloned()
    }

    fn path_for(date: NaiveDate) -> PathBuf {
        PathBuf::from(format!("memory:{date}"))
    }
}

impl EntryStore for MemoryStore {
    fn exists(&self, date: NaiveDate) -> Result<bool, StoreError> {
        Ok(self.documents.borrow().contains_key(&date))
    }

    fn load(&self, date: NaiveDate) -> Result<DayLog, StoreError> {
        let documents = self.documents.borrow();
        let raw = documents.get(&date).ok_or(StoreError::NotFound { date })?;
        let document: DayDocument =
            serde_json::from_str(raw).map_err(|source| StoreError::Corrupt {
                path: Self::path_for(date),
                source,
            })?;
        Ok(document.into_log(date))
    }

    fn create(&self, date: NaiveDate) -> Result<DayLog, StoreError> {
        let log = match &self.default_categories {
            Some(categories) => DayLog::with_categories(date, categories.clone()),
            None => DayLog::new(date),
        };
        self.save(&log)?;
        Ok(log)
    }

    fn save(&self, log: &DayLog) -> Result<(), StoreError> {
        let document = DayDocument::from_log(log, None);
        let raw = serde_json::to_string(&document).map_err(|source| StoreError::Corrupt {
            path: Self::path_for(log.date()),
            source,
        })?;
        self.documents.borrow_mut().insert(log.date(), raw);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntryTime;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn load_missing_is_not_found() {
        let store = MemoryStore::new();
        let err = store.load(date()).unwrap_err();
        assert!(err.is_not_found());
        assert!(!store.exists(date()).unwrap());
    }

    #[test]
    fn load_or_create_persists_fresh_log() {
        let store = MemoryStore::new();
        let log = store.load_or_create(date()).unwrap();
        assert!(log.is_empty());
        assert!(store.exists(date()).unwrap());
        assert_eq!(store.load(date()).unwrap(), log);
    }

    #[test]
    fn custom_default_categories_seed_new_logs() {
        let store = MemoryStore::with_default_categories(vec![
            Category::new("lunch").unwrap(),
            Category::new("dev").unwrap(),
        ]);
        let log = store.create(date()).unwrap();
        let names: Vec<_> = log.categories().iter().map(Category::as_str).collect();
        assert_eq!(names, ["LUNCH", "DEV"]);
    }

    #[test]
    fn save_then_load_roundtrips() {
        let store = MemoryStore::new();
        let mut log = DayLog::new(date());
        log.insert(TimeEntry::new(
            EntryTime::parse("09:00:00").unwrap(),
            Category::new("work").unwrap(),
            "standup",
        ));
        store.save(&log).unwrap();
        assert_eq!(store.load(date()).unwrap(), log);
    }

    #[test]
    fn document_ignores_filename_and_unknown_fields() {
        let json = r#"{
            "filename": "10-19-2026-log.json",
            "categories": ["BREAK", "other"],
            "entries": [{"timestamp": "09:00:00", "category": "WORK", "description": "x"}],
            "extra": true
        }"#;
        let document: DayDocument = serde_json::from_str(json).unwrap();
        let log = document.into_log(date());
        let names: Vec<_> = log.categories().iter().map(Category::as_str).collect();
        assert_eq!(names, ["BREAK", "OTHER", "WORK"]);
        assert_eq!(log.len(), 1);
    }
}
