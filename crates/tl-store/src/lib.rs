//! Storage layer for timelog.
//!
//! Provides the on-disk [`EntryStore`]: one JSON file per day in a data
//! directory.
//!
//! # File Layout
//!
//! Files are named after their date as `MM-DD-YYYY-log.json`, e.g.
//! `10-19-2026-log.json`. The date is taken from the file name; the document
//! itself only holds the category list and the entries:
//!
//! ```json
//! {
//!   "filename": "10-19-2026-log.json",
//!   "categories": ["BREAK", "OTHER", "IPOP"],
//!   "entries": [
//!     {"timestamp": "09:00:00", "category": "WORK", "description": "standup"}
//!   ]
//! }
//! ```
//!
//! `filename` is written for older readers and ignored on load.
//!
//! # Writes
//!
//! [`JsonFileStore::save`] writes a `.tmp` sibling and renames it over the
//! day file, so an interrupted save leaves the previous version in place.
//! Concurrent writers are not supported.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tl_core::{Category, DayDocument, DayLog, EntryStore, StoreError};

/// Suffix appended to the date key of every day file.
pub const FILE_SUFFIX: &str = "-log.json";

const DATE_KEY_FORMAT: &str = "%m-%d-%Y";

/// Returns the file name for `date`'s log.
pub fn file_name(date: NaiveDate) -> String {
    format!("{}{FILE_SUFFIX}", date.format(DATE_KEY_FORMAT))
}

/// Day logs stored as JSON files in one directory.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
    default_categories: Option<Vec<Category>>,
}

impl JsonFileStore {
    /// Opens a store rooted at `dir`. The directory is created on first save.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            default_categories: None,
        }
    }

    /// Seeds new logs with `categories` instead of the built-in defaults.
    #[must_use]
    pub fn with_default_categories(mut self, categories: Vec<Category>) -> Self {
        self.default_categories = Some(categories);
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding `date`'s log.
    pub fn path_for(&self, date: NaiveDate) -> PathBuf {
        self.dir.join(file_name(date))
    }
}

impl EntryStore for JsonFileStore {
    fn exists(&self, date: NaiveDate) -> Result<bool, StoreError> {
        let path = self.path_for(date);
        path.try_exists().map_err(|source| io_error(&path, source))
    }

    fn load(&self, date: NaiveDate) -> Result<DayLog, StoreError> {
        let path = self.path_for(date);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound { date });
            }
            Err(source) => return Err(io_error(&path, source)),
        };

        let document: DayDocument =
            serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;
        tracing::debug!(
            path = %path.display(),
            entries = document.entries.len(),
            "loaded day log"
        );
        Ok(document.into_log(date))
    }

    fn create(&self, date: NaiveDate) -> Result<DayLog, StoreError> {
        let log = match &self.default_categories {
            Some(categories) => DayLog::with_categories(date, categories.clone()),
            None => DayLog::new(date),
        };
        self.save(&log)?;
        tracing::debug!(%date, "created day log");
        Ok(log)
    }

    fn save(&self, log: &DayLog) -> Result<(), StoreError> {
        let path = self.path_for(log.date());
        fs::create_dir_all(&self.dir).map_err(|source| io_error(&self.dir, source))?;

        let document = DayDocument::from_log(log, Some(file_name(log.date())));
        let content =
            serde_json::to_string_pretty(&document).map_err(|source| StoreError::Corrupt {
                path: path.clone(),
                source,
            })?;

        // Write to a sibling temp file, then rename over the target
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, content).map_err(|source| io_error(&tmp_path, source))?;
        if let Err(source) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(io_error(&path, source));
        }

        tracing::debug!(
            path = %path.display(),
            entries = log.len(),
            "saved day log"
        );
        Ok(())
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StoreError {
    StoreError::Io {
        path: path.to_path_buf(),
        source,
    }
}
