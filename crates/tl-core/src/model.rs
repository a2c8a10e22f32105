//! Day logs and the entries they hold.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{Category, EntryTime};

/// Category labels every new day log starts with.
pub const DEFAULT_CATEGORIES: [&str; 3] = ["BREAK", "OTHER", "IPOP"];

/// One category-tagged point-in-time log record.
///
/// An entry marks the moment the user switched to `category`; its duration is
/// the gap until the next entry of the day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    pub timestamp: EntryTime,
    pub category: Category,
    #[serde(default)]
    pub description: String,
}

impl TimeEntry {
    pub fn new(timestamp: EntryTime, category: Category, description: impl Into<String>) -> Self {
        Self {
            timestamp,
            category,
            description: description.into(),
        }
    }
}

/// All entries and known categories for one calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayLog {
    date: NaiveDate,
    categories: Vec<Category>,
    entries: Vec<TimeEntry>,
}

impl DayLog {
    /// Creates an empty log seeded with [`DEFAULT_CATEGORIES`].
    pub fn new(date: NaiveDate) -> Self {
        let categories = DEFAULT_CATEGORIES
            .iter()
            .filter_map(|name| Category::new(name).ok())
            .collect();
        Self::with_categories(date, categories)
    }

    /// Creates an empty log seeded with the given categories.
    ///
    /// Duplicates are dropped, keeping the first occurrence.
    pub fn with_categories(date: NaiveDate, categories: Vec<Category>) -> Self {
        let mut log = Self {
            date,
            categories: Vec::with_capacity(categories.len()),
            entries: Vec::new(),
        };
        for category in categories {
            log.commit_category(category);
        }
        log
    }

    /// Rebuilds a log from stored parts without reordering anything.
    ///
    /// Categories used by entries but missing from `categories` are appended,
    /// so the known set always covers the entries.
    pub fn from_parts(
        date: NaiveDate,
        categories: Vec<Category>,
        entries: Vec<TimeEntry>,
    ) -> Self {
        let mut log = Self::with_categories(date, categories);
        for entry in &entries {
            log.commit_category(entry.category.clone());
        }
        log.entries = entries;
        log
    }

    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn knows_category(&self, category: &Category) -> bool {
        self.categories.contains(category)
    }

    /// Whether entries are in non-decreasing timestamp order.
    pub fn is_chronological(&self) -> bool {
        self.entries
            .windows(2)
            .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Adds `category` to the known set. Returns `true` if it was new.
    pub(crate) fn commit_category(&mut self, category: Category) -> bool {
        if self.knows_category(&category) {
            return false;
        }
        self.categories.push(category);
        true
    }

    /// Inserts an entry and restores chronological order.
    ///
    /// The sort is stable, so entries with equal timestamps keep insertion order.
    pub(crate) fn insert(&mut self, entry: TimeEntry) {
        self.commit_category(entry.category.clone());
        self.entries.push(entry);
        self.entries.sort_by_key(|entry| entry.timestamp);
    }

    pub(crate) fn entry_mut(&mut self, index: usize) -> Option<&mut TimeEntry> {
        self.entries.get_mut(index)
    }

    pub(crate) fn remove(&mut self, index: usize) -> Option<TimeEntry> {
        (index < self.entries.len()).then(|| self.entries.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn entry(time: &str, category: &str) -> TimeEntry {
        TimeEntry::new(
            EntryTime::parse(time).unwrap(),
            Category::new(category).unwrap(),
            "",
        )
    }

    #[test]
    fn new_log_seeds_default_categories() {
        let log = DayLog::new(date());
        let names: Vec<_> = log.categories().iter().map(Category::as_str).collect();
        assert_eq!(names, ["BREAK", "OTHER", "IPOP"]);
        assert!(log.is_empty());
    }

    #[test]
    fn with_categories_drops_duplicates() {
        let categories = ["work", "WORK", "break"]
            .iter()
            .map(|c| Category::new(c).unwrap())
            .collect();
        let log = DayLog::with_categories(date(), categories);
        assert_eq!(log.categories().len(), 2);
    }

    #[test]
    fn insert_keeps_order_and_stability() {
        let mut log = DayLog::new(date());
        log.insert(entry("10:00:00", "work"));
        log.insert(entry("09:00:00", "other"));
        log.insert(TimeEntry::new(
            EntryTime::parse("10:00:00").unwrap(),
            Category::new("break").unwrap(),
            "second at ten",
        ));

        let order: Vec<_> = log
            .entries()
            .iter()
            .map(|e| (e.timestamp.to_string(), e.category.to_string()))
            .collect();
        assert_eq!(
            order,
            [
                ("09:00:00".to_string(), "OTHER".to_string()),
                ("10:00:00".to_string(), "WORK".to_string()),
                ("10:00:00".to_string(), "BREAK".to_string()),
            ]
        );
        assert!(log.is_chronological());
    }

    #[test]
    fn insert_commits_new_category_once() {
        let mut log = DayLog::new(date());
        log.insert(entry("09:00:00", "work"));
        log.insert(entry("10:00:00", "work"));
        let work_count = log.categories().iter().filter(|c| **c == "WORK").count();
        assert_eq!(work_count, 1);
        assert_eq!(log.categories().last().unwrap(), "WORK");
    }

    #[test]
    fn from_parts_keeps_stored_order_and_covers_categories() {
        let entries = vec![entry("11:00:00", "work"), entry("10:00:00", "break")];
        let log = DayLog::from_parts(date(), vec![Category::new("break").unwrap()], entries);
        assert!(!log.is_chronological());
        assert!(log.knows_category(&Category::new("work").unwrap()));
    }

    #[test]
    fn remove_out_of_range_is_none() {
        let mut log = DayLog::new(date());
        log.insert(entry("09:00:00", "work"));
        assert!(log.remove(1).is_none());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn time_entry_description_defaults_to_empty() {
        let json = r#"{"timestamp": "09:00:00", "category": "work"}"#;
        let parsed: TimeEntry = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.description, "");
        assert_eq!(parsed.category, "WORK");
    }

    #[test]
    fn time_entry_rejects_bad_timestamp() {
        let json = r#"{"timestamp": "9am", "category": "WORK", "description": ""}"#;
        let result: Result<TimeEntry, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
