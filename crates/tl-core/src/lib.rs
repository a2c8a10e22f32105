//! Core domain logic for timelog.
//!
//! This crate contains the fundamental types and logic for:
//! - Day logs: timestamped, categorized entries for one calendar day
//! - Editing: append/edit/delete round-tripped through an [`EntryStore`]
//! - Reporting: per-category elapsed time, including the open last entry
//! - Navigation: resolving weekday labels within the last seven days

pub mod editor;
pub mod history;
pub mod model;
pub mod report;
pub mod store;
pub mod types;
pub mod week;

pub use editor::{EditError, EntryPatch, LogEditor};
pub use history::{DayOutcome, history};
pub use model::{DEFAULT_CATEGORIES, DayLog, TimeEntry};
pub use report::{CategoryTotal, DayReport, ReportEngine};
pub use store::{DayDocument, EntryStore, MemoryStore, StoreError};
pub use types::{Category, EntryTime, ValidationError};
pub use week::{WeekDay, WeekError, WeekNavigator};
