//! CLI subcommand implementations.

pub mod add;
pub mod categories;
pub mod delete;
pub mod edit;
pub mod history;
pub mod list;
pub mod report;
pub mod util;
pub mod week;
