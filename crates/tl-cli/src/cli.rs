//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands::history::MAX_DAYS;

/// Category time log.
///
/// Log what you switch to during the day, then see where the time went.
#[derive(Debug, Parser)]
#[command(name = "tl", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Day to work on, by weekday (e.g. MON, tue). Defaults to today.
    #[arg(short, long, global = true, value_name = "WEEKDAY")]
    pub day: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the day's entries with their numbers.
    List,

    /// Log an entry.
    Add {
        /// Category name, or its number from `tl categories`.
        category: String,

        /// Free-text description.
        description: Vec<String>,

        /// Time of the entry (HH:MM:SS or HH:MM). Defaults to now.
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// Allow a category the day has not seen yet.
        #[arg(long)]
        new: bool,
    },

    /// Change fields of an entry. Empty values keep the current value.
    Edit {
        /// Entry number as shown by `tl list`.
        number: usize,

        /// New time (HH:MM:SS or HH:MM).
        #[arg(long, value_name = "TIME")]
        at: Option<String>,

        /// New category: a known name or its number.
        #[arg(long)]
        category: Option<String>,

        /// New description.
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete an entry.
    Delete {
        /// Entry number as shown by `tl list`.
        number: usize,
    },

    /// List the day's known categories, or add one.
    Categories {
        /// Category to add.
        #[arg(long, value_name = "NAME")]
        add: Option<String>,
    },

    /// Show time spent per category.
    Report {
        /// Show fractional hours per category.
        #[arg(long)]
        compact: bool,

        /// Output as JSON.
        #[arg(long, conflicts_with = "compact")]
        json: bool,
    },

    /// Show reports for several days, today first.
    History {
        /// Number of days, including today.
        #[arg(
            long,
            default_value_t = 7,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_DAYS))
        )]
        days: u32,
    },

    /// Show the days reachable with --day.
    Week,
}
