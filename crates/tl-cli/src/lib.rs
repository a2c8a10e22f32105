//! Time log CLI library.
//!
//! This crate provides the CLI interface for timelog.

pub mod category;
mod cli;
pub mod commands;
mod config;

pub use cli::{Cli, Commands};
pub use config::Config;
