//! Configuration loading and management.

use std::fmt;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tl_core::report::{DEFAULT_BREAK_CATEGORY, DEFAULT_WORKDAY_HOURS};
use tl_core::{Category, DEFAULT_CATEGORIES, ReportEngine};
use tl_store::JsonFileStore;

/// Application configuration.
#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one log file per day.
    pub data_dir: PathBuf,
    /// Category excluded from worked time.
    pub break_category: String,
    /// Length of the working day, in hours.
    pub workday_hours: f64,
    /// Categories every new day starts with.
    pub default_categories: Vec<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("break_category", &self.break_category)
            .field("workday_hours", &self.workday_hours)
            .field("default_categories", &self.default_categories)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: dirs_data_path().unwrap_or_else(|| PathBuf::from(".")),
            break_category: DEFAULT_BREAK_CATEGORY.to_string(),
            workday_hours: DEFAULT_WORKDAY_HOURS,
            default_categories: DEFAULT_CATEGORIES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (TL_*)
        figment = figment.merge(Env::prefixed("TL_"));

        figment.extract()
    }

    /// Builds the day-file store described by this config.
    pub fn store(&self) -> Result<JsonFileStore> {
        let categories = self
            .default_categories
            .iter()
            .map(Category::new)
            .collect::<Result<Vec<_>, _>>()
            .context("invalid default_categories")?;
        Ok(JsonFileStore::new(&self.data_dir).with_default_categories(categories))
    }

    /// Builds the report engine described by this config.
    pub fn report_engine(&self) -> Result<ReportEngine> {
        let break_category =
            Category::new(&self.break_category).context("invalid break_category")?;
        if !self.workday_hours.is_finite() || self.workday_hours < 0.0 {
            anyhow::bail!(
                "invalid workday_hours: {} (expected a non-negative number)",
                self.workday_hours
            );
        }
        Ok(ReportEngine::with_workday_hours(
            break_category,
            self.workday_hours,
        ))
    }
}

/// Returns the platform-specific config directory for tl.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("tl"))
}

/// Returns the platform-specific data directory for tl.
///
/// On Linux: `~/.local/share/tl`
pub fn dirs_data_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("tl"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_data_path_ends_with_tl() {
        let path = dirs_data_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "tl");
    }

    #[test]
    fn test_default_config_uses_data_dir() {
        let config = Config::default();
        assert_eq!(config.data_dir, dirs_data_path().unwrap());
        assert_eq!(config.break_category, "BREAK");
        assert!((config.workday_hours - 8.0).abs() < f64::EPSILON);
        assert_eq!(config.default_categories, ["BREAK", "OTHER", "IPOP"]);
    }

    #[test]
    fn test_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("config.toml");
        std::fs::write(
            &path,
            "break_category = \"lunch\"\nworkday_hours = 7.5\ndefault_categories = [\"lunch\", \"dev\"]\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&path)).unwrap();
        assert_eq!(config.break_category, "lunch");
        assert!((config.workday_hours - 7.5).abs() < f64::EPSILON);

        let engine = config.report_engine().unwrap();
        assert_eq!(engine.break_category(), &Category::new("LUNCH").unwrap());
        let store = config.store().unwrap();
        assert_eq!(store.dir(), config.data_dir.as_path());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let config = Config {
            break_category: "  ".to_string(),
            ..Config::default()
        };
        assert!(config.report_engine().is_err());

        let config = Config {
            workday_hours: -1.0,
            ..Config::default()
        };
        assert!(config.report_engine().is_err());

        let config = Config {
            default_categories: vec![String::new()],
            ..Config::default()
        };
        assert!(config.store().is_err());
    }
}
