//! Layered settings: defaults, optional file, environment.

use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::format::{Item, StrftimeItems};
use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::{DashboardError, Result};
use crate::schedule::DEFAULT_PERIOD;

/// Environment variable prefix (`FIELDWATCH_REFRESH_SECS=2`).
pub const ENV_PREFIX: &str = "FIELDWATCH";

/// Colour theme selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ThemeChoice {
    /// Detect from the terminal background.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Runtime settings for the dashboard.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Seconds between simulation ticks.
    pub refresh_secs: f64,
    /// Seed for a reproducible run. `None` draws from OS entropy.
    pub seed: Option<u64>,
    /// strftime pattern for timestamp labels.
    pub time_format: String,
    pub theme: ThemeChoice,
    /// Log destination for interactive mode.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            refresh_secs: 5.0,
            seed: None,
            time_format: "%H:%M:%S".to_string(),
            theme: ThemeChoice::Auto,
            log_file: None,
        }
    }
}

/// Command-line values that take precedence over file and environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub refresh_secs: Option<f64>,
    pub seed: Option<u64>,
    pub time_format: Option<String>,
    pub theme: Option<ThemeChoice>,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    /// Load settings from an optional TOML file and `FIELDWATCH_*` variables.
    ///
    /// Missing keys fall back to [`Settings::default`].
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, Environment::with_prefix(ENV_PREFIX))
    }

    /// Load with an explicit environment source. Environment values win over
    /// the file.
    pub fn load_with_env(path: Option<&Path>, env: Environment) -> Result<Self> {
        let mut builder = Config::builder();
        if let Some(path) = path {
            builder = builder.add_source(File::from(path));
        }
        let settings: Settings = builder.add_source(env).build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Apply command-line overrides on top of loaded settings, then validate.
    pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self> {
        if let Some(refresh) = overrides.refresh_secs {
            self.refresh_secs = refresh;
        }
        if let Some(seed) = overrides.seed {
            self.seed = Some(seed);
        }
        if let Some(format) = overrides.time_format {
            self.time_format = format;
        }
        if let Some(theme) = overrides.theme {
            self.theme = theme;
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        self.validate()?;
        Ok(self)
    }

    /// Reject values the scheduler or formatter cannot use.
    pub fn validate(&self) -> Result<()> {
        match Duration::try_from_secs_f64(self.refresh_secs) {
            Ok(period) if !period.is_zero() => {}
            _ => {
                return Err(DashboardError::InvalidSetting(format!(
                    "refresh_secs must be a positive number of seconds no smaller than 1ns, got {}",
                    self.refresh_secs
                )))
            }
        }
        if self.time_format.trim().is_empty() {
            return Err(DashboardError::InvalidSetting(
                "time_format must not be empty".to_string(),
            ));
        }
        if StrftimeItems::new(&self.time_format).any(|item| matches!(item, Item::Error)) {
            return Err(DashboardError::InvalidSetting(format!(
                "time_format is not a valid strftime pattern: {:?}",
                self.time_format
            )));
        }
        Ok(())
    }

    /// Tick period. Falls back to [`DEFAULT_PERIOD`] for values that
    /// [`validate`](Self::validate) rejects.
    pub fn refresh_interval(&self) -> Duration {
        Duration::try_from_secs_f64(self.refresh_secs)
            .ok()
            .filter(|period| !period.is_zero())
            .unwrap_or(DEFAULT_PERIOD)
    }
}
