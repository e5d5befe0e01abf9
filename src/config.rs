//! Pace configuration.
//!
//! Loaded from `~/.pace/config.toml` unless `--config` names another file.
//! A missing default file is fine: every setting has a built-in value.
//!
//! ```toml
//! [defaults]
//! minutes-goal = 6000
//! workouts-per-week = 3
//!
//! [platform]
//! session-id = "..."
//! user-id = "..."
//! ```

use std::path::{Path, PathBuf};
use std::{fs, io};

use serde::Deserialize;
use tracing::debug;

use crate::model::{Field, GoalInputs};
use crate::platform::PlatformConfig;

/// Errors reading or parsing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid config at {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Pace configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Starting inputs, overridden by command-line flags.
    #[serde(default)]
    pub defaults: InputDefaults,

    /// Fitness platform connection. Absent unless configured.
    pub platform: Option<PlatformConfig>,
}

/// Per-field starting values. Unset fields use the built-in defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct InputDefaults {
    pub minutes_worked: Option<f64>,
    pub minutes_goal: Option<f64>,
    pub workouts_per_week: Option<f64>,
    pub weeks_skipped: Option<f64>,
}

impl InputDefaults {
    /// Fill unset fields from [`GoalInputs::default`].
    pub fn resolve(&self) -> GoalInputs {
        let mut inputs = GoalInputs::default();
        for (field, value) in [
            (Field::MinutesWorked, self.minutes_worked),
            (Field::MinutesGoal, self.minutes_goal),
            (Field::WorkoutsPerWeek, self.workouts_per_week),
            (Field::WeeksSkipped, self.weeks_skipped),
        ] {
            if let Some(value) = value {
                inputs.set(field, value);
            }
        }
        inputs
    }
}

impl Config {
    /// Load config from `explicit`, or from `~/.pace/config.toml`.
    ///
    /// An explicit path must exist. The default path may be missing.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let (path, required) = match explicit {
            Some(p) => (p.to_path_buf(), true),
            None => match Self::path() {
                Some(p) => (p, false),
                None => {
                    debug!("no home directory, using built-in config");
                    return Ok(Self::default());
                }
            },
        };

        let contents = match fs::read_to_string(&path) {
            Ok(s) => s,
            Err(e) if e.kind() == io::ErrorKind::NotFound && !required => {
                debug!(path = %path.display(), "no config file, using built-in config");
                return Ok(Self::default());
            }
            Err(source) => return Err(ConfigError::Read { path, source }),
        };

        let config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// The config file path: `~/.pace/config.toml`.
    pub fn path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".pace").join("config.toml"))
    }
}
