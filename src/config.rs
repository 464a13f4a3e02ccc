//! On-disk configuration
//!
//! Example TOML:
//!
//! ```toml
//! api_key = "..."
//!
//! [location]
//! permission = "granted"
//! latitude = 50.45
//! longitude = 30.52
//!
//! [display]
//! unit = "celsius"
//! weekday_labels = "calendar"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::DEFAULT_BASE_URL;
use crate::location::DEFAULT_LOOKUP_URL;
use crate::state::{Coordinates, PermissionPolicy, TempUnit, WeekdayLabels};

/// Environment variable holding the weatherapi.com key
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("could not determine platform config directory")]
    NoConfigDir,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub api_key: Option<String>,
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub location: LocationConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub permission: PermissionPolicy,
    pub lookup_url: String,
    /// Fixed coordinates; both must be set to bypass the IP lookup
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub unit: TempUnit,
    pub weekday_labels: WeekdayLabels,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            location: LocationConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            permission: PermissionPolicy::default(),
            lookup_url: DEFAULT_LOOKUP_URL.to_string(),
            latitude: None,
            longitude: None,
        }
    }
}

impl Config {
    /// Load from `path`, or from the platform default location.
    ///
    /// A missing file is not an error: the defaults apply.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => match Self::default_path() {
                Ok(path) => path,
                Err(ConfigError::NoConfigDir) => {
                    tracing::warn!("no platform config directory, using defaults");
                    return Ok(Self::default());
                }
                Err(e) => return Err(e),
            },
        };

        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::Parse {
                path: path.clone(),
                source,
            })?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// `<config dir>/weather-screen/config.toml`
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let dirs = project_dirs().ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Default log file location, if the platform has a data directory
    pub fn default_log_path() -> Option<PathBuf> {
        project_dirs().map(|dirs| dirs.data_local_dir().join("weather-screen.log"))
    }

    /// The environment wins over the file; blank values count as unset.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|key| !key.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|key| !key.trim().is_empty()))
    }

    pub fn fixed_coordinates(&self) -> Option<Coordinates> {
        match (self.location.latitude, self.location.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinates { lat, lon }),
            _ => None,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("dev", "weather-screen", "weather-screen")
}
