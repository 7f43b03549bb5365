//! Runtime configuration loaded from `osu-recent.toml`.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ApiSettings {
    pub base_url: String,
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: "https://osu.ppy.sh".to_string(),
            client_id: None,
            client_secret: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartSettings {
    /// Charts are downloaded from `{base_url}/{beatmap_id}`.
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for ChartSettings {
    fn default() -> Self {
        Self {
            base_url: "https://osu.ppy.sh/osu".to_string(),
            timeout_secs: 10,
        }
    }
}

impl ChartSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct DatabaseSettings {
    pub path: PathBuf,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("osu_bot.db"),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub api: ApiSettings,
    pub chart: ChartSettings,
    pub database: DatabaseSettings,
}

impl Settings {
    /// Loads settings from `path`, falling back to defaults when the file
    /// does not exist.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            log::info!("CONFIG: {:?} not found, using defaults", path);
            return Ok(Self::default());
        }

        load_toml(path)
    }
}

/// Load a TOML file and deserialize it
pub fn load_toml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, String> {
    let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
    parse_toml(&content).inspect_err(|e| {
        log::error!("CONFIG: Failed to parse TOML file {:?}: {}", path, e);
    })
}

fn parse_toml<T: serde::de::DeserializeOwned>(content: &str) -> Result<T, String> {
    toml::from_str(content).map_err(|e| e.to_string())
}
