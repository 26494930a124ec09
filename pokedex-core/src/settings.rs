//! Export settings (`~/.config/pokedex-export/settings.toml`).
//!
//! Every field is optional in the file; anything missing takes the default,
//! and the defaults alone reproduce a plain `data/` export from PokeAPI.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
pub const DEFAULT_INDEX_LIMIT: u32 = 20000;
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Effective settings for one export run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API root, without a trailing slash.
    pub base_url: String,
    /// `limit` query parameter of the single index request.
    pub index_limit: u32,
    /// Directory receiving `pokemon.csv` and `attacks.csv`.
    pub output_dir: PathBuf,
    /// Per-request HTTP timeout.
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            index_limit: DEFAULT_INDEX_LIMIT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: concat!("pokedex-export/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    pub base_url: Option<String>,
    pub index_limit: Option<u32>,
    pub output_dir: Option<PathBuf>,
    pub timeout_secs: Option<u64>,
}

impl Settings {
    /// Load settings from `path`, or from [`settings_path`] when `None`.
    ///
    /// A missing file yields defaults; an unreadable or malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self, CoreError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match settings_path() {
                Some(p) => p,
                None => return Ok(Self::default()),
            },
        };

        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&path)?;
        Self::from_toml(&contents)
            .map_err(|e| CoreError::config(format!("{}: {e}", path.display())))
    }

    /// Parse settings from TOML text.
    pub fn from_toml(contents: &str) -> Result<Self, CoreError> {
        let mut settings: Settings =
            toml::from_str(contents).map_err(|e| CoreError::config(e.to_string()))?;
        settings.base_url = settings.base_url.trim_end_matches('/').to_string();
        Ok(settings)
    }

    /// Apply command-line overrides.
    pub fn with_overrides(mut self, overrides: SettingsOverrides) -> Self {
        if let Some(url) = overrides.base_url {
            self.base_url = url.trim_end_matches('/').to_string();
        }
        if let Some(limit) = overrides.index_limit {
            self.index_limit = limit;
        }
        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }
        if let Some(secs) = overrides.timeout_secs {
            self.timeout_secs = secs;
        }
        self
    }

    /// URL of the bulk species index.
    pub fn index_url(&self) -> String {
        format!("{}/pokemon?limit={}", self.base_url, self.index_limit)
    }

    /// Pretty TOML for display.
    pub fn to_toml(&self) -> Result<String, CoreError> {
        toml::to_string_pretty(self).map_err(|e| CoreError::config(e.to_string()))
    }
}

/// Canonical settings file location, if a config directory exists.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("pokedex-export").join("settings.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_pokeapi() {
        let settings = Settings::default();
        assert_eq!(
            settings.index_url(),
            "https://pokeapi.co/api/v2/pokemon?limit=20000"
        );
        assert_eq!(settings.output_dir, PathBuf::from("data"));
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let settings = Settings::from_toml("index_limit = 151\n").unwrap();
        assert_eq!(settings.index_limit, 151);
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let settings = Settings::from_toml("base_url = \"http://localhost:8000/api/v2/\"").unwrap();
        assert_eq!(settings.index_url(), "http://localhost:8000/api/v2/pokemon?limit=20000");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let err = Settings::from_toml("index_limit = \"lots\"").unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn overrides_win() {
        let settings = Settings::default().with_overrides(SettingsOverrides {
            base_url: Some("http://mirror/".to_string()),
            index_limit: Some(10),
            output_dir: Some(PathBuf::from("out")),
            timeout_secs: None,
        });
        assert_eq!(settings.index_url(), "http://mirror/pokemon?limit=10");
        assert_eq!(settings.output_dir, PathBuf::from("out"));
        assert_eq!(settings.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(Some(&dir.path().join("nope.toml"))).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn toml_round_trip() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert_eq!(Settings::from_toml(&text).unwrap(), settings);
    }
}
