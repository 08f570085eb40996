// ============================================================
// SETTINGS
// ============================================================
// Runtime configuration: defaults, then tileboard.toml, then
// TILEBOARD_* environment overrides

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::domain::error::{AppError, Result};

pub const CONFIG_FILE: &str = "tileboard.toml";
pub const ENV_PREFIX: &str = "TILEBOARD_";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Delimited source file the dashboard is rendered from
    pub source_path: PathBuf,

    /// Heading shown at the top of the dashboard
    pub page_title: String,

    pub host: String,
    pub port: u16,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from("tiles.txt"),
            page_title: "Dashboard".to_string(),
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

impl Settings {
    pub fn load() -> Result<Self> {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX))
            .extract()
            .map_err(|err| AppError::ConfigError(err.to_string()))
    }

    /// Source file name without its directory, for the status line.
    pub fn source_name(&self) -> String {
        self.source_path
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.source_path.display().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.port, 3001);
        assert_eq!(settings.source_name(), "tiles.txt");
    }

    #[test]
    fn test_source_name_strips_directories() {
        let settings = Settings {
            source_path: PathBuf::from("/var/data/links.tsv"),
            ..Settings::default()
        };
        assert_eq!(settings.source_name(), "links.tsv");
    }
}
