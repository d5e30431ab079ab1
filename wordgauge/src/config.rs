use std::path::PathBuf;

use derive_more::From;
use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use lexis::{DisplayCaps, EngineConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use theme::{Appearance, Palette, Theme};

pub mod theme;

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct Settings {
    pub appearance: Appearance,
    pub theme: Theme,
    pub engine: EngineConfig,
    pub caps: DisplayCaps,
}

#[derive(Debug, From, Error)]
pub enum ConfigError {
    #[error(
        "Failed to get configuration directory. Please specify the location using the `--config <path>` flag"
    )]
    NoDirectory,

    #[error("Failed to access config: {0}")]
    Io(std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(Box<figment::Error>),

    #[error("Failed to serialize config: {0}")]
    Serialize(toml::ser::Error),
}

#[derive(Debug)]
pub struct Config {
    pub settings: Settings,
    settings_path: PathBuf,
}

impl Config {
    pub fn get(override_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        // Grab default configuration
        let mut settings = Figment::from(Serialized::defaults(Settings::default()));

        // Check for toml file location
        let config_dir = override_path
            .or_else(|| {
                ProjectDirs::from("com", "WordGauge", "WordGauge")
                    .map(|dirs| dirs.config_dir().to_path_buf())
            })
            .ok_or(ConfigError::NoDirectory)?;

        // Ensure path exists
        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir)?;
        }

        let mut settings_path = config_dir;
        settings_path.push("settings.toml");

        if settings_path.exists() {
            settings = settings.merge(Toml::file(&settings_path));
        }

        let settings: Settings = settings.extract().map_err(Box::new)?;

        Ok(Self {
            settings,
            settings_path,
        })
    }

    /// The palette matching the current appearance
    pub const fn palette(&self) -> &Palette {
        self.settings.theme.palette(self.settings.appearance)
    }

    /// Flip between light and dark appearance and persist the choice
    pub fn toggle_appearance(&mut self) -> Result<Appearance, ConfigError> {
        self.settings.appearance = self.settings.appearance.toggled();
        self.save()?;
        Ok(self.settings.appearance)
    }

    fn save(&self) -> Result<(), ConfigError> {
        let serialized = toml::to_string_pretty(&self.settings)?;
        std::fs::write(&self.settings_path, serialized)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_roundtrip() {
        let settings = Settings {
            appearance: Appearance::Light,
            engine: EngineConfig {
                words_per_minute: 180,
            },
            ..Settings::default()
        };

        let serialized = toml::to_string_pretty(&settings).unwrap();
        let deserialized: Settings = toml::from_str(&serialized).unwrap();

        assert_eq!(deserialized.appearance, Appearance::Light);
        assert_eq!(deserialized.engine.words_per_minute, 180);
        assert_eq!(deserialized.caps, DisplayCaps::default());
    }
}
