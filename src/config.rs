use crate::{edit_cell::CellOptions, song::NewSong};
use serde::{Deserialize, Serialize};
use std::{fs, io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    IoError(#[from] io::Error),
    #[error("{0}")]
    SerdeJsonError(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(flatten)]
    pub cell: CellOptions,
    /// Songs the list starts with
    pub songs: Vec<NewSong>,
    pub window_size: (u32, u32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cell: CellOptions::default(),
            songs: vec![
                NewSong {
                    author: String::from("Johann Sebastian Bach"),
                    title: String::from("Toccata and Fugue in D minor"),
                    link_on_youtube: Some(String::from(
                        "https://www.youtube.com/watch?v=ho9rZjlsyYY",
                    )),
                },
                NewSong {
                    author: String::from("Antonio Vivaldi"),
                    title: String::from("Winter"),
                    link_on_youtube: None,
                },
            ],
            window_size: (800, 640),
        }
    }
}

impl Config {
    /// `<config dir>/songlist/config.json`, if the platform has a config dir
    #[must_use]
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("songlist").join("config.json"))
    }

    /// Parses a config from JSON. Missing keys fall back to their defaults.
    ///
    /// # Errors
    /// If the JSON is malformed or has the wrong shape
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads the config file. A missing file gives the defaults.
    ///
    /// # Errors
    /// - If the file exists but can't be read
    /// - If it isn't a valid config
    pub fn load() -> Result<Self, ConfigError> {
        let Some(path) = Self::path() else {
            log::debug!("no config dir on this platform, using defaults");
            return Ok(Self::default());
        };

        match fs::read_to_string(&path) {
            Ok(json) => {
                log::info!("loading config from {}", path.display());
                Self::from_json(&json)
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("{} doesn't exist, using defaults", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Like [`Config::load`], but logs the error and falls back to the defaults
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|err| {
            log::error!("couldn't load config, using defaults: {err}");
            Self::default()
        })
    }
}
