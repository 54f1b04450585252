//! Configuration management module.
//!
//! This module loads the panel's optional settings file. Nothing is ever
//! written back: a missing file simply yields the defaults.

mod error;

pub use error::ConfigError;

use crate::bindings::hyprland;
use crate::error::AppError;
use log::*;
use serde::Deserialize;
use std::{
    fs,
    path::{Path, PathBuf},
};

const FILE_NAME: &str = "config.yml";
const DEFAULT_DIRECTORY_PATH: &str = ".config/keybind-reference";

pub const DEFAULT_SCROLL_STEP: usize = 3;
pub const DEFAULT_HORIZONTAL_STEP: usize = 8;

/// Holds the settings the panel runs with.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub theme_name: String,
    pub hyprland_config: Option<PathBuf>,
    pub scroll_step: usize,
    pub horizontal_step: usize,
}

/// Shape of the configuration file on disk.
///
#[derive(Deserialize)]
struct FileSpec {
    #[serde(default = "default_theme_name")]
    pub theme_name: String,
    #[serde(default)]
    pub hyprland_config: Option<PathBuf>,
    #[serde(default = "default_scroll_step")]
    pub scroll_step: usize,
    #[serde(default = "default_horizontal_step")]
    pub horizontal_step: usize,
}

fn default_theme_name() -> String {
    "catppuccin-macchiato".to_string()
}

fn default_scroll_step() -> usize {
    DEFAULT_SCROLL_STEP
}

fn default_horizontal_step() -> usize {
    DEFAULT_HORIZONTAL_STEP
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme_name: default_theme_name(),
            hyprland_config: None,
            scroll_step: DEFAULT_SCROLL_STEP,
            horizontal_step: DEFAULT_HORIZONTAL_STEP,
        }
    }
}

impl From<FileSpec> for Config {
    fn from(data: FileSpec) -> Self {
        Config {
            theme_name: data.theme_name,
            hyprland_config: data.hyprland_config,
            scroll_step: data.scroll_step.max(1),
            horizontal_step: data.horizontal_step.max(1),
        }
    }
}

impl Config {
    /// Load the configuration from the custom directory if provided, or the
    /// default directory otherwise. A missing file yields the defaults.
    ///
    pub fn load(custom_path: Option<&str>) -> Result<Config, AppError> {
        let dir_path = match custom_path {
            Some(path) => Some(PathBuf::from(path)),
            None => Config::default_path(),
        };
        Config::load_dir(dir_path.as_deref())
    }

    /// Load `config.yml` from `dir_path`. Without a directory there is no
    /// file to read, so the defaults apply.
    ///
    fn load_dir(dir_path: Option<&Path>) -> Result<Config, AppError> {
        match dir_path {
            Some(dir_path) => Config::load_file(&dir_path.join(FILE_NAME)),
            None => {
                warn!("No home directory found, using default configuration.");
                Ok(Config::default())
            }
        }
    }

    /// Load the configuration from a specific file.
    ///
    pub fn load_file(file_path: &Path) -> Result<Config, AppError> {
        if !file_path.exists() {
            return Ok(Config::default());
        }
        let contents = fs::read_to_string(file_path).map_err(|e| ConfigError::LoadFailed {
            path: file_path.to_path_buf(),
            message: format!("IO error: {}", e),
        })?;
        Config::parse(&contents)
    }

    /// Parse configuration file contents. Empty contents yield the defaults.
    ///
    pub fn parse(contents: &str) -> Result<Config, AppError> {
        if contents.trim().is_empty() {
            return Ok(Config::default());
        }
        let data: FileSpec = serde_yaml::from_str(contents)
            .map_err(|e| ConfigError::DeserializationFailed(e.to_string()))?;
        Ok(data.into())
    }

    /// Return the Hyprland configuration path to read, or `None` if there is
    /// no override and no home directory.
    ///
    pub fn hyprland_config_path(&self) -> Option<PathBuf> {
        self.hyprland_config
            .clone()
            .or_else(hyprland::default_path)
    }

    /// Returns the default configuration directory or `None` if the home
    /// directory could not be found.
    ///
    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_DIRECTORY_PATH))
    }
}
