//! Configuration management for the tarea application.
//!
//! Handles the small set of user preferences that live outside the task
//! list itself, currently the visual theme used when rendering tasks.
//! Settings are stored as a JSON file in the platform-specific application
//! data directory and can be edited either through the interactive setup
//! wizard or by hand.
//!
//! ## Storage
//!
//! The configuration file location varies by platform:
//! - **Windows**: `%LOCALAPPDATA%\lacodda\tarea\config.json`
//! - **macOS**: `~/Library/Application Support/lacodda/tarea/config.json`
//! - **Linux**: `~/.local/share/lacodda/tarea/config.json`
//!
//! The theme preference is deliberately kept apart from the task data:
//! changing or deleting the configuration never touches the stored tasks.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use tarea::libs::config::Config;
//!
//! // Load existing configuration or fall back to defaults
//! let mut config = Config::read()?;
//!
//! // Flip the theme and persist it
//! config.theme = config.theme.toggle();
//! config.save()?;
//! # anyhow::Ok(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Visual theme applied when rendering the task list.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Returns the opposite theme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Canonical lowercase name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

/// Main configuration container for the application.
///
/// Unknown or missing fields deserialize to their defaults, so existing
/// configuration files keep working when new preferences are added.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Theme used by the list view.
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns the default configuration when no file exists yet; an
    /// existing but unreadable or unparseable file is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file, resetting all preferences.
    ///
    /// Missing files are not an error; the next `read` simply returns
    /// defaults. Stored tasks are unaffected.
    pub fn delete() -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if config_file_path.exists() {
            fs::remove_file(config_file_path)?;
        }
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Starts from the current configuration and prompts for each
    /// preference, returning the updated configuration for saving.
    pub fn init() -> Result<Config> {
        let mut config = Config::read().unwrap_or_default();

        let themes = [Theme::Light, Theme::Dark];
        let current = themes.iter().position(|t| *t == config.theme).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectTheme.to_string())
            .items(&[Theme::Light.as_str(), Theme::Dark.as_str()])
            .default(current)
            .interact()?;
        config.theme = themes[selection];

        Ok(config)
    }
}
