//! Configuration management for the obra application.
//!
//! Settings are stored as JSON in the platform-specific application data
//! directory and edited through the `obra init` wizard. Every module is
//! optional: with no portal configured, report commands can still run
//! against a `--snapshot` directory.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\obralabs\obra\config.json`
//! - **macOS**: `~/Library/Application Support/obralabs/obra/config.json`
//! - **Linux**: `~/.local/share/obralabs/obra/config.json`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use obra::libs::config::Config;
//!
//! let config = Config::read()?;
//! if let Some(portal) = &config.portal {
//!     println!("Portal URL: {}", portal.api_url);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::api::portal::PortalConfig;
use crate::libs::messages::Message;
use crate::msg_warning;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable module, as presented by the interactive setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier used in configuration routing.
    pub key: String,
    /// Display name shown during interactive setup.
    pub name: String,
}

/// Root configuration object. Unconfigured modules are omitted from the
/// JSON file entirely.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Connection settings for the platform backend.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portal: Option<PortalConfig>,
}

impl Config {
    /// Loads the configuration file, falling back to defaults when none
    /// exists yet. A file that exists but cannot be parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON, creating the data
    /// directory if needed.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive setup wizard.
    ///
    /// Presents the available modules, then delegates to each selected
    /// module's own prompt sequence with current values pre-filled. The
    /// caller is responsible for saving the returned configuration.
    pub fn init() -> Result<Self> {
        let mut config = match Self::read() {
            Ok(config) => config,
            Err(err) => {
                msg_warning!(Message::ConfigUnreadable(err.to_string()));
                Config::default()
            }
        };

        let node_descriptions = vec![PortalConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "portal" => config.portal = Some(PortalConfig::init(&config.portal)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
