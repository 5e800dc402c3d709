//! Configuration management for vigil.
//!
//! Settings live in `config.json` under the platform data directory and are
//! loaded with graceful fallback: a missing file means defaults, not an
//! error, so the tool works with zero setup. The interactive wizard
//! (`vigil init`) walks through the configurable modules and pre-fills
//! current values as defaults.
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\vigil\config.json`
//! - **macOS**: `~/Library/Application Support/vigil/config.json`
//! - **Linux**: `~/.local/share/vigil/config.json`

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

/// Monitor timing configuration.
///
/// The poll interval trades responsiveness against load on the scanned
/// page capture; the tick deadline bounds how long one sensor scan may
/// run before the tick gives up on it; the heartbeat interval controls
/// the fixed-cadence "still in this period" records.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Poll interval in milliseconds between presence checks.
    pub poll_interval: u64,

    /// Deadline in seconds for a single sensor scan. A scan that overruns
    /// is abandoned for that tick; the next tick retries from scratch.
    pub tick_deadline: u64,

    /// Interval in seconds between heartbeat records while a period stays
    /// open. Zero disables heartbeats.
    pub heartbeat_interval: u64,
}

impl Default for MonitorConfig {
    /// Defaults match the behavior of the page the sensor watches: a 5
    /// second poll (fast enough that only sub-interval flicker is lost),
    /// a deadline of two poll periods, and minute-cadence heartbeats.
    fn default() -> Self {
        MonitorConfig {
            poll_interval: 5000,
            tick_deadline: 10,
            heartbeat_interval: 60,
        }
    }
}

/// Root configuration object.
///
/// Each module is optional; unconfigured modules are omitted from the JSON
/// file and fall back to defaults at the point of use.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Presence monitoring timing parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,
}

impl Config {
    /// Reads the configuration, returning defaults when no file exists.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs the interactive configuration wizard.
    ///
    /// Presents the available modules, prompts for each selected one with
    /// current values as defaults, and returns the updated configuration
    /// for the caller to save.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec!["Monitor"];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules)
            .interact()?;

        for &selection in &selected {
            match modules[selection] {
                "Monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    config.monitor = Some(MonitorConfig {
                        poll_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptPollInterval.to_string())
                            .default(default.poll_interval)
                            .interact_text()?,

                        tick_deadline: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptTickDeadline.to_string())
                            .default(default.tick_deadline)
                            .interact_text()?,

                        heartbeat_interval: Input::with_theme(&ColorfulTheme::default())
                            .with_prompt(Message::PromptHeartbeatInterval.to_string())
                            .default(default.heartbeat_interval)
                            .interact_text()?,
                    });
                }
                _ => {}
            }
        }

        Ok(config)
    }
}
