//! Presence sensing against a snapshot of the host page.
//!
//! The sensor answers one question per poll: does the tracked identity
//! currently show as active on the messaging page? The concrete scraping
//! heuristics are an artifact of the page's markup and change under our
//! feet, so the contract is deliberately narrow: a sensor is idempotent,
//! side-effect free, and maps every internal failure to a [`SensorError`]
//! that the caller treats as "no information this tick".
//!
//! The production implementation, [`PageSensor`], scans `page.json` in the
//! data directory — a capture of the page's chat list refreshed by an
//! external step. Two independent signals mark an entry active: the status
//! text saying "active now", or the presence indicator flag. Either one
//! suffices (a conservative bias toward reporting presence).

use crate::libs::data_storage::DataStorage;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// File the page capture step writes next to the rest of vigil's data.
pub const PAGE_SNAPSHOT_FILE_NAME: &str = "page.json";

/// One presence observation for the tracked identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceReading {
    pub is_active: bool,
    /// Raw "last seen" text from the page (e.g. "Active 5m ago"), kept for
    /// display only.
    pub hint: Option<String>,
}

#[derive(Debug, Error)]
pub enum SensorError {
    /// The identity is not visible in the scanned surface.
    #[error("target not visible in the scanned surface")]
    NotFound,
    /// The scan itself failed (missing or malformed snapshot).
    #[error("scan failed: {0}")]
    Scan(String),
}

/// A source of presence readings for a single identity.
///
/// Implementations must be pure with respect to the page state: two calls
/// without an intervening page change return the same reading.
pub trait PresenceSensor: Send + Sync {
    fn sense(&self, identity: &str) -> Result<PresenceReading, SensorError>;
}

/// One entry of the captured chat list.
#[derive(Debug, Deserialize)]
struct ChatEntry {
    name: String,
    #[serde(default)]
    status_text: Option<String>,
    #[serde(default)]
    indicator: bool,
}

/// Sensor reading the page capture from the data directory.
pub struct PageSensor {
    snapshot_path: PathBuf,
}

impl PageSensor {
    pub fn new() -> Result<Self, SensorError> {
        let snapshot_path = DataStorage::new()
            .get_path(PAGE_SNAPSHOT_FILE_NAME)
            .map_err(|e| SensorError::Scan(e.to_string()))?;
        Ok(Self { snapshot_path })
    }

    /// Sensor over an explicit snapshot file, for captures kept elsewhere.
    pub fn with_snapshot(snapshot_path: PathBuf) -> Self {
        Self { snapshot_path }
    }

    fn load_entries(&self) -> Result<Vec<ChatEntry>, SensorError> {
        let raw = fs::read_to_string(&self.snapshot_path).map_err(|e| SensorError::Scan(e.to_string()))?;
        serde_json::from_str(&raw).map_err(|e| SensorError::Scan(e.to_string()))
    }
}

impl PresenceSensor for PageSensor {
    fn sense(&self, identity: &str) -> Result<PresenceReading, SensorError> {
        let entries = self.load_entries()?;

        let entry = entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == identity.to_lowercase())
            .ok_or(SensorError::NotFound)?;

        // Signal 1: status text claiming current activity.
        let text_active = entry
            .status_text
            .as_deref()
            .map(|text| text.to_lowercase().contains("active now"))
            .unwrap_or(false);

        // Signal 2: the presence indicator next to the avatar.
        let indicator_active = entry.indicator;

        // The hint is whatever activity text the entry carries, verbatim.
        let hint = entry
            .status_text
            .as_deref()
            .filter(|text| text.to_lowercase().contains("active"))
            .map(str::to_string);

        Ok(PresenceReading {
            is_active: text_active || indicator_active,
            hint,
        })
    }
}
