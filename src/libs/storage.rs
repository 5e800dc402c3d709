//! Durable key-value store for monitoring state and the activity log.
//!
//! The store is a flat JSON object in `state.json` under the data directory,
//! accessed through asynchronous `get`/`set` operations. It is the analog of
//! the cross-device storage the presentation surface shares with the
//! monitor: an at-least-once durable store, nothing more.
//!
//! ## Consistency model
//!
//! Every mutation is a read-modify-write of the whole object and is **not**
//! atomic across concurrent writers. Two overlapping writers can each read
//! the old object and each write back, the second clobbering the first.
//! Callers that need to narrow the window serialize their own mutations
//! (see the activity log sink); nothing here provides transactions, and the
//! state machine must never depend on the store for correctness.
//!
//! ## Keys
//!
//! Key names are part of the persisted format and stay stable:
//!
//! | key | value |
//! |---|---|
//! | `isMonitoring` | bool |
//! | `monitoringUsername` | string |
//! | `activityLogs` | array of formatted log lines |
//! | `activityRecords` | array of structured [`LogRecord`]s |
//!
//! [`LogRecord`]: crate::libs::record::LogRecord

use crate::libs::data_storage::DataStorage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::path::PathBuf;
use thiserror::Error;
use tokio::fs;

pub const STORE_FILE_NAME: &str = "state.json";

pub const KEY_IS_MONITORING: &str = "isMonitoring";
pub const KEY_MONITORING_USERNAME: &str = "monitoringUsername";
pub const KEY_ACTIVITY_LOGS: &str = "activityLogs";
pub const KEY_ACTIVITY_RECORDS: &str = "activityRecords";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("store format invalid: {0}")]
    Format(#[from] serde_json::Error),
}

/// Handle on the JSON-file-backed store.
///
/// Cloning is cheap; clones share the same underlying file and therefore
/// the same (lack of) write isolation.
#[derive(Clone)]
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    /// Store at the standard location in the data directory.
    pub fn new() -> anyhow::Result<Self> {
        let path = DataStorage::new().get_path(STORE_FILE_NAME)?;
        Ok(Self { path })
    }

    /// Store at an explicit path.
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads one key, deserialized into `T`. A missing file or missing key
    /// is `None`, not an error.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let map = self.read_map().await?;
        match map.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Writes one key. Read-modify-write of the whole object.
    pub async fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        map.insert(key.to_string(), serde_json::to_value(value)?);
        self.write_map(&map).await
    }

    /// Writes several keys in a single read-modify-write, so related state
    /// (e.g. the monitoring flag and the username) lands together.
    pub async fn set_many(&self, entries: Vec<(&str, Value)>) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        for (key, value) in entries {
            map.insert(key.to_string(), value);
        }
        self.write_map(&map).await
    }

    pub async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map().await?;
        if map.remove(key).is_some() {
            self.write_map(&map).await?;
        }
        Ok(())
    }

    async fn read_map(&self) -> Result<Map<String, Value>, StoreError> {
        match fs::read_to_string(&self.path).await {
            Ok(raw) => {
                let value: Value = serde_json::from_str(&raw)?;
                match value {
                    Value::Object(map) => Ok(map),
                    _ => Ok(Map::new()),
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Map::new()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_map(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&Value::Object(map.clone()))?;
        fs::write(&self.path, raw).await?;
        Ok(())
    }
}
