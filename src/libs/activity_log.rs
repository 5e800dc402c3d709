//! Append-only activity log sink.
//!
//! Appends formatted records to the durable store and notifies any
//! listening presentation surface. The log is never rewritten in place:
//! records are appended, or the whole log is cleared.
//!
//! Each append is one read-modify-write against the shared store, updating
//! the formatted lines and the structured mirror together. The sink
//! serializes its own mutations through a single async mutex, which shrinks
//! the lost-update window against concurrent writers (a `clear` from the
//! presentation surface can still race a daemon append; the loss is
//! cosmetic and accepted).

use crate::libs::channel::{Event, EventBus};
use crate::libs::record::LogRecord;
use crate::libs::storage::{StateStore, StoreError, KEY_ACTIVITY_LOGS, KEY_ACTIVITY_RECORDS};
use serde_json::json;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<Mutex<StateStore>>,
    bus: EventBus,
}

impl ActivityLog {
    pub fn new(store: StateStore, bus: EventBus) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            bus,
        }
    }

    /// Appends one record: reads the current log lists, pushes the new
    /// entry onto both, writes them back in a single store write, then
    /// best-effort notifies listeners with the full line list.
    pub async fn append(&self, record: &LogRecord) -> Result<(), StoreError> {
        let lines = {
            let store = self.store.lock().await;
            let mut lines: Vec<String> = store.get(KEY_ACTIVITY_LOGS).await?.unwrap_or_default();
            let mut records: Vec<LogRecord> = store.get(KEY_ACTIVITY_RECORDS).await?.unwrap_or_default();
            lines.push(record.format_line());
            records.push(record.clone());
            store
                .set_many(vec![
                    (KEY_ACTIVITY_LOGS, json!(lines)),
                    (KEY_ACTIVITY_RECORDS, serde_json::to_value(&records)?),
                ])
                .await?;
            lines
        };

        self.bus.publish(Event::LogsUpdated(lines));
        Ok(())
    }

    /// Replaces the log with an empty one.
    pub async fn clear(&self) -> Result<(), StoreError> {
        {
            let store = self.store.lock().await;
            store
                .set_many(vec![
                    (KEY_ACTIVITY_LOGS, json!([])),
                    (KEY_ACTIVITY_RECORDS, json!([])),
                ])
                .await?;
        }
        self.bus.publish(Event::LogsUpdated(Vec::new()));
        Ok(())
    }

    /// Formatted lines in append order.
    pub async fn entries(&self) -> Result<Vec<String>, StoreError> {
        let store = self.store.lock().await;
        Ok(store.get(KEY_ACTIVITY_LOGS).await?.unwrap_or_default())
    }

    /// Structured records in append order.
    pub async fn records(&self) -> Result<Vec<LogRecord>, StoreError> {
        let store = self.store.lock().await;
        Ok(store.get(KEY_ACTIVITY_RECORDS).await?.unwrap_or_default())
    }

    /// The whole log as newline-joined text, one line per record.
    pub async fn export_as_text(&self) -> Result<String, StoreError> {
        Ok(self.entries().await?.join("\n"))
    }
}
