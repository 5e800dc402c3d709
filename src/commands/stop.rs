//! Stops the presence watcher.
//!
//! Harmless when nothing is running. The watcher closes the open period
//! with a `MonitorStop` record on its way down; this command additionally
//! lowers the persisted flag in case the watcher exited without cleanup.

use crate::libs::daemon;
use crate::libs::messages::Message;
use crate::libs::storage::{StateStore, KEY_IS_MONITORING};
use crate::{msg_info, msg_success};
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let was_running = daemon::is_running();

    if was_running {
        daemon::stop()?;
    }

    let store = StateStore::new()?;
    store.set(KEY_IS_MONITORING, &false).await?;

    if was_running {
        msg_success!(Message::MonitoringStopped);
    } else {
        msg_info!(Message::NothingToStop);
    }
    Ok(())
}
