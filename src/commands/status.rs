//! Shows the current monitoring status.

use crate::libs::daemon;
use crate::libs::messages::Message;
use crate::libs::storage::{StateStore, KEY_IS_MONITORING, KEY_MONITORING_USERNAME};
use crate::libs::view::View;
use crate::msg_print;
use anyhow::Result;

pub async fn cmd() -> Result<()> {
    let store = StateStore::new()?;

    // The persisted flag alone can be stale after a crash; the watcher
    // process has to be alive too.
    let flag = store.get::<bool>(KEY_IS_MONITORING).await?.unwrap_or(false);
    let is_monitoring = flag && daemon::is_running();
    let identity: Option<String> = store.get(KEY_MONITORING_USERNAME).await?;

    match (&identity, is_monitoring) {
        (Some(identity), true) => msg_print!(Message::StatusMonitoring(identity.clone())),
        _ => msg_print!(Message::StatusNotMonitoring),
    }
    View::status(is_monitoring, identity.as_deref());
    Ok(())
}
