//! Displays or clears the persisted activity log.

use crate::libs::activity_log::ActivityLog;
use crate::libs::channel::EventBus;
use crate::libs::messages::Message;
use crate::libs::storage::StateStore;
use crate::libs::view::View;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct LogsArgs {
    /// Clear the activity log instead of displaying it
    #[arg(long)]
    clear: bool,
}

pub async fn cmd(args: LogsArgs) -> Result<()> {
    let log = ActivityLog::new(StateStore::new()?, EventBus::new());

    if args.clear {
        log.clear().await?;
        msg_success!(Message::LogsCleared);
        return Ok(());
    }

    let lines = log.entries().await?;
    if lines.is_empty() {
        msg_info!(Message::LogsEmpty);
        return Ok(());
    }
    View::logs(&lines);
    Ok(())
}
