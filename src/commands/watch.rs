//! Runs the presence watcher.
//!
//! Without flags, spawns the watcher as a detached background process (any
//! already-running watcher is replaced). `--foreground` runs the monitor
//! loop in the current process with signal handling — this is also the
//! entry point the spawned background process re-executes.

use crate::libs::daemon;
use crate::libs::storage::{StateStore, KEY_IS_MONITORING, KEY_MONITORING_USERNAME};
use anyhow::Result;
use clap::Args;
use serde_json::json;

#[derive(Debug, Args)]
pub struct WatchArgs {
    /// Run in the foreground instead of spawning a background watcher
    #[arg(long)]
    foreground: bool,

    /// Identity to start monitoring once the watcher is up
    #[arg(short, long)]
    username: Option<String>,

    /// Stop the running watcher
    #[arg(long)]
    stop: bool,
}

pub async fn cmd(args: WatchArgs) -> Result<()> {
    if args.stop {
        return daemon::stop();
    }

    if args.foreground {
        daemon::run_with_signal_handling(args.username).await
    } else {
        // The detached watcher recovers its session from the store, so an
        // explicit username is persisted before the spawn.
        if let Some(username) = &args.username {
            let store = StateStore::new()?;
            store
                .set_many(vec![
                    (KEY_IS_MONITORING, json!(true)),
                    (KEY_MONITORING_USERNAME, json!(username.trim().to_lowercase())),
                ])
                .await?;
        }
        daemon::spawn()
    }
}
