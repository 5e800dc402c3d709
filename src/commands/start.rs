//! Starts monitoring a contact's presence.
//!
//! Persists the monitoring intent to the store and spawns the background
//! watcher, which picks the session up from the persisted state — the same
//! recovery path that restores monitoring after a restart. When a watcher
//! is already running the command reports "Already monitoring" and leaves
//! the existing session untouched.

use crate::libs::daemon;
use crate::libs::messages::Message;
use crate::libs::storage::{StateStore, KEY_IS_MONITORING, KEY_MONITORING_USERNAME};
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use serde_json::json;

#[derive(Debug, Args)]
pub struct StartArgs {
    /// Username to monitor (prompted for when omitted)
    pub username: Option<String>,
}

pub async fn cmd(args: StartArgs) -> Result<()> {
    if daemon::is_running() {
        msg_error!(Message::AlreadyMonitoring);
        return Ok(());
    }

    let username = match args.username {
        Some(username) => username,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptUsername.to_string())
            .interact_text()?,
    };
    let identity = username.trim().to_lowercase();

    // Persist intent first; the watcher resumes the session from the store.
    let store = StateStore::new()?;
    store
        .set_many(vec![
            (KEY_IS_MONITORING, json!(true)),
            (KEY_MONITORING_USERNAME, json!(identity.clone())),
        ])
        .await?;

    daemon::spawn()?;
    msg_success!(Message::MonitoringStarted(identity));
    Ok(())
}
