//! Exports the activity log for sharing or external analysis.
//!
//! The default is the plain-text form: the canonical log lines exactly as
//! persisted, written to `activity_log_<date>.txt`. CSV, JSON and Excel
//! render the structured record mirror instead.

use crate::libs::activity_log::ActivityLog;
use crate::libs::channel::EventBus;
use crate::libs::export::{ExportFormat, Exporter};
use crate::libs::messages::Message;
use crate::libs::storage::StateStore;
use crate::{msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Output format for the exported log
    #[arg(short, long, value_enum, default_value = "text")]
    format: ExportFormat,

    /// Custom output file path (defaults to activity_log_<date>.<ext>)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub async fn cmd(args: ExportArgs) -> Result<()> {
    msg_info!(Message::ExportingLogs(format!("{:?}", args.format)));

    let log = ActivityLog::new(StateStore::new()?, EventBus::new());
    let exporter = Exporter::new(args.format, args.output);
    let path = exporter.export(&log).await?;

    msg_success!(Message::ExportSuccess(path.display().to_string()));
    Ok(())
}
