pub mod export;
pub mod init;
pub mod logs;
pub mod start;
pub mod status;
pub mod stop;
pub mod watch;

use crate::libs::messages::macros::is_debug_mode;
use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Start monitoring a contact's presence")]
    Start(start::StartArgs),
    #[command(about = "Stop monitoring")]
    Stop,
    #[command(about = "Show monitoring status")]
    Status,
    #[command(about = "Display or clear the activity log")]
    Logs(logs::LogsArgs),
    #[command(about = "Export the activity log")]
    Export(export::ExportArgs),
    #[command(about = "Run the presence watcher")]
    Watch(watch::WatchArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        // In debug mode the message macros route through tracing; give them
        // a subscriber before anything is printed.
        if is_debug_mode() {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")))
                .init();
        }

        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Start(args) => start::cmd(args).await,
            Commands::Stop => stop::cmd().await,
            Commands::Status => status::cmd().await,
            Commands::Logs(args) => logs::cmd(args).await,
            Commands::Export(args) => export::cmd(args).await,
            Commands::Watch(args) => watch::cmd(args).await,
        }
    }
}
