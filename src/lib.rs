//! # Vigil - Presence Watcher
//!
//! A command-line utility that watches whether a contact shows as active
//! on a messaging page, tracks how long each active or inactive period
//! lasts, and keeps a durable activity log.
//!
//! ## Features
//!
//! - **Presence Monitoring**: Polls a page capture and infers the
//!   contact's active/inactive state
//! - **Period Tracking**: Turns the raw signal into closed periods with
//!   exact durations, one log record per transition
//! - **Heartbeats**: Optional fixed-cadence records while a period stays
//!   open
//! - **Durable Log**: Append-only activity log in a shared key-value store
//! - **Session Recovery**: A restarted watcher resumes the persisted
//!   session
//! - **Data Export**: Text, CSV, JSON, and Excel export formats
//!
//! ## Usage
//!
//! ```rust,no_run
//! use vigil::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod libs;
