//! Core library modules for the vigil application.
//!
//! Serves as the central access point to vigil's functionality:
//!
//! - **Presence Core**: Sensor contract, period state machine, log records
//! - **Monitoring**: Controller, daemon lifecycle, messaging channel
//! - **Persistence**: Key-value store, activity log sink, configuration
//! - **User Interface**: Console rendering, export, message catalog

pub mod activity_log;
pub mod channel;
pub mod config;
pub mod daemon;
pub mod data_storage;
pub mod export;
pub mod formatter;
pub mod messages;
pub mod monitor;
pub mod period;
pub mod record;
pub mod sensor;
pub mod storage;
pub mod view;
