//! Messaging between the monitor and the presentation surface.
//!
//! Two directions, two guarantees:
//!
//! - **Commands** travel as request/response pairs: an mpsc request carrying
//!   a oneshot reply slot. The caller learns whether the command was
//!   accepted.
//! - **Events** are one-way publications over a broadcast bus. `publish`
//!   never reports failure to the caller — if nobody is listening the event
//!   is dropped. The swallow is the contract, not an accident.

use crate::libs::period::PresenceState;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc, oneshot};

/// Commands the presentation surface sends to the monitor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Command {
    StartMonitoring { username: String },
    StopMonitoring,
    GetStatus,
}

/// Replies to [`Command`]s.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Response {
    Ack { success: bool, message: Option<String> },
    Status(StatusSnapshot),
}

/// Point-in-time view of the monitor, safe to hand to any display surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub is_monitoring: bool,
    pub identity: Option<String>,
    pub period_state: PresenceState,
    pub period_start: Option<NaiveDateTime>,
    pub last_update: NaiveDateTime,
}

/// Fire-and-forget notifications to whoever is listening.
#[derive(Debug, Clone)]
pub enum Event {
    LogsUpdated(Vec<String>),
    StatusUpdated(StatusSnapshot),
}

/// One-way event publication bus.
#[derive(Clone)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(64);
        Self { tx }
    }

    /// Publishes an event. Delivery is not guaranteed and failure is not
    /// reported; a bus with no subscribers drops the event silently.
    pub fn publish(&self, event: Event) {
        let _ = self.tx.send(event);
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A command paired with its reply slot.
#[derive(Debug)]
pub struct Request {
    pub command: Command,
    pub reply: oneshot::Sender<Response>,
}

/// Sending half of the command channel.
#[derive(Clone)]
pub struct CommandSender {
    tx: mpsc::Sender<Request>,
}

impl CommandSender {
    /// Sends a command and waits for the reply. `None` when the monitor is
    /// gone or dropped the reply slot — the channel is unreliable by
    /// contract and callers decide how to degrade.
    pub async fn send(&self, command: Command) -> Option<Response> {
        let (reply, rx) = oneshot::channel();
        self.tx.send(Request { command, reply }).await.ok()?;
        rx.await.ok()
    }
}

/// Creates the command channel connecting a presentation surface to the
/// monitor's run loop.
pub fn command_channel(buffer: usize) -> (CommandSender, mpsc::Receiver<Request>) {
    let (tx, rx) = mpsc::channel(buffer);
    (CommandSender { tx }, rx)
}
