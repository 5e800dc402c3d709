//! Presence monitor controller.
//!
//! Orchestrates one monitoring session: owns the recurring poll, wires the
//! sensor into the period tracker, hands closed periods to the activity log,
//! and answers status queries from the presentation surface. The controller
//! is a state machine over `{Stopped, Running}`, realized as an optional
//! `MonitoringSession`.
//!
//! The in-memory state machine is the source of truth. The durable store
//! only carries enough to recover a session after a restart and to feed the
//! presentation surface; a store outage costs log lines, never monitor
//! state.

use crate::libs::activity_log::ActivityLog;
use crate::libs::channel::{Command, Event, EventBus, Request, Response, StatusSnapshot};
use crate::libs::config::MonitorConfig;
use crate::libs::messages::Message;
use crate::libs::period::{ClosedPeriod, PeriodTracker, RecordKind};
use crate::libs::record::LogRecord;
use crate::libs::sensor::{PresenceReading, PresenceSensor};
use crate::libs::storage::{StateStore, KEY_IS_MONITORING, KEY_MONITORING_USERNAME};
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::{mpsc, oneshot};
use tokio::task;
use tokio::time::{self, Duration, Interval, MissedTickBehavior};

#[derive(Debug, Error, PartialEq)]
pub enum MonitorError {
    #[error("already monitoring")]
    AlreadyRunning,
}

/// State owned exclusively by a running session.
///
/// The poll interval lives here, so it exists if and only if monitoring is
/// running; dropping the session cancels it, and no further ticks are
/// dispatched afterwards.
struct MonitoringSession {
    /// Case-normalized target, immutable for the session's lifetime.
    identity: String,
    poll: Interval,
}

pub struct Monitor {
    config: MonitorConfig,
    sensor: Arc<dyn PresenceSensor>,
    store: StateStore,
    log: ActivityLog,
    bus: EventBus,
    tracker: PeriodTracker,
    session: Option<MonitoringSession>,
    last_heartbeat: Option<NaiveDateTime>,
}

impl Monitor {
    pub fn new(config: MonitorConfig, sensor: Arc<dyn PresenceSensor>, store: StateStore, bus: EventBus) -> Self {
        let log = ActivityLog::new(store.clone(), bus.clone());
        Monitor {
            config,
            sensor,
            store,
            log,
            bus,
            tracker: PeriodTracker::new(),
            session: None,
            last_heartbeat: None,
        }
    }

    /// Starts monitoring the given identity.
    ///
    /// Fails with [`MonitorError::AlreadyRunning`] when a session exists;
    /// the running session is left untouched. On success the identity is
    /// case-folded, the tracker reset to `Unknown`, the monitoring intent
    /// persisted, and the poll scheduled with an immediate first tick.
    pub async fn start(&mut self, username: &str) -> Result<(), MonitorError> {
        if self.session.is_some() {
            return Err(MonitorError::AlreadyRunning);
        }

        let identity = username.trim().to_lowercase();
        self.tracker.reset();
        self.last_heartbeat = None;

        // Persist intent first so a crash between here and the first poll
        // still resumes on restart. Store failures are not fatal.
        if let Err(e) = self
            .store
            .set_many(vec![
                (KEY_IS_MONITORING, json!(true)),
                (KEY_MONITORING_USERNAME, json!(identity.clone())),
            ])
            .await
        {
            msg_error!(Message::StoreWriteFailed(e.to_string()));
        }

        let mut poll = time::interval(Duration::from_millis(self.config.poll_interval.max(1)));
        poll.set_missed_tick_behavior(MissedTickBehavior::Delay);
        self.session = Some(MonitoringSession {
            identity: identity.clone(),
            poll,
        });

        msg_info!(Message::MonitoringStarted(identity));
        self.publish_status();
        Ok(())
    }

    /// Stops monitoring. Harmless no-op when nothing is running.
    ///
    /// Takes the session first — dropping its poll handle, so no further
    /// ticks dispatch — then closes the open period with `MonitorStop` and
    /// appends the record.
    pub async fn stop(&mut self) {
        let Some(session) = self.session.take() else {
            return;
        };

        let now = Local::now().naive_local();
        if let Some(closed) = self.tracker.force_close(RecordKind::MonitorStop, now) {
            self.append_record(&session.identity, closed).await;
        }

        if let Err(e) = self.store.set(KEY_IS_MONITORING, &false).await {
            msg_error!(Message::StoreWriteFailed(e.to_string()));
        }

        msg_info!(Message::MonitoringStopped);
        self.publish_status();
    }

    /// One poll cycle: sense, track, append, publish.
    ///
    /// A tick that fires after `stop` (already in flight when the session
    /// was dropped) hits the guard and dies quietly. A failed sensor read
    /// contributes no information; the open period is neither extended nor
    /// closed, and the next tick retries.
    pub async fn on_tick(&mut self) {
        let Some(identity) = self.session.as_ref().map(|s| s.identity.clone()) else {
            return;
        };

        if let Some(reading) = self.read_sensor(&identity).await {
            let now = Local::now().naive_local();
            if let Some(closed) = self.tracker.observe(&reading, now) {
                self.append_record(&identity, closed).await;
            }
        }

        self.maybe_heartbeat(&identity).await;
        self.publish_status();
    }

    /// Recovers a persisted session after a restart.
    ///
    /// Reads the monitoring flag and username from the store; when both are
    /// present, starts monitoring again. Returns whether a session was
    /// resumed.
    pub async fn resume_if_persisted(&mut self) -> bool {
        let is_monitoring: Option<bool> = match self.store.get(KEY_IS_MONITORING).await {
            Ok(value) => value,
            Err(e) => {
                msg_error!(Message::StoreReadFailed(e.to_string()));
                None
            }
        };
        if is_monitoring != Some(true) {
            return false;
        }

        let username: Option<String> = match self.store.get(KEY_MONITORING_USERNAME).await {
            Ok(value) => value,
            Err(e) => {
                msg_error!(Message::StoreReadFailed(e.to_string()));
                None
            }
        };
        match username {
            Some(username) if !username.is_empty() => {
                if self.start(&username).await.is_ok() {
                    msg_info!(Message::MonitoringResumed(username));
                    true
                } else {
                    false
                }
            }
            _ => false,
        }
    }

    /// Point-in-time status snapshot. Pure read, no side effects.
    pub fn status(&self) -> StatusSnapshot {
        StatusSnapshot {
            is_monitoring: self.session.is_some(),
            identity: self.session.as_ref().map(|s| s.identity.clone()),
            period_state: self.tracker.state(),
            period_start: self.tracker.open_since(),
            last_update: Local::now().naive_local(),
        }
    }

    /// Serves one presentation-surface command.
    pub async fn handle(&mut self, command: Command) -> Response {
        match command {
            Command::StartMonitoring { username } => match self.start(&username).await {
                Ok(()) => Response::Ack {
                    success: true,
                    message: None,
                },
                Err(MonitorError::AlreadyRunning) => Response::Ack {
                    success: false,
                    message: Some(Message::AlreadyMonitoring.to_string()),
                },
            },
            Command::StopMonitoring => {
                self.stop().await;
                Response::Ack {
                    success: true,
                    message: None,
                }
            }
            Command::GetStatus => Response::Status(self.status()),
        }
    }

    /// The controller loop: poll ticks (only while a session exists),
    /// channel requests, and the shutdown signal, one at a time.
    pub async fn run(mut self, mut commands: mpsc::Receiver<Request>, mut shutdown: oneshot::Receiver<()>) -> Result<()> {
        self.resume_if_persisted().await;

        loop {
            tokio::select! {
                _ = Self::next_tick(&mut self.session), if self.session.is_some() => {
                    self.on_tick().await;
                }
                request = commands.recv() => match request {
                    Some(Request { command, reply }) => {
                        let response = self.handle(command).await;
                        // The reply slot may already be gone; the channel is
                        // unreliable by contract.
                        let _ = reply.send(response);
                    }
                    None => break,
                },
                _ = &mut shutdown => {
                    msg_info!(Message::MonitorShuttingDown);
                    self.stop().await;
                    break;
                }
            }
        }

        Ok(())
    }

    async fn next_tick(session: &mut Option<MonitoringSession>) {
        match session {
            Some(session) => {
                session.poll.tick().await;
            }
            None => std::future::pending::<()>().await,
        }
    }

    /// Runs the sensor on a blocking worker under the per-tick deadline.
    ///
    /// Every failure mode — target not found, scan error, worker panic,
    /// deadline overrun — collapses to "no information this tick".
    async fn read_sensor(&self, identity: &str) -> Option<PresenceReading> {
        let sensor = Arc::clone(&self.sensor);
        let target = identity.to_string();
        let deadline = Duration::from_secs(self.config.tick_deadline.max(1));

        match time::timeout(deadline, task::spawn_blocking(move || sensor.sense(&target))).await {
            Ok(Ok(Ok(reading))) => Some(reading),
            Ok(Ok(Err(e))) => {
                msg_debug!(Message::SensorScanFailed(e.to_string()));
                None
            }
            Ok(Err(join_error)) => {
                msg_error!(Message::SensorScanFailed(join_error.to_string()));
                None
            }
            Err(_) => {
                msg_warning!(Message::SensorDeadlineExceeded(self.config.tick_deadline));
                None
            }
        }
    }

    /// Emits a heartbeat record when the cadence elapsed and a period is
    /// open. Disabled by a zero interval.
    async fn maybe_heartbeat(&mut self, identity: &str) {
        if self.config.heartbeat_interval == 0 {
            return;
        }

        let now = Local::now().naive_local();
        let due = match self.last_heartbeat {
            None => true,
            Some(previous) => (now - previous).num_seconds() >= self.config.heartbeat_interval as i64,
        };
        if !due {
            return;
        }

        if let Some(snapshot) = self.tracker.heartbeat(now) {
            self.last_heartbeat = Some(now);
            self.append_record(identity, snapshot).await;
        }
    }

    async fn append_record(&self, identity: &str, period: ClosedPeriod) {
        let record = LogRecord::from_period(identity, period);
        if let Err(e) = self.log.append(&record).await {
            msg_error!(Message::StoreWriteFailed(e.to_string()));
        }
    }

    fn publish_status(&self) {
        self.bus.publish(Event::StatusUpdated(self.status()));
    }
}
