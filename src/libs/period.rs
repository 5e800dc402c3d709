//! Presence period state machine.
//!
//! A *period* is a maximal run of consecutive identical presence readings.
//! The tracker owns at most one open period at a time and closes it exactly
//! once, either because a differing reading arrived or because monitoring
//! stopped. Readings that carry no information (target not visible) never
//! reach the tracker, so absence is not treated as evidence of inactivity.
//!
//! The tracker is clock-free: every operation takes `now` as a parameter,
//! which keeps the state machine deterministic under test.

use crate::libs::sensor::PresenceReading;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Presence state of the tracked identity.
///
/// `Unknown` exists only before the first reading of a session; it never
/// appears in a closed period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PresenceState {
    Active,
    Inactive,
    Unknown,
}

impl PresenceState {
    fn from_reading(is_active: bool) -> Self {
        if is_active {
            PresenceState::Active
        } else {
            PresenceState::Inactive
        }
    }

    /// The glyph used in the canonical log line.
    pub fn glyph(&self) -> &'static str {
        match self {
            PresenceState::Active => "ACTIVE",
            PresenceState::Inactive => "INACTIVE",
            PresenceState::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for PresenceState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Why a record was emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordKind {
    /// The open period was superseded by a differing reading.
    Transition,
    /// Monitoring stopped while the period was still open.
    MonitorStop,
    /// Fixed-cadence snapshot of a period that remains open.
    Heartbeat,
}

/// The currently open run of identical readings.
#[derive(Debug, Clone)]
pub struct StatusPeriod {
    pub state: PresenceState,
    pub start_time: NaiveDateTime,
    pub last_presence_hint: Option<String>,
}

/// A finished period, or a heartbeat snapshot of one still open.
#[derive(Debug, Clone)]
pub struct ClosedPeriod {
    pub state: PresenceState,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: i64,
    pub presence_hint: Option<String>,
    pub kind: RecordKind,
}

/// Owns the open period and decides when it closes.
#[derive(Debug, Default)]
pub struct PeriodTracker {
    open: Option<StatusPeriod>,
}

impl PeriodTracker {
    pub fn new() -> Self {
        Self { open: None }
    }

    /// Feeds one sensor reading into the state machine.
    ///
    /// Opens a period on the first reading, extends the open period when the
    /// state is unchanged (refreshing the presence hint), and on a state
    /// change closes the open period at `now`, opens a new one, and returns
    /// the closed period. The common case on most polls is "unchanged".
    pub fn observe(&mut self, reading: &PresenceReading, now: NaiveDateTime) -> Option<ClosedPeriod> {
        let state = PresenceState::from_reading(reading.is_active);

        match &mut self.open {
            None => {
                self.open = Some(StatusPeriod {
                    state,
                    start_time: now,
                    last_presence_hint: reading.hint.clone(),
                });
                None
            }
            Some(open) if open.state == state => {
                if reading.hint.is_some() {
                    open.last_presence_hint = reading.hint.clone();
                }
                None
            }
            Some(open) => {
                let closed = Self::close(open, now, RecordKind::Transition);
                self.open = Some(StatusPeriod {
                    state,
                    start_time: now,
                    last_presence_hint: reading.hint.clone(),
                });
                Some(closed)
            }
        }
    }

    /// Closes the open period, if any, with the given record kind.
    ///
    /// Used when monitoring stops. Calling it again without an intervening
    /// `observe` returns `None`.
    pub fn force_close(&mut self, kind: RecordKind, now: NaiveDateTime) -> Option<ClosedPeriod> {
        let open = self.open.take()?;
        Some(Self::close(&open, now, kind))
    }

    /// Snapshot of the open period covering `start..now`.
    ///
    /// The period stays open; the caller decides the emission cadence.
    pub fn heartbeat(&self, now: NaiveDateTime) -> Option<ClosedPeriod> {
        self.open.as_ref().map(|open| Self::close(open, now, RecordKind::Heartbeat))
    }

    /// State of the open period, or `Unknown` when none is open.
    pub fn state(&self) -> PresenceState {
        self.open.as_ref().map_or(PresenceState::Unknown, |open| open.state)
    }

    /// Start time of the open period, if one is open.
    pub fn open_since(&self) -> Option<NaiveDateTime> {
        self.open.as_ref().map(|open| open.start_time)
    }

    /// Resets the tracker to `Unknown` without emitting anything.
    pub fn reset(&mut self) {
        self.open = None;
    }

    fn close(open: &StatusPeriod, now: NaiveDateTime, kind: RecordKind) -> ClosedPeriod {
        // Duration is derived from the start/end pair at closure time, never
        // accumulated tick by tick.
        ClosedPeriod {
            state: open.state,
            start_time: open.start_time,
            end_time: now,
            duration_seconds: (now - open.start_time).num_seconds(),
            presence_hint: open.last_presence_hint.clone(),
            kind,
        }
    }
}
