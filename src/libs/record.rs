//! Activity log records and the canonical line format.

use crate::libs::formatter::format_duration_secs;
use crate::libs::period::{ClosedPeriod, PresenceState, RecordKind};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One immutable, append-only activity log entry.
///
/// Produced on period closure (transition or monitor stop) and on heartbeat
/// snapshots of a still-open period. Never mutated after creation; the log
/// sink owns it once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    pub identity: String,
    pub state: PresenceState,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    pub duration_seconds: i64,
    pub presence_hint: Option<String>,
    pub kind: RecordKind,
}

impl LogRecord {
    pub fn from_period(identity: &str, period: ClosedPeriod) -> Self {
        Self {
            identity: identity.to_string(),
            state: period.state,
            start_time: period.start_time,
            end_time: period.end_time,
            duration_seconds: period.duration_seconds,
            presence_hint: period.presence_hint,
            kind: period.kind,
        }
    }

    /// Renders the canonical log line.
    ///
    /// The shape is stable — exported logs are diffed line-for-line:
    ///
    /// ```text
    /// {identity}: {STATE}\t||\t[ {duration} ]\t|| START : {start} || END : {end} ||\t{hint}
    /// ```
    ///
    /// The trailing `\t{hint}` segment is present only when the record
    /// carries a presence hint.
    pub fn format_line(&self) -> String {
        let mut line = format!(
            "{}: {}\t||\t[ {} ]\t|| START : {} || END : {} ||",
            self.identity,
            self.state.glyph(),
            format_duration_secs(self.duration_seconds),
            self.start_time.format(TIMESTAMP_FORMAT),
            self.end_time.format(TIMESTAMP_FORMAT),
        );
        if let Some(hint) = &self.presence_hint {
            line.push('\t');
            line.push_str(hint);
        }
        line
    }
}
