//! Duration formatting for activity log lines.
//!
//! Renders second counts as compact human-readable durations for the
//! canonical log line and the console views. The rules are deliberately
//! rigid because exported logs are compared line-for-line:
//!
//! - Rendered as `"{h}h {m}m {s}s"`.
//! - Zero-valued hour and minute components are dropped wherever they occur.
//! - The seconds component is always present, so a zero duration is `"0s"`.
//! - Negative durations are clamped to `"0s"`.
//!
//! ## Examples
//!
//! ```rust
//! use vigil::libs::formatter::format_duration_secs;
//!
//! assert_eq!(format_duration_secs(10), "10s");
//! assert_eq!(format_duration_secs(303), "5m 3s");
//! assert_eq!(format_duration_secs(3605), "1h 5s");
//! assert_eq!(format_duration_secs(3661), "1h 1m 1s");
//! ```

/// Formats a duration in whole seconds as `"{h}h {m}m {s}s"`, omitting
/// zero-valued hour and minute components.
pub fn format_duration_secs(total_seconds: i64) -> String {
    let total_seconds = total_seconds.max(0);
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if minutes > 0 {
        parts.push(format!("{}m", minutes));
    }
    parts.push(format!("{}s", seconds));

    parts.join(" ")
}
