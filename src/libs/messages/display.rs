//! Display implementation for vigil's message catalog.
//!
//! The single place where structured [`Message`] values become user-facing
//! text, keeping wording consistent across commands and the daemon.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptPollInterval => "Poll interval in milliseconds".to_string(),
            Message::PromptTickDeadline => "Per-tick sensor deadline in seconds".to_string(),
            Message::PromptHeartbeatInterval => "Heartbeat interval in seconds (0 disables heartbeats)".to_string(),

            // === MONITORING MESSAGES ===
            Message::MonitoringStarted(identity) => format!("Started monitoring {}", identity),
            Message::MonitoringStopped => "Monitoring stopped".to_string(),
            Message::MonitoringResumed(identity) => format!("Resumed monitoring {}", identity),
            Message::AlreadyMonitoring => "Already monitoring".to_string(),
            Message::NothingToStop => "Nothing is being monitored".to_string(),
            Message::SensorDeadlineExceeded(secs) => format!("Sensor scan exceeded the {}s tick deadline", secs),
            Message::SensorScanFailed(e) => format!("Sensor scan failed: {}", e),
            Message::StoreReadFailed(e) => format!("Failed to read persisted state: {}", e),
            Message::StoreWriteFailed(e) => format!("Failed to write persisted state: {}", e),

            // === STATUS MESSAGES ===
            Message::StatusMonitoring(identity) => format!("Monitoring {}", identity),
            Message::StatusNotMonitoring => "Not monitoring".to_string(),

            // === LOG MESSAGES ===
            Message::LogsEmpty => "No activity recorded yet".to_string(),
            Message::LogsCleared => "Activity log cleared".to_string(),

            // === EXPORT MESSAGES ===
            Message::ExportingLogs(format) => format!("Exporting activity log as {}", format),
            Message::ExportSuccess(path) => format!("Activity log exported to: {}", path),
            Message::NoLogsToExport => "No logs to export".to_string(),

            // === PROMPTS ===
            Message::PromptUsername => "Username to monitor".to_string(),

            // === WATCHER / DAEMON MESSAGES ===
            Message::WatcherStarted(pid) => format!("Watcher started with PID: {}", pid),
            Message::WatcherStopped(pid) => format!("Watcher stopped (PID: {})", pid),
            Message::WatcherNotRunning => "Watcher is not running".to_string(),
            Message::WatcherNotRunningPidNotFound => "Watcher is not running (PID file not found)".to_string(),
            Message::WatcherStoppingExisting(pid) => format!("Stopping existing watcher (PID: {})", pid),
            Message::WatcherFailedToStopExisting(e) => format!("Failed to stop existing watcher: {}", e),
            Message::WatcherFailedToStop(pid) => format!("Failed to stop watcher process {}", pid),
            Message::InvalidPidFileContent => "Invalid PID file content".to_string(),
            Message::WatcherReceivedSigterm => "Watcher received SIGTERM, shutting down".to_string(),
            Message::WatcherReceivedSigint => "Watcher received SIGINT, shutting down".to_string(),
            Message::WatcherReceivedCtrlC => "Watcher received Ctrl-C, shutting down".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl-C: {}", e),
            Message::WatcherSignalHandlingNotSupported => "Signal handling is not supported on this platform".to_string(),
            Message::DaemonModeNotSupported => "Daemon mode is not supported on this platform".to_string(),
            Message::ProcessTerminationNotSupported => "Process termination is not supported on this platform".to_string(),
            Message::FailedToCreateSigtermHandler => "Failed to create SIGTERM handler".to_string(),
            Message::FailedToCreateSigintHandler => "Failed to create SIGINT handler".to_string(),
            Message::FailedToGetCurrentExecutable => "Failed to get current executable path".to_string(),
            Message::FailedToOpenProcess(code) => format!("Failed to open process (error {})", code),
            Message::FailedToTerminateProcess(code) => format!("Failed to terminate process (error {})", code),
            Message::MonitorExitedNormally => "Monitor exited normally".to_string(),
            Message::MonitorShuttingDown => "Monitor shutting down".to_string(),
            Message::MonitorError(e) => format!("Monitor error: {}", e),
            Message::MonitorTaskPanicked(e) => format!("Monitor task panicked: {}", e),
        };
        write!(f, "{}", text)
    }
}
