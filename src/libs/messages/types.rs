#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    PromptSelectModules,
    PromptPollInterval,
    PromptTickDeadline,
    PromptHeartbeatInterval,

    // === MONITORING MESSAGES ===
    MonitoringStarted(String), // identity
    MonitoringStopped,
    MonitoringResumed(String), // identity
    AlreadyMonitoring,
    NothingToStop,
    SensorDeadlineExceeded(u64), // deadline seconds
    SensorScanFailed(String),
    StoreReadFailed(String),
    StoreWriteFailed(String),

    // === STATUS MESSAGES ===
    StatusMonitoring(String), // identity
    StatusNotMonitoring,

    // === LOG MESSAGES ===
    LogsEmpty,
    LogsCleared,

    // === EXPORT MESSAGES ===
    ExportingLogs(String), // format
    ExportSuccess(String), // path
    NoLogsToExport,

    // === PROMPTS ===
    PromptUsername,

    // === WATCHER / DAEMON MESSAGES ===
    WatcherStarted(u32), // pid
    WatcherStopped(u32), // pid
    WatcherNotRunning,
    WatcherNotRunningPidNotFound,
    WatcherStoppingExisting(String),     // pid
    WatcherFailedToStopExisting(String), // error
    WatcherFailedToStop(u32),            // pid
    InvalidPidFileContent,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    WatcherSignalHandlingNotSupported,
    DaemonModeNotSupported,
    ProcessTerminationNotSupported,
    FailedToCreateSigtermHandler,
    FailedToCreateSigintHandler,
    FailedToGetCurrentExecutable,
    FailedToOpenProcess(u32),      // windows error code
    FailedToTerminateProcess(u32), // windows error code
    MonitorExitedNormally,
    MonitorShuttingDown,
    MonitorError(String),
    MonitorTaskPanicked(String),
}
