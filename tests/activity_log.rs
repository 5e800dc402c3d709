#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use tempfile::TempDir;
    use vigil::libs::activity_log::ActivityLog;
    use vigil::libs::channel::{Event, EventBus};
    use vigil::libs::period::{PresenceState, RecordKind};
    use vigil::libs::record::LogRecord;
    use vigil::libs::storage::StateStore;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(h, m, s).unwrap()
    }

    fn record(identity: &str, start: NaiveDateTime, end: NaiveDateTime) -> LogRecord {
        LogRecord {
            identity: identity.to_string(),
            state: PresenceState::Active,
            start_time: start,
            end_time: end,
            duration_seconds: (end - start).num_seconds(),
            presence_hint: None,
            kind: RecordKind::Transition,
        }
    }

    fn log_in(temp_dir: &TempDir) -> (ActivityLog, EventBus) {
        let store = StateStore::with_path(temp_dir.path().join("state.json"));
        let bus = EventBus::new();
        (ActivityLog::new(store, bus.clone()), bus)
    }

    #[tokio::test]
    async fn test_append_persists_line_and_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, _bus) = log_in(&temp_dir);

        let record = record("alice", at(12, 0, 0), at(12, 0, 10));
        log.append(&record).await.unwrap();

        let lines = log.entries().await.unwrap();
        assert_eq!(lines, vec![record.format_line()]);

        let records = log.records().await.unwrap();
        assert_eq!(records, vec![record]);
    }

    #[tokio::test]
    async fn test_appends_keep_order() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, _bus) = log_in(&temp_dir);

        for i in 0..5 {
            log.append(&record("alice", at(12, i, 0), at(12, i, 30))).await.unwrap();
        }

        let records = log.records().await.unwrap();
        assert_eq!(records.len(), 5);
        assert!(
            records.windows(2).all(|pair| pair[0].start_time < pair[1].start_time),
            "records must stay in append order"
        );
    }

    #[tokio::test]
    async fn test_export_as_text_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, _bus) = log_in(&temp_dir);

        log.append(&record("alice", at(12, 0, 0), at(12, 0, 10))).await.unwrap();
        log.append(&record("alice", at(12, 0, 10), at(12, 1, 0))).await.unwrap();

        let text = log.export_as_text().await.unwrap();
        let exported: Vec<&str> = text.split('\n').collect();
        let stored = log.entries().await.unwrap();

        // One export line per persisted entry, same order.
        assert_eq!(exported.len(), stored.len());
        for (exported_line, stored_line) in exported.iter().zip(&stored) {
            assert_eq!(exported_line, stored_line);
        }
    }

    #[tokio::test]
    async fn test_clear_resets_both_lists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, _bus) = log_in(&temp_dir);

        log.append(&record("alice", at(12, 0, 0), at(12, 0, 10))).await.unwrap();
        log.clear().await.unwrap();

        assert!(log.entries().await.unwrap().is_empty());
        assert!(log.records().await.unwrap().is_empty());
        assert_eq!(log.export_as_text().await.unwrap(), "");
    }

    #[tokio::test]
    async fn test_append_publishes_logs_updated() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, bus) = log_in(&temp_dir);
        let mut events = bus.subscribe();

        let record = record("alice", at(12, 0, 0), at(12, 0, 10));
        log.append(&record).await.unwrap();

        match events.recv().await.unwrap() {
            Event::LogsUpdated(lines) => assert_eq!(lines, vec![record.format_line()]),
            other => panic!("expected LogsUpdated, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_append_without_subscribers_succeeds() {
        let temp_dir = tempfile::tempdir().unwrap();
        let (log, _bus) = log_in(&temp_dir);

        // Nobody is listening; publication failure must not surface.
        log.append(&record("alice", at(12, 0, 0), at(12, 0, 10))).await.unwrap();
        assert_eq!(log.entries().await.unwrap().len(), 1);
    }
}
