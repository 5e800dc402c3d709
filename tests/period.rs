#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use vigil::libs::period::{PeriodTracker, PresenceState, RecordKind};
    use vigil::libs::sensor::PresenceReading;

    /// Timestamp `secs` seconds into an arbitrary fixed day.
    fn ts(secs: i64) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap().and_hms_opt(12, 0, 0).unwrap() + chrono::Duration::seconds(secs)
    }

    fn reading(is_active: bool) -> PresenceReading {
        PresenceReading { is_active, hint: None }
    }

    fn reading_with_hint(is_active: bool, hint: &str) -> PresenceReading {
        PresenceReading {
            is_active,
            hint: Some(hint.to_string()),
        }
    }

    #[test]
    fn test_first_reading_opens_period_without_record() {
        let mut tracker = PeriodTracker::new();
        assert_eq!(tracker.state(), PresenceState::Unknown);
        assert!(tracker.open_since().is_none());

        let closed = tracker.observe(&reading(true), ts(0));
        assert!(closed.is_none(), "Opening a period must not emit a record");
        assert_eq!(tracker.state(), PresenceState::Active);
        assert_eq!(tracker.open_since(), Some(ts(0)));
    }

    #[test]
    fn test_same_state_reading_extends_period() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(true), ts(0));

        let closed = tracker.observe(&reading(true), ts(5));
        assert!(closed.is_none(), "An unchanged reading must not close the period");
        assert_eq!(tracker.open_since(), Some(ts(0)), "The open period keeps its original start");
    }

    #[test]
    fn test_transition_closes_period_exactly_once() {
        // Scenario: readings [active, active, inactive] at t=0, 5, 10.
        let mut tracker = PeriodTracker::new();
        assert!(tracker.observe(&reading(true), ts(0)).is_none());
        assert!(tracker.observe(&reading(true), ts(5)).is_none());

        let closed = tracker.observe(&reading(false), ts(10)).expect("transition must close the period");
        assert_eq!(closed.state, PresenceState::Active);
        assert_eq!(closed.start_time, ts(0));
        assert_eq!(closed.end_time, ts(10));
        assert_eq!(closed.duration_seconds, 10);
        assert_eq!(closed.kind, RecordKind::Transition);

        // The new period opened at the transition instant.
        assert_eq!(tracker.state(), PresenceState::Inactive);
        assert_eq!(tracker.open_since(), Some(ts(10)));
    }

    #[test]
    fn test_force_close_on_stop() {
        // Scenario: one active reading at t=0, stop at t=7.
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(true), ts(0));

        let closed = tracker.force_close(RecordKind::MonitorStop, ts(7)).expect("open period must close");
        assert_eq!(closed.kind, RecordKind::MonitorStop);
        assert_eq!(closed.duration_seconds, 7);
        assert_eq!(tracker.state(), PresenceState::Unknown);
    }

    #[test]
    fn test_force_close_is_idempotent() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(false), ts(0));

        assert!(tracker.force_close(RecordKind::MonitorStop, ts(3)).is_some());
        assert!(
            tracker.force_close(RecordKind::MonitorStop, ts(4)).is_none(),
            "A second close must be a no-op"
        );
    }

    #[test]
    fn test_force_close_without_open_period() {
        let mut tracker = PeriodTracker::new();
        assert!(tracker.force_close(RecordKind::MonitorStop, ts(0)).is_none());
    }

    #[test]
    fn test_hint_refreshes_on_same_state_and_survives_closure() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading_with_hint(true, "Active now"), ts(0));
        // A reading without a hint keeps the previous one.
        tracker.observe(&reading(true), ts(5));
        tracker.observe(&reading_with_hint(true, "Active 1m ago"), ts(60));

        let closed = tracker.observe(&reading(false), ts(65)).unwrap();
        assert_eq!(closed.presence_hint.as_deref(), Some("Active 1m ago"));
    }

    #[test]
    fn test_heartbeat_snapshots_without_closing() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(true), ts(0));

        let beat = tracker.heartbeat(ts(60)).expect("open period must snapshot");
        assert_eq!(beat.kind, RecordKind::Heartbeat);
        assert_eq!(beat.start_time, ts(0));
        assert_eq!(beat.duration_seconds, 60);

        // The period is still open and closes from its original start.
        let closed = tracker.observe(&reading(false), ts(70)).unwrap();
        assert_eq!(closed.start_time, ts(0));
        assert_eq!(closed.duration_seconds, 70);
    }

    #[test]
    fn test_heartbeat_without_open_period() {
        let tracker = PeriodTracker::new();
        assert!(tracker.heartbeat(ts(0)).is_none());
    }

    #[test]
    fn test_record_count_equals_transition_count() {
        // For any reading sequence, closures == boolean transitions.
        let sequence = [true, true, false, false, true, false, true, true, true, false];
        let transitions = sequence.windows(2).filter(|pair| pair[0] != pair[1]).count();

        let mut tracker = PeriodTracker::new();
        let mut closed_count = 0;
        for (i, &is_active) in sequence.iter().enumerate() {
            if tracker.observe(&reading(is_active), ts(i as i64 * 5)).is_some() {
                closed_count += 1;
            }
        }

        assert_eq!(closed_count, transitions);

        // Plus one more when monitoring stops with a period open.
        assert!(tracker.force_close(RecordKind::MonitorStop, ts(100)).is_some());
    }

    #[test]
    fn test_closed_period_start_times_strictly_increase() {
        let sequence = [true, false, true, false, true];
        let mut tracker = PeriodTracker::new();
        let mut starts = Vec::new();

        for (i, &is_active) in sequence.iter().enumerate() {
            if let Some(closed) = tracker.observe(&reading(is_active), ts(i as i64 * 5)) {
                starts.push(closed.start_time);
            }
        }
        if let Some(closed) = tracker.force_close(RecordKind::MonitorStop, ts(100)) {
            starts.push(closed.start_time);
        }

        assert!(starts.len() > 1);
        assert!(starts.windows(2).all(|pair| pair[0] < pair[1]), "start times must strictly increase");
    }

    #[test]
    fn test_duration_is_exact_end_minus_start() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(true), ts(13));
        let closed = tracker.observe(&reading(false), ts(7919)).unwrap();
        assert_eq!(closed.duration_seconds, 7919 - 13);
        assert_eq!(closed.duration_seconds, (closed.end_time - closed.start_time).num_seconds());
    }

    #[test]
    fn test_reset_discards_open_period_silently() {
        let mut tracker = PeriodTracker::new();
        tracker.observe(&reading(true), ts(0));
        tracker.reset();
        assert_eq!(tracker.state(), PresenceState::Unknown);
        assert!(tracker.force_close(RecordKind::MonitorStop, ts(5)).is_none());
    }
}
