#[cfg(test)]
mod tests {
    use chrono::{DateTime, TimeZone, Utc};
    use obra::libs::dates::{
        days_between, days_remaining, project_duration, time_in_status, to_epoch_millis,
        BackendTimestamp, DateValue, RemainingDays, MILLIS_PER_DAY,
    };
    use obra::libs::errors::RecordError;
    use obra::libs::project::{Project, StatusChange};

    const DAY_MS: i64 = MILLIS_PER_DAY as i64;

    fn fixed_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
    }

    fn project(created_at: Option<DateValue>, finish_date: Option<DateValue>) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Tunnel section".to_string(),
            description: String::new(),
            status: None,
            owner: "u1".to_string(),
            collaborators: vec![],
            created_at,
            finish_date,
            status_history: vec![],
            activity_logs: vec![],
        }
    }

    fn millis(now: DateTime<Utc>, offset_days: i64) -> DateValue {
        DateValue::Millis(now.timestamp_millis() + offset_days * DAY_MS)
    }

    // === DATE VALUE PARSING ===

    #[test]
    fn test_parses_backend_timestamp_wrapper() {
        let value: DateValue = serde_json::from_str(r#"{"seconds": 1700000000, "nanos": 500000000}"#).unwrap();
        assert_eq!(
            value,
            DateValue::Timestamp(BackendTimestamp { seconds: 1_700_000_000, nanos: 500_000_000 })
        );
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(1_700_000_000_500));
    }

    #[test]
    fn test_parses_export_spelling_of_wrapper() {
        let value: DateValue = serde_json::from_str(r#"{"_seconds": 1700000000, "_nanoseconds": 0}"#).unwrap();
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(1_700_000_000_000));

        // Nanos default to zero when the export omits them.
        let value: DateValue = serde_json::from_str(r#"{"_seconds": 1700000000}"#).unwrap();
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(1_700_000_000_000));
    }

    #[test]
    fn test_parses_rfc3339_string() {
        let value: DateValue = serde_json::from_str(r#""2024-03-15T12:00:00Z""#).unwrap();
        assert!(matches!(value, DateValue::DateTime(_)));
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(fixed_now().timestamp_millis()));
    }

    #[test]
    fn test_parses_epoch_millis_number() {
        let value: DateValue = serde_json::from_str("1700000000500").unwrap();
        assert_eq!(value, DateValue::Millis(1_700_000_000_500));
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(1_700_000_000_500));
    }

    #[test]
    fn test_loose_strings_fall_through_to_raw() {
        // No UTC offset, so the strict RFC 3339 variant rejects it.
        let value: DateValue = serde_json::from_str(r#""2024-03-15T12:00:00""#).unwrap();
        assert_eq!(value, DateValue::Raw("2024-03-15T12:00:00".to_string()));
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(fixed_now().timestamp_millis()));

        let value = DateValue::Raw("2024-03-15 12:00:00".to_string());
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(fixed_now().timestamp_millis()));

        // A bare date lands on midnight UTC.
        let value = DateValue::Raw("2024-03-15".to_string());
        let midnight = Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap();
        assert_eq!(to_epoch_millis(Some(&value)).unwrap(), Some(midnight.timestamp_millis()));
    }

    #[test]
    fn test_absent_date_is_none_not_an_error() {
        assert_eq!(to_epoch_millis(None).unwrap(), None);
    }

    #[test]
    fn test_unreadable_date_reports_the_offending_value() {
        let value = DateValue::Raw("definitely-not-a-date".to_string());
        let err = to_epoch_millis(Some(&value)).unwrap_err();
        assert_eq!(err, RecordError::InvalidDate { value: "definitely-not-a-date".to_string() });
    }

    // === DAY ARITHMETIC ===

    #[test]
    fn test_days_between_is_fractional() {
        assert_eq!(days_between(0, 129_600_000), 1.5);
        assert_eq!(days_between(0, DAY_MS), 1.0);
    }

    #[test]
    fn test_days_between_preserves_sign() {
        assert_eq!(days_between(DAY_MS, 0), -1.0);
    }

    // === DAYS REMAINING ===

    #[test]
    fn test_days_remaining_without_deadline() {
        let now = fixed_now();
        assert_eq!(days_remaining(&project(None, None), now), RemainingDays::NoDeadline);
    }

    #[test]
    fn test_days_remaining_rounds_up_partial_days() {
        let now = fixed_now();
        let p = project(None, Some(DateValue::Millis(now.timestamp_millis() + DAY_MS + DAY_MS / 2)));
        assert_eq!(days_remaining(&p, now), RemainingDays::Days(2));
    }

    #[test]
    fn test_days_remaining_past_deadline_is_finished() {
        let now = fixed_now();
        let p = project(None, Some(millis(now, -3)));
        assert_eq!(days_remaining(&p, now), RemainingDays::Finished);

        // A deadline of exactly "now" has no positive remainder.
        let p = project(None, Some(DateValue::Millis(now.timestamp_millis())));
        assert_eq!(days_remaining(&p, now), RemainingDays::Finished);
    }

    #[test]
    fn test_days_remaining_swallows_unreadable_deadline() {
        let now = fixed_now();
        let p = project(None, Some(DateValue::Raw("garbage".to_string())));
        assert_eq!(days_remaining(&p, now), RemainingDays::Finished);
    }

    #[test]
    fn test_remaining_days_serialization() {
        assert_eq!(serde_json::to_string(&RemainingDays::NoDeadline).unwrap(), "\"No deadline\"");
        assert_eq!(serde_json::to_string(&RemainingDays::Days(5)).unwrap(), "5");
        assert_eq!(serde_json::to_string(&RemainingDays::Finished).unwrap(), "\"Finished\"");
    }

    // === PROJECT DURATION ===

    #[test]
    fn test_duration_between_creation_and_finish() {
        let now = fixed_now();
        let p = project(Some(millis(now, -10)), Some(millis(now, -2)));
        assert_eq!(project_duration(&p, now), Some(8.0));
    }

    #[test]
    fn test_duration_of_project_still_in_flight_runs_to_now() {
        let now = fixed_now();
        let p = project(Some(millis(now, -10)), None);
        assert_eq!(project_duration(&p, now), Some(10.0));
    }

    #[test]
    fn test_duration_requires_a_creation_date() {
        let now = fixed_now();
        assert_eq!(project_duration(&project(None, Some(millis(now, -2))), now), None);
    }

    #[test]
    fn test_duration_skips_unreadable_dates() {
        let now = fixed_now();
        let p = project(Some(DateValue::Raw("garbage".to_string())), None);
        assert_eq!(project_duration(&p, now), None);

        let p = project(Some(millis(now, -10)), Some(DateValue::Raw("garbage".to_string())));
        assert_eq!(project_duration(&p, now), None);
    }

    #[test]
    fn test_duration_keeps_negative_figures() {
        // Finish date before the creation date is surfaced, never clamped.
        let now = fixed_now();
        let p = project(Some(DateValue::Millis(now.timestamp_millis())), Some(millis(now, -3)));
        assert_eq!(project_duration(&p, now), Some(-3.0));
    }

    // === TIME IN STATUS ===

    fn change(status: &str, timestamp: Option<DateValue>) -> StatusChange {
        StatusChange { status: status.to_string(), timestamp }
    }

    #[test]
    fn test_time_in_status_accrues_each_window_and_the_tail() {
        let now = fixed_now();
        let mut p = project(None, None);
        p.status_history = vec![
            change("pending", Some(millis(now, -6))),
            change("active", Some(millis(now, -4))),
            change("finished", Some(millis(now, -1))),
        ];

        let totals = time_in_status(&p, now);
        assert_eq!(totals.get("pending"), Some(&(2 * DAY_MS)));
        assert_eq!(totals.get("active"), Some(&(3 * DAY_MS)));
        assert_eq!(totals.get("finished"), Some(&DAY_MS));
    }

    #[test]
    fn test_time_in_status_accumulates_revisited_statuses() {
        let now = fixed_now();
        let mut p = project(None, None);
        p.status_history = vec![
            change("pending", Some(millis(now, -3))),
            change("active", Some(millis(now, -2))),
            change("pending", Some(millis(now, -1))),
        ];

        let totals = time_in_status(&p, now);
        assert_eq!(totals.get("pending"), Some(&(2 * DAY_MS)));
        assert_eq!(totals.get("active"), Some(&DAY_MS));
    }

    #[test]
    fn test_time_in_status_skips_defective_entries() {
        let now = fixed_now();
        let mut p = project(None, None);
        p.status_history = vec![
            change("pending", Some(millis(now, -4))),
            change("", Some(millis(now, -3))),
            change("active", None),
            change("active", Some(DateValue::Raw("garbage".to_string()))),
            change("finished", Some(millis(now, -2))),
        ];

        // Only the two usable entries remain: pending accrues up to the
        // finished transition, finished accrues up to now.
        let totals = time_in_status(&p, now);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals.get("pending"), Some(&(2 * DAY_MS)));
        assert_eq!(totals.get("finished"), Some(&(2 * DAY_MS)));
    }

    #[test]
    fn test_time_in_status_empty_history() {
        let now = fixed_now();
        assert!(time_in_status(&project(None, None), now).is_empty());
    }
}
