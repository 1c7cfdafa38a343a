mod common;
use common::{at, cin, cout};

use chrono::{FixedOffset, NaiveDate, NaiveTime};
use rtimesheet::core::STANDARD_WORKDAY_MINUTES;
use rtimesheet::models::NO_CLOCK_OUT;
use rtimesheet::{
    OvernightPolicy, RawEvent, ReconcileOptions, ShiftConfig, ShiftKind, ValidationError,
    reconcile, reconcile_by_employee,
};

fn utc() -> ReconcileOptions {
    ReconcileOptions::default()
}

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn test_empty_input_is_empty_success() {
    let out = reconcile(&[], &ShiftConfig::named(ShiftKind::Morning), &utc()).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_morning_shift_with_overtime() {
    let events = vec![
        cin("alice", "2025-03-03 05:30"),
        cout("alice", "2025-03-03 14:45"),
    ];
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Morning), &utc()).unwrap();

    assert_eq!(out.len(), 1);
    let r = &out[0];
    assert_eq!(r.date, date("2025-03-03"));
    assert_eq!(r.clock_in, "05:30");
    assert_eq!(r.clock_out, "14:45");
    assert_eq!(r.late_minutes, 30);
    assert_eq!(r.late(), "00:30");
    assert_eq!(r.total_minutes, 555);
    assert_eq!(r.total(), "09:15");
    assert_eq!(r.regular_minutes, 480);
    assert_eq!(r.regular(), "08:00");
    assert_eq!(r.overtime_minutes, 75);
    assert_eq!(r.overtime(), "01:15");
    assert_eq!(r.undertime(), "00:00");
    assert!(!r.overnight);
}

#[test]
fn test_short_day_has_undertime() {
    let events = vec![
        cin("alice", "2025-03-03 08:00"),
        cout("alice", "2025-03-03 12:00"),
    ];
    let shift = ShiftConfig::with_hours(ShiftKind::Morning, 8, 17);
    let r = &reconcile(&events, &shift, &utc()).unwrap()[0];

    assert_eq!(r.late(), "00:00");
    assert_eq!(r.regular(), "04:00");
    assert_eq!(r.undertime(), "04:00");
    assert_eq!(r.overtime(), "00:00");
    assert_eq!(r.total_minutes, 240);
}

#[test]
fn test_custom_shift_lateness() {
    let events = vec![
        cin("alice", "2025-03-03 08:42"),
        cout("alice", "2025-03-03 17:00"),
    ];
    let r = &reconcile(&events, &ShiftConfig::custom("08:30", "17:30"), &utc()).unwrap()[0];
    assert_eq!(r.late_minutes, 12);
}

#[test]
fn test_no_shift_never_late() {
    let events = vec![cin("alice", "2025-03-03 23:59")];
    let r = &reconcile(&events, &ShiftConfig::none(), &utc()).unwrap()[0];
    assert_eq!(r.late_minutes, 0);
}

#[test]
fn test_open_day_without_clock_out() {
    let events = vec![cin("alice", "2025-03-04 09:15")];
    let r = &reconcile(&events, &ShiftConfig::named(ShiftKind::Morning), &utc()).unwrap()[0];

    assert_eq!(r.clock_out, NO_CLOCK_OUT);
    assert_eq!(r.clock_out, "N/A");
    assert!(r.is_open());
    assert_eq!(r.total_minutes, 0);
    assert_eq!(r.regular_minutes, 0);
    assert_eq!(r.overtime_minutes, 0);
    assert_eq!(r.undertime(), "08:00");
}

#[test]
fn test_day_with_only_clock_out_is_dropped() {
    let events = vec![
        cout("alice", "2025-03-02 17:00"),
        cin("alice", "2025-03-03 09:00"),
        cout("alice", "2025-03-03 17:00"),
    ];
    let out = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, date("2025-03-03"));
}

#[test]
fn test_multiple_pairs_collapse_to_extremes() {
    let events = vec![
        cin("alice", "2025-03-03 09:00"),
        cout("alice", "2025-03-03 12:00"),
        cin("alice", "2025-03-03 13:00"),
        cout("alice", "2025-03-03 18:30"),
        cin("alice", "2025-03-03 08:50"),
    ];
    let out = reconcile(&events, &ShiftConfig::custom("09:00", "18:00"), &utc()).unwrap();

    assert_eq!(out.len(), 1);
    let r = &out[0];
    assert_eq!(r.clock_in, "08:50");
    assert_eq!(r.clock_out, "18:30");
    assert_eq!(r.late_minutes, 0);
    // 08:50 → 18:30, lunch gap not deducted
    assert_eq!(r.total_minutes, 580);
    assert_eq!(r.overtime_minutes, 100);
}

#[test]
fn test_clock_out_before_clock_in_floors_at_zero() {
    let events = vec![
        cout("alice", "2025-03-03 07:00"),
        cin("alice", "2025-03-03 08:00"),
    ];
    let r = &reconcile(&events, &ShiftConfig::none(), &utc()).unwrap()[0];
    assert_eq!(r.clock_out, "07:00");
    assert_eq!(r.total_minutes, 0);
    assert_eq!(r.undertime_minutes, STANDARD_WORKDAY_MINUTES);
}

#[test]
fn test_total_rounds_to_nearest_minute() {
    let events = vec![
        cin("alice", "2025-03-03 08:00:00"),
        cout("alice", "2025-03-03 16:00:30"),
        cin("alice", "2025-03-04 08:00:00"),
        cout("alice", "2025-03-04 16:00:29"),
    ];
    let out = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap();
    assert_eq!(out[0].total_minutes, 481);
    assert_eq!(out[1].total_minutes, 480);
}

#[test]
fn test_dates_distinct_and_ascending_for_unordered_input() {
    let events = vec![
        cout("alice", "2025-03-05 17:00"),
        cin("alice", "2025-03-01 09:00"),
        cin("alice", "2025-03-05 09:00"),
        cout("alice", "2025-03-01 17:00"),
        cin("alice", "2025-03-03 09:00"),
        cin("alice", "2025-03-03 10:00"),
    ];
    let out = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap();
    let dates: Vec<_> = out.iter().map(|r| r.date_str()).collect();
    assert_eq!(dates, vec!["2025-03-01", "2025-03-03", "2025-03-05"]);
}

#[test]
fn test_balance_identities_hold() {
    let mut events = Vec::new();
    // One day per worked duration, from 1h to 11h in 35 minute steps.
    for (i, minutes) in (60..=660).step_by(35).enumerate() {
        let start = at(&format!("2025-01-{:02} 07:00", i + 1));
        events.push(RawEvent::clock_in("alice", start));
        events.push(RawEvent::clock_out("alice", start + minutes * 60_000));
    }

    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Morning), &utc()).unwrap();
    assert_eq!(out.len(), events.len() / 2);

    for r in &out {
        if r.total_minutes >= STANDARD_WORKDAY_MINUTES {
            assert_eq!(r.regular_minutes + r.overtime_minutes, r.total_minutes);
            assert_eq!(r.undertime_minutes, 0);
        } else {
            assert_eq!(r.regular_minutes + r.undertime_minutes, STANDARD_WORKDAY_MINUTES);
            assert_eq!(r.overtime_minutes, 0);
        }
        assert!(r.late_minutes >= 0);
    }
}

#[test]
fn test_reconcile_is_idempotent() {
    let events = vec![
        cin("alice", "2025-03-03 05:30"),
        cout("alice", "2025-03-03 14:45"),
        cin("alice", "2025-03-04 09:15"),
    ];
    let shift = ShiftConfig::named(ShiftKind::Morning);

    let first = serde_json::to_string(&reconcile(&events, &shift, &utc()).unwrap()).unwrap();
    let second = serde_json::to_string(&reconcile(&events, &shift, &utc()).unwrap()).unwrap();
    assert_eq!(first, second);

    let mut reversed = events.clone();
    reversed.reverse();
    let third = serde_json::to_string(&reconcile(&reversed, &shift, &utc()).unwrap()).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_mixed_employees_rejected() {
    let events = vec![
        cin("alice", "2025-03-03 09:00"),
        cin("bob", "2025-03-03 09:05"),
    ];
    let err = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::MixedEmployees {
            first: "alice".into(),
            other: "bob".into()
        }
    );
}

#[test]
fn test_reconcile_by_employee_partitions() {
    let events = vec![
        cin("bob", "2025-03-03 08:00"),
        cin("alice", "2025-03-03 09:00"),
        cout("alice", "2025-03-03 17:00"),
        cout("bob", "2025-03-03 12:00"),
    ];
    let out = reconcile_by_employee(&events, &ShiftConfig::none(), &utc()).unwrap();

    assert_eq!(out.keys().collect::<Vec<_>>(), vec!["alice", "bob"]);
    assert_eq!(out["alice"][0].total_minutes, 480);
    assert_eq!(out["alice"][0].employee_id, "alice");
    assert_eq!(out["bob"][0].total_minutes, 240);
    assert_eq!(out["bob"][0].clock_out, "12:00");
}

#[test]
fn test_night_shift_clock_out_rolls_back_by_default() {
    let events = vec![
        cin("nora", "2025-03-03 22:10"),
        cout("nora", "2025-03-04 06:10"),
    ];
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Night), &utc()).unwrap();

    assert_eq!(out.len(), 1);
    let r = &out[0];
    assert_eq!(r.date, date("2025-03-03"));
    assert_eq!(r.clock_in, "22:10");
    assert_eq!(r.clock_out, "06:10");
    assert_eq!(r.late_minutes, 10);
    assert_eq!(r.total_minutes, 480);
    assert_eq!(r.undertime_minutes, 0);
    assert!(r.overnight);
}

#[test]
fn test_night_shift_without_rollover_leaves_day_open() {
    let events = vec![
        cin("nora", "2025-03-03 22:00"),
        cout("nora", "2025-03-04 06:00"),
    ];
    let options = ReconcileOptions::new(FixedOffset::east_opt(0).unwrap(), OvernightPolicy::Off);
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Night), &options).unwrap();

    // The next-day clock-out has no clock-in on its own date and is discarded.
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].date, date("2025-03-03"));
    assert_eq!(out[0].clock_out, "N/A");
    assert_eq!(out[0].total_minutes, 0);
}

#[test]
fn test_night_shift_arrival_after_midnight_opens_previous_night() {
    let events = vec![
        cin("nora", "2025-03-04 00:30"),
        cout("nora", "2025-03-04 07:00"),
    ];
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Night), &utc()).unwrap();

    assert_eq!(out.len(), 1);
    let r = &out[0];
    assert_eq!(r.date, date("2025-03-03"));
    assert_eq!(r.clock_in, "00:30");
    assert_eq!(r.clock_out, "07:00");
    // 22:00 shift start to 00:30 the next morning.
    assert_eq!(r.late_minutes, 150);
    assert_eq!(r.total_minutes, 390);
    assert_eq!(r.undertime(), "01:30");
    assert!(r.overnight);
}

#[test]
fn test_night_shift_keeps_earliest_arrival_across_midnight() {
    let events = vec![
        cin("nora", "2025-03-03 21:55"),
        cin("nora", "2025-03-04 02:00"),
        cout("nora", "2025-03-04 06:00"),
    ];
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Night), &utc()).unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].clock_in, "21:55");
    assert_eq!(out[0].late_minutes, 0);
    assert_eq!(out[0].total_minutes, 485);
}

#[test]
fn test_auto_rollover_is_off_for_day_shifts() {
    let events = vec![
        cin("alice", "2025-03-03 05:00"),
        cout("alice", "2025-03-03 11:00"),
    ];
    let out = reconcile(&events, &ShiftConfig::named(ShiftKind::Morning), &utc()).unwrap();
    assert_eq!(out[0].clock_out, "11:00");
    assert!(!out[0].overnight);
}

#[test]
fn test_explicit_cutoff_applies_to_any_shift() {
    let events = vec![
        cin("alice", "2025-03-03 18:00"),
        cout("alice", "2025-03-04 01:30"),
        cin("alice", "2025-03-04 18:00"),
        cout("alice", "2025-03-04 23:00"),
    ];
    let cutoff = OvernightPolicy::Cutoff(NaiveTime::from_hms_opt(4, 0, 0).unwrap());
    let options = ReconcileOptions::new(FixedOffset::east_opt(0).unwrap(), cutoff);
    let out = reconcile(&events, &ShiftConfig::none(), &options).unwrap();

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].total_minutes, 450);
    assert!(out[0].overnight);
    assert_eq!(out[1].total_minutes, 300);
    assert!(!out[1].overnight);
}

#[test]
fn test_custom_shift_across_midnight_uses_auto_rollover() {
    let events = vec![
        cin("nora", "2025-03-03 20:00"),
        cout("nora", "2025-03-04 04:30"),
    ];
    let out = reconcile(&events, &ShiftConfig::custom("20:00", "05:00"), &utc()).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].total_minutes, 510);
    assert_eq!(out[0].overtime(), "00:30");
}

#[test]
fn test_offset_changes_local_day() {
    // 23:30 UTC is already the next day at +02:00.
    let events = vec![
        cin("alice", "2025-03-01 23:30"),
        cout("alice", "2025-03-02 07:30"),
    ];

    let utc_out = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap();
    assert_eq!(utc_out.len(), 1);
    assert_eq!(utc_out[0].date, date("2025-03-01"));
    assert!(utc_out[0].is_open());

    let plus_two = ReconcileOptions::with_offset(FixedOffset::east_opt(2 * 3600).unwrap());
    let local_out = reconcile(&events, &ShiftConfig::none(), &plus_two).unwrap();
    assert_eq!(local_out.len(), 1);
    assert_eq!(local_out[0].date, date("2025-03-02"));
    assert_eq!(local_out[0].clock_in, "01:30");
    assert_eq!(local_out[0].clock_out, "09:30");
    assert_eq!(local_out[0].total_minutes, 480);
}

#[test]
fn test_invalid_shift_configs() {
    let events = vec![cin("alice", "2025-03-03 09:00")];

    let mut missing_end = ShiftConfig::custom("09:00", "17:00");
    missing_end.custom_end = None;
    assert_eq!(
        reconcile(&events, &missing_end, &utc()).unwrap_err(),
        ValidationError::CustomShiftIncomplete
    );

    assert_eq!(
        reconcile(&events, &ShiftConfig::custom("9am", "17:00"), &utc()).unwrap_err(),
        ValidationError::InvalidShiftTime("9am".into())
    );

    assert_eq!(
        reconcile(&events, &ShiftConfig::with_hours(ShiftKind::Mid, 25, 3), &utc()).unwrap_err(),
        ValidationError::InvalidShiftHour(25)
    );

    // A bad shift is reported even when there is nothing to reconcile.
    assert!(reconcile(&[], &missing_end, &utc()).is_err());
    assert!(reconcile_by_employee(&[], &missing_end, &utc()).is_err());
}

#[test]
fn test_shift_from_parts() {
    let named = ShiftConfig::from_parts(ShiftKind::Morning, Some("06"), Some("15:00")).unwrap();
    let w = named.window().unwrap().unwrap();
    assert_eq!(w.start, NaiveTime::from_hms_opt(6, 0, 0).unwrap());
    assert_eq!(w.end, NaiveTime::from_hms_opt(15, 0, 0).unwrap());

    assert_eq!(
        ShiftConfig::from_parts(ShiftKind::Morning, Some("06:30"), None).unwrap_err(),
        ValidationError::InvalidShiftTime("06:30".into())
    );

    let night = ShiftConfig::named(ShiftKind::Night).window().unwrap().unwrap();
    assert!(night.spans_midnight());
    assert!(ShiftConfig::none().window().unwrap().is_none());
}

#[test]
fn test_overnight_policy_parsing() {
    assert_eq!("auto".parse::<OvernightPolicy>().unwrap(), OvernightPolicy::Auto);
    assert_eq!("OFF".parse::<OvernightPolicy>().unwrap(), OvernightPolicy::Off);
    assert_eq!(
        "05:30".parse::<OvernightPolicy>().unwrap(),
        OvernightPolicy::Cutoff(NaiveTime::from_hms_opt(5, 30, 0).unwrap())
    );
    assert!("later".parse::<OvernightPolicy>().is_err());
    assert_eq!(OvernightPolicy::Cutoff(NaiveTime::from_hms_opt(5, 30, 0).unwrap()).to_string(), "05:30");
}

#[test]
fn test_unrepresentable_timestamps_are_rejected() {
    let events = vec![
        RawEvent::clock_in("zed", i64::MIN),
        RawEvent::clock_out("zed", i64::MAX),
    ];
    let err = reconcile(&events, &ShiftConfig::none(), &utc()).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TimestampOutOfRange {
            employee: "zed".into(),
            timestamp: i64::MIN
        }
    );

    let events = vec![
        cin("zed", "2025-03-03 08:00"),
        RawEvent::clock_out("zed", 9_000_000_000_000_000),
    ];
    assert!(matches!(
        reconcile_by_employee(&events, &ShiftConfig::none(), &utc()),
        Err(ValidationError::TimestampOutOfRange { .. })
    ));
}
