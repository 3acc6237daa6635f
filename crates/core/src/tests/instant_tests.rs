// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_monday_schedule, usd, utc};
use crate::{InstantQuery, compute_instant_availability};
use mentora_domain::{BlockoutDate, DurationOption, Interval};
use time::macros::date;

#[test]
fn test_all_durations_available_when_nothing_conflicts() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options = vec![
        DurationOption::new(30, usd(5000)),
        DurationOption::new(60, usd(9000)),
    ];
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert_eq!(durations.len(), 2);
    assert_eq!(durations[0].minutes, 30);
    assert_eq!(durations[1].minutes, 60);
}

#[test]
fn test_active_session_blocks_instant_availability() {
    let mut schedule = create_monday_schedule();
    schedule.booked_sessions =
        vec![Interval::new(utc(2026, 3, 16, 13, 30), utc(2026, 3, 16, 14, 30)).unwrap()];
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert!(durations.is_empty());
}

#[test]
fn test_ignore_active_session_factors_it_out() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options = vec![
        DurationOption::new(30, usd(5000)),
        DurationOption::new(60, usd(9000)),
    ];
    // One session in progress, the next one 45 minutes out.
    schedule.booked_sessions = vec![
        Interval::new(utc(2026, 3, 16, 13, 30), utc(2026, 3, 16, 14, 10)).unwrap(),
        Interval::new(utc(2026, 3, 16, 14, 45), utc(2026, 3, 16, 15, 45)).unwrap(),
    ];
    let now = utc(2026, 3, 16, 14, 0);

    let durations = compute_instant_availability(
        &schedule,
        now,
        InstantQuery {
            ignore_active_session: true,
        },
    )
    .unwrap();

    // A 30-minute session ends before the next commitment; a 60-minute one
    // would overlap it.
    assert_eq!(durations.len(), 1);
    assert_eq!(durations[0].minutes, 30);
}

#[test]
fn test_future_session_limits_instant_durations() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options = vec![
        DurationOption::new(30, usd(5000)),
        DurationOption::new(60, usd(9000)),
    ];
    schedule.booked_sessions =
        vec![Interval::new(utc(2026, 3, 16, 14, 30), utc(2026, 3, 16, 15, 30)).unwrap()];
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert_eq!(durations.len(), 1);
    assert_eq!(durations[0].minutes, 30);
}

#[test]
fn test_blockout_today_blocks_instant_availability() {
    let mut schedule = create_monday_schedule();
    // 2026-03-16 14:00 UTC is 10:00 on the 16th in New York.
    schedule.blockout_dates = vec![BlockoutDate::new(date!(2026 - 03 - 16))];
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert!(durations.is_empty());
}

#[test]
fn test_notice_period_does_not_apply_to_instant() {
    let mut schedule = create_monday_schedule();
    schedule.profile.notice_period_minutes = 240;
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert_eq!(durations.len(), 1);
}

#[test]
fn test_no_duration_options_yields_empty() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options.clear();
    let now = utc(2026, 3, 16, 14, 0);

    let durations =
        compute_instant_availability(&schedule, now, InstantQuery::default()).unwrap();

    assert!(durations.is_empty());
}
