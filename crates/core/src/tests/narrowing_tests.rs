// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_monday_schedule, usd, utc};
use crate::{AvailabilityQuery, compute_availability};
use chrono::NaiveDate;
use chrono_tz::Tz;
use mentora_domain::DurationOption;

fn utc_tz() -> Tz {
    "UTC".parse().unwrap()
}

fn two_week_query() -> AvailabilityQuery {
    AvailabilityQuery {
        from: utc(2026, 3, 16, 0, 0),
        to: utc(2026, 3, 24, 0, 0),
        selected_date: None,
        selected_duration: None,
        include_all_time_slots: false,
    }
}

#[test]
fn test_selected_date_narrows_slots_but_not_dates() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let mut query = two_week_query();
    query.selected_date = NaiveDate::from_ymd_opt(2026, 3, 23);

    let result = compute_availability(&schedule, utc_tz(), now, &query).unwrap();

    assert_eq!(result.time_slots.len(), 6);
    assert!(
        result
            .time_slots
            .iter()
            .all(|slot| slot.start.date_naive() == NaiveDate::from_ymd_opt(2026, 3, 23).unwrap())
    );
    // The date picker set still shows every bookable day in the window.
    assert_eq!(result.dates.len(), 2);
    assert_eq!(result.selected_date, NaiveDate::from_ymd_opt(2026, 3, 23));
}

#[test]
fn test_selected_date_interpreted_in_user_timezone() {
    // Slots start 13:00-15:30 UTC, which is already the next day in
    // Auckland (UTC+13 in March). Narrowing by the user-local date of the
    // first Monday must use the Auckland date.
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let auckland: Tz = "Pacific/Auckland".parse().unwrap();
    let mut query = two_week_query();
    query.selected_date = NaiveDate::from_ymd_opt(2026, 3, 17);

    let result = compute_availability(&schedule, auckland, now, &query).unwrap();

    assert_eq!(result.time_slots.len(), 6);
    assert!(
        result
            .time_slots
            .iter()
            .all(|slot| slot.start.date_naive() == NaiveDate::from_ymd_opt(2026, 3, 16).unwrap())
    );
    assert_eq!(
        result.dates,
        vec![
            NaiveDate::from_ymd_opt(2026, 3, 17).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 24).unwrap(),
        ]
    );
}

#[test]
fn test_include_all_time_slots_overrides_selected_date() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let mut query = two_week_query();
    query.selected_date = NaiveDate::from_ymd_opt(2026, 3, 23);
    query.include_all_time_slots = true;

    let result = compute_availability(&schedule, utc_tz(), now, &query).unwrap();

    assert_eq!(result.time_slots.len(), 12);
    assert_eq!(result.selected_date, NaiveDate::from_ymd_opt(2026, 3, 23));
}

#[test]
fn test_selected_duration_narrows_slots() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options = vec![
        DurationOption::new(30, usd(5000)),
        DurationOption::new(60, usd(9000)),
    ];
    let now = utc(2026, 3, 15, 0, 0);
    let mut query = two_week_query();
    query.selected_duration = Some(60);

    let result = compute_availability(&schedule, utc_tz(), now, &query).unwrap();

    assert!(result.time_slots.iter().all(|s| s.duration_minutes == 60));
    assert_eq!(result.time_slots.len(), 6);
    // Durations are derived before the duration narrowing.
    assert_eq!(result.durations.len(), 2);
    assert_eq!(result.selected_duration, Some(60));
}

#[test]
fn test_date_and_duration_narrowing_compose() {
    let mut schedule = create_monday_schedule();
    schedule.duration_options = vec![
        DurationOption::new(30, usd(5000)),
        DurationOption::new(60, usd(9000)),
    ];
    let now = utc(2026, 3, 15, 0, 0);
    let mut query = two_week_query();
    query.selected_date = NaiveDate::from_ymd_opt(2026, 3, 16);
    query.selected_duration = Some(30);

    let result = compute_availability(&schedule, utc_tz(), now, &query).unwrap();

    assert_eq!(result.time_slots.len(), 6);
    assert!(result.time_slots.iter().all(|slot| {
        slot.duration_minutes == 30
            && slot.start.date_naive() == NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
    }));
}

#[test]
fn test_selected_duration_without_matching_slots() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let mut query = two_week_query();
    query.selected_duration = Some(90);

    let result = compute_availability(&schedule, utc_tz(), now, &query).unwrap();

    assert!(result.time_slots.is_empty());
    // The unfiltered window still had bookable days and durations.
    assert_eq!(result.dates.len(), 2);
    assert_eq!(result.durations.len(), 1);
}
