// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{create_monday_schedule, utc};
use crate::{AvailabilityQuery, compute_availability, result_hash};
use chrono_tz::Tz;
use mentora_domain::BlockoutDate;
use time::macros::date;

fn utc_tz() -> Tz {
    "UTC".parse().unwrap()
}

fn query() -> AvailabilityQuery {
    AvailabilityQuery {
        from: utc(2026, 3, 16, 0, 0),
        to: utc(2026, 3, 24, 0, 0),
        selected_date: None,
        selected_duration: None,
        include_all_time_slots: false,
    }
}

#[test]
fn test_hash_is_stable_for_identical_content() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);

    let first = compute_availability(&schedule, utc_tz(), now, &query()).unwrap();
    let second = compute_availability(&schedule, utc_tz(), now, &query()).unwrap();

    assert_eq!(first.hash, second.hash);
    assert_eq!(first.hash.len(), 64);
}

#[test]
fn test_hash_changes_when_content_changes() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let baseline = compute_availability(&schedule, utc_tz(), now, &query()).unwrap();

    let mut blocked = schedule.clone();
    blocked.blockout_dates = vec![BlockoutDate::new(date!(2026 - 03 - 16))];
    let changed = compute_availability(&blocked, utc_tz(), now, &query()).unwrap();

    assert_ne!(baseline.hash, changed.hash);
}

#[test]
fn test_hash_field_itself_is_excluded_from_the_digest() {
    let schedule = create_monday_schedule();
    let now = utc(2026, 3, 15, 0, 0);
    let result = compute_availability(&schedule, utc_tz(), now, &query()).unwrap();

    // Recomputing over the populated result (hash set) must reproduce the
    // stored value.
    assert_eq!(result_hash(&result).unwrap(), result.hash);
}
