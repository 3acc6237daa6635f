// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_expert, create_test_persistence};
use chrono::{DateTime, TimeZone, Utc};
use mentora_domain::Interval;

fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

#[test]
fn test_future_sessions_exclude_already_ended() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    let past = Interval::new(utc(2026, 3, 10, 9, 0), utc(2026, 3, 10, 10, 0)).unwrap();
    let running = Interval::new(utc(2026, 3, 16, 13, 30), utc(2026, 3, 16, 14, 30)).unwrap();
    let upcoming = Interval::new(utc(2026, 3, 17, 9, 0), utc(2026, 3, 17, 9, 30)).unwrap();
    persistence.record_session(expert_id, &past).unwrap();
    persistence.record_session(expert_id, &running).unwrap();
    persistence.record_session(expert_id, &upcoming).unwrap();

    let now = utc(2026, 3, 16, 14, 0);
    let sessions = persistence.future_sessions_for(expert_id, now).unwrap();

    // A session still in progress has not ended and is included.
    assert_eq!(sessions, vec![running, upcoming]);
}

#[test]
fn test_future_sessions_are_per_expert() {
    let mut persistence = create_test_persistence();
    let first = create_test_expert(&mut persistence);
    let second = create_test_expert(&mut persistence);

    let session = Interval::new(utc(2026, 3, 17, 9, 0), utc(2026, 3, 17, 9, 30)).unwrap();
    persistence.record_session(first, &session).unwrap();

    let sessions = persistence
        .future_sessions_for(second, utc(2026, 3, 16, 0, 0))
        .unwrap();
    assert!(sessions.is_empty());
}

#[test]
fn test_overlapping_sessions_detects_partial_overlap() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    let existing = Interval::new(utc(2026, 3, 17, 9, 0), utc(2026, 3, 17, 10, 0)).unwrap();
    persistence.record_session(expert_id, &existing).unwrap();

    let overlapping = Interval::new(utc(2026, 3, 17, 9, 30), utc(2026, 3, 17, 10, 30)).unwrap();
    let found = persistence
        .overlapping_sessions(expert_id, &overlapping)
        .unwrap();
    assert_eq!(found, vec![existing]);

    // Adjacent intervals do not overlap.
    let adjacent = Interval::new(utc(2026, 3, 17, 10, 0), utc(2026, 3, 17, 11, 0)).unwrap();
    assert!(
        persistence
            .overlapping_sessions(expert_id, &adjacent)
            .unwrap()
            .is_empty()
    );
}
