// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::{create_test_expert, create_test_persistence};
use crate::PersistenceError;
use mentora_domain::{AvailabilityRule, DurationOption, Price, TimeRange, Weekday};
use time::macros::{date, time};

#[test]
fn test_create_and_get_expert() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    let profile = persistence.get_expert(expert_id).unwrap();
    assert_eq!(profile.expert_id, Some(expert_id));
    assert_eq!(profile.display_name, "Test Expert");
    assert_eq!(profile.timezone, "America/New_York");
    assert_eq!(profile.notice_period_minutes, 60);
}

#[test]
fn test_get_missing_expert() {
    let mut persistence = create_test_persistence();
    assert_eq!(
        persistence.get_expert(9999),
        Err(PersistenceError::ExpertNotFound(9999))
    );
}

#[test]
fn test_availability_rules_round_trip() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    let rules = vec![
        AvailabilityRule::new(
            Weekday::Monday,
            true,
            vec![
                TimeRange::new(time!(9:00), time!(12:00)),
                TimeRange::new(time!(13:30), time!(17:00)),
            ],
        ),
        AvailabilityRule::new(Weekday::Saturday, false, vec![]),
    ];
    persistence
        .replace_availability_rules(expert_id, &rules)
        .unwrap();

    let loaded = persistence.availability_rules_for(expert_id).unwrap();
    assert_eq!(loaded, rules);
}

#[test]
fn test_replace_availability_rules_supersedes() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    persistence
        .replace_availability_rules(
            expert_id,
            &[AvailabilityRule::new(
                Weekday::Monday,
                true,
                vec![TimeRange::new(time!(9:00), time!(12:00))],
            )],
        )
        .unwrap();
    persistence
        .replace_availability_rules(
            expert_id,
            &[AvailabilityRule::new(
                Weekday::Friday,
                true,
                vec![TimeRange::new(time!(10:00), time!(11:00))],
            )],
        )
        .unwrap();

    let loaded = persistence.availability_rules_for(expert_id).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].weekday, Weekday::Friday);
}

#[test]
fn test_duration_options_preserve_configured_order() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    let options = vec![
        DurationOption::new(60, Price::new(String::from("USD"), 9000)),
        DurationOption::new(30, Price::new(String::from("USD"), 5000)),
    ];
    persistence
        .replace_duration_options(expert_id, &options)
        .unwrap();

    let loaded = persistence.duration_options_for(expert_id).unwrap();
    assert_eq!(loaded, options);
}

#[test]
fn test_blockout_dates_filtered_from_day() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    persistence
        .add_blockout_date(expert_id, date!(2026 - 03 - 10))
        .unwrap();
    persistence
        .add_blockout_date(expert_id, date!(2026 - 03 - 20))
        .unwrap();

    let loaded = persistence
        .blockout_dates_on_or_after(expert_id, date!(2026 - 03 - 15))
        .unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].date, date!(2026 - 03 - 20));

    // The boundary day itself is included.
    let loaded = persistence
        .blockout_dates_on_or_after(expert_id, date!(2026 - 03 - 10))
        .unwrap();
    assert_eq!(loaded.len(), 2);
}

#[test]
fn test_duplicate_blockout_date_rejected() {
    let mut persistence = create_test_persistence();
    let expert_id = create_test_expert(&mut persistence);

    persistence
        .add_blockout_date(expert_id, date!(2026 - 03 - 10))
        .unwrap();
    assert!(
        persistence
            .add_blockout_date(expert_id, date!(2026 - 03 - 10))
            .is_err()
    );
}

#[test]
fn test_foreign_key_enforced_for_config_rows() {
    let mut persistence = create_test_persistence();
    let result = persistence.replace_availability_rules(
        4242,
        &[AvailabilityRule::new(
            Weekday::Monday,
            true,
            vec![TimeRange::new(time!(9:00), time!(12:00))],
        )],
    );
    assert!(result.is_err());
}
