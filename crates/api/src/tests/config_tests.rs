// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use super::helpers::{
    create_expert_request, create_test_persistence, monday_rule_request,
    thirty_minute_options_request,
};
use crate::request_response::{
    AddBlockoutDateRequest, DurationOptionInput, RangeInput, ReplaceAvailabilityRulesRequest,
    ReplaceDurationOptionsRequest, RuleInput,
};
use crate::{
    ApiError, add_blockout_date, create_expert, get_expert, replace_availability_rules,
    replace_duration_options,
};

#[test]
fn test_create_and_get_expert() {
    let mut persistence = create_test_persistence();
    let created = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 120),
    )
    .unwrap();

    let fetched = get_expert(&mut persistence, created.expert_id).unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.timezone, "America/New_York");
    assert_eq!(fetched.notice_period_minutes, 120);
}

#[test]
fn test_create_expert_rejects_unknown_timezone() {
    let mut persistence = create_test_persistence();
    let result = create_expert(&mut persistence, &create_expert_request("Mars/Olympus", 0));
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "timezone"));
}

#[test]
fn test_get_missing_expert_is_not_found() {
    let mut persistence = create_test_persistence();
    assert!(matches!(
        get_expert(&mut persistence, 9999),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_replace_rules_round_trip() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let response =
        replace_availability_rules(&mut persistence, expert.expert_id, &monday_rule_request())
            .unwrap();
    assert_eq!(response.rule_count, 1);

    let stored = persistence
        .availability_rules_for(expert.expert_id)
        .unwrap();
    assert_eq!(stored.len(), 1);
    assert!(stored[0].enabled);
    assert_eq!(stored[0].ranges.len(), 1);
}

#[test]
fn test_replace_rules_rejects_unknown_weekday() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let request = ReplaceAvailabilityRulesRequest {
        rules: vec![RuleInput {
            weekday: String::from("funday"),
            enabled: true,
            ranges: vec![],
        }],
    };
    let result = replace_availability_rules(&mut persistence, expert.expert_id, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "weekday"));
}

#[test]
fn test_replace_rules_rejects_malformed_time() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let request = ReplaceAvailabilityRulesRequest {
        rules: vec![RuleInput {
            weekday: String::from("monday"),
            enabled: true,
            ranges: vec![RangeInput {
                start: String::from("9 o'clock"),
                end: String::from("12:00"),
            }],
        }],
    };
    let result = replace_availability_rules(&mut persistence, expert.expert_id, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "ranges"));
}

#[test]
fn test_replace_rules_rejects_duplicate_weekday() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let mut request = monday_rule_request();
    request.rules.push(RuleInput {
        weekday: String::from("monday"),
        enabled: false,
        ranges: vec![],
    });
    let result = replace_availability_rules(&mut persistence, expert.expert_id, &request);
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "one_rule_per_weekday"
    ));
}

#[test]
fn test_replace_rules_for_missing_expert() {
    let mut persistence = create_test_persistence();
    let result = replace_availability_rules(&mut persistence, 9999, &monday_rule_request());
    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_replace_duration_options_round_trip() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let response = replace_duration_options(
        &mut persistence,
        expert.expert_id,
        &thirty_minute_options_request(),
    )
    .unwrap();
    assert_eq!(response.option_count, 1);

    let stored = persistence.duration_options_for(expert.expert_id).unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].minutes, 30);
    assert_eq!(stored[0].price.amount_cents, 5000);
}

#[test]
fn test_replace_duration_options_rejects_duplicates() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let request = ReplaceDurationOptionsRequest {
        options: vec![
            DurationOptionInput {
                minutes: 30,
                amount_cents: 5000,
                currency_code: String::from("USD"),
            },
            DurationOptionInput {
                minutes: 30,
                amount_cents: 8000,
                currency_code: String::from("USD"),
            },
        ],
    };
    let result = replace_duration_options(&mut persistence, expert.expert_id, &request);
    assert!(matches!(
        result,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_duration_options"
    ));
}

#[test]
fn test_add_blockout_date_and_duplicate() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let request = AddBlockoutDateRequest {
        date: String::from("2026-03-16"),
    };
    let response = add_blockout_date(&mut persistence, expert.expert_id, &request).unwrap();
    assert_eq!(response.date, "2026-03-16");

    let duplicate = add_blockout_date(&mut persistence, expert.expert_id, &request);
    assert!(matches!(
        duplicate,
        Err(ApiError::DomainRuleViolation { rule, .. }) if rule == "unique_blockout_date"
    ));
}

#[test]
fn test_add_blockout_date_rejects_malformed_date() {
    let mut persistence = create_test_persistence();
    let expert = create_expert(
        &mut persistence,
        &create_expert_request("America/New_York", 0),
    )
    .unwrap();

    let request = AddBlockoutDateRequest {
        date: String::from("March 16th"),
    };
    let result = add_blockout_date(&mut persistence, expert.expert_id, &request);
    assert!(matches!(result, Err(ApiError::InvalidInput { field, .. }) if field == "date"));
}
