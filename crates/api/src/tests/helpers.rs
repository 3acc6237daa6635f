// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use crate::request_response::{
    CreateExpertRequest, DurationOptionInput, RangeInput, ReplaceAvailabilityRulesRequest,
    ReplaceDurationOptionsRequest, RuleInput,
};
use crate::{create_expert, replace_availability_rules, replace_duration_options};
use chrono::{DateTime, TimeZone, Utc};
use mentora_persistence::SqlitePersistence;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_expert_request(timezone: &str, notice_period_minutes: u32) -> CreateExpertRequest {
    CreateExpertRequest {
        display_name: String::from("Test Expert"),
        timezone: String::from(timezone),
        notice_period_minutes,
    }
}

pub fn monday_rule_request() -> ReplaceAvailabilityRulesRequest {
    ReplaceAvailabilityRulesRequest {
        rules: vec![RuleInput {
            weekday: String::from("monday"),
            enabled: true,
            ranges: vec![RangeInput {
                start: String::from("09:00"),
                end: String::from("12:00"),
            }],
        }],
    }
}

pub fn thirty_minute_options_request() -> ReplaceDurationOptionsRequest {
    ReplaceDurationOptionsRequest {
        options: vec![DurationOptionInput {
            minutes: 30,
            amount_cents: 5000,
            currency_code: String::from("USD"),
        }],
    }
}

/// A New York expert with a Monday 09:00-12:00 rule and a 30-minute
/// option, created through the API handlers.
pub fn create_configured_expert(persistence: &mut SqlitePersistence) -> i64 {
    let expert = create_expert(persistence, &create_expert_request("America/New_York", 0))
        .expect("Failed to create expert");
    replace_availability_rules(persistence, expert.expert_id, &monday_rule_request())
        .expect("Failed to store rules");
    replace_duration_options(persistence, expert.expert_id, &thirty_minute_options_request())
        .expect("Failed to store duration options");
    expert.expert_id
}
