// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ExpertSchedule;
use chrono::{DateTime, TimeZone, Utc};
use mentora_domain::{
    AvailabilityRule, DurationOption, ExpertProfile, Price, TimeRange, Weekday,
};
use time::macros::time;

pub fn utc(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).unwrap()
}

pub fn usd(amount_cents: i64) -> Price {
    Price::new(String::from("USD"), amount_cents)
}

pub fn create_test_profile(timezone: &str, notice_period_minutes: u32) -> ExpertProfile {
    ExpertProfile::new(
        String::from("Test Expert"),
        String::from(timezone),
        notice_period_minutes,
    )
    .unwrap()
    .with_id(1001)
}

/// A New York expert with a Monday 09:00-12:00 rule and a 30-minute
/// duration option at $50.
pub fn create_monday_schedule() -> ExpertSchedule {
    let mut schedule = ExpertSchedule::new(create_test_profile("America/New_York", 0));
    schedule.rules = vec![AvailabilityRule::new(
        Weekday::Monday,
        true,
        vec![TimeRange::new(time!(9:00), time!(12:00))],
    )];
    schedule.duration_options = vec![DurationOption::new(30, usd(5000))];
    schedule
}
