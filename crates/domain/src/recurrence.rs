// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Weekly recurrence projection.
//!
//! This module expands one expert's weekly availability rules into concrete
//! candidate time slots across an arbitrary multi-week window.
//!
//! ## Invariants
//!
//! - Only the first week of the window is computed in full wall-clock
//!   detail; later weeks are whole-week shifts of the first week's slots
//! - Rules are assumed constant across the entire window; effective-dated
//!   rule changes mid-window are not honored
//! - Wall-clock ranges are materialized to UTC using the timezone offset at
//!   the day's local midnight, so slots computed on a DST transition day
//!   follow the pre-transition offset
//! - Candidate slots are deduplicated by id; the first occurrence wins
//!
//! No bookability filtering happens here; the conflict filter owns that.

use crate::error::DomainError;
use crate::interval::Interval;
use crate::pricing::price_for_duration;
use crate::slot::TimeSlot;
use crate::types::{AvailabilityRule, DurationOption, Weekday};
use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeZone, Utc};
use chrono_tz::Tz;
use std::collections::HashSet;

/// Expands the weekly rule set into candidate slots for the query window.
///
/// The window is split into week chunks. For each UTC day of the first
/// chunk, the day's local date in the expert timezone selects the matching
/// rule, and every range of that rule is split into one candidate slot per
/// duration option length. Later chunks receive the first chunk's slots
/// shifted forward by whole weeks, kept only when the chunk still covers a
/// day with the slot's weekday.
///
/// An expert with no active rule or no duration option yields an empty
/// list immediately.
///
/// # Errors
///
/// Returns `DomainError::DateArithmeticOverflow` if week shifting leaves
/// the representable time range. Individually malformed ranges are skipped,
/// never fatal.
pub fn project_weekly_slots(
    rules: &[AvailabilityRule],
    duration_options: &[DurationOption],
    expert_tz: Tz,
    window: &Interval,
) -> Result<Vec<TimeSlot>, DomainError> {
    if duration_options.is_empty() || !rules.iter().any(AvailabilityRule::is_active) {
        return Ok(Vec::new());
    }

    let weeks: Vec<Interval> = window.split_by_week();
    let Some(first_week) = weeks.first() else {
        return Ok(Vec::new());
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut slots: Vec<TimeSlot> = Vec::new();

    for day in first_week.split_by_day() {
        let local_date: NaiveDate = day.start().with_timezone(&expert_tz).date_naive();
        let weekday: Weekday = Weekday::from_chrono(local_date.weekday());
        let Some(rule) = rules.iter().find(|r| r.weekday == weekday) else {
            continue;
        };
        if !rule.enabled {
            continue;
        }
        let local_midnight: NaiveDateTime = local_date.and_time(NaiveTime::MIN);
        let Some(offset) = expert_tz
            .offset_from_local_datetime(&local_midnight)
            .earliest()
        else {
            continue;
        };
        let offset_seconds: i64 = i64::from(offset.fix().local_minus_utc());

        for range in &rule.ranges {
            let start_utc: DateTime<Utc> = Utc.from_utc_datetime(
                &(local_midnight + Duration::minutes(range.start_minutes())
                    - Duration::seconds(offset_seconds)),
            );
            let mut end_utc: DateTime<Utc> = Utc.from_utc_datetime(
                &(local_midnight + Duration::minutes(range.end_minutes())
                    - Duration::seconds(offset_seconds)),
            );
            // Range wraps past midnight; retry once with the end on the
            // next day, then give up on the range.
            if end_utc <= start_utc {
                end_utc += Duration::days(1);
            }
            let Ok(range_interval) = Interval::new(start_utc, end_utc) else {
                continue;
            };
            for option in duration_options {
                let Some(price) = price_for_duration(duration_options, option.minutes) else {
                    continue;
                };
                for piece in range_interval.split_by_duration(option.minutes) {
                    // Guards against a partial trailing chunk ever slipping
                    // through as a short slot.
                    if piece.duration_minutes() < i64::from(option.minutes) {
                        continue;
                    }
                    let slot: TimeSlot =
                        TimeSlot::from_interval(&piece, option.minutes, price.clone());
                    if seen.insert(slot.id.value().to_string()) {
                        slots.push(slot);
                    }
                }
            }
        }
    }

    let first_week_count: usize = slots.len();
    let mut projected: Vec<TimeSlot> = Vec::new();
    for (week_index, week) in weeks.iter().enumerate().skip(1) {
        let covered_weekdays: HashSet<chrono::Weekday> = week
            .split_by_day()
            .iter()
            .map(|d| d.start().weekday())
            .collect();
        let shift_weeks: i64 =
            i64::try_from(week_index).map_err(|_| DomainError::DateArithmeticOverflow {
                operation: String::from("computing week offset"),
            })?;
        for slot in &slots[..first_week_count] {
            if !covered_weekdays.contains(&slot.start.weekday()) {
                continue;
            }
            let shifted: TimeSlot = slot.shift_days(7 * shift_weeks)?;
            if seen.insert(shifted.id.value().to_string()) {
                projected.push(shifted);
            }
        }
    }
    slots.extend(projected);

    Ok(slots)
}
