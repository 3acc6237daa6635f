// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The availability engine.
//!
//! Orchestrates projection, filtering, narrowing, and hashing into one
//! complete [`AvailabilityResult`]. Pure: no I/O, no shared state, no side
//! effects. Either a complete, internally-consistent result is produced or
//! the computation fails as a whole; partial results are never returned.

use crate::error::CoreError;
use crate::hash::result_hash;
use crate::inputs::ExpertSchedule;
use crate::instant::{InstantQuery, compute_instant_availability};
use crate::result::{AvailabilityResult, DurationPrice, InstantAvailability};
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use mentora_domain::{
    BookingConstraints, Interval, TimeSlot, filter_bookable_slots, next_available_slot,
    project_weekly_slots,
};
use std::collections::HashSet;

/// A caller's availability question for one expert.
#[derive(Debug, Clone, Copy)]
pub struct AvailabilityQuery {
    /// The window start (UTC, inclusive).
    pub from: DateTime<Utc>,
    /// The window end (UTC, exclusive).
    pub to: DateTime<Utc>,
    /// Narrow `time_slots` to this calendar date in the requesting user's
    /// timezone. Ignored when `include_all_time_slots` is set.
    pub selected_date: Option<NaiveDate>,
    /// Narrow `time_slots` to this exact duration in minutes.
    pub selected_duration: Option<u16>,
    /// Return every slot in the window regardless of `selected_date`.
    pub include_all_time_slots: bool,
}

/// Computes the full availability result for one expert over a window.
///
/// The computation proceeds in phases: validate the window, cheap-exit for
/// unconfigured experts, project weekly rules into raw candidates, filter
/// out conflicts (collecting the bookable date set), determine the next
/// available slot, apply the caller's date/duration narrowing, derive the
/// distinct duration set, evaluate instant availability against `now`, and
/// hash the populated result.
///
/// # Errors
///
/// Returns `CoreError::InvalidDateRange` if the window is not a valid
/// interval, `CoreError::DomainViolation` on projection failures, and
/// `CoreError::Serialization` if the result cannot be hashed.
pub fn compute_availability(
    schedule: &ExpertSchedule,
    user_tz: Tz,
    now: DateTime<Utc>,
    query: &AvailabilityQuery,
) -> Result<AvailabilityResult, CoreError> {
    let window: Interval =
        Interval::new(query.from, query.to).map_err(|_| CoreError::InvalidDateRange {
            from: query.from,
            to: query.to,
        })?;

    let mut result: AvailabilityResult = AvailabilityResult::empty(
        query.from,
        query.to,
        query.selected_date,
        query.selected_duration,
    );

    if !schedule.is_bookable_configured() {
        result.hash = result_hash(&result)?;
        return Ok(result);
    }

    let expert_tz: Tz = schedule.profile.tz()?;
    let raw_slots: Vec<TimeSlot> = project_weekly_slots(
        &schedule.rules,
        &schedule.duration_options,
        expert_tz,
        &window,
    )?;

    let constraints = BookingConstraints {
        now,
        notice_period_minutes: schedule.profile.notice_period_minutes,
        expert_timezone: expert_tz,
        user_timezone: user_tz,
        blockout_dates: &schedule.blockout_dates,
        booked_sessions: &schedule.booked_sessions,
    };
    let bookable = filter_bookable_slots(raw_slots, &constraints);
    result.dates = bookable.dates;
    result.next_available_time_slot = next_available_slot(&bookable.slots).cloned();

    let mut slots: Vec<TimeSlot> = bookable.slots;
    if !query.include_all_time_slots
        && let Some(selected_date) = query.selected_date
    {
        slots.retain(|slot| slot.start.with_timezone(&user_tz).date_naive() == selected_date);
    }
    result.durations = distinct_durations(&slots);
    if let Some(minutes) = query.selected_duration {
        slots.retain(|slot| slot.duration_minutes == minutes);
    }
    result.time_slots = dedup_by_id(slots);

    // Instant availability is always evaluated against "now", independent
    // of the queried window and any narrowing above.
    result.instant = InstantAvailability {
        durations: compute_instant_availability(schedule, now, InstantQuery::default())?,
    };

    result.hash = result_hash(&result)?;
    Ok(result)
}

/// Distinct durations present in the slot list, first-seen order, one entry
/// per length.
fn distinct_durations(slots: &[TimeSlot]) -> Vec<DurationPrice> {
    let mut seen: HashSet<u16> = HashSet::new();
    let mut durations: Vec<DurationPrice> = Vec::new();
    for slot in slots {
        if seen.insert(slot.duration_minutes) {
            durations.push(DurationPrice {
                minutes: slot.duration_minutes,
                price: slot.price.clone(),
            });
        }
    }
    durations
}

/// Keeps the first slot for each id, preserving order.
fn dedup_by_id(slots: Vec<TimeSlot>) -> Vec<TimeSlot> {
    let mut seen: HashSet<String> = HashSet::new();
    slots
        .into_iter()
        .filter(|slot| seen.insert(slot.id.value().to_string()))
        .collect()
}
