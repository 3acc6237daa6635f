// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Instant (right-now) availability.
//!
//! Answers a narrower question than the full engine: for which configured
//! durations would a session starting at the current instant fit? Weekly
//! rules do not participate; only the expert's commitments and blockout
//! dates can stand in the way, and the notice period is bypassed by
//! definition.

use crate::error::CoreError;
use crate::inputs::ExpertSchedule;
use crate::result::DurationPrice;
use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;
use mentora_domain::{BookingConstraints, Interval, TimeSlot, is_slot_bookable};

/// Options for an instant-availability query.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantQuery {
    /// Evaluate as if the session currently in progress (if any) did not
    /// exist. Used when a consumer wants to extend or follow up on the
    /// session they are in.
    pub ignore_active_session: bool,
}

/// Determines which durations are bookable for a session starting now.
///
/// An expert with a session in progress is unavailable unless
/// `ignore_active_session` is set. Each duration option is tested as a
/// synthetic `[now, now + duration)` candidate against the bookability
/// checks, with the notice period skipped.
///
/// # Errors
///
/// Returns an error if the expert's stored timezone can no longer be
/// parsed.
pub fn compute_instant_availability(
    schedule: &ExpertSchedule,
    now: DateTime<Utc>,
    query: InstantQuery,
) -> Result<Vec<DurationPrice>, CoreError> {
    if schedule.duration_options.is_empty() {
        return Ok(Vec::new());
    }
    if schedule.active_session_at(now).is_some() && !query.ignore_active_session {
        return Ok(Vec::new());
    }
    let expert_tz: Tz = schedule.profile.tz()?;

    let sessions: Vec<Interval> = if query.ignore_active_session {
        schedule
            .booked_sessions
            .iter()
            .filter(|session| !session.contains(now))
            .copied()
            .collect()
    } else {
        schedule.booked_sessions.clone()
    };
    let constraints = BookingConstraints {
        now,
        notice_period_minutes: 0,
        expert_timezone: expert_tz,
        user_timezone: expert_tz,
        blockout_dates: &schedule.blockout_dates,
        booked_sessions: &sessions,
    };

    let mut durations: Vec<DurationPrice> = Vec::new();
    for option in &schedule.duration_options {
        let Some(end) = now.checked_add_signed(Duration::minutes(i64::from(option.minutes)))
        else {
            continue;
        };
        let Ok(interval) = Interval::new(now, end) else {
            continue;
        };
        let candidate: TimeSlot =
            TimeSlot::from_interval(&interval, option.minutes, option.price.clone());
        if is_slot_bookable(&candidate, &constraints, false) {
            durations.push(DurationPrice {
                minutes: option.minutes,
                price: option.price.clone(),
            });
        }
    }
    Ok(durations)
}
