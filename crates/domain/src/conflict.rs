// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Bookability filtering of candidate slots.
//!
//! This module removes candidate slots that collide with blockout dates,
//! already-booked sessions, the expert's notice period, or the past. As a
//! side effect of the same pass, it collects the calendar dates (in the
//! requesting user's timezone) that still contain at least one bookable
//! slot.

use crate::interval::Interval;
use crate::slot::TimeSlot;
use crate::types::BlockoutDate;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use chrono_tz::Tz;
use std::collections::BTreeSet;

/// Everything a bookability decision depends on besides the slot itself.
#[derive(Debug, Clone)]
pub struct BookingConstraints<'a> {
    /// The current instant.
    pub now: DateTime<Utc>,
    /// The expert's minimum booking lead time in minutes.
    pub notice_period_minutes: u32,
    /// The expert's timezone (governs blockout date comparison).
    pub expert_timezone: Tz,
    /// The requesting user's timezone (governs the collected date set).
    pub user_timezone: Tz,
    /// Days on which the expert is fully unavailable.
    pub blockout_dates: &'a [BlockoutDate],
    /// Intervals of the expert's existing commitments.
    pub booked_sessions: &'a [Interval],
}

/// The surviving slots of a filter pass, with the user-timezone dates they
/// cover.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookableSlots {
    /// Slots that passed every bookability check, in input order.
    pub slots: Vec<TimeSlot>,
    /// Sorted, deduplicated calendar dates (requesting user's timezone)
    /// containing at least one surviving slot.
    pub dates: Vec<NaiveDate>,
}

/// Whether a candidate slot survives every bookability check.
///
/// `enforce_notice` is switched off by the instant-availability path, which
/// bypasses the notice period by definition; all other checks still apply.
#[must_use]
pub fn is_slot_bookable(
    slot: &TimeSlot,
    constraints: &BookingConstraints<'_>,
    enforce_notice: bool,
) -> bool {
    let local_date: NaiveDate = slot
        .start
        .with_timezone(&constraints.expert_timezone)
        .date_naive();
    if constraints
        .blockout_dates
        .iter()
        .any(|blockout| blockout.to_naive() == Some(local_date))
    {
        return false;
    }
    if enforce_notice {
        let earliest: Option<DateTime<Utc>> = constraints
            .now
            .checked_add_signed(Duration::minutes(i64::from(constraints.notice_period_minutes)));
        match earliest {
            Some(earliest) if earliest > slot.start => return false,
            Some(_) => {}
            None => return false,
        }
    }
    // Kept separate from the notice check so a zero notice period still
    // excludes slots already in the past.
    if slot.start < constraints.now {
        return false;
    }
    let slot_interval: Interval = slot.interval();
    if constraints
        .booked_sessions
        .iter()
        .any(|session| session.overlaps(&slot_interval))
    {
        return false;
    }
    true
}

/// Filters the raw candidate list down to bookable slots and collects the
/// user-timezone dates covered by the survivors.
#[must_use]
pub fn filter_bookable_slots(
    slots: Vec<TimeSlot>,
    constraints: &BookingConstraints<'_>,
) -> BookableSlots {
    let mut dates: BTreeSet<NaiveDate> = BTreeSet::new();
    let mut surviving: Vec<TimeSlot> = Vec::new();
    for slot in slots {
        if !is_slot_bookable(&slot, constraints, true) {
            continue;
        }
        dates.insert(
            slot.start
                .with_timezone(&constraints.user_timezone)
                .date_naive(),
        );
        surviving.push(slot);
    }
    BookableSlots {
        slots: surviving,
        dates: dates.into_iter().collect(),
    }
}

/// The earliest surviving slot by start instant, if any.
#[must_use]
pub fn next_available_slot(slots: &[TimeSlot]) -> Option<&TimeSlot> {
    slots.iter().min_by_key(|slot| slot.start)
}
