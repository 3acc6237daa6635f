// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, NaiveDate, Utc};
use mentora_domain::{Price, TimeSlot};
use serde::{Deserialize, Serialize};

/// A distinct session length available somewhere in a slot set, with its
/// price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationPrice {
    /// The session length in minutes.
    pub minutes: u16,
    /// The price for a session of this length.
    pub price: Price,
}

/// The instant-availability portion of a result: the durations bookable
/// right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantAvailability {
    /// Durations for which a session starting now would fit.
    pub durations: Vec<DurationPrice>,
}

/// The complete output of one availability computation.
///
/// Rebuilt from scratch on every query; nothing here is persisted. The
/// `hash` lets clients detect changes without deep comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    /// Content hash of the rest of the result.
    pub hash: String,
    /// The queried window start (UTC).
    pub from: DateTime<Utc>,
    /// The queried window end (UTC).
    pub to: DateTime<Utc>,
    /// The narrowing date filter, echoed back.
    pub selected_date: Option<NaiveDate>,
    /// The narrowing duration filter (minutes), echoed back.
    pub selected_duration: Option<u16>,
    /// Calendar dates (requesting user's timezone) with at least one
    /// bookable slot, before any narrowing.
    pub dates: Vec<NaiveDate>,
    /// Distinct durations present in the (date-narrowed) slot list, in
    /// first-seen order.
    pub durations: Vec<DurationPrice>,
    /// The final filtered, deduplicated slot list.
    pub time_slots: Vec<TimeSlot>,
    /// The earliest bookable slot in the window, if any.
    pub next_available_time_slot: Option<TimeSlot>,
    /// Instant (right-now) availability, always evaluated against "now".
    pub instant: InstantAvailability,
}

impl AvailabilityResult {
    /// Creates a result with the query echoed back and every list empty.
    #[must_use]
    pub const fn empty(
        from: DateTime<Utc>,
        to: DateTime<Utc>,
        selected_date: Option<NaiveDate>,
        selected_duration: Option<u16>,
    ) -> Self {
        Self {
            hash: String::new(),
            from,
            to,
            selected_date,
            selected_duration,
            dates: Vec::new(),
            durations: Vec::new(),
            time_slots: Vec::new(),
            next_available_time_slot: None,
            instant: InstantAvailability {
                durations: Vec::new(),
            },
        }
    }
}
