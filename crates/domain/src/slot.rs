// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::interval::Interval;
use crate::types::Price;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A deterministic identifier for a computed time slot.
///
/// Derived purely from the slot's bounds, so identical slots produced by
/// separate computations (or by week projection) collapse to the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlotId(String);

impl SlotId {
    /// Returns the id value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SlotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Derives the deterministic slot id for a pair of instants.
#[must_use]
pub fn slot_id(start: DateTime<Utc>, end: DateTime<Utc>) -> SlotId {
    SlotId(format!("{}-{}", start.timestamp(), end.timestamp()))
}

/// A computed, bookable time slot.
///
/// Slots are ephemeral: they are rebuilt on every availability query and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Deterministic identifier derived from the slot bounds.
    pub id: SlotId,
    /// The session length in minutes.
    pub duration_minutes: u16,
    /// The slot start instant (UTC).
    pub start: DateTime<Utc>,
    /// The slot end instant (UTC).
    pub end: DateTime<Utc>,
    /// The price for booking this slot.
    pub price: Price,
}

impl TimeSlot {
    /// Creates a slot covering the given interval.
    #[must_use]
    pub fn from_interval(interval: &Interval, duration_minutes: u16, price: Price) -> Self {
        Self {
            id: slot_id(interval.start(), interval.end()),
            duration_minutes,
            start: interval.start(),
            end: interval.end(),
            price,
        }
    }

    /// The slot's bounds as an interval.
    #[must_use]
    pub fn interval(&self) -> Interval {
        Interval::from_parts(self.start, self.end)
    }

    /// Returns this slot shifted forward by a number of days, with its id
    /// recomputed for the new bounds.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if either bound
    /// overflows the representable time range.
    pub fn shift_days(&self, days: i64) -> Result<Self, DomainError> {
        let shifted: Interval = self.interval().shift_days(days)?;
        Ok(Self::from_interval(
            &shifted,
            self.duration_minutes,
            self.price.clone(),
        ))
    }
}
