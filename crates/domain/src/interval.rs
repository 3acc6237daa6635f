// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timezone-aware interval arithmetic.
//!
//! This module provides the closed-open [`Interval`] over absolute UTC
//! instants and the splitting operations the recurrence projector is built
//! on.
//!
//! ## Invariants
//!
//! - An interval's end always lies strictly after its start
//! - All splitting operations partition the original interval in order,
//!   without gaps, except `split_by_duration` which drops a trailing
//!   remainder shorter than the requested length

use crate::error::DomainError;
use chrono::{DateTime, Duration, NaiveTime, TimeZone, Utc};

/// A closed-open interval `[start, end)` between two UTC instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl Interval {
    /// Creates a new interval.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidInterval` if `end` is not strictly
    /// after `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, DomainError> {
        if end <= start {
            return Err(DomainError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates an interval whose validity has already been established.
    ///
    /// Used by the splitting operations, which only ever produce non-empty
    /// sub-intervals of an already-valid interval.
    pub(crate) const fn from_parts(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// The interval's start instant (inclusive).
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// The interval's end instant (exclusive).
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// The interval's length in whole minutes.
    #[must_use]
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Whether the instant falls within the interval.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Whether two closed-open intervals share any instant.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Partitions the interval into consecutive chunks of at most one week,
    /// aligned so the first chunk begins at the interval start.
    ///
    /// Produces at least one chunk for any interval.
    #[must_use]
    pub fn split_by_week(&self) -> Vec<Self> {
        self.split_by_step(Duration::days(7))
    }

    /// Partitions the interval into UTC-calendar-day-aligned chunks.
    ///
    /// The first chunk begins at the interval start and ends at the next
    /// UTC midnight; every following chunk covers one full UTC day, except
    /// a possibly shorter final chunk.
    #[must_use]
    pub fn split_by_day(&self) -> Vec<Self> {
        let mut chunks: Vec<Self> = Vec::new();
        let mut cursor: DateTime<Utc> = self.start;
        while cursor < self.end {
            let next: DateTime<Utc> = next_utc_midnight(cursor).map_or(self.end, |midnight| {
                if midnight < self.end { midnight } else { self.end }
            });
            chunks.push(Self::from_parts(cursor, next));
            cursor = next;
        }
        chunks
    }

    /// Partitions the interval into consecutive sub-intervals of exactly
    /// `minutes` length. A trailing remainder shorter than `minutes` is
    /// dropped rather than emitted as a short chunk.
    #[must_use]
    pub fn split_by_duration(&self, minutes: u16) -> Vec<Self> {
        if minutes == 0 {
            return Vec::new();
        }
        let step: Duration = Duration::minutes(i64::from(minutes));
        let mut chunks: Vec<Self> = Vec::new();
        let mut cursor: DateTime<Utc> = self.start;
        while let Some(next) = cursor.checked_add_signed(step) {
            if next > self.end {
                break;
            }
            chunks.push(Self::from_parts(cursor, next));
            cursor = next;
        }
        chunks
    }

    /// Returns this interval shifted forward by a number of days.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DateArithmeticOverflow` if either bound
    /// overflows the representable time range.
    pub fn shift_days(&self, days: i64) -> Result<Self, DomainError> {
        let shift: Duration = Duration::days(days);
        let start: DateTime<Utc> = self.start.checked_add_signed(shift).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("shifting interval start by {days} days"),
            }
        })?;
        let end: DateTime<Utc> = self.end.checked_add_signed(shift).ok_or_else(|| {
            DomainError::DateArithmeticOverflow {
                operation: format!("shifting interval end by {days} days"),
            }
        })?;
        Ok(Self::from_parts(start, end))
    }

    /// Splits the interval at fixed offsets of `step` from its start.
    fn split_by_step(&self, step: Duration) -> Vec<Self> {
        let mut chunks: Vec<Self> = Vec::new();
        let mut cursor: DateTime<Utc> = self.start;
        while cursor < self.end {
            let next: DateTime<Utc> = cursor
                .checked_add_signed(step)
                .map_or(self.end, |n| if n < self.end { n } else { self.end });
            chunks.push(Self::from_parts(cursor, next));
            cursor = next;
        }
        chunks
    }
}

/// The first instant of the UTC calendar day after the given instant.
fn next_utc_midnight(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    let next_day: chrono::NaiveDate = instant.date_naive().succ_opt()?;
    Some(Utc.from_utc_datetime(&next_day.and_time(NaiveTime::MIN)))
}
