// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::Weekday;
use chrono::{DateTime, Utc};

/// Errors that can occur during domain validation and availability computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An interval's end does not lie strictly after its start.
    InvalidInterval {
        /// The interval start instant.
        start: DateTime<Utc>,
        /// The interval end instant.
        end: DateTime<Utc>,
    },
    /// The timezone identifier is not a valid IANA zone name.
    InvalidTimezone(String),
    /// The weekday identifier is not recognized.
    InvalidWeekday(String),
    /// Two availability rules target the same weekday.
    DuplicateRuleWeekday {
        /// The weekday configured twice.
        weekday: Weekday,
    },
    /// An availability range is degenerate (start equals end).
    InvalidTimeRange {
        /// The range start time.
        start: time::Time,
        /// The range end time.
        end: time::Time,
    },
    /// A duration option is outside the bookable bounds.
    InvalidDurationMinutes {
        /// The invalid duration value.
        minutes: u16,
    },
    /// Two duration options share the same length.
    DuplicateDurationOption {
        /// The duration configured twice.
        minutes: u16,
    },
    /// A price amount is negative.
    NegativePrice {
        /// The invalid amount in cents.
        amount_cents: i64,
    },
    /// A price currency code is empty or invalid.
    InvalidCurrencyCode(String),
    /// The notice period exceeds the supported maximum.
    InvalidNoticePeriod {
        /// The invalid notice period in minutes.
        minutes: u32,
    },
    /// Date arithmetic overflow.
    DateArithmeticOverflow {
        /// Description of the operation that failed.
        operation: String,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInterval { start, end } => {
                write!(f, "Invalid interval: end {end} must be after start {start}")
            }
            Self::InvalidTimezone(name) => {
                write!(f, "Invalid timezone: '{name}' is not a known IANA zone")
            }
            Self::InvalidWeekday(value) => write!(f, "Invalid weekday: '{value}'"),
            Self::DuplicateRuleWeekday { weekday } => {
                write!(f, "Duplicate availability rule for {weekday}")
            }
            Self::InvalidTimeRange { start, end } => {
                write!(f, "Invalid availability range: {start} to {end}")
            }
            Self::InvalidDurationMinutes { minutes } => {
                write!(
                    f,
                    "Invalid duration: {minutes} minutes. Must be between 1 and 1440"
                )
            }
            Self::DuplicateDurationOption { minutes } => {
                write!(f, "Duplicate duration option: {minutes} minutes")
            }
            Self::NegativePrice { amount_cents } => {
                write!(f, "Invalid price: {amount_cents} cents. Must not be negative")
            }
            Self::InvalidCurrencyCode(code) => write!(f, "Invalid currency code: '{code}'"),
            Self::InvalidNoticePeriod { minutes } => {
                write!(
                    f,
                    "Invalid notice period: {minutes} minutes. Must not exceed one year"
                )
            }
            Self::DateArithmeticOverflow { operation } => {
                write!(f, "Date arithmetic overflow while {operation}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
