// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Days of the week, Monday through Sunday.
///
/// Weekly availability rules are keyed by weekday in the expert's local
/// timezone. Numbering follows ISO 8601 (Monday = 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    /// Monday (1).
    Monday,
    /// Tuesday (2).
    Tuesday,
    /// Wednesday (3).
    Wednesday,
    /// Thursday (4).
    Thursday,
    /// Friday (5).
    Friday,
    /// Saturday (6).
    Saturday,
    /// Sunday (7).
    Sunday,
}

impl Weekday {
    /// Converts this weekday to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Returns the ISO 8601 weekday number (Monday = 1, Sunday = 7).
    #[must_use]
    pub const fn number(&self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    /// Creates a weekday from its ISO 8601 number (Monday = 1, Sunday = 7).
    ///
    /// # Errors
    ///
    /// Returns an error if the number is outside 1-7.
    pub fn from_number(number: u8) -> Result<Self, DomainError> {
        match number {
            1 => Ok(Self::Monday),
            2 => Ok(Self::Tuesday),
            3 => Ok(Self::Wednesday),
            4 => Ok(Self::Thursday),
            5 => Ok(Self::Friday),
            6 => Ok(Self::Saturday),
            7 => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidWeekday(number.to_string())),
        }
    }

    /// Converts a `chrono` weekday into the domain weekday.
    #[must_use]
    pub const fn from_chrono(weekday: chrono::Weekday) -> Self {
        match weekday {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

impl FromStr for Weekday {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "monday" => Ok(Self::Monday),
            "tuesday" => Ok(Self::Tuesday),
            "wednesday" => Ok(Self::Wednesday),
            "thursday" => Ok(Self::Thursday),
            "friday" => Ok(Self::Friday),
            "saturday" => Ok(Self::Saturday),
            "sunday" => Ok(Self::Sunday),
            _ => Err(DomainError::InvalidWeekday(s.to_string())),
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A wall-clock time-of-day range within a single availability rule.
///
/// Times are local to the expert's timezone. A range whose end is not after
/// its start is interpreted as wrapping past midnight during projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRange {
    /// The local start time of the range.
    pub start: time::Time,
    /// The local end time of the range.
    pub end: time::Time,
}

impl TimeRange {
    /// Creates a new `TimeRange`.
    #[must_use]
    pub const fn new(start: time::Time, end: time::Time) -> Self {
        Self { start, end }
    }

    /// Minutes from local midnight to the range start.
    #[must_use]
    pub fn start_minutes(&self) -> i64 {
        i64::from(self.start.hour()) * 60 + i64::from(self.start.minute())
    }

    /// Minutes from local midnight to the range end.
    #[must_use]
    pub fn end_minutes(&self) -> i64 {
        i64::from(self.end.hour()) * 60 + i64::from(self.end.minute())
    }
}

/// A per-weekday availability configuration for an expert.
///
/// Rules are recurring: a rule for Monday applies to every Monday in a
/// queried window. Overlapping ranges within a rule are assumed to be
/// rejected upstream and are not deduplicated during projection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRule {
    /// The weekday this rule applies to.
    pub weekday: Weekday,
    /// Whether the rule is currently in effect.
    pub enabled: bool,
    /// Ordered bookable ranges within the day.
    pub ranges: Vec<TimeRange>,
}

impl AvailabilityRule {
    /// Creates a new `AvailabilityRule`.
    #[must_use]
    pub const fn new(weekday: Weekday, enabled: bool, ranges: Vec<TimeRange>) -> Self {
        Self {
            weekday,
            enabled,
            ranges,
        }
    }

    /// Whether this rule can produce any bookable time.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled && !self.ranges.is_empty()
    }
}

/// A session price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// ISO 4217 currency code (e.g. "USD").
    pub currency_code: String,
    /// The amount in the currency's minor unit.
    pub amount_cents: i64,
}

impl Price {
    /// Creates a new `Price`.
    #[must_use]
    pub const fn new(currency_code: String, amount_cents: i64) -> Self {
        Self {
            currency_code,
            amount_cents,
        }
    }
}

/// A bookable session length an expert offers, with its price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationOption {
    /// The session length in minutes.
    pub minutes: u16,
    /// The price for a session of this length.
    pub price: Price,
}

impl DurationOption {
    /// Creates a new `DurationOption`.
    #[must_use]
    pub const fn new(minutes: u16, price: Price) -> Self {
        Self { minutes, price }
    }
}

/// A calendar day on which an expert is fully unavailable.
///
/// The date is interpreted in the expert's timezone regardless of which
/// timezone the requesting user queries from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockoutDate {
    /// The blocked calendar day.
    pub date: time::Date,
}

impl BlockoutDate {
    /// Creates a new `BlockoutDate`.
    #[must_use]
    pub const fn new(date: time::Date) -> Self {
        Self { date }
    }

    /// Converts the blockout day into a `chrono` naive date for comparison
    /// against projected slot dates.
    #[must_use]
    pub fn to_naive(&self) -> Option<chrono::NaiveDate> {
        chrono::NaiveDate::from_ymd_opt(
            self.date.year(),
            u32::from(u8::from(self.date.month())),
            u32::from(self.date.day()),
        )
    }
}

/// An expert's scheduling profile.
///
/// The timezone is stored as an IANA zone name and validated at
/// construction; it is parsed again wherever projection needs it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertProfile {
    /// The canonical numeric identifier assigned by the database.
    /// `None` indicates the profile has not been persisted yet.
    pub expert_id: Option<i64>,
    /// The expert's display name.
    pub display_name: String,
    /// IANA timezone name (e.g. "America/New_York").
    pub timezone: String,
    /// Minimum lead time in minutes between "now" and a bookable slot start.
    pub notice_period_minutes: u32,
}

impl ExpertProfile {
    /// Creates a new, unpersisted `ExpertProfile`.
    ///
    /// # Arguments
    ///
    /// * `display_name` - The expert's display name
    /// * `timezone` - IANA zone name; defaults to "UTC" when empty
    /// * `notice_period_minutes` - Minimum booking lead time
    ///
    /// # Errors
    ///
    /// Returns an error if the timezone is not a known IANA zone or the
    /// notice period is out of bounds.
    pub fn new(
        display_name: String,
        timezone: String,
        notice_period_minutes: u32,
    ) -> Result<Self, DomainError> {
        let timezone: String = if timezone.is_empty() {
            String::from("UTC")
        } else {
            timezone
        };
        if timezone.parse::<Tz>().is_err() {
            return Err(DomainError::InvalidTimezone(timezone));
        }
        crate::validation::validate_notice_period(notice_period_minutes)?;
        Ok(Self {
            expert_id: None,
            display_name,
            timezone,
            notice_period_minutes,
        })
    }

    /// Attaches the canonical identifier assigned by the database.
    #[must_use]
    pub fn with_id(mut self, expert_id: i64) -> Self {
        self.expert_id = Some(expert_id);
        self
    }

    /// Parses the stored timezone name.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored name is no longer a known IANA zone.
    pub fn tz(&self) -> Result<Tz, DomainError> {
        self.timezone
            .parse()
            .map_err(|_| DomainError::InvalidTimezone(self.timezone.clone()))
    }
}
