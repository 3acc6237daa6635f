// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Row structs and their conversions to domain values.
//!
//! Stored representations: weekdays as ISO numbers, wall-clock times as
//! minutes from midnight, calendar dates as ISO `YYYY-MM-DD` text, and
//! instants as RFC 3339 text normalized to whole seconds in UTC (so plain
//! text comparison orders them correctly).

use crate::diesel_schema::{
    availability_ranges, availability_rules, blockout_dates, duration_options, experts, sessions,
};
use crate::error::PersistenceError;
use chrono::{DateTime, SecondsFormat, Utc};
use diesel::prelude::*;
use mentora_domain::{
    AvailabilityRule, BlockoutDate, DurationOption, ExpertProfile, Interval, Price, TimeRange,
    Weekday,
};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Stored calendar date format.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Queryable)]
pub struct ExpertRow {
    pub expert_id: i64,
    pub display_name: String,
    pub timezone: String,
    pub notice_period_minutes: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = experts)]
pub struct NewExpertRow<'a> {
    pub display_name: &'a str,
    pub timezone: &'a str,
    pub notice_period_minutes: i32,
}

#[derive(Debug, Queryable)]
pub struct RuleRow {
    pub rule_id: i64,
    pub expert_id: i64,
    pub weekday: i32,
    pub enabled: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = availability_rules)]
pub struct NewRuleRow {
    pub expert_id: i64,
    pub weekday: i32,
    pub enabled: i32,
}

#[derive(Debug, Queryable)]
pub struct RangeRow {
    pub range_id: i64,
    pub rule_id: i64,
    pub position: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = availability_ranges)]
pub struct NewRangeRow {
    pub rule_id: i64,
    pub position: i32,
    pub start_minutes: i32,
    pub end_minutes: i32,
}

#[derive(Debug, Queryable)]
pub struct DurationOptionRow {
    pub duration_option_id: i64,
    pub expert_id: i64,
    pub minutes: i32,
    pub amount_cents: i64,
    pub currency_code: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = duration_options)]
pub struct NewDurationOptionRow<'a> {
    pub expert_id: i64,
    pub minutes: i32,
    pub amount_cents: i64,
    pub currency_code: &'a str,
}

#[derive(Debug, Queryable)]
pub struct BlockoutDateRow {
    pub blockout_date_id: i64,
    pub expert_id: i64,
    pub blocked_on: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = blockout_dates)]
pub struct NewBlockoutDateRow {
    pub expert_id: i64,
    pub blocked_on: String,
}

#[derive(Debug, Queryable)]
pub struct SessionRow {
    pub session_id: i64,
    pub expert_id: i64,
    pub start_at: String,
    pub end_at: String,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = sessions)]
pub struct NewSessionRow {
    pub expert_id: i64,
    pub start_at: String,
    pub end_at: String,
}

impl ExpertRow {
    /// Converts the row into a domain profile.
    ///
    /// The stored timezone is not re-validated here; it was validated when
    /// the profile was written.
    pub fn into_profile(self) -> Result<ExpertProfile, PersistenceError> {
        let notice_period_minutes: u32 =
            u32::try_from(self.notice_period_minutes).map_err(|_| {
                PersistenceError::InvalidStoredRow(format!(
                    "negative notice period {} for expert {}",
                    self.notice_period_minutes, self.expert_id
                ))
            })?;
        Ok(ExpertProfile {
            expert_id: Some(self.expert_id),
            display_name: self.display_name,
            timezone: self.timezone,
            notice_period_minutes,
        })
    }
}

impl RuleRow {
    /// Converts the row and its ranges into a domain rule.
    pub fn into_rule(self, ranges: &[RangeRow]) -> Result<AvailabilityRule, PersistenceError> {
        let weekday_number: u8 = u8::try_from(self.weekday).map_err(|_| {
            PersistenceError::InvalidStoredRow(format!(
                "weekday {} out of range for rule {}",
                self.weekday, self.rule_id
            ))
        })?;
        let weekday: Weekday = Weekday::from_number(weekday_number).map_err(|err| {
            PersistenceError::InvalidStoredRow(format!(
                "rule {}: {err}",
                self.rule_id
            ))
        })?;
        let mut time_ranges: Vec<TimeRange> = Vec::with_capacity(ranges.len());
        for range in ranges {
            time_ranges.push(TimeRange::new(
                minutes_to_time(range.start_minutes)?,
                minutes_to_time(range.end_minutes)?,
            ));
        }
        Ok(AvailabilityRule::new(weekday, self.enabled != 0, time_ranges))
    }
}

impl DurationOptionRow {
    /// Converts the row into a domain duration option.
    pub fn into_option(self) -> Result<DurationOption, PersistenceError> {
        let minutes: u16 = u16::try_from(self.minutes).map_err(|_| {
            PersistenceError::InvalidStoredRow(format!(
                "duration {} out of range for option {}",
                self.minutes, self.duration_option_id
            ))
        })?;
        Ok(DurationOption::new(
            minutes,
            Price::new(self.currency_code, self.amount_cents),
        ))
    }
}

impl BlockoutDateRow {
    /// Converts the row into a domain blockout date.
    pub fn into_blockout(self) -> Result<BlockoutDate, PersistenceError> {
        let date: time::Date =
            time::Date::parse(&self.blocked_on, DATE_FORMAT).map_err(|err| {
                PersistenceError::InvalidStoredRow(format!(
                    "blockout date '{}': {err}",
                    self.blocked_on
                ))
            })?;
        Ok(BlockoutDate::new(date))
    }
}

impl SessionRow {
    /// Converts the row into the session's interval.
    pub fn into_interval(self) -> Result<Interval, PersistenceError> {
        let start: DateTime<Utc> = parse_instant(&self.start_at)?;
        let end: DateTime<Utc> = parse_instant(&self.end_at)?;
        Interval::new(start, end).map_err(|err| {
            PersistenceError::InvalidStoredRow(format!("session {}: {err}", self.session_id))
        })
    }
}

/// Formats a calendar date for storage.
pub fn format_date(date: time::Date) -> Result<String, PersistenceError> {
    date.format(DATE_FORMAT)
        .map_err(|err| PersistenceError::InvalidStoredRow(format!("formatting date: {err}")))
}

/// Formats an instant for storage (whole-second RFC 3339, `Z` suffix).
#[must_use]
pub fn format_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// Parses a stored instant.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, PersistenceError> {
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|err| PersistenceError::InvalidStoredRow(format!("instant '{value}': {err}")))
}

/// Converts stored minutes-from-midnight into a wall-clock time.
fn minutes_to_time(minutes: i32) -> Result<time::Time, PersistenceError> {
    let in_day: u32 = u32::try_from(minutes)
        .ok()
        .filter(|m| *m < 1440)
        .ok_or_else(|| {
            PersistenceError::InvalidStoredRow(format!("minutes {minutes} out of range"))
        })?;
    let hour: u8 = u8::try_from(in_day / 60).map_err(|_| {
        PersistenceError::InvalidStoredRow(format!("minutes {minutes} out of range"))
    })?;
    let minute: u8 = u8::try_from(in_day % 60).map_err(|_| {
        PersistenceError::InvalidStoredRow(format!("minutes {minutes} out of range"))
    })?;
    time::Time::from_hms(hour, minute, 0).map_err(|err| {
        PersistenceError::InvalidStoredRow(format!("minutes {minutes}: {err}"))
    })
}

/// Converts a wall-clock time into stored minutes-from-midnight.
#[must_use]
pub fn time_to_minutes(value: time::Time) -> i32 {
    i32::from(value.hour()) * 60 + i32::from(value.minute())
}
