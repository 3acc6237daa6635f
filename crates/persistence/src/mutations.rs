// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Mutations of the scheduling tables.
//!
//! Rule and duration configuration is replace-style: the new set atomically
//! supersedes whatever was stored. Availability computation itself never
//! calls anything in this module.

use crate::backend;
use crate::data_models::{
    NewBlockoutDateRow, NewDurationOptionRow, NewExpertRow, NewRangeRow, NewRuleRow,
    NewSessionRow, format_date, format_instant, time_to_minutes,
};
use crate::diesel_schema::{
    availability_ranges, availability_rules, blockout_dates, duration_options, experts, sessions,
};
use crate::error::PersistenceError;
use diesel::prelude::*;
use mentora_domain::{AvailabilityRule, DurationOption, ExpertProfile, Interval};

/// Inserts a new expert and returns its assigned id.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn create_expert(
    conn: &mut SqliteConnection,
    profile: &ExpertProfile,
) -> Result<i64, PersistenceError> {
    let notice_period_minutes: i32 =
        i32::try_from(profile.notice_period_minutes).map_err(|_| {
            PersistenceError::QueryFailed(format!(
                "notice period {} out of range",
                profile.notice_period_minutes
            ))
        })?;
    diesel::insert_into(experts::table)
        .values(NewExpertRow {
            display_name: &profile.display_name,
            timezone: &profile.timezone,
            notice_period_minutes,
        })
        .execute(conn)?;
    backend::get_last_insert_rowid(conn)
}

/// Replaces an expert's weekly availability rules with the given set.
///
/// # Errors
///
/// Returns an error if any statement in the transaction fails.
pub fn replace_availability_rules(
    conn: &mut SqliteConnection,
    expert_id: i64,
    rules: &[AvailabilityRule],
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        // Ranges cascade with their rules.
        diesel::delete(
            availability_rules::table.filter(availability_rules::expert_id.eq(expert_id)),
        )
        .execute(conn)?;
        for rule in rules {
            diesel::insert_into(availability_rules::table)
                .values(NewRuleRow {
                    expert_id,
                    weekday: i32::from(rule.weekday.number()),
                    enabled: i32::from(rule.enabled),
                })
                .execute(conn)?;
            let rule_id: i64 = backend::get_last_insert_rowid(conn)?;
            for (position, range) in rule.ranges.iter().enumerate() {
                let position: i32 = i32::try_from(position).map_err(|_| {
                    PersistenceError::QueryFailed(String::from("too many ranges in rule"))
                })?;
                diesel::insert_into(availability_ranges::table)
                    .values(NewRangeRow {
                        rule_id,
                        position,
                        start_minutes: time_to_minutes(range.start),
                        end_minutes: time_to_minutes(range.end),
                    })
                    .execute(conn)?;
            }
        }
        Ok(())
    })
}

/// Replaces an expert's duration options with the given set.
///
/// # Errors
///
/// Returns an error if any statement in the transaction fails.
pub fn replace_duration_options(
    conn: &mut SqliteConnection,
    expert_id: i64,
    options: &[DurationOption],
) -> Result<(), PersistenceError> {
    conn.transaction::<_, PersistenceError, _>(|conn| {
        diesel::delete(
            duration_options::table.filter(duration_options::expert_id.eq(expert_id)),
        )
        .execute(conn)?;
        for option in options {
            diesel::insert_into(duration_options::table)
                .values(NewDurationOptionRow {
                    expert_id,
                    minutes: i32::from(option.minutes),
                    amount_cents: option.price.amount_cents,
                    currency_code: &option.price.currency_code,
                })
                .execute(conn)?;
        }
        Ok(())
    })
}

/// Adds a blockout date for an expert and returns the new row id.
///
/// # Errors
///
/// Returns an error if the insert fails (including a duplicate date).
pub fn add_blockout_date(
    conn: &mut SqliteConnection,
    expert_id: i64,
    date: time::Date,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(blockout_dates::table)
        .values(NewBlockoutDateRow {
            expert_id,
            blocked_on: format_date(date)?,
        })
        .execute(conn)?;
    backend::get_last_insert_rowid(conn)
}

/// Records a booked session interval and returns the new row id.
///
/// Overlap rejection happens at the API boundary, which checks
/// `overlapping_sessions` first; this function only stores.
///
/// # Errors
///
/// Returns an error if the insert fails.
pub fn record_session(
    conn: &mut SqliteConnection,
    expert_id: i64,
    interval: &Interval,
) -> Result<i64, PersistenceError> {
    diesel::insert_into(sessions::table)
        .values(NewSessionRow {
            expert_id,
            start_at: format_instant(interval.start()),
            end_at: format_instant(interval.end()),
        })
        .execute(conn)?;
    backend::get_last_insert_rowid(conn)
}
