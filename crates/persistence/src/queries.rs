// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Read-only queries over the scheduling tables.
//!
//! The availability read path only ever calls these; no query here writes.

use crate::data_models::{
    BlockoutDateRow, DurationOptionRow, ExpertRow, RangeRow, RuleRow, SessionRow, format_date,
    format_instant,
};
use crate::diesel_schema::{
    availability_ranges, availability_rules, blockout_dates, duration_options, experts, sessions,
};
use crate::error::PersistenceError;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use mentora_domain::{AvailabilityRule, BlockoutDate, DurationOption, ExpertProfile, Interval};
use std::collections::BTreeMap;

/// Loads an expert's profile.
///
/// # Errors
///
/// Returns `ExpertNotFound` if no such expert exists.
pub fn get_expert(
    conn: &mut SqliteConnection,
    expert_id: i64,
) -> Result<ExpertProfile, PersistenceError> {
    let row: Option<ExpertRow> = experts::table
        .filter(experts::expert_id.eq(expert_id))
        .first::<ExpertRow>(conn)
        .optional()?;
    row.map_or(
        Err(PersistenceError::ExpertNotFound(expert_id)),
        ExpertRow::into_profile,
    )
}

/// Loads an expert's weekly availability rules, ordered by weekday, each
/// with its ranges in configured order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn availability_rules_for(
    conn: &mut SqliteConnection,
    expert_id: i64,
) -> Result<Vec<AvailabilityRule>, PersistenceError> {
    let rule_rows: Vec<RuleRow> = availability_rules::table
        .filter(availability_rules::expert_id.eq(expert_id))
        .order(availability_rules::weekday.asc())
        .load::<RuleRow>(conn)?;
    let rule_ids: Vec<i64> = rule_rows.iter().map(|rule| rule.rule_id).collect();

    let range_rows: Vec<RangeRow> = availability_ranges::table
        .filter(availability_ranges::rule_id.eq_any(&rule_ids))
        .order((
            availability_ranges::rule_id.asc(),
            availability_ranges::position.asc(),
        ))
        .load::<RangeRow>(conn)?;

    let mut ranges_by_rule: BTreeMap<i64, Vec<RangeRow>> = BTreeMap::new();
    for range in range_rows {
        ranges_by_rule.entry(range.rule_id).or_default().push(range);
    }

    let mut rules: Vec<AvailabilityRule> = Vec::with_capacity(rule_rows.len());
    for rule_row in rule_rows {
        let ranges: Vec<RangeRow> = ranges_by_rule.remove(&rule_row.rule_id).unwrap_or_default();
        rules.push(rule_row.into_rule(&ranges)?);
    }
    Ok(rules)
}

/// Loads an expert's duration options in configured order.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn duration_options_for(
    conn: &mut SqliteConnection,
    expert_id: i64,
) -> Result<Vec<DurationOption>, PersistenceError> {
    let rows: Vec<DurationOptionRow> = duration_options::table
        .filter(duration_options::expert_id.eq(expert_id))
        .order(duration_options::duration_option_id.asc())
        .load::<DurationOptionRow>(conn)?;
    rows.into_iter()
        .map(DurationOptionRow::into_option)
        .collect()
}

/// Loads an expert's blockout dates on or after the given day.
///
/// Past blockout dates can never exclude a future slot, so the
/// availability path never fetches them.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn blockout_dates_on_or_after(
    conn: &mut SqliteConnection,
    expert_id: i64,
    from: time::Date,
) -> Result<Vec<BlockoutDate>, PersistenceError> {
    let rows: Vec<BlockoutDateRow> = blockout_dates::table
        .filter(blockout_dates::expert_id.eq(expert_id))
        .filter(blockout_dates::blocked_on.ge(format_date(from)?))
        .order(blockout_dates::blocked_on.asc())
        .load::<BlockoutDateRow>(conn)?;
    rows.into_iter().map(BlockoutDateRow::into_blockout).collect()
}

/// Loads the intervals of an expert's not-yet-ended sessions.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn future_sessions_for(
    conn: &mut SqliteConnection,
    expert_id: i64,
    now: DateTime<Utc>,
) -> Result<Vec<Interval>, PersistenceError> {
    let rows: Vec<SessionRow> = sessions::table
        .filter(sessions::expert_id.eq(expert_id))
        .filter(sessions::end_at.gt(format_instant(now)))
        .order(sessions::start_at.asc())
        .load::<SessionRow>(conn)?;
    rows.into_iter().map(SessionRow::into_interval).collect()
}

/// Loads the intervals of an expert's sessions overlapping the given one.
///
/// # Errors
///
/// Returns an error if the query fails or a stored row is malformed.
pub fn overlapping_sessions(
    conn: &mut SqliteConnection,
    expert_id: i64,
    interval: &Interval,
) -> Result<Vec<Interval>, PersistenceError> {
    let rows: Vec<SessionRow> = sessions::table
        .filter(sessions::expert_id.eq(expert_id))
        .filter(sessions::start_at.lt(format_instant(interval.end())))
        .filter(sessions::end_at.gt(format_instant(interval.start())))
        .order(sessions::start_at.asc())
        .load::<SessionRow>(conn)?;
    rows.into_iter().map(SessionRow::into_interval).collect()
}
