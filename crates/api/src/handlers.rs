// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for configuration and availability operations.
//!
//! Handlers own orchestration: they load from persistence, enforce the
//! cheap-exit contract (an unconfigured expert costs no blockout/session
//! queries), call the pure engine, and translate every error into the API
//! taxonomy. The clock is always passed in, never read here, so handler
//! behavior is deterministic under test.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use std::str::FromStr;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use tracing::debug;

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::query::{AvailabilityParams, ParsedAvailabilityQuery};
use crate::request_response::{
    AddBlockoutDateRequest, AddBlockoutDateResponse, BookSessionRequest, BookSessionResponse,
    CreateExpertRequest, ExpertResponse, InstantAvailabilityResponse,
    ReplaceAvailabilityRulesRequest, ReplaceAvailabilityRulesResponse,
    ReplaceDurationOptionsRequest, ReplaceDurationOptionsResponse,
};
use mentora::{
    AvailabilityResult, ExpertSchedule, InstantQuery, compute_availability,
    compute_instant_availability,
};
use mentora_domain::{
    AvailabilityRule, DurationOption, ExpertProfile, Interval, Price, TimeRange, Weekday,
    validate_availability_rules, validate_duration_options,
};
use mentora_persistence::SqlitePersistence;

/// Wire format for wall-clock times in rule ranges.
const TIME_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[hour]:[minute]");

/// Wire format for calendar dates.
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Creates a new expert profile.
///
/// # Errors
///
/// Returns an error if the profile is invalid or the insert fails.
pub fn create_expert(
    persistence: &mut SqlitePersistence,
    request: &CreateExpertRequest,
) -> Result<ExpertResponse, ApiError> {
    let profile: ExpertProfile = ExpertProfile::new(
        request.display_name.clone(),
        request.timezone.clone(),
        request.notice_period_minutes,
    )
    .map_err(translate_domain_error)?;
    let persisted: ExpertProfile = persistence.create_expert(&profile)?;
    profile_to_response(persisted)
}

/// Fetches an expert profile.
///
/// # Errors
///
/// Returns an error if the expert does not exist.
pub fn get_expert(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
) -> Result<ExpertResponse, ApiError> {
    let profile: ExpertProfile = persistence.get_expert(expert_id)?;
    profile_to_response(profile)
}

/// Replaces an expert's weekly availability rules.
///
/// # Errors
///
/// Returns an error if the expert does not exist, the rule set is invalid,
/// or the transaction fails.
pub fn replace_availability_rules(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    request: &ReplaceAvailabilityRulesRequest,
) -> Result<ReplaceAvailabilityRulesResponse, ApiError> {
    persistence.get_expert(expert_id)?;

    let mut rules: Vec<AvailabilityRule> = Vec::with_capacity(request.rules.len());
    for input in &request.rules {
        let weekday: Weekday =
            Weekday::from_str(&input.weekday).map_err(translate_domain_error)?;
        let mut ranges: Vec<TimeRange> = Vec::with_capacity(input.ranges.len());
        for range in &input.ranges {
            ranges.push(TimeRange::new(
                parse_local_time(&range.start)?,
                parse_local_time(&range.end)?,
            ));
        }
        rules.push(AvailabilityRule::new(weekday, input.enabled, ranges));
    }
    validate_availability_rules(&rules).map_err(translate_domain_error)?;

    persistence.replace_availability_rules(expert_id, &rules)?;
    Ok(ReplaceAvailabilityRulesResponse {
        expert_id,
        rule_count: rules.len(),
        message: format!("Stored {} availability rules", rules.len()),
    })
}

/// Replaces an expert's duration options.
///
/// # Errors
///
/// Returns an error if the expert does not exist, the option set is
/// invalid, or the transaction fails.
pub fn replace_duration_options(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    request: &ReplaceDurationOptionsRequest,
) -> Result<ReplaceDurationOptionsResponse, ApiError> {
    persistence.get_expert(expert_id)?;

    let options: Vec<DurationOption> = request
        .options
        .iter()
        .map(|input| {
            DurationOption::new(
                input.minutes,
                Price::new(input.currency_code.clone(), input.amount_cents),
            )
        })
        .collect();
    validate_duration_options(&options).map_err(translate_domain_error)?;

    persistence.replace_duration_options(expert_id, &options)?;
    Ok(ReplaceDurationOptionsResponse {
        expert_id,
        option_count: options.len(),
        message: format!("Stored {} duration options", options.len()),
    })
}

/// Adds a blockout date for an expert.
///
/// # Errors
///
/// Returns an error if the expert does not exist, the date is malformed,
/// or the day is already blocked.
pub fn add_blockout_date(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    request: &AddBlockoutDateRequest,
) -> Result<AddBlockoutDateResponse, ApiError> {
    persistence.get_expert(expert_id)?;

    let date: time::Date = parse_iso_date(&request.date)?;
    let existing = persistence.blockout_dates_on_or_after(expert_id, date)?;
    if existing.iter().any(|blockout| blockout.date == date) {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("unique_blockout_date"),
            message: format!("{} is already blocked", request.date),
        });
    }

    let blockout_date_id: i64 = persistence.add_blockout_date(expert_id, date)?;
    Ok(AddBlockoutDateResponse {
        expert_id,
        blockout_date_id,
        date: request.date.clone(),
        message: format!("Blocked {}", request.date),
    })
}

/// Books a session with an expert.
///
/// The session interval must not overlap any existing commitment; an
/// expert cannot hold two overlapping commitments.
///
/// # Errors
///
/// Returns an error if the expert does not exist, the request is
/// malformed, or the interval overlaps an existing session.
pub fn book_session(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    request: &BookSessionRequest,
) -> Result<BookSessionResponse, ApiError> {
    persistence.get_expert(expert_id)?;

    let start: DateTime<Utc> = DateTime::parse_from_rfc3339(&request.start)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| ApiError::InvalidInput {
            field: String::from("start"),
            message: format!("'{}' is not a valid RFC 3339 timestamp", request.start),
        })?;
    if request.duration_minutes == 0 || request.duration_minutes > 1440 {
        return Err(translate_domain_error(
            mentora_domain::DomainError::InvalidDurationMinutes {
                minutes: request.duration_minutes,
            },
        ));
    }
    let end: DateTime<Utc> = start
        .checked_add_signed(chrono::Duration::minutes(i64::from(request.duration_minutes)))
        .ok_or_else(|| ApiError::InvalidInput {
            field: String::from("start"),
            message: String::from("Session end overflows the representable time range"),
        })?;
    let interval: Interval = Interval::new(start, end).map_err(translate_domain_error)?;

    let conflicts: Vec<Interval> = persistence.overlapping_sessions(expert_id, &interval)?;
    if !conflicts.is_empty() {
        return Err(ApiError::DomainRuleViolation {
            rule: String::from("no_overlapping_commitments"),
            message: format!(
                "The requested interval overlaps {} existing session(s)",
                conflicts.len()
            ),
        });
    }

    let session_id: i64 = persistence.record_session(expert_id, &interval)?;
    Ok(BookSessionResponse {
        expert_id,
        session_id,
        start: interval.start().to_rfc3339_opts(SecondsFormat::Secs, true),
        end: interval.end().to_rfc3339_opts(SecondsFormat::Secs, true),
        message: String::from("Session booked"),
    })
}

/// Computes an expert's availability over a window.
///
/// Rules and duration options are loaded first; blockout dates (today
/// onward, expert timezone) and not-yet-ended sessions are only fetched
/// when the expert is bookable at all.
///
/// # Errors
///
/// Returns an error if the expert does not exist, a parameter is
/// malformed, or the computation fails.
pub fn get_availability(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    params: &AvailabilityParams,
    now: DateTime<Utc>,
) -> Result<AvailabilityResult, ApiError> {
    let parsed: ParsedAvailabilityQuery = params.parse()?;
    let profile: ExpertProfile = persistence.get_expert(expert_id)?;

    let mut schedule: ExpertSchedule = ExpertSchedule::new(profile);
    schedule.rules = persistence.availability_rules_for(expert_id)?;
    schedule.duration_options = persistence.duration_options_for(expert_id)?;
    if schedule.is_bookable_configured() {
        let today: time::Date = expert_local_today(&schedule.profile, now)?;
        schedule.blockout_dates = persistence.blockout_dates_on_or_after(expert_id, today)?;
        schedule.booked_sessions = persistence.future_sessions_for(expert_id, now)?;
    } else {
        debug!("Expert {} is not bookable; skipping conflict queries", expert_id);
    }

    compute_availability(&schedule, parsed.user_timezone, now, &parsed.query)
        .map_err(translate_core_error)
}

/// Computes an expert's instant (right-now) availability.
///
/// # Errors
///
/// Returns an error if the expert does not exist or the computation fails.
pub fn get_instant_availability(
    persistence: &mut SqlitePersistence,
    expert_id: i64,
    ignore_active_session: bool,
    now: DateTime<Utc>,
) -> Result<InstantAvailabilityResponse, ApiError> {
    let profile: ExpertProfile = persistence.get_expert(expert_id)?;

    let mut schedule: ExpertSchedule = ExpertSchedule::new(profile);
    schedule.duration_options = persistence.duration_options_for(expert_id)?;
    if !schedule.duration_options.is_empty() {
        let today: time::Date = expert_local_today(&schedule.profile, now)?;
        schedule.blockout_dates = persistence.blockout_dates_on_or_after(expert_id, today)?;
        schedule.booked_sessions = persistence.future_sessions_for(expert_id, now)?;
    }

    let durations = compute_instant_availability(
        &schedule,
        now,
        InstantQuery {
            ignore_active_session,
        },
    )
    .map_err(translate_core_error)?;
    Ok(InstantAvailabilityResponse {
        expert_id,
        durations,
    })
}

/// Converts a persisted profile into the API response shape.
fn profile_to_response(profile: ExpertProfile) -> Result<ExpertResponse, ApiError> {
    let expert_id: i64 = profile.expert_id.ok_or_else(|| ApiError::Internal {
        message: String::from("Expert loaded from database is missing its id"),
    })?;
    Ok(ExpertResponse {
        expert_id,
        display_name: profile.display_name,
        timezone: profile.timezone,
        notice_period_minutes: profile.notice_period_minutes,
    })
}

/// Parses a wall-clock `HH:MM` string.
fn parse_local_time(value: &str) -> Result<time::Time, ApiError> {
    time::Time::parse(value, TIME_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: String::from("ranges"),
        message: format!("'{value}' is not a valid HH:MM time"),
    })
}

/// Parses an ISO `YYYY-MM-DD` date string.
fn parse_iso_date(value: &str) -> Result<time::Date, ApiError> {
    time::Date::parse(value, DATE_FORMAT).map_err(|_| ApiError::InvalidInput {
        field: String::from("date"),
        message: format!("'{value}' is not a valid ISO date"),
    })
}

/// The current calendar day in the expert's timezone.
fn expert_local_today(
    profile: &ExpertProfile,
    now: DateTime<Utc>,
) -> Result<time::Date, ApiError> {
    let tz = profile.tz().map_err(translate_domain_error)?;
    naive_to_time_date(now.with_timezone(&tz).date_naive())
}

/// Converts a `chrono` naive date into a `time` calendar date.
fn naive_to_time_date(naive: NaiveDate) -> Result<time::Date, ApiError> {
    use chrono::Datelike;
    let month: u8 = u8::try_from(naive.month()).map_err(|_| ApiError::Internal {
        message: format!("Month out of range for {naive}"),
    })?;
    let month: time::Month = time::Month::try_from(month).map_err(|_| ApiError::Internal {
        message: format!("Month out of range for {naive}"),
    })?;
    let day: u8 = u8::try_from(naive.day()).map_err(|_| ApiError::Internal {
        message: format!("Day out of range for {naive}"),
    })?;
    time::Date::from_calendar_date(naive.year(), month, day).map_err(|_| ApiError::Internal {
        message: format!("Date out of range for {naive}"),
    })
}
