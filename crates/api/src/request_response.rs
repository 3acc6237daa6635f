// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.
//!
//! These DTOs are distinct from domain types and represent the API
//! contract. Wall-clock times travel as `HH:MM` strings and calendar dates
//! as ISO `YYYY-MM-DD` strings; handlers parse them into domain values.

use mentora::DurationPrice;
use serde::{Deserialize, Serialize};

/// API request to create a new expert profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CreateExpertRequest {
    /// The expert's display name.
    pub display_name: String,
    /// IANA timezone name; an empty string defaults to UTC.
    pub timezone: String,
    /// Minimum booking lead time in minutes.
    pub notice_period_minutes: u32,
}

/// API response describing an expert profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpertResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// The expert's display name.
    pub display_name: String,
    /// The expert's IANA timezone name.
    pub timezone: String,
    /// Minimum booking lead time in minutes.
    pub notice_period_minutes: u32,
}

/// One wall-clock range within a weekly rule, as `HH:MM` strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RangeInput {
    /// Local start time (`HH:MM`).
    pub start: String,
    /// Local end time (`HH:MM`). An end at or before the start wraps past
    /// midnight.
    pub end: String,
}

/// One weekly rule in a rule replacement request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RuleInput {
    /// The weekday name (lowercase, e.g. "monday").
    pub weekday: String,
    /// Whether the rule is in effect.
    pub enabled: bool,
    /// Bookable ranges within the day.
    pub ranges: Vec<RangeInput>,
}

/// API request to replace an expert's weekly availability rules.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplaceAvailabilityRulesRequest {
    /// The complete replacement rule set.
    pub rules: Vec<RuleInput>,
}

/// API response for a successful rule replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceAvailabilityRulesResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// How many rules are now stored.
    pub rule_count: usize,
    /// A success message.
    pub message: String,
}

/// One duration option in a replacement request.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DurationOptionInput {
    /// The session length in minutes.
    pub minutes: u16,
    /// The price amount in the currency's minor unit.
    pub amount_cents: i64,
    /// ISO 4217 currency code.
    pub currency_code: String,
}

/// API request to replace an expert's duration options.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ReplaceDurationOptionsRequest {
    /// The complete replacement option set, in display order.
    pub options: Vec<DurationOptionInput>,
}

/// API response for a successful duration option replacement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceDurationOptionsResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// How many options are now stored.
    pub option_count: usize,
    /// A success message.
    pub message: String,
}

/// API request to add a blockout date.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct AddBlockoutDateRequest {
    /// The blocked calendar day (ISO `YYYY-MM-DD`, expert timezone).
    pub date: String,
}

/// API response for a successful blockout date addition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddBlockoutDateResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// The stored blockout row id.
    pub blockout_date_id: i64,
    /// The blocked day, echoed back.
    pub date: String,
    /// A success message.
    pub message: String,
}

/// API request to book a session with an expert.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BookSessionRequest {
    /// The session start (RFC 3339).
    pub start: String,
    /// The session length in minutes.
    pub duration_minutes: u16,
}

/// API response for a successful session booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSessionResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// The stored session row id.
    pub session_id: i64,
    /// The session start (RFC 3339, UTC).
    pub start: String,
    /// The session end (RFC 3339, UTC).
    pub end: String,
    /// A success message.
    pub message: String,
}

/// API response for the instant-availability endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstantAvailabilityResponse {
    /// The expert's canonical identifier.
    pub expert_id: i64,
    /// Durations bookable for a session starting now.
    pub durations: Vec<DurationPrice>,
}
