// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Availability query parameter parsing.
//!
//! The HTTP layer hands raw query strings through unchanged; everything is
//! parsed and defaulted here so the server never touches date handling.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use mentora::AvailabilityQuery;
use serde::Deserialize;
use thiserror::Error;

/// Query parameter errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryParamError {
    /// A required parameter was not supplied.
    #[error("Parameter '{name}' is required")]
    Missing { name: &'static str },

    /// A timestamp parameter could not be parsed.
    #[error("'{value}' is not a valid RFC 3339 timestamp")]
    InvalidTimestamp { name: &'static str, value: String },

    /// The selected date could not be parsed.
    #[error("'{value}' is not a valid ISO date")]
    InvalidDate { value: String },

    /// The selected duration could not be parsed.
    #[error("'{value}' is not a valid duration in minutes")]
    InvalidDuration { value: String },

    /// The timezone is not a known IANA zone.
    #[error("'{value}' is not a known IANA zone")]
    InvalidTimezone { value: String },
}

impl QueryParamError {
    /// The offending parameter name.
    #[must_use]
    pub const fn parameter(&self) -> &'static str {
        match self {
            Self::Missing { name } | Self::InvalidTimestamp { name, .. } => *name,
            Self::InvalidDate { .. } => "selected_date",
            Self::InvalidDuration { .. } => "selected_duration",
            Self::InvalidTimezone { .. } => "timezone",
        }
    }
}

/// Raw query parameters of the availability endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AvailabilityParams {
    /// Window start, RFC 3339 (required).
    pub from: Option<String>,
    /// Window end, RFC 3339 (required).
    pub to: Option<String>,
    /// Narrowing calendar date (user timezone), ISO.
    pub selected_date: Option<String>,
    /// Narrowing duration in minutes.
    pub selected_duration: Option<String>,
    /// Return every slot regardless of `selected_date`.
    pub include_all_time_slots: Option<bool>,
    /// The requesting user's IANA timezone; defaults to UTC.
    pub timezone: Option<String>,
}

/// A fully parsed availability query: the engine query plus the requesting
/// user's timezone.
#[derive(Debug, Clone, Copy)]
pub struct ParsedAvailabilityQuery {
    /// The engine query.
    pub query: AvailabilityQuery,
    /// The requesting user's timezone.
    pub user_timezone: Tz,
}

impl AvailabilityParams {
    /// Parses and defaults the raw parameters.
    ///
    /// # Errors
    ///
    /// Returns an error naming the first offending parameter.
    pub fn parse(&self) -> Result<ParsedAvailabilityQuery, QueryParamError> {
        let from: DateTime<Utc> = parse_timestamp("from", self.from.as_deref())?;
        let to: DateTime<Utc> = parse_timestamp("to", self.to.as_deref())?;

        let selected_date: Option<NaiveDate> = self
            .selected_date
            .as_deref()
            .map(|value| {
                NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
                    QueryParamError::InvalidDate {
                        value: value.to_string(),
                    }
                })
            })
            .transpose()?;

        let selected_duration: Option<u16> = self
            .selected_duration
            .as_deref()
            .map(|value| {
                value
                    .parse::<u16>()
                    .map_err(|_| QueryParamError::InvalidDuration {
                        value: value.to_string(),
                    })
            })
            .transpose()?;

        let user_timezone: Tz = match self.timezone.as_deref() {
            None | Some("") => Tz::UTC,
            Some(value) => value
                .parse()
                .map_err(|_| QueryParamError::InvalidTimezone {
                    value: value.to_string(),
                })?,
        };

        Ok(ParsedAvailabilityQuery {
            query: AvailabilityQuery {
                from,
                to,
                selected_date,
                selected_duration,
                include_all_time_slots: self.include_all_time_slots.unwrap_or(false),
            },
            user_timezone,
        })
    }
}

fn parse_timestamp(
    name: &'static str,
    value: Option<&str>,
) -> Result<DateTime<Utc>, QueryParamError> {
    let value: &str = value.ok_or(QueryParamError::Missing { name })?;
    DateTime::parse_from_rfc3339(value)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|_| QueryParamError::InvalidTimestamp {
            name,
            value: value.to_string(),
        })
}
