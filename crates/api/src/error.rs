// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::query::QueryParamError;
use mentora::CoreError;
use mentora_domain::DomainError;
use mentora_persistence::PersistenceError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API
/// contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked
/// directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidInterval { start, end } => ApiError::InvalidInput {
            field: String::from("interval"),
            message: format!("End {end} must be after start {start}"),
        },
        DomainError::InvalidTimezone(name) => ApiError::InvalidInput {
            field: String::from("timezone"),
            message: format!("'{name}' is not a known IANA zone"),
        },
        DomainError::InvalidWeekday(value) => ApiError::InvalidInput {
            field: String::from("weekday"),
            message: format!("'{value}' is not a weekday"),
        },
        DomainError::DuplicateRuleWeekday { weekday } => ApiError::DomainRuleViolation {
            rule: String::from("one_rule_per_weekday"),
            message: format!("More than one rule targets {weekday}"),
        },
        DomainError::InvalidTimeRange { start, end } => ApiError::InvalidInput {
            field: String::from("ranges"),
            message: format!("Range {start} to {end} is empty"),
        },
        DomainError::InvalidDurationMinutes { minutes } => ApiError::InvalidInput {
            field: String::from("minutes"),
            message: format!("{minutes} minutes is outside 1-1440"),
        },
        DomainError::DuplicateDurationOption { minutes } => ApiError::DomainRuleViolation {
            rule: String::from("unique_duration_options"),
            message: format!("Duration {minutes} minutes is configured twice"),
        },
        DomainError::NegativePrice { amount_cents } => ApiError::InvalidInput {
            field: String::from("amount_cents"),
            message: format!("{amount_cents} is negative"),
        },
        DomainError::InvalidCurrencyCode(code) => ApiError::InvalidInput {
            field: String::from("currency_code"),
            message: format!("'{code}' is not a currency code"),
        },
        DomainError::InvalidNoticePeriod { minutes } => ApiError::InvalidInput {
            field: String::from("notice_period_minutes"),
            message: format!("{minutes} minutes exceeds one year"),
        },
        DomainError::DateArithmeticOverflow { operation } => ApiError::InvalidInput {
            field: String::from("date"),
            message: format!("Date arithmetic overflow while {operation}"),
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked
/// directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::InvalidDateRange { from, to } => ApiError::InvalidInput {
            field: String::from("date_range"),
            message: format!("'{from}' to '{to}' is not a valid window"),
        },
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Serialization(msg) => ApiError::Internal {
            message: format!("Result serialization failed: {msg}"),
        },
    }
}

impl From<PersistenceError> for ApiError {
    fn from(err: PersistenceError) -> Self {
        match err {
            PersistenceError::ExpertNotFound(expert_id) => Self::ResourceNotFound {
                resource_type: String::from("Expert"),
                message: format!("Expert {expert_id} does not exist"),
            },
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<QueryParamError> for ApiError {
    fn from(err: QueryParamError) -> Self {
        Self::InvalidInput {
            field: String::from(err.parameter()),
            message: err.to_string(),
        }
    }
}
