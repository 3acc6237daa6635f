// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use mentora_domain::DomainError;

/// Errors that can occur while computing availability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// The queried window does not form a valid interval.
    InvalidDateRange {
        /// The requested window start.
        from: DateTime<Utc>,
        /// The requested window end.
        to: DateTime<Utc>,
    },
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The computed result could not be serialized for hashing.
    Serialization(String),
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateRange { from, to } => {
                write!(f, "Invalid date range: from {from} to {to}")
            }
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Serialization(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
