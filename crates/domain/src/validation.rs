// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validation of expert-configured scheduling data.
//!
//! These checks run when configuration is written, not when availability is
//! computed: the availability engine tolerates whatever data exists and
//! silently skips individually malformed ranges.

use crate::error::DomainError;
use crate::types::{AvailabilityRule, DurationOption};
use std::collections::HashSet;

/// The longest bookable session, in minutes (one day).
const MAX_DURATION_MINUTES: u16 = 1440;

/// The longest supported notice period, in minutes (one year).
const MAX_NOTICE_PERIOD_MINUTES: u32 = 525_600;

/// Validates a replacement set of weekly availability rules.
///
/// # Errors
///
/// Returns an error if two rules target the same weekday, or any range is
/// degenerate (start equals end). Ranges whose end precedes their start are
/// accepted: they wrap past midnight during projection.
pub fn validate_availability_rules(rules: &[AvailabilityRule]) -> Result<(), DomainError> {
    let mut seen_weekdays = HashSet::new();
    for rule in rules {
        if !seen_weekdays.insert(rule.weekday) {
            return Err(DomainError::DuplicateRuleWeekday {
                weekday: rule.weekday,
            });
        }
        for range in &rule.ranges {
            if range.start == range.end {
                return Err(DomainError::InvalidTimeRange {
                    start: range.start,
                    end: range.end,
                });
            }
        }
    }
    Ok(())
}

/// Validates a replacement set of duration options.
///
/// # Errors
///
/// Returns an error if a duration is outside 1..=1440 minutes, two options
/// share a length, a price amount is negative, or a currency code is empty.
pub fn validate_duration_options(options: &[DurationOption]) -> Result<(), DomainError> {
    let mut seen_minutes = HashSet::new();
    for option in options {
        if option.minutes == 0 || option.minutes > MAX_DURATION_MINUTES {
            return Err(DomainError::InvalidDurationMinutes {
                minutes: option.minutes,
            });
        }
        if !seen_minutes.insert(option.minutes) {
            return Err(DomainError::DuplicateDurationOption {
                minutes: option.minutes,
            });
        }
        if option.price.amount_cents < 0 {
            return Err(DomainError::NegativePrice {
                amount_cents: option.price.amount_cents,
            });
        }
        if option.price.currency_code.trim().is_empty() {
            return Err(DomainError::InvalidCurrencyCode(
                option.price.currency_code.clone(),
            ));
        }
    }
    Ok(())
}

/// Validates an expert's notice period.
///
/// # Errors
///
/// Returns an error if the notice period exceeds one year.
pub fn validate_notice_period(minutes: u32) -> Result<(), DomainError> {
    if minutes > MAX_NOTICE_PERIOD_MINUTES {
        return Err(DomainError::InvalidNoticePeriod { minutes });
    }
    Ok(())
}
