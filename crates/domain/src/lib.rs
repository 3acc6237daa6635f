// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod conflict;
mod error;
mod interval;
mod pricing;
mod recurrence;
mod slot;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use conflict::{
    BookableSlots, BookingConstraints, filter_bookable_slots, is_slot_bookable,
    next_available_slot,
};
pub use error::DomainError;
pub use interval::Interval;
pub use pricing::price_for_duration;
pub use recurrence::project_weekly_slots;
pub use slot::{SlotId, TimeSlot, slot_id};

// Re-export public types
pub use types::{
    AvailabilityRule, BlockoutDate, DurationOption, ExpertProfile, Price, TimeRange, Weekday,
};
pub use validation::{
    validate_availability_rules, validate_duration_options, validate_notice_period,
};
