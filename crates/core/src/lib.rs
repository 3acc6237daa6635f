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

mod engine;
mod error;
mod hash;
mod inputs;
mod instant;
mod result;

#[cfg(test)]
mod tests;

pub use engine::{AvailabilityQuery, compute_availability};
pub use error::CoreError;
pub use hash::result_hash;
pub use inputs::ExpertSchedule;
pub use instant::{InstantQuery, compute_instant_availability};

// Re-export public types
pub use result::{AvailabilityResult, DurationPrice, InstantAvailability};
