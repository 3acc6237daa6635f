// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::{DateTime, Utc};
use mentora_domain::{
    AvailabilityRule, BlockoutDate, DurationOption, ExpertProfile, Interval,
};

/// Everything the availability engine needs about one expert, pre-loaded.
///
/// The engine never performs I/O: callers fetch the expert's configuration
/// and commitments up front and hand them over in this bundle. Repeated
/// computations over the same bundle are fully deterministic.
#[derive(Debug, Clone)]
pub struct ExpertSchedule {
    /// The expert's scheduling profile.
    pub profile: ExpertProfile,
    /// The expert's weekly availability rules.
    pub rules: Vec<AvailabilityRule>,
    /// The session lengths the expert offers, with prices.
    pub duration_options: Vec<DurationOption>,
    /// Days on which the expert is fully unavailable (today onward).
    pub blockout_dates: Vec<BlockoutDate>,
    /// Intervals of the expert's not-yet-ended sessions.
    pub booked_sessions: Vec<Interval>,
}

impl ExpertSchedule {
    /// Creates a schedule bundle with no configuration or commitments.
    #[must_use]
    pub const fn new(profile: ExpertProfile) -> Self {
        Self {
            profile,
            rules: Vec::new(),
            duration_options: Vec::new(),
            blockout_dates: Vec::new(),
            booked_sessions: Vec::new(),
        }
    }

    /// Whether the expert can be booked at all: at least one enabled rule
    /// with a range, and at least one duration option.
    ///
    /// Callers use this before fetching blockout dates and sessions, so an
    /// unconfigured expert costs no further repository queries.
    #[must_use]
    pub fn is_bookable_configured(&self) -> bool {
        !self.duration_options.is_empty() && self.rules.iter().any(AvailabilityRule::is_active)
    }

    /// The commitment in progress at the given instant, if any.
    #[must_use]
    pub fn active_session_at(&self, instant: DateTime<Utc>) -> Option<&Interval> {
        self.booked_sessions
            .iter()
            .find(|session| session.contains(instant))
    }
}
