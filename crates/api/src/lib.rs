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
    clippy::all
)]

mod error;
mod handlers;
mod query;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    add_blockout_date, book_session, create_expert, get_availability, get_expert,
    get_instant_availability, replace_availability_rules, replace_duration_options,
};
pub use query::{AvailabilityParams, ParsedAvailabilityQuery, QueryParamError};

// Re-export request/response DTOs
pub use request_response::{
    AddBlockoutDateRequest, AddBlockoutDateResponse, BookSessionRequest, BookSessionResponse,
    CreateExpertRequest, DurationOptionInput, ExpertResponse, InstantAvailabilityResponse,
    RangeInput, ReplaceAvailabilityRulesRequest, ReplaceAvailabilityRulesResponse,
    ReplaceDurationOptionsRequest, ReplaceDurationOptionsResponse, RuleInput,
};
