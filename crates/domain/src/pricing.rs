// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::types::{DurationOption, Price};

/// Looks up the price for a session of the given length.
///
/// Prices are carried by the expert's configured duration options; this is
/// the single place the duration-to-price mapping is resolved.
#[must_use]
pub fn price_for_duration(options: &[DurationOption], minutes: u16) -> Option<&Price> {
    options
        .iter()
        .find(|option| option.minutes == minutes)
        .map(|option| &option.price)
}
