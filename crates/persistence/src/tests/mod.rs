// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod config_tests;
mod session_tests;

use crate::SqlitePersistence;
use mentora_domain::ExpertProfile;

pub fn create_test_persistence() -> SqlitePersistence {
    SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence")
}

pub fn create_test_expert(persistence: &mut SqlitePersistence) -> i64 {
    let profile = ExpertProfile::new(
        String::from("Test Expert"),
        String::from("America/New_York"),
        60,
    )
    .unwrap();
    persistence
        .create_expert(&profile)
        .unwrap()
        .expert_id
        .unwrap()
}
