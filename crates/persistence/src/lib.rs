// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the Mentora Booking System.
//!
//! This crate stores expert scheduling configuration (profiles, weekly
//! availability rules, duration options, blockout dates) and booked
//! sessions. It is built on Diesel over `SQLite` with embedded migrations.
//!
//! ## Testing Philosophy
//!
//! - Standard tests (`cargo test`) run against unique shared in-memory
//!   databases, named from an atomic counter for deterministic isolation
//! - No external database infrastructure is ever required
//!
//! The availability read path is strictly read-only: computing
//! availability never writes through this crate.

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
#![allow(clippy::multiple_crate_versions)]

mod backend;
mod data_models;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

use chrono::{DateTime, Utc};
use diesel::SqliteConnection;
use mentora_domain::{AvailabilityRule, BlockoutDate, DurationOption, ExpertProfile, Interval};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// This ensures deterministic test isolation by eliminating time-based
/// collisions. Each call to `new_in_memory()` receives a unique sequential
/// ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The `SQLite`-backed persistence adapter.
///
/// Owns a single connection; callers serialize access (the server wraps
/// the adapter in a mutex).
pub struct SqlitePersistence {
    conn: SqliteConnection,
}

impl SqlitePersistence {
    /// Creates a persistence adapter backed by a unique in-memory database.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization or migration fails.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        // Create a unique shared in-memory database name per call so tests
        // are isolated. Use atomic counter instead of timestamp to
        // eliminate race conditions.
        let db_id: u64 = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name: String = format!("memdb_mentora_{db_id}");
        let shared_memory_url: String = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::initialize_database(&shared_memory_url)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a persistence adapter backed by a file database.
    ///
    /// # Errors
    ///
    /// Returns an error if initialization or migration fails.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let database_url: String = path.as_ref().to_string_lossy().into_owned();
        let mut conn: SqliteConnection = backend::initialize_database(&database_url)?;
        backend::enable_wal_mode(&mut conn)?;
        backend::verify_foreign_key_enforcement(&mut conn)?;
        Ok(Self { conn })
    }

    /// Inserts a new expert and returns the profile with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_expert(
        &mut self,
        profile: &ExpertProfile,
    ) -> Result<ExpertProfile, PersistenceError> {
        let expert_id: i64 = mutations::create_expert(&mut self.conn, profile)?;
        Ok(profile.clone().with_id(expert_id))
    }

    /// Loads an expert's profile.
    ///
    /// # Errors
    ///
    /// Returns `ExpertNotFound` if no such expert exists.
    pub fn get_expert(&mut self, expert_id: i64) -> Result<ExpertProfile, PersistenceError> {
        queries::get_expert(&mut self.conn, expert_id)
    }

    /// Replaces an expert's weekly availability rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_availability_rules(
        &mut self,
        expert_id: i64,
        rules: &[AvailabilityRule],
    ) -> Result<(), PersistenceError> {
        mutations::replace_availability_rules(&mut self.conn, expert_id, rules)
    }

    /// Loads an expert's weekly availability rules.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn availability_rules_for(
        &mut self,
        expert_id: i64,
    ) -> Result<Vec<AvailabilityRule>, PersistenceError> {
        queries::availability_rules_for(&mut self.conn, expert_id)
    }

    /// Replaces an expert's duration options.
    ///
    /// # Errors
    ///
    /// Returns an error if the transaction fails.
    pub fn replace_duration_options(
        &mut self,
        expert_id: i64,
        options: &[DurationOption],
    ) -> Result<(), PersistenceError> {
        mutations::replace_duration_options(&mut self.conn, expert_id, options)
    }

    /// Loads an expert's duration options in configured order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn duration_options_for(
        &mut self,
        expert_id: i64,
    ) -> Result<Vec<DurationOption>, PersistenceError> {
        queries::duration_options_for(&mut self.conn, expert_id)
    }

    /// Adds a blockout date for an expert.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails (including a duplicate date).
    pub fn add_blockout_date(
        &mut self,
        expert_id: i64,
        date: time::Date,
    ) -> Result<i64, PersistenceError> {
        mutations::add_blockout_date(&mut self.conn, expert_id, date)
    }

    /// Loads an expert's blockout dates on or after the given day.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn blockout_dates_on_or_after(
        &mut self,
        expert_id: i64,
        from: time::Date,
    ) -> Result<Vec<BlockoutDate>, PersistenceError> {
        queries::blockout_dates_on_or_after(&mut self.conn, expert_id, from)
    }

    /// Records a booked session interval.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn record_session(
        &mut self,
        expert_id: i64,
        interval: &Interval,
    ) -> Result<i64, PersistenceError> {
        mutations::record_session(&mut self.conn, expert_id, interval)
    }

    /// Loads the intervals of an expert's not-yet-ended sessions.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn future_sessions_for(
        &mut self,
        expert_id: i64,
        now: DateTime<Utc>,
    ) -> Result<Vec<Interval>, PersistenceError> {
        queries::future_sessions_for(&mut self.conn, expert_id, now)
    }

    /// Loads the intervals of an expert's sessions overlapping the given
    /// one.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a stored row is malformed.
    pub fn overlapping_sessions(
        &mut self,
        expert_id: i64,
        interval: &Interval,
    ) -> Result<Vec<Interval>, PersistenceError> {
        queries::overlapping_sessions(&mut self.conn, expert_id, interval)
    }
}
