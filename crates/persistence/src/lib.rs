// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Persistence layer for the vote dashboard.
//!
//! This crate stores candidates, ballots, and the two precomputed
//! aggregate tables in `SQLite` through Diesel, and exposes them through
//! the [`QueryGateway`] contract.
//!
//! ## Tables
//!
//! - `candidates`: one row per candidate
//! - `votes`: one row per ballot
//! - `vote_aggregates`: precomputed per-candidate totals
//! - `vote_by_country`: precomputed per-(country, candidate) totals
//!
//! The aggregate tables are maintained outside this service and may be
//! stale or empty. This crate reports what is stored; the decision to fall
//! back to raw ballots belongs to the caller.
//!
//! ## Parsing Boundary
//!
//! Stored rows become domain types in `data_models` and nowhere else.

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

use diesel::{Connection, SqliteConnection};
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;
use vote_dashboard::QueryGateway;
use vote_dashboard_domain::{
    Candidate, CandidateId, CandidateTotal, CountryTotal, Vote, VoteFilter, VoteWithCandidate,
};

mod backend;
mod data_models;
mod dataset;
mod diesel_schema;
mod error;
mod mutations;
mod queries;

#[cfg(test)]
mod tests;

pub use dataset::{CountryTotalSeed, Dataset};
pub use error::PersistenceError;

/// Atomic counter for generating unique in-memory database names.
///
/// Each call to `new_in_memory()` receives a unique sequential ID.
static DB_COUNTER: AtomicU64 = AtomicU64::new(0);

/// `SQLite` persistence adapter for the vote store.
pub struct Persistence {
    conn: SqliteConnection,
}

impl Persistence {
    /// Creates a new persistence adapter with an in-memory `SQLite` database.
    ///
    /// Each call receives a unique database instance via atomic counter,
    /// so tests never share state.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be initialized.
    pub fn new_in_memory() -> Result<Self, PersistenceError> {
        let db_id = DB_COUNTER.fetch_add(1, Ordering::SeqCst);
        let db_name = format!("memdb_votes_{db_id}");
        let shared_memory_url = format!("file:{db_name}?mode=memory&cache=shared");

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(&shared_memory_url)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Creates a new persistence adapter with a file-based `SQLite` database.
    ///
    /// # Arguments
    ///
    /// * `path` - The path to the `SQLite` database file
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or initialized.
    pub fn new_with_file<P: AsRef<Path>>(path: P) -> Result<Self, PersistenceError> {
        let path_str = path.as_ref().to_str().ok_or_else(|| {
            PersistenceError::InvalidPath(path.as_ref().display().to_string())
        })?;

        let mut conn: SqliteConnection = backend::sqlite::initialize_database(path_str)?;
        backend::sqlite::enable_wal_mode(&mut conn)?;
        backend::sqlite::verify_foreign_key_enforcement(&mut conn)?;

        Ok(Self { conn })
    }

    /// Verifies that foreign key enforcement is enabled.
    ///
    /// # Errors
    ///
    /// Returns an error if foreign key enforcement is not enabled.
    pub fn verify_foreign_key_enforcement(&mut self) -> Result<(), PersistenceError> {
        backend::sqlite::verify_foreign_key_enforcement(&mut self.conn)
    }

    // ========================================================================
    // Seeding
    // ========================================================================

    /// Inserts a candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or slug is already taken.
    pub fn insert_candidate(&mut self, candidate: &Candidate) -> Result<(), PersistenceError> {
        mutations::insert_candidate(&mut self.conn, candidate)
    }

    /// Inserts a ballot.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is taken or the candidate does not exist.
    pub fn insert_vote(&mut self, vote: &Vote) -> Result<(), PersistenceError> {
        mutations::insert_vote(&mut self.conn, vote)
    }

    /// Inserts or replaces the precomputed total for a candidate.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn upsert_candidate_total(&mut self, total: &CandidateTotal) -> Result<(), PersistenceError> {
        mutations::upsert_candidate_total(&mut self.conn, total)
    }

    /// Appends a precomputed per-country row and returns its row id.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn insert_country_total(&mut self, total: &CountryTotal) -> Result<i64, PersistenceError> {
        mutations::insert_country_total(&mut self.conn, total)
    }

    /// Loads a dataset in a single transaction.
    ///
    /// Either every row is written or none is.
    ///
    /// # Errors
    ///
    /// Returns the first write error; the store is left unchanged.
    pub fn load_dataset(&mut self, dataset: &Dataset) -> Result<(), PersistenceError> {
        self.conn.transaction::<(), PersistenceError, _>(|conn| {
            for candidate in &dataset.candidates {
                mutations::insert_candidate(conn, candidate)?;
            }
            for vote in &dataset.votes {
                mutations::insert_vote(conn, vote)?;
            }
            for total in &dataset.candidate_totals {
                mutations::upsert_candidate_total(conn, total)?;
            }
            for seed in &dataset.country_totals {
                mutations::insert_country_total(conn, &dataset.country_total(seed))?;
            }
            Ok(())
        })?;

        info!(
            candidates = dataset.candidates.len(),
            votes = dataset.votes.len(),
            candidate_totals = dataset.candidate_totals.len(),
            country_totals = dataset.country_totals.len(),
            "Loaded dataset"
        );
        Ok(())
    }
}

impl QueryGateway for Persistence {
    type Error = PersistenceError;

    fn get_candidate(&mut self, id: CandidateId) -> Result<Option<Candidate>, PersistenceError> {
        queries::get_candidate(&mut self.conn, id)
    }

    fn get_aggregate_by_candidate(
        &mut self,
        id: CandidateId,
    ) -> Result<Option<CandidateTotal>, PersistenceError> {
        queries::get_aggregate_by_candidate(&mut self.conn, id)
    }

    fn count_votes(&mut self, filter: &VoteFilter) -> Result<u64, PersistenceError> {
        queries::count_votes(&mut self.conn, filter)
    }

    fn get_votes_by_country(
        &mut self,
        candidate_slug: Option<&str>,
    ) -> Result<Vec<CountryTotal>, PersistenceError> {
        queries::get_votes_by_country(&mut self.conn, candidate_slug)
    }

    fn get_all_aggregates(&mut self) -> Result<Vec<CandidateTotal>, PersistenceError> {
        queries::get_all_aggregates(&mut self.conn)
    }

    fn get_votes_with_region(
        &mut self,
        country: &str,
    ) -> Result<Vec<VoteWithCandidate>, PersistenceError> {
        queries::list_votes(&mut self.conn, &VoteFilter::for_country(country))
    }

    fn list_votes(&mut self, filter: &VoteFilter) -> Result<Vec<VoteWithCandidate>, PersistenceError> {
        queries::list_votes(&mut self.conn, filter)
    }
}
