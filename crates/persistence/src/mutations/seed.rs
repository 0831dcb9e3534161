// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use diesel::SqliteConnection;
use diesel::prelude::*;
use num_traits::ToPrimitive;
use vote_dashboard_domain::{Candidate, CandidateTotal, CountryTotal, Vote, non_blank};

use crate::backend::sqlite::get_last_insert_rowid;
use crate::data_models::{CandidateRow, CandidateTotalRow, NewCountryTotalRow, VoteRow};
use crate::diesel_schema::{candidates, vote_aggregates, vote_by_country, votes};
use crate::error::PersistenceError;

fn stored_count(count: u64) -> Result<i64, PersistenceError> {
    count
        .to_i64()
        .ok_or(PersistenceError::CountOutOfRange(count))
}

/// Inserts a candidate.
///
/// # Errors
///
/// Returns an error if the id or slug is already taken.
pub fn insert_candidate(
    conn: &mut SqliteConnection,
    candidate: &Candidate,
) -> Result<(), PersistenceError> {
    diesel::insert_into(candidates::table)
        .values(CandidateRow::from(candidate))
        .execute(conn)?;
    Ok(())
}

/// Inserts a ballot. Blank countries and regions are stored as NULL.
///
/// # Errors
///
/// Returns an error if the id is taken or the candidate does not exist.
pub fn insert_vote(conn: &mut SqliteConnection, vote: &Vote) -> Result<(), PersistenceError> {
    diesel::insert_into(votes::table)
        .values(VoteRow::from(vote))
        .execute(conn)?;
    Ok(())
}

/// Inserts or replaces the precomputed total for a candidate.
///
/// # Errors
///
/// Returns an error if the write fails or the total does not fit.
pub fn upsert_candidate_total(
    conn: &mut SqliteConnection,
    total: &CandidateTotal,
) -> Result<(), PersistenceError> {
    let row: CandidateTotalRow = CandidateTotalRow {
        candidate_id: total.candidate_id.value(),
        total_votes: stored_count(total.total_votes)?,
    };

    diesel::insert_into(vote_aggregates::table)
        .values(row)
        .on_conflict(vote_aggregates::candidate_id)
        .do_update()
        .set(vote_aggregates::total_votes.eq(row.total_votes))
        .execute(conn)?;
    Ok(())
}

/// Appends a precomputed per-country row and returns its row id.
///
/// # Errors
///
/// Returns an error if the write fails or the total does not fit.
pub fn insert_country_total(
    conn: &mut SqliteConnection,
    total: &CountryTotal,
) -> Result<i64, PersistenceError> {
    let row: NewCountryTotalRow = NewCountryTotalRow {
        country: non_blank(total.country.as_deref()),
        candidate_id: total.candidate.id.value(),
        candidate_name: Some(total.candidate.name.clone()),
        candidate_slug: non_blank(Some(total.candidate.slug.as_str())),
        total_votes: stored_count(total.total_votes)?,
    };

    diesel::insert_into(vote_by_country::table)
        .values(&row)
        .execute(conn)?;

    get_last_insert_rowid(conn)
}
