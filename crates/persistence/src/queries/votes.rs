// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Raw ballot queries.
//!
//! These read the `votes` table directly and are the authoritative tier
//! when the precomputed tables are empty.

use diesel::SqliteConnection;
use diesel::prelude::*;
use tracing::debug;
use vote_dashboard_domain::{VoteFilter, VoteWithCandidate};

use crate::data_models::{JoinedVoteRow, clamp_count, joined_vote_from_row};
use crate::diesel_schema::{candidates, votes};
use crate::error::PersistenceError;

/// Counts the votes matching `filter`.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn count_votes(
    conn: &mut SqliteConnection,
    filter: &VoteFilter,
) -> Result<u64, PersistenceError> {
    let mut query = votes::table.into_boxed();

    if let Some(candidate_id) = filter.candidate_id {
        query = query.filter(votes::candidate_id.eq(candidate_id.value()));
    }
    if let Some(country) = filter.country.as_deref() {
        query = query.filter(votes::country.eq(country));
    }

    let count: i64 = query.count().get_result(conn)?;
    Ok(clamp_count(count))
}

/// Lists the votes matching `filter`, joined with their candidates, in
/// ascending vote id order.
///
/// Votes whose candidate row is missing are still returned.
///
/// # Errors
///
/// Returns an error if the database cannot be queried.
pub fn list_votes(
    conn: &mut SqliteConnection,
    filter: &VoteFilter,
) -> Result<Vec<VoteWithCandidate>, PersistenceError> {
    let mut query = votes::table
        .left_join(candidates::table.on(candidates::id.eq(votes::candidate_id)))
        .select((
            votes::id,
            votes::candidate_id,
            votes::country,
            votes::region,
            candidates::name.nullable(),
            candidates::slug.nullable(),
            candidates::photo_url.nullable(),
        ))
        .order(votes::id.asc())
        .into_boxed();

    if let Some(candidate_id) = filter.candidate_id {
        query = query.filter(votes::candidate_id.eq(candidate_id.value()));
    }
    if let Some(country) = filter.country.as_deref() {
        query = query.filter(votes::country.eq(country));
    }

    let rows: Vec<JoinedVoteRow> = query.load::<JoinedVoteRow>(conn)?;
    debug!(rows = rows.len(), "Loaded raw votes");

    Ok(rows.into_iter().map(joined_vote_from_row).collect())
}
